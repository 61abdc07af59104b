//! Data models for device records and vessel information.

pub mod config;
pub mod record;
pub mod vessel;

pub use config::DevscanConfig;
pub use record::{DeviceRecord, DeviceType};
pub use vessel::VesselInfo;
