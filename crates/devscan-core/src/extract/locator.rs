//! Token-index location of product codes and serials within one line.

use super::rules;

/// Token indices found by scanning one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldIndices {
    /// Index of the last token matching a product-code rule.
    pub code: Option<usize>,
    /// Index of the last token matching any serial rule.
    pub serial: Option<usize>,
}

/// Scan tokens left to right. The scan does not stop at a hit, so a later
/// matching token overwrites an earlier one for both fields; per token,
/// serial rules are evaluated in order until the first hit. A token claimed
/// as a product code is not also considered as a serial.
pub fn locate(tokens: &[&str]) -> FieldIndices {
    let mut indices = FieldIndices::default();

    for (idx, token) in tokens.iter().enumerate() {
        if rules::is_product_code(token) {
            indices.code = Some(idx);
        } else if rules::is_serial(token) {
            indices.serial = Some(idx);
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_code_and_serial() {
        let tokens = vec!["AXIOM", "2", "PRO", "9", "E12345", "TAZ2ZKB"];
        let indices = locate(&tokens);
        assert_eq!(indices.code, Some(4));
        assert_eq!(indices.serial, Some(5));
    }

    #[test]
    fn test_locate_last_match_wins() {
        // Two code tokens: the later one is recorded.
        let tokens = vec!["E12345", "V99999", "TAZ2ZKB"];
        assert_eq!(locate(&tokens).code, Some(1));

        // Two serial-shaped tokens: the later one is recorded.
        let tokens = vec!["E12345", "TAZ2ZKB", "TAR3WR7"];
        assert_eq!(locate(&tokens).serial, Some(2));
    }

    #[test]
    fn test_code_token_is_not_a_serial() {
        // V99999 is a product code; the line has no serial at all.
        let tokens = vec!["GMDSS", "V99999"];
        let indices = locate(&tokens);
        assert_eq!(indices.code, Some(1));
        assert_eq!(indices.serial, None);
    }

    #[test]
    fn test_locate_nothing() {
        let tokens = vec!["no", "match", "at", "all"];
        assert_eq!(locate(&tokens), FieldIndices::default());
    }
}
