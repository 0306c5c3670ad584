//! Masking for sensitive lookup fields before they reach any log sink.

/// Mask a beneficiary account, keeping only the last 4 characters.
pub fn mask_account(account: &str) -> String {
    mask_keeping(account, 4)
}

/// Mask a tracking key or reference, keeping only the last 3 characters.
pub fn mask_criterion(criterion: &str) -> String {
    mask_keeping(criterion, 3)
}

fn mask_keeping(value: &str, keep: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= keep {
        return "***".to_string();
    }
    let suffix: String = chars[chars.len() - keep..].iter().collect();
    format!("***{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_account_keeps_last_four() {
        assert_eq!(mask_account("012345678901234567"), "***4567");
    }

    #[test]
    fn test_mask_criterion_keeps_last_three() {
        assert_eq!(mask_criterion("ABC123XYZ"), "***XYZ");
    }

    #[test]
    fn test_short_values_fully_masked() {
        assert_eq!(mask_account("1234"), "***");
        assert_eq!(mask_criterion("ab"), "***");
        assert_eq!(mask_criterion(""), "***");
    }
}
