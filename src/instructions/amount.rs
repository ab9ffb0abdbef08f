//! UI-scaled token amounts carried by the checked token instructions.

use serde::Serialize;

/// A raw token amount alongside its decimal scaling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenAmount {
    /// Raw integer amount, as a string so it survives JSON number limits.
    pub amount: String,
    pub decimals: u8,
    /// `amount / 10^decimals`.
    pub ui_amount: f64,
}

impl UiTokenAmount {
    pub fn new(amount: u64, decimals: u8) -> Self {
        Self {
            amount: amount.to_string(),
            decimals,
            ui_amount: amount as f64 / 10f64.powi(i32::from(decimals)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1_500_000, 6, 1.5)]
    #[case(1, 0, 1.0)]
    #[case(0, 9, 0.0)]
    #[case(25, 1, 2.5)]
    #[case(1_000_000_000, 9, 1.0)]
    fn test_ui_amount_scaling(#[case] amount: u64, #[case] decimals: u8, #[case] expected: f64) {
        let ui = UiTokenAmount::new(amount, decimals);
        assert_eq!(ui.ui_amount, expected);
        assert_eq!(ui.amount, amount.to_string());
        assert_eq!(ui.decimals, decimals);
    }

    #[test]
    fn test_serializes_three_fields() {
        let value = serde_json::to_value(UiTokenAmount::new(1_500_000, 6)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "amount": "1500000", "decimals": 6, "uiAmount": 1.5 })
        );
    }
}
