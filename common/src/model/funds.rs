use serde::{Deserialize, Serialize};

/// Disbursement totals shown on the funds page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsSummary {
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub total_amount_sanctioned: f64,
    #[serde(default)]
    pub remaining_amount: f64,
    #[serde(default)]
    pub difference: f64,
}

impl FundsSummary {
    /// Card titles paired with their values, in display order.
    pub fn cards(&self) -> [(&'static str, f64); 4] {
        [
            ("Total Amount", self.total_amount),
            ("Total Amount Sanctioned", self.total_amount_sanctioned),
            ("Remaining Amount", self.remaining_amount),
            ("Difference", self.difference),
        ]
    }
}
