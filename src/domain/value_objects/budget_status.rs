//! Budget health classification for a scheme

use serde::{Deserialize, Serialize};

/// Budget health, derived from `(spending, budget)`
///
/// Exactly 90% of budget is still `Within`; the approaching band is
/// strictly between 90% and 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    Within,
    Approaching,
    Over,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Within => "Within Budget",
            BudgetStatus::Approaching => "Approaching Budget Limit",
            BudgetStatus::Over => "Over Budget - Action Required",
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, BudgetStatus::Over)
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
