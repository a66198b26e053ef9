//! Savings goal model.

use serde::{Deserialize, Serialize};

use super::SavingsId;

/// A savings goal the user is putting money towards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    /// Unique identifier.
    pub id: SavingsId,
    /// Display name of the goal.
    pub name: String,
    /// Target amount to reach (>= 0).
    pub target: f64,
    /// Amount saved so far (>= 0).
    pub current: f64,
    /// Optional deadline date (`YYYY-MM-DD`).
    #[serde(default)]
    pub deadline: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Grouping category.
    pub category: String,
    /// User-assigned priority label.
    pub priority: String,
    /// Icon name shown next to the goal.
    pub icon: String,
    /// Creation timestamp (ISO-8601 instant).
    pub created_at: String,
}
