//! Category budget model.

use serde::{Deserialize, Serialize};

use super::{BudgetId, BudgetPeriod};

/// A spending limit for a category over a reset period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Unique identifier.
    pub id: BudgetId,
    /// Category this budget constrains.
    pub category: String,
    /// Spending ceiling for the period (>= 0).
    pub limit: f64,
    /// Amount already spent in the current period (>= 0).
    pub spent: f64,
    /// How often the budget resets.
    pub period: BudgetPeriod,
    /// Period start date (`YYYY-MM-DD`).
    pub start_date: String,
    /// Period end date (`YYYY-MM-DD`).
    pub end_date: String,
    /// When `spent` was last reset, if ever.
    #[serde(default)]
    pub last_reset_date: Option<String>,
    /// Creation timestamp (ISO-8601 instant).
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_budget() {
        let json = r#"{
            "id": "b-001",
            "category": "Groceries",
            "limit": 500,
            "spent": 123.45,
            "period": "monthly",
            "startDate": "2024-01-01",
            "endDate": "2024-01-31",
            "lastResetDate": "2024-01-01",
            "createdAt": "2023-12-31T23:00:00.000Z"
        }"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.category, "Groceries");
        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert!((budget.limit - 500.0).abs() < f64::EPSILON);
        assert_eq!(budget.last_reset_date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn deserialize_without_reset_date() {
        let json = r#"{
            "id": "b-002",
            "category": "Fun",
            "limit": 50,
            "spent": 0,
            "period": "weekly",
            "startDate": "2024-01-01",
            "endDate": "2024-01-07",
            "createdAt": "2024-01-01T00:00:00.000Z"
        }"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert!(budget.last_reset_date.is_none());
        assert_eq!(budget.period, BudgetPeriod::Weekly);
    }

    #[test]
    fn serialize_roundtrip() {
        let budget = Budget {
            id: BudgetId::new("b-1".to_owned()),
            category: "Transport".to_owned(),
            limit: 120.0,
            spent: 30.0,
            period: BudgetPeriod::Custom,
            start_date: "2024-01-01".to_owned(),
            end_date: "2024-03-31".to_owned(),
            last_reset_date: None,
            created_at: "2024-01-01T00:00:00.000Z".to_owned(),
        };
        let json = serde_json::to_string(&budget).unwrap();
        assert!(json.contains(r#""startDate":"2024-01-01""#));
        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, budget);
    }
}
