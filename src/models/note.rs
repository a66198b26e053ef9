//! Free-form note model.

use serde::{Deserialize, Serialize};

use super::{BudgetId, FinancialImpact, NoteId, NoteKind, NoteMood, SavingsId, TransactionId};

/// A free-form note, optionally linked to other entities.
///
/// The related-ID lists are loose references; nothing enforces that the
/// referenced entities still exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier.
    pub id: NoteId,
    /// Short title.
    pub title: String,
    /// Note body.
    #[serde(default)]
    pub content: String,
    /// Which of the six note categories this belongs to.
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Mood the user attached, if any.
    #[serde(default)]
    pub mood: Option<NoteMood>,
    /// Financial impact the user attached, if any.
    #[serde(default)]
    pub financial_impact: Option<FinancialImpact>,
    /// Associated amount (>= 0), if any.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Grouping category, if any.
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Transactions this note refers to.
    #[serde(default)]
    pub related_transaction_ids: Vec<TransactionId>,
    /// Savings goals this note refers to.
    #[serde(default)]
    pub related_savings_ids: Vec<SavingsId>,
    /// Budgets this note refers to.
    #[serde(default)]
    pub related_budget_ids: Vec<BudgetId>,
    /// Note date (`YYYY-MM-DD`).
    pub date: String,
    /// Creation timestamp (ISO-8601 instant).
    pub created_at: String,
    /// Last-edit timestamp (ISO-8601 instant).
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_note() {
        let json = r#"{
            "id": "n-001",
            "title": "Car repair",
            "content": "Brakes need replacing next month",
            "type": "warning",
            "mood": "worried",
            "financialImpact": "negative",
            "amount": 350,
            "category": "car",
            "tags": ["car", "urgent"],
            "relatedTransactionIds": ["t-001"],
            "relatedSavingsIds": [],
            "relatedBudgetIds": ["b-001"],
            "date": "2024-01-20",
            "createdAt": "2024-01-20T08:00:00.000Z",
            "updatedAt": "2024-01-21T10:00:00.000Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.kind, NoteKind::Warning);
        assert_eq!(note.mood, Some(NoteMood::Worried));
        assert_eq!(note.financial_impact, Some(FinancialImpact::Negative));
        assert_eq!(note.tags, vec!["car".to_owned(), "urgent".to_owned()]);
        assert_eq!(note.related_budget_ids, vec![BudgetId::new("b-001".to_owned())]);
    }

    #[test]
    fn deserialize_minimal_note() {
        let json = r#"{
            "id": "n-002",
            "title": "Remember",
            "type": "general",
            "date": "2024-01-01",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert!(note.content.is_empty());
        assert!(note.mood.is_none());
        assert!(note.amount.is_none());
        assert!(note.tags.is_empty());
        assert!(note.related_transaction_ids.is_empty());
    }

    #[test]
    fn serialize_roundtrip() {
        let note = Note {
            id: NoteId::new("n-1".to_owned()),
            title: "Milestone".to_owned(),
            content: "Hit 50% of the vacation goal".to_owned(),
            kind: NoteKind::Achievement,
            mood: Some(NoteMood::Happy),
            financial_impact: Some(FinancialImpact::Positive),
            amount: Some(1000.0),
            category: None,
            tags: vec!["savings".to_owned()],
            related_transaction_ids: Vec::new(),
            related_savings_ids: vec![SavingsId::new("s-1".to_owned())],
            related_budget_ids: Vec::new(),
            date: "2024-03-01".to_owned(),
            created_at: "2024-03-01T00:00:00.000Z".to_owned(),
            updated_at: "2024-03-01T00:00:00.000Z".to_owned(),
        };
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains(r#""type":"achievement""#));
        assert!(json.contains(r#""relatedSavingsIds":["s-1"]"#));
        let deserialized: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, note);
    }
}
