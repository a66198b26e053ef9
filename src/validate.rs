//! Per-entity-kind validation of untyped values.
//!
//! Records restored from a backup (or pasted in by the user) arrive as
//! arbitrary JSON. Each function here takes one [`Value`] of any shape and
//! returns either a normalized entity or `None`. Rejection is always a
//! value, never a panic, and rejecting one record has no effect on its
//! siblings; callers simply filter the `None`s out.
//!
//! Normalization rules:
//!
//! - Required fields (ids, names, amounts, mandatory keywords) must be
//!   present with the right primitive type or the record is rejected. No id
//!   is ever synthesized.
//! - Optional fields get a documented default when absent or wrongly typed.
//! - Monetary fields are clamped to a minimum of zero, valid or not.
//! - Keyword fields without a documented default reject the record on
//!   unknown values; `period` falls back to
//!   [`crate::models::BudgetPeriod::Monthly`], and the optional note
//!   keywords fall back to absent.

use core::str::FromStr;

use serde_json::{Map, Value};

use crate::clock::Clock;
use crate::models::{
    Budget, BudgetId, FinancialImpact, Note, NoteId, NoteMood, Savings, SavingsId,
    SavingsTransaction, SavingsTransactionId, Transaction, TransactionId,
};

// ── Entity validators ───────────────────────────────────────────────────

/// Validates one transaction record.
///
/// Requires `id` and `category` as strings, `amount` as a number and
/// `type` as a known keyword. `date`/`createdAt` default to the clock's
/// current day/instant.
#[must_use]
pub fn transaction(value: &Value, clock: &dyn Clock) -> Option<Transaction> {
    let obj = object(value)?;
    Some(Transaction {
        id: TransactionId::new(required_text(obj, "id")?),
        amount: required_amount(obj, "amount")?,
        kind: required_keyword(obj, "type")?,
        category: required_text(obj, "category")?,
        description: text_or(obj, "description", ""),
        date: date_or_today(obj, "date", clock),
        created_at: instant_or_now(obj, "createdAt", clock),
    })
}

/// Validates one budget record.
///
/// Requires `id`, `category` and `limit`. An unknown `period` falls back
/// to monthly rather than rejecting.
#[must_use]
pub fn budget(value: &Value, clock: &dyn Clock) -> Option<Budget> {
    let obj = object(value)?;
    Some(Budget {
        id: BudgetId::new(required_text(obj, "id")?),
        category: required_text(obj, "category")?,
        limit: required_amount(obj, "limit")?,
        spent: amount_or_zero(obj, "spent"),
        period: optional_keyword(obj, "period").unwrap_or_default(),
        start_date: date_or_today(obj, "startDate", clock),
        end_date: date_or_today(obj, "endDate", clock),
        last_reset_date: optional_text(obj, "lastResetDate"),
        created_at: instant_or_now(obj, "createdAt", clock),
    })
}

/// Validates one savings goal record.
///
/// Requires `id`, `name` and `target`. Cosmetic fields get neutral
/// defaults so older exports without them still restore.
#[must_use]
pub fn savings(value: &Value, clock: &dyn Clock) -> Option<Savings> {
    let obj = object(value)?;
    Some(Savings {
        id: SavingsId::new(required_text(obj, "id")?),
        name: required_text(obj, "name")?,
        target: required_amount(obj, "target")?,
        current: amount_or_zero(obj, "current"),
        deadline: optional_text(obj, "deadline"),
        description: text_or(obj, "description", ""),
        category: text_or(obj, "category", "general"),
        priority: text_or(obj, "priority", "medium"),
        icon: text_or(obj, "icon", "savings"),
        created_at: instant_or_now(obj, "createdAt", clock),
    })
}

/// Validates one savings history entry.
///
/// Requires `id`, `savingsId`, a known `type` keyword and `amount`. The
/// balance snapshot fields are clamped but otherwise kept exactly as
/// stored, never re-derived from the parent goal.
#[must_use]
pub fn savings_transaction(value: &Value, clock: &dyn Clock) -> Option<SavingsTransaction> {
    let obj = object(value)?;
    Some(SavingsTransaction {
        id: SavingsTransactionId::new(required_text(obj, "id")?),
        savings_id: SavingsId::new(required_text(obj, "savingsId")?),
        kind: required_keyword(obj, "type")?,
        amount: required_amount(obj, "amount")?,
        date: date_or_today(obj, "date", clock),
        note: text_or(obj, "note", ""),
        previous_balance: amount_or_zero(obj, "previousBalance"),
        new_balance: amount_or_zero(obj, "newBalance"),
        created_at: instant_or_now(obj, "createdAt", clock),
    })
}

/// Validates one note record.
///
/// Requires `id`, `title` and a known `type` keyword. List fields coerce
/// to empty when not array-shaped; optional keywords coerce to absent on
/// unknown values. `updatedAt` falls back to `createdAt` before falling
/// back to the clock.
#[must_use]
pub fn note(value: &Value, clock: &dyn Clock) -> Option<Note> {
    let obj = object(value)?;
    let created_at = instant_or_now(obj, "createdAt", clock);
    let updated_at = optional_text(obj, "updatedAt").unwrap_or_else(|| created_at.clone());
    Some(Note {
        id: NoteId::new(required_text(obj, "id")?),
        title: required_text(obj, "title")?,
        content: text_or(obj, "content", ""),
        kind: required_keyword(obj, "type")?,
        mood: optional_keyword::<NoteMood>(obj, "mood"),
        financial_impact: optional_keyword::<FinancialImpact>(obj, "financialImpact"),
        amount: optional_amount(obj, "amount"),
        category: optional_text(obj, "category"),
        tags: text_list(obj, "tags"),
        related_transaction_ids: id_list(obj, "relatedTransactionIds", TransactionId::new),
        related_savings_ids: id_list(obj, "relatedSavingsIds", SavingsId::new),
        related_budget_ids: id_list(obj, "relatedBudgetIds", BudgetId::new),
        date: date_or_today(obj, "date", clock),
        created_at,
        updated_at,
    })
}

// ── Shape helpers ───────────────────────────────────────────────────────

/// Returns the value's object map, or `None` for any other shape.
fn object(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// Required string field: present and string-typed, or the record rejects.
fn required_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Required monetary field: present and numeric, clamped to >= 0.
fn required_amount(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64).map(clamp)
}

/// Required keyword field: present, string-typed and a known keyword.
fn required_keyword<T: FromStr>(obj: &Map<String, Value>, key: &str) -> Option<T> {
    obj.get(key).and_then(Value::as_str).and_then(|s| s.parse().ok())
}

/// Optional keyword field: absent, wrongly typed or unknown becomes `None`.
fn optional_keyword<T: FromStr>(obj: &Map<String, Value>, key: &str) -> Option<T> {
    required_keyword(obj, key)
}

/// Optional string field with a default.
fn text_or(obj: &Map<String, Value>, key: &str, fallback: &str) -> String {
    optional_text(obj, key).unwrap_or_else(|| fallback.to_owned())
}

/// Optional string field: absent or wrongly typed becomes `None`.
fn optional_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Optional monetary field defaulting to zero, clamped to >= 0.
fn amount_or_zero(obj: &Map<String, Value>, key: &str) -> f64 {
    optional_amount(obj, key).unwrap_or(0.0_f64)
}

/// Optional monetary field: absent or non-numeric becomes `None`, any
/// number is clamped to >= 0.
fn optional_amount(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64).map(clamp)
}

/// Optional list of strings: non-array values coerce to empty, non-string
/// elements are skipped.
fn text_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key).and_then(Value::as_array).map_or_else(Vec::new, |items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect()
    })
}

/// Optional list of IDs built from the string elements of a list field.
fn id_list<T>(obj: &Map<String, Value>, key: &str, make: fn(String) -> T) -> Vec<T> {
    text_list(obj, key).into_iter().map(make).collect()
}

/// Optional calendar date defaulting to the clock's current day.
fn date_or_today(obj: &Map<String, Value>, key: &str, clock: &dyn Clock) -> String {
    optional_text(obj, key).unwrap_or_else(|| clock.iso_date())
}

/// Optional timestamp defaulting to the clock's current instant.
fn instant_or_now(obj: &Map<String, Value>, key: &str, clock: &dyn Clock) -> String {
    optional_text(obj, key).unwrap_or_else(|| clock.iso_instant())
}

/// Clamps a monetary value to a minimum of zero.
fn clamp(amount: f64) -> f64 {
    amount.max(0.0_f64)
}
