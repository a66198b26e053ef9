//! Enumeration types for constrained field values.
//!
//! Every enum serializes as its lowercase keyword, matching the backup
//! document format. [`FromStr`] is implemented for the validator, which
//! receives the keywords as untyped strings.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to wire a keyword enum to [`FromStr`] for the validator.
macro_rules! impl_keyword_from_str {
    ($name:ident { $($keyword:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $name {
            type Err = ();

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($keyword => Ok(Self::$variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

/// Direction of a money transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl_keyword_from_str!(TransactionKind {
    "income" => Income,
    "expense" => Expense,
});

/// Reset period of a budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Calendar-month budget (the default).
    #[default]
    Monthly,
    /// Calendar-week budget.
    Weekly,
    /// Calendar-year budget.
    Yearly,
    /// User-defined start/end dates.
    Custom,
}

impl_keyword_from_str!(BudgetPeriod {
    "monthly" => Monthly,
    "weekly" => Weekly,
    "yearly" => Yearly,
    "custom" => Custom,
});

/// Kind of a savings-goal history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsTransactionKind {
    /// Money added to the goal.
    Deposit,
    /// Money taken out of the goal.
    Withdrawal,
    /// Opening balance recorded at goal creation.
    Initial,
    /// Manual balance correction.
    Adjustment,
}

impl_keyword_from_str!(SavingsTransactionKind {
    "deposit" => Deposit,
    "withdrawal" => Withdrawal,
    "initial" => Initial,
    "adjustment" => Adjustment,
});

/// Category of a free-form note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// Unstructured note.
    General,
    /// Something to act on later.
    Reminder,
    /// A financial idea to explore.
    Idea,
    /// A goal the user is working towards.
    Goal,
    /// A caution the user left for themselves.
    Warning,
    /// A milestone worth remembering.
    Achievement,
}

impl_keyword_from_str!(NoteKind {
    "general" => General,
    "reminder" => Reminder,
    "idea" => Idea,
    "goal" => Goal,
    "warning" => Warning,
    "achievement" => Achievement,
});

/// Mood the user attached to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteMood {
    /// Feeling good about finances.
    Happy,
    /// Satisfied with the current state.
    Content,
    /// No strong feeling either way.
    Neutral,
    /// Mildly concerned.
    Worried,
    /// Under financial pressure.
    Stressed,
}

impl_keyword_from_str!(NoteMood {
    "happy" => Happy,
    "content" => Content,
    "neutral" => Neutral,
    "worried" => Worried,
    "stressed" => Stressed,
});

/// Financial impact the user attached to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialImpact {
    /// The noted event improves the user's finances.
    Positive,
    /// The noted event worsens the user's finances.
    Negative,
    /// No measurable effect.
    Neutral,
}

impl_keyword_from_str!(FinancialImpact {
    "positive" => Positive,
    "negative" => Negative,
    "neutral" => Neutral,
});
