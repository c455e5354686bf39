//! Activity domain model.
//!
//! # Responsibility
//! - Define the canonical activity record and its wire shape.
//! - Turn view-layer drafts into validated records.
//!
//! # Invariants
//! - `id` is stable and never reused for another activity.
//! - `completed_at` is `Some` exactly when `completed` is true.
//! - `name` and `category` are non-empty on every constructed record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every activity record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ActivityId = Uuid;

/// Closed priority scale shared by all activities.
///
/// The wire token is the lowercase variant name; `category` stays an open
/// string label, but priority is a fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    Important,
    Normal,
    Low,
}

impl Priority {
    /// Wire token for this priority level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Important => "important",
            Self::Normal => "normal",
            Self::Low => "low",
        }
    }

    /// Parses a form/wire token into a priority level.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "urgent" => Some(Self::Urgent),
            "important" => Some(Self::Important),
            "normal" => Some(Self::Normal),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation error raised before a draft becomes a record, or when a
/// stored record no longer satisfies model invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityValidationError {
    /// `name` is empty after trimming.
    MissingName,
    /// `category` is empty after trimming.
    MissingCategory,
    /// `priority` is empty after trimming.
    MissingPriority,
    /// `priority` is not one of the four known tokens.
    UnknownPriority(String),
    /// `completed` and `completed_at` disagree.
    CompletionStampMismatch { completed: bool },
}

impl Display for ActivityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "activity name is required"),
            Self::MissingCategory => write!(f, "activity category is required"),
            Self::MissingPriority => write!(f, "activity priority is required"),
            Self::UnknownPriority(token) => write!(
                f,
                "unknown priority `{token}`; expected urgent|important|normal|low"
            ),
            Self::CompletionStampMismatch { completed } => write!(
                f,
                "completion stamp mismatch: completed={completed} but completed_at {}",
                if *completed { "is absent" } else { "is set" }
            ),
        }
    }
}

impl Error for ActivityValidationError {}

/// Draft input for a new activity, as submitted by the view layer.
///
/// `priority` stays raw text here: form controls submit tokens, and the
/// draft is validated as one unit before any record exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewActivity {
    pub name: String,
    pub category: String,
    pub priority: String,
    pub notes: String,
}

/// Canonical activity record.
///
/// Wire field names are camelCase to match the persisted payload layout;
/// timestamps serialize as RFC 3339 UTC strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Stable ID assigned at creation, never reassigned.
    pub id: ActivityId,
    /// Trimmed, non-empty display name.
    pub name: String,
    /// Open-ended label such as "Professional" or "Academic".
    pub category: String,
    pub priority: Priority,
    /// Optional free text, may be empty.
    pub notes: String,
    pub completed: bool,
    /// Set at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,
    /// Present exactly while `completed` is true.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Activity {
    /// Builds a validated record from a draft.
    ///
    /// Trims `name` and `notes`, parses the priority token, assigns a fresh
    /// ID and creation stamp. Returns the first violated constraint; no
    /// record is constructed on failure.
    pub fn from_draft(draft: &NewActivity) -> Result<Self, ActivityValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ActivityValidationError::MissingName);
        }

        let category = draft.category.trim();
        if category.is_empty() {
            return Err(ActivityValidationError::MissingCategory);
        }

        let priority_token = draft.priority.trim();
        if priority_token.is_empty() {
            return Err(ActivityValidationError::MissingPriority);
        }
        let priority = Priority::parse(priority_token)
            .ok_or_else(|| ActivityValidationError::UnknownPriority(priority_token.to_string()))?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.to_string(),
            priority,
            notes: draft.notes.trim().to_string(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        })
    }

    /// Flips completion state and keeps the completion stamp in sync.
    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(Utc::now()) } else { None };
    }

    /// Re-checks record invariants.
    ///
    /// Used on records read back from storage; a stored record that fails
    /// here is treated as corrupt by the storage layer.
    pub fn validate(&self) -> Result<(), ActivityValidationError> {
        if self.name.trim().is_empty() {
            return Err(ActivityValidationError::MissingName);
        }
        if self.category.trim().is_empty() {
            return Err(ActivityValidationError::MissingCategory);
        }
        if self.completed != self.completed_at.is_some() {
            return Err(ActivityValidationError::CompletionStampMismatch {
                completed: self.completed,
            });
        }
        Ok(())
    }
}

/// Starter drafts offered to first-run callers.
pub fn sample_drafts() -> Vec<NewActivity> {
    vec![
        NewActivity {
            name: "Complete project presentation".to_string(),
            category: "Professional".to_string(),
            priority: "urgent".to_string(),
            notes: "Prepare slides for the quarterly review meeting".to_string(),
        },
        NewActivity {
            name: "Review lecture notes".to_string(),
            category: "Academic".to_string(),
            priority: "important".to_string(),
            notes: "Catch up on this week's reading list".to_string(),
        },
        NewActivity {
            name: "Grocery shopping".to_string(),
            category: "Shopping".to_string(),
            priority: "normal".to_string(),
            notes: "Vegetables, fruit, household items".to_string(),
        },
        NewActivity {
            name: "Morning workout routine".to_string(),
            category: "Fitness".to_string(),
            priority: "low".to_string(),
            notes: "30 minutes cardio plus stretching".to_string(),
        },
    ]
}
