//! Activity store: the single owner of the activity collection.
//!
//! # Responsibility
//! - Validate and apply all collection mutations.
//! - Persist the full collection through `ActivityStorage` after every
//!   mutation, before returning to the caller.
//! - Answer filtered list and summary queries without side effects.
//!
//! # Invariants
//! - Collection order is insertion order, newest first.
//! - No record enters the collection without passing validation.
//! - Unknown ids are signaled as `NotFound`, never silently ignored.

use crate::model::activity::{
    Activity, ActivityId, ActivityValidationError, NewActivity, Priority,
};
use crate::storage::{ActivityStorage, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for mutation and persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(ActivityValidationError),
    NotFound(ActivityId),
    Storage(StorageError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "activity not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<ActivityValidationError> for StoreError {
    fn from(value: ActivityValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Category/priority constraints applied to list queries.
///
/// `None` fields match everything; both constraints must hold when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    pub category: Option<String>,
    pub priority: Option<Priority>,
}

impl ActivityFilter {
    /// Whether no constraint is active.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none() && self.priority.is_none()
    }

    /// Whether the given record satisfies both constraints.
    pub fn matches(&self, activity: &Activity) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| activity.category == category);
        let priority_ok = self
            .priority
            .map_or(true, |priority| activity.priority == priority);
        category_ok && priority_ok
    }
}

/// Derived counts over the full, unfiltered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Single source of truth for the activity collection.
///
/// Constructed once per process; all mutation goes through its operations
/// and is persisted before the operation returns.
pub struct ActivityStore<S: ActivityStorage> {
    storage: S,
    activities: Vec<Activity>,
    active_filter: ActivityFilter,
}

impl<S: ActivityStorage> ActivityStore<S> {
    /// Opens the store, pulling whatever collection the storage holds.
    ///
    /// An unreadable payload loads as empty; the storage layer logs the
    /// recovery, so opening never fails.
    pub fn open(storage: S) -> Self {
        let activities = storage.load();
        info!(
            "event=store_open module=store status=ok count={}",
            activities.len()
        );
        Self {
            storage,
            activities,
            active_filter: ActivityFilter::default(),
        }
    }

    /// Validates the draft, prepends the new record, and persists.
    ///
    /// The collection is untouched when validation fails.
    pub fn create(&mut self, draft: &NewActivity) -> StoreResult<Activity> {
        let activity = match Activity::from_draft(draft) {
            Ok(activity) => activity,
            Err(err) => {
                warn!(
                    "event=activity_create module=store status=error error_code=validation error={err}"
                );
                return Err(err.into());
            }
        };

        self.activities.insert(0, activity.clone());
        self.persist()?;

        info!(
            "event=activity_create module=store status=ok id={} total={}",
            activity.id,
            self.activities.len()
        );
        Ok(activity)
    }

    /// Flips completion state of the matching record and persists.
    pub fn toggle_completion(&mut self, id: ActivityId) -> StoreResult<Activity> {
        let activity = self.find_mut(id)?;
        activity.toggle_completion();
        let updated = activity.clone();
        self.persist()?;

        info!(
            "event=activity_toggle module=store status=ok id={id} completed={}",
            updated.completed
        );
        Ok(updated)
    }

    /// Renames the matching record in place and persists.
    ///
    /// The new name is trimmed; an empty result is a validation error and
    /// leaves the record untouched.
    pub fn rename(&mut self, id: ActivityId, new_name: &str) -> StoreResult<Activity> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(ActivityValidationError::MissingName.into());
        }

        let activity = self.find_mut(id)?;
        activity.name = trimmed.to_string();
        let updated = activity.clone();
        self.persist()?;

        info!("event=activity_rename module=store status=ok id={id}");
        Ok(updated)
    }

    /// Deletes the matching record and persists.
    ///
    /// Any confirmation step is a view-layer gate; this call never prompts.
    pub fn remove(&mut self, id: ActivityId) -> StoreResult<()> {
        let index = self
            .activities
            .iter()
            .position(|activity| activity.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.activities.remove(index);
        self.persist()?;

        info!(
            "event=activity_remove module=store status=ok id={id} total={}",
            self.activities.len()
        );
        Ok(())
    }

    /// Returns records matching `filter`, preserving collection order.
    pub fn list(&self, filter: &ActivityFilter) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|activity| filter.matches(activity))
            .cloned()
            .collect()
    }

    /// Returns records matching the store's active filter.
    pub fn visible(&self) -> Vec<Activity> {
        self.list(&self.active_filter)
    }

    /// Derived counts over the full collection.
    pub fn summary(&self) -> Summary {
        let total = self.activities.len();
        let completed = self
            .activities
            .iter()
            .filter(|activity| activity.completed)
            .count();
        Summary {
            total,
            completed,
            pending: total - completed,
        }
    }

    pub fn filter(&self) -> &ActivityFilter {
        &self.active_filter
    }

    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.active_filter.category = category;
    }

    pub fn set_priority_filter(&mut self, priority: Option<Priority>) {
        self.active_filter.priority = priority;
    }

    /// Clears both filter selections.
    pub fn reset_filter(&mut self) {
        self.active_filter = ActivityFilter::default();
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Seeds starter content on first run only.
    ///
    /// Returns the number of inserted records, zero when the collection
    /// already has content. Drafts are given display-first; `create`
    /// prepends, so they are inserted in reverse to keep the given order.
    pub fn seed_if_empty(&mut self, drafts: &[NewActivity]) -> StoreResult<usize> {
        if !self.activities.is_empty() {
            return Ok(0);
        }

        for draft in drafts.iter().rev() {
            self.create(draft)?;
        }
        Ok(drafts.len())
    }

    fn find_mut(&mut self, id: ActivityId) -> Result<&mut Activity, StoreError> {
        self.activities
            .iter_mut()
            .find(|activity| activity.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn persist(&self) -> StoreResult<()> {
        self.storage.save(&self.activities)?;
        Ok(())
    }
}
