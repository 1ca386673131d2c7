//! Customer search and the edit/save workflow.
//!
//! Search results come back from the server as a superset; the flow then
//! applies a case-insensitive substring filter on the operator's selected
//! field. Both filters run, in that order - the server-side search and the
//! client-side narrowing are an intentional pair, not a redundancy to
//! optimize away (see DESIGN.md).
//!
//! Editing stages changes in an [`EditBuffer`] - at most one record at a
//! time - and saving computes a minimal diff against the last
//! server-confirmed record, issuing at most one field update and one point
//! adjustment.

use thiserror::Error;

use emporium_api::{ApiClient, ApiError, CustomerUpdate};
use emporium_core::{CustomerId, CustomerRecord};

/// Which customer field a search narrows on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match against the customer name.
    Name,
    /// Match against the email address.
    Email,
    /// Match against the phone number.
    Phone,
}

impl SearchField {
    /// The field's value on a record.
    #[must_use]
    pub fn value_of<'a>(self, record: &'a CustomerRecord) -> &'a str {
        match self {
            Self::Name => &record.name,
            Self::Email => &record.email,
            Self::Phone => &record.phone,
        }
    }
}

/// Narrow a server result set with a case-insensitive substring match on
/// the selected field.
#[must_use]
pub fn filter_customers(
    records: Vec<CustomerRecord>,
    field: SearchField,
    query: &str,
) -> Vec<CustomerRecord> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| field.value_of(record).to_lowercase().contains(&needle))
        .collect()
}

/// Direction of a staged point adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    /// Add the staged amount to the running total.
    Add,
    /// Subtract the staged amount from the running total.
    Subtract,
}

/// Transient staging area for one customer's pending edits.
///
/// Holds a copy of the record's editable fields plus a running points
/// total. The staged adjustment amount is tracked separately from that
/// total: applying an adjustment folds it in as a signed delta and resets
/// the staged amount, and multiple adjustments accumulate before save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    customer_id: CustomerId,
    /// Draft name.
    pub name: Option<String>,
    /// Draft email. An empty value clears the field on save.
    pub email: Option<String>,
    /// Draft phone. An empty value clears the field on save.
    pub phone: Option<String>,
    /// Draft notes. Empty notes are dropped from the save payload.
    pub notes: Option<String>,
    points: i64,
    baseline_points: i64,
    staged_amount: i64,
}

impl EditBuffer {
    /// Start editing `record`, copying its editable fields.
    #[must_use]
    pub fn from_record(record: &CustomerRecord) -> Self {
        Self {
            customer_id: record.id.clone(),
            name: Some(record.name.clone()),
            email: Some(record.email.clone()),
            phone: Some(record.phone.clone()),
            notes: Some(record.notes.clone()),
            points: record.points,
            baseline_points: record.points,
            staged_amount: 0,
        }
    }

    /// The record this buffer edits.
    #[must_use]
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// The running points total, adjustments included.
    #[must_use]
    pub const fn points(&self) -> i64 {
        self.points
    }

    /// The points value the record had when editing started.
    #[must_use]
    pub const fn baseline_points(&self) -> i64 {
        self.baseline_points
    }

    /// The currently staged (not yet applied) adjustment amount.
    #[must_use]
    pub const fn staged_amount(&self) -> i64 {
        self.staged_amount
    }

    /// Stage a non-negative adjustment amount. Negative input is treated
    /// as zero.
    pub const fn stage_amount(&mut self, amount: i64) {
        self.staged_amount = if amount < 0 { 0 } else { amount };
    }

    /// Fold the staged amount into the running total as a signed delta
    /// and reset the staged amount.
    pub const fn apply_adjustment(&mut self, direction: AdjustDirection) {
        let delta = match direction {
            AdjustDirection::Add => self.staged_amount,
            AdjustDirection::Subtract => -self.staged_amount,
        };
        self.points += delta;
        self.staged_amount = 0;
    }
}

/// The minimal set of network operations a save requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    /// Field update payload. May be empty when only points changed.
    pub update: CustomerUpdate,
    /// Signed delta against the last server-confirmed points value.
    pub point_diff: i64,
}

/// Save failure. Validation variants abort before any network call.
#[derive(Debug, Error)]
pub enum SaveError {
    /// No record is in edit state.
    #[error("No edit in progress.")]
    NotEditing,

    /// The draft name trims to empty.
    #[error("Name cannot be empty.")]
    EmptyName,

    /// Neither a field change nor a point change exists.
    #[error("No changes made to save.")]
    NoChanges,

    /// The field update request failed; the point adjustment was not
    /// attempted.
    #[error("Failed to update customer info.")]
    UpdateFailed(#[source] ApiError),

    /// The point adjustment failed. A preceding field update may already
    /// have succeeded; there is no rollback.
    #[error("Failed to update points.")]
    PointsFailed(#[source] ApiError),
}

/// Compute the save diff for `buffer` against the most recent
/// server-confirmed points value.
///
/// Pure: no I/O. Fields are trimmed; empty notes are omitted from the
/// payload while empty email/phone are sent to clear those fields
/// explicitly.
///
/// # Errors
///
/// Returns [`SaveError::EmptyName`] if the draft name trims to empty, or
/// [`SaveError::NoChanges`] if nothing would be sent.
pub fn compute_save_plan(buffer: &EditBuffer, original_points: i64) -> Result<SavePlan, SaveError> {
    let mut update = CustomerUpdate::default();

    if let Some(name) = &buffer.name {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SaveError::EmptyName);
        }
        update.name = Some(trimmed.to_owned());
    }

    if let Some(notes) = &buffer.notes {
        let trimmed = notes.trim();
        if !trimmed.is_empty() {
            update.notes = Some(trimmed.to_owned());
        }
    }

    if let Some(email) = &buffer.email {
        update.email = Some(email.trim().to_owned());
    }

    if let Some(phone) = &buffer.phone {
        update.phone = Some(phone.trim().to_owned());
    }

    let point_diff = buffer.points - original_points;

    if update.is_empty() && point_diff == 0 {
        return Err(SaveError::NoChanges);
    }

    Ok(SavePlan { update, point_diff })
}

/// Search failure.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The server rejected the search and supplied its own message.
    #[error("{0}")]
    Rejected(String),

    /// The request failed without a server-provided message.
    #[error("Search failed.")]
    Failed(#[source] ApiError),
}

/// The search-and-edit workflow: a result set, at most one edit buffer,
/// and the save orchestration.
#[derive(Debug)]
pub struct SearchEditFlow {
    client: ApiClient,
    results: Vec<CustomerRecord>,
    edit: Option<EditBuffer>,
    last_search: Option<(String, SearchField)>,
}

impl SearchEditFlow {
    /// Create a flow over `client` with an empty result set.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            results: Vec::new(),
            edit: None,
            last_search: None,
        }
    }

    /// The current (already narrowed) result set.
    #[must_use]
    pub fn results(&self) -> &[CustomerRecord] {
        &self.results
    }

    /// The active edit buffer, if any.
    #[must_use]
    pub const fn edit(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    /// Mutable access to the active edit buffer for draft changes.
    pub const fn edit_mut(&mut self) -> Option<&mut EditBuffer> {
        self.edit.as_mut()
    }

    /// Run a search and replace the result set.
    ///
    /// The raw query goes to the server; the response is then narrowed
    /// client-side on `field`.
    ///
    /// # Errors
    ///
    /// Returns the server's message verbatim when it supplied one, else a
    /// generic search failure.
    pub async fn search(
        &mut self,
        token: &str,
        query: &str,
        field: SearchField,
    ) -> Result<&[CustomerRecord], SearchError> {
        self.last_search = Some((query.to_owned(), field));
        let records = self
            .client
            .search_customers(token, query)
            .await
            .map_err(|err| match err {
                ApiError::Server(message) => SearchError::Rejected(message),
                other => SearchError::Failed(other),
            })?;

        self.results = filter_customers(records, field, query);
        Ok(&self.results)
    }

    /// Switch `id` into edit state, copying its fields into a fresh
    /// buffer. Any prior buffer is silently replaced and the staged
    /// adjustment amount reset.
    ///
    /// Returns `None` when `id` is not in the current result set.
    pub fn start_edit(&mut self, id: &CustomerId) -> Option<&mut EditBuffer> {
        let record = self.results.iter().find(|record| &record.id == id)?;
        self.edit = Some(EditBuffer::from_record(record));
        self.edit.as_mut()
    }

    /// Discard the edit buffer without saving.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Save the active edit buffer.
    ///
    /// Issues the field update first; only if it succeeds is the point
    /// adjustment attempted, so a points failure can leave the record with
    /// updated fields but stale points. That partial-failure window is a
    /// documented limitation of the two-call save. On full success the
    /// buffer is discarded and the last search re-run to refresh the
    /// result set.
    ///
    /// # Errors
    ///
    /// Validation errors ([`SaveError::EmptyName`], [`SaveError::NoChanges`])
    /// abort before any network call.
    pub async fn save(&mut self, token: &str) -> Result<(), SaveError> {
        let buffer = self.edit.as_ref().ok_or(SaveError::NotEditing)?;

        // Diff against the latest server-confirmed value in the result
        // set, not the baseline captured at edit start.
        let original_points = self
            .results
            .iter()
            .find(|record| record.id == *buffer.customer_id())
            .map_or(0, |record| record.points);

        let plan = compute_save_plan(buffer, original_points)?;
        let id = buffer.customer_id().clone();

        if !plan.update.is_empty() {
            self.client
                .update_customer(token, &id, &plan.update)
                .await
                .map_err(SaveError::UpdateFailed)?;
        }

        if plan.point_diff != 0 {
            self.client
                .adjust_points(token, &id, plan.point_diff)
                .await
                .map_err(SaveError::PointsFailed)?;
        }

        self.edit = None;

        if let Some((query, field)) = self.last_search.clone()
            && let Err(err) = self.search(token, &query, field).await
        {
            // The save itself succeeded; a failed refresh only leaves the
            // result set stale.
            tracing::warn!(error = %err, "post-save refresh failed");
        }

        Ok(())
    }
}
