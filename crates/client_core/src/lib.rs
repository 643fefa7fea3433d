use std::sync::Arc;

use shared::domain::UserId;
use tracing::error;

pub mod directory;
pub mod error;
pub mod state;

pub use directory::{HttpUserDirectory, UserDirectory};
pub use error::DirectoryError;
pub use state::{DraftField, FormDraft, ListState, Mode};

/// Owns the view-state and mediates the four REST operations against the
/// remote collection. Methods take `&mut self`: one operation at a time,
/// no in-flight coordination, whichever response completes last wins.
///
/// Failed requests are logged and surfaced as [`DirectoryError`]; no retry,
/// no backoff, no automatic recovery. Apart from `load` clearing the
/// loading flag, a failed operation leaves the state exactly as it was.
pub struct UserListClient {
    directory: Arc<dyn UserDirectory>,
    state: ListState,
}

impl UserListClient {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            directory,
            state: ListState::new(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Fetches the full collection. Runs once after construction; the list
    /// is never reloaded wholesale afterwards.
    pub async fn load(&mut self) -> Result<(), DirectoryError> {
        match self.directory.fetch_all().await {
            Ok(records) => {
                self.state.apply_loaded(records);
                Ok(())
            }
            Err(err) => {
                self.state.apply_load_failed();
                error!("failed to fetch users: {err}");
                Err(err)
            }
        }
    }

    /// Pure per-field merge into the draft; the controller does not
    /// validate field contents.
    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.state.set_draft_field(field, value);
    }

    /// Copies the record into the draft and enters [`Mode::Editing`].
    /// Targets removed by a concurrent delete are rejected rather than
    /// edited blind.
    pub fn begin_edit(&mut self, id: UserId) -> Result<(), DirectoryError> {
        if self.state.begin_edit(id) {
            Ok(())
        } else {
            Err(DirectoryError::UnknownRecord { id })
        }
    }

    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    /// Creates a user from the draft. Only valid in [`Mode::Creating`]; the
    /// server-echoed record (authoritative for the id) is appended to the
    /// list.
    pub async fn submit_create(&mut self) -> Result<UserId, DirectoryError> {
        if let Mode::Editing(_) = self.state.mode {
            return Err(DirectoryError::WrongMode);
        }
        let payload = self.state.draft_payload();
        match self.directory.create(&payload).await {
            Ok(record) => {
                let id = record.id;
                self.state.apply_created(record);
                Ok(id)
            }
            Err(err) => {
                error!("failed to add user: {err}");
                Err(err)
            }
        }
    }

    /// Updates the current editing target from the draft. Only valid in
    /// [`Mode::Editing`]; the echoed record replaces the matching list entry
    /// in place.
    pub async fn submit_update(&mut self) -> Result<(), DirectoryError> {
        let Mode::Editing(id) = self.state.mode else {
            return Err(DirectoryError::WrongMode);
        };
        let payload = self.state.draft_payload();
        match self.directory.update(id, &payload).await {
            Ok(record) => {
                self.state.apply_updated(record);
                Ok(())
            }
            Err(err) => {
                error!(user_id = id.0, "failed to update user: {err}");
                Err(err)
            }
        }
    }

    /// Deletes by id. Removal is applied locally only after the server
    /// confirms; a failed request leaves the list untouched.
    pub async fn delete_user(&mut self, id: UserId) -> Result<(), DirectoryError> {
        match self.directory.remove(id).await {
            Ok(()) => {
                self.state.apply_deleted(id);
                Ok(())
            }
            Err(err) => {
                error!(user_id = id.0, "failed to delete user: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
