use shared::{
    domain::{UserId, UserRecord},
    protocol::UserPayload,
};

/// The in-progress form contents. Carries no id; whether a submit creates or
/// updates is decided by [`Mode`], never by the draft itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub website: String,
}

/// Addresses a single draft field for the per-keystroke merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Website,
}

/// What a submit means right now. The explicit variant replaces a nullable
/// "editing id" marker so that update-without-target is unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Creating,
    Editing(UserId),
}

/// The materialized view-state: the user list, the initial-load flag, the
/// form draft and the editing mode. All transitions are synchronous and
/// perform no I/O; the controller applies them after its network calls
/// complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub users: Vec<UserRecord>,
    pub loading: bool,
    pub draft: FormDraft,
    pub mode: Mode,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: true,
            draft: FormDraft::default(),
            mode: Mode::Creating,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial load completed: the response replaces the list wholesale,
    /// preserving response order. Only ever called once; later mutations are
    /// incremental.
    pub fn apply_loaded(&mut self, records: Vec<UserRecord>) {
        self.users = records;
        self.loading = false;
    }

    /// Initial load failed: the list stays empty but the loading flag still
    /// clears so the view can settle.
    pub fn apply_load_failed(&mut self) {
        self.loading = false;
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Email => self.draft.email = value,
            DraftField::Website => self.draft.website = value,
        }
    }

    /// Copies the matching record into the draft and switches to
    /// [`Mode::Editing`]. Returns false (leaving state untouched) when the
    /// id is not in the list, e.g. after a concurrent delete.
    pub fn begin_edit(&mut self, id: UserId) -> bool {
        let Some(record) = self.users.iter().find(|user| user.id == id) else {
            return false;
        };
        self.draft = FormDraft {
            name: record.name.clone(),
            email: record.email.clone(),
            website: record.website.clone(),
        };
        self.mode = Mode::Editing(id);
        true
    }

    /// Total and idempotent: back to create mode with an empty draft.
    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Creating;
        self.draft = FormDraft::default();
    }

    /// The draft as the `{name, email, website}` wire body.
    pub fn draft_payload(&self) -> UserPayload {
        UserPayload {
            name: self.draft.name.clone(),
            email: self.draft.email.clone(),
            website: self.draft.website.clone(),
        }
    }

    /// Create succeeded: append the server-returned record (the server is
    /// authoritative for the assigned id) and clear the draft.
    pub fn apply_created(&mut self, record: UserRecord) {
        self.users.push(record);
        self.draft = FormDraft::default();
    }

    /// Update succeeded: replace in place by the echoed record's id, keeping
    /// list order. A miss (record deleted concurrently) leaves the list
    /// unchanged; the draft and mode reset either way.
    pub fn apply_updated(&mut self, record: UserRecord) {
        if let Some(slot) = self.users.iter_mut().find(|user| user.id == record.id) {
            *slot = record;
        }
        self.cancel_edit();
    }

    /// Delete succeeded: remove exactly the matching record. Deleting the
    /// current editing target also abandons the edit.
    pub fn apply_deleted(&mut self, id: UserId) {
        self.users.retain(|user| user.id != id);
        if self.mode == Mode::Editing(id) {
            self.cancel_edit();
        }
    }
}
