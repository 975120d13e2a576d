//! # Form state and submission phases
//!
//! [`FormState`] owns one form's record, its per-field errors, the debounce
//! tickets for fields whose validation is still pending, and the
//! [`FormPhase`] of the create/edit lifecycle.
//!
//! Nothing here performs I/O or sleeps. Callers feed events in (keystrokes,
//! blur, timer expiry, backend results) and read the resulting state back,
//! which keeps the behaviour identical between the web and desktop shells and
//! easy to test.
//!
//! ## Lifecycle
//!
//! ```text
//! create: Idle ─submit─▶ Validating ─▶ Blocked
//!                                   └─▶ Submitting ─▶ Done | Failed
//! edit:   Loading ─▶ Idle | LoadFailed, then as above
//! ```
//!
//! [`FormState::begin_submit`] refuses to start while a submission is already
//! outstanding or the initial load has not finished.

use crate::filter::filter_input;
use crate::models::{Field, FieldErrors, UserId, UserRecord};
use crate::validate::validate_field;

/// Which backend call a form ends in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// Create a new record.
    Create,
    /// Update the record with the given identifier.
    Edit(UserId),
}

/// Where a form is in its load/submit lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPhase {
    /// Waiting for the existing record (edit only).
    Loading,
    /// The existing record could not be fetched. The form stays usable.
    LoadFailed(String),
    Idle,
    Validating,
    /// Submission stopped by validation errors.
    Blocked,
    Submitting,
    Done,
    /// The backend call failed. Entered values are kept for a retry.
    Failed(String),
}

impl FormPhase {
    /// Message to show in the form's banner, if any.
    pub fn banner(&self) -> Option<&str> {
        match self {
            FormPhase::LoadFailed(msg) | FormPhase::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Debounce ticket handed out on every keystroke.
///
/// Only the most recent ticket of a field is honoured by [`FormState::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingValidation {
    pub field: Field,
    ticket: u64,
}

/// Reasons [`FormState::begin_submit`] refuses to produce a record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("the user is still loading")]
    Loading,
    #[error("a submission is already in progress")]
    InFlight,
    #[error("please fix the highlighted fields")]
    Invalid(FieldErrors),
}

/// State of a single create or edit form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    record: UserRecord,
    errors: FieldErrors,
    phase: FormPhase,
    pending: [Option<u64>; 3],
    next_ticket: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_phase(FormPhase::Idle)
    }
}

impl FormState {
    /// Empty form, ready for input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a mode: edit forms start out loading.
    pub fn for_mode(mode: &FormMode) -> Self {
        match mode {
            FormMode::Create => Self::new(),
            FormMode::Edit(_) => Self::with_phase(FormPhase::Loading),
        }
    }

    fn with_phase(phase: FormPhase) -> Self {
        Self {
            record: UserRecord::default(),
            errors: FieldErrors::default(),
            phase,
            pending: [None; 3],
            next_ticket: 0,
        }
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn value(&self, field: Field) -> &str {
        self.record.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> &str {
        self.errors.get(field)
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// True while a debounce ticket for `field` is outstanding.
    pub fn is_pending(&self, field: Field) -> bool {
        self.pending[field.index()].is_some()
    }

    /// True while the submit control should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, FormPhase::Loading | FormPhase::Submitting)
    }

    /// Record a keystroke.
    ///
    /// The raw value is filtered and stored, the field's error is cleared and a
    /// fresh ticket replaces any earlier one for the same field. Hand the
    /// ticket to [`FormState::settle`] once the debounce delay has passed.
    pub fn input(&mut self, field: Field, raw: &str) -> PendingValidation {
        self.record.set(field, filter_input(field, raw));
        self.errors.clear(field);

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending[field.index()] = Some(ticket);
        PendingValidation { field, ticket }
    }

    /// Run a debounced validation.
    ///
    /// Returns `false` without touching the errors when the ticket has been
    /// superseded by a later keystroke, a blur or a submit.
    pub fn settle(&mut self, pending: PendingValidation) -> bool {
        let slot = &mut self.pending[pending.field.index()];
        if *slot != Some(pending.ticket) {
            return false;
        }
        *slot = None;
        self.run_validator(pending.field);
        true
    }

    /// Field lost focus: drop its pending ticket and validate right away.
    pub fn blur(&mut self, field: Field) {
        self.pending[field.index()] = None;
        self.run_validator(field);
    }

    /// Drop every pending ticket and validate all fields. Returns `true` when
    /// no field reports an error.
    pub fn validate_all(&mut self) -> bool {
        self.pending = [None; 3];
        for field in Field::ALL {
            self.run_validator(field);
        }
        !self.errors.has_errors()
    }

    fn run_validator(&mut self, field: Field) {
        let message = validate_field(field, self.record.get(field));
        self.errors.set(field, message);
    }

    /// Move an edit form back into [`FormPhase::Loading`].
    pub fn begin_load(&mut self) {
        self.phase = FormPhase::Loading;
    }

    /// Apply the result of fetching the existing record.
    ///
    /// A successful load replaces the record and clears every error. A failed
    /// load leaves the fields as they are. Results arriving when the form is no
    /// longer loading are ignored and `false` is returned.
    pub fn finish_load(&mut self, result: Result<UserRecord, String>) -> bool {
        if self.phase != FormPhase::Loading {
            return false;
        }
        match result {
            Ok(record) => {
                self.record = record;
                self.errors.clear_all();
                self.pending = [None; 3];
                self.phase = FormPhase::Idle;
            }
            Err(message) => {
                self.phase = FormPhase::LoadFailed(message);
            }
        }
        true
    }

    /// Validate everything and, if the form is clean, enter
    /// [`FormPhase::Submitting`] and return the record to send.
    pub fn begin_submit(&mut self) -> Result<UserRecord, SubmitRejected> {
        match self.phase {
            FormPhase::Loading => return Err(SubmitRejected::Loading),
            FormPhase::Submitting => return Err(SubmitRejected::InFlight),
            _ => {}
        }

        self.phase = FormPhase::Validating;
        if !self.validate_all() {
            self.phase = FormPhase::Blocked;
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.phase = FormPhase::Submitting;
        Ok(self.record.clone())
    }

    /// Apply the backend's answer to a submission started with
    /// [`FormState::begin_submit`]. Ignored unless a submission is in flight.
    pub fn finish_submit(&mut self, result: Result<(), String>) -> bool {
        if self.phase != FormPhase::Submitting {
            return false;
        }
        self.phase = match result {
            Ok(()) => FormPhase::Done,
            Err(message) => FormPhase::Failed(message),
        };
        true
    }
}
