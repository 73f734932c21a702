use contracts::domain::common::{Entity, EntityId};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::format_error_message;
use crate::shared::resource::Submission;

/// Entity that can be edited through a page form
pub trait CrudEntity: Entity + std::fmt::Debug + Send + Sync {
    /// Raw form field values, exactly as typed
    type Form: Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static;

    /// Populate the form from a record (edit action)
    fn to_form(&self) -> Self::Form;

    /// Validate and convert the form into a request payload
    fn form_to_payload(form: &Self::Form) -> Result<Self::Payload, String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    /// List fetch in flight
    Loading,
    Ready,
    /// Form populated from an existing record
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// Transient banner. `id` lets a timer clear only the banner it was set for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub id: u64,
    pub kind: FlashKind,
    pub text: String,
}

/// Token of one list fetch; only the latest issued one is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Local state of one entity management page
///
/// The list is never patched locally: after every successful mutation the
/// caller re-fetches the whole collection.
#[derive(Debug, Clone)]
pub struct CrudPageState<E: CrudEntity> {
    pub items: Vec<E>,
    pub form: E::Form,
    pub editing: Option<E>,
    pub flash: Option<Flash>,
    loading: bool,
    submitting: bool,
    load_seq: u64,
    flash_seq: u64,
}

impl<E: CrudEntity> Default for CrudPageState<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CrudEntity> CrudPageState<E> {
    /// Initial state: the first fetch is about to start
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            form: E::Form::default(),
            editing: None,
            flash: None,
            loading: true,
            submitting: false,
            load_seq: 0,
            flash_seq: 0,
        }
    }

    pub fn phase(&self) -> PagePhase {
        if self.editing.is_some() {
            PagePhase::Editing
        } else if self.loading {
            PagePhase::Loading
        } else {
            PagePhase::Ready
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    // ============================================================================
    // List
    // ============================================================================

    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_seq += 1;
        self.loading = true;
        LoadTicket(self.load_seq)
    }

    /// Apply a fetch result. Results of superseded fetches are dropped and
    /// `false` is returned.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<E>, ApiError>) -> bool {
        if ticket.0 != self.load_seq {
            log::debug!("{}: ignoring stale list response", E::list_name());
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => {
                self.show_error(format_error_message(&err));
            }
        }
        true
    }

    // ============================================================================
    // Form
    // ============================================================================

    pub fn start_edit(&mut self, record: &E) {
        self.form = record.to_form();
        self.editing = Some(record.clone());
    }

    /// Back to an empty form; no request involved
    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.form = E::Form::default();
        self.editing = None;
    }

    /// Validate the form. On failure the error banner is set and nothing
    /// should be sent. A second submit while one is in flight is refused.
    pub fn prepare_submit(&mut self) -> Option<Submission<E::Payload>> {
        if self.submitting {
            return None;
        }
        match E::form_to_payload(&self.form) {
            Ok(payload) => {
                self.submitting = true;
                Some(match &self.editing {
                    Some(record) => Submission::Update(record.id(), payload),
                    None => Submission::Create(payload),
                })
            }
            Err(message) => {
                self.show_error(message);
                None
            }
        }
    }

    /// Returns `true` when the list must be reloaded
    pub fn finish_submit(
        &mut self,
        submission: &Submission<E::Payload>,
        result: Result<E, ApiError>,
    ) -> bool {
        self.submitting = false;
        match result {
            Ok(_) => {
                let verb = if submission.is_update() { "updated" } else { "created" };
                self.show_success(format!("{} {} successfully!", E::element_name(), verb));
                self.reset_form();
                true
            }
            Err(err) => {
                self.show_error(format_error_message(&err));
                false
            }
        }
    }

    // ============================================================================
    // Delete
    // ============================================================================

    pub fn delete_prompt(record: &E) -> String {
        format!(
            "Are you sure you want to delete \"{}\"?\n\nThis action cannot be undone.",
            record.display_name()
        )
    }

    /// Ask for confirmation; `Some(id)` only when the user agreed
    pub fn confirm_delete(record: &E, confirm: impl FnOnce(&str) -> bool) -> Option<EntityId> {
        if confirm(&Self::delete_prompt(record)) {
            Some(record.id())
        } else {
            None
        }
    }

    /// Returns `true` when the list must be reloaded
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.show_success(format!("{} deleted successfully!", E::element_name()));
                true
            }
            Err(err) => {
                self.show_error(format_error_message(&err));
                false
            }
        }
    }

    // ============================================================================
    // Banner
    // ============================================================================

    pub fn show_success(&mut self, text: impl Into<String>) -> u64 {
        self.set_flash(FlashKind::Success, text.into())
    }

    pub fn show_error(&mut self, text: impl Into<String>) -> u64 {
        self.set_flash(FlashKind::Error, text.into())
    }

    fn set_flash(&mut self, kind: FlashKind, text: String) -> u64 {
        self.flash_seq += 1;
        self.flash = Some(Flash {
            id: self.flash_seq,
            kind,
            text,
        });
        self.flash_seq
    }

    /// Clear the banner if it is still the one with `id`
    pub fn dismiss_flash(&mut self, id: u64) {
        if self.flash.as_ref().is_some_and(|f| f.id == id) {
            self.flash = None;
        }
    }

    pub fn flash_id(&self) -> Option<u64> {
        self.flash.as_ref().map(|f| f.id)
    }
}
