//! CRUD page controller
//!
//! - state.rs: `CrudPageState`, the pure state machine of one management page
//! - view_model.rs: Leptos adapter (signals, async commands, banner timer)

mod state;
mod view_model;

pub use state::{CrudEntity, CrudPageState, Flash, FlashKind, LoadTicket, PagePhase};
pub use view_model::{BrowserHooks, CrudPageViewModel};
