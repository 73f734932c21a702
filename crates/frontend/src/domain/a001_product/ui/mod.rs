//! Product management page
//!
//! - details: create / edit form
//! - list: search bar, table and statistics
//! - page: wires both to one `CrudPageViewModel`

pub mod details;
pub mod list;
mod page;

pub use page::ProductPage;
