//! View Controllers
//!
//! View-models behind the entity pages. State lives in Leptos signals so
//! views bind to it directly; network calls go through the resource traits.

mod detail;
mod edit;
mod list;

pub use detail::DetailController;
pub use edit::EditController;
pub use list::ListController;
