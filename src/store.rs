//! Navigation State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::routes::Route;

#[derive(Clone, Debug, Store)]
pub struct NavState {
    /// Page currently shown
    pub route: Route,
    /// Page to return to from a detail view
    pub previous: Option<Route>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            route: Route::Departments,
            previous: None,
        }
    }
}

pub type NavStore = Store<NavState>;
