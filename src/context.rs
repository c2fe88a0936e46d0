//! Application Context
//!
//! Services and navigation provided via Leptos Context API.

use entity_client::Services;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::Route;
use crate::store::{NavState, NavStateStoreFields, NavStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Resources and update bus (not `Send`, hence local storage)
    pub services: StoredValue<Services, LocalStorage>,
    pub nav: NavStore,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        Self {
            services: StoredValue::new_local(services),
            nav: Store::new(NavState::new()),
        }
    }

    pub fn navigate(&self, route: Route) {
        let current = self.nav.route().get_untracked();
        if current == route {
            return;
        }
        self.nav.previous().set(Some(current));
        self.nav.route().set(route);
    }

    /// Return to the page a detail view was opened from
    pub fn back(&self) {
        let target = self.nav.previous().get_untracked().unwrap_or(Route::Departments);
        self.navigate(target);
    }

    /// State name of the page to go back to
    pub fn previous_state_name(&self) -> &'static str {
        self.nav
            .previous()
            .get_untracked()
            .map(|r| r.name())
            .unwrap_or(Route::Departments.name())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
