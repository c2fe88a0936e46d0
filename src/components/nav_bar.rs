//! Entity Tab Bar Component
//!
//! Switches the main column between the entity list pages.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;
use crate::store::NavStateStoreFields;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="entity-tab-bar">
            {Route::tabs()
                .into_iter()
                .map(|(route, label)| {
                    let target = route.clone();
                    let is_active = move || ctx.nav.route().get() == route;
                    view! {
                        <button
                            class=move || if is_active() { "entity-tab active" } else { "entity-tab" }
                            on:click=move |_| ctx.navigate(target.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
