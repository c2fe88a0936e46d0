//! Entity Admin App
//!
//! Tab bar plus the page for the current route.

use entity_client::{ClientConfig, ClientError, ClientResult, Services};
use leptos::prelude::*;

use crate::components::{
    DepartmentList, DetailLookup, JobDetailPage, JobHistoryDetailPage, LocationList, NavBar, TaskList,
};
use crate::context::AppContext;
use crate::routes::Route;
use crate::store::NavStateStoreFields;

/// JSON config baked in at build time, e.g. `{"apiBase": "https://api.example.org"}`
const EMBEDDED_CONFIG: Option<&str> = option_env!("ENTITY_ADMIN_CONFIG");

/// Embedded config when present, else the API lives on the origin that served the page
fn load_config() -> ClientResult<ClientConfig> {
    if let Some(raw) = EMBEDDED_CONFIG {
        return ClientConfig::from_json(raw);
    }
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .ok_or_else(|| ClientError::Config("no window origin to derive apiBase from".to_string()))?;
    ClientConfig::new(origin)
}

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("[app] {}", e);
            return view! { <p class="load-error">{format!("Admin UI is not configured: {}", e)}</p> }.into_any();
        }
    };
    log::info!("[app] API base {}, namespace {}", config.base(), config.namespace());

    let ctx = AppContext::new(Services::new(config));
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                <DetailLookup />

                {move || match ctx.nav.route().get() {
                    Route::Departments => view! { <DepartmentList /> }.into_any(),
                    Route::Locations => view! { <LocationList /> }.into_any(),
                    Route::Tasks => view! { <TaskList /> }.into_any(),
                    Route::JobDetail(id) => view! { <JobDetailPage id=id /> }.into_any(),
                    Route::JobHistoryDetail(id) => view! { <JobHistoryDetailPage id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
    .into_any()
}
