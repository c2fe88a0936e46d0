//! Detail Lookup Component
//!
//! Opens a job or job-history detail page by id.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn DetailLookup() -> impl IntoView {
    let ctx = use_app_context();
    let (kind, set_kind) = signal("job".to_string());
    let (id_text, set_id_text) = signal(String::new());

    let on_open = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(id) = id_text.get().trim().parse::<u64>() else {
            return;
        };
        let route = if kind.get() == "job-history" {
            Route::JobHistoryDetail(id)
        } else {
            Route::JobDetail(id)
        };
        set_id_text.set(String::new());
        ctx.navigate(route);
    };

    view! {
        <form class="detail-lookup" on:submit=on_open>
            <select on:change=move |ev| set_kind.set(event_target_value(&ev))>
                <option value="job">"Job"</option>
                <option value="job-history">"Job History"</option>
            </select>
            <input
                type="text"
                inputmode="numeric"
                placeholder="id"
                prop:value=move || id_text.get()
                on:input=move |ev| set_id_text.set(event_target_value(&ev))
            />
            <button type="submit">"Open"</button>
        </form>
    }
}
