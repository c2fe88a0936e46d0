//! Job History Detail Page

use chrono::{DateTime, Utc};
use entity_client::JobHistory;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn JobHistoryDetailPage(id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let resolved = RwSignal::new(None::<JobHistory>);
    let failed = RwSignal::new(None::<String>);

    let services = ctx.services.get_value();
    spawn_local(async move {
        match services.resolve_job_history(id).await {
            Ok(history) => {
                let _ = resolved.try_set(Some(history));
            }
            Err(e) => {
                log::warn!("[jobHistory] could not resolve job history {}: {}", id, e);
                let _ = failed.try_set(Some(e.to_string()));
            }
        }
    });

    view! {
        <section class="entity-page" id="job-history--detail">
            {move || {
                if let Some(err) = failed.get() {
                    return view! {
                        <p class="load-error">{format!("Job history {} could not be loaded: {}", id, err)}</p>
                    }
                        .into_any();
                }
                match resolved.get() {
                    Some(history) => view! { <JobHistoryDetail entity=history /> }.into_any(),
                    None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                }
            }}
        </section>
    }
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default()
}

#[component]
fn JobHistoryDetail(entity: JobHistory) -> impl IntoView {
    let ctx = use_app_context();
    let previous = ctx.previous_state_name();
    let detail = ctx.services.with_value(|s| s.job_history_detail(entity, previous));
    let history = detail.record();
    let back_label = detail.previous_state().to_string();

    on_cleanup(move || {
        let mut detail = detail;
        detail.dispose();
    });

    let job_id = move || history.with(|h| h.job.as_ref().and_then(|j| j.id));

    view! {
        <h2>{move || format!("Job History {}", history.with(|h| h.id.map(|id| id.to_string()).unwrap_or_default()))}</h2>
        <dl class="entity-details">
            <dt>"Start Date"</dt>
            <dd>{move || history.with(|h| format_date(h.start_date))}</dd>
            <dt>"End Date"</dt>
            <dd>{move || history.with(|h| format_date(h.end_date))}</dd>
            <dt>"Language"</dt>
            <dd>{move || history.with(|h| h.language.map(|l| format!("{:?}", l)).unwrap_or_default())}</dd>
            <dt>"Department"</dt>
            <dd>
                {move || {
                    history.with(|h| h.department.as_ref().and_then(|d| d.department_name.clone()).unwrap_or_default())
                }}
            </dd>
            <dt>"Job"</dt>
            <dd>
                {move || match job_id() {
                    Some(id) => view! {
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Route::JobDetail(id));
                        }>
                            {history.with(|h| h.job.as_ref().and_then(|j| j.job_title.clone()).unwrap_or_else(|| id.to_string()))}
                        </a>
                    }
                        .into_any(),
                    None => view! { <span></span> }.into_any(),
                }}
            </dd>
            <dt>"Employee"</dt>
            <dd>
                {move || {
                    history.with(|h| h.employee.as_ref().and_then(|e| e.id).map(|id| id.to_string()).unwrap_or_default())
                }}
            </dd>
        </dl>
        <button class="back-btn" on:click=move |_| ctx.back()>
            {format!("Back to {}", back_label)}
        </button>
    }
}
