//! Job Detail Page
//!
//! Resolves the job by id, then shows it through a `DetailController` that
//! follows `jobUpdate` broadcasts until the page is left.

use entity_client::Job;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn JobDetailPage(id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let resolved = RwSignal::new(None::<Job>);
    let failed = RwSignal::new(None::<String>);

    let services = ctx.services.get_value();
    spawn_local(async move {
        match services.resolve_job(id).await {
            Ok(job) => {
                let _ = resolved.try_set(Some(job));
            }
            Err(e) => {
                log::warn!("[job] could not resolve job {}: {}", id, e);
                let _ = failed.try_set(Some(e.to_string()));
            }
        }
    });

    view! {
        <section class="entity-page" id="job--detail">
            {move || {
                if let Some(err) = failed.get() {
                    return view! { <p class="load-error">{format!("Job {} could not be loaded: {}", id, err)}</p> }
                        .into_any();
                }
                match resolved.get() {
                    Some(job) => view! { <JobDetail entity=job /> }.into_any(),
                    None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                }
            }}
        </section>
    }
}

#[component]
fn JobDetail(entity: Job) -> impl IntoView {
    let ctx = use_app_context();
    let previous = ctx.previous_state_name();
    let detail = ctx.services.with_value(|s| s.job_detail(entity, previous));
    let job = detail.record();
    let back_label = detail.previous_state().to_string();

    on_cleanup(move || {
        let mut detail = detail;
        detail.dispose();
    });

    view! {
        <h2>{move || format!("Job {}", job.with(|j| j.id.map(|id| id.to_string()).unwrap_or_default()))}</h2>
        <dl class="entity-details">
            <dt>"Job Title"</dt>
            <dd>{move || job.with(|j| j.job_title.clone().unwrap_or_default())}</dd>
            <dt>"Min Salary"</dt>
            <dd>{move || job.with(|j| j.min_salary.map(|v| v.to_string()).unwrap_or_default())}</dd>
            <dt>"Max Salary"</dt>
            <dd>{move || job.with(|j| j.max_salary.map(|v| v.to_string()).unwrap_or_default())}</dd>
            <dt>"Tasks"</dt>
            <dd>
                {move || {
                    job.with(|j| j.tasks.iter().filter_map(|t| t.title.clone()).collect::<Vec<_>>().join(", "))
                }}
            </dd>
            <dt>"Employee"</dt>
            <dd>
                {move || {
                    job.with(|j| j.employee.as_ref().and_then(|e| e.id).map(|id| id.to_string()).unwrap_or_default())
                }}
            </dd>
        </dl>
        <JobTitleEditor job=job />
        <button class="back-btn" on:click=move |_| ctx.back()>
            {format!("Back to {}", back_label)}
        </button>
    }
}

/// Inline title edit and delete; the saved job comes back through the update channel
#[component]
fn JobTitleEditor(job: ReadSignal<Job>) -> impl IntoView {
    let ctx = use_app_context();
    let editor = ctx.services.with_value(|s| s.job_editor());
    let saving = editor.is_saving();
    let editor = StoredValue::new_local(editor);
    let (title, set_title) = signal(String::new());

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_title = title.get();
        if new_title.is_empty() {
            return;
        }
        let mut updated = job.get_untracked();
        updated.job_title = Some(new_title);

        let editor = editor.get_value();
        spawn_local(async move {
            match editor.save(&updated).await {
                Ok(_) => {
                    let _ = set_title.try_set(String::new());
                }
                Err(e) => log::warn!("[job] saving job {:?} failed: {}", updated.id, e),
            }
        });
    };

    let on_delete = move |_| {
        let doomed = job.get_untracked();
        let editor = editor.get_value();
        spawn_local(async move {
            match editor.delete(&doomed).await {
                Ok(()) => {
                    log::info!("[job] deleted job {:?}", doomed.id);
                    ctx.back();
                }
                Err(e) => log::warn!("[job] deleting job {:?} failed: {}", doomed.id, e),
            }
        });
    };

    view! {
        <form class="job-title-editor" on:submit=on_save>
            <input
                type="text"
                placeholder="New job title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || saving.get()>"Save"</button>
            <button type="button" class="delete-btn" on:click=on_delete>"Delete"</button>
        </form>
    }
}
