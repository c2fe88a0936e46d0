//! Task List Page

use entity_client::{PageRequest, Task};
use leptos::prelude::*;

use crate::components::{ListFooter, PageSizeSelect, SearchBar, DEFAULT_PAGE_SIZE};
use crate::context::use_app_context;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let controller = ctx.services.with_value(|s| s.task_list());
    let tasks = controller.items();
    let query = controller.search_query();
    let total = controller.total_items();

    controller.set_page(PageRequest::new(0, DEFAULT_PAGE_SIZE));
    controller.spawn_load_all();
    let controller = StoredValue::new_local(controller);

    view! {
        <section class="entity-page" id="task--list">
            <h2>"Tasks"</h2>
            <SearchBar
                query=query
                on_search=move |_: ()| controller.with_value(|c| c.spawn_search())
                placeholder="Search tasks"
            />
            <PageSizeSelect on_change=move |size: u32| {
                controller
                    .with_value(|c| {
                        c.set_page(PageRequest::new(0, size));
                        c.spawn_search();
                    })
            } />
            <table class="entity-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Title"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || tasks.get()
                        // Whole-record key: a row whose fields changed is rebuilt
                        key=|t: &Task| t.clone()
                        children=move |t: Task| {
                            view! {
                                <tr>
                                    <td>{t.id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                    <td>{t.title.unwrap_or_default()}</td>
                                    <td>{t.description.unwrap_or_default()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <ListFooter shown=Signal::derive(move || tasks.with(Vec::len)) total=total noun="tasks" />
        </section>
    }
}
