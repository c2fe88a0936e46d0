//! Department List Page

use entity_client::{PageRequest, Department};
use leptos::prelude::*;

use crate::components::{ListFooter, PageSizeSelect, SearchBar, DEFAULT_PAGE_SIZE};
use crate::context::use_app_context;

#[component]
pub fn DepartmentList() -> impl IntoView {
    let ctx = use_app_context();
    let controller = ctx.services.with_value(|s| s.department_list());
    let departments = controller.items();
    let query = controller.search_query();
    let total = controller.total_items();

    controller.set_page(PageRequest::new(0, DEFAULT_PAGE_SIZE));
    controller.spawn_load_all();
    let controller = StoredValue::new_local(controller);

    view! {
        <section class="entity-page" id="department--list">
            <h2>"Departments"</h2>
            <SearchBar
                query=query
                on_search=move |_: ()| controller.with_value(|c| c.spawn_search())
                placeholder="Search departments"
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
                        <th>"Department Name"</th>
                        <th>"Location"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || departments.get()
                        // Whole-record key: a row whose fields changed is rebuilt
                        key=|d: &Department| d.clone()
                        children=move |d: Department| {
                            let location = d
                                .location
                                .as_ref()
                                .and_then(|l| l.city.clone().or_else(|| l.id.map(|id| id.to_string())))
                                .unwrap_or_default();
                            view! {
                                <tr>
                                    <td>{d.id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                    <td>{d.department_name.clone().unwrap_or_default()}</td>
                                    <td>{location}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <ListFooter
                shown=Signal::derive(move || departments.with(Vec::len))
                total=total
                noun="departments"
            />
        </section>
    }
}
