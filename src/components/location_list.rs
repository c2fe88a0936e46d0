//! Location List Page

use entity_client::{PageRequest, Location};
use leptos::prelude::*;

use crate::components::{ListFooter, PageSizeSelect, SearchBar, DEFAULT_PAGE_SIZE};
use crate::context::use_app_context;

#[component]
pub fn LocationList() -> impl IntoView {
    let ctx = use_app_context();
    let controller = ctx.services.with_value(|s| s.location_list());
    let locations = controller.items();
    let query = controller.search_query();
    let total = controller.total_items();

    controller.set_page(PageRequest::new(0, DEFAULT_PAGE_SIZE));
    controller.spawn_load_all();
    let controller = StoredValue::new_local(controller);

    view! {
        <section class="entity-page" id="location--list">
            <h2>"Locations"</h2>
            <SearchBar
                query=query
                on_search=move |_: ()| controller.with_value(|c| c.spawn_search())
                placeholder="Search locations"
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
                        <th>"Street Address"</th>
                        <th>"Postal Code"</th>
                        <th>"City"</th>
                        <th>"State Province"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || locations.get()
                        // Whole-record key: a row whose fields changed is rebuilt
                        key=|l: &Location| l.clone()
                        children=move |l: Location| {
                            view! {
                                <tr>
                                    <td>{l.id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                    <td>{l.street_address.unwrap_or_default()}</td>
                                    <td>{l.postal_code.unwrap_or_default()}</td>
                                    <td>{l.city.unwrap_or_default()}</td>
                                    <td>{l.state_province.unwrap_or_default()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <ListFooter
                shown=Signal::derive(move || locations.with(Vec::len))
                total=total
                noun="locations"
            />
        </section>
    }
}
