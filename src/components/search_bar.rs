//! Search Bar Component
//!
//! Free-text search box bound to a list controller's query. Submitting an
//! empty box reloads the full list.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    query: RwSignal<String>,
    #[prop(into)] on_search: Callback<()>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
            <button
                type="button"
                on:click=move |_| {
                    query.set(String::new());
                    on_search.run(());
                }
            >
                "Clear"
            </button>
        </form>
    }
}

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page size forwarded with list and search requests
#[component]
pub fn PageSizeSelect(#[prop(into)] on_change: Callback<u32>) -> impl IntoView {
    view! {
        <label class="page-size">
            "Show "
            <select on:change=move |ev| {
                if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                    on_change.run(size);
                }
            }>
                {[DEFAULT_PAGE_SIZE, 50, 100]
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value={size.to_string()} selected={size == DEFAULT_PAGE_SIZE}>
                                {size}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// "n of total" line under a list
#[component]
pub fn ListFooter(
    #[prop(into)] shown: Signal<usize>,
    total: ReadSignal<Option<u64>>,
    noun: &'static str,
) -> impl IntoView {
    view! {
        <p class="item-count">
            {move || match total.get() {
                Some(total) => format!("{} of {} {}", shown.get(), total, noun),
                None => format!("{} {}", shown.get(), noun),
            }}
        </p>
    }
}
