//! List Controller
//!
//! Holds one entity type's list and refreshes it from the list or search
//! endpoint. Every successful fetch replaces the list wholesale; a failed
//! fetch is logged and leaves it untouched. Overlapping requests are not
//! cancelled: whichever response lands last wins.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Entity;
use crate::resource::{EntityResource, Page, PageRequest, SearchParams, SearchResource};

pub struct ListController<T: Entity> {
    resource: Rc<dyn EntityResource<T>>,
    search: Rc<dyn SearchResource<T>>,
    items: RwSignal<Vec<T>>,
    search_query: RwSignal<String>,
    total_items: RwSignal<Option<u64>>,
    page: RwSignal<PageRequest>,
}

impl<T: Entity> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            search: self.search.clone(),
            items: self.items,
            search_query: self.search_query,
            total_items: self.total_items,
            page: self.page,
        }
    }
}

impl<T: Entity> ListController<T> {
    /// New controller with an empty list; nothing is fetched until
    /// `load_all` (or `spawn_load_all`) runs
    pub fn new(resource: Rc<dyn EntityResource<T>>, search: Rc<dyn SearchResource<T>>) -> Self {
        Self {
            resource,
            search,
            items: RwSignal::new(Vec::new()),
            search_query: RwSignal::new(String::new()),
            total_items: RwSignal::new(None),
            page: RwSignal::new(PageRequest::default()),
        }
    }

    pub fn items(&self) -> ReadSignal<Vec<T>> {
        self.items.read_only()
    }

    /// Search box contents, written by the view
    pub fn search_query(&self) -> RwSignal<String> {
        self.search_query
    }

    /// Server-reported total of the last fetch, when the endpoint paginates
    pub fn total_items(&self) -> ReadSignal<Option<u64>> {
        self.total_items.read_only()
    }

    /// Paging forwarded with every following request
    pub fn set_page(&self, page: PageRequest) {
        self.page.set(page);
    }

    /// Fetch the full list and replace the current one
    pub async fn load_all(&self) {
        let page = self.page.get_untracked();
        match self.resource.query(&page).await {
            Ok(result) => self.replace(result),
            Err(e) => log::warn!("[{}] loading list failed: {}", T::NAME, e),
        }
    }

    /// Search with `query`; an empty or absent query falls back to `load_all`
    pub async fn search(&self, query: Option<&str>) {
        let query = match query {
            Some(q) if !q.is_empty() => q,
            _ => return self.load_all().await,
        };
        let params = SearchParams {
            query: query.to_string(),
            page: self.page.get_untracked(),
        };
        match self.search.query(&params).await {
            Ok(result) => self.replace(result),
            Err(e) => log::warn!("[{}] search for {:?} failed: {}", T::NAME, query, e),
        }
    }

    /// Search with whatever is currently in the search box
    pub async fn search_current(&self) {
        let query = self.search_query.get_untracked();
        self.search(Some(&query)).await
    }

    /// Fire-and-forget `load_all` for event handlers
    pub fn spawn_load_all(&self) {
        let this = self.clone();
        spawn_local(async move { this.load_all().await });
    }

    /// Fire-and-forget `search_current` for event handlers
    pub fn spawn_search(&self) {
        let this = self.clone();
        spawn_local(async move { this.search_current().await });
    }

    fn replace(&self, result: Page<T>) {
        log::debug!("[{}] list now holds {} records", T::NAME, result.items.len());
        self.total_items.set(result.total_count);
        self.items.set(result.items);
    }
}
