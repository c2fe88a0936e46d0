//! Data-Access Contracts
//!
//! What a controller needs from the REST layer. `HttpResource` is the real
//! implementation; tests plug in in-memory ones.

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::Entity;

/// Paging parameters forwarded verbatim to the server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// `property,direction` pairs, e.g. `"id,asc"`
    pub sort: Vec<String>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            sort: Vec::new(),
        }
    }

    pub fn sorted_by(mut self, sort: impl Into<String>) -> Self {
        self.sort.push(sort.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.size.is_none() && self.sort.is_empty()
    }

    /// Query-string pairs in the order the server expects them
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        for sort in &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

/// Parameters of a search request (`{query}` plus pass-through paging)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub page: PageRequest,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: PageRequest::default(),
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("query", self.query.clone())];
        pairs.extend(self.page.to_query_pairs());
        pairs
    }
}

/// One fetched list, with the total the server reported (`X-Total-Count`)
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: Option<u64>,
}

impl<T> From<Vec<T>> for Page<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            total_count: None,
        }
    }
}

/// Primary resource of an entity type (`api/<collection>`)
#[async_trait(?Send)]
pub trait EntityResource<T: Entity> {
    /// List fetch
    async fn query(&self, page: &PageRequest) -> ClientResult<Page<T>>;

    /// Fetch one record by id
    async fn get(&self, id: u64) -> ClientResult<T>;

    /// Create a record that has no id yet
    async fn create(&self, record: &T) -> ClientResult<T>;

    /// Replace an existing record
    async fn update(&self, record: &T) -> ClientResult<T>;

    async fn delete(&self, id: u64) -> ClientResult<()>;
}

/// Search resource of an entity type (`api/_search/<collection>`)
#[async_trait(?Send)]
pub trait SearchResource<T: Entity> {
    /// Free-text search; always yields a list
    async fn query(&self, params: &SearchParams) -> ClientResult<Page<T>>;
}
