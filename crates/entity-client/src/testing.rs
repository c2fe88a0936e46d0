//! In-memory resources for controller tests

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use leptos::prelude::Owner;
use tokio::sync::oneshot;

use crate::error::{ClientError, ClientResult};
use crate::models::Entity;
use crate::resource::{EntityResource, Page, PageRequest, SearchParams, SearchResource};

/// Reactive owner for signals created by a test; keep it alive for the test's duration
pub fn reactive_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}

/// Backing store answering list, search and CRUD calls, recording each call
pub struct FakeResource<T> {
    pub records: RefCell<Vec<T>>,
    pub search_results: RefCell<HashMap<String, Vec<T>>>,
    pub total_count: Option<u64>,
    pub calls: RefCell<Vec<String>>,
    pub fail: RefCell<bool>,
}

impl<T: Entity> FakeResource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RefCell::new(records),
            search_results: RefCell::new(HashMap::new()),
            total_count: None,
            calls: RefCell::new(Vec::new()),
            fail: RefCell::new(false),
        }
    }

    pub fn with_search(self, query: &str, results: Vec<T>) -> Self {
        self.search_results.borrow_mut().insert(query.to_string(), results);
        self
    }

    pub fn failing(&self, fail: bool) {
        *self.fail.borrow_mut() = fail;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record_call(&self, call: String) -> ClientResult<()> {
        self.calls.borrow_mut().push(call);
        if *self.fail.borrow() {
            return Err(ClientError::Status {
                url: format!("fake://api/{}", T::COLLECTION),
                status: 500,
            });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl<T: Entity> EntityResource<T> for FakeResource<T> {
    async fn query(&self, page: &PageRequest) -> ClientResult<Page<T>> {
        self.record_call(format!("list {:?}", page.to_query_pairs()))?;
        Ok(Page {
            items: self.records.borrow().clone(),
            total_count: self.total_count,
        })
    }

    async fn get(&self, id: u64) -> ClientResult<T> {
        self.record_call(format!("get {id}"))?;
        self.records
            .borrow()
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned()
            .ok_or(ClientError::Status {
                url: format!("fake://api/{}/{}", T::COLLECTION, id),
                status: 404,
            })
    }

    async fn create(&self, record: &T) -> ClientResult<T> {
        self.record_call("create".to_string())?;
        self.records.borrow_mut().push(record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &T) -> ClientResult<T> {
        self.record_call(format!("update {:?}", record.id()))?;
        let mut records = self.records.borrow_mut();
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: u64) -> ClientResult<()> {
        self.record_call(format!("delete {id}"))?;
        self.records.borrow_mut().retain(|r| r.id() != Some(id));
        Ok(())
    }
}

#[async_trait(?Send)]
impl<T: Entity> SearchResource<T> for FakeResource<T> {
    async fn query(&self, params: &SearchParams) -> ClientResult<Page<T>> {
        self.record_call(format!("search {}", params.query))?;
        let items = self
            .search_results
            .borrow()
            .get(&params.query)
            .cloned()
            .unwrap_or_default();
        Ok(items.into())
    }
}

/// Search resource whose responses arrive only when the test releases them
pub struct GatedSearch<T> {
    pending: RefCell<HashMap<String, oneshot::Receiver<Vec<T>>>>,
}

impl<T: Entity> GatedSearch<T> {
    pub fn new() -> Self {
        Self {
            pending: RefCell::new(HashMap::new()),
        }
    }

    /// Register a query; sending on the returned handle delivers its response
    pub fn gate(&self, query: &str) -> oneshot::Sender<Vec<T>> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().insert(query.to_string(), rx);
        tx
    }
}

#[async_trait(?Send)]
impl<T: Entity> SearchResource<T> for GatedSearch<T> {
    async fn query(&self, params: &SearchParams) -> ClientResult<Page<T>> {
        let rx = self.pending.borrow_mut().remove(&params.query);
        match rx {
            Some(rx) => Ok(rx.await.unwrap_or_default().into()),
            None => Ok(Vec::new().into()),
        }
    }
}
