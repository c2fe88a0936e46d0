//! REST Resources
//!
//! `EntityResource` / `SearchResource` over reqwest. URL layout:
//! - list, create, update: `<base>/api/<collection>`
//! - get, delete: `<base>/api/<collection>/<id>`
//! - search: `<base>/api/_search/<collection>?query=<q>`

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::Entity;
use crate::resource::{EntityResource, Page, PageRequest, SearchParams, SearchResource};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// HTTP-backed resource for one entity type
pub struct HttpResource<T> {
    client: Client,
    config: ClientConfig,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpResource<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> HttpResource<T> {
    pub fn new(client: Client, config: ClientConfig) -> Self {
        Self {
            client,
            config,
            _entity: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/api/{}", self.config.base(), T::COLLECTION)
    }

    pub fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// The generated template is `api/_search/<collection>/:id`; the `:id`
    /// placeholder is never filled for searches and is dropped, so the
    /// search is always collection-wide.
    pub fn search_url(&self) -> String {
        format!("{}/api/_search/{}", self.config.base(), T::COLLECTION)
    }

    /// List fetch with paging pass-through
    pub fn list_request(&self, page: &PageRequest) -> RequestBuilder {
        self.client.get(self.collection_url()).query(&page.to_query_pairs())
    }

    /// Search fetch: `?query=<q>` followed by paging pass-through
    pub fn search_request(&self, params: &SearchParams) -> RequestBuilder {
        self.client.get(self.search_url()).query(&params.to_query_pairs())
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> ClientResult<(String, HeaderMap)> {
        let response = request.send().await.map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        let headers = response.headers().clone();
        self.log_alerts(&headers);

        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })?;
        Ok((body, headers))
    }

    async fn fetch<R: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> ClientResult<(R, HeaderMap)> {
        let (body, headers) = self.send(request, url).await?;
        let decoded = decode(&body, url)?;
        Ok((decoded, headers))
    }

    async fn fetch_page(&self, request: RequestBuilder, url: &str) -> ClientResult<Page<T>>
    where
        T: DeserializeOwned,
    {
        let (items, headers) = self.fetch::<Vec<T>>(request, url).await?;
        log::debug!("[{}] GET {} -> {} records", T::NAME, url, items.len());
        Ok(Page {
            items,
            total_count: total_count(&headers),
        })
    }

    /// Server-side alerts (`X-<namespace>-alert`, `-params`, `-error`)
    fn log_alerts(&self, headers: &HeaderMap) {
        let namespace = self.config.namespace();
        let header = |suffix: &str| {
            headers
                .get(format!("X-{}-{}", namespace, suffix).as_str())
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        if let Some(alert) = header("alert") {
            let params = header("params").unwrap_or_default();
            log::info!("[{}] {} {}", T::NAME, alert, params);
        }
        if let Some(error) = header("error") {
            log::warn!("[{}] {}", T::NAME, error);
        }
    }
}

/// `X-Total-Count` as sent by paginated list and search endpoints
pub fn total_count(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

fn decode<R: DeserializeOwned>(body: &str, url: &str) -> ClientResult<R> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

#[async_trait(?Send)]
impl<T> EntityResource<T> for HttpResource<T>
where
    T: Entity + serde::Serialize + DeserializeOwned,
{
    async fn query(&self, page: &PageRequest) -> ClientResult<Page<T>> {
        let url = self.collection_url();
        self.fetch_page(self.list_request(page), &url).await
    }

    async fn get(&self, id: u64) -> ClientResult<T> {
        let url = self.item_url(id);
        log::debug!("[{}] GET {}", T::NAME, url);
        let (record, _) = self.fetch(self.client.get(&url), &url).await?;
        Ok(record)
    }

    async fn create(&self, record: &T) -> ClientResult<T> {
        let url = self.collection_url();
        log::debug!("[{}] POST {}", T::NAME, url);
        let (created, _) = self.fetch(self.client.post(&url).json(record), &url).await?;
        Ok(created)
    }

    async fn update(&self, record: &T) -> ClientResult<T> {
        let url = self.collection_url();
        log::debug!("[{}] PUT {} (id {:?})", T::NAME, url, record.id());
        let (updated, _) = self.fetch(self.client.put(&url).json(record), &url).await?;
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> ClientResult<()> {
        let url = self.item_url(id);
        log::debug!("[{}] DELETE {}", T::NAME, url);
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl<T> SearchResource<T> for HttpResource<T>
where
    T: Entity + DeserializeOwned,
{
    async fn query(&self, params: &SearchParams) -> ClientResult<Page<T>> {
        let url = self.search_url();
        self.fetch_page(self.search_request(params), &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobHistory, Location, Task};
    use reqwest::header::HeaderValue;

    fn resource<T: Entity>(base: &str) -> HttpResource<T> {
        HttpResource::new(Client::new(), ClientConfig::new(base).unwrap())
    }

    #[test]
    fn builds_collection_and_item_urls() {
        let tasks = resource::<Task>("http://localhost:8080/");
        assert_eq!(tasks.collection_url(), "http://localhost:8080/api/tasks");
        assert_eq!(tasks.item_url(42), "http://localhost:8080/api/tasks/42");
    }

    #[test]
    fn search_url_drops_the_unused_id_placeholder() {
        let histories = resource::<JobHistory>("http://h");
        assert_eq!(histories.search_url(), "http://h/api/_search/job-histories");
        let locations = resource::<Location>("http://h");
        assert_eq!(locations.search_url(), "http://h/api/_search/locations");
    }

    #[test]
    fn search_request_carries_the_encoded_query() {
        let tasks = resource::<Task>("http://h");
        let request = tasks.search_request(&SearchParams::new("title:A & b")).build().unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "http://h/api/_search/tasks?query=title%3AA+%26+b");
    }

    #[test]
    fn search_request_appends_paging_after_the_query() {
        let tasks = resource::<Task>("http://h");
        let params = SearchParams {
            query: "A".into(),
            page: PageRequest::new(1, 20).sorted_by("id,asc"),
        };
        let request = tasks.search_request(&params).build().unwrap();
        assert_eq!(request.url().query(), Some("query=A&page=1&size=20&sort=id%2Casc"));
    }

    #[test]
    fn list_request_without_paging_has_no_query_string() {
        let tasks = resource::<Task>("http://h");
        let request = tasks.list_request(&PageRequest::default()).build().unwrap();
        assert_eq!(request.url().as_str(), "http://h/api/tasks");
    }

    #[test]
    fn reads_total_count_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(total_count(&headers), None);

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("57"));
        assert_eq!(total_count(&headers), Some(57));

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("many"));
        assert_eq!(total_count(&headers), None);
    }

    #[test]
    fn decode_reports_the_url_on_bad_bodies() {
        let err = decode::<Vec<Task>>("{\"not\": \"a list\"}", "http://h/api/tasks").unwrap_err();
        match err {
            ClientError::Decode { url, .. } => assert_eq!(url, "http://h/api/tasks"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_accepts_an_array_of_records() {
        let tasks: Vec<Task> = decode(r#"[{"id":1,"title":"A"},{"id":2,"title":"B"}]"#, "u").unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].title.as_deref(), Some("B"));
    }

    #[tokio::test]
    async fn transport_failures_surface_as_errors() {
        // Nothing listens on port 9 (discard) in the test environment.
        let tasks = resource::<Task>("http://127.0.0.1:9");
        let err = EntityResource::query(&tasks, &PageRequest::default()).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport { .. }));
        assert_eq!(err.status(), None);
    }
}
