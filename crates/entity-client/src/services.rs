//! Composition Root
//!
//! Builds every resource and the update bus once, from one `ClientConfig`,
//! and hands out controllers wired to them.

use std::rc::Rc;

use reqwest::Client;

use crate::bus::UpdateBus;
use crate::config::ClientConfig;
use crate::controller::{DetailController, EditController, ListController};
use crate::error::ClientResult;
use crate::http::HttpResource;
use crate::resource::EntityResource;
use crate::models::{Department, Entity, Job, JobHistory, Location, Task};

/// Resources and update channels for the whole application
#[derive(Clone)]
pub struct Services {
    pub config: ClientConfig,
    pub bus: UpdateBus,
    pub departments: Rc<HttpResource<Department>>,
    pub locations: Rc<HttpResource<Location>>,
    pub tasks: Rc<HttpResource<Task>>,
    pub jobs: Rc<HttpResource<Job>>,
    pub job_histories: Rc<HttpResource<JobHistory>>,
}

impl Services {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::new();
        Self {
            bus: UpdateBus::new(config.namespace()),
            departments: Rc::new(HttpResource::new(client.clone(), config.clone())),
            locations: Rc::new(HttpResource::new(client.clone(), config.clone())),
            tasks: Rc::new(HttpResource::new(client.clone(), config.clone())),
            jobs: Rc::new(HttpResource::new(client.clone(), config.clone())),
            job_histories: Rc::new(HttpResource::new(client, config.clone())),
            config,
        }
    }

    pub fn department_list(&self) -> ListController<Department> {
        list(&self.departments)
    }

    pub fn location_list(&self) -> ListController<Location> {
        list(&self.locations)
    }

    pub fn task_list(&self) -> ListController<Task> {
        list(&self.tasks)
    }

    /// Router-side resolution of a job by id
    pub async fn resolve_job(&self, id: u64) -> ClientResult<Job> {
        self.jobs.get(id).await
    }

    pub async fn resolve_job_history(&self, id: u64) -> ClientResult<JobHistory> {
        self.job_histories.get(id).await
    }

    pub fn job_detail(&self, entity: Job, previous_state: &str) -> DetailController<Job> {
        DetailController::new(entity, previous_state, &self.bus.job)
    }

    pub fn job_history_detail(&self, entity: JobHistory, previous_state: &str) -> DetailController<JobHistory> {
        DetailController::new(entity, previous_state, &self.bus.job_history)
    }

    pub fn job_editor(&self) -> EditController<Job> {
        EditController::new(self.jobs.clone(), self.bus.job.clone())
    }
}

fn list<T>(resource: &Rc<HttpResource<T>>) -> ListController<T>
where
    T: Entity + serde::Serialize + serde::de::DeserializeOwned,
{
    ListController::new(resource.clone(), resource.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::reactive_owner;

    #[test]
    fn resources_share_the_configured_base() {
        let services = Services::new(ClientConfig::new("http://api.local").unwrap());
        assert_eq!(services.departments.collection_url(), "http://api.local/api/departments");
        assert_eq!(services.job_histories.search_url(), "http://api.local/api/_search/job-histories");
    }

    #[test]
    fn bus_channels_use_the_configured_namespace() {
        let services = Services::new(ClientConfig::new("http://api.local").unwrap().with_namespace("hrApp"));
        assert_eq!(services.bus.job.name(), "hrApp:jobUpdate");
    }

    #[test]
    fn editors_publish_where_detail_views_listen() {
        let _owner = reactive_owner();
        let services = Services::new(ClientConfig::new("http://api.local").unwrap());
        let detail = services.job_detail(Job::default(), "job");
        let _editor = services.job_editor();

        assert_eq!(services.bus.job.listener_count(), 1);
        drop(detail);
        assert_eq!(services.bus.job.listener_count(), 0);
    }
}
