//! Entity Client
//!
//! Everything the admin front end does besides rendering:
//! - models: entity records as the REST API serves them
//! - resource / http: data-access contracts and their reqwest implementation
//! - bus: typed update broadcast between editors and open detail views
//! - controller: list, detail and edit view-models
//! - services: composition root wiring all of the above

pub mod bus;
pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod models;
pub mod resource;
pub mod services;

#[cfg(test)]
mod testing;

pub use bus::{Subscription, UpdateBus, UpdateChannel};
pub use config::ClientConfig;
pub use controller::{DetailController, EditController, ListController};
pub use error::{ClientError, ClientResult};
pub use http::HttpResource;
pub use models::{Department, Entity, EntityRef, Job, JobHistory, Language, Location, Task};
pub use resource::{EntityResource, Page, PageRequest, SearchParams, SearchResource};
pub use services::Services;
