//! Entity Models
//!
//! Records as served by `api/<collection>`. This layer never validates them:
//! every field besides `id` is optional and unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Core trait for every record the client manages
pub trait Entity: Clone + PartialEq + Send + Sync + 'static {
    /// REST collection segment (`api/<COLLECTION>`)
    const COLLECTION: &'static str;
    /// Camel-case entity name used in channel names
    const NAME: &'static str;

    /// Server-assigned id; `None` until the record has been created
    fn id(&self) -> Option<u64>;
}

macro_rules! impl_entity {
    ($ty:ty, $collection:literal, $name:literal) => {
        impl Entity for $ty {
            const COLLECTION: &'static str = $collection;
            const NAME: &'static str = $name;

            fn id(&self) -> Option<u64> {
                self.id
            }
        }
    };
}

/// Relation to a record this client does not manage (e.g. Employee).
/// Fields other than `id` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: Option<u64>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Option<u64>,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state_province: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: Option<u64>,
    pub department_name: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Option<u64>,
    pub job_title: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub employee: Option<EntityRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    French,
    English,
    Spanish,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHistory {
    pub id: Option<u64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub language: Option<Language>,
    pub job: Option<Job>,
    pub department: Option<Department>,
    pub employee: Option<EntityRef>,
}

impl_entity!(Department, "departments", "department");
impl_entity!(Location, "locations", "location");
impl_entity!(Task, "tasks", "task");
impl_entity!(Job, "jobs", "job");
impl_entity!(JobHistory, "job-histories", "jobHistory");
