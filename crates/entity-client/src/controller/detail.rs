//! Detail Controller
//!
//! Binds one record to a view and keeps it current: every record published
//! on the entity's update channel replaces the bound one until the view is
//! torn down and `dispose` releases the subscription.

use leptos::prelude::*;

use crate::bus::{Subscription, UpdateChannel};
use crate::error::ClientResult;
use crate::models::Entity;
use crate::resource::EntityResource;

pub struct DetailController<T: Entity> {
    record: RwSignal<T>,
    previous_state: String,
    subscription: Subscription,
}

impl<T: Entity> DetailController<T> {
    /// Bind an already resolved record and start listening on `channel`
    pub fn new(entity: T, previous_state: impl Into<String>, channel: &UpdateChannel<T>) -> Self {
        let record = RwSignal::new(entity);
        let subscription = channel.subscribe(move |updated: &T| record.set(updated.clone()));
        Self {
            record,
            previous_state: previous_state.into(),
            subscription,
        }
    }

    /// Resolve the record by id, then bind it
    pub async fn resolve(
        resource: &dyn EntityResource<T>,
        id: u64,
        previous_state: impl Into<String>,
        channel: &UpdateChannel<T>,
    ) -> ClientResult<Self> {
        let entity = resource.get(id).await?;
        Ok(Self::new(entity, previous_state, channel))
    }

    pub fn record(&self) -> ReadSignal<T> {
        self.record.read_only()
    }

    /// Name of the view to navigate back to
    pub fn previous_state(&self) -> &str {
        &self.previous_state
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_active()
    }

    /// Stop following updates; the bound record keeps its last value
    pub fn dispose(&mut self) {
        self.subscription.dispose();
    }
}
