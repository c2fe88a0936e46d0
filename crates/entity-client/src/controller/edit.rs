//! Edit Controller
//!
//! Saves a record (create when it has no id, update otherwise) and
//! announces the saved version on the entity's update channel so open
//! detail views pick it up.

use std::rc::Rc;

use leptos::prelude::*;

use crate::bus::UpdateChannel;
use crate::error::{ClientError, ClientResult};
use crate::models::Entity;
use crate::resource::EntityResource;

pub struct EditController<T: Entity> {
    resource: Rc<dyn EntityResource<T>>,
    channel: UpdateChannel<T>,
    is_saving: RwSignal<bool>,
}

impl<T: Entity> Clone for EditController<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            channel: self.channel.clone(),
            is_saving: self.is_saving,
        }
    }
}

impl<T: Entity> EditController<T> {
    pub fn new(resource: Rc<dyn EntityResource<T>>, channel: UpdateChannel<T>) -> Self {
        Self {
            resource,
            channel,
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_saving(&self) -> ReadSignal<bool> {
        self.is_saving.read_only()
    }

    /// Persist `record` and publish the server's version of it.
    /// Nothing is published when the save fails.
    pub async fn save(&self, record: &T) -> ClientResult<T> {
        self.is_saving.set(true);
        let result = match record.id() {
            None => self.resource.create(record).await,
            Some(_) => self.resource.update(record).await,
        };
        self.is_saving.set(false);

        let saved = result?;
        self.channel.publish(&saved);
        Ok(saved)
    }

    pub async fn delete(&self, record: &T) -> ClientResult<()> {
        let id = record.id().ok_or(ClientError::MissingId(T::NAME))?;
        self.resource.delete(id).await
    }
}
