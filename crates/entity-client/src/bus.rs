//! Update Bus
//!
//! Typed publish/subscribe channels carrying freshly saved records to every
//! open view of that entity type. One channel per entity type; subscribing
//! hands back a `Subscription` that releases the listener when disposed or
//! dropped.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{Department, Entity, Job, JobHistory, Location, Task};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// Broadcast channel for updates of one entity type
pub struct UpdateChannel<T> {
    name: Arc<str>,
    listeners: Arc<Mutex<Listeners<T>>>,
}

impl<T> Clone for UpdateChannel<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

fn lock<T>(listeners: &Mutex<Listeners<T>>) -> MutexGuard<'_, Listeners<T>> {
    // Listeners run outside the lock, so a poisoned list is still consistent
    listeners.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T: Entity> UpdateChannel<T> {
    /// Channel named `<namespace>:<entityName>Update`
    pub fn new(namespace: &str) -> Self {
        Self {
            name: format!("{}:{}Update", namespace, T::NAME).into(),
            listeners: Arc::new(Mutex::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a listener; it stays live until the returned handle is
    /// disposed or dropped
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let listener: Listener<T> = Arc::new(listener);
        let id = {
            let mut guard = lock(&self.listeners);
            let id = guard.next_id;
            guard.next_id += 1;
            guard.entries.push((id, listener));
            id
        };
        log::debug!("[bus] subscribed #{} to {}", id, self.name);

        let listeners = Arc::downgrade(&self.listeners);
        let name = self.name.clone();
        Subscription {
            release: Some(Box::new(move || {
                if let Some(listeners) = listeners.upgrade() {
                    lock(&listeners).entries.retain(|(entry, _)| *entry != id);
                    log::debug!("[bus] released #{} from {}", id, name);
                }
            })),
        }
    }

    /// Deliver `record` to every live listener in subscription order.
    /// Returns how many listeners saw it.
    pub fn publish(&self, record: &T) -> usize {
        // Snapshot so listeners may subscribe or unsubscribe re-entrantly
        let snapshot: Vec<Listener<T>> = lock(&self.listeners)
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        log::debug!("[bus] {} -> {} listeners (id {:?})", self.name, snapshot.len(), record.id());
        for listener in &snapshot {
            listener(record);
        }
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).entries.len()
    }
}

/// Disposer for one listener registration
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Release the listener. Calling it again is a no-op.
    pub fn dispose(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// One update channel per managed entity type
#[derive(Clone)]
pub struct UpdateBus {
    pub department: UpdateChannel<Department>,
    pub location: UpdateChannel<Location>,
    pub task: UpdateChannel<Task>,
    pub job: UpdateChannel<Job>,
    pub job_history: UpdateChannel<JobHistory>,
}

impl UpdateBus {
    pub fn new(ns: &str) -> Self {
        Self {
            department: UpdateChannel::new(ns),
            location: UpdateChannel::new(ns),
            task: UpdateChannel::new(ns),
            job: UpdateChannel::new(ns),
            job_history: UpdateChannel::new(ns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_NAMESPACE;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn job(id: u64, title: &str) -> Job {
        Job {
            id: Some(id),
            job_title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn channel_names_follow_the_namespace_pattern() {
        let bus = UpdateBus::new(DEFAULT_NAMESPACE);
        assert_eq!(bus.job.name(), "jhipsterApp:jobUpdate");
        assert_eq!(bus.job_history.name(), "jhipsterApp:jobHistoryUpdate");
        assert_eq!(bus.department.name(), "jhipsterApp:departmentUpdate");
    }

    #[test]
    fn publish_reaches_every_listener_in_order() {
        let channel = UpdateChannel::<Job>::new("app");
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = {
            let seen = seen.clone();
            channel.subscribe(move |j: &Job| seen.lock().unwrap().push(("first", j.id)))
        };
        let second = {
            let seen = seen.clone();
            channel.subscribe(move |j: &Job| seen.lock().unwrap().push(("second", j.id)))
        };

        assert_eq!(channel.publish(&job(5, "Dev")), 2);
        assert_eq!(*seen.lock().unwrap(), vec![("first", Some(5)), ("second", Some(5))]);
        drop((first, second));
    }

    #[test]
    fn disposed_subscriptions_stop_receiving() {
        let channel = UpdateChannel::<Job>::new("app");
        let hits = Arc::new(AtomicUsize::new(0));
        let mut sub = {
            let hits = hits.clone();
            channel.subscribe(move |_: &Job| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        channel.publish(&job(1, "a"));
        sub.dispose();
        sub.dispose();
        channel.publish(&job(1, "b"));

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!sub.is_active());
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn dropping_a_subscription_releases_it() {
        let channel = UpdateChannel::<Job>::new("app");
        {
            let _sub = channel.subscribe(|_: &Job| {});
            assert_eq!(channel.listener_count(), 1);
        }
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn channels_of_different_entities_are_isolated() {
        let bus = UpdateBus::new(DEFAULT_NAMESPACE);
        let hits = Arc::new(AtomicUsize::new(0));
        let _sub = {
            let hits = hits.clone();
            bus.job.subscribe(move |_: &Job| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };

        bus.job_history.publish(&JobHistory::default());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn subscription_outliving_its_channel_releases_quietly() {
        let channel = UpdateChannel::<Job>::new("app");
        let mut sub = channel.subscribe(|_: &Job| {});
        drop(channel);
        sub.dispose();
        assert!(!sub.is_active());
    }
}
