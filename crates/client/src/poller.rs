//! Periodic refresh of unread notifications.
//!
//! Every fetch carries a sequence number. A response is applied only when its
//! sequence is newer than the last applied one, so a slow response can never
//! overwrite the result of a later fetch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::join_all;
use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use tucash_core::errors::Result;
use tucash_core::notifications::{Notification, NotificationClientTrait};

/// What the notification bell shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationSnapshot {
    pub unread: Vec<Notification>,
    pub unread_count: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl NotificationSnapshot {
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }

    fn set_unread(&mut self, unread: Vec<Notification>) {
        self.unread_count = unread.len();
        self.unread = unread;
    }
}

struct PollerState {
    client: Arc<dyn NotificationClientTrait>,
    issued: AtomicU64,
    applied: Mutex<u64>,
    snapshot: watch::Sender<NotificationSnapshot>,
}

impl PollerState {
    async fn fetch(&self) {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.snapshot.send_modify(|s| s.is_loading = true);

        let result = self.client.list_unread_notifications().await;

        let mut applied = self.applied.lock().unwrap_or_else(|e| e.into_inner());
        if sequence <= *applied {
            debug!(
                "Discarding stale notification response #{} (latest applied #{})",
                sequence, *applied
            );
            if sequence == self.issued.load(Ordering::SeqCst) {
                self.snapshot.send_modify(|s| s.is_loading = false);
            }
            return;
        }
        *applied = sequence;

        match result {
            Ok(unread) => {
                debug!("Notification poll #{}: {} unread", sequence, unread.len());
                self.snapshot.send_modify(|s| {
                    s.set_unread(unread);
                    s.is_loading = false;
                    s.error = None;
                });
            }
            Err(e) => {
                warn!("Notification poll #{} failed: {}", sequence, e);
                self.snapshot.send_modify(|s| {
                    s.set_unread(Vec::new());
                    s.is_loading = false;
                    s.error = Some(e.message_key().to_string());
                });
            }
        }
    }

    /// Makes every fetch issued so far stale, so a local change is not
    /// undone by a response that predates it.
    fn supersede_in_flight(&self) {
        let mut applied = self.applied.lock().unwrap_or_else(|e| e.into_inner());
        *applied = (*applied).max(self.issued.load(Ordering::SeqCst));
    }
}

/// Polls `/notifications/unread` on a fixed interval and publishes the result
/// through a `watch` channel.
pub struct NotificationPoller {
    state: Arc<PollerState>,
    period: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl NotificationPoller {
    pub fn new(client: Arc<dyn NotificationClientTrait>, period: Duration) -> Self {
        let (snapshot, _) = watch::channel(NotificationSnapshot::default());
        Self {
            state: Arc::new(PollerState {
                client,
                issued: AtomicU64::new(0),
                applied: Mutex::new(0),
                snapshot,
            }),
            period,
            task: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<NotificationSnapshot> {
        self.state.snapshot.subscribe()
    }

    pub fn snapshot(&self) -> NotificationSnapshot {
        self.state.snapshot.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        let task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        task.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Starts polling; the first fetch happens immediately. Calling it again
    /// while running has no effect. Must be called inside a tokio runtime.
    pub fn start(&self) {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return;
        }

        let state = Arc::clone(&self.state);
        let period = self.period;
        info!("Starting notification polling every {:?}", period);
        *task = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                state.fetch().await;
            }
        }));
    }

    pub fn stop(&self) {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = task.take() {
            handle.abort();
            info!("Stopped notification polling");
        }
    }

    /// Fetches now, outside the regular schedule.
    pub async fn refresh(&self) {
        self.state.fetch().await;
    }

    /// Marks one notification read and drops it from the unread list.
    pub async fn mark_as_read(&self, notification_id: i64) -> Result<()> {
        self.state
            .client
            .mark_notification_as_read(notification_id)
            .await?;
        self.state.supersede_in_flight();
        self.state.snapshot.send_modify(|s| {
            let remaining: Vec<Notification> = s
                .unread
                .drain(..)
                .filter(|n| n.id != notification_id)
                .collect();
            s.set_unread(remaining);
        });
        Ok(())
    }

    /// Marks every listed notification read, one request each. Items whose
    /// request failed stay in the list and the first error is returned.
    pub async fn mark_all_as_read(&self) -> Result<()> {
        let ids: Vec<i64> = self.snapshot().unread.iter().map(|n| n.id).collect();
        if ids.is_empty() {
            return Ok(());
        }

        let client = &self.state.client;
        let results = join_all(ids.iter().map(|id| client.mark_notification_as_read(*id))).await;

        let mut failed = Vec::new();
        let mut first_error = None;
        for (id, result) in ids.into_iter().zip(results) {
            if let Err(e) = result {
                warn!("Failed to mark notification {} as read: {}", id, e);
                failed.push(id);
                first_error.get_or_insert(e);
            }
        }

        self.state.supersede_in_flight();
        self.state.snapshot.send_modify(|s| {
            let remaining: Vec<Notification> = s
                .unread
                .drain(..)
                .filter(|n| failed.contains(&n.id))
                .collect();
            s.set_unread(remaining);
        });

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
