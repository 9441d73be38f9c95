use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use crate::errors::{AppError, AppResult};
use crate::models::RecordSet;
use crate::services::Registry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Loading,
    Error(String),
}

/// What the rendering layer sees: a state tag and the records that go with it.
///
/// `records` is empty while loading and after a failed refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: SyncState,
    pub records: Arc<RecordSet>,
    pub generation: u64,
}

impl Snapshot {
    fn initial() -> Self {
        Self {
            state: SyncState::Idle,
            records: Arc::new(Vec::new()),
            generation: 0,
        }
    }
}

/// Owns the local copy of the record set and replaces it wholesale on refresh.
pub struct SyncController<R: ?Sized> {
    registry: Arc<R>,
    generation: AtomicU64,
    snapshot: watch::Sender<Snapshot>,
}

impl<R: Registry + ?Sized> SyncController<R> {
    pub fn new(registry: Arc<R>) -> Self {
        let (snapshot, _) = watch::channel(Snapshot::initial());
        Self {
            registry,
            generation: AtomicU64::new(0),
            snapshot,
        }
    }

    pub fn registry(&self) -> &Arc<R> {
        &self.registry
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    /// Clears the displayed set, fetches the full list and installs it.
    ///
    /// On failure the set stays empty and the state carries the message.
    /// Overlapping calls each fetch; only the most recently started one
    /// may install its outcome.
    pub async fn refresh(&self) -> AppResult<Arc<RecordSet>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Refresh {} started", generation);
        self.publish(generation, SyncState::Loading, Arc::new(Vec::new()));

        match self.registry.list().await {
            Ok(records) => {
                let records = Arc::new(records);
                if self.publish(generation, SyncState::Idle, records.clone()) {
                    tracing::info!("Refresh {} loaded {} records", generation, records.len());
                }
                Ok(records)
            }
            Err(e) => {
                let error = AppError::from(e);
                if self.publish(generation, SyncState::Error(error.to_string()), Arc::new(Vec::new())) {
                    tracing::error!("Refresh {} failed: {}", generation, error);
                }
                Err(error)
            }
        }
    }

    // Returns false when a newer refresh has already published.
    fn publish(&self, generation: u64, state: SyncState, records: Arc<RecordSet>) -> bool {
        self.snapshot.send_if_modified(|current| {
            if generation < current.generation {
                tracing::warn!(
                    "Dropping outcome of refresh {}; refresh {} is newer",
                    generation,
                    current.generation
                );
                return false;
            }
            *current = Snapshot { state, records, generation };
            true
        })
    }
}
