use crate::api::{ApiError, Record, RestaurantApi};
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Houses data representative of the restaurant collection state.
///
/// The collection is only ever replaced wholesale (load success) or
/// extended by one record (create success); a failed operation never
/// mutates it. The two flags are mutually exclusive: `loading` is raised
/// only while a load is outstanding, `load_error` only when the most
/// recent load failed and no newer load has started.
///
#[derive(Clone, Debug, Default)]
pub struct CollectionState {
    records: Vec<Record>,
    loading: bool,
    load_error: bool,
}

impl CollectionState {
    /// Returns the loaded records in server order, with any created records
    /// appended in confirmation order.
    ///
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns whether a load operation is outstanding.
    ///
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Returns whether the most recent load attempt failed.
    ///
    pub fn load_error(&self) -> bool {
        self.load_error
    }

    /// Returns an owned snapshot of the read state.
    ///
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: self.records.clone(),
            loading: self.loading,
            load_error: self.load_error,
        }
    }

    /// Flags the start of a load, clearing any stale error before the
    /// outcome is known.
    ///
    pub(crate) fn start_loading(&mut self) {
        self.loading = true;
        self.load_error = false;
    }

    /// Replaces the collection wholesale with the loaded records.
    ///
    pub(crate) fn store_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.loading = false;
    }

    /// Flags a failed load. The previously loaded records are kept.
    ///
    pub(crate) fn record_loading_error(&mut self) {
        self.load_error = true;
        self.loading = false;
    }

    /// Appends a single server-confirmed record.
    ///
    pub(crate) fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }
}

/// Observable snapshot of the collection state.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub records: Vec<Record>,
    pub loading: bool,
    pub load_error: bool,
}

/// Single source of truth for the restaurant collection. Mediates all
/// reads and writes, so a presentation layer never observes an
/// inconsistent combination of flags.
///
pub struct Store<A: RestaurantApi> {
    api: A,
    state: Arc<Mutex<CollectionState>>,
}

impl<A: RestaurantApi> Store<A> {
    /// Returns a new store with an empty collection, backed by the given
    /// service.
    ///
    pub fn new(api: A) -> Self {
        Store {
            api,
            state: Arc::new(Mutex::new(CollectionState::default())),
        }
    }

    /// Returns a handle to the shared collection state for presentation
    /// reads.
    ///
    pub fn state(&self) -> Arc<Mutex<CollectionState>> {
        Arc::clone(&self.state)
    }

    /// Returns an owned snapshot of the current read state.
    ///
    pub async fn snapshot(&self) -> Snapshot {
        self.state.lock().await.snapshot()
    }

    /// Fetch the full collection from the service.
    ///
    /// The loading flag is raised and any stale error cleared before the
    /// fetch is awaited, so callers observing state while the request is in
    /// flight see `loading=true, load_error=false`. A failed fetch flags
    /// `load_error` and keeps the previously loaded records rather than
    /// clearing known-good data.
    ///
    /// Concurrent calls are not serialized and carry no sequencing token:
    /// if two loads overlap, whichever resolution is applied last wins.
    ///
    pub async fn load(&self) {
        info!("Loading restaurants...");
        self.state.lock().await.start_loading();

        match self.api.load_restaurants().await {
            Ok(records) => {
                info!("Received {} restaurants.", records.len());
                self.state.lock().await.store_records(records);
            }
            Err(e) => {
                error!("Failed to load restaurants: {}", e);
                self.state.lock().await.record_loading_error();
            }
        }
    }

    /// Create a restaurant with the given name and append it to the
    /// collection once the server confirms it. Create does not touch the
    /// loading flag; the list stays readable throughout.
    ///
    /// A failed create leaves the collection untouched and returns the
    /// error, so the caller can surface it next to the submission that
    /// caused it. Validation of the name is the caller's concern.
    ///
    pub async fn create(&self, name: &str) -> Result<Record, ApiError> {
        info!("Creating restaurant '{}'...", name);
        let record = self.api.create_restaurant(name).await?;
        self.state.lock().await.add_record(record.clone());
        Ok(record)
    }
}
