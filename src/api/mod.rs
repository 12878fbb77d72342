mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::Record;

use client::Client;
use log::*;
use std::future::Future;

/// Contract for the remote restaurant collection: fetch every record, or
/// create a single one. The store is generic over this trait so tests (and
/// alternative transports) can substitute their own implementation.
///
/// No retry, batching, or caching happens at this boundary; all such policy
/// lives in or above the store.
///
pub trait RestaurantApi: Send + Sync {
    /// Return every record in the collection.
    fn load_restaurants(&self) -> impl Future<Output = Result<Vec<Record>, ApiError>> + Send;

    /// Create a record with the given name and return it as stored by the
    /// server.
    fn create_restaurant(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Record, ApiError>> + Send;
}

/// Responsible for asynchronous interaction with the restaurant service
/// over HTTP, including transformation of response data into
/// explicitly-defined types.
///
pub struct Api {
    client: Client,
}

impl Api {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Api {
        debug!(
            "Initializing restaurant client with base URL {}...",
            base_url
        );
        Api {
            client: Client::new(base_url),
        }
    }
}

impl RestaurantApi for Api {
    async fn load_restaurants(&self) -> Result<Vec<Record>, ApiError> {
        debug!("Requesting all restaurants...");
        let records: Vec<Record> = self.client.get("restaurants").await?;
        debug!("Retrieved {} restaurants.", records.len());
        Ok(records)
    }

    async fn create_restaurant(&self, name: &str) -> Result<Record, ApiError> {
        debug!("Creating restaurant '{}'...", name);
        let record: Record = self
            .client
            .post("restaurants", serde_json::json!({ "name": name }))
            .await?;
        debug!("Created restaurant '{}' with id {}.", record.name, record.id);
        Ok(record)
    }
}
