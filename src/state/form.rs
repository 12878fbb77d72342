//! Form submission state types.
//!
//! Creation errors are per-attempt and tied to a specific submission, so
//! they live here in the calling layer rather than in the shared
//! collection state.

use super::store::Store;
use crate::api::RestaurantApi;

/// Tracks the state a new-restaurant form owns itself: the in-progress
/// name input, a validation indicator, and a per-submission server error
/// indicator.
///
#[derive(Debug, Default)]
pub struct NewRestaurantForm {
    name: String,
    validation_error: bool,
    server_error: bool,
}

impl NewRestaurantForm {
    /// Returns a new empty form.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current name input.
    ///
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the current name input.
    ///
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns whether the last submission was rejected for a blank name.
    ///
    pub fn validation_error(&self) -> bool {
        self.validation_error
    }

    /// Returns whether the last submission was rejected by the server.
    ///
    pub fn server_error(&self) -> bool {
        self.server_error
    }

    /// Submit the current name to the store.
    ///
    /// Both indicators reset at the start of every attempt. A blank name
    /// raises the validation indicator without reaching the store. A
    /// rejected create raises the server indicator and keeps the input so
    /// the user can retry; a confirmed create clears the input.
    ///
    pub async fn submit<A: RestaurantApi>(&mut self, store: &Store<A>) {
        self.validation_error = false;
        self.server_error = false;

        if self.name.trim().is_empty() {
            self.validation_error = true;
            return;
        }

        match store.create(&self.name).await {
            Ok(_) => self.name.clear(),
            Err(e) => {
                log::warn!("Failed to create restaurant: {}", e);
                self.server_error = true;
            }
        }
    }
}
