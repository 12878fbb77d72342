//! Collection state management module.
//!
//! This module contains the core state management for the restaurant
//! collection, including:
//! - The `Store` coordinating load/create intents against the remote service
//! - The `CollectionState`/`Snapshot` read state it exposes
//! - The `NewRestaurantForm` per-submission form model

mod form;
mod store;

pub use form::NewRestaurantForm;
pub use store::{CollectionState, Snapshot, Store};
