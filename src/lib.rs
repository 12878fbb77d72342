//! Client-side state management for a remote restaurant collection.
//!
//! This crate coordinates one in-flight load operation and any number of
//! create operations against a remote collection, exposing a consistent
//! view of `{records, loading, load_error}` to a presentation layer:
//! - [`state::Store`] is the single source of truth for collection state
//!   and owns the `load`/`create` intents
//! - [`api`] defines the remote service contract and an HTTP implementation
//! - [`state::NewRestaurantForm`] models the per-submission state a
//!   presentation layer owns when creating a record
//! - [`config`] supplies the service base URL from a configuration file

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use api::{Api, ApiError, Record, RestaurantApi};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::{CollectionState, NewRestaurantForm, Snapshot, Store};
