//! Client-side administration of license records held by a remote registry.
//!
//! [`SyncController`] owns the local record set and refreshes it from a
//! [`Registry`]; [`MutationWorkflow`] validates and submits create, edit and
//! delete requests and resynchronizes after each success.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod sync;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use errors::{AppError, AppResult, RegistryError, ValidationError};
pub use models::{FormFields, RecordSet, UpsertRequest, UserRecord};
pub use services::{Registry, RegistryService};
pub use sync::{Snapshot, SyncController, SyncState};
pub use workflow::{DeleteConfirmation, MutationWorkflow};
