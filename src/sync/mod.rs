mod controller;

pub use controller::{Snapshot, SyncController, SyncState};
