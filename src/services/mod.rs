mod registry_service;

pub use registry_service::{Registry, RegistryService};
