mod mutation;

pub use mutation::{DeleteConfirmation, MutationWorkflow};
