mod user;
mod forms;

pub use user::{UserRecord, RecordSet};
pub use forms::{FormFields, UpsertRequest, DeleteRequest};
