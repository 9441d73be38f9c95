use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One license entry as reported by the registry's list endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(deserialize_with = "scalar_string")]
    pub user_id: String,
    #[serde(default = "default_status", deserialize_with = "status_or_offline")]
    pub status: String,        // server-reported, never sent back
    #[serde(default, deserialize_with = "scalar_string")]
    pub hwid: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub expire_date: String,   // YYYY-MM-DD by convention, not checked
    #[serde(default, deserialize_with = "scalar_string")]
    pub footer_message: String,
}

/// Records in server response order.
pub type RecordSet = Vec<UserRecord>;

fn default_status() -> String {
    "Offline".to_string()
}

// Nullable columns arrive as `null`, numeric ids as numbers.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn status_or_offline<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let status = scalar_string(deserializer)?;
    Ok(if status.is_empty() { default_status() } else { status })
}
