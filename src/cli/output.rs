//! Output formatting

use clap::ValueEnum;
use tabled::{Table, Tabled};
use license_admin::{Snapshot, SyncState, UserRecord};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Card,
    Table,
    Json,
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    user_id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "HWID")]
    hwid: String,
    #[tabled(rename = "Expire")]
    expire_date: String,
    #[tabled(rename = "Message")]
    footer_message: String,
}

impl OutputFormat {
    pub fn print(&self, snapshot: &Snapshot) {
        println!("{}", self.render(snapshot));
    }

    pub fn render(&self, snapshot: &Snapshot) -> String {
        match &snapshot.state {
            SyncState::Error(message) => return format!("Error: {}", message),
            SyncState::Loading => return "Loading...".to_string(),
            SyncState::Idle => {}
        }

        let records = snapshot.records.as_slice();
        match self {
            OutputFormat::Json => serde_json::to_string_pretty(records).unwrap_or_default(),
            OutputFormat::Table => {
                let rows = records.iter().map(|r| RecordRow {
                    user_id: r.user_id.clone(),
                    status: r.status.clone(),
                    hwid: r.hwid.clone(),
                    expire_date: r.expire_date.clone(),
                    footer_message: r.footer_message.clone(),
                });
                Table::new(rows).to_string()
            }
            OutputFormat::Card => records
                .iter()
                .map(render_card)
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

fn render_card(record: &UserRecord) -> String {
    format!(
        "ID: {} | Status: {}\nHWID: {}\nExpire: {}",
        or_dash(&record.user_id),
        or_dash(&record.status),
        or_dash(&record.hwid),
        or_dash(&record.expire_date)
    )
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn snapshot(state: SyncState, records: Vec<UserRecord>) -> Snapshot {
        Snapshot { state, records: Arc::new(records), generation: 1 }
    }

    fn record() -> UserRecord {
        UserRecord {
            user_id: "u1".to_string(),
            status: "Online".to_string(),
            hwid: String::new(),
            expire_date: "2025-06-01".to_string(),
            footer_message: "hi".to_string(),
        }
    }

    #[test]
    fn card_marks_blank_fields() {
        let text = OutputFormat::Card.render(&snapshot(SyncState::Idle, vec![record()]));
        assert_eq!(text, "ID: u1 | Status: Online\nHWID: -\nExpire: 2025-06-01");
    }

    #[test]
    fn error_replaces_list() {
        let text = OutputFormat::Table.render(&snapshot(SyncState::Error("boom".into()), vec![]));
        assert_eq!(text, "Error: boom");
    }

    #[test]
    fn json_keeps_wire_field_names() {
        let text = OutputFormat::Json.render(&snapshot(SyncState::Idle, vec![record()]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["user_id"], "u1");
        assert_eq!(value[0]["footer_message"], "hi");
    }

    #[test]
    fn table_has_header_and_row() {
        let text = OutputFormat::Table.render(&snapshot(SyncState::Idle, vec![record()]));
        assert!(text.contains("HWID"));
        assert!(text.contains("u1"));
    }
}
