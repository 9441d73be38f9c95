use serde::{Deserialize, Serialize};
use crate::config::FormConfig;
use crate::errors::ValidationError;
use super::UserRecord;

/// Raw field values as typed into a create or edit form.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub user_id: String,
    pub hwid: String,
    pub expire_date: String,
    pub footer_message: String,
}

/// Body of the upsert endpoint. `status` is deliberately absent.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UpsertRequest {
    pub user_id: String,
    pub hwid: String,
    pub expire_date: String,
    pub footer_message: String,
}

/// Body of the delete endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub user_id: String,
}

impl FormFields {
    /// Fresh creation form: empty id and hwid, configured date and message.
    pub fn for_create(defaults: &FormConfig) -> Self {
        Self {
            user_id: String::new(),
            hwid: String::new(),
            expire_date: defaults.expire_date.clone(),
            footer_message: defaults.footer_message.clone(),
        }
    }

    /// Edit form prefilled from an existing record.
    pub fn for_edit(record: &UserRecord) -> Self {
        Self {
            user_id: record.user_id.clone(),
            hwid: record.hwid.clone(),
            expire_date: record.expire_date.clone(),
            footer_message: record.footer_message.clone(),
        }
    }

    pub fn validate_for_create(&self) -> Result<UpsertRequest, ValidationError> {
        Self::build_request(&self.user_id, self)
    }

    /// The form's own `user_id` is ignored; ids are immutable once created.
    pub fn validate_for_edit(&self, existing_id: &str) -> Result<UpsertRequest, ValidationError> {
        Self::build_request(existing_id, self)
    }

    // Only the id is checked. The date stays free text; the server decides.
    fn build_request(user_id: &str, fields: &FormFields) -> Result<UpsertRequest, ValidationError> {
        if user_id.trim().is_empty() {
            return Err(ValidationError::BlankUserId);
        }

        Ok(UpsertRequest {
            user_id: user_id.to_string(),
            hwid: fields.hwid.clone(),
            expire_date: fields.expire_date.clone(),
            footer_message: fields.footer_message.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(user_id: &str) -> FormFields {
        FormFields {
            user_id: user_id.to_string(),
            hwid: "hw-9".to_string(),
            expire_date: "not-a-date".to_string(),
            footer_message: "msg".to_string(),
        }
    }

    #[test]
    fn create_form_uses_configured_defaults() {
        let form = FormFields::for_create(&FormConfig::default());
        assert_eq!(form.user_id, "");
        assert_eq!(form.hwid, "");
        assert_eq!(form.expire_date, "2025-01-01");
        assert_eq!(form.footer_message, "Welcome");
    }

    #[test]
    fn blank_user_id_is_rejected_on_create() {
        assert_eq!(fields("").validate_for_create(), Err(ValidationError::BlankUserId));
        assert_eq!(fields("   ").validate_for_create(), Err(ValidationError::BlankUserId));
    }

    #[test]
    fn free_text_fields_pass_through_untouched() {
        let request = fields("u1").validate_for_create().unwrap();
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.hwid, "hw-9");
        assert_eq!(request.expire_date, "not-a-date");
        assert_eq!(request.footer_message, "msg");
    }

    #[test]
    fn edit_keeps_existing_id_even_if_form_was_changed() {
        let request = fields("someone-else").validate_for_edit("u1").unwrap();
        assert_eq!(request.user_id, "u1");

        let request = fields("").validate_for_edit("u1").unwrap();
        assert_eq!(request.user_id, "u1");
    }

    #[test]
    fn edit_form_prefills_from_record() {
        let record = UserRecord {
            user_id: "u1".to_string(),
            status: "Online".to_string(),
            hwid: "hw1".to_string(),
            expire_date: "2025-06-01".to_string(),
            footer_message: "hi".to_string(),
        };
        let form = FormFields::for_edit(&record);
        assert_eq!(form.user_id, "u1");
        assert_eq!(form.hwid, "hw1");
        assert_eq!(form.expire_date, "2025-06-01");
        assert_eq!(form.footer_message, "hi");
    }

    #[test]
    fn upsert_body_has_exactly_four_keys() {
        let request = fields("u1").validate_for_create().unwrap();
        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert!(!object.contains_key("status"));
    }
}
