use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What actually goes over the wire: the form as typed plus when it was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub form: FormData,
    pub timestamp: String,
}

impl SubmissionPayload {
    pub fn new(form: FormData, sent_at: DateTime<Utc>) -> Self {
        Self {
            form,
            timestamp: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_field_access() {
        let mut form = FormData::default();
        form.set(Field::Name, "Jo".to_string());
        form.set(Field::Email, "jo@x.com".to_string());
        form.set(Field::Message, "Hi".to_string());
        assert_eq!(form.get(Field::Name), "Jo");
        assert_eq!(form.get(Field::Email), "jo@x.com");
        assert_eq!(form.get(Field::Message), "Hi");

        form.clear();
        assert_eq!(form, FormData::default());
    }

    #[test]
    fn test_payload_is_flat_json_with_iso_timestamp() {
        let form = FormData {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            message: "Hi".to_string(),
        };
        let sent_at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let payload = SubmissionPayload::new(form, sent_at);

        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jo",
                "email": "jo@x.com",
                "message": "Hi",
                "timestamp": "2025-03-14T09:26:53.000Z",
            })
        );
    }
}
