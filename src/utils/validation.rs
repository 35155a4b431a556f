use crate::models::qr_content::QrContent;
use crate::models::qr_kind::{Endpoint, QrKind};
use crate::structs::qr_request::FieldValues;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    MissingField {
        field: &'static str,
        label: &'static str,
    },
    #[error("Invalid group link code")]
    InvalidGroupCode,
}

/// Check the endpoint's required fields in declaration order and build the
/// record for its kind. Only presence is checked, apart from the WhatsApp
/// group invite code which must be alphanumeric.
pub fn validate(endpoint: &Endpoint, values: &FieldValues) -> Result<QrContent, ValidationError> {
    if let Some(missing) = endpoint
        .required_fields()
        .find(|field| values.get(field.name).is_none())
    {
        return Err(ValidationError::MissingField {
            field: missing.name,
            label: missing.label,
        });
    }

    let content = match endpoint.kind {
        QrKind::PlainText => QrContent::PlainText {
            text: values.get_or_empty("text"),
        },
        QrKind::WhatsApp => {
            let number = values.get_or_empty("number");
            if values.get("isGroup") == Some("true") {
                if !is_group_code(&number) {
                    return Err(ValidationError::InvalidGroupCode);
                }
                QrContent::WhatsAppGroup { code: number }
            } else {
                QrContent::WhatsApp {
                    number,
                    country_code: values.get_or_empty("countryCode"),
                    message: values.get_or_empty("message"),
                }
            }
        }
        QrKind::Email => QrContent::Email {
            email: values.get_or_empty("email"),
            subject: values.get_or_empty("subject"),
            body: values.get_or_empty("body"),
        },
        QrKind::WiFi => QrContent::WiFi {
            ssid: values.get_or_empty("ssid"),
            password: values.get_or_empty("password"),
            encryption: values.get_or_empty("encryption"),
        },
        QrKind::Phone => QrContent::Phone {
            phone: values.get_or_empty("phone"),
        },
        QrKind::Sms => QrContent::Sms {
            phone: values.get_or_empty("phone"),
            message: values.get_or_empty("message"),
        },
        // The single declared field holds the URL, whatever it is called
        QrKind::GenericUrl => QrContent::Url {
            url: endpoint
                .fields
                .first()
                .map(|field| values.get_or_empty(field.name))
                .unwrap_or_default(),
        },
        QrKind::Location => QrContent::Location {
            latitude: values.get_or_empty("latitude"),
            longitude: values.get_or_empty("longitude"),
        },
        QrKind::Event => QrContent::Event {
            title: values.get_or_empty("title"),
            location: values.get_or_empty("location"),
            start_date: values.get_or_empty("startDate"),
            end_date: values.get_or_empty("endDate"),
        },
    };

    Ok(content)
}

fn is_group_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::qr_kind::ENDPOINTS;

    fn endpoint(name: &str) -> &'static Endpoint {
        Endpoint::find(name).unwrap()
    }

    #[test]
    fn first_missing_field_is_reported_for_every_subset() {
        for endpoint in ENDPOINTS {
            let required: Vec<_> = endpoint.required_fields().collect();
            // Every present/missing combination of the required fields
            for mask in 0..(1u32 << required.len()) {
                let values: FieldValues = required
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << *i) != 0)
                    .map(|(_, f)| (f.name, "value"))
                    .collect();

                let first_missing = required
                    .iter()
                    .enumerate()
                    .find(|(i, _)| mask & (1 << *i) == 0)
                    .map(|(_, f)| *f);

                match (validate(endpoint, &values), first_missing) {
                    (Ok(_), None) => {}
                    (Err(ValidationError::MissingField { field, label }), Some(expected)) => {
                        assert_eq!(field, expected.name, "{}", endpoint.name);
                        assert_eq!(label, expected.label, "{}", endpoint.name);
                    }
                    (result, expected) => panic!(
                        "{}: mask {mask:b} gave {result:?}, expected missing {expected:?}",
                        endpoint.name
                    ),
                }
            }
        }
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let values: FieldValues = [("ssid", "Home"), ("password", ""), ("encryption", "WPA")]
            .into_iter()
            .collect();
        let err = validate(endpoint("wifi"), &values).unwrap_err();
        assert_eq!(err.to_string(), "Password is required");
    }

    #[test]
    fn missing_field_message_uses_label() {
        let err = validate(endpoint("pdf"), &FieldValues::default()).unwrap_err();
        assert_eq!(err.to_string(), "PDF URL is required");

        let err = validate(endpoint("text"), &FieldValues::default()).unwrap_err();
        assert_eq!(err.to_string(), "Text is required");
    }

    #[test]
    fn whatsapp_individual() {
        let values: FieldValues = [("number", "5551234"), ("countryCode", "+1"), ("message", "hi")]
            .into_iter()
            .collect();
        let content = validate(endpoint("whatsapp"), &values).unwrap();
        assert_eq!(content.to_payload(), "https://wa.me/15551234?text=hi");
    }

    #[test]
    fn whatsapp_group_accepts_alphanumeric_code() {
        let values: FieldValues = [("number", "abcXYZ123"), ("isGroup", "true")]
            .into_iter()
            .collect();
        let content = validate(endpoint("whatsapp"), &values).unwrap();
        assert_eq!(content.to_payload(), "https://wa.me/abcXYZ123");
    }

    #[test]
    fn whatsapp_group_rejects_invalid_code() {
        let values: FieldValues = [("number", "bad code!"), ("isGroup", "true")]
            .into_iter()
            .collect();
        let err = validate(endpoint("whatsapp"), &values).unwrap_err();
        assert_eq!(err, ValidationError::InvalidGroupCode);
        assert_eq!(err.to_string(), "Invalid group link code");
    }

    #[test]
    fn whatsapp_group_flag_must_be_literal_true() {
        let values: FieldValues = [("number", "bad code!"), ("isGroup", "TRUE")]
            .into_iter()
            .collect();
        let content = validate(endpoint("whatsapp"), &values).unwrap();
        assert!(matches!(content, QrContent::WhatsApp { .. }));
    }

    #[test]
    fn generic_url_reads_the_endpoint_field() {
        let values: FieldValues = [("imageUrl", "https://example.com/cat.png")]
            .into_iter()
            .collect();
        let content = validate(endpoint("image"), &values).unwrap();
        assert_eq!(content.to_payload(), "https://example.com/cat.png");

        // A field belonging to another endpoint does not count
        let values: FieldValues = [("url", "https://example.com")].into_iter().collect();
        let err = validate(endpoint("youtube"), &values).unwrap_err();
        assert_eq!(err.to_string(), "YouTube video URL is required");
    }

    #[test]
    fn gmail_and_yahoo_format_identically() {
        let values: FieldValues = [("email", "a@b.c"), ("subject", "Hi")].into_iter().collect();
        let gmail = validate(endpoint("gmail"), &values).unwrap();
        let yahoo = validate(endpoint("yahoo"), &values).unwrap();
        assert_eq!(gmail.to_payload(), yahoo.to_payload());
        assert_eq!(gmail.to_payload(), "mailto:a@b.c?subject=Hi&body=");
    }

    #[test]
    fn event_fields_are_substituted_verbatim() {
        let values: FieldValues = [
            ("title", "Standup"),
            ("location", "HQ"),
            ("startDate", "2025-01-01 09:00"),
            ("endDate", "2025-01-01 09:15"),
        ]
        .into_iter()
        .collect();
        let content = validate(endpoint("event"), &values).unwrap();
        assert_eq!(
            content.to_payload(),
            "BEGIN:VEVENT\nSUMMARY:Standup\nLOCATION:HQ\nDTSTART:2025-01-01 09:00\nDTEND:2025-01-01 09:15\nEND:VEVENT"
        );
    }
}
