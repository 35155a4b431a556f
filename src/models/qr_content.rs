use crate::utils::uri_component::encode_component;

/// A validated, fully populated record for one QR kind. Optional fields that
/// were absent are held as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrContent {
    PlainText {
        text: String,
    },
    WhatsApp {
        number: String,
        country_code: String,
        message: String,
    },
    // Group invite code, already checked to be alphanumeric
    WhatsAppGroup {
        code: String,
    },
    Email {
        email: String,
        subject: String,
        body: String,
    },
    WiFi {
        ssid: String,
        password: String,
        encryption: String,
    },
    Phone {
        phone: String,
    },
    Sms {
        phone: String,
        message: String,
    },
    Url {
        url: String,
    },
    Location {
        latitude: String,
        longitude: String,
    },
    Event {
        title: String,
        location: String,
        start_date: String,
        end_date: String,
    },
}

impl QrContent {
    /// Render the string handed to the QR encoder.
    ///
    /// Field values are interpolated verbatim except for message, subject
    /// and body text, which are percent-encoded. Delimiters inside WiFi and
    /// event fields are not escaped.
    pub fn to_payload(&self) -> String {
        match self {
            QrContent::PlainText { text } => text.clone(),
            QrContent::WhatsApp {
                number,
                country_code,
                message,
            } => format!(
                "https://wa.me/{}{}?text={}",
                country_code.strip_prefix('+').unwrap_or(country_code.as_str()),
                number,
                encode_component(message)
            ),
            QrContent::WhatsAppGroup { code } => format!("https://wa.me/{}", code),
            QrContent::Email {
                email,
                subject,
                body,
            } => format!(
                "mailto:{}?subject={}&body={}",
                email,
                encode_component(subject),
                encode_component(body)
            ),
            QrContent::WiFi {
                ssid,
                password,
                encryption,
            } => format!("WIFI:S:{};T:{};P:{};;", ssid, encryption, password),
            QrContent::Phone { phone } => format!("tel:{}", phone),
            QrContent::Sms { phone, message } => {
                format!("sms:{}?body={}", phone, encode_component(message))
            }
            QrContent::Url { url } => url.clone(),
            QrContent::Location {
                latitude,
                longitude,
            } => format!("https://www.google.com/maps?q={},{}", latitude, longitude),
            QrContent::Event {
                title,
                location,
                start_date,
                end_date,
            } => [
                "BEGIN:VEVENT".to_string(),
                format!("SUMMARY:{}", title),
                format!("LOCATION:{}", location),
                format!("DTSTART:{}", start_date),
                format!("DTEND:{}", end_date),
                "END:VEVENT".to_string(),
            ]
            .join("\n"),
        }
    }
}
