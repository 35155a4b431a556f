/// Content categories a QR code can carry. Each kind has its own fields and
/// its own payload format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrKind {
    PlainText,
    WhatsApp,
    Email,
    WiFi,
    Phone,
    Sms,
    GenericUrl,
    Location,
    Event,
}

/// Where an endpoint reads its field values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    Body,
    Query,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str, // Human readable name used in error messages
    pub required: bool,
}

const fn required(name: &'static str, label: &'static str) -> Field {
    Field {
        name,
        label,
        required: true,
    }
}

const fn optional(name: &'static str, label: &'static str) -> Field {
    Field {
        name,
        label,
        required: false,
    }
}

/// A single POST route: which kind it produces and which fields it accepts,
/// in declaration order.
#[derive(Debug)]
pub struct Endpoint {
    pub name: &'static str,
    pub path: &'static str,
    pub kind: QrKind,
    pub source: FieldSource,
    pub fields: &'static [Field],
}

impl Endpoint {
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.required)
    }

    #[cfg(test)]
    pub fn find(name: &str) -> Option<&'static Endpoint> {
        ENDPOINTS.iter().find(|e| e.name == name)
    }
}

const EMAIL_FIELDS: &[Field] = &[
    required("email", "Email"),
    optional("subject", "Subject"),
    optional("body", "Body"),
];

/// Every payload-generating route, mounted under `/qr`.
pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "text",
        path: "/generate-qr",
        kind: QrKind::PlainText,
        source: FieldSource::Body,
        fields: &[required("text", "Text")],
    },
    Endpoint {
        name: "whatsapp",
        path: "/whatsapp/qrcode",
        kind: QrKind::WhatsApp,
        source: FieldSource::Query,
        fields: &[
            required("number", "Number"),
            optional("countryCode", "Country code"),
            optional("message", "Message"),
            optional("isGroup", "Group flag"),
        ],
    },
    Endpoint {
        name: "gmail",
        path: "/gmail/qrcode",
        kind: QrKind::Email,
        source: FieldSource::Body,
        fields: EMAIL_FIELDS,
    },
    Endpoint {
        name: "yahoo",
        path: "/yahoo/qrcode",
        kind: QrKind::Email,
        source: FieldSource::Body,
        fields: EMAIL_FIELDS,
    },
    Endpoint {
        name: "sms",
        path: "/sms/qrcode",
        kind: QrKind::Sms,
        source: FieldSource::Body,
        fields: &[
            required("phone", "Phone number"),
            optional("message", "Message"),
        ],
    },
    Endpoint {
        name: "phone",
        path: "/phone/qrcode",
        kind: QrKind::Phone,
        source: FieldSource::Body,
        fields: &[required("phone", "Phone number")],
    },
    Endpoint {
        name: "wifi",
        path: "/wifi/qrcode",
        kind: QrKind::WiFi,
        source: FieldSource::Body,
        fields: &[
            required("ssid", "SSID"),
            required("password", "Password"),
            required("encryption", "Encryption type"),
        ],
    },
    Endpoint {
        name: "facebook",
        path: "/facebook/qrcode",
        kind: QrKind::GenericUrl,
        source: FieldSource::Body,
        fields: &[required("profileUrl", "Facebook profile URL")],
    },
    Endpoint {
        name: "twitter",
        path: "/twitter/qrcode",
        kind: QrKind::GenericUrl,
        source: FieldSource::Body,
        fields: &[required("profileUrl", "Twitter profile URL")],
    },
    Endpoint {
        name: "instagram",
        path: "/instagram/qrcode",
        kind: QrKind::GenericUrl,
        source: FieldSource::Body,
        fields: &[required("profileUrl", "Instagram profile URL")],
    },
    Endpoint {
        name: "image",
        path: "/image/qrcode",
        kind: QrKind::GenericUrl,
        source: FieldSource::Body,
        fields: &[required("imageUrl", "Image URL")],
    },
    Endpoint {
        name: "video",
        path: "/video/qrcode",
        kind: QrKind::GenericUrl,
        source: FieldSource::Body,
        fields: &[required("videoUrl", "Video URL")],
    },
    Endpoint {
        name: "pdf",
        path: "/pdf/qrcode",
        kind: QrKind::GenericUrl,
        source: FieldSource::Body,
        fields: &[required("url", "PDF URL")],
    },
    Endpoint {
        name: "linkedin",
        path: "/linkedin/qrcode",
        kind: QrKind::GenericUrl,
        source: FieldSource::Body,
        fields: &[required("profileUrl", "LinkedIn profile URL")],
    },
    Endpoint {
        name: "youtube",
        path: "/youtube/qrcode",
        kind: QrKind::GenericUrl,
        source: FieldSource::Body,
        fields: &[required("videoUrl", "YouTube video URL")],
    },
    Endpoint {
        name: "website",
        path: "/website/qrcode",
        kind: QrKind::GenericUrl,
        source: FieldSource::Body,
        fields: &[required("url", "Website URL")],
    },
    Endpoint {
        name: "location",
        path: "/location/qrcode",
        kind: QrKind::Location,
        source: FieldSource::Body,
        fields: &[
            required("latitude", "Latitude"),
            required("longitude", "Longitude"),
        ],
    },
    Endpoint {
        name: "event",
        path: "/event/qrcode",
        kind: QrKind::Event,
        source: FieldSource::Body,
        fields: &[
            required("title", "Title"),
            required("location", "Location"),
            required("startDate", "Start date"),
            required("endDate", "End date"),
        ],
    },
];
