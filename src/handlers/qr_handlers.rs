use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Responder, web};

use crate::models::qr_kind::{Endpoint, FieldSource};
use crate::state::app_state::AppState;
use crate::structs::qr_request::{FieldValues, QrCodeResponse, ViewParams};
use crate::utils::api_error::ApiError;
use crate::utils::uri_component::encode_component;
use crate::utils::validation::{ValidationError, validate};

/// Generate a QR code for one endpoint of the table: decode the fields,
/// validate, format the payload, encode it and return the data URL.
pub async fn generate_qr(
    endpoint: &'static Endpoint,
    app_state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let values = match endpoint.source {
        FieldSource::Body => FieldValues::from_json(&body)?,
        FieldSource::Query => {
            let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
                .map_err(|_| ApiError::InvalidQuery)?;
            FieldValues::from_query(query.into_inner())
        }
    };

    let content = validate(endpoint, &values).inspect_err(|e| {
        if let ValidationError::MissingField { field, .. } = e {
            log::debug!("Rejected {} request without {}", endpoint.name, field);
        }
    })?;
    let payload = content.to_payload();
    log::debug!(
        "Encoding {} payload ({} bytes)",
        endpoint.name,
        payload.len()
    );

    // Rendering is CPU bound, keep it off the worker thread
    let encoder = app_state.encoder.clone();
    let data_url = match web::block(move || encoder.encode(&payload)).await {
        Ok(Ok(data_url)) => data_url,
        Ok(Err(e)) => return Err(encoding_failed(endpoint, e)),
        Err(e) => return Err(encoding_failed(endpoint, e)),
    };

    Ok(HttpResponse::Ok().json(QrCodeResponse {
        qr_code_image_url: encode_component(&data_url),
    }))
}

fn encoding_failed(endpoint: &Endpoint, cause: impl std::fmt::Display) -> ApiError {
    log::error!("Error generating {} QR code: {}", endpoint.name, cause);
    ApiError::Encoding
}

pub async fn welcome() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to the QR Code generator API!")
}

/// Minimal HTML page showing an already encoded image.
pub async fn view(query: web::Query<ViewParams>) -> impl Responder {
    let image_data = match query.into_inner().image_data {
        Some(data) if !data.is_empty() => data,
        _ => {
            return HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body("Image data is required");
        }
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QR Code Preview</title>
</head>
<body>
    <h1>QR Code Preview</h1>
    <img src="{}" alt="QR Code" />
    <br />
    <a href="/">Go back</a>
</body>
</html>
"#,
        escape_attr(&image_data)
    );

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
