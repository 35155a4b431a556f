pub mod api_error;
pub mod qr_encoder;
pub mod uri_component;
pub mod validation;
