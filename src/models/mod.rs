pub mod qr_content;
pub mod qr_kind;
