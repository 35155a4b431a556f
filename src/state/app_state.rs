use std::sync::Arc;

use crate::utils::qr_encoder::{PngDataUrlEncoder, QrEncoder};

/// Shared, read-only state handed to every worker.
#[derive(Clone)]
pub struct AppState {
    pub encoder: Arc<dyn QrEncoder>,
}

impl AppState {
    pub fn new(qr_min_size: u32) -> Self {
        Self::with_encoder(Arc::new(PngDataUrlEncoder::new(qr_min_size)))
    }

    pub fn with_encoder(encoder: Arc<dyn QrEncoder>) -> Self {
        Self { encoder }
    }
}
