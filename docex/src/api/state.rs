use std::sync::Arc;

use crate::config::Config;
use crate::extract::Extractor;
use crate::ocr::OcrProvider;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub extractor: Extractor,
}

impl AppState {
    pub fn new(config: Config, ocr: OcrProvider) -> Self {
        let config = Arc::new(config);
        let extractor = Extractor::new(ocr, config.clone());

        Self { config, extractor }
    }
}
