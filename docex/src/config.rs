use std::env;
use std::path::PathBuf;

use serde::Deserialize;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub pdf: PdfConfig,
    pub spool: SpoolConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// Comma-separated ISO 639-2 language codes handed to the engine.
    pub languages: String,
    pub min_image_dimension: u32,
    pub max_image_dimension: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    /// Rasterization resolution. Lower trades OCR accuracy for speed.
    pub dpi: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpoolConfig {
    /// Parent directory for per-request staging directories.
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("DOCEX_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("DOCEX_PORT", 8000),
            },
            ocr: OcrConfig {
                languages: env::var("OCR_LANGUAGES").unwrap_or_else(|_| "eng".to_string()),
                min_image_dimension: parse_env_or("OCR_MIN_DIMENSION", 50),
                max_image_dimension: parse_env_or("OCR_MAX_DIMENSION", 4096),
            },
            pdf: PdfConfig {
                dpi: parse_env_or("PDF_DPI", 300.0),
            },
            spool: SpoolConfig {
                dir: env::var("DOCEX_SPOOL_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| env::temp_dir()),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
