//! OCR (Optical Character Recognition) Module
//!
//! Wraps the Tesseract engine behind a provider handle that is constructed
//! once at process start and shared by every request. The engine itself is
//! not safe for concurrent use, so all access is serialized through a mutex
//! inside the provider.
//!
//! If the engine cannot be initialized (missing native library or language
//! data), the provider degrades to an `Unavailable` backend: the process
//! still starts, and requests that need OCR fail with a service-unavailable
//! error until the engine is installed.

mod preprocessing;
mod provider;

pub use preprocessing::preprocess_image;
pub use provider::OcrProvider;
