//! Error types raised while rendering certificates.

use thiserror::Error;

/// Errors that can occur while turning a [`CertificateRequest`][crate::CertificateRequest]
/// into PDF bytes.
#[derive(Debug, Error)]
pub enum CertificateError {
    /// One of the builtin base-14 fonts could not be registered with the document.
    #[error("failed to register builtin font {font}: {message}")]
    Font {
        /// PostScript name of the font that failed.
        font: &'static str,
        /// Message reported by the PDF writer.
        message: String,
    },
    /// The PDF writer failed to serialize the document.
    #[error("failed to serialize certificate: {0}")]
    Render(String),
    /// The in-memory output buffer could not be flushed.
    #[error("failed to flush certificate buffer: {0}")]
    Io(#[from] std::io::Error),
}
