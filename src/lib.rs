//! Core entry point for the cyberdoom_certificate crate.

pub mod builder;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod model;
pub mod verification;

#[cfg(feature = "inspect")]
pub mod inspect;

pub use builder::{build_pdf, CertificateBuilder, RenderedCertificate};
pub use error::CertificateError;
pub use model::{CertificateRequest, CERTIFICATE_FILE_NAME, CERTIFICATE_MIME_TYPE};
