//! Input model for certificate rendering.
//!
//! A certificate is described by two scalar values: the free-text name of the
//! recipient and the score they reached.  Neither value is sanitized; both are
//! interpolated verbatim into the rendered text.

use std::num::IntErrorKind;

use thiserror::Error;

/// File name offered when a rendered certificate is downloaded.
pub const CERTIFICATE_FILE_NAME: &str = "certificado_cyberdoom.pdf";

/// MIME type of a rendered certificate.
pub const CERTIFICATE_MIME_TYPE: &str = "application/pdf";

/// The two values printed on a certificate.
///
/// The score is unsigned, so non-negativity is guaranteed by the type at the
/// builder boundary.  Frontends that accept free-form input should go through
/// [`parse_score`] first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CertificateRequest {
    name: String,
    score: u32,
}

impl CertificateRequest {
    /// Creates a request for the given recipient and score.
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Returns the recipient name exactly as supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the score.
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Raised when a raw score field cannot be used as a score.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoreParseError {
    /// The field is not a non-negative integer.
    #[error("score must be a non-negative integer, got '{input}'")]
    Invalid {
        /// The rejected input.
        input: String,
    },
    /// The field is a non-negative integer larger than [`u32::MAX`].
    #[error("score must not exceed {max}, got '{input}'", max = u32::MAX)]
    OutOfRange {
        /// The rejected input.
        input: String,
    },
}

impl ScoreParseError {
    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        match self {
            Self::Invalid { input } | Self::OutOfRange { input } => input,
        }
    }
}

/// Parses a raw score field.
///
/// A missing or blank field yields `0`.
pub fn parse_score(raw: Option<&str>) -> Result<u32, ScoreParseError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(0);
    };

    raw.parse::<u32>().map_err(|err| {
        let input = raw.to_owned();
        match err.kind() {
            IntErrorKind::PosOverflow => ScoreParseError::OutOfRange { input },
            _ => ScoreParseError::Invalid { input },
        }
    })
}
