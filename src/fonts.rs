//! Font utilities for the cyberdoom_certificate crate.
//!
//! Certificates only use the PDF base-14 Helvetica family, which every reader
//! ships with, so nothing has to be embedded or loaded from disk.

use std::borrow::Cow;

use log::warn;
use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference};

use crate::error::CertificateError;
use crate::layout::FontWeight;

/// Character drawn in place of text the builtin fonts cannot encode.
pub const REPLACEMENT_CHAR: char = '?';

/// Returns the builtin font used for the given weight.
pub fn builtin_font(weight: FontWeight) -> BuiltinFont {
    match weight {
        FontWeight::Regular => BuiltinFont::Helvetica,
        FontWeight::Bold => BuiltinFont::HelveticaBold,
    }
}

fn postscript_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "Helvetica",
        FontWeight::Bold => "Helvetica-Bold",
    }
}

/// Font references registered with a single document.
pub struct FontSet {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl FontSet {
    /// Returns the reference for `weight`.
    pub fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn install(
    document: &PdfDocumentReference,
    weight: FontWeight,
) -> Result<IndirectFontRef, CertificateError> {
    document
        .add_builtin_font(builtin_font(weight))
        .map_err(|err| CertificateError::Font {
            font: postscript_name(weight),
            message: err.to_string(),
        })
}

/// Adds the regular and bold Helvetica fonts to `document`.
pub fn install_builtin_fonts(document: &PdfDocumentReference) -> Result<FontSet, CertificateError> {
    Ok(FontSet {
        regular: install(document, FontWeight::Regular)?,
        bold: install(document, FontWeight::Bold)?,
    })
}

fn is_encodable(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}')
}

/// Returns how many characters of `text` the builtin fonts cannot show.
pub fn unencodable_count(text: &str) -> usize {
    text.chars().filter(|&c| !is_encodable(c)).count()
}

/// Returns `text` restricted to the characters the builtin fonts can show.
///
/// Printable Latin-1 passes through untouched; anything else becomes
/// [`REPLACEMENT_CHAR`].
pub fn encodable_text(text: &str) -> Cow<'_, str> {
    let replaced = unencodable_count(text);
    if replaced == 0 {
        return Cow::Borrowed(text);
    }

    warn!(
        "Replacing {} character(s) outside the builtin font encoding",
        replaced
    );
    Cow::Owned(
        text.chars()
            .map(|c| if is_encodable(c) { c } else { REPLACEMENT_CHAR })
            .collect(),
    )
}
