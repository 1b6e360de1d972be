//! Read-back utilities for rendered certificates, built on top of `lopdf`.

use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};
use thiserror::Error;

/// Errors that can occur while reading a rendered certificate back.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The bytes could not be parsed as a PDF document.
    #[error("failed to parse PDF bytes: {0}")]
    Parse(#[from] lopdf::Error),
    /// The document has no pages.
    #[error("PDF document contains no pages")]
    NoPages,
}

/// What a reader would see on a rendered certificate.
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateSummary {
    /// Number of pages in the document.
    pub page_count: usize,
    /// `/MediaBox` of the first page in points, if present.
    pub media_box: Option<[f32; 4]>,
    /// `/Title` entry of the document information dictionary, if present.
    pub title: Option<String>,
    /// Strings shown on the first page, in drawing order.
    pub lines: Vec<String>,
}

impl CertificateSummary {
    /// Returns whether any shown line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Parses `bytes` and summarizes the first page.
pub fn inspect(bytes: &[u8]) -> Result<CertificateSummary, InspectError> {
    let document = Document::load_mem(bytes)?;
    let pages = document.get_pages();
    let (_, &first_page) = pages.iter().next().ok_or(InspectError::NoPages)?;

    let content = document.get_and_decode_page_content(first_page)?;

    Ok(CertificateSummary {
        page_count: pages.len(),
        media_box: media_box(&document, first_page),
        title: document_title(&document),
        lines: shown_strings(&content),
    })
}

/// Returns the decoded content stream of every page.
///
/// Document IDs and timestamps differ between renders; the page content does
/// not, so two fingerprints compare equal exactly when the drawn layout does.
pub fn structural_fingerprint(bytes: &[u8]) -> Result<Vec<Vec<u8>>, InspectError> {
    let document = Document::load_mem(bytes)?;
    let mut fingerprint = Vec::new();
    for page_id in document.get_pages().into_values() {
        let content = document.get_and_decode_page_content(page_id)?;
        fingerprint.push(content.encode()?);
    }
    Ok(fingerprint)
}

fn media_box(document: &Document, page_id: ObjectId) -> Option<[f32; 4]> {
    let page = document.get_object(page_id).ok()?.as_dict().ok()?;
    let values = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if values.len() != 4 {
        return None;
    }

    let mut corners = [0.0; 4];
    for (slot, value) in corners.iter_mut().zip(values) {
        *slot = match value {
            Object::Integer(value) => *value as f32,
            Object::Real(value) => *value as f32,
            _ => return None,
        };
    }
    Some(corners)
}

fn document_title(document: &Document) -> Option<String> {
    let info = match document.trailer.get(b"Info").ok()? {
        Object::Reference(id) => document.get_object(*id).ok()?,
        direct => direct,
    };
    match info.as_dict().ok()?.get(b"Title").ok()? {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        _ => None,
    }
}

/// Decodes a PDF text string: UTF-16BE when it carries a byte order mark,
/// otherwise UTF-8 with a Latin-1 fallback.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(&[0xfe, 0xff]) {
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => decode_latin1(bytes),
    }
}

fn shown_strings(content: &Content) -> Vec<String> {
    let mut lines = Vec::new();
    for operation in &content.operations {
        match operation.operator.as_str() {
            "Tj" | "'" => {
                if let Some(Object::String(bytes, _)) = operation.operands.last() {
                    lines.push(decode_latin1(bytes));
                }
            }
            "TJ" => {
                if let Some(Object::Array(parts)) = operation.operands.first() {
                    let text = parts
                        .iter()
                        .filter_map(|part| match part {
                            Object::String(bytes, _) => Some(decode_latin1(bytes)),
                            _ => None,
                        })
                        .collect::<String>();
                    lines.push(text);
                }
            }
            _ => {}
        }
    }
    lines
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::Operation;
    use lopdf::StringFormat;

    #[test]
    fn collects_tj_and_tj_array_strings() {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tj",
                    vec![Object::String(b"Hola".to_vec(), StringFormat::Literal)],
                ),
                Operation::new(
                    "TJ",
                    vec![Object::Array(vec![
                        Object::String(b"Jos".to_vec(), StringFormat::Hexadecimal),
                        Object::Integer(-120),
                        Object::String(vec![0xe9], StringFormat::Hexadecimal),
                    ])],
                ),
                Operation::new("ET", vec![]),
            ],
        };

        assert_eq!(shown_strings(&content), vec!["Hola", "José"]);
    }

    #[test]
    fn decodes_utf16_and_plain_text_strings() {
        assert_eq!(
            decode_text_string(&[0xfe, 0xff, 0x00, 0x4a, 0x00, 0xe9]),
            "Jé"
        );
        assert_eq!(decode_text_string("Certificado".as_bytes()), "Certificado");
        assert_eq!(decode_text_string(&[0x4a, 0xe9]), "Jé");
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        assert!(matches!(
            inspect(b"definitely not a pdf"),
            Err(InspectError::Parse(_))
        ));
    }
}
