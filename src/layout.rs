//! Fixed page layout of a certificate.
//!
//! The layout is plain data: an ordered list of text lines, each with a font
//! weight, a size and an absolute position measured in PostScript points from
//! the bottom-left corner of the page.  Keeping it separate from rendering lets
//! callers check what will be drawn without producing PDF bytes.

use crate::model::CertificateRequest;
use crate::verification::verification_code;

/// Title drawn at the top of every certificate.
pub const TITLE: &str = "Certificado de Finalizacion";

const LEFT_MARGIN_PT: f64 = 72.0;
const TITLE_Y_PT: f64 = 750.0;
const RECIPIENT_Y_PT: f64 = 710.0;
const SCORE_Y_PT: f64 = 690.0;
const FOOTER_Y_PT: f64 = 72.0;

const TITLE_SIZE: u8 = 18;
const BODY_SIZE: u8 = 12;
const FOOTER_SIZE: u8 = 9;

/// Weight of the builtin font used for a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Helvetica.
    #[default]
    Regular,
    /// Helvetica-Bold.
    Bold,
}

/// Absolute position in points, origin at the bottom-left page corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset of the text baseline.
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single line of text placed on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    text: String,
    weight: FontWeight,
    size: u8,
    position: Position,
}

impl TextLine {
    /// Creates a line drawn in the regular weight.
    pub fn new(text: impl Into<String>, size: u8, position: Position) -> Self {
        Self {
            text: text.into(),
            weight: FontWeight::Regular,
            size,
            position,
        }
    }

    /// Marks the line as bold and returns it.
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Returns the text exactly as it will be drawn.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Returns the font size in points.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the baseline position.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// The ordered lines that make up one certificate page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CertificateLayout {
    lines: Vec<TextLine>,
}

impl CertificateLayout {
    /// Lays out the certificate for `request`.
    ///
    /// When `with_verification_code` is set a footer line carrying the code from
    /// [`verification_code`] is appended after the three body lines.
    pub fn for_request(request: &CertificateRequest, with_verification_code: bool) -> Self {
        let mut lines = vec![
            TextLine::new(TITLE, TITLE_SIZE, Position::new(LEFT_MARGIN_PT, TITLE_Y_PT)).bold(),
            TextLine::new(
                recipient_line(request.name()),
                BODY_SIZE,
                Position::new(LEFT_MARGIN_PT, RECIPIENT_Y_PT),
            ),
            TextLine::new(
                score_line(request.score()),
                BODY_SIZE,
                Position::new(LEFT_MARGIN_PT, SCORE_Y_PT),
            ),
        ];

        if with_verification_code {
            let code = verification_code(request.name(), request.score());
            lines.push(TextLine::new(
                footer_line(&code),
                FOOTER_SIZE,
                Position::new(LEFT_MARGIN_PT, FOOTER_Y_PT),
            ));
        }

        Self { lines }
    }

    /// Returns the lines in drawing order.
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }
}

/// Formats the line naming the recipient.
pub fn recipient_line(name: &str) -> String {
    format!("Se certifica que {name}")
}

/// Formats the line carrying the score.
pub fn score_line(score: u32) -> String {
    format!("Completo CyberDoom con score {score}")
}

/// Formats the footer carrying the verification code.
pub fn footer_line(code: &str) -> String {
    format!("Codigo de verificacion: {code}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lays_out_title_recipient_and_score() {
        let layout = CertificateLayout::for_request(&CertificateRequest::new("Ada", 42), false);
        let texts: Vec<_> = layout.lines().iter().map(TextLine::text).collect();
        assert_eq!(
            texts,
            vec![
                "Certificado de Finalizacion",
                "Se certifica que Ada",
                "Completo CyberDoom con score 42",
            ]
        );
    }

    #[test]
    fn title_is_bold_and_body_is_regular() {
        let layout = CertificateLayout::for_request(&CertificateRequest::new("Ada", 1), true);
        let lines = layout.lines();
        assert_eq!(lines[0].weight(), FontWeight::Bold);
        assert_eq!(lines[0].size(), 18);
        assert!(lines[1..]
            .iter()
            .all(|line| line.weight() == FontWeight::Regular));
        assert_eq!(lines[1].size(), 12);
        assert_eq!(lines[2].size(), 12);
    }

    #[test]
    fn uses_fixed_coordinates() {
        let layout = CertificateLayout::for_request(&CertificateRequest::new("x", 0), true);
        let positions: Vec<_> = layout.lines().iter().map(TextLine::position).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(72.0, 750.0),
                Position::new(72.0, 710.0),
                Position::new(72.0, 690.0),
                Position::new(72.0, 72.0),
            ]
        );
    }

    #[test]
    fn empty_name_leaves_trailing_space() {
        let layout = CertificateLayout::for_request(&CertificateRequest::new("", 0), false);
        assert_eq!(layout.lines()[1].text(), "Se certifica que ");
        assert_eq!(layout.lines()[2].text(), "Completo CyberDoom con score 0");
    }

    #[test]
    fn footer_carries_verification_code() {
        let request = CertificateRequest::new("Ada", 42);
        let layout = CertificateLayout::for_request(&request, true);
        assert_eq!(layout.lines().len(), 4);
        assert_eq!(
            layout.lines()[3].text(),
            format!("Codigo de verificacion: {}", verification_code("Ada", 42))
        );
    }
}
