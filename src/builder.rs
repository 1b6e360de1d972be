//! Document construction for the cyberdoom_certificate crate.

use std::io::BufWriter;

use log::debug;
use printpdf::{Mm, PdfDocument};

use crate::error::CertificateError;
use crate::fonts;
use crate::layout::CertificateLayout;
use crate::model::{CertificateRequest, CERTIFICATE_FILE_NAME};
use crate::verification::verification_code;

const MM_PER_INCH: f64 = 25.4;
const POINTS_PER_INCH: f64 = 72.0;
const DEFAULT_DOCUMENT_TITLE: &str = "Certificado CyberDoom";
const LAYER_NAME: &str = "Certificado";

fn mm_from_points(points: f64) -> Mm {
    Mm(points * MM_PER_INCH / POINTS_PER_INCH)
}

/// Physical page size in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaperSize {
    /// Page width.
    pub width_mm: f64,
    /// Page height.
    pub height_mm: f64,
}

impl PaperSize {
    /// ISO A4, the page the fixed layout is designed for.
    pub const A4: Self = Self {
        width_mm: 210.0,
        height_mm: 297.0,
    };
}

impl Default for PaperSize {
    fn default() -> Self {
        Self::A4
    }
}

impl From<(f64, f64)> for PaperSize {
    fn from((width_mm, height_mm): (f64, f64)) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }
}

/// Output of a successful render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCertificate {
    /// Raw PDF bytes.
    pub bytes: Vec<u8>,
    /// File name offered for download.
    pub file_name: &'static str,
    /// Verification code printed in the footer, if enabled.
    pub verification_code: Option<String>,
}

/// Builder for single-page certificates using the fixed layout.
#[derive(Clone, Debug)]
pub struct CertificateBuilder {
    paper_size: PaperSize,
    document_title: String,
    verification_code: bool,
}

impl Default for CertificateBuilder {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::default(),
            document_title: DEFAULT_DOCUMENT_TITLE.to_owned(),
            verification_code: true,
        }
    }
}

impl CertificateBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size used for the page.
    ///
    /// Line coordinates are absolute, so a page shorter than A4 clips the title.
    pub fn with_paper_size(mut self, paper_size: impl Into<PaperSize>) -> Self {
        self.paper_size = paper_size.into();
        self
    }

    /// Sets the title stored in the document metadata.
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = title.into();
        self
    }

    /// Enables or disables the verification-code footer.
    pub fn with_verification_code(mut self, enabled: bool) -> Self {
        self.verification_code = enabled;
        self
    }

    /// Returns the layout this builder would draw for `request`.
    pub fn layout(&self, request: &CertificateRequest) -> CertificateLayout {
        CertificateLayout::for_request(request, self.verification_code)
    }

    /// Renders `request` into a single-page PDF document.
    pub fn render(
        &self,
        request: &CertificateRequest,
    ) -> Result<RenderedCertificate, CertificateError> {
        let layout = self.layout(request);

        let (document, page, layer) = PdfDocument::new(
            self.document_title.as_str(),
            Mm(self.paper_size.width_mm),
            Mm(self.paper_size.height_mm),
            LAYER_NAME,
        );
        let fonts = fonts::install_builtin_fonts(&document)?;
        let canvas = document.get_page(page).get_layer(layer);

        for line in layout.lines() {
            let position = line.position();
            canvas.use_text(
                fonts::encodable_text(line.text()).into_owned(),
                line.size().into(),
                mm_from_points(position.x),
                mm_from_points(position.y),
                fonts.get(line.weight()),
            );
        }

        let mut writer = BufWriter::new(Vec::new());
        document
            .save(&mut writer)
            .map_err(|err| CertificateError::Render(err.to_string()))?;
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;

        debug!(
            "Rendered certificate for score {} ({} bytes, {} lines)",
            request.score(),
            bytes.len(),
            layout.lines().len()
        );

        Ok(RenderedCertificate {
            bytes,
            file_name: CERTIFICATE_FILE_NAME,
            verification_code: self
                .verification_code
                .then(|| verification_code(request.name(), request.score())),
        })
    }
}

/// Renders the certificate for `name` and `score` with the default settings.
pub fn build_pdf(name: &str, score: u32) -> Result<Vec<u8>, CertificateError> {
    CertificateBuilder::new()
        .render(&CertificateRequest::new(name, score))
        .map(|rendered| rendered.bytes)
}
