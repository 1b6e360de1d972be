//! HTTP form host: serves the certificate form and turns submissions into PDF downloads.

use axum::extract::Form;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use cyberdoom_certificate::model::parse_score;
use cyberdoom_certificate::{
    CertificateBuilder, CertificateRequest, RenderedCertificate, CERTIFICATE_MIME_TYPE,
};
use log::{error, info, warn};
use serde::Deserialize;

use crate::page::FORM_PAGE;

/// Fields submitted by the certificate form.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CertificateForm {
    #[serde(default)]
    nombre: String,
    #[serde(default)]
    score: Option<String>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/", get(form_page))
        .route("/certificado", post(generate_certificate))
        .route("/health", get(health))
}

pub(crate) async fn serve(bind: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Serving certificate form on http://{}/", listener.local_addr()?);
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

async fn health() -> &'static str {
    "ok"
}

async fn generate_certificate(Form(form): Form<CertificateForm>) -> Response {
    let score = match parse_score(form.score.as_deref()) {
        Ok(score) => score,
        Err(err) => {
            warn!("Rejected certificate request: {}", err);
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let request = CertificateRequest::new(form.nombre, score);
    match CertificateBuilder::new().render(&request) {
        Ok(rendered) => {
            info!(
                "Generated certificate {} ({} bytes)",
                rendered.verification_code.as_deref().unwrap_or("-"),
                rendered.bytes.len()
            );
            download(rendered)
        }
        Err(err) => {
            error!("Certificate rendering failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "No se pudo generar el certificado",
            )
                .into_response()
        }
    }
}

fn download(rendered: RenderedCertificate) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", rendered.file_name);
    (
        [
            (header::CONTENT_TYPE, CERTIFICATE_MIME_TYPE.to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use cyberdoom_certificate::inspect::inspect;

    fn form(nombre: &str, score: Option<&str>) -> Form<CertificateForm> {
        Form(CertificateForm {
            nombre: nombre.to_owned(),
            score: score.map(str::to_owned),
        })
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body")
            .to_vec()
    }

    #[tokio::test]
    async fn submission_downloads_pdf() {
        let response = generate_certificate(form("Ada", Some("42"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"certificado_cyberdoom.pdf\""
        );

        let bytes = body_bytes(response).await;
        let summary = inspect(&bytes).expect("parse downloaded certificate");
        assert_eq!(summary.page_count, 1);
        assert!(summary.contains("Se certifica que Ada"));
        assert!(summary.contains("Completo CyberDoom con score 42"));
    }

    #[tokio::test]
    async fn missing_score_defaults_to_zero() {
        let response = generate_certificate(form("Ada", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let summary = inspect(&body_bytes(response).await).expect("parse certificate");
        assert!(summary.contains("Completo CyberDoom con score 0"));
    }

    #[tokio::test]
    async fn negative_score_is_rejected() {
        let response = generate_certificate(form("Ada", Some("-1"))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = String::from_utf8(body_bytes(response).await).expect("utf-8 body");
        assert!(body.contains("non-negative integer"));
    }

    #[tokio::test]
    async fn oversized_score_is_rejected_as_out_of_range() {
        let response = generate_certificate(form("Ada", Some("4294967296"))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = String::from_utf8(body_bytes(response).await).expect("utf-8 body");
        assert!(body.contains("must not exceed 4294967295"));
    }

    #[tokio::test]
    async fn form_page_posts_to_certificate_route() {
        let Html(page) = form_page().await;
        assert!(page.contains("action=\"/certificado\""));
        assert!(page.contains("name=\"nombre\""));
        assert!(page.contains("name=\"score\""));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        assert_eq!(health().await, "ok");
    }
}
