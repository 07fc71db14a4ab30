//! Axum route handlers for the export endpoints.
//!
//! Each endpoint renders the listing through the matching formatter and
//! responds as a file download with a fixed filename.

use axum::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::export::{to_markdown, to_plain_text, MARKDOWN_FILENAME, TEXT_FILENAME};
use crate::models::listing::ListingResult;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Product name used as the document title when the SEO title is empty.
    #[serde(default)]
    pub nome_produto: String,
    pub resultado: ListingResult,
}

/// POST /api/v1/listings/export/markdown
pub async fn handle_export_markdown(Json(request): Json<ExportRequest>) -> impl IntoResponse {
    let body = to_markdown(&request.resultado, &request.nome_produto);
    (
        [
            (CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{MARKDOWN_FILENAME}\""),
            ),
        ],
        body,
    )
}

/// POST /api/v1/listings/export/text
pub async fn handle_export_text(Json(request): Json<ExportRequest>) -> impl IntoResponse {
    let body = to_plain_text(&request.resultado);
    (
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{TEXT_FILENAME}\""),
            ),
        ],
        body,
    )
}
