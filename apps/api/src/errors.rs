use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// User-facing message when the OpenAI account has no remaining credit.
pub const QUOTA_MESSAGE: &str =
    "Sem créditos na OpenAI agora. Verifique Billing/Usage e a variável OPENAI_API_KEY.";

/// User-facing message when the API is rate limiting us. Transient; the
/// user is expected to retry manually.
pub const RATE_LIMIT_MESSAGE: &str = "Muitos pedidos. Aguarde alguns segundos e tente novamente.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}", QUOTA_MESSAGE)]
    QuotaExceeded,

    #[error("{}", RATE_LIMIT_MESSAGE)]
    RateLimited,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Classifies a failed completion call into one of the three user-facing
    /// categories: quota exhausted, rate limited, or generic failure.
    ///
    /// Classification inspects the error display text, matching the markers
    /// the OpenAI API puts in its error messages. Centralized here so a move
    /// to structured matching on `LlmError` variants only touches this file.
    pub fn from_llm_failure(err: LlmError) -> Self {
        let text = err.to_string().to_lowercase();

        if text.contains("insufficient_quota") || (text.contains("429") && text.contains("quota")) {
            AppError::QuotaExceeded
        } else if text.contains("rate limit") || text.contains("429") {
            AppError::RateLimited
        } else {
            AppError::Llm(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::QuotaExceeded => {
                tracing::error!("OpenAI quota exhausted");
                (
                    StatusCode::PAYMENT_REQUIRED,
                    "QUOTA_EXCEEDED",
                    QUOTA_MESSAGE.to_string(),
                )
            }
            AppError::RateLimited => {
                tracing::warn!("OpenAI rate limit hit");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "RATE_LIMITED",
                    RATE_LIMIT_MESSAGE.to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    format!("Erro ao gerar descrição: {msg}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
