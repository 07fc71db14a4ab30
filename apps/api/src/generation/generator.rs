//! Listing generation — one prompt pair, one completion, one decode.
//!
//! Flow: build prompts → call completion client → parse JSON → ListingResult.
//! Malformed model output never fails: it degrades to a fallback listing so
//! the UI always has something to render. Transport and API errors propagate
//! to the handler, which classifies them into user-facing messages.

use tracing::{info, warn};

use crate::generation::prompt_builder::{build_system_prompt, build_user_prompt};
use crate::llm_client::{strip_json_fences, CompletionClient, LlmError};
use crate::models::listing::ListingResult;
use crate::models::product::ProductPayload;

/// Short-description notice used in the fallback listing.
pub const FALLBACK_SHORT_DESCRIPTION: &str = "Descrição curta não pôde ser gerada.";

/// Runs one generation: prompt construction, a single completion call, and
/// a best-effort decode of the response body.
pub async fn generate_listing(
    llm: &dyn CompletionClient,
    payload: &ProductPayload,
    temperature: f32,
) -> Result<ListingResult, LlmError> {
    let system = build_system_prompt();
    let user = build_user_prompt(payload);

    info!(
        "Generating listing for '{}' (categoria: {}, temperature: {temperature})",
        payload.nome,
        payload.categoria.as_str()
    );

    let body = llm.complete(&system, &user, temperature).await?;

    Ok(decode_listing(&body, &payload.nome))
}

/// Decodes the completion body into a [`ListingResult`].
///
/// Valid JSON round-trips unchanged. Anything else becomes the fallback
/// listing: the product name as title, a fixed notice as short description,
/// and the raw body preserved verbatim in the long description so no model
/// output is silently dropped.
pub fn decode_listing(body: &str, nome: &str) -> ListingResult {
    match serde_json::from_str::<ListingResult>(strip_json_fences(body)) {
        Ok(listing) => listing,
        Err(e) => {
            warn!("Completion body is not valid listing JSON ({e}); using fallback");
            fallback_listing(body, nome)
        }
    }
}

fn fallback_listing(body: &str, nome: &str) -> ListingResult {
    ListingResult {
        titulo_seo: nome.to_string(),
        descricao_curta: FALLBACK_SHORT_DESCRIPTION.to_string(),
        descricao_longa_md: body.to_string(),
        ..ListingResult::default()
    }
}
