//! Listing result — the structured marketing copy returned by one completion.
//!
//! Every list and map field carries `#[serde(default)]` so a partial model
//! response decodes to empty sequences instead of failing. Rendering and
//! export never branch on field presence.

use serde::{Deserialize, Serialize};

/// One suggested question/answer pair for the product FAQ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(default)]
    pub pergunta: String,
    #[serde(default)]
    pub resposta: String,
}

/// Title + description variant for Mercado Livre.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MercadoLivreListing {
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
}

/// Shopee variant: title, description and short bullet points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopeeListing {
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub bullet_points: Vec<String>,
}

/// Amazon variant: title, description, bullet points and backend search terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmazonListing {
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub bullet_points: Vec<String>,
    #[serde(default)]
    pub search_terms: String,
}

/// Per-channel variants. All three keys are always present; an empty section
/// means the model produced nothing for that channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marketplaces {
    #[serde(default)]
    pub mercado_livre: MercadoLivreListing,
    #[serde(default)]
    pub shopee: ShopeeListing,
    #[serde(default)]
    pub amazon: AmazonListing,
}

/// Full structured output of one generation call.
/// Produced once per submission; read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingResult {
    #[serde(default)]
    pub titulo_seo: String,
    #[serde(default)]
    pub descricao_curta: String,
    #[serde(default)]
    pub descricao_longa_md: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    #[serde(default)]
    pub marketplaces: Marketplaces,
}
