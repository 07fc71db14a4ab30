//! Product payload — the structured attributes the form submits per generation.

use serde::{Deserialize, Serialize};

/// Product category. Closed list mirroring the form's selectbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Categoria {
    #[default]
    Moda,
    Papelaria,
    #[serde(rename = "Acessórios")]
    Acessorios,
    #[serde(rename = "Eletrônicos")]
    Eletronicos,
    #[serde(rename = "Casa & Decoração")]
    CasaDecoracao,
    #[serde(rename = "Beleza & Saúde")]
    BelezaSaude,
    Outros,
}

impl Categoria {
    pub fn as_str(&self) -> &'static str {
        match self {
            Categoria::Moda => "Moda",
            Categoria::Papelaria => "Papelaria",
            Categoria::Acessorios => "Acessórios",
            Categoria::Eletronicos => "Eletrônicos",
            Categoria::CasaDecoracao => "Casa & Decoração",
            Categoria::BelezaSaude => "Beleza & Saúde",
            Categoria::Outros => "Outros",
        }
    }
}

/// Desired tone of the generated copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tom {
    Neutro,
    #[default]
    #[serde(rename = "Amigável")]
    Amigavel,
    Premium,
    #[serde(rename = "Técnico")]
    Tecnico,
    Divertido,
}

impl Tom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tom::Neutro => "Neutro",
            Tom::Amigavel => "Amigável",
            Tom::Premium => "Premium",
            Tom::Tecnico => "Técnico",
            Tom::Divertido => "Divertido",
        }
    }
}

/// Voice / persona the copy should be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Voz {
    #[default]
    #[serde(rename = "Marca acolhedora")]
    MarcaAcolhedora,
    Especialista,
    #[serde(rename = "Vendedor consultivo")]
    VendedorConsultivo,
    Minimalista,
}

impl Voz {
    pub fn as_str(&self) -> &'static str {
        match self {
            Voz::MarcaAcolhedora => "Marca acolhedora",
            Voz::Especialista => "Especialista",
            Voz::VendedorConsultivo => "Vendedor consultivo",
            Voz::Minimalista => "Minimalista",
        }
    }
}

/// Marketplaces the listing can be optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marketplace {
    #[serde(rename = "Mercado Livre")]
    MercadoLivre,
    Shopee,
    Amazon,
}

impl Marketplace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marketplace::MercadoLivre => "Mercado Livre",
            Marketplace::Shopee => "Shopee",
            Marketplace::Amazon => "Amazon",
        }
    }
}

/// Structured product attributes collected by the form.
/// Built fresh per submission; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    pub nome: String,
    #[serde(default)]
    pub categoria: Categoria,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub publico: Option<String>,
    #[serde(default)]
    pub caracteristicas: Vec<String>,
    #[serde(default)]
    pub diferenciais: Vec<String>,
    #[serde(default)]
    pub keywords_usuario: Vec<String>,
    #[serde(default)]
    pub tom: Tom,
    #[serde(default)]
    pub voz: Voz,
    #[serde(default = "default_marketplaces")]
    pub marketplaces: Vec<Marketplace>,
}

impl ProductPayload {
    /// Normalizes raw form input in place: trims the name and optional
    /// fields (blank optionals become `None`), splits multi-line
    /// characteristic/differentiator entries into one entry per line, and
    /// splits comma-joined keyword entries into one entry per keyword.
    /// Input order is preserved.
    pub fn normalize(&mut self) {
        self.nome = self.nome.trim().to_string();
        self.marca = take_trimmed(&mut self.marca);
        self.publico = take_trimmed(&mut self.publico);
        self.caracteristicas = self
            .caracteristicas
            .iter()
            .flat_map(|s| split_lines(s))
            .collect();
        self.diferenciais = self
            .diferenciais
            .iter()
            .flat_map(|s| split_lines(s))
            .collect();
        self.keywords_usuario = self
            .keywords_usuario
            .iter()
            .flat_map(|s| split_keywords(s))
            .collect();
    }
}

fn take_trimmed(value: &mut Option<String>) -> Option<String> {
    value
        .take()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_marketplaces() -> Vec<Marketplace> {
    vec![
        Marketplace::MercadoLivre,
        Marketplace::Shopee,
        Marketplace::Amazon,
    ]
}

/// Splits free-form textarea content into trimmed, non-empty lines.
/// Leading bullet glyphs and dashes are stripped so pasted lists work.
pub fn split_lines(s: &str) -> Vec<String> {
    s.lines()
        .map(|line| line.trim_matches(|c: char| " •-—\t".contains(c)).to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Splits a comma-separated keyword field into trimmed, non-empty entries.
pub fn split_keywords(s: &str) -> Vec<String> {
    s.split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}
