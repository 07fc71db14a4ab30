//! Request Builder — pure string formatting from payload to prompt pair.
//!
//! Validation does not happen here: the handler rejects a blank product name
//! before this module is ever invoked.

use crate::generation::prompts::{
    GENERATION_PROMPT_TEMPLATE, GENERATION_SYSTEM, OUTPUT_SCHEMA_EXAMPLE,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::models::product::ProductPayload;

/// Rendered in place of any missing optional field so every label in the
/// context block is always present.
pub const EMPTY_FIELD_PLACEHOLDER: &str = "—";

/// Builds the system instruction: copywriter persona plus the JSON-only rule.
pub fn build_system_prompt() -> String {
    format!("{GENERATION_SYSTEM} {JSON_ONLY_SYSTEM}")
}

/// Builds the user instruction: every payload field restated in a labeled
/// block, multi-value fields joined with ", " in input order, and the literal
/// output schema example embedded at the end.
pub fn build_user_prompt(payload: &ProductPayload) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{nome}", &payload.nome)
        .replace("{categoria}", payload.categoria.as_str())
        .replace("{marca}", &optional_field(payload.marca.as_deref()))
        .replace("{caracteristicas}", &joined_field(&payload.caracteristicas))
        .replace("{diferenciais}", &joined_field(&payload.diferenciais))
        .replace("{publico}", &optional_field(payload.publico.as_deref()))
        .replace("{keywords}", &joined_field(&payload.keywords_usuario))
        .replace("{tom}", payload.tom.as_str())
        .replace("{voz}", payload.voz.as_str())
        .replace("{schema}", OUTPUT_SCHEMA_EXAMPLE)
}

fn optional_field(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => EMPTY_FIELD_PLACEHOLDER.to_string(),
    }
}

fn joined_field(values: &[String]) -> String {
    if values.is_empty() {
        EMPTY_FIELD_PLACEHOLDER.to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::{Categoria, Marketplace, Tom, Voz};

    fn payload_camiseta() -> ProductPayload {
        ProductPayload {
            nome: "Camiseta básica".to_string(),
            categoria: Categoria::Moda,
            marca: None,
            publico: None,
            caracteristicas: vec!["100% algodão".to_string(), "Preta".to_string()],
            diferenciais: vec![],
            keywords_usuario: vec![],
            tom: Tom::Amigavel,
            voz: Voz::MarcaAcolhedora,
            marketplaces: vec![
                Marketplace::MercadoLivre,
                Marketplace::Shopee,
                Marketplace::Amazon,
            ],
        }
    }

    #[test]
    fn test_user_prompt_contains_name_and_category() {
        let prompt = build_user_prompt(&payload_camiseta());
        assert!(prompt.contains("Camiseta básica"));
        assert!(prompt.contains("- Categoria: Moda"));
    }

    #[test]
    fn test_multi_value_fields_join_with_comma_space_in_order() {
        let prompt = build_user_prompt(&payload_camiseta());
        assert!(prompt.contains("100% algodão, Preta"));
    }

    #[test]
    fn test_missing_optionals_render_as_placeholder() {
        let prompt = build_user_prompt(&payload_camiseta());
        assert!(prompt.contains("- Marca: —"));
        assert!(prompt.contains("- Público-alvo: —"));
        assert!(prompt.contains("- Diferenciais: —"));
        assert!(prompt.contains("- Palavras-chave SEO (sugestivas): —"));
    }

    #[test]
    fn test_present_optionals_render_verbatim() {
        let mut payload = payload_camiseta();
        payload.marca = Some("SuperFrete Wear".to_string());
        payload.publico = Some("jovens e adultos que buscam conforto".to_string());
        let prompt = build_user_prompt(&payload);
        assert!(prompt.contains("- Marca: SuperFrete Wear"));
        assert!(prompt.contains("- Público-alvo: jovens e adultos que buscam conforto"));
    }

    #[test]
    fn test_blank_optional_treated_as_missing() {
        let mut payload = payload_camiseta();
        payload.marca = Some("   ".to_string());
        let prompt = build_user_prompt(&payload);
        assert!(prompt.contains("- Marca: —"));
    }

    #[test]
    fn test_tone_and_voice_labels_appear() {
        let mut payload = payload_camiseta();
        payload.tom = Tom::Premium;
        payload.voz = Voz::VendedorConsultivo;
        let prompt = build_user_prompt(&payload);
        assert!(prompt.contains("- Tom: Premium"));
        assert!(prompt.contains("- Persona/voz: Vendedor consultivo"));
    }

    #[test]
    fn test_schema_example_embedded_literally() {
        let prompt = build_user_prompt(&payload_camiseta());
        assert!(prompt.contains(OUTPUT_SCHEMA_EXAMPLE));
        assert!(prompt.contains(r#""titulo_seo": "string""#));
        assert!(prompt.contains(r#""search_terms": "string""#));
    }

    #[test]
    fn test_no_unfilled_placeholders_remain() {
        let prompt = build_user_prompt(&payload_camiseta());
        for slot in [
            "{nome}",
            "{categoria}",
            "{marca}",
            "{caracteristicas}",
            "{diferenciais}",
            "{publico}",
            "{keywords}",
            "{tom}",
            "{voz}",
            "{schema}",
        ] {
            assert!(!prompt.contains(slot), "unfilled slot: {slot}");
        }
    }

    #[test]
    fn test_system_prompt_composes_persona_and_json_rule() {
        let system = build_system_prompt();
        assert!(system.contains("NUNCA invente certificações"));
        assert!(system.contains("SOMENTE com JSON válido"));
    }
}
