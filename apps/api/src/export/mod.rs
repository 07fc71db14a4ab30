//! Export — renders a listing result into downloadable documents.
//!
//! Both formatters are pure and deterministic: the same listing always
//! produces byte-identical output. The section layout is a fixed literal
//! template; empty sections render as the em-dash placeholder instead of
//! disappearing.

pub mod handlers;

use crate::models::listing::ListingResult;

/// Fixed download filename for the Markdown document.
pub const MARKDOWN_FILENAME: &str = "descricao_produto.md";
/// Fixed download filename for the plain-text document.
pub const TEXT_FILENAME: &str = "descricao_produto.txt";

/// Renders the listing as a Markdown document.
/// The document title falls back to the product name when the generated SEO
/// title is empty.
pub fn to_markdown(listing: &ListingResult, nome_produto: &str) -> String {
    let titulo = non_empty_or(listing.titulo_seo.trim(), nome_produto);

    let bullets = if listing.bullets.is_empty() {
        "- —".to_string()
    } else {
        bullet_lines(&listing.bullets)
    };

    let keywords = if listing.keywords.is_empty() {
        "—".to_string()
    } else {
        listing.keywords.join("; ")
    };

    let faq = if listing.faq.is_empty() {
        "—".to_string()
    } else {
        listing
            .faq
            .iter()
            .map(|qa| format!("**Q:** {}\n\n**A:** {}", qa.pergunta, qa.resposta))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    let ml = &listing.marketplaces.mercado_livre;
    let sh = &listing.marketplaces.shopee;
    let am = &listing.marketplaces.amazon;

    format!(
        "# {titulo}\n\
         \n\
         ## Descrição curta\n\
         {curta}\n\
         \n\
         ## Descrição longa\n\
         {longa}\n\
         \n\
         ## Bullet points\n\
         {bullets}\n\
         \n\
         ## Palavras-chave\n\
         {keywords}\n\
         \n\
         ## FAQ\n\
         {faq}\n\
         \n\
         ## Marketplaces\n\
         ### Mercado Livre\n\
         **Título**: {ml_titulo}\n\
         **Descrição**:\n\
         {ml_descricao}\n\
         \n\
         ### Shopee\n\
         **Título**: {sh_titulo}\n\
         **Descrição**:\n\
         {sh_descricao}\n\
         **Bullets**:\n\
         {sh_bullets}\n\
         \n\
         ### Amazon\n\
         **Título**: {am_titulo}\n\
         **Descrição**:\n\
         {am_descricao}\n\
         **Bullets**:\n\
         {am_bullets}\n\
         **Search Terms**: {am_terms}",
        titulo = titulo,
        curta = listing.descricao_curta.trim(),
        longa = listing.descricao_longa_md.trim(),
        bullets = bullets,
        keywords = keywords,
        faq = faq,
        ml_titulo = ml.titulo,
        ml_descricao = ml.descricao,
        sh_titulo = sh.titulo,
        sh_descricao = sh.descricao,
        sh_bullets = bullet_lines(&sh.bullet_points),
        am_titulo = am.titulo,
        am_descricao = am.descricao,
        am_bullets = bullet_lines(&am.bullet_points),
        am_terms = am.search_terms,
    )
    .trim()
    .to_string()
}

/// Renders the listing as a plain-text document with bracketed marketplace
/// sections.
pub fn to_plain_text(listing: &ListingResult) -> String {
    let ml = &listing.marketplaces.mercado_livre;
    let sh = &listing.marketplaces.shopee;
    let am = &listing.marketplaces.amazon;

    let faq = listing
        .faq
        .iter()
        .map(|qa| format!("Q: {} | A: {}", qa.pergunta, qa.resposta))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "TÍTULO SEO: {titulo}\n\
         \n\
         DESCRIÇÃO CURTA:\n\
         {curta}\n\
         \n\
         DESCRIÇÃO LONGA:\n\
         {longa}\n\
         \n\
         BULLETS:\n\
         {bullets}\n\
         \n\
         KEYWORDS:\n\
         {keywords}\n\
         \n\
         FAQ:\n\
         {faq}\n\
         \n\
         [Mercado Livre]\n\
         Título: {ml_titulo}\n\
         Descrição: {ml_descricao}\n\
         \n\
         [Shopee]\n\
         Título: {sh_titulo}\n\
         Descrição: {sh_descricao}\n\
         Bullets:\n\
         {sh_bullets}\n\
         \n\
         [Amazon]\n\
         Título: {am_titulo}\n\
         Descrição: {am_descricao}\n\
         Bullets:\n\
         {am_bullets}\n\
         Search Terms: {am_terms}",
        titulo = listing.titulo_seo.trim(),
        curta = listing.descricao_curta.trim(),
        longa = listing.descricao_longa_md.trim(),
        bullets = bullet_lines(&listing.bullets),
        keywords = listing.keywords.join(", "),
        faq = faq,
        ml_titulo = ml.titulo,
        ml_descricao = ml.descricao,
        sh_titulo = sh.titulo,
        sh_descricao = sh.descricao,
        sh_bullets = bullet_lines(&sh.bullet_points),
        am_titulo = am.titulo,
        am_descricao = am.descricao,
        am_bullets = bullet_lines(&am.bullet_points),
        am_terms = am.search_terms,
    )
    .trim()
    .to_string()
}

fn bullet_lines(items: &[String]) -> String {
    items
        .iter()
        .map(|b| format!("- {b}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::{AmazonListing, FaqItem, MercadoLivreListing, ShopeeListing};

    fn listing() -> ListingResult {
        ListingResult {
            titulo_seo: "Camiseta Básica 100% Algodão".to_string(),
            descricao_curta: "Conforto todo dia.".to_string(),
            descricao_longa_md: "### Destaques\n- Algodão macio".to_string(),
            bullets: vec!["100% algodão".to_string(), "Unissex".to_string()],
            keywords: vec!["camiseta algodão".to_string(), "camiseta preta".to_string()],
            faq: vec![FaqItem {
                pergunta: "Encolhe na lavagem?".to_string(),
                resposta: "Não, tecido pré-encolhido.".to_string(),
            }],
            marketplaces: crate::models::listing::Marketplaces {
                mercado_livre: MercadoLivreListing {
                    titulo: "Camiseta Básica Algodão".to_string(),
                    descricao: "Descrição ML.".to_string(),
                },
                shopee: ShopeeListing {
                    titulo: "Camiseta Shopee".to_string(),
                    descricao: "Descrição Shopee.".to_string(),
                    bullet_points: vec!["Macia".to_string()],
                },
                amazon: AmazonListing {
                    titulo: "Camiseta Amazon".to_string(),
                    descricao: "Descrição Amazon.".to_string(),
                    bullet_points: vec!["Durável".to_string()],
                    search_terms: "camiseta basica algodao".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_markdown_contains_all_sections() {
        let md = to_markdown(&listing(), "Camiseta básica");
        assert!(md.starts_with("# Camiseta Básica 100% Algodão"));
        assert!(md.contains("## Descrição curta\nConforto todo dia."));
        assert!(md.contains("## Bullet points\n- 100% algodão\n- Unissex"));
        assert!(md.contains("## Palavras-chave\ncamiseta algodão; camiseta preta"));
        assert!(md.contains("**Q:** Encolhe na lavagem?"));
        assert!(md.contains("### Mercado Livre"));
        assert!(md.contains("**Search Terms**: camiseta basica algodao"));
    }

    #[test]
    fn test_markdown_title_falls_back_to_product_name() {
        let mut l = listing();
        l.titulo_seo = String::new();
        let md = to_markdown(&l, "Camiseta básica");
        assert!(md.starts_with("# Camiseta básica"));
    }

    #[test]
    fn test_markdown_empty_sections_render_placeholders() {
        let md = to_markdown(&ListingResult::default(), "Produto X");
        assert!(md.contains("## Bullet points\n- —"));
        assert!(md.contains("## Palavras-chave\n—"));
        assert!(md.contains("## FAQ\n—"));
    }

    #[test]
    fn test_plain_text_contains_all_sections() {
        let txt = to_plain_text(&listing());
        assert!(txt.starts_with("TÍTULO SEO: Camiseta Básica 100% Algodão"));
        assert!(txt.contains("BULLETS:\n- 100% algodão\n- Unissex"));
        assert!(txt.contains("KEYWORDS:\ncamiseta algodão, camiseta preta"));
        assert!(txt.contains("FAQ:\nQ: Encolhe na lavagem? | A: Não, tecido pré-encolhido."));
        assert!(txt.contains("[Mercado Livre]\nTítulo: Camiseta Básica Algodão"));
        assert!(txt.contains("[Shopee]"));
        assert!(txt.contains("Search Terms: camiseta basica algodao"));
    }

    #[test]
    fn test_formatters_are_idempotent() {
        let l = listing();
        assert_eq!(to_markdown(&l, "nome"), to_markdown(&l, "nome"));
        assert_eq!(to_plain_text(&l), to_plain_text(&l));
    }

    #[test]
    fn test_fallback_listing_exports_without_panicking() {
        // A degraded listing (raw body in the long description) must still
        // export cleanly with empty marketplace sections.
        let l = ListingResult {
            titulo_seo: "Produto X".to_string(),
            descricao_curta: "Descrição curta não pôde ser gerada.".to_string(),
            descricao_longa_md: "corpo bruto não-JSON".to_string(),
            ..ListingResult::default()
        };
        let md = to_markdown(&l, "Produto X");
        let txt = to_plain_text(&l);
        assert!(md.contains("corpo bruto não-JSON"));
        assert!(txt.contains("corpo bruto não-JSON"));
        assert!(md.contains("### Amazon"));
        assert!(txt.contains("[Amazon]"));
    }
}
