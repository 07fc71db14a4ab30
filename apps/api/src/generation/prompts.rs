// All LLM prompt constants for the Generation module.
// The JSON-only rule comes from llm_client::prompts and is composed into
// the system prompt at build time.

/// System prompt — persona and hard constraints for the copywriter.
pub const GENERATION_SYSTEM: &str =
    "Você é um gerador de descrições de produtos para e-commerce em PT-BR, \
    com foco em SEO e marketplaces. \
    Seja claro, persuasivo e honesto. \
    Formate a descrição longa em Markdown simples (títulos, listas). \
    NUNCA invente certificações ou promessas médicas. \
    Use linguagem inclusiva e direta.";

/// Literal example of the expected output shape, embedded in the user prompt
/// so the model can pattern-match the schema. Configuration data, not logic —
/// the decoded result is validated by serde against `ListingResult`, not by
/// this text.
pub const OUTPUT_SCHEMA_EXAMPLE: &str = r#"{
  "titulo_seo": "string",
  "descricao_curta": "string",
  "descricao_longa_md": "string",
  "bullets": ["string", "string"],
  "keywords": ["string", "string"],
  "faq": [{"pergunta": "string", "resposta": "string"}],
  "marketplaces": {
    "mercado_livre": {"titulo": "string", "descricao": "string"},
    "shopee": {"titulo": "string", "descricao": "string", "bullet_points": ["string"]},
    "amazon": {"titulo": "string", "descricao": "string", "bullet_points": ["string"], "search_terms": "string"}
  }
}"#;

/// User prompt template. Replace: {nome}, {categoria}, {marca},
/// {caracteristicas}, {diferenciais}, {publico}, {keywords}, {tom}, {voz},
/// {schema}. Missing optional fields render as the em-dash placeholder.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Gere descrições para produto em PT-BR.

Contexto:
- Nome do produto: {nome}
- Categoria: {categoria}
- Marca: {marca}
- Características (lista): {caracteristicas}
- Diferenciais: {diferenciais}
- Público-alvo: {publico}
- Palavras-chave SEO (sugestivas): {keywords}

TOM & ESTILO:
- Tom: {tom}
- Persona/voz: {voz}
- Regras de clareza: frases curtas, evitar jargão técnico quando possível.
- Políticas: não prometa resultados exagerados, não invente certificações, nada ofensivo.

Saídas desejadas (JSON estrito):
{schema}

Observações:
- 'descricao_longa_md' deve vir em Markdown com subtítulos (###), listas e chamadas de benefício.
- 'bullets' são itens curtos de especificações/benefícios.
- 'keywords' devem refletir cauda-curta e cauda-longa, sem #.
- Em 'marketplaces', otimize títulos/descrições de forma sucinta.
- Se faltarem dados, assuma o conservador e foque no benefício real."#;
