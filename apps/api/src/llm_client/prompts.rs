// Cross-cutting prompt fragments shared by all LLM-calling services.
// Domain prompts live in a prompts.rs next to the service that uses them.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "Responda SOMENTE com JSON válido. \
    Não inclua texto fora do objeto JSON. \
    Não use cercas de código markdown. \
    Não inclua explicações ou desculpas.";
