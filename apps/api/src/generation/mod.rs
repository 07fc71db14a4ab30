pub mod generator;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
