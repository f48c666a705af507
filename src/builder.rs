#[path = "builder/llm_builder.rs"]
mod llm_builder;

#[path = "builder/tools.rs"]
mod tools;

#[path = "builder/state.rs"]
mod state;

pub use llm_builder::LLMBuilder;
pub use tools::{FunctionBuilder, ParamBuilder};
