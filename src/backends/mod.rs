//! Concrete chat providers.

pub mod openai;
