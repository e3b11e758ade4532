//! View rendering.

mod engine;

pub use engine::{MiniJinjaEngine, TemplateEngine};
