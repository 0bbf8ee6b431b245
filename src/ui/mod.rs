pub mod document;
pub mod query;
pub mod renderer;
pub mod span;
pub mod style;
