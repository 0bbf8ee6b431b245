pub mod focus;
pub mod validation;
