pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod terminal;
pub mod testing;
pub mod ui;
pub mod widgets;

pub use config::FormConfig;
pub use error::{Error, Result};
pub use testing::Screen;
pub use ui::document::{Document, Element, Role};
pub use ui::query::{QueryError, TextMatch};
pub use widgets::components::contact_form::{
    ContactForm, Field, FormState, SubmitOutcome, SubmittedValues,
};
