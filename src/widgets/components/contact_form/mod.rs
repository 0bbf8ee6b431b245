//! Contact form component: four text inputs and a submit button.
//!
//! Each edit validates only the edited field. A submit validates every
//! required field and, when all pass, snapshots the values for display.

mod model;
mod render;

#[cfg(test)]
mod tests;

pub use model::{Field, FormState, SubmitOutcome, SubmittedValues};

use crate::config::FormConfig;
use crate::error::Result;
use crate::state::focus::FocusState;
use crate::state::validation::ValidationState;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::document::Document;
use crate::widgets::base::WidgetBase;
use crate::widgets::inputs::button::ButtonInput;
use crate::widgets::inputs::text::TextInput;
use crate::widgets::outputs::text::Text;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, ValidationMode,
    WidgetAction,
};
use crate::widgets::validators;
use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, info};

pub const SUBMIT_ID: &str = "submit";

pub struct ContactForm {
    base: WidgetBase,
    header: Text,
    inputs: IndexMap<Field, TextInput>,
    submit: ButtonInput,
    validation: ValidationState,
    focus: FocusState,
    submitted: Option<SubmittedValues>,
    show_submitted: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        let config = FormConfig::default();
        let email = validators::email(email_message());
        Self::build(&config, email)
    }

    pub fn with_config(config: FormConfig) -> Result<Self> {
        let regex = Regex::new(&config.email_pattern)?;
        let email = validators::pattern(regex, email_message());
        Ok(Self::build(&config, email))
    }

    fn build(config: &FormConfig, email: validators::Validator) -> Self {
        let mut email = Some(email);
        let mut inputs = IndexMap::new();
        for field in Field::ALL {
            let input = TextInput::new(field.id(), field.label());
            let input = match field {
                Field::FirstName => input.with_validator(validators::min_length(
                    config.first_name_min_len,
                    format!(
                        "{field} must be at least {} characters",
                        config.first_name_min_len
                    ),
                )),
                Field::LastName => input.with_validator(validators::required(format!(
                    "{field} is a required field"
                ))),
                Field::Email => match email.take() {
                    Some(validator) => input.with_validator(validator),
                    None => input,
                },
                Field::Message => input,
            };
            inputs.insert(field, input);
        }

        let focus_ids = Field::ALL
            .iter()
            .map(|field| field.id())
            .chain(std::iter::once(SUBMIT_ID));

        Self {
            base: WidgetBase::new("contact_form", config.header.clone()),
            header: Text::heading("header", config.header.clone()),
            inputs,
            submit: ButtonInput::new(SUBMIT_ID, config.submit_text.clone()),
            validation: ValidationState::default(),
            focus: FocusState::new(focus_ids),
            submitted: None,
            show_submitted: false,
        }
    }

    pub fn state(&self) -> FormState {
        let mut state = FormState::default();
        for (field, input) in &self.inputs {
            state.set(*field, input.text().to_string());
        }
        state
    }

    pub fn field_value(&self, field: Field) -> &str {
        self.inputs.get(&field).map(TextInput::text).unwrap_or_default()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.validation.visible_error(field.id())
    }

    /// Fields with a visible error, in form order.
    pub fn errors(&self) -> Vec<(Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.error(field).map(|error| (field, error)))
            .collect()
    }

    /// The values currently on display, if the latest submit succeeded.
    pub fn submitted(&self) -> Option<&SubmittedValues> {
        self.submitted.as_ref().filter(|_| self.show_submitted)
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focus.current_id()
    }

    pub fn focus(&mut self, id: &str) {
        self.focus.set_focus_by_id(id);
    }

    /// Replaces a field's value and validates that field.
    pub fn change(&mut self, field: Field, value: impl Into<String>) -> bool {
        if let Some(input) = self.inputs.get_mut(&field) {
            input.set_value(value.into());
        }
        self.validate_field(field, ValidationMode::Live)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let mut rejected = Vec::new();
        for field in Field::ALL {
            if !self.validate_field(field, ValidationMode::Submit) {
                rejected.push(field);
            }
        }

        if !rejected.is_empty() {
            self.show_submitted = false;
            let ids: Vec<&str> = rejected.iter().map(|field| field.id()).collect();
            debug!(fields = ?ids, "submit rejected");
            return SubmitOutcome::Rejected(rejected);
        }

        let values = SubmittedValues::from_state(&self.state());
        info!(
            has_message = values.message.is_some(),
            "contact form submitted"
        );
        self.submitted = Some(values.clone());
        self.show_submitted = true;
        SubmitOutcome::Accepted(values)
    }

    pub fn render(&self) -> Document {
        let ctx = RenderContext {
            focused_id: self.focus.current_id().map(ToOwned::to_owned),
        };
        render::render_form(self, &ctx)
    }

    fn validate_field(&mut self, field: Field, mode: ValidationMode) -> bool {
        let Some(input) = self.inputs.get(&field) else {
            return true;
        };
        let result = input.validate(mode);
        debug!(field = field.id(), ?mode, ok = result.is_ok(), "validated field");
        self.validation.apply(field.id(), result)
    }

    fn focused_widget(&mut self) -> Option<&mut dyn Interactive> {
        let id = self.focus.current_id()?;
        if id == SUBMIT_ID {
            return Some(&mut self.submit as &mut dyn Interactive);
        }
        let field = Field::from_id(id)?;
        self.inputs
            .get_mut(&field)
            .map(|input| input as &mut dyn Interactive)
    }

    fn dispatch(&mut self, actions: Vec<WidgetAction>) {
        for action in actions {
            match action {
                WidgetAction::ValueChanged { id, value } => {
                    if let Some(field) = Field::from_id(&id) {
                        debug!(
                            field = field.id(),
                            len = value.chars().count(),
                            "field changed"
                        );
                        self.validate_field(field, ValidationMode::Live);
                    }
                }
                WidgetAction::Activated { id } if id == SUBMIT_ID => {
                    self.submit();
                }
                WidgetAction::Activated { .. } => {}
            }
        }
    }
}

fn email_message() -> String {
    format!("{} must be a valid email address", Field::Email)
}

impl Drawable for ContactForm {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, _ctx: &RenderContext) -> DrawOutput {
        DrawOutput {
            elements: self.render().elements().to_vec(),
        }
    }
}

impl Interactive for ContactForm {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus.next();
                return InteractionResult::handled();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.prev();
                return InteractionResult::handled();
            }
            KeyCode::Enter if self.focus.current_id() != Some(SUBMIT_ID) => {
                self.focus.next();
                return InteractionResult::handled();
            }
            _ => {}
        }

        let Some(widget) = self.focused_widget() else {
            return InteractionResult::ignored();
        };
        let mut result = widget.on_key(key);
        let actions = std::mem::take(&mut result.actions);
        self.dispatch(actions);
        result
    }
}
