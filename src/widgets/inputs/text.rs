use super::text_edit;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::document::Element;
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, TextAction,
    TextEditState, ValidationMode, WidgetAction,
};
use crate::widgets::validators::{Validator, run_validators};

pub struct TextInput {
    base: WidgetBase,
    value: String,
    cursor: usize,
    validators: Vec<Validator>,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(id, label),
            value: String::new(),
            cursor: 0,
            validators: Vec::new(),
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.set_value(value.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn edited_result(&self) -> InteractionResult {
        InteractionResult::with_action(WidgetAction::ValueChanged {
            id: self.base.id().to_string(),
            value: self.value.clone(),
        })
    }
}

impl Drawable for TextInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let mut element = Element::text_box(self.base.label(), self.value.clone())
            .with_id(self.base.id())
            .focused(focused);
        if focused {
            element = element.with_cursor(text_edit::clamp_cursor(self.cursor, &self.value));
        }
        DrawOutput::single(element)
    }
}

impl Interactive for TextInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('w') => self.on_text_action(TextAction::DeleteWordLeft),
                KeyCode::Delete => self.on_text_action(TextAction::DeleteWordRight),
                _ => InteractionResult::ignored(),
            };
        }

        match key.code {
            KeyCode::Char(ch) => {
                text_edit::insert_char(&mut self.value, &mut self.cursor, ch);
                self.edited_result()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Left => {
                if text_edit::move_left(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Right => {
                if text_edit::move_right(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Home => {
                self.cursor = 0;
                InteractionResult::handled()
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.value);
                InteractionResult::handled()
            }
            _ => InteractionResult::ignored(),
        }
    }

    fn text_editing(&mut self) -> Option<TextEditState<'_>> {
        Some(TextEditState {
            value: &mut self.value,
            cursor: &mut self.cursor,
        })
    }

    fn on_text_edited(&mut self) -> InteractionResult {
        self.edited_result()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        self.cursor = text_edit::char_count(&self.value);
    }

    fn validate(&self, _mode: ValidationMode) -> Result<(), String> {
        run_validators(&self.validators, &self.value)
    }
}
