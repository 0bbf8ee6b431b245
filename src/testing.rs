//! Drives a mounted [`ContactForm`] the way a user would and exposes the
//! latest render for queries.

use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::document::{Document, Role};
use crate::ui::query::{QueryError, TextMatch};
use crate::widgets::components::contact_form::{ContactForm, Field};
use crate::widgets::traits::Interactive;
use std::ops::Deref;

pub struct Screen {
    form: ContactForm,
    document: Document,
}

impl Screen {
    pub fn render(form: ContactForm) -> Self {
        let document = form.render();
        Self { form, document }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Focuses the text box labelled `label` and types `text` one key at a
    /// time, appending to whatever the box already holds.
    pub fn type_into(&mut self, label: &TextMatch, text: &str) -> Result<(), QueryError> {
        let id = self.text_box_id(label)?;
        self.form.focus(&id);
        self.press(KeyEvent::plain(KeyCode::End));
        for ch in text.chars() {
            self.press(KeyEvent::plain(KeyCode::Char(ch)));
        }
        Ok(())
    }

    /// Empties the text box labelled `label`.
    pub fn clear(&mut self, label: &TextMatch) -> Result<(), QueryError> {
        let id = self.text_box_id(label)?;
        let field = Field::from_id(&id).ok_or_else(|| QueryError::NotFound(id.clone()))?;
        self.form.change(field, String::new());
        self.rerender();
        Ok(())
    }

    /// Clicks the only button on screen.
    pub fn click_button(&mut self) -> Result<(), QueryError> {
        let id = self
            .document
            .get_by_role(Role::Button)?
            .id
            .clone()
            .ok_or_else(|| QueryError::NotFound("button without id".to_string()))?;
        self.form.focus(&id);
        self.press(KeyEvent::plain(KeyCode::Enter));
        Ok(())
    }

    pub fn press(&mut self, key: KeyEvent) {
        self.form.on_key(key);
        self.rerender();
    }

    fn text_box_id(&self, label: &TextMatch) -> Result<String, QueryError> {
        let element = self.document.get_by_label_text(label)?;
        element
            .id
            .clone()
            .ok_or_else(|| QueryError::NotFound(format!("id for label {label}")))
    }

    fn rerender(&mut self) {
        self.document = self.form.render();
    }
}

impl Deref for Screen {
    type Target = Document;

    fn deref(&self) -> &Self::Target {
        &self.document
    }
}
