use crate::ui::document::{Element, Role};
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};

pub struct Text {
    id: String,
    role: Role,
    text: String,
    test_id: Option<String>,
}

impl Text {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::Text,
            text: text.into(),
            test_id: None,
        }
    }

    pub fn heading(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, text).with_role(Role::Heading)
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }
}

impl Drawable for Text {
    fn id(&self) -> &str {
        &self.id
    }

    fn draw(&self, _ctx: &RenderContext) -> DrawOutput {
        let mut element = Element::new(self.role, self.text.clone()).with_id(self.id.clone());
        if let Some(test_id) = &self.test_id {
            element = element.with_test_id(test_id.clone());
        }
        DrawOutput::single(element)
    }
}
