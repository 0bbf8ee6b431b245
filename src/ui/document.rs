use crate::error::Result;
use serde::Serialize;

/// Accessible role of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Heading,
    TextBox,
    Button,
    Text,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub role: Role,
    /// Visible text content. For a text box this is empty; its caption lives
    /// in `label` and its contents in `value`.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub focused: bool,
    /// Caret position inside `value`, in chars.
    #[serde(skip)]
    pub cursor: Option<usize>,
}

impl Element {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            id: None,
            label: None,
            value: None,
            test_id: None,
            focused: false,
            cursor: None,
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Role::Heading, text)
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self::new(Role::Alert, text)
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(Role::Button, text)
    }

    pub fn text_box(label: impl Into<String>, value: impl Into<String>) -> Self {
        let mut element = Self::new(Role::TextBox, "");
        element.label = Some(label.into());
        element.value = Some(value.into());
        element
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

/// Flat, ordered output of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
