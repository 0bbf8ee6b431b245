use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Field name used for node ids and in error text.
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Input label; required fields carry a trailing `*`.
    pub fn label(self) -> String {
        if self.is_required() {
            format!("{}*", self.name())
        } else {
            self.name().to_string()
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }

    pub fn display_test_id(self) -> &'static str {
        match self {
            Self::FirstName => "firstnameDisplay",
            Self::LastName => "lastnameDisplay",
            Self::Email => "emailDisplay",
            Self::Message => "messageDisplay",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Snapshot taken when a submit passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmittedValues {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            first_name: state.first_name.clone(),
            last_name: state.last_name.clone(),
            email: state.email.clone(),
            message: (!state.message.is_empty()).then(|| state.message.clone()),
        }
    }

    /// Submitted fields in display order; an omitted message is skipped.
    pub fn entries(&self) -> Vec<(Field, &str)> {
        let mut entries = vec![
            (Field::FirstName, self.first_name.as_str()),
            (Field::LastName, self.last_name.as_str()),
            (Field::Email, self.email.as_str()),
        ];
        if let Some(message) = &self.message {
            entries.push((Field::Message, message.as_str()));
        }
        entries
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmittedValues),
    Rejected(Vec<Field>),
}
