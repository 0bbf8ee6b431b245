use crate::error::Result;
use crate::ui::document::{Document, Element, Role};
use regex::{Regex, RegexBuilder};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unable to find an element {0}")]
    NotFound(String),
    #[error("found {count} elements {query}, expected one")]
    Multiple { query: String, count: usize },
}

/// How a query compares element text.
///
/// `Exact` compares the whole trimmed text. `Pattern` is a case-insensitive
/// regex that may match anywhere in the text.
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    Pattern(Regex),
}

impl TextMatch {
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self::Pattern(regex))
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Exact(expected) => text.trim() == expected,
            Self::Pattern(regex) => regex.is_match(text),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(value: &str) -> Self {
        Self::exact(value)
    }
}

impl From<Regex> for TextMatch {
    fn from(value: Regex) -> Self {
        Self::Pattern(value)
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => write!(f, "\"{text}\""),
            Self::Pattern(regex) => write!(f, "/{}/i", regex.as_str()),
        }
    }
}

fn single<'a>(
    mut found: Vec<&'a Element>,
    describe: impl FnOnce() -> String,
) -> std::result::Result<Option<&'a Element>, QueryError> {
    match found.len() {
        0 => Ok(None),
        1 => Ok(found.pop()),
        count => Err(QueryError::Multiple {
            query: describe(),
            count,
        }),
    }
}

fn required<'a>(
    found: Vec<&'a Element>,
    describe: impl Fn() -> String,
) -> std::result::Result<&'a Element, QueryError> {
    single(found, &describe)?.ok_or_else(|| QueryError::NotFound(describe()))
}

fn non_empty<'a>(
    found: Vec<&'a Element>,
    describe: impl FnOnce() -> String,
) -> std::result::Result<Vec<&'a Element>, QueryError> {
    if found.is_empty() {
        return Err(QueryError::NotFound(describe()));
    }
    Ok(found)
}

impl Document {
    /// Elements whose visible text matches. Text box values are not text.
    pub fn find_by_text(&self, matcher: &TextMatch) -> Vec<&Element> {
        self.elements()
            .iter()
            .filter(|element| !element.text.is_empty() && matcher.matches(&element.text))
            .collect()
    }

    pub fn find_by_label_text(&self, matcher: &TextMatch) -> Vec<&Element> {
        self.elements()
            .iter()
            .filter(|element| {
                element
                    .label
                    .as_deref()
                    .is_some_and(|label| matcher.matches(label))
            })
            .collect()
    }

    pub fn find_by_role(&self, role: Role) -> Vec<&Element> {
        self.elements()
            .iter()
            .filter(|element| element.role == role)
            .collect()
    }

    pub fn find_by_test_id(&self, test_id: &str) -> Vec<&Element> {
        self.elements()
            .iter()
            .filter(|element| element.test_id.as_deref() == Some(test_id))
            .collect()
    }

    pub fn get_by_text(&self, matcher: &TextMatch) -> std::result::Result<&Element, QueryError> {
        required(self.find_by_text(matcher), || format!("with text {matcher}"))
    }

    pub fn query_by_text(
        &self,
        matcher: &TextMatch,
    ) -> std::result::Result<Option<&Element>, QueryError> {
        single(self.find_by_text(matcher), || format!("with text {matcher}"))
    }

    pub fn get_all_by_text(
        &self,
        matcher: &TextMatch,
    ) -> std::result::Result<Vec<&Element>, QueryError> {
        non_empty(self.find_by_text(matcher), || format!("with text {matcher}"))
    }

    pub fn get_by_label_text(
        &self,
        matcher: &TextMatch,
    ) -> std::result::Result<&Element, QueryError> {
        required(self.find_by_label_text(matcher), || {
            format!("with label {matcher}")
        })
    }

    pub fn get_by_role(&self, role: Role) -> std::result::Result<&Element, QueryError> {
        required(self.find_by_role(role), || format!("with role {role:?}"))
    }

    pub fn get_all_by_role(&self, role: Role) -> std::result::Result<Vec<&Element>, QueryError> {
        non_empty(self.find_by_role(role), || format!("with role {role:?}"))
    }

    pub fn get_by_test_id(&self, test_id: &str) -> std::result::Result<&Element, QueryError> {
        required(self.find_by_test_id(test_id), || {
            format!("with test id \"{test_id}\"")
        })
    }

    pub fn get_all_by_test_id(
        &self,
        test_id: &str,
    ) -> std::result::Result<Vec<&Element>, QueryError> {
        non_empty(self.find_by_test_id(test_id), || {
            format!("with test id \"{test_id}\"")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{QueryError, TextMatch};
    use crate::ui::document::{Document, Element, Role};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.push(Element::heading("Contact Form"));
        doc.push(Element::text_box("Last Name*", "lastName").with_id("lastName"));
        doc.push(Element::alert("Error: lastName is a required field").with_test_id("error"));
        doc.push(Element::alert("Error: email must be a valid email address").with_test_id("error"));
        doc.push(Element::button("Submit"));
        doc
    }

    fn re(pattern: &str) -> TextMatch {
        TextMatch::pattern(pattern).expect("pattern")
    }

    #[test]
    fn pattern_match_is_case_insensitive_substring() {
        let doc = sample();
        let header = doc.get_by_text(&re("contact form")).expect("header");
        assert_eq!(header.role, Role::Heading);
    }

    #[test]
    fn exact_match_requires_whole_text() {
        let doc = sample();
        assert!(doc.get_by_text(&"Contact Form".into()).is_ok());
        assert!(matches!(
            doc.get_by_text(&"Contact".into()),
            Err(QueryError::NotFound(_))
        ));
    }

    #[test]
    fn get_fails_on_multiple_matches() {
        let doc = sample();
        let err = doc.get_by_text(&re("^error:")).expect_err("two alerts");
        assert!(matches!(err, QueryError::Multiple { count: 2, .. }));
        assert_eq!(doc.get_all_by_text(&re("^error:")).expect("all").len(), 2);
        assert!(doc.query_by_text(&re("^error:")).is_err());
    }

    #[test]
    fn query_returns_none_when_absent() {
        let doc = sample();
        assert_eq!(doc.query_by_text(&re("error: message")).expect("query"), None);
    }

    #[test]
    fn text_queries_ignore_text_box_values() {
        let doc = sample();
        let matches = doc.find_by_text(&re("lastName"));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].role, Role::Alert);
    }

    #[test]
    fn label_query_finds_text_box() {
        let doc = sample();
        let input = doc.get_by_label_text(&re("last name")).expect("input");
        assert_eq!(input.value.as_deref(), Some("lastName"));
    }

    #[test]
    fn role_and_test_id_queries() {
        let doc = sample();
        assert_eq!(doc.get_by_role(Role::Button).expect("button").text, "Submit");
        assert_eq!(doc.get_all_by_test_id("error").expect("errors").len(), 2);
        assert!(doc.get_by_test_id("messageDisplay").is_err());
    }
}
