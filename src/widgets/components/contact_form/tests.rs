use super::{ContactForm, Field, SubmitOutcome, SubmittedValues};
use crate::config::FormConfig;
use crate::error::Error;
use crate::terminal::{KeyCode, KeyEvent};
use crate::testing::Screen;
use crate::ui::document::Role;
use crate::ui::query::TextMatch;
use crate::widgets::traits::Interactive;

fn re(pattern: &str) -> TextMatch {
    TextMatch::pattern(pattern).expect("valid pattern")
}

fn screen() -> Screen {
    Screen::render(ContactForm::new())
}

fn fill(screen: &mut Screen, first: &str, last: &str, email: &str) {
    screen.type_into(&re("first name"), first).expect("first name input");
    screen.type_into(&re("last name"), last).expect("last name input");
    screen.type_into(&re("email"), email).expect("email input");
}

#[test]
fn renders_without_errors() {
    let screen = screen();
    assert!(screen.get_all_by_test_id("error").is_err());
    assert!(screen.form().submitted().is_none());
}

#[test]
fn renders_contact_form_header() {
    let screen = screen();
    let header = screen.get_by_text(&re("contact form")).expect("header");
    assert_eq!(header.role, Role::Heading);
}

#[test]
fn renders_labelled_inputs_and_button() {
    let screen = screen();
    for label in ["first name", "last name", "email", "message"] {
        let input = screen.get_by_label_text(&re(label)).expect("labelled input");
        assert_eq!(input.role, Role::TextBox);
    }
    assert_eq!(screen.get_by_role(Role::Button).expect("button").text, "Submit");
}

#[test]
fn short_first_name_shows_one_error() {
    let mut screen = screen();
    screen.type_into(&re("first name"), "four").expect("type");

    let error = screen.get_by_text(&re("error: firstName")).expect("first name error");
    assert_eq!(error.text, "Error: firstName must be at least 5 characters");
    assert_eq!(screen.get_all_by_test_id("error").expect("errors").len(), 1);
}

#[test]
fn empty_submit_shows_three_errors() {
    let mut screen = screen();
    screen.click_button().expect("click");

    assert!(screen.get_by_text(&re("error: firstName")).is_ok());
    assert!(screen.get_by_text(&re("error: lastName")).is_ok());
    assert!(screen.get_by_text(&re("error: email")).is_ok());
    assert_eq!(screen.get_all_by_test_id("error").expect("errors").len(), 3);
}

#[test]
fn missing_email_shows_one_error_on_submit() {
    let mut screen = screen();
    screen.type_into(&re("first name"), "validName").expect("type");
    screen.type_into(&re("last name"), "lastName").expect("type");
    screen.click_button().expect("click");

    let error = screen.get_by_text(&re("error: email")).expect("email error");
    assert_eq!(error.text, "Error: email must be a valid email address");
    assert_eq!(screen.get_all_by_test_id("error").expect("errors").len(), 1);
}

#[test]
fn invalid_email_shows_error_while_typing() {
    let mut screen = screen();
    screen.type_into(&re("email"), "invalidEmail").expect("type");

    assert!(screen.get_by_text(&re("error: email")).is_ok());
    assert_eq!(
        screen.query_by_text(&re("error: firstName")).expect("query"),
        None
    );
}

#[test]
fn missing_last_name_shows_required_error() {
    let mut screen = screen();
    screen.click_button().expect("click");

    let error = screen.get_by_text(&re("error: lastName")).expect("last name error");
    assert_eq!(error.text, "Error: lastName is a required field");
}

#[test]
fn submit_without_message_renders_three_values() {
    let mut screen = screen();
    fill(&mut screen, "validName", "lastName", "22@gmail.com");
    assert_eq!(
        screen.query_by_text(&re("error: message")).expect("query"),
        None
    );
    screen.click_button().expect("click");

    assert!(screen.get_by_text(&re("validName")).is_ok());
    assert!(screen.get_by_text(&re("lastName")).is_ok());
    assert!(screen.get_by_text(&re("22@gmail.com")).is_ok());
    assert!(screen.get_by_test_id("messageDisplay").is_err());
    assert_eq!(screen.query_by_text(&re("message")).expect("query"), None);
}

#[test]
fn submit_with_all_fields_renders_four_values() {
    let mut screen = screen();
    fill(&mut screen, "validName", "lastName", "22@gmail.com");
    screen.type_into(&re("message"), "amessage").expect("type");
    screen.click_button().expect("click");

    assert!(screen.get_by_text(&re("validName")).is_ok());
    assert!(screen.get_by_text(&re("lastName")).is_ok());
    assert!(screen.get_by_text(&re("22@gmail.com")).is_ok());
    let message = screen.get_by_text(&re("amessage")).expect("message text");
    assert_eq!(message.test_id.as_deref(), Some("messageDisplay"));
    assert_eq!(message.text, "Message: amessage");
}

#[test]
fn fixing_a_field_clears_its_error() {
    let mut screen = screen();
    screen.type_into(&re("first name"), "abc").expect("type");
    assert!(screen.form().error(Field::FirstName).is_some());
    screen.type_into(&re("first name"), "de").expect("type");
    assert_eq!(screen.form().field_value(Field::FirstName), "abcde");
    assert!(screen.form().error(Field::FirstName).is_none());
}

#[test]
fn clearing_last_name_shows_error_live() {
    let mut screen = screen();
    screen.type_into(&re("last name"), "Doe").expect("type");
    assert!(screen.form().error(Field::LastName).is_none());
    screen.clear(&re("last name")).expect("clear");
    assert!(screen.get_by_text(&re("error: lastName")).is_ok());
}

#[test]
fn failed_submit_hides_previous_values() {
    let mut screen = screen();
    fill(&mut screen, "validName", "lastName", "22@gmail.com");
    screen.click_button().expect("click");
    assert!(screen.get_by_test_id("firstnameDisplay").is_ok());

    screen.clear(&re("email")).expect("clear");
    screen.click_button().expect("click");
    assert!(screen.get_by_test_id("firstnameDisplay").is_err());
    assert!(screen.form().submitted().is_none());
}

#[test]
fn submit_returns_outcome() {
    let mut form = ContactForm::new();
    assert_eq!(
        form.submit(),
        SubmitOutcome::Rejected(vec![Field::FirstName, Field::LastName, Field::Email])
    );

    form.change(Field::FirstName, "Grace");
    form.change(Field::LastName, "Hopper");
    form.change(Field::Email, "grace@navy.mil");
    let outcome = form.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Accepted(SubmittedValues {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            message: None,
        })
    );
    assert!(form.errors().is_empty());
}

#[test]
fn keyboard_navigation_reaches_submit() {
    let mut form = ContactForm::new();
    assert_eq!(form.focused_id(), Some("firstName"));
    for _ in 0..4 {
        form.on_key(KeyEvent::plain(KeyCode::Tab));
    }
    assert_eq!(form.focused_id(), Some("submit"));
    form.on_key(KeyEvent::plain(KeyCode::Enter));
    assert_eq!(form.errors().len(), 3);

    form.on_key(KeyEvent::plain(KeyCode::BackTab));
    assert_eq!(form.focused_id(), Some("message"));
}

#[test]
fn enter_in_text_box_moves_focus() {
    let mut form = ContactForm::new();
    form.on_key(KeyEvent::plain(KeyCode::Enter));
    assert_eq!(form.focused_id(), Some("lastName"));
    assert!(form.errors().is_empty());
}

#[test]
fn config_overrides_header_and_rules() {
    let config = FormConfig::from_yaml(
        "header: Say hello\nsubmit_text: Send\nfirst_name_min_len: 2\nemail_pattern: '^.+@example\\.org$'\n",
    )
    .expect("config");
    let mut screen = Screen::render(ContactForm::with_config(config).expect("form"));

    assert!(screen.get_by_text(&re("say hello")).is_ok());
    assert_eq!(screen.get_by_role(Role::Button).expect("button").text, "Send");

    screen.type_into(&re("first name"), "Al").expect("type");
    assert!(screen.form().error(Field::FirstName).is_none());
    screen.type_into(&re("email"), "al@gmail.com").expect("type");
    assert!(screen.form().error(Field::Email).is_some());
}

#[test]
fn invalid_email_pattern_is_rejected() {
    let config = FormConfig {
        email_pattern: "(unclosed".to_string(),
        ..FormConfig::default()
    };
    assert!(matches!(
        ContactForm::with_config(config),
        Err(Error::InvalidPattern(_))
    ));
}

#[test]
fn document_serializes_to_json() {
    let mut screen = screen();
    screen.type_into(&re("first name"), "four").expect("type");
    let json = screen.document().to_json().expect("json");
    assert!(json.contains("\"role\": \"text_box\""));
    assert!(json.contains("Error: firstName must be at least 5 characters"));
}

#[test]
fn whitespace_message_counts_as_submitted() {
    let mut form = ContactForm::new();
    form.change(Field::FirstName, "validName");
    form.change(Field::LastName, "lastName");
    form.change(Field::Email, "22@gmail.com");
    form.change(Field::Message, " ");

    let SubmitOutcome::Accepted(values) = form.submit() else {
        panic!("submit should pass");
    };
    assert_eq!(values.message.as_deref(), Some(" "));

    let doc = form.render();
    let message = doc.get_by_test_id("messageDisplay").expect("message line");
    assert_eq!(message.text, "Message:  ");
}

#[test]
fn whitespace_last_name_is_rejected() {
    let mut form = ContactForm::new();
    form.change(Field::FirstName, "validName");
    form.change(Field::LastName, "   ");
    form.change(Field::Email, "22@gmail.com");
    assert_eq!(form.submit(), SubmitOutcome::Rejected(vec![Field::LastName]));
    assert_eq!(form.errors().len(), 1);
}

#[test]
fn initial_document_json_lists_every_control() {
    let form = ContactForm::with_config(FormConfig::default()).expect("form");
    let json = form.render().to_json().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    let elements = value["elements"].as_array().expect("elements array");

    let roles: Vec<&str> = elements
        .iter()
        .map(|element| element["role"].as_str().expect("role"))
        .collect();
    assert_eq!(
        roles,
        vec!["heading", "text_box", "text_box", "text_box", "text_box", "button"]
    );
    assert_eq!(elements[0]["text"], "Contact Form");
    assert_eq!(elements[1]["label"], "First Name*");
    assert_eq!(elements[1]["focused"], true);
    assert!(elements[2].get("focused").is_none());
}

#[test]
fn submitted_block_adds_headings() {
    let mut screen = screen();
    assert_eq!(screen.get_all_by_role(Role::Heading).expect("headings").len(), 1);
    fill(&mut screen, "validName", "lastName", "22@gmail.com");
    screen.click_button().expect("click");

    let headings = screen.get_all_by_role(Role::Heading).expect("headings");
    assert_eq!(headings.len(), 2);
    assert_eq!(headings[1].text, "You Submitted:");
    assert_eq!(screen.get_all_by_role(Role::Text).expect("values").len(), 3);
}

#[test]
fn both_constructors_install_email_rule() {
    let forms = [
        ContactForm::new(),
        ContactForm::with_config(FormConfig::default()).expect("form"),
    ];
    for mut form in forms {
        assert!(!form.change(Field::Email, "a@b.c"));
        assert_eq!(
            form.error(Field::Email),
            Some("email must be a valid email address")
        );
        assert!(form.change(Field::Email, "22@gmail.com"));
        assert!(form.error(Field::Email).is_none());
    }
}
