use super::*;

fn filled(name: &str, email: &str, message: &str) -> ContactFormState {
    let mut form = ContactFormState::default();
    form.set(ContactField::Name, name);
    form.set(ContactField::Email, email);
    form.set(ContactField::Message, message);
    form
}

// =============================================================
// Field access
// =============================================================

#[test]
fn default_form_is_empty() {
    let form = ContactFormState::default();
    for field in ContactField::ALL {
        assert_eq!(form.get(field), "");
    }
    assert!(!form.is_complete());
}

#[test]
fn set_and_get_address_each_field() {
    let form = filled("Ana", "ana@x.com", "Hi there");
    assert_eq!(form.get(ContactField::Name), "Ana");
    assert_eq!(form.get(ContactField::Email), "ana@x.com");
    assert_eq!(form.get(ContactField::Message), "Hi there");
}

#[test]
fn field_keys_match_input_names() {
    let keys = ContactField::ALL.map(ContactField::key);
    assert_eq!(keys, ["name", "email", "message"]);
    let labels = ContactField::ALL.map(ContactField::label);
    assert_eq!(labels, ["Name", "Email", "Message"]);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn is_complete_requires_all_fields() {
    assert!(filled("Ana", "ana@x.com", "Hi").is_complete());
    assert!(!filled("", "ana@x.com", "Hi").is_complete());
    assert!(!filled("Ana", "", "Hi").is_complete());
    assert!(!filled("Ana", "ana@x.com", "").is_complete());
}

#[test]
fn whitespace_only_fields_still_submit() {
    let mut form = filled("   ", "ana@x.com", "\n\t");
    assert!(form.is_complete());
    let href = form.submit();
    assert!(href.contains("subject=Contact Form Submission from %20%20%20"), "{href}");
    assert!(href.ends_with("Message: %0A%09"), "{href}");
    assert_eq!(form, ContactFormState::default());
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_returns_encoded_mailto() {
    let mut form = filled("Ana", "ana@x.com", "Hi there");
    let href = form.submit();
    assert!(href.starts_with("mailto:info@yalamainternational.com?"));
    assert!(href.contains("subject=Contact Form Submission from Ana"));
    assert!(href.contains("Email: ana%40x.com"));
    assert!(href.ends_with("Message: Hi%20there"));
}

#[test]
fn submit_clears_every_field() {
    let mut form = filled("Ana", "ana@x.com", "Hi there");
    let _ = form.submit();
    assert_eq!(form, ContactFormState::default());
    for field in ContactField::ALL {
        assert_eq!(form.get(field), "");
    }
}

#[test]
fn submit_uses_values_before_reset() {
    let mut form = filled("Bo", "bo@y.org", "Quote please");
    let first = form.submit();
    form.set(ContactField::Name, "Cy");
    let second = form.submit();
    assert!(first.contains("from Bo"));
    assert!(second.contains("from Cy"));
    assert!(second.contains("Email: %0A"));
}
