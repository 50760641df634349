//! `mailto:` URI construction for the contact form.
//!
//! The composed link is handed to the browser, which opens the visitor's mail
//! client with subject and body pre-filled. Field values are escaped the same
//! way `encodeURIComponent` escapes them so mail clients decode them
//! identically; the fixed template text between them is left as-is.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Recipient of every contact form message.
pub const CONTACT_EMAIL: &str = "info@yalamainternational.com";

const SUBJECT_PREFIX: &str = "Contact Form Submission from ";

/// Encoded line break between body sections.
const NEWLINE: &str = "%0A";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URI component.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Plain `mailto:` link to the contact address.
#[must_use]
pub fn contact_href() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// Build the contact form `mailto:` URI.
///
/// Shape: `mailto:<to>?subject=<prefix><name>&body=Name: <name>%0AEmail: <email>%0AMessage: <message>`.
#[must_use]
pub fn contact_mailto(name: &str, email: &str, message: &str) -> String {
    let name = encode_component(name);
    let email = encode_component(email);
    let message = encode_component(message);
    format!(
        "mailto:{CONTACT_EMAIL}?subject={SUBJECT_PREFIX}{name}&body=Name: {name}{NEWLINE}Email: {email}{NEWLINE}Message: {message}"
    )
}
