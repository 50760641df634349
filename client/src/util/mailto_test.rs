use super::*;

use percent_encoding::percent_decode_str;

fn decoded_body(uri: &str) -> String {
    let (_, body) = uri.split_once("&body=").expect("body parameter");
    percent_decode_str(body).decode_utf8().expect("utf-8 body").into_owned()
}

fn decoded_subject(uri: &str) -> String {
    let (_, rest) = uri.split_once("?subject=").expect("subject parameter");
    let (subject, _) = rest.split_once("&body=").expect("body parameter");
    percent_decode_str(subject).decode_utf8().expect("utf-8 subject").into_owned()
}

// =============================================================
// encode_component
// =============================================================

#[test]
fn encode_component_passes_unreserved_characters() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_component_escapes_reserved_characters() {
    assert_eq!(encode_component("a b&c=d?e/f#g+h@i:j;k,l$"), "a%20b%26c%3Dd%3Fe%2Ff%23g%2Bh%40i%3Aj%3Bk%2Cl%24");
}

#[test]
fn encode_component_escapes_newlines_and_percent() {
    assert_eq!(encode_component("50%\r\nok"), "50%25%0D%0Aok");
}

#[test]
fn encode_component_encodes_multibyte_utf8_with_uppercase_hex() {
    assert_eq!(encode_component("é"), "%C3%A9");
    assert_eq!(encode_component("日"), "%E6%97%A5");
}

#[test]
fn encode_component_of_empty_is_empty() {
    assert_eq!(encode_component(""), "");
}

// =============================================================
// contact_mailto
// =============================================================

#[test]
fn contact_mailto_targets_company_inbox() {
    let uri = contact_mailto("Ana", "ana@x.com", "Hi there");
    assert!(uri.starts_with("mailto:info@yalamainternational.com?subject="));
}

#[test]
fn contact_mailto_matches_exact_layout() {
    let uri = contact_mailto("Ana", "ana@x.com", "Hi there");
    assert_eq!(
        uri,
        "mailto:info@yalamainternational.com?subject=Contact Form Submission from Ana&body=Name: Ana%0AEmail: ana%40x.com%0AMessage: Hi%20there"
    );
}

#[test]
fn contact_mailto_body_decodes_to_header_lines() {
    let uri = contact_mailto("Ana", "ana@x.com", "Hi there");
    assert_eq!(decoded_body(&uri), "Name: Ana\nEmail: ana@x.com\nMessage: Hi there");
}

#[test]
fn contact_mailto_subject_names_sender() {
    let uri = contact_mailto("Ana María", "a@b.c", "x");
    assert_eq!(decoded_subject(&uri), "Contact Form Submission from Ana María");
}

#[test]
fn contact_mailto_query_delimiters_in_fields_stay_escaped() {
    let uri = contact_mailto("A&B", "a@b.c", "x=1&body=hijack");
    assert_eq!(uri.matches("&body=").count(), 1);
    assert_eq!(decoded_body(&uri), "Name: A&B\nEmail: a@b.c\nMessage: x=1&body=hijack");
}

#[test]
fn contact_mailto_multiline_message_round_trips() {
    let uri = contact_mailto("Ana", "ana@x.com", "line one\nline two");
    assert!(uri.ends_with("Message: line%20one%0Aline%20two"));
    assert_eq!(
        decoded_body(&uri),
        "Name: Ana\nEmail: ana@x.com\nMessage: line one\nline two"
    );
}

#[test]
fn contact_href_is_plain_mailto() {
    assert_eq!(contact_href(), "mailto:info@yalamainternational.com");
}
