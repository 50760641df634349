#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn now_ms_is_zero_without_browser() {
    assert!(now_ms().abs() < f64::EPSILON);
}

#[test]
fn navigate_to_is_noop_but_callable() {
    navigate_to("mailto:info@yalamainternational.com");
    navigate_to("");
}
