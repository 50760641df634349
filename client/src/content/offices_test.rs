use super::*;

#[test]
fn three_offices_in_display_order() {
    let regions = LOCATIONS.iter().map(|loc| loc.region).collect::<Vec<_>>();
    assert_eq!(regions, ["DUBAI:", "UNITED STATES:", "UNITED KINGDOM:"]);
}

#[test]
fn tel_href_strips_spaces() {
    assert_eq!(tel_href("+971 568 862 632"), "tel:+971568862632");
}

#[test]
fn tel_href_keeps_punctuation() {
    assert_eq!(tel_href("+44 (741) 741 4003"), "tel:+44(741)7414003");
}

#[test]
fn tel_href_strips_tabs_and_non_breaking_spaces() {
    assert_eq!(tel_href("+1\t804\u{a0}239 3377"), "tel:+18042393377");
}

#[test]
fn every_office_tel_href_has_no_whitespace() {
    for loc in LOCATIONS {
        let href = loc.tel_href();
        assert!(href.starts_with("tel:+"), "{href}");
        assert!(!href.chars().any(char::is_whitespace), "{href}");
    }
}

#[test]
fn every_office_links_to_maps_and_has_address() {
    for loc in LOCATIONS {
        assert!(loc.maps_url.starts_with("https://www.google.com/maps/place/"));
        assert!(!loc.address.is_empty());
    }
}
