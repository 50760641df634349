use super::*;

#[test]
fn nav_links_target_page_sections_in_order() {
    let hrefs = NAV_LINKS.iter().map(|link| link.href).collect::<Vec<_>>();
    assert_eq!(hrefs, ["#home", "#about", "#products", "#gallery", "#why-us"]);
}

#[test]
fn nav_link_labels_are_non_empty() {
    assert!(NAV_LINKS.iter().all(|link| !link.label.is_empty()));
}

#[test]
fn hero_cta_points_at_products() {
    assert_eq!(HERO_CTA.href, "#products");
    assert!(NAV_LINKS.iter().any(|link| link.href == HERO_CTA.href));
}

#[test]
fn registered_office_leads_with_legal_name() {
    assert_eq!(REGISTERED_OFFICE.first(), Some(&LEGAL_NAME));
    assert!(REGISTERED_OFFICE.iter().any(|line| line.contains("P.O.Box")));
}

#[test]
fn director_photo_is_site_relative() {
    assert!(DIRECTOR.photo.starts_with("/assets/"));
    assert_eq!(DIRECTOR.role, "Managing Director");
}
