//! Office locations listed in the contact section.

#[cfg(test)]
#[path = "offices_test.rs"]
mod offices_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub region: &'static str,
    pub address: &'static [&'static str],
    pub phone: &'static str,
    pub maps_url: &'static str,
}

impl Location {
    /// `tel:` href for the display phone number with all whitespace removed.
    #[must_use]
    pub fn tel_href(&self) -> String {
        tel_href(self.phone)
    }
}

pub const LOCATIONS: &[Location] = &[
    Location {
        region: "DUBAI:",
        address: &[
            "Dubai World Central Block C, Emirates Road,",
            "Jabel Ali, Dubai",
            "United Arab Emirates",
            "P.O. Box 28228",
        ],
        phone: "+971 568 862 632",
        maps_url: "https://www.google.com/maps/place/Dubai+World+Central",
    },
    Location {
        region: "UNITED STATES:",
        address: &["Lakeview Parkway", "Alpharetta GA 30009", "United States"],
        phone: "+01 804 239 3377",
        maps_url: "https://www.google.com/maps/place/Lakeview+Parkway+Alpharetta,+GA+30009",
    },
    Location {
        region: "UNITED KINGDOM:",
        address: &["3 Church View", "Boadelwayddan", "Rhyl LL18 5TF, UK"],
        phone: "+44 (741) 741 4003",
        maps_url: "https://www.google.com/maps/place/3+Church+Vw,+Bodelwyddan,+Rhyl+LL18+5TF,+UK",
    },
];

#[must_use]
pub fn tel_href(phone: &str) -> String {
    let digits = phone.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    format!("tel:{digits}")
}
