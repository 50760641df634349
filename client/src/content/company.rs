//! Company profile copy: navigation, hero, about section, and footer.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

/// In-page anchor shown in the header, mobile menu, and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Managing director profile in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Director {
    pub name: &'static str,
    pub credentials: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
    pub bio: &'static str,
}

pub const COMPANY_NAME: &str = "Yalama International";
pub const LEGAL_NAME: &str = "YALAMA INTERNATIONAL GENERAL TRADING D.W.C., L.L.C";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About Us" },
    NavLink { href: "#products", label: "Our Products" },
    NavLink { href: "#gallery", label: "Gallery" },
    NavLink { href: "#why-us", label: "Why Choose Us" },
];

pub const HERO_TITLE: &str = "Welcome to Yalama International General Trading";
pub const HERO_LEDE: &str = "Your reliable partner in the global marketplace, specializing in medicines, granite, rice, turmeric, clothing, dates, chillies, and spices.";
pub const HERO_CTA: NavLink = NavLink { href: "#products", label: "Explore Our Products" };

pub const FOUNDED: &str = "Since 2017";

pub const DIRECTOR: Director = Director {
    name: "Dr. Y. Achamamba",
    credentials: "MBBS, MD NEURO",
    role: "Managing Director",
    photo: "/assets/md.jpg",
    bio: "With her extensive medical background and business acumen, Dr. Achamamba leads Yalama International with a vision for excellence and innovation in international trade.",
};

pub const COMPANY_SUMMARY: &str = "Yalama International General Trading specializes in the import and export of a diverse range of products. With years of experience in the trading industry, we have built a reputation for reliability and quality.";

pub const FOOTER_TAGLINE: &str = "Your trusted partner in global trade.";

/// Registered office lines printed in the footer, phones last.
pub const REGISTERED_OFFICE: &[&str] = &[
    LEGAL_NAME,
    "Dubai World Central Block C, Emirates Road,",
    "Jabel Ali, Dubai, United Arab Emirates",
    "P.O.Box 28228",
    "+971 545665189",
    "+971 503895768",
];

pub const COPYRIGHT: &str = "© 2024 Yalama International General Trading. All rights reserved.";
