//! Product catalog, HS code reference rows, and "why choose us" features.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::components::icon::IconKind;

/// A traded product shown as a card in the products grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub additional_info: &'static str,
    /// Site-relative image path.
    pub image: &'static str,
}

/// One feature tile in the "Why Choose Us" grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// A row of the pharmaceutical Harmonized System code table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HsCodeEntry {
    pub code: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Medicine",
        description: "We offer a range of pharmaceutical products, adhering to the highest quality standards.",
        additional_info: "Our selection includes essential medicines that cater to various health needs.",
        image: "/assets/products/medicines.png",
    },
    Product {
        name: "Granite",
        description: "Our premium granite products are sourced from the finest quarries.",
        additional_info: "Ideal for construction and home décor, our granite offers durability and aesthetic appeal.",
        image: "/assets/products/granite.png",
    },
    Product {
        name: "Rice",
        description: "Yalama provides high-quality rice varieties, ensuring freshness and flavor.",
        additional_info: "Our rice is sourced from reputable suppliers, suitable for both local and international markets.",
        image: "/assets/products/rice.png",
    },
    Product {
        name: "Turmeric",
        description: "Known for its health benefits, our turmeric is sourced from trusted farms.",
        additional_info: "Available in various forms, it is perfect for culinary and medicinal uses.",
        image: "/assets/products/turmeric.png",
    },
    Product {
        name: "Clothes",
        description: "We trade in a wide variety of clothing, from traditional attire to modern fashion.",
        additional_info: "Our collection is curated to meet diverse tastes and preferences.",
        image: "/assets/products/clothes.png",
    },
    Product {
        name: "Dates",
        description: "Our premium dates are harvested at the peak of ripeness, ensuring exceptional taste and quality.",
        additional_info: "Perfect for snacking or culinary use, they are a healthy choice.",
        image: "/assets/products/dates.png",
    },
    Product {
        name: "Chillies",
        description: "We offer a range of chillies, both dried and fresh, known for their rich flavor and heat.",
        additional_info: "Our products are ideal for enhancing the taste of any dish.",
        image: "/assets/products/chilli.png",
    },
    Product {
        name: "Spices",
        description: "Explore our extensive range of spices, sourced from around the world.",
        additional_info: "Our selection includes everything from common spices to exotic varieties, all ensuring the highest quality.",
        image: "/assets/products/spices.png",
    },
];

pub const FEATURES: &[FeatureItem] = &[
    FeatureItem {
        icon: IconKind::ShieldCheck,
        title: "Quality Assurance",
        description: "We prioritize quality in every product we trade.",
    },
    FeatureItem {
        icon: IconKind::Users,
        title: "Customer Focus",
        description: "Our clients are at the heart of what we do.",
    },
    FeatureItem {
        icon: IconKind::Globe,
        title: "Global Reach",
        description: "We connect with suppliers and customers worldwide.",
    },
    FeatureItem {
        icon: IconKind::Leaf,
        title: "Sustainability",
        description: "We are committed to ethical trading practices.",
    },
];

pub const HS_CODES: &[HsCodeEntry] = &[
    HsCodeEntry {
        code: "HS 300490",
        category: "General Medicaments",
        description: "Covers pharmaceutical products with mixed or unmixed formulations intended for therapeutic or prophylactic use",
    },
    HsCodeEntry {
        code: "HS 300215",
        category: "Immunological Products",
        description: "Includes vaccines, toxins, cell cultures and related immunological preparations",
    },
    HsCodeEntry {
        code: "HS 300420",
        category: "Antibiotic Products",
        description: "Medicaments containing antibiotics for treating bacterial infections",
    },
    HsCodeEntry {
        code: "HS 300439",
        category: "Hormonal Preparations",
        description: "Pharmaceutical products containing hormones or steroids but not containing antibiotics",
    },
    HsCodeEntry {
        code: "HS 300431",
        category: "Insulin Products",
        description: "Medicaments containing insulin for diabetes treatment",
    },
];

/// Column headings of the HS code table, in display order.
pub const HS_CODE_COLUMNS: [&str; 3] = ["HS Code", "Product Category", "Description"];
