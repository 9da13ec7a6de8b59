//! Static replacement-parts catalog.
//!
//! The catalog is a fixed table; warnings carry a `part_needed` hint
//! that resolves to catalog categories here so the report view can offer
//! concrete purchasable parts.

use serde::Serialize;

use crate::warning::Warning;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const CATEGORY_CAPACITOR: &str = "capacitor";
pub const CATEGORY_REFRIGERANT: &str = "refrigerant";
pub const CATEGORY_FILTER: &str = "filter";
pub const CATEGORY_MAINTENANCE: &str = "maintenance";
pub const CATEGORY_ELECTRICAL: &str = "electrical";
pub const CATEGORY_CONTROL: &str = "control";

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One purchasable part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Part {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub price_usd: f64,
    pub image_url: &'static str,
}

/// The built-in catalog.
pub const PARTS_CATALOG: &[Part] = &[
    Part {
        id: "cap-20-440",
        name: "Run Capacitor 20µF 440V",
        category: CATEGORY_CAPACITOR,
        description: "Dual run capacitor for residential AC units",
        price_usd: 24.99,
        image_url: "/images/capacitor.jpg",
    },
    Part {
        id: "cap-35-440",
        name: "Run Capacitor 35µF 440V",
        category: CATEGORY_CAPACITOR,
        description: "Heavy-duty capacitor for larger AC systems",
        price_usd: 29.99,
        image_url: "/images/capacitor.jpg",
    },
    Part {
        id: "cap-45-440",
        name: "Run Capacitor 45µF 440V",
        category: CATEGORY_CAPACITOR,
        description: "High-capacity run capacitor",
        price_usd: 34.99,
        image_url: "/images/capacitor.jpg",
    },
    Part {
        id: "ref-r410a",
        name: "R-410A Refrigerant 25lb Cylinder",
        category: CATEGORY_REFRIGERANT,
        description: "Puron refrigerant for modern AC systems",
        price_usd: 189.99,
        image_url: "/images/refrigerant.jpg",
    },
    Part {
        id: "ref-r22",
        name: "R-22 Refrigerant 30lb Cylinder",
        category: CATEGORY_REFRIGERANT,
        description: "Freon for older AC systems",
        price_usd: 499.99,
        image_url: "/images/refrigerant.jpg",
    },
    Part {
        id: "filter-16x25",
        name: "MERV 11 Air Filter 16x25x1",
        category: CATEGORY_FILTER,
        description: "High-efficiency pleated air filter",
        price_usd: 12.99,
        image_url: "/images/filter.jpg",
    },
    Part {
        id: "filter-20x25",
        name: "MERV 11 Air Filter 20x25x1",
        category: CATEGORY_FILTER,
        description: "High-efficiency pleated air filter",
        price_usd: 14.99,
        image_url: "/images/filter.jpg",
    },
    Part {
        id: "coil-cleaner",
        name: "Professional Coil Cleaner Concentrate",
        category: CATEGORY_MAINTENANCE,
        description: "Heavy-duty coil cleaning solution",
        price_usd: 24.99,
        image_url: "/images/cleaner.jpg",
    },
    Part {
        id: "contactor-30a",
        name: "30A Contactor Relay",
        category: CATEGORY_ELECTRICAL,
        description: "Single pole contactor for AC units",
        price_usd: 19.99,
        image_url: "/images/contactor.jpg",
    },
    Part {
        id: "thermostat-wifi",
        name: "Smart WiFi Thermostat",
        category: CATEGORY_CONTROL,
        description: "Programmable smart thermostat with app control",
        price_usd: 149.99,
        image_url: "/images/thermostat.jpg",
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// All parts in a category.
pub fn parts_in_category(category: &str) -> Vec<&'static Part> {
    PARTS_CATALOG
        .iter()
        .filter(|p| p.category == category)
        .collect()
}

/// Find a part by id.
pub fn part_by_id(id: &str) -> Option<&'static Part> {
    PARTS_CATALOG.iter().find(|p| p.id == id)
}

/// Parts suggested for a warning's `part_needed` hint. Warnings with no
/// replaceable part (delta-T, amp draw) suggest nothing.
pub fn parts_for_warning(warning: &Warning) -> Vec<&'static Part> {
    match &warning.part_needed {
        Some(category) => parts_in_category(category),
        None => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
