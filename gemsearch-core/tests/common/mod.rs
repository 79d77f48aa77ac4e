#![allow(dead_code)]

use gemsearch_core::CatalogItem;
use serde_json::{json, Value};

pub fn parse_catalog(items: Value) -> Vec<CatalogItem> {
    serde_json::from_value(items).expect("fixture catalog is valid")
}

pub fn names(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

/// The two-stone catalog used by the worked examples
pub fn sapphire_and_ruby() -> Vec<CatalogItem> {
    parse_catalog(json!([
        {
            "id": "g-1",
            "name": "Blue Sapphire",
            "category": "Sapphire",
            "origin": "Sri Lanka",
            "color": "Blue",
            "price": 1200,
            "inStock": true,
            "variant": "cut",
            "caratWeight": 2.1
        },
        {
            "id": "g-2",
            "name": "Red Ruby",
            "category": "Ruby",
            "origin": "Myanmar",
            "color": "Red",
            "price": 800,
            "inStock": true,
            "variant": "rough",
            "gramWeight": 5.0
        }
    ]))
}

/// A broader mixed catalog with every attribute populated somewhere
pub fn mixed_catalog() -> Vec<CatalogItem> {
    parse_catalog(json!([
        {
            "id": "c-1",
            "name": "Royal Blue Sapphire",
            "description": "Unheated cushion with vivid saturation",
            "category": "Sapphire",
            "origin": "Sri Lanka",
            "color": "Blue",
            "price": 4200,
            "inStock": true,
            "treatment": {"treated": false, "type": ""},
            "certification": {"certified": true, "lab": "GRS", "certificateUrl": "https://certs.example/grs-1.pdf"},
            "dimensions": {"length": 9.2, "width": 7.4, "height": 4.8},
            "videos": ["https://media.example/c-1.mp4"],
            "variant": "cut",
            "caratWeight": 3.02,
            "clarity": "VS1",
            "cutQuality": "Excellent",
            "symmetry": "Very Good",
            "polish": "Excellent",
            "colorGrade": "AAA",
            "colorIntensity": "Vivid",
            "cutForm": "Cushion"
        },
        {
            "id": "c-2",
            "name": "Pigeon Blood Ruby",
            "category": "Ruby",
            "origin": "Myanmar",
            "color": "Red",
            "price": 9800,
            "inStock": false,
            "treatment": {"treated": true, "type": "heated"},
            "certification": {"certified": true, "lab": "GIA"},
            "dimensions": {"length": 7.1, "width": 5.9, "height": 3.6},
            "variant": "cut",
            "caratWeight": 1.85,
            "clarity": "VVS2",
            "cutQuality": "Very Good",
            "cutForm": "Oval"
        },
        {
            "id": "r-1",
            "name": "Tanzanite Crystal",
            "category": "Tanzanite",
            "origin": "Tanzania",
            "color": "Violet",
            "price": 650,
            "inStock": true,
            "dimensions": {"length": 24.0, "width": 15.5, "height": 11.0},
            "variant": "rough",
            "gramWeight": 12.4,
            "crystalQuality": "Excellent",
            "transparency": "Transparent",
            "estimatedCaratYield": 14.0
        },
        {
            "id": "r-2",
            "name": "Emerald Rough",
            "category": "Emerald",
            "origin": "Colombia",
            "color": "Green",
            "price": 1900,
            "inStock": true,
            "variant": "rough",
            "gramWeight": 8.0,
            "crystalQuality": "Good",
            "transparency": "Translucent",
            "estimatedCaratYield": 30.0
        },
        {
            "id": "r-3",
            "name": "Spinel Pebble",
            "category": "Spinel",
            "origin": "Tanzania",
            "price": 120,
            "inStock": true,
            "variant": "rough",
            "gramWeight": 2.2,
            "transparency": "Opaque"
        }
    ]))
}
