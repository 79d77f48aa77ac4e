use serde::{Deserialize, Serialize};

/// A gemstone in the catalog.
///
/// Attributes shared by every stone live on the struct itself. Attributes that
/// only exist for cut or rough stones live inside [`Variant`], so the weight
/// of a rough stone can never be read as carats by accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub color: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub treatment: Treatment,
    #[serde(default)]
    pub certification: Certification,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(flatten)]
    pub variant: Variant,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Treatment {
    pub treated: bool,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub certified: bool,
    #[serde(default)]
    pub lab: String,
    #[serde(default)]
    pub certificate_url: Option<String>,
}

/// Physical size of a stone. All three axes share one unit (mm).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Cut or rough, together with the attributes only that kind of stone has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum Variant {
    Cut(CutAttributes),
    Rough(RoughAttributes),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutAttributes {
    pub carat_weight: f64,
    #[serde(default)]
    pub clarity: String,
    #[serde(default)]
    pub cut_quality: String,
    #[serde(default)]
    pub symmetry: String,
    #[serde(default)]
    pub polish: String,
    #[serde(default)]
    pub color_grade: String,
    #[serde(default)]
    pub color_intensity: String,
    #[serde(default)]
    pub cut_form: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoughAttributes {
    pub gram_weight: f64,
    #[serde(default)]
    pub crystal_quality: String,
    #[serde(default)]
    pub transparency: String,
    #[serde(default)]
    pub estimated_carat_yield: Option<f64>,
}

/// Discriminant of [`Variant`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Cut,
    Rough,
}

impl VariantKind {
    /// Parse a caller-supplied type selection ("cut" / "rough", any case)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("cut") {
            Some(VariantKind::Cut)
        } else if s.eq_ignore_ascii_case("rough") {
            Some(VariantKind::Rough)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VariantKind::Cut => "cut",
            VariantKind::Rough => "rough",
        }
    }

    /// Display label used in applied-filter descriptions
    pub fn label(self) -> &'static str {
        match self {
            VariantKind::Cut => "Geschliffen",
            VariantKind::Rough => "Roh",
        }
    }
}

/// Unit of an item's canonical weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Carat,
    Gram,
}

impl WeightUnit {
    /// Carats when the catalog holds at least one cut stone, grams otherwise
    pub fn for_catalog(catalog: &[CatalogItem]) -> Self {
        if catalog.iter().any(CatalogItem::is_cut) {
            WeightUnit::Carat
        } else {
            WeightUnit::Gram
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Carat => "ct",
            WeightUnit::Gram => "g",
        }
    }
}

impl CatalogItem {
    pub fn kind(&self) -> VariantKind {
        match self.variant {
            Variant::Cut(_) => VariantKind::Cut,
            Variant::Rough(_) => VariantKind::Rough,
        }
    }

    pub fn is_cut(&self) -> bool {
        matches!(self.variant, Variant::Cut(_))
    }

    pub fn cut(&self) -> Option<&CutAttributes> {
        match &self.variant {
            Variant::Cut(cut) => Some(cut),
            Variant::Rough(_) => None,
        }
    }

    pub fn rough(&self) -> Option<&RoughAttributes> {
        match &self.variant {
            Variant::Rough(rough) => Some(rough),
            Variant::Cut(_) => None,
        }
    }

    /// Canonical weight: carats for cut stones, grams for rough ones
    pub fn weight(&self) -> f64 {
        match &self.variant {
            Variant::Cut(cut) => cut.carat_weight,
            Variant::Rough(rough) => rough.gram_weight,
        }
    }

    pub fn weight_unit(&self) -> WeightUnit {
        match self.variant {
            Variant::Cut(_) => WeightUnit::Carat,
            Variant::Rough(_) => WeightUnit::Gram,
        }
    }

    pub fn estimated_yield(&self) -> Option<f64> {
        self.rough().and_then(|rough| rough.estimated_carat_yield)
    }

    pub fn has_videos(&self) -> bool {
        !self.videos.is_empty()
    }

    /// Certified and carrying a link to the certificate document
    pub fn has_certificate(&self) -> bool {
        self.certification.certified
            && self
                .certification
                .certificate_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_cut_item() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": "g1",
            "name": "Blue Sapphire",
            "category": "Sapphire",
            "origin": "Sri Lanka",
            "color": "Blue",
            "price": 1200,
            "inStock": true,
            "treatment": {"treated": true, "type": "heated"},
            "certification": {"certified": true, "lab": "GIA", "certificateUrl": "https://example.test/c.pdf"},
            "dimensions": {"length": 8.1, "width": 6.0, "height": 4.2},
            "variant": "cut",
            "caratWeight": 2.1,
            "clarity": "VS1"
        }))
        .unwrap();

        assert_eq!(item.kind(), VariantKind::Cut);
        assert_eq!(item.weight(), 2.1);
        assert_eq!(item.cut().unwrap().clarity, "VS1");
        assert_eq!(item.treatment.kind, "heated");
        assert!(item.has_certificate());
        assert!(!item.has_videos());
    }

    #[test]
    fn test_deserialize_rough_item() {
        let item: CatalogItem = serde_json::from_value(json!({
            "id": "g2",
            "name": "Red Ruby",
            "price": 800,
            "variant": "rough",
            "gramWeight": 5,
            "estimatedCaratYield": 7.5,
            "videos": ["https://example.test/v.mp4"]
        }))
        .unwrap();

        assert_eq!(item.kind(), VariantKind::Rough);
        assert_eq!(item.weight(), 5.0);
        assert_eq!(item.weight_unit(), WeightUnit::Gram);
        assert_eq!(item.estimated_yield(), Some(7.5));
        assert!(item.cut().is_none());
        assert!(item.has_videos());
    }

    #[test]
    fn test_certificate_requires_url() {
        let mut item: CatalogItem = serde_json::from_value(json!({
            "id": "g3", "name": "Spinel", "price": 10, "variant": "cut", "caratWeight": 1.0,
            "certification": {"certified": true, "lab": "GRS"}
        }))
        .unwrap();
        assert!(!item.has_certificate());

        item.certification.certificate_url = Some(String::new());
        assert!(!item.has_certificate());
    }

    #[test]
    fn test_variant_kind_parse() {
        assert_eq!(VariantKind::parse("Cut"), Some(VariantKind::Cut));
        assert_eq!(VariantKind::parse(" rough "), Some(VariantKind::Rough));
        assert_eq!(VariantKind::parse("polished"), None);
    }
}
