use serde::{Deserialize, Serialize};

/// How a package price is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PriceType {
    #[default]
    #[serde(alias = "per person")]
    PerPerson,
    #[serde(alias = "per couple")]
    PerCouple,
    Total,
}

impl PriceType {
    pub fn label(self) -> &'static str {
        match self {
            PriceType::PerPerson => "per person",
            PriceType::PerCouple => "per couple",
            PriceType::Total => "total",
        }
    }
}

/// One day of a package itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
}

/// Immutable catalog entry for a sellable holiday offer.
///
/// Serialized field names follow the browser storage shape (`type`, `roomType`,
/// `priceType`), so persisted selections written by either side stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub price: u32,
    #[serde(default)]
    pub price_type: PriceType,
    /// Whole percent in `[0, 100)`; zero means no discount.
    #[serde(default)]
    pub discount: u8,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    /// Nights.
    pub duration: u32,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<String>,
}

impl Package {
    /// Creates a one-night package with no price, rating, or category.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: String::new(),
            description: String::new(),
            price: 0,
            price_type: PriceType::PerPerson,
            discount: 0,
            rating: 0.0,
            reviews: 0,
            duration: 1,
            kind: String::new(),
            tags: Vec::new(),
            amenities: Vec::new(),
            meals: None,
            transfers: None,
            flights: None,
            room_type: None,
            cancellation: None,
            highlights: Vec::new(),
            itinerary: Vec::new(),
            activities: Vec::new(),
        }
    }

    /// Returns true when `tag` is this package's type or one of its tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.kind == tag || self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Pre-discount price: `round(price / (1 - discount/100))`, or `price` when undiscounted.
    pub fn original_price(&self) -> u32 {
        if self.discount == 0 || self.discount >= 100 {
            return self.price;
        }
        let factor = 1.0 - f64::from(self.discount) / 100.0;
        round_to_u32(f64::from(self.price) / factor)
    }

    /// Amount saved against the pre-discount price.
    pub fn savings(&self) -> u32 {
        self.original_price().saturating_sub(self.price)
    }

    /// Unrounded price per night; used for best-value ranking.
    pub fn price_per_night(&self) -> f64 {
        f64::from(self.price) / f64::from(self.duration.max(1))
    }

    pub fn rounded_price_per_night(&self) -> u32 {
        round_to_u32(self.price_per_night())
    }

    /// Star rating rounded to a whole star in `[1, 5]`.
    pub fn rounded_stars(&self) -> u8 {
        // Clamped first, so the cast cannot truncate.
        self.rating.round().clamp(1.0, 5.0) as u8
    }
}

fn round_to_u32(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let rounded = value.round();
    if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}
