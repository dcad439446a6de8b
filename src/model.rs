use serde::{Deserialize, Serialize};

/// Price tiers parsed from a raw price string such as `"3,50/4,20/5,00 €"`.
///
/// A tier is only ever set from its positional segment of `raw`; tiers that
/// could not be read stay `None` and are never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pricing {
    pub raw: String,
    pub student: Option<f64>,
    pub employee: Option<f64>,
    pub guest: Option<f64>,
    /// `false` only when the price text was empty after cleaning
    pub is_available: bool,
}

impl Pricing {
    /// Pricing for a meal without any price text.
    pub fn unavailable(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            ..Default::default()
        }
    }

    /// Pricing whose text could not be split into tiers; shown as-is.
    pub fn raw_only(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            is_available: true,
            ..Default::default()
        }
    }
}

/// Nutrition traffic light, at most one per meal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub traffic_light: Option<String>,
    pub traffic_light_description: Option<String>,
}

/// Dietary labels in icon order. `vegan` implies `vegetarian`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DietaryInfo {
    pub labels: Vec<String>,
    pub vegetarian: bool,
    pub vegan: bool,
}

/// Additive and allergen information resolved from the publisher's codes.
///
/// Every entry in `codes` has exactly one entry in `readable` and exactly one
/// in either `additives` or `allergens`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllergenInfo {
    pub codes: Vec<String>,
    pub readable: Vec<String>,
    pub additives: Vec<String>,
    pub allergens: Vec<String>,
}

/// A single dish from a menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub category: String,
    pub name: String,
    pub pricing: Pricing,
    pub nutrition: NutritionInfo,
    pub dietary: DietaryInfo,
    pub allergens: AllergenInfo,
}
