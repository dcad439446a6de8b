//! Menu icons: nutrition traffic lights and dietary markers.

use super::extract::Icon;
use crate::model::{DietaryInfo, NutritionInfo};
use log::debug;
use std::collections::HashMap;
use std::sync::LazyLock;

const VEGETARIAN: &str = "Vegetarisch";
const VEGAN: &str = "Vegan";

#[derive(Debug)]
pub struct IconMapping {
    /// Substring of the icon source for traffic lights, file name for dietary icons
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn mapping(key: &'static str, name: &'static str, description: &'static str) -> IconMapping {
    IconMapping {
        key,
        name,
        description,
    }
}

// Checked in this order; the first key found in the source wins for an icon.
const TRAFFIC_LIGHTS: &[IconMapping] = &[
    mapping("ampel_gruen", "Grün", "Die beste Wahl – je öfter, desto besser"),
    mapping("ampel_gelb", "Gelb", "Eine gute Wahl – immer mal wieder"),
    mapping("ampel_rot", "Rot", "Eher selten – am besten mit Grün kombinieren"),
];

const DIETARY_ICONS: &[IconMapping] = &[
    mapping("1.png", VEGETARIAN, "Gerichte werden ohne Fisch- und Fleischzutaten zubereitet"),
    mapping("15.png", VEGAN, "Gericht ist aus ausschließlich pflanzlichen Rohstoffen zubereitet"),
    mapping("18.png", "Bio", "Biologisch erzeugte Lebensmittel"),
    mapping("38.png", "Klimaessen", "Klimafreundliches Gericht"),
    mapping("41.png", "Regionales Gericht", "Regionale Zutaten verwendet"),
    mapping("43.png", "Fair Trade", "Fair-Trade-Zutaten verwendet"),
];

static DIETARY_TABLE: LazyLock<HashMap<&'static str, &'static IconMapping>> =
    LazyLock::new(|| DIETARY_ICONS.iter().map(|icon| (icon.key, icon)).collect());

fn match_traffic_light(src: &str) -> Option<&'static IconMapping> {
    TRAFFIC_LIGHTS.iter().find(|light| src.contains(light.key))
}

fn match_dietary(src: &str) -> Option<&'static IconMapping> {
    let file_name = src.rsplit('/').next().unwrap_or(src);
    DIETARY_TABLE.get(file_name).copied()
}

/// Classify a meal's icons in document order.
///
/// When several traffic-light icons are present the last one is kept.
/// Traffic-light icons never count as dietary labels.
pub fn classify_icons(icons: &[Icon]) -> (NutritionInfo, DietaryInfo) {
    let mut nutrition = NutritionInfo::default();
    let mut dietary = DietaryInfo::default();

    for icon in icons.iter().filter(|icon| !icon.src.is_empty()) {
        if let Some(light) = match_traffic_light(&icon.src) {
            nutrition.traffic_light = Some(light.name.to_string());
            nutrition.traffic_light_description = Some(light.description.to_string());
            continue;
        }

        let Some(mapping) = match_dietary(&icon.src) else {
            debug!("Ignoring unknown icon '{}' ({})", icon.src, icon.alt);
            continue;
        };

        dietary.labels.push(mapping.name.to_string());
        match mapping.name {
            VEGETARIAN => dietary.vegetarian = true,
            VEGAN => {
                dietary.vegan = true;
                dietary.vegetarian = true;
            }
            _ => {}
        }
    }

    (nutrition, dietary)
}
