//! Parser for menus published by Studierendenwerk Berlin.
//!
//! Page layout:
//!
//! ```text
//! div#speiseplan
//! └── div.splGroupWrapper          one per category
//!     ├── div.splGroup             category header
//!     └── div.splMeal[data-kennz]  one per dish
//!         ├── span.bold            name
//!         ├── div.text-right       price tiers
//!         └── img.splIcon          traffic light / dietary icons
//! ```
//!
//! Only direct children are followed at each level so embedded content
//! elsewhere in a group is never mistaken for a meal.

mod codes;
mod extract;
mod icons;
mod price;

pub use codes::{lookup as lookup_code, resolve_codes, CodeEntry, CodeKind};
pub use extract::{element_text, extract_fields, Icon, MealFields};
pub use icons::{classify_icons, IconMapping};
pub use price::parse_price;

use super::MenuParser;
use crate::error::MensaError;
use crate::model::Meal;
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div#speiseplan").unwrap());
static GROUP: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.splGroupWrapper").unwrap());
static HEADER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.splGroup").unwrap());
static MEAL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.splMeal").unwrap());

pub struct StwBerlinParser;

impl MenuParser for StwBerlinParser {
    fn provider_name(&self) -> &str {
        "stw_berlin"
    }

    fn parse(&self, html: &str) -> Result<Vec<Meal>, MensaError> {
        parse_menu(html)
    }
}

/// A meal element together with the header text of its group.
#[derive(Debug, Clone)]
pub struct MealBlock<'a> {
    pub category: String,
    pub element: ElementRef<'a>,
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    selector: &'static Selector,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| selector.matches(child))
}

/// Walk the menu container and yield every meal block with its category.
///
/// Fails only when `div#speiseplan` is missing. Groups without a header are
/// skipped along with their meals. The iterator is lazy and single pass.
pub fn meal_blocks(document: &Html) -> Result<impl Iterator<Item = MealBlock<'_>>, MensaError> {
    let container = document
        .select(&CONTAINER)
        .next()
        .ok_or_else(|| MensaError::StructureError("div#speiseplan not found".to_string()))?;

    let blocks = child_elements(container, &GROUP)
        .filter_map(|group| {
            let Some(header) = child_elements(group, &HEADER).next() else {
                warn!("No category name found in group wrapper");
                return None;
            };
            let category = element_text(header);
            Some(child_elements(group, &MEAL).map(move |element| MealBlock {
                category: category.clone(),
                element,
            }))
        })
        .flatten();

    Ok(blocks)
}

/// Turn one meal block into a [`Meal`], or `None` if it has no name.
pub fn assemble_meal(block: MealBlock<'_>) -> Option<Meal> {
    let fields = extract_fields(block.element);
    let Some(name) = fields.name else {
        warn!("Skipping meal without name in category '{}'", block.category);
        return None;
    };

    let pricing = parse_price(&fields.price_text);
    let allergens = resolve_codes(&fields.codes);
    let (nutrition, dietary) = classify_icons(&fields.icons);

    debug!("Parsed meal '{}' ({})", name, block.category);

    Some(Meal {
        category: block.category,
        name,
        pricing,
        nutrition,
        dietary,
        allergens,
    })
}

/// Parse a complete STW Berlin menu page.
pub fn parse_menu(html: &str) -> Result<Vec<Meal>, MensaError> {
    let document = Html::parse_document(html);
    let meals: Vec<Meal> = meal_blocks(&document)?.filter_map(assemble_meal).collect();
    debug!("Parsed {} meals", meals.len());
    Ok(meals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_container() {
        let result = parse_menu("<html><body><div id=\"other\"></div></body></html>");
        assert!(matches!(result, Err(MensaError::StructureError(_))));
    }

    #[test]
    fn test_empty_container() {
        let meals = parse_menu(r#"<div id="speiseplan"></div>"#).unwrap();
        assert!(meals.is_empty());
    }

    #[test]
    fn test_nested_groups_are_ignored() {
        let html = r#"
            <div id="speiseplan">
                <div class="wrapper">
                    <div class="splGroupWrapper">
                        <div class="splGroup">Versteckt</div>
                        <div class="splMeal"><span class="bold">Nicht sichtbar</span></div>
                    </div>
                </div>
                <div class="splGroupWrapper">
                    <div class="splGroup">Suppen</div>
                    <div class="splMeal"><span class="bold">Tomatensuppe</span></div>
                    <div class="box"><div class="splMeal"><span class="bold">Verschachtelt</span></div></div>
                </div>
            </div>"#;
        let document = Html::parse_document(html);
        let blocks: Vec<_> = meal_blocks(&document).unwrap().collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].category, "Suppen");
    }

    #[test]
    fn test_header_must_be_direct_child() {
        let html = r#"
            <div id="speiseplan">
                <div class="splGroupWrapper">
                    <div class="inner"><div class="splGroup">Essen</div></div>
                    <div class="splMeal"><span class="bold">Reis</span></div>
                </div>
            </div>"#;
        let meals = parse_menu(html).unwrap();
        assert!(meals.is_empty());
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(StwBerlinParser.provider_name(), "stw_berlin");
    }
}
