//! Plain-text rendering of parsed menus.

use crate::error::MensaError;
use crate::model::{Meal, Pricing};
use crate::registry::SiteRegistry;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    #[default]
    Student,
    Employee,
    Guest,
}

impl PriceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Student => "student",
            PriceTier::Employee => "employee",
            PriceTier::Guest => "guest",
        }
    }

    fn select(&self, pricing: &Pricing) -> Option<f64> {
        match self {
            PriceTier::Student => pricing.student,
            PriceTier::Employee => pricing.employee,
            PriceTier::Guest => pricing.guest,
        }
    }
}

impl FromStr for PriceTier {
    type Err = MensaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(PriceTier::Student),
            "employee" => Ok(PriceTier::Employee),
            "guest" => Ok(PriceTier::Guest),
            _ => Err(MensaError::InvalidPriceTier(s.to_string())),
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price for one tier, falling back to the raw text when the tier is unknown.
pub fn format_price(pricing: &Pricing, tier: PriceTier) -> String {
    if !pricing.is_available {
        return String::new();
    }
    match tier.select(pricing) {
        Some(value) => format!("€{value:.2}"),
        None => pricing.raw.clone(),
    }
}

/// Which optional columns to show in the meal table
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    pub allergens: bool,
    pub prices: bool,
    pub nutrition: bool,
    pub dietary: bool,
    pub price_tier: PriceTier,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            allergens: true,
            prices: true,
            nutrition: true,
            dietary: true,
            price_tier: PriceTier::default(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

fn format_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    headers: &[(&str, Align)],
    widths: &[usize],
) -> String {
    let line = cells
        .zip(headers.iter().zip(widths))
        .map(|(cell, ((_, align), &width))| match align {
            Align::Left => format!("{cell:<width$}"),
            Align::Right => format!("{cell:>width$}"),
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

fn render_table(headers: &[(&str, Align)], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|(h, _)| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_row(headers.iter().map(|(h, _)| *h), headers, &widths);
    out.push('\n');
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row.iter().map(String::as_str), headers, &widths));
        out.push('\n');
    }
    out
}

pub fn render_meal_table(meals: &[Meal], options: &TableOptions) -> String {
    let mut headers = vec![("Category", Align::Left), ("Dish", Align::Left)];
    if options.dietary {
        headers.push(("Dietary", Align::Left));
    }
    if options.nutrition {
        headers.push(("Nutrition", Align::Left));
    }
    if options.allergens {
        headers.push(("Allergens", Align::Left));
    }
    if options.prices {
        headers.push(("Price", Align::Right));
    }

    let rows: Vec<Vec<String>> = meals
        .iter()
        .map(|meal| {
            let mut columns = vec![meal.category.clone(), meal.name.clone()];
            if options.dietary {
                columns.push(meal.dietary.labels.join(", "));
            }
            if options.nutrition {
                columns.push(meal.nutrition.traffic_light.clone().unwrap_or_default());
            }
            if options.allergens {
                columns.push(meal.allergens.codes.join(", "));
            }
            if options.prices {
                columns.push(format_price(&meal.pricing, options.price_tier));
            }
            columns
        })
        .collect();

    render_table(&headers, &rows)
}

pub fn render_site_list(registry: &SiteRegistry) -> String {
    let headers = [
        ("City", Align::Left),
        ("ID", Align::Left),
        ("Mensa", Align::Left),
        ("URL", Align::Left),
    ];
    let rows: Vec<Vec<String>> = registry
        .sites()
        .map(|site| {
            vec![
                site.city.clone().unwrap_or_default(),
                site.key.clone(),
                site.name.clone(),
                site.url.clone(),
            ]
        })
        .collect();

    render_table(&headers, &rows)
}

/// Counts over a parsed menu
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MenuSummary {
    pub total: usize,
    /// Sorted, without duplicates
    pub categories: Vec<String>,
    pub vegetarian: usize,
    pub vegan: usize,
    /// Traffic light name and count, in order of first appearance
    pub traffic_lights: Vec<(String, usize)>,
}

impl MenuSummary {
    pub fn from_meals(meals: &[Meal]) -> Self {
        let categories: BTreeSet<&str> = meals.iter().map(|m| m.category.as_str()).collect();

        let mut traffic_lights: Vec<(String, usize)> = Vec::new();
        for meal in meals {
            let light = meal.nutrition.traffic_light.as_deref().unwrap_or("Unknown");
            match traffic_lights.iter_mut().find(|(name, _)| name == light) {
                Some((_, count)) => *count += 1,
                None => traffic_lights.push((light.to_string(), 1)),
            }
        }

        Self {
            total: meals.len(),
            categories: categories.into_iter().map(String::from).collect(),
            vegetarian: meals.iter().filter(|m| m.dietary.vegetarian).count(),
            vegan: meals.iter().filter(|m| m.dietary.vegan).count(),
            traffic_lights,
        }
    }
}

impl fmt::Display for MenuSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary Statistics:")?;
        writeln!(f, "• Total meals: {}", self.total)?;
        writeln!(f, "• Categories: {}", self.categories.join(", "))?;
        writeln!(f, "• Vegetarian options: {}", self.vegetarian)?;
        writeln!(f, "• Vegan options: {}", self.vegan)?;
        if !self.traffic_lights.is_empty() {
            writeln!(f, "• Nutrition distribution:")?;
            for (light, count) in &self.traffic_lights {
                writeln!(f, "  - {light}: {count}")?;
            }
        }
        Ok(())
    }
}
