//! Additive and allergen codes as published in the `data-kennz` attribute.

use crate::model::AllergenInfo;
use log::debug;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Additive,
    Allergen,
}

#[derive(Debug)]
pub struct CodeEntry {
    pub code: &'static str,
    /// Short label, e.g. `"Milch"`
    pub name: &'static str,
    /// Full wording shown to readers
    pub description: &'static str,
    pub kind: CodeKind,
}

const fn additive(code: &'static str, name: &'static str, description: &'static str) -> CodeEntry {
    CodeEntry {
        code,
        name,
        description,
        kind: CodeKind::Additive,
    }
}

const fn allergen(code: &'static str, name: &'static str, description: &'static str) -> CodeEntry {
    CodeEntry {
        code,
        name,
        description,
        kind: CodeKind::Allergen,
    }
}

const CODES: &[CodeEntry] = &[
    additive("2", "Schweinefleisch", "Schweinefleisch bzw. mit Gelatine vom Schwein"),
    additive("3", "Alkohol", "Alkohol"),
    additive("4", "Geschmacksverstärker", "Geschmacksverstärker"),
    additive("5", "gewachst", "gewachst"),
    additive("6", "konserviert", "konserviert"),
    additive("7", "Antioxidationsmittel", "Antioxidationsmittel"),
    additive("8", "Farbstoff", "Farbstoff"),
    additive("9", "Phosphat", "Phosphat"),
    additive("10", "geschwärzt", "geschwärzt"),
    additive("12", "Phenylalaninquelle", "enthält eine Phenylalaninquelle"),
    additive("13", "Süßungsmittel", "Süßungsmittel"),
    additive("14", "fein_zerkleinertes_fleisch", "mit zum Teil fein zerkleinertem Fleischanteil"),
    additive("16", "koffeinhaltig", "koffeinhaltig"),
    additive("17", "chininhaltig", "chininhaltig"),
    additive("19", "geschwefelt", "geschwefelt"),
    additive("20", "abführend_wirken", "kann abführend wirken"),
    allergen("21", "Gluten", "Glutenhaltiges Getreide"),
    allergen("21a", "Weizen", "Weizen"),
    allergen("21b", "Roggen", "Roggen"),
    allergen("21c", "Gerste", "Gerste"),
    allergen("21d", "Hafer", "Hafer"),
    allergen("21e", "Dinkel", "Dinkel"),
    allergen("21f", "Kamut", "Kamut"),
    allergen("22", "Krebstiere", "Krebstiere"),
    allergen("23", "Eier", "Eier"),
    allergen("24", "Fisch", "Fisch"),
    allergen("25", "Erdnüsse", "Erdnüsse"),
    allergen("26", "Schalenfrüchte", "Schalenfrüchte"),
    allergen("26a", "Mandeln", "Mandeln"),
    allergen("26b", "Haselnuss", "Haselnuss"),
    allergen("26c", "Walnuss", "Walnuss"),
    allergen("26d", "Kaschunuss", "Kaschunuss"),
    allergen("28", "Soja", "Soja"),
    allergen("29", "Senf", "Senf"),
    allergen("30", "Milch", "Milch und Milchprodukte (einschließlich Laktose)"),
    allergen("31", "Schalenfrüchte", "Schalenfrüchte z.B. Mandeln, Haselnüsse, Walnüsse etc."),
    allergen("32", "Sellerie", "Sellerie"),
    allergen("33", "Senf", "Senf"),
    allergen("34", "Sesam", "Sesam"),
    allergen("35", "Schwefeldioxid", "Schwefeldioxid und Sulfite"),
    allergen("36", "Lupinen", "Lupinen"),
    allergen("37", "Weichtiere", "Weichtiere"),
];

static CODE_TABLE: LazyLock<HashMap<&'static str, &'static CodeEntry>> =
    LazyLock::new(|| CODES.iter().map(|entry| (entry.code, entry)).collect());

pub fn lookup(code: &str) -> Option<&'static CodeEntry> {
    CODE_TABLE.get(code).copied()
}

/// Resolve a comma separated code string like `"21a, 30, 2"`.
///
/// Order and duplicates are kept. Codes missing from the table are reported
/// verbatim and counted as allergens, so nothing the publisher lists is lost.
pub fn resolve_codes(raw: &str) -> AllergenInfo {
    let mut info = AllergenInfo::default();

    for code in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        match lookup(code) {
            Some(entry) => {
                info.readable.push(entry.description.to_string());
                match entry.kind {
                    CodeKind::Additive => info.additives.push(entry.name.to_string()),
                    CodeKind::Allergen => info.allergens.push(entry.name.to_string()),
                }
            }
            None => {
                debug!("Unknown allergen/additive code '{}'", code);
                info.readable.push(code.to_string());
                info.allergens.push(code.to_string());
            }
        }
        info.codes.push(code.to_string());
    }

    info
}
