use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.bold").unwrap());
static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.text-right").unwrap());
static ICON: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img.splIcon").unwrap());

const CODES_ATTR: &str = "data-kennz";

/// An `<img class="splIcon">` inside a meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub src: String,
    pub alt: String,
}

/// Raw, not yet interpreted fields of one meal block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealFields {
    /// `None` when the block has no usable name
    pub name: Option<String>,
    pub price_text: String,
    pub codes: String,
    pub icons: Vec<Icon>,
}

/// Text of an element with each text node trimmed and blanks dropped.
pub fn element_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn extract_fields(meal: ElementRef) -> MealFields {
    let name = meal
        .select(&NAME)
        .next()
        .map(element_text)
        .filter(|name| !name.is_empty());

    let price_text = meal
        .select(&PRICE)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let codes = meal
        .value()
        .attr(CODES_ATTR)
        .unwrap_or_default()
        .to_string();

    let icons = meal
        .select(&ICON)
        .map(|img| Icon {
            src: img.value().attr("src").unwrap_or_default().to_string(),
            alt: img.value().attr("alt").unwrap_or_default().to_string(),
        })
        .collect();

    MealFields {
        name,
        price_text,
        codes,
        icons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_meal(html: &str) -> MealFields {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse("div.splMeal").unwrap();
        let meal = fragment.select(&selector).next().unwrap();
        extract_fields(meal)
    }

    #[test]
    fn test_all_fields() {
        let fields = first_meal(
            r#"<div class="splMeal" data-kennz="21a,30">
                <img class="splIcon" src="/icons/15.png" alt="vegan">
                <span class="bold"> Linsencurry </span>
                <div class="col-md-3 text-right"> 2,10/3,90/4,50 € </div>
                <img class="splIcon" src="/icons/ampel_gruen_i.png" alt="grün">
            </div>"#,
        );
        assert_eq!(fields.name.as_deref(), Some("Linsencurry"));
        assert_eq!(fields.price_text, "2,10/3,90/4,50 €");
        assert_eq!(fields.codes, "21a,30");
        assert_eq!(
            fields.icons,
            vec![
                Icon {
                    src: "/icons/15.png".to_string(),
                    alt: "vegan".to_string()
                },
                Icon {
                    src: "/icons/ampel_gruen_i.png".to_string(),
                    alt: "grün".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let fields = first_meal(r#"<div class="splMeal"><span class="bold">Brot</span></div>"#);
        assert_eq!(fields.name.as_deref(), Some("Brot"));
        assert_eq!(fields.price_text, "");
        assert_eq!(fields.codes, "");
        assert!(fields.icons.is_empty());
    }

    #[test]
    fn test_missing_or_blank_name() {
        let fields = first_meal(r#"<div class="splMeal"><div class="text-right">1,00</div></div>"#);
        assert_eq!(fields.name, None);

        let fields = first_meal(r#"<div class="splMeal"><span class="bold">  </span></div>"#);
        assert_eq!(fields.name, None);
    }

    #[test]
    fn test_first_name_label_wins() {
        let fields = first_meal(
            r#"<div class="splMeal"><span class="bold">Suppe</span><span class="bold">Extra</span></div>"#,
        );
        assert_eq!(fields.name.as_deref(), Some("Suppe"));
    }
}
