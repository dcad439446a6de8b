use crate::model::Pricing;
use log::warn;

fn is_noise(c: char) -> bool {
    c == '€' || c.is_whitespace()
}

/// Parse a price string like `"3,50/4,20/5,00 €"` into student, employee
/// and guest tiers.
///
/// Empty segments are dropped, then the rest are assigned by position.
/// Anything that does not parse as a finite number keeps the raw text for
/// display and leaves every tier unset.
pub fn parse_price(price_text: &str) -> Pricing {
    if price_text.trim().is_empty() {
        return Pricing::unavailable("");
    }

    let cleaned: String = price_text.chars().filter(|c| !is_noise(*c)).collect();
    if cleaned.is_empty() {
        return Pricing::unavailable(price_text);
    }

    let mut tiers = [None; 3];
    let segments = cleaned
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(tiers.len());

    for (tier, segment) in tiers.iter_mut().zip(segments) {
        match segment.replace(',', ".").parse::<f64>() {
            Ok(value) if value.is_finite() => *tier = Some(value),
            Ok(value) => {
                warn!("Failed to parse price '{}': {} is not a price", price_text, value);
                return Pricing::raw_only(price_text);
            }
            Err(e) => {
                warn!("Failed to parse price '{}': {}", price_text, e);
                return Pricing::raw_only(price_text);
            }
        }
    }

    let [student, employee, guest] = tiers;
    Pricing {
        raw: price_text.to_string(),
        student,
        employee,
        guest,
        is_available: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tiers() {
        let pricing = parse_price("3,50/4,20/5,00 €");
        assert_eq!(pricing.student, Some(3.50));
        assert_eq!(pricing.employee, Some(4.20));
        assert_eq!(pricing.guest, Some(5.00));
        assert!(pricing.is_available);
        assert_eq!(pricing.raw, "3,50/4,20/5,00 €");
    }

    #[test]
    fn test_spaced_segments() {
        let pricing = parse_price("€ 1,95 / 3,45 / 4,10");
        assert_eq!(pricing.student, Some(1.95));
        assert_eq!(pricing.employee, Some(3.45));
        assert_eq!(pricing.guest, Some(4.10));
    }

    #[test]
    fn test_empty() {
        let pricing = parse_price("");
        assert!(!pricing.is_available);
        assert_eq!(pricing.raw, "");
        assert_eq!(pricing.student, None);
        assert_eq!(pricing.employee, None);
        assert_eq!(pricing.guest, None);
    }

    #[test]
    fn test_only_currency_sign() {
        let pricing = parse_price(" € ");
        assert!(!pricing.is_available);
        assert_eq!(pricing.student, None);
    }

    #[test]
    fn test_unparseable_keeps_raw() {
        let pricing = parse_price("abc");
        assert!(pricing.is_available);
        assert_eq!(pricing.raw, "abc");
        assert_eq!(pricing.student, None);
        assert_eq!(pricing.employee, None);
        assert_eq!(pricing.guest, None);
    }

    #[test]
    fn test_partial_failure_drops_all_tiers() {
        let pricing = parse_price("2,50/nach Gewicht");
        assert!(pricing.is_available);
        assert_eq!(pricing.student, None);
        assert_eq!(pricing.employee, None);
    }

    #[test]
    fn test_fewer_tiers_are_not_zero() {
        let pricing = parse_price("1,20 €");
        assert_eq!(pricing.student, Some(1.20));
        assert_eq!(pricing.employee, None);
        assert_eq!(pricing.guest, None);
    }

    #[test]
    fn test_extra_segments_ignored() {
        let pricing = parse_price("1/2/3/oops");
        assert_eq!(pricing.student, Some(1.0));
        assert_eq!(pricing.employee, Some(2.0));
        assert_eq!(pricing.guest, Some(3.0));
        assert!(pricing.is_available);
    }

    #[test]
    fn test_tiers_keep_position_not_value_order() {
        let pricing = parse_price("5,00/4,00/3,00");
        assert_eq!(pricing.student, Some(5.0));
        assert_eq!(pricing.guest, Some(3.0));
    }

    #[test]
    fn test_empty_segments_do_not_take_a_tier() {
        let pricing = parse_price("1,00//2,00 €");
        assert_eq!(pricing.student, Some(1.0));
        assert_eq!(pricing.employee, Some(2.0));
        assert_eq!(pricing.guest, None);
        assert!(pricing.is_available);
    }

    #[test]
    fn test_only_separator() {
        let pricing = parse_price("/");
        assert!(pricing.is_available);
        assert_eq!(pricing.raw, "/");
        assert_eq!(pricing.student, None);
        assert_eq!(pricing.employee, None);
        assert_eq!(pricing.guest, None);
    }

    #[test]
    fn test_non_finite_numbers_keep_raw() {
        for text in ["NaN", "inf", "1,50/-inf/3,00"] {
            let pricing = parse_price(text);
            assert!(pricing.is_available, "{text}");
            assert_eq!(pricing.raw, text);
            assert_eq!(pricing.student, None, "{text}");
            assert_eq!(pricing.employee, None, "{text}");
            assert_eq!(pricing.guest, None, "{text}");
        }
    }
}
