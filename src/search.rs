//! # Destination search
//!
//! The one shared filter over the catalog. Every endpoint that narrows the
//! destination list goes through [`filter_destinations`]; storage backends
//! only hand back the full catalog.
//!
//! All five criteria are conjunctive and applied in a fixed order: free-text
//! query, category, budget, duration, travel style. An absent or empty
//! criterion is a pass-through. Budget and duration strings come straight
//! from the frontend's dropdowns ("₹10,000-25,000", "2+ weeks") and parsing
//! fails open: an unreadable value becomes a permissive upper bound rather
//! than an error or an empty result.

use regex::Regex;
use serde::Deserialize;

use crate::models::Destination;

/// Upper bound used when a budget string yields no number at all.
pub const BUDGET_FALLBACK: i64 = 100_000;
/// Upper bound used when a duration string yields no number at all.
pub const DURATION_FALLBACK: i64 = 30;

/// Search criteria, all optional. Mirrors the frontend search form.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub query: Option<String>,
    pub category: Option<String>,
    pub budget: Option<String>,
    pub duration: Option<String>,
    pub travel_style: Option<String>,
}

impl SearchParams {
    pub fn new(query: Option<String>, category: Option<String>) -> Self {
        Self {
            query,
            category,
            ..Self::default()
        }
    }
}

/// Returns the destinations satisfying every supplied criterion, in the same
/// relative order as `catalog`. An empty result is a valid result.
pub fn filter_destinations(catalog: Vec<Destination>, params: &SearchParams) -> Vec<Destination> {
    let query = present(&params.query).map(str::to_lowercase);
    let category = present(&params.category);
    let max_budget = present(&params.budget).map(budget_upper_bound);
    let max_days = present(&params.duration).map(duration_upper_bound);
    let style = present(&params.travel_style).map(str::to_lowercase);

    catalog
        .into_iter()
        .filter(|dest| query.as_deref().is_none_or(|q| matches_query(dest, q)))
        .filter(|dest| category.is_none_or(|c| dest.category == c))
        .filter(|dest| max_budget.is_none_or(|max| dest.price_per_person <= max))
        .filter(|dest| max_days.is_none_or(|max| dest.recommended_days <= max))
        .filter(|dest| style.as_deref().is_none_or(|s| matches_style(dest, s)))
        .collect()
}

// Empty strings from the form mean "no preference", same as absent.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn matches_query(dest: &Destination, query: &str) -> bool {
    dest.name.to_lowercase().contains(query)
        || dest.description.to_lowercase().contains(query)
        || dest.location.to_lowercase().contains(query)
}

fn matches_style(dest: &Destination, style: &str) -> bool {
    dest.category.to_lowercase().contains(style)
        || dest
            .features
            .iter()
            .any(|feature| feature.to_lowercase().contains(style))
        || dest.description.to_lowercase().contains(style)
}

/// Maximum price a destination may have to satisfy a budget string.
///
/// Everything but digits and hyphens is stripped first, so "₹10,000-25,000"
/// becomes "10000-25000". A range takes its second component, falling back to
/// twice the first; a plain number is taken as-is; anything unreadable falls
/// back to [`BUDGET_FALLBACK`].
pub fn budget_upper_bound(raw: &str) -> i64 {
    let strip = Regex::new(r"[^\d-]").unwrap();
    let cleaned = strip.replace_all(raw, "").into_owned();

    if cleaned.contains('-') {
        let mut parts = cleaned.split('-');
        let low: Option<i64> = parts.next().and_then(|p| p.parse().ok());
        let high: Option<i64> = parts.next().and_then(|p| p.parse().ok());

        high.or(low.map(|l| l * 2)).unwrap_or(BUDGET_FALLBACK)
    } else {
        cleaned.parse().unwrap_or(BUDGET_FALLBACK)
    }
}

/// Maximum recommended days a destination may have to satisfy a duration
/// string such as "3-5 days", "1 week", or "2+ weeks".
///
/// A range takes its second component, falling back to the first plus two;
/// "week" strings map to 7 days, or 30 for "2+"; otherwise the leading
/// integer, falling back to [`DURATION_FALLBACK`].
pub fn duration_upper_bound(raw: &str) -> i64 {
    if raw.contains('-') {
        let mut parts = raw.split('-');
        let low = parts.next().and_then(leading_int);
        let high = parts.next().and_then(leading_int);

        high.or(low.map(|l| l + 2)).unwrap_or(DURATION_FALLBACK)
    } else if raw.contains("week") {
        if raw.contains("2+") { 30 } else { 7 }
    } else {
        leading_int(raw).unwrap_or(DURATION_FALLBACK)
    }
}

// Leading integer of a string, like JS parseInt: "5 days" -> 5.
fn leading_int(s: &str) -> Option<i64> {
    let trimmed = s.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_destinations;
    use chrono::Utc;

    fn dest(id: &str, price: i64, days: i64, category: &str) -> Destination {
        Destination {
            id: id.to_string(),
            name: format!("Place {id}"),
            description: "somewhere green".to_string(),
            location: "Jharkhand".to_string(),
            image_url: String::new(),
            rating: 40,
            price_per_person: price,
            recommended_days: days,
            category: category.to_string(),
            features: vec!["nature".to_string()],
            created_at: Utc::now(),
        }
    }

    fn ids(results: &[Destination]) -> Vec<&str> {
        results.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn no_criteria_returns_catalog_unchanged() {
        let catalog = seed_destinations();
        let result = filter_destinations(catalog.clone(), &SearchParams::default());
        assert_eq!(result, catalog);
    }

    #[test]
    fn empty_strings_are_pass_through() {
        let catalog = seed_destinations();
        let params = SearchParams {
            query: Some(String::new()),
            category: Some(String::new()),
            budget: Some(String::new()),
            duration: Some(String::new()),
            travel_style: Some(String::new()),
        };
        assert_eq!(filter_destinations(catalog.clone(), &params), catalog);
    }

    #[test]
    fn query_matches_name_description_or_location() {
        let catalog = seed_destinations();
        let params = SearchParams {
            query: Some("falls".to_string()),
            ..SearchParams::default()
        };
        let result = filter_destinations(catalog, &params);
        assert_eq!(ids(&result), vec!["dest-2", "dest-5"]);

        // "taimara" only appears in dest-2's location
        let by_location = SearchParams {
            query: Some("TAIMARA".to_string()),
            ..SearchParams::default()
        };
        let result = filter_destinations(seed_destinations(), &by_location);
        assert_eq!(ids(&result), vec!["dest-2"]);
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let catalog = seed_destinations();
        let params = SearchParams {
            category: Some("waterfall".to_string()),
            ..SearchParams::default()
        };
        let result = filter_destinations(catalog, &params);
        assert_eq!(ids(&result), vec!["dest-2", "dest-5"]);

        let wrong_case = SearchParams {
            category: Some("Waterfall".to_string()),
            ..SearchParams::default()
        };
        assert!(filter_destinations(seed_destinations(), &wrong_case).is_empty());
    }

    #[test]
    fn budget_range_takes_second_component() {
        assert_eq!(budget_upper_bound("₹10,000-25,000"), 25_000);
        assert_eq!(budget_upper_bound("₹5,000-10,000"), 10_000);
    }

    #[test]
    fn budget_without_hyphen_takes_whole_number() {
        assert_eq!(budget_upper_bound("₹50,000+"), 50_000);
        assert_eq!(budget_upper_bound("8000"), 8_000);
    }

    #[test]
    fn budget_fail_open_fallbacks() {
        // dangling range: twice the first component
        assert_eq!(budget_upper_bound("₹25,000-"), 50_000);
        // nothing parseable at all
        assert_eq!(budget_upper_bound("whatever you like"), BUDGET_FALLBACK);
        assert_eq!(budget_upper_bound("-"), BUDGET_FALLBACK);
    }

    #[test]
    fn budget_bound_is_inclusive() {
        let catalog = vec![dest("at", 25_000, 2, "city"), dest("above", 25_001, 2, "city")];
        let params = SearchParams {
            budget: Some("₹10,000-25,000".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(ids(&filter_destinations(catalog, &params)), vec!["at"]);
    }

    #[test]
    fn permissive_budget_keeps_whole_catalog() {
        let catalog = seed_destinations();
        let params = SearchParams {
            budget: Some("₹50,000+".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(filter_destinations(catalog.clone(), &params).len(), catalog.len());
    }

    #[test]
    fn duration_parsing() {
        assert_eq!(duration_upper_bound("3-5 days"), 5);
        assert_eq!(duration_upper_bound("1 week"), 7);
        assert_eq!(duration_upper_bound("2+ weeks"), 30);
        assert_eq!(duration_upper_bound("10"), 10);
        // dangling range: first component plus two
        assert_eq!(duration_upper_bound("3- days"), 5);
        assert_eq!(duration_upper_bound("whenever"), DURATION_FALLBACK);
    }

    #[test]
    fn duration_bound_is_inclusive() {
        let catalog = vec![dest("at", 5_000, 5, "city"), dest("above", 5_000, 6, "city")];
        let params = SearchParams {
            duration: Some("3-5 days".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(ids(&filter_destinations(catalog, &params)), vec!["at"]);
    }

    #[test]
    fn travel_style_matches_category_features_or_description() {
        let catalog = seed_destinations();
        let params = SearchParams {
            travel_style: Some("pilgrimage".to_string()),
            ..SearchParams::default()
        };
        // dest-6 and dest-7 both carry a pilgrimage feature
        let result = filter_destinations(catalog, &params);
        assert_eq!(ids(&result), vec!["dest-6", "dest-7"]);
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let catalog = seed_destinations();
        let params = SearchParams {
            category: Some("waterfall".to_string()),
            budget: Some("₹5,000-10,000".to_string()),
            ..SearchParams::default()
        };
        let result = filter_destinations(catalog, &params);
        assert!(result
            .iter()
            .all(|d| d.category == "waterfall" && d.price_per_person <= 10_000));
        assert_eq!(ids(&result), vec!["dest-2", "dest-5"]);
    }

    #[test]
    fn output_preserves_catalog_order() {
        // cheapest first would be dest-5, dest-2; catalog order must win
        let catalog = seed_destinations();
        let params = SearchParams {
            budget: Some("₹1,000-5,500".to_string()),
            ..SearchParams::default()
        };
        assert_eq!(ids(&filter_destinations(catalog, &params)), vec!["dest-2", "dest-5"]);
    }
}
