//! Canonical search filter and its normalization rules.
//!
//! Raw query parameters are a public-facing surface, so normalization never
//! fails: unrecognized or malformed values degrade to defaults instead of
//! producing an error.

use std::cmp::Ordering;

use crate::domain::advocate::Advocate;
use crate::search;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 50;
/// Cap on effective specialty tokens; excess tokens are silently dropped
/// to bound query cost.
pub const MAX_SPECIALTIES: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Name,
    Experience,
}

impl SortOrder {
    /// Accepts exactly the token `experience`; anything else selects the
    /// name sort.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("experience") => SortOrder::Experience,
            _ => SortOrder::Name,
        }
    }

    /// Total order used by both backends: name sorts by
    /// `(last_name, first_name)` ascending, experience sorts by years
    /// descending with last name as the tie-break. Byte-wise comparison
    /// matches the database's binary collation.
    pub fn compare(&self, a: &Advocate, b: &Advocate) -> Ordering {
        match self {
            SortOrder::Name => a
                .last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name)),
            SortOrder::Experience => b
                .years_of_experience
                .cmp(&a.years_of_experience)
                .then_with(|| a.last_name.cmp(&b.last_name)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdvocateFilter {
    /// Normalized free-text term; empty means no text filter.
    pub q: String,
    /// Exact-match city; `None` means no constraint.
    pub city: Option<String>,
    /// A record must contain every listed specialty.
    pub specialties: Vec<String>,
    /// Minimum years of experience; `0` means no constraint.
    pub min_experience: i32,
    pub sort: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl Default for AdvocateFilter {
    fn default() -> Self {
        Self {
            q: String::new(),
            city: None,
            specialties: Vec::new(),
            min_experience: 0,
            sort: SortOrder::Name,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Parse a number, accepting any finite non-negative value and degrading
/// to the fallback otherwise.
fn parse_non_negative(value: Option<&str>, fallback: f64) -> f64 {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n >= 0.0)
        .unwrap_or(fallback)
}

fn parse_specialties(value: Option<&str>) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .take(MAX_SPECIALTIES)
            .map(str::to_string)
            .collect(),
    }
}

impl AdvocateFilter {
    /// Build a canonical filter from raw query parameter values. Never
    /// fails; see the module docs for the degradation policy.
    pub fn from_params(
        q: Option<&str>,
        city: Option<&str>,
        specialties: Option<&str>,
        min_experience: Option<&str>,
        sort: Option<&str>,
        page: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        let city = city
            .map(str::to_string)
            .filter(|c| !c.is_empty() && c != "all");

        // Fractional thresholds round up: for integer years,
        // `y >= 2.5` holds exactly when `y >= 3`.
        let min_experience = parse_non_negative(min_experience, 0.0).ceil() as i32;
        let page = (parse_non_negative(page, 1.0) as usize).max(1);
        let page_size =
            (parse_non_negative(page_size, DEFAULT_PAGE_SIZE as f64) as usize).clamp(1, MAX_PAGE_SIZE);

        Self {
            q: q.map(search::normalize).unwrap_or_default(),
            city,
            specialties: parse_specialties(specialties),
            min_experience,
            sort: SortOrder::parse(sort),
            page,
            page_size,
        }
    }

    /// In-memory predicate. All clauses combine conjunctively; a clause
    /// left at its default matches every record.
    pub fn matches(&self, advocate: &Advocate) -> bool {
        if !self.q.is_empty() && !advocate.search_text().contains(&self.q) {
            return false;
        }

        if let Some(city) = &self.city
            && advocate.city != *city
        {
            return false;
        }

        if !self
            .specialties
            .iter()
            .all(|wanted| advocate.specialties.iter().any(|s| s == wanted))
        {
            return false;
        }

        advocate.years_of_experience >= self.min_experience
    }

    /// Saturates instead of overflowing so an absurd page number degrades
    /// to an empty page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advocate(city: &str, specialties: &[&str], years: i32) -> Advocate {
        Advocate {
            id: None,
            first_name: "Test".to_string(),
            last_name: "Person".to_string(),
            city: city.to_string(),
            degree: "MD".to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            years_of_experience: years,
            phone_number: 5550000000,
        }
    }

    #[test]
    fn defaults_when_everything_is_absent() {
        let filter = AdvocateFilter::from_params(None, None, None, None, None, None, None);
        assert_eq!(filter, AdvocateFilter::default());
    }

    #[test]
    fn query_is_normalized() {
        let filter =
            AdvocateFilter::from_params(Some("  José "), None, None, None, None, None, None);
        assert_eq!(filter.q, "jose");
    }

    #[test]
    fn city_all_and_empty_mean_no_constraint() {
        let all = AdvocateFilter::from_params(None, Some("all"), None, None, None, None, None);
        assert_eq!(all.city, None);
        let empty = AdvocateFilter::from_params(None, Some(""), None, None, None, None, None);
        assert_eq!(empty.city, None);
        let boston =
            AdvocateFilter::from_params(None, Some("Boston"), None, None, None, None, None);
        assert_eq!(boston.city.as_deref(), Some("Boston"));
    }

    #[test]
    fn specialties_are_split_trimmed_and_capped() {
        let filter = AdvocateFilter::from_params(
            None,
            None,
            Some(" Anxiety , ,Trauma Support,"),
            None,
            None,
            None,
            None,
        );
        assert_eq!(filter.specialties, vec!["Anxiety", "Trauma Support"]);

        let many = (0..12).map(|i| format!("s{i}")).collect::<Vec<_>>().join(",");
        let capped =
            AdvocateFilter::from_params(None, None, Some(&many), None, None, None, None);
        assert_eq!(capped.specialties.len(), MAX_SPECIALTIES);
        assert_eq!(capped.specialties[7], "s7");
    }

    #[test]
    fn malformed_numbers_degrade_to_defaults() {
        let filter = AdvocateFilter::from_params(
            None,
            None,
            None,
            Some("abc"),
            None,
            Some("-3"),
            Some("NaN"),
        );
        assert_eq!(filter.min_experience, 0);
        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_and_page_size_are_clamped() {
        let filter = AdvocateFilter::from_params(
            None,
            None,
            None,
            None,
            None,
            Some("0"),
            Some("1000"),
        );
        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, MAX_PAGE_SIZE);

        let small =
            AdvocateFilter::from_params(None, None, None, None, None, None, Some("0"));
        assert_eq!(small.page_size, 1);
    }

    #[test]
    fn fractional_min_experience_rounds_up() {
        let filter =
            AdvocateFilter::from_params(None, None, None, Some("2.5"), None, None, None);
        assert_eq!(filter.min_experience, 3);
    }

    #[test]
    fn sort_accepts_exactly_the_experience_token() {
        assert_eq!(SortOrder::parse(Some("experience")), SortOrder::Experience);
        assert_eq!(SortOrder::parse(Some("Experience")), SortOrder::Name);
        assert_eq!(SortOrder::parse(Some("anything")), SortOrder::Name);
        assert_eq!(SortOrder::parse(None), SortOrder::Name);
    }

    #[test]
    fn specialty_containment_requires_every_token() {
        let filter = AdvocateFilter {
            specialties: vec!["Anxiety".to_string(), "Trauma Support".to_string()],
            ..AdvocateFilter::default()
        };
        assert!(filter.matches(&advocate("Boston", &["Trauma Support", "Anxiety"], 5)));
        assert!(!filter.matches(&advocate("Boston", &["Anxiety"], 5)));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = AdvocateFilter::default();
        assert!(filter.matches(&advocate("Anywhere", &[], 0)));
    }

    #[test]
    fn min_experience_is_inclusive() {
        let filter = AdvocateFilter {
            min_experience: 5,
            ..AdvocateFilter::default()
        };
        assert!(filter.matches(&advocate("Boston", &[], 5)));
        assert!(!filter.matches(&advocate("Boston", &[], 4)));
    }

    #[test]
    fn text_filter_reaches_specialties_and_experience() {
        let filter = AdvocateFilter {
            q: "trauma".to_string(),
            ..AdvocateFilter::default()
        };
        assert!(filter.matches(&advocate("Boston", &["Trauma Support"], 5)));

        let years = AdvocateFilter {
            q: "17".to_string(),
            ..AdvocateFilter::default()
        };
        assert!(years.matches(&advocate("Boston", &[], 17)));
    }
}
