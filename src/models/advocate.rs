use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::advocates)]
/// Diesel model for [`crate::domain::advocate::Advocate`].
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
    /// Precomputed normalized haystack; see [`crate::search::normalize`].
    pub search_text: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub search_text: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Insertable)]
#[diesel(table_name = crate::schema::advocate_specialties)]
#[diesel(belongs_to(Advocate, foreign_key = advocate_id))]
#[diesel(primary_key(advocate_id, position))]
/// One specialty of one advocate; `position` preserves display order.
pub struct AdvocateSpecialty {
    pub advocate_id: i32,
    pub position: i32,
    pub specialty: String,
}

impl Advocate {
    /// Rebuild the domain record from the row plus its specialty rows
    /// (already ordered by `position`).
    pub fn into_domain(self, specialties: Vec<String>) -> DomainAdvocate {
        DomainAdvocate {
            id: Some(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            city: self.city,
            degree: self.degree,
            specialties,
            years_of_experience: self.years_of_experience,
            phone_number: self.phone_number,
        }
    }
}

impl<'a> From<&'a DomainNewAdvocate> for NewAdvocate<'a> {
    fn from(advocate: &'a DomainNewAdvocate) -> Self {
        Self {
            first_name: advocate.first_name.as_str(),
            last_name: advocate.last_name.as_str(),
            city: advocate.city.as_str(),
            degree: advocate.degree.as_str(),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
            search_text: advocate.search_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_domain_new() -> DomainNewAdvocate {
        DomainNewAdvocate {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            city: "Boston".to_string(),
            degree: "MD".to_string(),
            specialties: vec!["Anxiety".to_string()],
            years_of_experience: 5,
            phone_number: 5551234567,
        }
    }

    #[test]
    fn from_domain_new_computes_search_text() {
        let domain = sample_domain_new();
        let new: NewAdvocate = (&domain).into();
        assert_eq!(new.first_name, "Alice");
        assert_eq!(new.phone_number, 5551234567);
        assert_eq!(new.search_text, "alice smith boston md anxiety 5");
    }

    #[test]
    fn row_into_domain_carries_specialties() {
        let row = Advocate {
            id: 7,
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            city: "Boston".to_string(),
            degree: "MD".to_string(),
            years_of_experience: 5,
            phone_number: 5551234567,
            search_text: "alice smith boston md anxiety 5".to_string(),
            created_at: Utc::now().naive_utc(),
        };
        let domain = row.into_domain(vec!["Anxiety".to_string()]);
        assert_eq!(domain.id, Some(7));
        assert_eq!(domain.specialties, vec!["Anxiety".to_string()]);
    }
}
