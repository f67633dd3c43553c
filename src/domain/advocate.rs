use serde::{Deserialize, Serialize};

use crate::search;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// Assigned by storage; seed records are served without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Order-preserving; filters treat it as a set.
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    /// Opaque numeric key, unique per result set.
    pub phone_number: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

fn haystack(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[String],
    years_of_experience: i32,
) -> String {
    search::normalize(&format!(
        "{} {} {} {} {} {}",
        first_name,
        last_name,
        city,
        degree,
        specialties.join(" "),
        years_of_experience,
    ))
}

impl Advocate {
    /// Normalized haystack the free-text filter matches against.
    pub fn search_text(&self) -> String {
        haystack(
            &self.first_name,
            &self.last_name,
            &self.city,
            &self.degree,
            &self.specialties,
            self.years_of_experience,
        )
    }
}

impl NewAdvocate {
    /// Same haystack as [`Advocate::search_text`], computed before the
    /// record has an id. Stored alongside the row on insert.
    pub fn search_text(&self) -> String {
        haystack(
            &self.first_name,
            &self.last_name,
            &self.city,
            &self.degree,
            &self.specialties,
            self.years_of_experience,
        )
    }
}

impl From<NewAdvocate> for Advocate {
    fn from(advocate: NewAdvocate) -> Self {
        Self {
            id: None,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties: advocate.specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}
