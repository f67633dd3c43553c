//! Fixed seed dataset served when no database is configured and loaded by
//! the bulk-insert endpoint.

use crate::domain::advocate::NewAdvocate;

fn advocate(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years_of_experience: i32,
    phone_number: i64,
) -> NewAdvocate {
    NewAdvocate {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        city: city.to_string(),
        degree: degree.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience,
        phone_number,
    }
}

/// The embedded advocate records, in a deterministic order with unique
/// phone numbers.
pub fn advocates() -> Vec<NewAdvocate> {
    vec![
        advocate(
            "John",
            "Doe",
            "New York",
            "MD",
            &["Bipolar", "LGBTQ", "Medication Management"],
            10,
            5550000001,
        ),
        advocate(
            "Jane",
            "Smith",
            "Los Angeles",
            "PhD",
            &["Anxiety", "Depression"],
            8,
            5550000002,
        ),
        advocate(
            "Alice",
            "Johnson",
            "Chicago",
            "MSW",
            &["Trauma Support", "Relationship Issues"],
            5,
            5550000003,
        ),
        advocate(
            "Michael",
            "Brown",
            "Houston",
            "MD",
            &["Substance Abuse", "Anxiety"],
            12,
            5550000004,
        ),
        advocate(
            "Emily",
            "Davis",
            "Phoenix",
            "PhD",
            &["Eating Disorders", "Self-Esteem"],
            7,
            5550000005,
        ),
        advocate(
            "Chris",
            "Martinez",
            "Philadelphia",
            "MSW",
            &["Grief Counseling", "Depression", "Trauma Support"],
            9,
            5550000006,
        ),
        advocate(
            "Jessica",
            "Taylor",
            "San Antonio",
            "MD",
            &["Pediatric Behavioral Health", "ADHD"],
            11,
            5550000007,
        ),
        advocate(
            "David",
            "Harris",
            "San Diego",
            "PhD",
            &["Stress Management", "Anxiety", "Sleep Disorders"],
            6,
            5550000008,
        ),
        advocate(
            "Laura",
            "Clark",
            "Dallas",
            "MSW",
            &["Domestic Violence Support", "Trauma Support"],
            14,
            5550000009,
        ),
        advocate(
            "Daniel",
            "Lewis",
            "San Jose",
            "MD",
            &["Chronic Pain Management", "Medication Management"],
            13,
            5550000010,
        ),
        advocate(
            "Sarah",
            "Lee",
            "Austin",
            "PhD",
            &["Anxiety", "OCD"],
            4,
            5550000011,
        ),
        advocate(
            "James",
            "Walker",
            "Jacksonville",
            "MSW",
            &["Life Coaching", "Career Counseling"],
            3,
            5550000012,
        ),
        advocate(
            "Karen",
            "Hall",
            "Fort Worth",
            "MD",
            &["Geriatric Mental Health", "Depression"],
            16,
            5550000013,
        ),
        advocate(
            "Brian",
            "Young",
            "Columbus",
            "PhD",
            &["Men's Mental Health", "Anger Management"],
            2,
            5550000014,
        ),
        advocate(
            "Nancy",
            "King",
            "Charlotte",
            "MSW",
            &["Postpartum Support", "Family Therapy", "Anxiety"],
            15,
            5550000015,
        ),
    ]
}
