//! Random test-data generators.
//!
//! Payload factories for the scenario tests: every run gets fresh emails,
//! names and movie titles so repeated suites never collide on unique
//! constraints in the backend.

use rand::distr::{Alphanumeric, SampleString};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::types::{Booking, BookingDates, CreateMovie, RegisterUser};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Boris", "Clara", "Dmitri", "Elena", "Felix", "Greta", "Hugo", "Irina", "Jonas",
];
const LAST_NAMES: &[&str] = &[
    "Adler", "Bennett", "Castillo", "Dawson", "Egorova", "Fischer", "Grant", "Hoffman", "Ivanov",
    "Jensen",
];
const WORDS: &[&str] = &[
    "Silence", "Rivers", "Autumn", "Shadows", "Glass", "Harbor", "Winter", "Embers", "Voyage",
    "Mirrors",
];

pub fn random_email() -> String {
    let mut rng = rand::rng();
    let suffix = Alphanumeric.sample_string(&mut rng, 8).to_lowercase();
    format!("qa.{suffix}@example.com")
}

pub fn random_full_name() -> String {
    let mut rng = rand::rng();
    format!(
        "{} {}",
        FIRST_NAMES.choose(&mut rng).unwrap(),
        LAST_NAMES.choose(&mut rng).unwrap()
    )
}

/// Password satisfying the auth backend's policy: 8-20 chars, at least one
/// letter and one digit, drawn from letters, digits and `?@#$%^&*|:`.
pub fn random_password() -> String {
    const POOL: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789?@#$%^&*|:";
    let mut rng = rand::rng();
    let len = rng.random_range(8..=20);
    let mut chars: Vec<char> = Vec::with_capacity(len);
    chars.push(rng.random_range(b'a'..=b'z') as char);
    chars.push(rng.random_range(b'0'..=b'9') as char);
    while chars.len() < len {
        chars.push(*POOL.choose(&mut rng).unwrap() as char);
    }
    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}

pub fn movie_title() -> String {
    let mut rng = rand::rng();
    let adjective = WORDS.choose(&mut rng).unwrap();
    let noun = WORDS.choose(&mut rng).unwrap();
    let number = rng.random_range(100..1000);
    format!("The {adjective} of {noun} #{number}")
}

pub fn image_url() -> String {
    let mut rng = rand::rng();
    let unique = Alphanumeric.sample_string(&mut rng, 10).to_lowercase();
    format!("https://cdn.movies.example.com/posters/movie_{unique}.jpg")
}

pub fn price() -> u32 {
    rand::rng().random_range(1..=1000)
}

pub fn description() -> String {
    let mut rng = rand::rng();
    let a = WORDS.choose(&mut rng).unwrap();
    let b = WORDS.choose(&mut rng).unwrap();
    format!("A story of {a} and {b}, told in three acts.")
}

/// One of the two locations the catalog accepts.
pub fn location() -> String {
    let mut rng = rand::rng();
    ["MSK", "SPB"].choose(&mut rng).unwrap().to_string()
}

pub fn register_payload() -> RegisterUser {
    let password = random_password();
    RegisterUser {
        email: random_email(),
        full_name: random_full_name(),
        password: password.clone(),
        password_repeat: password,
    }
}

pub fn movie_payload() -> CreateMovie {
    CreateMovie {
        name: movie_title(),
        image_url: image_url(),
        price: price(),
        description: description(),
        location: location(),
        published: true,
        genre_id: 1,
    }
}

pub fn booking_payload() -> Booking {
    let mut rng = rand::rng();
    Booking {
        firstname: FIRST_NAMES.choose(&mut rng).unwrap().to_string(),
        lastname: LAST_NAMES.choose(&mut rng).unwrap().to_string(),
        totalprice: rng.random_range(100..=100_000),
        depositpaid: true,
        bookingdates: BookingDates {
            checkin: "2024-04-05".to_string(),
            checkout: "2024-04-08".to_string(),
        },
        additionalneeds: Some("Cigars".to_string()),
    }
}
