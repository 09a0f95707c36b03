//! Realistic person, address and text values backed by the `fake` crate.

use fake::faker::address::raw::{BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode};
use fake::faker::company::raw::CompanyName;
use fake::faker::lorem::raw::{Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use fake::Fake;
use rand::Rng;

/// Generate a full person name.
pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    format!("{first} {last}")
}

/// Derive an email address from a display name.
///
/// The local part is the lowercased name with a random disambiguating
/// suffix, so generated addresses are unique enough for fixture data.
pub fn email_for<R: Rng + ?Sized>(rng: &mut R, name: &str) -> String {
    const DOMAINS: [&str; 3] = ["example.com", "demo.test", "sandbox.dev"];

    let local: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '.' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect();
    let suffix = rng.random_range(1..10_000u32);
    let domain = DOMAINS[rng.random_range(0..DOMAINS.len())];

    format!("{local}{suffix}@{domain}")
}

/// Generate a company name.
pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    CompanyName(EN).fake_with_rng(rng)
}

/// Generate a street address line ("1234 Maple Street").
pub fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: String = BuildingNumber(EN).fake_with_rng(rng);
    let street: String = StreetName(EN).fake_with_rng(rng);
    format!("{number} {street}")
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    CityName(EN).fake_with_rng(rng)
}

pub fn state<R: Rng + ?Sized>(rng: &mut R) -> String {
    StateName(EN).fake_with_rng(rng)
}

pub fn zip_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    ZipCode(EN).fake_with_rng(rng)
}

pub fn country<R: Rng + ?Sized>(rng: &mut R) -> String {
    CountryName(EN).fake_with_rng(rng)
}

/// Generate a single lorem word.
pub fn word<R: Rng + ?Sized>(rng: &mut R) -> String {
    Word(EN).fake_with_rng(rng)
}

/// Generate a short lorem sentence.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    Sentence(EN, 4..9).fake_with_rng(rng)
}

/// Generate a semantic version string.
pub fn semver<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}",
        rng.random_range(0..5u32),
        rng.random_range(0..20u32),
        rng.random_range(0..50u32)
    )
}
