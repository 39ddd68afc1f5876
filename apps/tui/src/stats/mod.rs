//! Static dashboard statistics: car counts per country, brand shares and
//! the derived world totals.

pub mod choropleth;
pub mod tables;

pub use choropleth::ChoroplethScale;
pub use tables::{BRAND_SHARES, COUNTRY_CARS};

use serde::Serialize;

/// A brand's share converted to an absolute number of cars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandTotal {
    pub name: String,
    pub value: u64,
    pub percent: f64,
}

pub fn world_total() -> u64 {
    COUNTRY_CARS.iter().map(|(_, cars)| cars).sum()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn brand_totals(total: u64) -> Vec<BrandTotal> {
    BRAND_SHARES
        .iter()
        .map(|(name, percent)| BrandTotal {
            name: (*name).to_string(),
            value: (percent / 100.0 * total as f64).round() as u64,
            percent: *percent,
        })
        .collect()
}

pub fn country_cars(name: &str) -> Option<u64> {
    let name = normalize_country_name(name);
    COUNTRY_CARS
        .iter()
        .find(|(country, _)| *country == name)
        .map(|(_, cars)| *cars)
}

/// Countries ordered by car count, largest first.
pub fn countries_by_cars() -> Vec<(&'static str, u64)> {
    let mut countries = COUNTRY_CARS.to_vec();
    countries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    countries
}

pub fn choropleth() -> ChoroplethScale {
    ChoroplethScale::new(COUNTRY_CARS.iter().map(|(_, cars)| *cars))
}

/// Maps alternative country spellings used by map datasets onto table keys.
pub fn normalize_country_name(name: &str) -> &str {
    match name {
        "United States" => "United States of America",
        "Korea, South" => "South Korea",
        "Russian Federation" => "Russia",
        "Congo (Kinshasa)" => "Democratic Republic of the Congo",
        "Congo (Brazzaville)" => "Republic of the Congo",
        other => other,
    }
}

/// Integer with `,` between digit groups.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
