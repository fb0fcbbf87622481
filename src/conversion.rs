//! Unit conversions shared by every emission formula.

pub const KG_PER_POUND: f64 = 0.45359237;
pub const MILES_PER_KM: f64 = 0.621371;
/// Days in a Gregorian year.
pub const DAYS_PER_YEAR: f64 = 365.2425;
pub const WEEKS_PER_YEAR: f64 = 52.1775;
pub const DAYS_PER_WEEK: f64 = 7.0;
pub const KG_PER_TONNE: f64 = 1000.0;
pub const GRAMS_PER_KG: f64 = 1000.0;
pub const KWH_PER_MWH: f64 = 1000.0;

pub fn kg_to_tonnes(kg: f64) -> f64 {
    kg / KG_PER_TONNE
}

pub fn grams_to_kg(grams: f64) -> f64 {
    grams / GRAMS_PER_KG
}

pub fn grams_to_tonnes(grams: f64) -> f64 {
    kg_to_tonnes(grams_to_kg(grams))
}

pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

pub fn km_to_miles(km: f64) -> f64 {
    km * MILES_PER_KM
}

pub fn kwh_to_mwh(kwh: f64) -> f64 {
    kwh / KWH_PER_MWH
}

pub fn daily_to_annual(daily: f64) -> f64 {
    daily * DAYS_PER_YEAR
}

pub fn weekly_to_annual(weekly: f64) -> f64 {
    weekly * WEEKS_PER_YEAR
}

pub fn weekly_to_daily(weekly: f64) -> f64 {
    weekly / DAYS_PER_WEEK
}

pub fn annual_to_daily(annual: f64) -> f64 {
    annual / DAYS_PER_YEAR
}
