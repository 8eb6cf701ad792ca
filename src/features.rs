//! Feature record schema and request-to-record building
//!
//! The scaler and model were fitted against a fixed 13-column schema.
//! [`FIELD_NAMES`] is the single source of truth for field order: the
//! vector handed to the scaler is built positionally from it, and the
//! scaler cross-checks its own fitted column list against it on every
//! transform. Any drift between the two is surfaced as a shape mismatch
//! rather than silently mis-scaling columns.

use crate::error::{ForecastError, Result};
use crate::lookup::LookupTables;
use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};

/// Number of features the model consumes
pub const NUM_FEATURES: usize = 13;

/// Canonical field names, in the exact order the scaler was fitted on
pub const FIELD_NAMES: [&str; NUM_FEATURES] = [
    "quantity",
    "price",
    "product_encoded",
    "city_encoded",
    "last_month_profit",
    "avg_last_3_months_profit",
    "month_over_month_change",
    "cumulative_sales_to_date",
    "season",
    "order_month",
    "order_day",
    "order_weekday",
    "order_year",
];

/// Season labels indexed by code 1..=4
const SEASON_NAMES: [&str; 4] = ["Winter", "Spring", "Summer", "Fall"];

/// One period's input to the model, with `price` already discounted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub quantity: f64,
    /// Post-discount price, `raw_price * (1 - discount/100)`
    pub price: f64,
    pub product_encoded: i64,
    pub city_encoded: i64,
    pub last_month_profit: f64,
    pub avg_last_3_months_profit: f64,
    /// Profit ratio vs the previous month, 0 when the previous month is 0
    pub month_over_month_change: f64,
    pub cumulative_sales_to_date: f64,
    /// Season code in 1..=4
    pub season: u32,
    /// Calendar month in 1..=12
    pub order_month: u32,
    /// Day of month in 1..=31
    pub order_day: u32,
    /// Day of week in 0..=6, 0 = Monday
    pub order_weekday: u32,
    pub order_year: i32,
}

impl FeatureRecord {
    /// Flatten into the positional vector the scaler consumes.
    ///
    /// Order matches [`FIELD_NAMES`] exactly.
    pub fn to_vector(&self) -> [f64; NUM_FEATURES] {
        [
            self.quantity,
            self.price,
            self.product_encoded as f64,
            self.city_encoded as f64,
            self.last_month_profit,
            self.avg_last_3_months_profit,
            self.month_over_month_change,
            self.cumulative_sales_to_date,
            self.season as f64,
            self.order_month as f64,
            self.order_day as f64,
            self.order_weekday as f64,
            self.order_year as f64,
        ]
    }
}

/// Raw per-request inputs, before discounting and category resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub quantity: f64,
    /// Pre-discount unit price
    pub price: f64,
    /// Discount percentage in [0, 100]
    pub discount: f64,
    pub product_name: String,
    pub city: String,
    pub last_month_profit: f64,
    pub avg_last_3_months_profit: f64,
    pub month_over_month_change: f64,
    pub cumulative_sales_to_date: f64,
    pub season: u32,
    pub order_month: u32,
    pub order_day: u32,
    pub order_weekday: u32,
    pub order_year: i32,
}

/// Apply a percentage discount to a price
pub fn discounted_price(price: f64, discount_percent: f64) -> f64 {
    price * (1.0 - discount_percent / 100.0)
}

/// Build a [`FeatureRecord`] from raw request inputs.
///
/// Applies the discount to the price, resolves the product and city names
/// to their fitted category codes, and passes everything else through
/// verbatim. The declared field domains are enforced here since there is
/// no input layer in front of this crate to enforce them.
pub fn build_record(request: &ForecastRequest, lookups: &LookupTables) -> Result<FeatureRecord> {
    validate_request(request)?;

    let product_encoded = lookups.product_code(&request.product_name)?;
    let city_encoded = lookups.city_code(&request.city)?;

    Ok(FeatureRecord {
        quantity: request.quantity,
        price: discounted_price(request.price, request.discount),
        product_encoded,
        city_encoded,
        last_month_profit: request.last_month_profit,
        avg_last_3_months_profit: request.avg_last_3_months_profit,
        month_over_month_change: request.month_over_month_change,
        cumulative_sales_to_date: request.cumulative_sales_to_date,
        season: request.season,
        order_month: request.order_month,
        order_day: request.order_day,
        order_weekday: request.order_weekday,
        order_year: request.order_year,
    })
}

fn validate_request(request: &ForecastRequest) -> Result<()> {
    if request.quantity < 0.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "quantity must be non-negative, got {}",
            request.quantity
        )));
    }
    if request.price < 0.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "price must be non-negative, got {}",
            request.price
        )));
    }
    if !(0.0..=100.0).contains(&request.discount) {
        return Err(ForecastError::InvalidParameter(format!(
            "discount must be in [0, 100], got {}",
            request.discount
        )));
    }
    if !(1..=4).contains(&request.season) {
        return Err(ForecastError::InvalidParameter(format!(
            "season must be in 1..=4, got {}",
            request.season
        )));
    }
    if !(1..=12).contains(&request.order_month) {
        return Err(ForecastError::InvalidParameter(format!(
            "order_month must be in 1..=12, got {}",
            request.order_month
        )));
    }
    if !(1..=31).contains(&request.order_day) {
        return Err(ForecastError::InvalidParameter(format!(
            "order_day must be in 1..=31, got {}",
            request.order_day
        )));
    }
    if request.order_weekday > 6 {
        return Err(ForecastError::InvalidParameter(format!(
            "order_weekday must be in 0..=6, got {}",
            request.order_weekday
        )));
    }
    if !(2000..=2100).contains(&request.order_year) {
        return Err(ForecastError::InvalidParameter(format!(
            "order_year must be in 2000..=2100, got {}",
            request.order_year
        )));
    }
    Ok(())
}

/// Full month name for a month code in 1..=12
pub fn month_name(month: u32) -> Result<&'static str> {
    let month = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| {
            ForecastError::InvalidParameter(format!("month must be in 1..=12, got {}", month))
        })?;
    Ok(month.name())
}

/// Season label (Winter, Spring, Summer, Fall) for a season code in 1..=4
pub fn season_name(season: u32) -> Result<&'static str> {
    SEASON_NAMES
        .get(season.wrapping_sub(1) as usize)
        .copied()
        .ok_or_else(|| {
            ForecastError::InvalidParameter(format!("season must be in 1..=4, got {}", season))
        })
}

/// Abbreviated weekday name for a weekday code in 0..=6, 0 = Monday
pub fn weekday_name(weekday: u32) -> Result<String> {
    let weekday = u8::try_from(weekday)
        .ok()
        .and_then(|w| Weekday::try_from(w).ok())
        .ok_or_else(|| {
            ForecastError::InvalidParameter(format!("weekday must be in 0..=6, got {}", weekday))
        })?;
    Ok(weekday.to_string())
}
