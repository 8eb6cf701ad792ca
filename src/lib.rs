//! # Retail Forecast
//!
//! A Rust library for forecasting next-period retail profit from a fitted
//! regression model and scaler.
//!
//! ## Features
//!
//! - Category lookup tables loaded once from the encoded sales data (CSV)
//! - A fixed 13-field feature record schema matching the fitted scaler
//! - The two-step forecast recurrence: predict the requested period, roll
//!   the prediction forward into a synthesized next-period record, and
//!   predict that period too
//! - Fitted scaler and model artifacts consumed from JSON files
//! - An opaque-model seam (`Transformer`/`Predictor` traits) so the
//!   recurrence is testable without real fitted artifacts
//!
//! ## Quick Start
//!
//! ```no_run
//! use retail_forecast::{ForecastEngine, ForecastRequest};
//!
//! # fn main() -> retail_forecast::Result<()> {
//! // Load the lookup table and both fitted artifacts at startup
//! let engine = ForecastEngine::load(
//!     "encoded_data.csv",
//!     "sales_forecast_scaler.json",
//!     "sales_forecast_model.json",
//! )?;
//!
//! // One request, two predictions
//! let request = ForecastRequest {
//!     quantity: 4.0,
//!     price: 266.13,
//!     discount: 2.0,
//!     product_name: "T-shirt".to_string(),
//!     city: "Katherineview".to_string(),
//!     last_month_profit: 846.44,
//!     avg_last_3_months_profit: 485.47,
//!     month_over_month_change: 0.257644,
//!     cumulative_sales_to_date: 554077.97,
//!     season: 4,
//!     order_month: 5,
//!     order_day: 16,
//!     order_weekday: 0,
//!     order_year: 2025,
//! };
//!
//! let forecast = engine.forecast(&request)?;
//! println!("{}: {:.2}", forecast.first_period, forecast.first_pred);
//! println!("{}: {:.2}", forecast.second_period, forecast.second_pred);
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod engine;
pub mod error;
pub mod features;
pub mod lookup;
pub mod recurrence;

// Re-export commonly used types
pub use crate::artifacts::{LinearModel, Predictor, StandardScaler, Transformer};
pub use crate::engine::ForecastEngine;
pub use crate::error::{ForecastError, Result};
pub use crate::features::{build_record, FeatureRecord, ForecastRequest, FIELD_NAMES, NUM_FEATURES};
pub use crate::lookup::LookupTables;
pub use crate::recurrence::{forecast, roll_forward, Forecast, PeriodLabel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
