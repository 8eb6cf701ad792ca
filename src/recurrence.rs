//! The two-step forecast recurrence
//!
//! One forecast call produces two predictions: the profit for the
//! requested period, and the profit for the period after it. The second
//! prediction comes from feeding the first one back in: the next-period
//! record advances the calendar fields and rolls the profit statistics
//! forward using the first prediction as the newly observed month.

use crate::artifacts::{Predictor, Transformer};
use crate::error::Result;
use crate::features::{month_name, FeatureRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month/year pair labeling one forecast period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLabel {
    /// Calendar month in 1..=12
    pub month: u32,
    pub year: i32,
}

impl PeriodLabel {
    /// Full month name, e.g. "May"
    pub fn month_name(&self) -> Result<&'static str> {
        month_name(self.month)
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match month_name(self.month) {
            Ok(name) => write!(f, "{} {}", name, self.year),
            Err(_) => write!(f, "month {} {}", self.month, self.year),
        }
    }
}

/// Result of one forecast call: two predictions with their period labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted profit for the requested period
    pub first_pred: f64,
    /// The requested period
    pub first_period: PeriodLabel,
    /// Predicted profit for the period after the requested one
    pub second_pred: f64,
    /// The rolled-forward period
    pub second_period: PeriodLabel,
    /// The synthesized record the second prediction was made from
    pub next_record: FeatureRecord,
}

/// Run the two-step forecast recurrence.
///
/// Pure given its inputs: identical record, scaler, and model state yield
/// identical output, and no state survives the call.
pub fn forecast<T, P>(record: &FeatureRecord, scaler: &T, model: &P) -> Result<Forecast>
where
    T: Transformer,
    P: Predictor,
{
    let scaled = scaler.transform(record)?;
    let first_pred = model.predict(&scaled)?;

    let next_record = roll_forward(record, first_pred);

    let next_scaled = scaler.transform(&next_record)?;
    let second_pred = model.predict(&next_scaled)?;

    Ok(Forecast {
        first_pred,
        first_period: PeriodLabel {
            month: record.order_month,
            year: record.order_year,
        },
        second_pred,
        second_period: PeriodLabel {
            month: next_record.order_month,
            year: next_record.order_year,
        },
        next_record,
    })
}

/// Synthesize the next period's feature record from the current one and
/// its predicted profit.
///
/// The prediction becomes the new last-month profit; the 3-month average
/// folds it in at one-third weight, approximating a rolling mean where
/// the new point displaces the oldest. A zero last-month profit makes the
/// month-over-month ratio undefined and falls back to `0.0`, which reads
/// the same as "no change" downstream.
pub fn roll_forward(record: &FeatureRecord, first_pred: f64) -> FeatureRecord {
    let next_month = (record.order_month % 12) + 1;
    let next_year = if next_month == 1 {
        record.order_year + 1
    } else {
        record.order_year
    };

    let month_over_month_change = if record.last_month_profit != 0.0 {
        (first_pred - record.last_month_profit) / record.last_month_profit
    } else {
        0.0
    };

    FeatureRecord {
        order_month: next_month,
        order_year: next_year,
        last_month_profit: first_pred,
        avg_last_3_months_profit: (record.avg_last_3_months_profit * 2.0 + first_pred) / 3.0,
        month_over_month_change,
        cumulative_sales_to_date: record.cumulative_sales_to_date + first_pred,
        // Integer arithmetic preserved verbatim from the fitted pipeline;
        // it does not match the calendar month-to-season table exactly.
        season: (next_month % 12 + 3) / 3,
        ..record.clone()
    }
}
