use pretty_assertions::assert_eq;
use retail_forecast::artifacts::{Predictor, Transformer};
use retail_forecast::error::Result;
use retail_forecast::features::FeatureRecord;
use retail_forecast::recurrence::{forecast, roll_forward, PeriodLabel};
use rstest::rstest;

/// Passes the record's raw vector straight through
#[derive(Debug, Clone)]
struct IdentityScaler;

impl Transformer for IdentityScaler {
    fn transform(&self, record: &FeatureRecord) -> Result<Vec<f64>> {
        Ok(record.to_vector().to_vec())
    }
}

/// Always predicts the same profit
#[derive(Debug, Clone)]
struct FixedPredictor(f64);

impl Predictor for FixedPredictor {
    fn predict(&self, _features: &[f64]) -> Result<f64> {
        Ok(self.0)
    }
}

fn sample_record() -> FeatureRecord {
    FeatureRecord {
        quantity: 4.0,
        price: 260.8074,
        product_encoded: 7,
        city_encoded: 42,
        last_month_profit: 846.44,
        avg_last_3_months_profit: 485.47,
        month_over_month_change: 0.257644,
        cumulative_sales_to_date: 554077.97,
        season: 4,
        order_month: 5,
        order_day: 16,
        order_weekday: 0,
        order_year: 2025,
    }
}

#[rstest]
#[case(1, 2)]
#[case(5, 6)]
#[case(11, 12)]
#[case(12, 1)]
fn test_next_month_cycles_through_the_year(#[case] month: u32, #[case] expected: u32) {
    let mut record = sample_record();
    record.order_month = month;

    let next = roll_forward(&record, 1000.0);
    assert_eq!(next.order_month, expected);
}

#[rstest]
#[case(12, 2024, 2025)]
#[case(5, 2024, 2024)]
#[case(1, 2024, 2024)]
fn test_year_rolls_over_only_from_december(
    #[case] month: u32,
    #[case] year: i32,
    #[case] expected: i32,
) {
    let mut record = sample_record();
    record.order_month = month;
    record.order_year = year;

    let next = roll_forward(&record, 1000.0);
    assert_eq!(next.order_year, expected);
}

#[test]
fn test_prediction_becomes_next_last_month_profit() {
    let next = roll_forward(&sample_record(), 846.44);
    assert_eq!(next.last_month_profit, 846.44);
}

#[test]
fn test_three_month_average_folds_in_the_prediction() {
    let next = roll_forward(&sample_record(), 846.44);
    // (2 * 485.47 + 846.44) / 3
    assert!((next.avg_last_3_months_profit - 605.793333333333).abs() < 1e-9);
}

#[test]
fn test_month_over_month_change_ratio() {
    let next = roll_forward(&sample_record(), 1000.0);
    let expected = (1000.0 - 846.44) / 846.44;
    assert!((next.month_over_month_change - expected).abs() < 1e-12);
}

#[test]
fn test_month_over_month_change_zero_fallback() {
    // A zero previous profit would divide by zero; the fallback reads as
    // "no change" even though it really means "no prior data"
    let mut record = sample_record();
    record.last_month_profit = 0.0;

    let next = roll_forward(&record, 1234.5);
    assert_eq!(next.month_over_month_change, 0.0);
}

#[test]
fn test_cumulative_sales_accumulate_the_prediction() {
    let next = roll_forward(&sample_record(), 1000.0);
    assert!((next.cumulative_sales_to_date - 555077.97).abs() < 1e-9);
}

#[rstest]
// next.season as a function of the month being rolled INTO, pinned for
// every month of the year. The value comes from integer arithmetic on
// the month, not from a canonical month-to-season table; December and
// January both land on 1 while September through November land on 4.
// The model was fitted against this encoding, so it stays as is.
#[case(12, 1, 1)]
#[case(1, 2, 1)]
#[case(2, 3, 2)]
#[case(3, 4, 2)]
#[case(4, 5, 2)]
#[case(5, 6, 3)]
#[case(6, 7, 3)]
#[case(7, 8, 3)]
#[case(8, 9, 4)]
#[case(9, 10, 4)]
#[case(10, 11, 4)]
#[case(11, 12, 1)]
fn season_formula_is_arithmetic_not_calendar(
    #[case] month: u32,
    #[case] next_month: u32,
    #[case] expected_season: u32,
) {
    let mut record = sample_record();
    record.order_month = month;

    let next = roll_forward(&record, 1000.0);
    assert_eq!(next.order_month, next_month);
    assert_eq!(next.season, (next_month % 12 + 3) / 3);
    assert_eq!(next.season, expected_season);
}

#[test]
fn test_untouched_fields_carry_over() {
    let record = sample_record();
    let next = roll_forward(&record, 1000.0);

    assert_eq!(next.quantity, record.quantity);
    assert_eq!(next.price, record.price);
    assert_eq!(next.product_encoded, record.product_encoded);
    assert_eq!(next.city_encoded, record.city_encoded);
    assert_eq!(next.order_day, record.order_day);
    assert_eq!(next.order_weekday, record.order_weekday);
}

#[test]
fn test_forecast_labels_both_periods() {
    let record = sample_record();
    let result = forecast(&record, &IdentityScaler, &FixedPredictor(1000.0)).unwrap();

    assert_eq!(result.first_period, PeriodLabel { month: 5, year: 2025 });
    assert_eq!(result.second_period, PeriodLabel { month: 6, year: 2025 });
    assert_eq!(result.first_period.to_string(), "May 2025");
    assert_eq!(result.second_period.to_string(), "June 2025");
    assert_eq!(result.first_pred, 1000.0);
    assert_eq!(result.second_pred, 1000.0);
}

#[test]
fn test_forecast_is_pure() {
    let record = sample_record();
    let scaler = IdentityScaler;
    let model = FixedPredictor(987.65);

    let first = forecast(&record, &scaler, &model).unwrap();
    let second = forecast(&record, &scaler, &model).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_second_prediction_uses_the_rolled_forward_record() {
    /// Predicts the record's last-month profit, making the feedback loop
    /// observable
    #[derive(Debug)]
    struct EchoPredictor;

    impl Predictor for EchoPredictor {
        fn predict(&self, features: &[f64]) -> Result<f64> {
            // last_month_profit sits at index 4 of the canonical order
            Ok(features[4] * 2.0)
        }
    }

    let record = sample_record();
    let result = forecast(&record, &IdentityScaler, &EchoPredictor).unwrap();

    // First prediction doubles the input's last-month profit; the second
    // doubles the first prediction
    assert!((result.first_pred - 1692.88).abs() < 1e-9);
    assert!((result.second_pred - 3385.76).abs() < 1e-9);
    assert_eq!(result.next_record.last_month_profit, result.first_pred);
}
