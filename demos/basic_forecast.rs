use polars::prelude::*;
use retail_forecast::{
    ForecastEngine, ForecastRequest, LinearModel, LookupTables, StandardScaler, FIELD_NAMES,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Retail Forecast: Basic Forecasting Example");
    println!("==========================================\n");

    // Build lookup tables from an in-memory frame instead of the encoded
    // data CSV
    println!("Building lookup tables...");
    let lookups = LookupTables::from_dataframe(create_sample_lookup_frame()?)?;
    println!(
        "Lookup tables ready: {} products, {} cities\n",
        lookups.product_count(),
        lookups.city_count()
    );

    // Construct the fitted artifacts directly rather than loading them
    // from JSON files
    println!("Assembling fitted artifacts...");
    let scaler = create_sample_scaler()?;
    let model = create_sample_model()?;
    let engine = ForecastEngine::new(lookups, scaler, model);
    println!("Engine assembled\n");

    let request = ForecastRequest {
        quantity: 4.0,
        price: 266.13,
        discount: 2.0,
        product_name: "T-shirt".to_string(),
        city: "Katherineview".to_string(),
        last_month_profit: 846.44,
        avg_last_3_months_profit: 485.47,
        month_over_month_change: 0.257644,
        cumulative_sales_to_date: 554077.97,
        season: 4,
        order_month: 5,
        order_day: 16,
        order_weekday: 0,
        order_year: 2025,
    };

    println!(
        "Forecasting for {} in {}...",
        request.product_name, request.city
    );
    let forecast = engine.forecast(&request)?;

    println!("\nProfit forecast:");
    println!("  {}: {:.2}", forecast.first_period, forecast.first_pred);
    println!("  {}: {:.2}", forecast.second_period, forecast.second_pred);

    println!("\nSynthesized next-period record:");
    println!(
        "  last_month_profit:        {:.2}",
        forecast.next_record.last_month_profit
    );
    println!(
        "  avg_last_3_months_profit: {:.2}",
        forecast.next_record.avg_last_3_months_profit
    );
    println!(
        "  cumulative_sales_to_date: {:.2}",
        forecast.next_record.cumulative_sales_to_date
    );

    Ok(())
}

/// Create a small lookup frame with a few products and cities
fn create_sample_lookup_frame() -> PolarsResult<DataFrame> {
    let product_names = Series::new(
        "product_name",
        vec!["T-shirt", "Hoodie", "Sneakers", "T-shirt"],
    );
    let product_codes = Series::new("product_encoded", vec![7i64, 3, 11, 7]);
    let city_names = Series::new(
        "city",
        vec!["Katherineview", "Port Daniel", "Lake Monica", "Katherineview"],
    );
    let city_codes = Series::new("city_encoded", vec![42i64, 17, 25, 42]);

    DataFrame::new(vec![product_names, product_codes, city_names, city_codes])
}

/// Create a scaler with plausible fitted statistics for the 13 features
fn create_sample_scaler() -> retail_forecast::Result<StandardScaler> {
    let feature_names = FIELD_NAMES.iter().map(|s| s.to_string()).collect();
    let mean = vec![
        5.0, 250.0, 10.0, 25.0, 800.0, 750.0, 0.05, 400000.0, 2.5, 6.5, 15.7, 3.0, 2024.0,
    ];
    let scale = vec![
        3.0, 120.0, 6.0, 15.0, 350.0, 300.0, 0.4, 150000.0, 1.1, 3.4, 8.8, 2.0, 1.5,
    ];

    StandardScaler::new(feature_names, mean, scale)
}

/// Create a model with plausible fitted coefficients
fn create_sample_model() -> retail_forecast::Result<LinearModel> {
    let coefficients = vec![
        12.5, 48.0, -3.2, 1.8, 210.0, 155.0, 25.0, 60.0, -4.5, 8.1, 0.7, -1.3, 5.9,
    ];

    LinearModel::new(coefficients, 812.0)
}
