//! Exercises the on-disk startup path: writes the encoded lookup CSV and
//! both fitted artifact files, then loads a [`ForecastEngine`] from them.

use retail_forecast::{ForecastEngine, ForecastRequest, FIELD_NAMES};
use std::fs;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Retail Forecast: Fitted Artifacts Example");
    println!("=========================================\n");

    let dir = tempfile::tempdir()?;
    let lookup_path = dir.path().join("encoded_data.csv");
    let scaler_path = dir.path().join("sales_forecast_scaler.json");
    let model_path = dir.path().join("sales_forecast_model.json");

    // Write the three startup files the way the training run would have
    // left them
    println!("Writing startup files to {}...", dir.path().display());

    let mut lookup = fs::File::create(&lookup_path)?;
    writeln!(lookup, "order_id,product_name,product_encoded,city,city_encoded,profit")?;
    writeln!(lookup, "1,T-shirt,7,Katherineview,42,846.44")?;
    writeln!(lookup, "2,Hoodie,3,Port Daniel,17,512.10")?;
    writeln!(lookup, "3,T-shirt,7,Lake Monica,25,301.55")?;
    writeln!(lookup, "4,Sneakers,11,Katherineview,42,978.02")?;

    let feature_names: Vec<String> = FIELD_NAMES.iter().map(|s| s.to_string()).collect();
    let scaler_payload = serde_json::json!({
        "feature_names": feature_names,
        "mean": [5.0, 250.0, 10.0, 25.0, 800.0, 750.0, 0.05, 400000.0, 2.5, 6.5, 15.7, 3.0, 2024.0],
        "scale": [3.0, 120.0, 6.0, 15.0, 350.0, 300.0, 0.4, 150000.0, 1.1, 3.4, 8.8, 2.0, 1.5],
    });
    fs::write(&scaler_path, serde_json::to_string_pretty(&scaler_payload)?)?;

    let model_payload = serde_json::json!({
        "coefficients": [12.5, 48.0, -3.2, 1.8, 210.0, 155.0, 25.0, 60.0, -4.5, 8.1, 0.7, -1.3, 5.9],
        "intercept": 812.0,
    });
    fs::write(&model_path, serde_json::to_string_pretty(&model_payload)?)?;

    // Startup: all three files must load or the process cannot serve
    println!("Loading engine...");
    let engine = ForecastEngine::load(&lookup_path, &scaler_path, &model_path)?;
    println!(
        "Engine loaded: products {:?}, cities {:?}\n",
        engine.lookups().product_names(),
        engine.lookups().city_names()
    );

    let request = ForecastRequest {
        quantity: 2.0,
        price: 89.90,
        discount: 10.0,
        product_name: "Hoodie".to_string(),
        city: "Port Daniel".to_string(),
        last_month_profit: 512.10,
        avg_last_3_months_profit: 498.75,
        month_over_month_change: 0.031,
        cumulative_sales_to_date: 102340.55,
        season: 1,
        order_month: 12,
        order_day: 3,
        order_weekday: 4,
        order_year: 2025,
    };

    let forecast = engine.forecast(&request)?;

    println!("Profit forecast:");
    println!("  {}: {:.2}", forecast.first_period, forecast.first_pred);
    println!("  {}: {:.2}", forecast.second_period, forecast.second_pred);
    println!(
        "\nDecember rolls the calendar over: next period is {}.",
        forecast.second_period
    );

    Ok(())
}
