use sales_forecast::{calculate, DataLoader};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load a request from JSON
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("examples")
        .join("data")
        .join("sample_request.json");

    println!("Loading request from: {}", path.display());
    let input = DataLoader::from_json(path)?;

    // Validate and run the whole calculation
    let report = calculate(&input)?;

    println!("Forecast for {}:", report.product.as_deref().unwrap_or("unnamed product"));
    for point in &report.forecast {
        println!("{}: {} ({})", point.year, point.sales, point.calculation);
    }

    println!("Chart points:");
    for point in &report.graph {
        println!("  {} historical={:?} forecasted={:?}", point.year, point.historical, point.forecasted);
    }

    let stats = &report.statistics;
    println!("Total historical: {}", stats.total_historical);
    println!("Total forecasted: {}", stats.total_forecasted);
    println!("Average growth:   {:.2}%", stats.average_growth_rate);
    println!("Projected growth: {:.2}%", stats.projected_growth);

    Ok(())
}
