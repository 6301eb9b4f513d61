//! # Sales Forecast Workspace
//!
//! Facade over the workspace libraries:
//!
//! - [`forecast`]: the calculation engine (`sales_forecast`)
//! - [`store`]: repository interfaces for users, products and roles (`sales_store`)
//!
//! ## Example
//!
//! ```
//! use sales_forecast_workspace::forecast::{calculate, ForecastInput, ForecastParameter, HistoricalPoint};
//! use sales_forecast_workspace::store::{InMemoryStore, NewProduct, ProductStore};
//!
//! let store = InMemoryStore::new();
//! let product = store.create_product(NewProduct::new("Pallets")).unwrap();
//!
//! let historical = [
//!     HistoricalPoint::new(2021, 900.0),
//!     HistoricalPoint::new(2022, 950.0),
//!     HistoricalPoint::new(2023, 1000.0),
//! ];
//! let input = ForecastInput::from_points(&historical, &[ForecastParameter::new(2024, 5.0)])
//!     .with_product(product.name);
//!
//! let report = calculate(&input).unwrap();
//! assert_eq!(report.forecast[0].sales, 1050.0);
//! ```

pub use sales_forecast as forecast;
pub use sales_store as store;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_reach_both_crates() {
        let store = store::InMemoryStore::new();
        assert!(store::ProductStore::list_products(&store).unwrap().is_empty());
        assert_eq!(forecast::ValidationRules::default().min_year, 1900);
    }
}
