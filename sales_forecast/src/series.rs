//! Merge historical and projected series into chart points

use crate::data::{ForecastPoint, GraphPoint, HistoricalPoint};
use tracing::debug;

/// Combine both series into one year-ordered sequence
///
/// The last historical year becomes the transition point, carrying its sales
/// in both fields. A projected point for that same year is dropped. Output is
/// sorted by year with a stable sort, so input order breaks ties.
pub fn combine(historical: &[HistoricalPoint], forecasted: &[ForecastPoint]) -> Vec<GraphPoint> {
    let Some((last, earlier)) = historical.split_last() else {
        return Vec::new();
    };

    let mut points: Vec<GraphPoint> = earlier
        .iter()
        .map(|point| GraphPoint {
            year: point.year,
            historical: Some(point.sales),
            forecasted: None,
        })
        .collect();

    points.push(GraphPoint {
        year: last.year,
        historical: Some(last.sales),
        forecasted: Some(last.sales),
    });

    points.extend(
        forecasted
            .iter()
            .filter(|point| point.year != last.year)
            .map(|point| GraphPoint {
                year: point.year,
                historical: None,
                forecasted: Some(point.sales),
            }),
    );

    points.sort_by_key(|point| point.year);

    debug!(
        target: "forecast.series",
        points = points.len(),
        transition_year = last.year,
        "Chart series combined"
    );

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projected(year: i32, sales: f64) -> ForecastPoint {
        ForecastPoint {
            year,
            sales,
            percentage: 0.0,
            calculation: String::new(),
        }
    }

    #[test]
    fn test_forecast_for_last_historical_year_is_dropped() {
        let historical = vec![HistoricalPoint::new(2022, 10.0), HistoricalPoint::new(2023, 20.0)];
        let forecasted = vec![projected(2023, 99.0), projected(2024, 22.0)];

        let points = combine(&historical, &forecasted);
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].year, 2023);
        assert_eq!(points[1].forecasted, Some(20.0));
        assert_eq!(points[2].forecasted, Some(22.0));
    }

    #[test]
    fn test_output_sorted_by_year() {
        let historical = vec![HistoricalPoint::new(2022, 10.0), HistoricalPoint::new(2023, 20.0)];
        let forecasted = vec![projected(2025, 30.0), projected(2024, 25.0)];

        let years: Vec<i32> = combine(&historical, &forecasted)
            .iter()
            .map(|p| p.year)
            .collect();
        assert_eq!(years, vec![2022, 2023, 2024, 2025]);
    }

    #[test]
    fn test_empty_historical() {
        assert!(combine(&[], &[projected(2024, 1.0)]).is_empty());
    }
}
