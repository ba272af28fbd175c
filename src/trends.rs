//! Regional health trends, flattened into chart points.

use serde::Serialize;

use crate::catalog::Catalog;

/// One bar of the prevalence chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint<'a> {
    pub name: &'a str,
    /// Percent of population.
    pub value: u8,
}

pub fn regions(catalog: &Catalog) -> Vec<&str> {
    catalog
        .region_trends()
        .iter()
        .map(|trend| trend.region.as_str())
        .collect()
}

/// Chart points for `region`; empty for an unknown region.
pub fn chart_points<'a>(catalog: &'a Catalog, region: &str) -> Vec<ChartPoint<'a>> {
    let Some(trend) = catalog.region(region) else {
        tracing::debug!(region, "Unknown trend region");
        return Vec::new();
    };
    trend
        .top_conditions
        .iter()
        .zip(&trend.prevalence)
        .map(|(name, &value)| ChartPoint {
            name: name.as_str(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    #[test]
    fn regions_in_data_order() {
        assert_eq!(
            regions(builtin()),
            vec!["North America", "Europe", "Asia", "Africa"]
        );
    }

    #[test]
    fn chart_points_pair_conditions_with_prevalence() {
        let points = chart_points(builtin(), "Africa");
        assert_eq!(
            points,
            vec![
                ChartPoint { name: "Infectious Disease", value: 27 },
                ChartPoint { name: "Malnutrition", value: 21 },
                ChartPoint { name: "Respiratory Infections", value: 17 },
            ]
        );
    }

    #[test]
    fn unknown_region_has_no_points() {
        assert!(chart_points(builtin(), "Oceania").is_empty());
    }

    #[test]
    fn chart_points_serialize() {
        let points = chart_points(builtin(), "Europe");
        let json = serde_json::to_value(&points).unwrap();
        assert_eq!(json[0]["name"], "Cardiovascular Disease");
        assert_eq!(json[0]["value"], 19);
    }
}
