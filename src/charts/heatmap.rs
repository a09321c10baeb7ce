//! Year × county heatmap (Vega-Lite)

use serde_json::{json, Value};

use super::VEGA_LITE_SCHEMA;
use crate::dataset::PopulationTable;
use crate::theme::ColorTheme;

/// Heatmap over every year of the table
///
/// One rect per (year, county); cell intensity is the maximum population in
/// the cell.
pub fn make_heatmap(table: &PopulationTable, theme: ColorTheme) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "data": { "values": table.records() },
        "mark": "rect",
        "width": 900,
        "encoding": {
            "y": {
                "field": "year",
                "type": "ordinal",
                "axis": {
                    "title": "Year",
                    "titleFontSize": 18,
                    "titlePadding": 15,
                    "titleFontWeight": 900,
                    "labelAngle": 0
                }
            },
            "x": {
                "field": "county",
                "type": "ordinal",
                "axis": {
                    "title": "",
                    "titleFontSize": 18,
                    "titlePadding": 15,
                    "titleFontWeight": 900
                }
            },
            "color": {
                "field": "population",
                "aggregate": "max",
                "type": "quantitative",
                "legend": null,
                "scale": { "scheme": theme.vega_scheme() }
            },
            "stroke": { "value": "black" },
            "strokeWidth": { "value": 0.25 }
        },
        "config": {
            "axis": { "labelFontSize": 12, "titleFontSize": 12 }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PopulationRecord;

    #[test]
    fn test_heatmap_spec() {
        let table = PopulationTable::new(vec![
            PopulationRecord::new("Mombasa", "1", 2019, 1_208_333),
            PopulationRecord::new("Mombasa", "1", 2020, 1_230_000),
        ]);
        let spec = make_heatmap(&table, ColorTheme::Magma);

        assert_eq!(spec["mark"], "rect");
        assert_eq!(spec["data"]["values"].as_array().unwrap().len(), 2);
        assert_eq!(spec["data"]["values"][0]["county"], "Mombasa");
        assert_eq!(spec["encoding"]["color"]["aggregate"], "max");
        assert_eq!(spec["encoding"]["color"]["scale"]["scheme"], "magma");
        assert_eq!(spec["encoding"]["y"]["axis"]["title"], "Year");
    }
}
