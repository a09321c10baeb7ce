//! County choropleth (Plotly figure)

use serde_json::{json, Value};

use crate::dataset::{GeoBoundary, PopulationRecord};
use crate::metrics::max_population;
use crate::theme::ColorTheme;

const MAP_HEIGHT: u32 = 350;

/// Choropleth of one year's population by county
///
/// The color range is pinned to `0..=max population of the given records`.
/// Features are matched on `properties.id`.
pub fn make_choropleth(
    records: &[PopulationRecord],
    boundaries: &GeoBoundary,
    theme: ColorTheme,
) -> Value {
    let locations: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    let values: Vec<u64> = records.iter().map(|r| r.population).collect();
    let names: Vec<&str> = records.iter().map(|r| r.county.as_str()).collect();

    json!({
        "data": [{
            "type": "choropleth",
            "geojson": boundaries.as_json(),
            "featureidkey": "properties.id",
            "locations": locations,
            "z": values,
            "text": names,
            "hovertemplate": "%{text}<br>Population=%{z}<extra></extra>",
            "colorscale": theme.plotly_colorscale(),
            "zmin": 0,
            "zmax": max_population(records),
            "colorbar": { "title": { "text": "Population" } }
        }],
        "layout": {
            "template": "plotly_dark",
            "font": { "color": "#fafafa" },
            "geo": {
                "scope": "africa",
                "fitbounds": "locations",
                "visible": false,
                "bgcolor": "rgba(0, 0, 0, 0)"
            },
            "plot_bgcolor": "rgba(0, 0, 0, 0)",
            "paper_bgcolor": "rgba(0, 0, 0, 0)",
            "margin": { "l": 0, "r": 0, "t": 0, "b": 0 },
            "height": MAP_HEIGHT
        }
    })
}
