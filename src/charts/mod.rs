//! Kenpop Charts
//!
//! Builds declarative chart documents from metrics output. The documents are
//! rendered in the browser by Vega-Lite (heatmap, donuts) and Plotly
//! (choropleth); nothing is drawn server-side.

pub mod choropleth;
pub mod donut;
pub mod heatmap;

pub use choropleth::make_choropleth;
pub use donut::make_donut;
pub use heatmap::make_heatmap;

/// Vega-Lite schema the specs are written against
pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
