//! Donut indicator (Vega-Lite)

use serde_json::{json, Value};

use super::VEGA_LITE_SCHEMA;
use crate::theme::DonutColor;

const DONUT_SIZE: u32 = 130;
const INNER_RADIUS: u32 = 45;

/// Ring showing `percent` as an arc with the value in the center
///
/// Three layers: a full background ring, the foreground arc, and the label.
pub fn make_donut(percent: u32, label: &str, color: DonutColor) -> Value {
    let percent = percent.min(100);
    let range = color.pair();
    let color_encoding = json!({
        "field": "Topic",
        "type": "nominal",
        "scale": { "domain": [label, ""], "range": range },
        "legend": null
    });

    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "width": DONUT_SIZE,
        "height": DONUT_SIZE,
        "layer": [
            {
                "data": { "values": [
                    { "Topic": "", "% value": 100 },
                    { "Topic": label, "% value": 0 }
                ]},
                "mark": { "type": "arc", "innerRadius": INNER_RADIUS, "cornerRadius": 20 },
                "encoding": {
                    "theta": { "field": "% value", "type": "quantitative" },
                    "color": color_encoding
                }
            },
            {
                "data": { "values": [
                    { "Topic": "", "% value": 100 - percent },
                    { "Topic": label, "% value": percent }
                ]},
                "mark": { "type": "arc", "innerRadius": INNER_RADIUS, "cornerRadius": 25 },
                "encoding": {
                    "theta": { "field": "% value", "type": "quantitative" },
                    "color": color_encoding
                }
            },
            {
                "mark": {
                    "type": "text",
                    "align": "center",
                    "color": "#29b5e8",
                    "font": "Lato",
                    "fontSize": 32,
                    "fontWeight": 700,
                    "fontStyle": "italic"
                },
                "encoding": {
                    "text": { "value": format!("{} %", percent) }
                }
            }
        ]
    })
}
