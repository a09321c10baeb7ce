//! Color Themes
//!
//! The fixed set of continuous color scales a user can pick for the map and
//! heatmap, and the color pairs used by the migration donuts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Continuous color scale applied to the choropleth and the heatmap
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Blues,
    Cividis,
    Greens,
    Inferno,
    Magma,
    Plasma,
    Reds,
    Rainbow,
    Turbo,
    Viridis,
}

impl ColorTheme {
    /// All themes in selector order
    pub fn all() -> &'static [ColorTheme] {
        &[
            ColorTheme::Blues,
            ColorTheme::Cividis,
            ColorTheme::Greens,
            ColorTheme::Inferno,
            ColorTheme::Magma,
            ColorTheme::Plasma,
            ColorTheme::Reds,
            ColorTheme::Rainbow,
            ColorTheme::Turbo,
            ColorTheme::Viridis,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorTheme::Blues => "blues",
            ColorTheme::Cividis => "cividis",
            ColorTheme::Greens => "greens",
            ColorTheme::Inferno => "inferno",
            ColorTheme::Magma => "magma",
            ColorTheme::Plasma => "plasma",
            ColorTheme::Reds => "reds",
            ColorTheme::Rainbow => "rainbow",
            ColorTheme::Turbo => "turbo",
            ColorTheme::Viridis => "viridis",
        }
    }

    /// Vega color scheme name; Vega ships every theme under the same name
    pub fn vega_scheme(&self) -> &'static str {
        self.name()
    }

    /// Color stops from low to high
    pub fn palette(&self) -> &'static [&'static str] {
        match self {
            ColorTheme::Blues => &[
                "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5",
                "#08519c", "#08306b",
            ],
            ColorTheme::Cividis => &[
                "#00224e", "#123570", "#3b496c", "#575d6d", "#707173", "#8a8678", "#a59c74",
                "#c3b369", "#e1cc55", "#fee838",
            ],
            ColorTheme::Greens => &[
                "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45",
                "#006d2c", "#00441b",
            ],
            ColorTheme::Inferno => &[
                "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60", "#cf4446", "#ed6925",
                "#fb9b06", "#f7d13d", "#fcffa4",
            ],
            ColorTheme::Magma => &[
                "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f", "#cd4071", "#f1605d",
                "#fd9668", "#feca8d", "#fcfdbf",
            ],
            ColorTheme::Plasma => &[
                "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953",
                "#fb9f3a", "#fdca26", "#f0f921",
            ],
            ColorTheme::Reds => &[
                "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d",
                "#a50f15", "#67000d",
            ],
            ColorTheme::Rainbow => &[
                "#96005a", "#0000c8", "#0019ff", "#0098ff", "#2cff96", "#97ff00", "#ffea00",
                "#ff6f00", "#ff0000",
            ],
            ColorTheme::Turbo => &[
                "#30123b", "#4662d7", "#36aaf9", "#1ae4b6", "#72fe5e", "#c8ef34", "#faba39",
                "#f66b19", "#ca2a04", "#7a0403",
            ],
            ColorTheme::Viridis => &[
                "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779",
                "#6ece58", "#b5de2b", "#fde725",
            ],
        }
    }

    /// Plotly colorscale: palette stops spread evenly over `[0, 1]`
    pub fn plotly_colorscale(&self) -> Vec<(f64, &'static str)> {
        let palette = self.palette();
        let last = (palette.len() - 1) as f64;
        palette
            .iter()
            .enumerate()
            .map(|(i, color)| (i as f64 / last, *color))
            .collect()
    }
}

impl std::fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error for an unrecognized theme name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown color theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for ColorTheme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ColorTheme::all()
            .iter()
            .copied()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Color pair of a donut indicator: filled arc and remainder ring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DonutColor {
    Blue,
    Green,
    Orange,
    Red,
}

impl DonutColor {
    /// `[primary, secondary]` hex colors
    pub fn pair(&self) -> [&'static str; 2] {
        match self {
            DonutColor::Blue => ["#29b5e8", "#155F7A"],
            DonutColor::Green => ["#27AE60", "#12783D"],
            DonutColor::Orange => ["#F39C12", "#875A12"],
            DonutColor::Red => ["#E74C3C", "#781F16"],
        }
    }
}
