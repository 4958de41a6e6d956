use crate::model::{palette, Color, MarkerShape};
use serde::{Deserialize, Serialize};

/// Appearance of the constellation plot. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationStyle {
    pub marker_shape: MarkerShape,
    /// Half of the marker's side (square) or its radius (circle), in px.
    pub marker_radius: f64,
    pub marker_color: Color,
    pub background: Color,
    pub grid_color: Color,
}

impl Default for ConstellationStyle {
    fn default() -> Self {
        ConstellationStyle {
            marker_shape: MarkerShape::Square,
            marker_radius: 1.5,
            marker_color: palette::IQ_MARKER,
            background: palette::BACKGROUND,
            grid_color: palette::GRID,
        }
    }
}

/// Geometry and colors of the skyplot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyplotStyle {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    /// Distance of the compass labels beyond the rim.
    pub label_offset: f64,
    pub grid_color: Color,
    pub label_color: Color,
    pub path_color: Color,
    pub path_width: f64,
    pub aos_color: Color,
    pub los_color: Color,
    pub endpoint_radius: f64,
    pub endpoint_font_size: f64,
}

impl Default for SkyplotStyle {
    fn default() -> Self {
        SkyplotStyle {
            width: 400.0,
            height: 400.0,
            margin: 40.0,
            label_offset: 15.0,
            grid_color: palette::GRID,
            label_color: palette::LABEL,
            path_color: palette::TRACK,
            path_width: 2.0,
            aos_color: palette::AOS,
            los_color: palette::LOS,
            endpoint_radius: 4.0,
            endpoint_font_size: 10.0,
        }
    }
}

impl SkyplotStyle {
    /// Horizon radius in px.
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0 - self.margin
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}
