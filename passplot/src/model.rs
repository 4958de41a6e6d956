use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// CSS `rgba(...)` form, alpha in 0..=1.
    pub fn to_css(&self) -> String {
        let a = self.a as f32 / 255.0;
        format!("rgba({},{},{},{})", self.r, self.g, self.b, round3(a))
    }
}

fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}

// Palette shared by the two renderers
pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0xf8, 0xf9, 0xfa);
    pub const GRID: Color = Color::rgb(0xcc, 0xcc, 0xcc);
    pub const LABEL: Color = Color::rgb(0x33, 0x33, 0x33);
    pub const IQ_MARKER: Color = Color::rgba(0, 0, 255, 128);
    pub const TRACK: Color = Color::rgb(0, 0, 255);
    pub const AOS: Color = Color::rgb(0, 128, 0);
    pub const LOS: Color = Color::rgb(255, 0, 0);
}

/// In-phase/quadrature sample. Serialized as `[i, q]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct IqPoint {
    pub i: f64,
    pub q: f64,
}

impl IqPoint {
    pub const fn new(i: f64, q: f64) -> IqPoint {
        IqPoint { i, q }
    }
}

impl From<[f64; 2]> for IqPoint {
    fn from(v: [f64; 2]) -> Self {
        IqPoint { i: v[0], q: v[1] }
    }
}

impl From<IqPoint> for [f64; 2] {
    fn from(p: IqPoint) -> Self {
        [p.i, p.q]
    }
}

impl From<(f64, f64)> for IqPoint {
    fn from((i, q): (f64, f64)) -> Self {
        IqPoint { i, q }
    }
}

/// One sample of a pass, in degrees. Order within a track is temporal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub az: f64,
    pub el: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_km: Option<f64>,
}

impl TrackPoint {
    pub fn new(az: f64, el: f64) -> TrackPoint {
        TrackPoint { az, el, time: None, range_km: None }
    }
}

/// Pass prediction as produced by the pass predictor backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PassTrack {
    #[serde(default)]
    pub aos: Option<String>,
    #[serde(default)]
    pub los: Option<String>,
    #[serde(default)]
    pub max_el: Option<f64>,
    #[serde(default)]
    pub points: Vec<TrackPoint>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    #[default]
    Square,
    Circle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Background {
        width: f64,
        height: f64,
        color: Color,
    },
    GridLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },
    GridCircle {
        cx: f64,
        cy: f64,
        r: f64,
        color: Color,
        dashed: bool,
    },
    AxisLabel {
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },
    Marker {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        shape: MarkerShape,
    },
    Path {
        points: Vec<(f64, f64)>,
        color: Color,
        width: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Color,
        size: f64,
    },
}

impl Primitive {
    pub fn is_marker(&self) -> bool {
        matches!(self, Primitive::Marker { .. })
    }
}
