// Centralized ingestion caps and fixed plot constants

// Payload caps
pub const MAX_IQ_POINTS: usize = 1_000_000;
pub const MAX_TRACK_POINTS: usize = 100_000;

// Constellation autoscale
pub const SCALE_FLOOR: f64 = 2.0; // keeps unit-magnitude schemes from collapsing to the center
pub const SCALE_PADDING: f64 = 1.2;

// Skyplot
pub const ZENITH_DEG: f64 = 90.0;
pub const ELEVATION_RINGS: [f64; 3] = [0.0, 30.0, 60.0];
pub const COMPASS: [(f64, &str); 4] = [(0.0, "N"), (90.0, "E"), (180.0, "S"), (270.0, "W")];

#[inline]
pub fn within_iq_cap(n: usize) -> bool { n <= MAX_IQ_POINTS }

#[inline]
pub fn within_track_cap(n: usize) -> bool { n <= MAX_TRACK_POINTS }
