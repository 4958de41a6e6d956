use crate::error::{RenderError, Result};
use crate::geometry::limits;
use crate::model::{IqPoint, PassTrack, TrackPoint};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Shapes the IQ generator response can take.
///
/// Deserializable from any serde source, so callers that hold the payload as
/// something other than JSON text (a JS object, for one) keep non-finite
/// samples intact.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum IqPayload {
    Points(Vec<IqPoint>),
    Response {
        #[serde(default)]
        iq_data: Option<Vec<IqPoint>>,
        #[serde(default)]
        error: Option<String>,
    },
}

/// Pass predictor response, or a bare array of `{az, el}` records.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PassPayload {
    Points(Vec<TrackPoint>),
    Pass(PassTrack),
}

/// Validates an IQ payload: a backend `{"error": ...}` becomes
/// `backend_error`, and the point cap is enforced.
pub fn ingest_iq(payload: IqPayload) -> Result<Vec<IqPoint>> {
    let pts = match payload {
        IqPayload::Points(pts) => pts,
        IqPayload::Response { error: Some(msg), .. } => {
            return Err(RenderError::payload("backend_error", msg))
        }
        IqPayload::Response { iq_data, .. } => {
            iq_data.ok_or_else(|| RenderError::payload("json_parse", "missing field `iq_data`"))?
        }
    };
    check_iq_cap(pts)
}

/// Parses the IQ generator response `{"iq_data": [[i, q], ...]}`.
///
/// A response of the form `{"error": "..."}` is surfaced as `backend_error`.
/// A bare array of pairs is accepted as well.
pub fn parse_iq_payload(v: Value) -> Result<Vec<IqPoint>> {
    let payload: IqPayload =
        serde_json::from_value(v).map_err(|e| RenderError::payload("json_parse", e.to_string()))?;
    ingest_iq(payload)
}

fn check_iq_cap(pts: Vec<IqPoint>) -> Result<Vec<IqPoint>> {
    if !limits::within_iq_cap(pts.len()) {
        return Err(RenderError::payload(
            "caps_exceeded",
            format!("iq_points>{}", limits::MAX_IQ_POINTS),
        ));
    }
    debug!("ingested {} iq points", pts.len());
    Ok(pts)
}

pub fn ingest_pass(payload: PassPayload) -> Result<PassTrack> {
    let pass = match payload {
        PassPayload::Points(points) => PassTrack { points, ..Default::default() },
        PassPayload::Pass(pass) => pass,
    };
    if !limits::within_track_cap(pass.points.len()) {
        return Err(RenderError::payload(
            "caps_exceeded",
            format!("track_points>{}", limits::MAX_TRACK_POINTS),
        ));
    }
    debug!("ingested pass with {} points", pass.points.len());
    Ok(pass)
}

/// Parses the pass predictor response.
///
/// `{"message": "No pass found ..."}` has no points and yields an empty
/// track; the skyplot rejects it when drawn. A bare array of `{az, el}`
/// records is also accepted.
pub fn parse_pass_payload(v: Value) -> Result<PassTrack> {
    let payload: PassPayload =
        serde_json::from_value(v).map_err(|e| RenderError::payload("json_parse", e.to_string()))?;
    ingest_pass(payload)
}
