use js_sys::{Array, Float64Array};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::JsValue;

pub fn arr_f64(slice: &[f64]) -> Float64Array {
    let arr = Float64Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice); arr
}
pub fn dash(pattern: &[f64]) -> Array {
    pattern.iter().map(|v| JsValue::from_f64(*v)).collect()
}

/// `undefined`/`null` style objects mean "all defaults".
pub fn style_or_default<T: DeserializeOwned + Default>(v: JsValue) -> Result<T, String> {
    if v.is_undefined() || v.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(v).map_err(|e| e.to_string())
}

/// Reads a payload straight off the JS value. Numbers stay `f64`, so NaN and
/// the infinities survive.
pub fn from_js<T: DeserializeOwned>(v: JsValue) -> Result<T, String> {
    serde_wasm_bindgen::from_value(v).map_err(|e| e.to_string())
}

pub fn to_js<T: Serialize + ?Sized>(v: &T) -> Result<JsValue, String> {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}
