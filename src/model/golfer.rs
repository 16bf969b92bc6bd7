use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Pick-pool entry for one tournament.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Golfer {
    pub api_id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_int")]
    pub group: Option<u8>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub world_rank: Option<u32>,
    #[serde(default, deserialize_with = "lenient_float")]
    pub rating: Option<f64>,
}

impl Golfer {
    #[must_use]
    pub fn new(api_id: i64, name: impl Into<String>, group: Option<u8>) -> Self {
        Self {
            api_id,
            name: name.into(),
            group,
            world_rank: None,
            rating: None,
        }
    }
}

/// Reads an optional integer, treating anything unusable as absent.
/// Integral floats (`12.0`) and numeric strings are accepted.
fn lenient_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_integer).and_then(|n| T::try_from(n).ok()))
}

fn lenient_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_float).filter(|f| f.is_finite()))
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    let f = as_float(value)?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15).then_some(f as i64)
}
