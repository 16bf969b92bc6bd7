use chrono::{DateTime, Utc};
use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// # Errors
///
/// Will return `Err` if the value is not an RFC 3339 timestamp
pub fn check_rfc3339(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("'{value}' is not an RFC 3339 timestamp: {e}"))
}

/// Validate the top level of the snapshot file.
/// format we expect is this:
/// { "tours": [...], "tourCards": [...], "tournaments": [...], "tiers": [...], "teams": [...],
///   "pickPools": {...}, "playoff": {...} }
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(object) = json.as_object() else {
        return Err("The snapshot file is not in the correct format. Expected an object.".to_string());
    };

    let array_keys = ["tours", "tourCards", "tournaments", "tiers", "teams"];
    let object_keys = ["pickPools", "playoff"];
    for (key, value) in object {
        if array_keys.contains(&key.as_str()) {
            if !value.is_array() {
                return Err(format!(
                    "The json key {key} is not in the correct format. Expected an array."
                ));
            }
        } else if object_keys.contains(&key.as_str()) {
            if !value.is_object() && !value.is_null() {
                return Err(format!(
                    "The json key {key} is not in the correct format. Expected an object."
                ));
            }
        } else {
            return Err(format!(
                "The snapshot file is not in the correct format. Unexpected key {key}, expected keys: {array_keys:?} {object_keys:?}"
            ));
        }
    }

    if !object.contains_key("tourCards") {
        return Err("The snapshot file has no tourCards.".to_string());
    }
    Ok(())
}
