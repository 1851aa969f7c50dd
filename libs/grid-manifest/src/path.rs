//! Dotted-path access into manifest trees.

use serde_json::{Map, Value};

/// Resolve a dotted path such as `"capabilities.appium.deviceName"`
/// against a JSON object tree. Only object fields are traversed; a path
/// through anything else resolves to `None`.
pub fn value_at<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = map.get(segments.next()?)?;

    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}
