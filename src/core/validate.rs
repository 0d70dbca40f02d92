//! Shape validation of routing service payloads
//!
//! The whole batch is rejected when any element is malformed, so a result
//! set is either complete or absent.

use std::collections::HashSet;

use log::warn;
use serde_json::Value;

use crate::core::error::{Error, Result};
use crate::core::route::RouteOption;

/// Validate a decoded payload into an ordered list of route records
pub fn validate(payload: Value) -> Result<Vec<RouteOption>> {
    let elements = match payload {
        Value::Array(elements) => elements,
        other => {
            return Err(Error::MalformedResponse(format!(
                "expected an array of routes, got {}",
                describe(&other)
            )))
        }
    };

    let mut routes = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        if !element.is_object() {
            return Err(Error::MalformedResponse(format!(
                "route #{index} is {}, expected an object",
                describe(&element)
            )));
        }
        let route: RouteOption = serde_json::from_value(element)
            .map_err(|e| Error::MalformedResponse(format!("route #{index}: {e}")))?;
        routes.push(route);
    }

    let mut seen = HashSet::with_capacity(routes.len());
    for route in &routes {
        if !seen.insert(route.id.as_str()) {
            warn!("Duplicate route id '{}' in routing response", route.id);
        }
    }

    Ok(routes)
}

/// Parse a raw response body and validate it
pub fn validate_body(body: &[u8]) -> Result<Vec<RouteOption>> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| Error::MalformedResponse(format!("body is not JSON: {e}")))?;
    validate(payload)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
