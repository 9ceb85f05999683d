//! Trace loader.
//!
//! Reads the JSON document the verifier writes for an SSA trace.
//! Accepts both the wrapped form `{"steps": [...]}` and a bare array.
//! Expression trees can nest arbitrarily deep, so the loader lifts
//! serde_json's nesting limit and grows the stack on demand.

use super::schema::{Step, Trace};
use crate::utils::error::TraceError;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Load a trace from a JSON file
///
/// **Public** - main entry point for the CLI
///
/// # Errors
/// * `TraceError::ReadFailed` - file cannot be read
/// * `TraceError::JsonError` - file is not valid JSON or does not match the schema
/// * `TraceError::InvalidFormat` - top-level value is neither object nor array
pub fn load_trace(input_path: impl AsRef<Path>) -> Result<Trace, TraceError> {
    let input_path = input_path.as_ref();

    info!("Loading trace from: {}", input_path.display());

    let text = std::fs::read_to_string(input_path).map_err(|source| TraceError::ReadFailed {
        path: input_path.to_path_buf(),
        source,
    })?;

    parse_trace_str(&text)
}

/// Parse trace JSON text
///
/// **Public** - no depth limit on expression trees
pub fn parse_trace_str(text: &str) -> Result<Trace, TraceError> {
    let trace = match text.trim_start().chars().next() {
        Some('{') => from_str_unbounded::<Trace>(text)?,
        Some('[') => {
            debug!("Trace is a bare step array");
            Trace::new(from_str_unbounded::<Vec<Step>>(text)?)
        }
        _ => {
            return Err(TraceError::InvalidFormat(
                "Trace must be a JSON object or array".to_string(),
            ))
        }
    };

    debug!("Parsed {} SSA steps", trace.len());

    Ok(trace)
}

/// Parse an already-decoded JSON value into a trace
///
/// **Public** - useful when the trace is embedded in a larger document
pub fn parse_trace(raw: serde_json::Value) -> Result<Trace, TraceError> {
    let trace = match raw {
        serde_json::Value::Object(_) => serde_json::from_value::<Trace>(raw)?,
        serde_json::Value::Array(_) => Trace::new(serde_json::from_value::<Vec<Step>>(raw)?),
        _ => {
            return Err(TraceError::InvalidFormat(
                "Trace must be a JSON object or array".to_string(),
            ))
        }
    };

    Ok(trace)
}

/// Deserialize without serde_json's recursion limit, on a growable stack
fn from_str_unbounded<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();

    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;

    Ok(value)
}
