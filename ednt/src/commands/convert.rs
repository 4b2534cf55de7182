//! Convert command implementation.
//!
//! Normalizes an EDN file and emits JSON. The mapping is lossy where
//! JSON is poorer than EDN:
//!
//! - keywords and symbols become plain strings
//! - rationals render as `"N/D"` strings
//! - integers outside the i64 range and non-finite floats degrade to
//!   strings
//! - metadata annotations are dropped, keeping the annotated value
//! - map keys must normalize to scalars
//!
//! A file with one top-level form becomes that JSON value; several forms
//! become a JSON array.

use std::path::PathBuf;

use tracing::debug;

use ednr::{normalize, Handlers, HostValue};

use crate::config::Config;
use crate::error::{EdntError, Result};

/// Arguments for the convert command.
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// File to convert.
    pub file: PathBuf,

    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,

    /// Substitute unhandled tagged values with their payload.
    pub ignore_tags: bool,
}

/// Runs the convert command.
pub fn run_convert(args: ConvertArgs, config: &Config) -> Result<()> {
    debug!(path = %args.file.display(), "converting");

    let values = ednr::parse_file(&args.file)?;

    let mut handlers = Handlers::new();
    handlers.set_discard(config.convert.discard_behavior()?);
    if args.ignore_tags || config.convert.ignore_tags {
        handlers.set_fallback(|_, payload, _| Ok(payload));
    }

    let mut converted = Vec::with_capacity(values.len());
    for value in &values {
        let host = normalize(value, &handlers).map_err(ednr::Error::from)?;
        converted.push(to_json(&host)?);
    }

    let json = if converted.len() == 1 {
        converted.into_iter().next().unwrap_or(serde_json::Value::Null)
    } else {
        serde_json::Value::Array(converted)
    };
    let rendered = serde_json::to_string_pretty(&json)?;

    match &args.output {
        Some(path) => std::fs::write(path, rendered + "\n")?,
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Maps a normalized value onto JSON.
fn to_json(host: &HostValue) -> Result<serde_json::Value> {
    use serde_json::Value as Json;

    Ok(match host {
        HostValue::Nil => Json::Null,
        HostValue::Bool(b) => Json::Bool(*b),
        HostValue::Integer(n) => match i64::try_from(n.clone()) {
            Ok(small) => Json::from(small),
            Err(_) => Json::String(n.to_string()),
        },
        HostValue::Float(x) => match serde_json::Number::from_f64(*x) {
            Some(number) => Json::Number(number),
            None => Json::String(render_nonfinite(*x).to_string()),
        },
        HostValue::Rational(r) => Json::String(r.to_string()),
        HostValue::String(s) => Json::String(s.clone()),
        HostValue::Keyword(name) | HostValue::Symbol(name) => Json::String(name.clone()),
        HostValue::Seq(items) => Json::Array(
            items
                .iter()
                .map(to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        HostValue::Set(set) => Json::Array(
            set.iter()
                .map(to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        HostValue::Map(map) => {
            let mut object = serde_json::Map::with_capacity(map.len());
            for (key, value) in map {
                object.insert(key_string(key)?, to_json(value)?);
            }
            Json::Object(object)
        },
        HostValue::Meta(value, _) => to_json(value)?,
    })
}

/// Renders a scalar map key as a JSON object key.
fn key_string(key: &HostValue) -> Result<String> {
    match key {
        HostValue::Nil => Ok("nil".to_string()),
        HostValue::Bool(b) => Ok(b.to_string()),
        HostValue::Integer(n) => Ok(n.to_string()),
        HostValue::Float(x) => Ok(x.to_string()),
        HostValue::Rational(r) => Ok(r.to_string()),
        HostValue::String(s) => Ok(s.clone()),
        HostValue::Keyword(name) | HostValue::Symbol(name) => Ok(name.clone()),
        other => Err(EdntError::Validation(format!(
            "map key is not representable as a JSON object key: {other:?}"
        ))),
    }
}

fn render_nonfinite(x: f64) -> &'static str {
    if x.is_nan() {
        "##NaN"
    } else if x > 0.0 {
        "##Inf"
    } else {
        "##-Inf"
    }
}
