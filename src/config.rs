//! Module argument loading and schema validation.
//!
//! Ansible hands a module its parameters as a JSON file whose path is the
//! first command-line argument. JSON is a subset of YAML, so the file is
//! read with `serde_yaml`, which also lets operators hand-write YAML args
//! files when running a module outside of a playbook.

use std::fs;

use camino::Utf8Path;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::adapters::Adapter;
use crate::error::ModuleError;
use crate::serde_helpers::parse_bool;

/// Prefix of keys the host framework injects next to the module parameters.
const HOST_KEY_PREFIX: &str = "_ansible_";

/// A validated module request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<P> {
    /// Validated module parameters.
    pub params: P,
    /// When true, nothing is executed and an unchanged result is returned.
    pub check_mode: bool,
}

/// Reads and validates a module args file.
pub fn load_invocation<P>(path: &Utf8Path) -> Result<Invocation<P>, ModuleError>
where
    P: DeserializeOwned + Adapter,
{
    let content = fs::read_to_string(path).map_err(|e| ModuleError::io(path.as_str(), e))?;
    parse_invocation(&content)
}

/// Parses and validates module arguments from a JSON or YAML document.
///
/// Keys prefixed with `_ansible_` are consumed here rather than passed to
/// the parameter schema; only `_ansible_check_mode` is interpreted. Every
/// other key must belong to the schema of `P`.
pub fn parse_invocation<P>(content: &str) -> Result<Invocation<P>, ModuleError>
where
    P: DeserializeOwned + Adapter,
{
    let document: Value = if content.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(content)
            .map_err(|e| ModuleError::Config(format!("failed to parse module arguments: {}", e)))?
    };

    let Value::Mapping(mapping) = document else {
        return Err(ModuleError::Config(
            "module arguments must be a mapping of parameter names to values".to_string(),
        ));
    };

    let (params, check_mode) = split_host_keys(mapping)?;

    let params: P = serde_yaml::from_value(Value::Mapping(params))
        .map_err(|e| ModuleError::Validation(e.to_string()))?;
    params.validate()?;

    Ok(Invocation { params, check_mode })
}

/// Separates host-framework keys from module parameters.
fn split_host_keys(mapping: Mapping) -> Result<(Mapping, bool), ModuleError> {
    let mut params = Mapping::new();
    let mut check_mode = false;

    for (key, value) in mapping {
        let Some(name) = key.as_str() else {
            return Err(ModuleError::Config(format!(
                "parameter names must be strings, got {:?}",
                key
            )));
        };

        if let Some(host_key) = name.strip_prefix(HOST_KEY_PREFIX) {
            if host_key == "check_mode" {
                check_mode = host_bool(name, &value)?;
            } else {
                debug!("ignoring host key {}", name);
            }
            continue;
        }

        params.insert(key, value);
    }

    Ok((params, check_mode))
}

fn host_bool(name: &str, value: &Value) -> Result<bool, ModuleError> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Null => Some(false),
        Value::String(s) => parse_bool(s),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        _ => None,
    };
    parsed.ok_or_else(|| {
        ModuleError::Validation(format!("{} must be a boolean, got {:?}", name, value))
    })
}
