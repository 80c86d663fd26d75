//! Form presentation helpers shared by the HTML page and the `submit` command.

use crate::Result;
use crate::model::FormField;

use anyhow::{Context, bail};
use regex::Regex;
use std::collections::{BTreeMap, VecDeque};
use std::sync::LazyLock;

/// "{name} - ({PROVENANCE})"
pub fn field_label(field: &FormField) -> String {
    format!(
        "{} - ({})",
        field.name,
        field.provenance.as_str().to_uppercase()
    )
}

static ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([^=]+)=(.*)$").expect("assignment regex"));

/// Parse "NAME=VALUE". The value may be empty and may contain '='.
pub fn parse_assignment(s: &str) -> Result<(String, String)> {
    let caps = ASSIGNMENT_RE
        .captures(s)
        .with_context(|| format!("expected NAME=VALUE, got {:?}", s))?;
    let name = caps[1].trim();
    if name.is_empty() {
        bail!("expected NAME=VALUE, got {:?}", s);
    }
    Ok((name.to_string(), caps[2].to_string()))
}

/// Collect submitted values in field order.
///
/// Every field behaves like its own input: repeated names consume values in the
/// order they were given. A value that was given is kept even when empty, as
/// an empty input still appears in form data; a required field only counts as
/// filled in with a non-empty value. Missing required fields are an error
/// naming all of them; values that match no field are dropped with a warning.
pub fn collect_submission(
    fields: &[FormField],
    values: &[(String, String)],
) -> Result<Vec<(String, String)>> {
    let mut pending: BTreeMap<&str, VecDeque<&str>> = BTreeMap::new();
    for (name, value) in values {
        pending.entry(name.as_str()).or_default().push_back(value.as_str());
    }

    let mut pairs = Vec::new();
    let mut missing = Vec::new();
    for field in fields {
        let value = pending
            .get_mut(field.name.as_str())
            .and_then(VecDeque::pop_front);

        match value {
            Some("") | None if field.required => missing.push(field_label(field)),
            Some(v) => pairs.push((field.name.clone(), v.to_string())),
            None => {}
        }
    }

    for (name, rest) in &pending {
        for value in rest {
            tracing::warn!(name, value, "value does not match any form field; ignored");
        }
    }

    if !missing.is_empty() {
        bail!("missing required fields: {}", missing.join(", "));
    }

    Ok(pairs)
}
