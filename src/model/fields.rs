//! Form field derivation for a single operation.
//!
//! Output order is fixed and consumers render it as-is:
//! 1) query and path parameters (source order)
//! 2) header parameters (source order), from a second pass over the same list
//! 3) body properties of the policy's media type (schema property order)
//!
//! Absent or malformed pieces contribute nothing; derivation never fails.
//! Names are not deduplicated across sources.

use crate::model::DerivePolicy;
use crate::spec::{Location, Operation, Parameter};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Query,
    Path,
    Header,
    Body,
}

impl Provenance {
    pub fn as_str(self) -> &'static str {
        match self {
            Provenance::Query => "query",
            Provenance::Path => "path",
            Provenance::Header => "header",
            Provenance::Body => "body",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub input_type: InputKind,
    pub required: bool,
    pub provenance: Provenance,
}

impl FormField {
    fn text(name: &str, required: bool, provenance: Provenance) -> Self {
        FormField {
            name: name.to_string(),
            input_type: InputKind::Text,
            required,
            provenance,
        }
    }
}

pub fn derive_fields(operation: &Operation, policy: &DerivePolicy) -> Vec<FormField> {
    let mut fields = parameter_fields(&operation.parameters, |loc| match loc {
        Location::Query => Some(Provenance::Query),
        Location::Path => Some(Provenance::Path),
        _ => None,
    });
    fields.extend(parameter_fields(&operation.parameters, |loc| match loc {
        Location::Header => Some(Provenance::Header),
        _ => None,
    }));
    fields.extend(body_fields(operation, &policy.body_media_type));
    fields
}

/// One filter-and-map pass over the parameter list.
fn parameter_fields(
    parameters: &[Parameter],
    select: impl Fn(&Location) -> Option<Provenance>,
) -> Vec<FormField> {
    parameters
        .iter()
        .filter_map(|p| {
            select(&p.location).map(|provenance| FormField::text(&p.name, p.required, provenance))
        })
        .collect()
}

fn body_fields(operation: &Operation, media_type: &str) -> Vec<FormField> {
    let Some(schema) = operation
        .request_body
        .as_ref()
        .and_then(|body| body.media_type(media_type))
        .and_then(|mt| mt.schema.as_ref())
        .filter(|schema| schema.is_object())
    else {
        return Vec::new();
    };

    schema
        .properties
        .iter()
        .flatten()
        .map(|(name, _)| FormField::text(name, schema.is_required(name), Provenance::Body))
        .collect()
}
