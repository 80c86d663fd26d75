//! OpenAPI v3 document model, restricted to what form derivation consumes.
//!
//! JSON shape:
//! {
//!   "info": { "title": "Stripe API" },
//!   "paths": {
//!     "/v1/charges": {
//!       "post": {
//!         "parameters": [{ "name": "expand", "in": "query", "required": false }],
//!         "requestBody": {
//!           "content": {
//!             "application/x-www-form-urlencoded": {
//!               "schema": { "type": "object", "properties": { ... }, "required": [...] }
//!             }
//!           }
//!         }
//!       }
//!     }
//!   }
//! }
//!
//! Building the model never fails on shape: anything that is missing or of the
//! wrong JSON type is treated as absent. Object key order from the source
//! document is kept everywhere (paths, methods, media types, properties).

use crate::spec::Method;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// `info.title`, when present.
    pub title: Option<String>,
    pub paths: Vec<(String, PathItem)>,
}

/// Operations of one path, in source key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    pub operations: Vec<(Method, Operation)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    /// The operation object exactly as it appeared in the document.
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Query,
    Path,
    Header,
    Cookie,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub location: Location,
    pub required: bool,
}

/// Media types in source key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    pub content: Vec<(String, MediaType)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaType {
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    pub type_tag: Option<String>,
    pub properties: Option<Vec<(String, Schema)>>,
    pub required: Vec<String>,
}

impl Document {
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let paths = value
            .get("paths")
            .and_then(Value::as_object)
            .map(|paths| {
                paths
                    .iter()
                    .map(|(path, item)| (path.clone(), PathItem::from_value(item)))
                    .collect()
            })
            .unwrap_or_default();

        let title = value
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Document { title, paths }
    }

    pub fn path(&self, path: &str) -> Option<&PathItem> {
        self.paths.iter().find(|(p, _)| p == path).map(|(_, item)| item)
    }

    /// Look up an operation by its identity (path, method).
    pub fn operation(&self, path: &str, method: Method) -> Option<&Operation> {
        self.path(path).and_then(|item| item.operation(method))
    }
}

impl PathItem {
    fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return PathItem::default();
        };

        // Non-method keys ("parameters", "summary", "servers", ...) are skipped.
        let operations = obj
            .iter()
            .filter_map(|(key, op)| {
                let method = Method::ALL.into_iter().find(|m| m.key() == key)?;
                let op = op.as_object()?;
                Some((method, Operation::from_object(op)))
            })
            .collect();

        PathItem { operations }
    }

    pub fn operation(&self, method: Method) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, op)| op)
    }
}

impl Operation {
    fn from_object(obj: &Map<String, Value>) -> Self {
        let parameters = obj
            .get("parameters")
            .and_then(Value::as_array)
            .map(|params| params.iter().filter_map(Parameter::from_value).collect())
            .unwrap_or_default();

        let request_body = obj.get("requestBody").and_then(RequestBody::from_value);

        Operation {
            parameters,
            request_body,
            raw: Value::Object(obj.clone()),
        }
    }

    pub fn summary(&self) -> Option<&str> {
        self.raw.get("summary").and_then(Value::as_str)
    }
}

impl Location {
    pub fn parse(s: &str) -> Self {
        match s {
            "query" => Location::Query,
            "path" => Location::Path,
            "header" => Location::Header,
            "cookie" => Location::Cookie,
            other => Location::Other(other.to_string()),
        }
    }
}

impl Parameter {
    /// Entries without a non-empty string name are dropped.
    fn from_value(value: &Value) -> Option<Self> {
        let name = value.get("name").and_then(Value::as_str)?;
        if name.is_empty() {
            return None;
        }

        let location = Location::parse(value.get("in").and_then(Value::as_str).unwrap_or(""));
        let required = value
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Some(Parameter {
            name: name.to_string(),
            location,
            required,
        })
    }
}

impl RequestBody {
    /// A body without a `content` object is treated as no body at all.
    fn from_value(value: &Value) -> Option<Self> {
        let content = value.get("content")?.as_object()?;
        let content = content
            .iter()
            .map(|(media_type, obj)| {
                let schema = obj.get("schema").map(Schema::from_value);
                (media_type.clone(), MediaType { schema })
            })
            .collect();
        Some(RequestBody { content })
    }

    pub fn media_type(&self, media_type: &str) -> Option<&MediaType> {
        self.content
            .iter()
            .find(|(mt, _)| mt == media_type)
            .map(|(_, m)| m)
    }
}

impl Schema {
    fn from_value(value: &Value) -> Self {
        let type_tag = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string);

        let properties = value.get("properties").and_then(Value::as_object).map(|props| {
            props
                .iter()
                .map(|(name, s)| (name.clone(), Schema::from_value(s)))
                .collect()
        });

        let required = value
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Schema {
            type_tag,
            properties,
            required,
        }
    }

    pub fn is_object(&self) -> bool {
        self.type_tag.as_deref() == Some("object")
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }
}
