//! Page data: everything the HTML form page needs, precomputed and serializable.

use crate::model::{self, DerivePolicy, FormField, InputKind, Provenance};
use crate::render::form::field_label;
use crate::spec::Document;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub input_type: InputKind,
    pub required: bool,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationView<'a> {
    pub label: String,
    pub summary: Option<&'a str>,
    pub fields: Vec<FieldView>,
    /// Raw operation object for the inspector.
    pub operation: &'a Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageData<'a> {
    pub title: String,
    pub source: String,
    pub operations: Vec<OperationView<'a>>,
}

impl From<&FormField> for FieldView {
    fn from(field: &FormField) -> Self {
        FieldView {
            name: field.name.clone(),
            label: field_label(field),
            input_type: field.input_type,
            required: field.required,
            provenance: field.provenance,
        }
    }
}

pub fn build_page_data<'a>(
    document: &'a Document,
    policy: &DerivePolicy,
    source: &str,
) -> PageData<'a> {
    let operations = model::enumerate(document, policy)
        .into_iter()
        .map(|item| OperationView {
            label: item.label(),
            summary: item.operation.summary(),
            fields: model::derive_fields(item.operation, policy)
                .iter()
                .map(FieldView::from)
                .collect(),
            operation: &item.operation.raw,
        })
        .collect();

    PageData {
        title: document.title.clone().unwrap_or_else(|| "API".to_string()),
        source: source.to_string(),
        operations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn one_view_per_listed_operation() {
        let doc = Document::from_value(&json!({
            "info": { "title": "Stripe API" },
            "paths": {
                "/v1/charges": {
                    "get": { "summary": "List charges", "parameters": [
                        { "name": "limit", "in": "query" }
                    ] },
                    "post": { "requestBody": { "content": {
                        "application/x-www-form-urlencoded": { "schema": {
                            "type": "object",
                            "properties": { "amount": {} },
                            "required": ["amount"]
                        } }
                    } } },
                    "patch": {}
                }
            }
        }));

        let page = build_page_data(&doc, &DerivePolicy::default(), "spec3.json");
        assert_eq!(page.title, "Stripe API");
        let labels: Vec<&str> = page.operations.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["/v1/charges (POST)", "/v1/charges (GET)"]);

        let post = &page.operations[0];
        assert_eq!(post.fields.len(), 1);
        assert_eq!(post.fields[0].label, "amount - (BODY)");
        assert!(post.fields[0].required);

        let get = &page.operations[1];
        assert_eq!(get.summary, Some("List charges"));
        assert_eq!(get.fields[0].label, "limit - (QUERY)");
        assert_eq!(get.operation["parameters"][0]["name"], "limit");
    }

    #[test]
    fn serializes_lower_case_tags() {
        let doc = Document::from_value(&json!({
            "paths": { "/x": { "get": { "parameters": [
                { "name": "X-Key", "in": "header", "required": true }
            ] } } }
        }));
        let page = build_page_data(&doc, &DerivePolicy::default(), "x.json");
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(page.title, "API");
        assert_eq!(
            json["operations"][0]["fields"][0],
            json!({
                "name": "X-Key",
                "label": "X-Key - (HEADER)",
                "input_type": "text",
                "required": true,
                "provenance": "header"
            })
        );
    }
}
