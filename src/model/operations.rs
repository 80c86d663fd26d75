//! Operation enumeration: the flat, labeled list users pick from.

use crate::model::DerivePolicy;
use crate::spec::{Document, Method, Operation};

/// One selectable entry. Borrows the operation from the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationItem<'a> {
    pub path: &'a str,
    pub method: Method,
    pub operation: &'a Operation,
}

impl OperationItem<'_> {
    pub fn label(&self) -> String {
        operation_label(self.path, self.method)
    }

    /// Case-insensitive substring search over the label; empty query matches.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty()
            || self
                .label()
                .to_lowercase()
                .contains(&query.to_lowercase())
    }
}

/// "{path} ({METHOD})"
pub fn operation_label(path: &str, method: Method) -> String {
    format!("{} ({})", path, method.upper())
}

/// Walk paths in document order; within a path, follow the policy's method order.
pub fn enumerate<'a>(document: &'a Document, policy: &DerivePolicy) -> Vec<OperationItem<'a>> {
    let mut items = Vec::new();
    for (path, item) in &document.paths {
        for &method in &policy.methods {
            if let Some(operation) = item.operation(method) {
                items.push(OperationItem {
                    path,
                    method,
                    operation,
                });
            }
        }
    }
    items
}

/// Resolve a label to its item. Only labels `enumerate` produces resolve, so
/// the selectable set is exactly the listed one.
pub fn find_by_label<'a>(
    document: &'a Document,
    policy: &DerivePolicy,
    label: &str,
) -> Option<OperationItem<'a>> {
    enumerate(document, policy)
        .into_iter()
        .find(|item| item.label() == label)
}
