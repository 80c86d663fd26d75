use crate::spec::Method;
use serde::{Deserialize, Serialize};

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Which operations are listed and which request body media type feeds the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivePolicy {
    /// Method slots inspected per path, in listing order.
    #[serde(default = "DerivePolicy::default_methods")]
    pub methods: Vec<Method>,

    /// The only request body media type whose schema yields body fields.
    #[serde(default = "DerivePolicy::default_body_media_type")]
    pub body_media_type: String,
}

impl Default for DerivePolicy {
    fn default() -> Self {
        Self {
            methods: Self::default_methods(),
            body_media_type: Self::default_body_media_type(),
        }
    }
}

impl DerivePolicy {
    fn default_methods() -> Vec<Method> {
        vec![Method::Post, Method::Get, Method::Put, Method::Delete]
    }

    fn default_body_media_type() -> String {
        FORM_URLENCODED.to_string()
    }
}
