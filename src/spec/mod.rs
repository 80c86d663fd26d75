//! Spec layer: the OpenAPI document model and how it is loaded.
//!
//! This module is intentionally separate from derivation and rendering.
//! It owns:
//! - Method (path item keys)
//! - Document model (paths, operations, parameters, request bodies)
//! - Loading from a URL or a file

pub mod document;
pub mod load;
pub mod method;

pub use document::{Document, Location, Operation, Parameter};
pub use load::{LoadError, SpecSource};
pub use method::Method;
