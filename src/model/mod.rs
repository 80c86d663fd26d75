//! Derivation model: which operations are offered and which fields each one gets.

pub mod fields;
pub mod operations;
pub mod policy;

pub use fields::{FormField, InputKind, Provenance, derive_fields};
pub use operations::{OperationItem, enumerate, find_by_label};
pub use policy::DerivePolicy;
