//! Conversion between the `shipwright.io/v1alpha1` and `shipwright.io/v1beta1`
//! representations of Build, BuildRun and BuildStrategy.
//!
//! Field rules in [`fields`] are composed by the object converters in
//! [`objects`]; [`dispatcher::convert`] picks the converter for an untyped
//! document and a desired API version.

pub mod dispatcher;
pub mod error;
pub mod fields;
pub mod objects;
pub mod options;

pub use dispatcher::{ConversionKey, convert};
pub use error::ConversionError;
pub use options::{ConversionOptions, DecodePolicy};
