//! Whole-object converters. Metadata is moved over untouched; only spec and
//! status are rewritten.

pub mod build;
pub mod buildrun;
pub mod buildstrategy;
