//! One conversion rule per field group, in both directions.
//!
//! Every function takes its input by value and is total: fields without a
//! counterpart are dropped and fields the target requires are defaulted.

pub mod output;
pub mod params;
pub mod retention;
pub mod source;
pub mod strategy;
pub mod trigger;
pub mod volumes;
