pub mod crds;
pub mod error;
pub mod versions;

pub use crds::{v1alpha1, v1beta1};
pub use error::Error;
pub use versions::{ApiVersion, GROUP, ResourceKind};
