pub mod observability;
pub mod tls;
