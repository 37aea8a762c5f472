pub mod handlers;
pub mod router;
pub mod trace_layer;
