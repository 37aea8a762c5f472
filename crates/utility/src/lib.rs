pub mod shutdown_signal;
