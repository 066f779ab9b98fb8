//! Observability for Wayfinder.
//! `tracing` crate with `EnvFilter`, configured through `WAYFINDER_LOG`.

pub mod setup;

pub use setup::init_tracing;
