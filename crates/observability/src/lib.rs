//! `webplate-observability` — shared tracing/logging setup for services
//! embedding this library.

pub mod logging;

pub use logging::{init, init_with_filter};
