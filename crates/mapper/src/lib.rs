//! `webplate-mapper` — structured mapping of raw JSON into record types.
//!
//! The raw side is `serde_json::Value` (string-keyed mappings as decoded
//! from a request body); the typed side is any record implementing
//! [`FromMapping`]. Coercion rules (temporal hooks, permissive casts) live
//! in [`MapperConfig`] and are injected through the [`Mapper`] value passed
//! to every call — there is no process-global configuration.

pub mod config;
pub mod error;
pub mod map;

pub use config::{MapperConfig, parse_date, parse_datetime, parse_time};
pub use error::{MapError, MapResult};
pub use map::{
    FromMapping, FromValue, Mappable, Mapper, MappingReader, cast_enum, value_type_name,
};

// Re-exported so `impl_record_value!` expansions resolve in downstream crates.
pub use serde_json;
