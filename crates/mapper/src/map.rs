//! Recursive conversion of raw JSON mappings into declared record types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::config::MapperConfig;
use crate::error::{MapError, MapResult};

/// Converts raw JSON mappings into record types, applying the coercion
/// rules of its [`MapperConfig`].
///
/// The mapper is a plain value: clone it freely, pass it by reference.
/// All mapping calls are pure functions of the raw input and the mapper's
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    /// Mapper with the default coercion rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Replace the coercion rules wholesale.
    pub fn set_config(&mut self, config: MapperConfig) {
        self.config = config;
    }

    /// Map a single raw mapping into `T`.
    ///
    /// Fails when `raw` is not an object, a required field is missing, or
    /// a value cannot be coerced to its declared type; no partial record
    /// is ever returned.
    pub fn map_one<T: FromMapping>(&self, raw: &Value) -> MapResult<T> {
        match raw {
            Value::Object(map) => T::from_mapping(map, self),
            other => Err(MapError::shape("object", value_type_name(other))),
        }
    }

    /// Map an ordered sequence of raw mappings, preserving input order.
    ///
    /// Fail-fast: the first element that fails aborts the call, with the
    /// element index prefixed onto the error path.
    pub fn map_many<T: FromMapping>(&self, raws: &[Value]) -> MapResult<Vec<T>> {
        let mut out = Vec::with_capacity(raws.len());
        for (idx, raw) in raws.iter().enumerate() {
            let record = self
                .map_one(raw)
                .map_err(|e| e.at(&format!("[{idx}]")))?;
            out.push(record);
        }
        Ok(out)
    }
}

/// Record types constructible from a raw string-keyed mapping.
///
/// Implementations read their declared fields through a [`MappingReader`];
/// keys present in the raw mapping but not declared on the record are
/// ignored.
pub trait FromMapping: Sized {
    fn from_mapping(raw: &Map<String, Value>, mapper: &Mapper) -> MapResult<Self>;
}

/// Convenience constructors for mappable records.
///
/// Blanket-implemented for every [`FromMapping`] type; pure delegation to
/// [`Mapper::map_one`] / [`Mapper::map_many`], no behavior of its own.
pub trait Mappable: FromMapping {
    fn from_mapping_value(raw: &Value, mapper: &Mapper) -> MapResult<Self> {
        mapper.map_one(raw)
    }

    fn from_mapping_values(raws: &[Value], mapper: &Mapper) -> MapResult<Vec<Self>> {
        mapper.map_many(raws)
    }
}

impl<T: FromMapping> Mappable for T {}

/// Field values constructible from one raw JSON value.
///
/// Implemented here for scalars, temporal types, `Uuid`, `Option<T>` and
/// `Vec<T>`; record types get an impl via [`impl_record_value!`], enum
/// types via [`cast_enum`].
pub trait FromValue: Sized {
    /// Shape name reported when the raw value does not fit.
    const EXPECTED: &'static str;

    fn from_value(value: &Value, mapper: &Mapper) -> MapResult<Self>;
}

/// Reads declared fields out of one raw mapping, attaching field-path
/// context to failures.
pub struct MappingReader<'a> {
    raw: &'a Map<String, Value>,
    mapper: &'a Mapper,
}

impl<'a> MappingReader<'a> {
    pub fn new(raw: &'a Map<String, Value>, mapper: &'a Mapper) -> Self {
        Self { raw, mapper }
    }

    /// Read a required field; absence is a [`MapError::MissingField`].
    pub fn require<T: FromValue>(&self, field: &str) -> MapResult<T> {
        match self.raw.get(field) {
            Some(value) => T::from_value(value, self.mapper).map_err(|e| e.at(field)),
            None => Err(MapError::missing(field)),
        }
    }

    /// Read an optional field; absent or null yields `None`.
    pub fn optional<T: FromValue>(&self, field: &str) -> MapResult<Option<T>> {
        match self.raw.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_value(value, self.mapper)
                .map(Some)
                .map_err(|e| e.at(field)),
        }
    }
}

/// JSON shape name used in error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn shape_of<T: FromValue>(found: &Value) -> MapError {
    MapError::shape(T::EXPECTED, value_type_name(found))
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value, _: &Mapper) -> MapResult<Self> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(shape_of::<Self>(other)),
        }
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_value(value: &Value, _: &Mapper) -> MapResult<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(shape_of::<Self>(other)),
        }
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_value(value: &Value, _: &Mapper) -> MapResult<Self> {
        value.as_f64().ok_or_else(|| shape_of::<Self>(value))
    }
}

macro_rules! impl_int_from_value {
    ($($t:ty),* $(,)?) => {$(
        impl FromValue for $t {
            const EXPECTED: &'static str = "integer";

            fn from_value(value: &Value, _: &Mapper) -> MapResult<Self> {
                let n = value.as_i64().ok_or_else(|| shape_of::<Self>(value))?;
                <$t>::try_from(n).map_err(|_| {
                    MapError::conversion(format!(
                        "integer {n} out of range for {}",
                        stringify!($t)
                    ))
                })
            }
        }
    )*};
}

impl_int_from_value!(i64, i32, i16, u32, u16);

impl FromValue for u64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: &Value, _: &Mapper) -> MapResult<Self> {
        match value.as_u64() {
            Some(n) => Ok(n),
            None if value.is_i64() => Err(MapError::conversion(format!(
                "integer {value} out of range for u64"
            ))),
            None => Err(shape_of::<Self>(value)),
        }
    }
}

impl FromValue for NaiveDate {
    const EXPECTED: &'static str = "date string";

    fn from_value(value: &Value, mapper: &Mapper) -> MapResult<Self> {
        match value {
            Value::String(s) => (mapper.config().date_hook)(s),
            other => Err(shape_of::<Self>(other)),
        }
    }
}

impl FromValue for NaiveDateTime {
    const EXPECTED: &'static str = "date-time string";

    fn from_value(value: &Value, mapper: &Mapper) -> MapResult<Self> {
        match value {
            Value::String(s) => (mapper.config().datetime_hook)(s),
            other => Err(shape_of::<Self>(other)),
        }
    }
}

impl FromValue for NaiveTime {
    const EXPECTED: &'static str = "time string";

    fn from_value(value: &Value, mapper: &Mapper) -> MapResult<Self> {
        match value {
            Value::String(s) => (mapper.config().time_hook)(s),
            other => Err(shape_of::<Self>(other)),
        }
    }
}

impl FromValue for DateTime<Utc> {
    const EXPECTED: &'static str = "date-time string";

    fn from_value(value: &Value, mapper: &Mapper) -> MapResult<Self> {
        match value {
            Value::String(s) => match DateTime::parse_from_rfc3339(s) {
                Ok(dt) => Ok(dt.with_timezone(&Utc)),
                // Offset-less timestamps go through the configured hook
                // and are taken as UTC.
                Err(_) => (mapper.config().datetime_hook)(s).map(|dt| dt.and_utc()),
            },
            other => Err(shape_of::<Self>(other)),
        }
    }
}

impl FromValue for Uuid {
    const EXPECTED: &'static str = "UUID string";

    fn from_value(value: &Value, mapper: &Mapper) -> MapResult<Self> {
        match value {
            Value::String(s) if mapper.config().cast_uuid_strings => Uuid::parse_str(s)
                .map_err(|_| MapError::conversion(format!("invalid UUID `{s}`"))),
            Value::String(_) => Err(MapError::conversion(
                "UUID casting from strings is disabled",
            )),
            other => Err(shape_of::<Self>(other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_value(value: &Value, mapper: &Mapper) -> MapResult<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other, mapper).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn from_value(value: &Value, mapper: &Mapper) -> MapResult<Self> {
        match value {
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    let element = T::from_value(item, mapper)
                        .map_err(|e| e.at(&format!("[{idx}]")))?;
                    out.push(element);
                }
                Ok(out)
            }
            other => Err(shape_of::<Self>(other)),
        }
    }
}

/// Permissive enum cast.
///
/// Accepts exactly the enum's serde representation — the member name under
/// its declared renaming, or its declared value form — and nothing else.
/// Honors [`MapperConfig::cast_enum_values`].
pub fn cast_enum<E: DeserializeOwned>(value: &Value, mapper: &Mapper) -> MapResult<E> {
    if !mapper.config().cast_enum_values {
        return Err(MapError::conversion("enum casting is disabled"));
    }
    serde_json::from_value(value.clone())
        .map_err(|e| MapError::conversion(format!("no matching enum member: {e}")))
}

/// Wire a record's [`FromValue`] impl to its [`FromMapping`] impl so the
/// record can appear as a nested field or a sequence element.
#[macro_export]
macro_rules! impl_record_value {
    ($($t:ty),* $(,)?) => {$(
        impl $crate::FromValue for $t {
            const EXPECTED: &'static str = "object";

            fn from_value(
                value: &$crate::serde_json::Value,
                mapper: &$crate::Mapper,
            ) -> $crate::MapResult<Self> {
                match value {
                    $crate::serde_json::Value::Object(map) => {
                        <$t as $crate::FromMapping>::from_mapping(map, mapper)
                    }
                    other => Err($crate::MapError::Shape {
                        path: String::new(),
                        expected: "object",
                        found: $crate::value_type_name(other),
                    }),
                }
            }
        }
    )*};
}
