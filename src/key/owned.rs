//! Owned scalar key value.
//!
//! `KeyValue` is the unit stored at every level of a
//! [`CompositeKeyIndex`](crate::CompositeKeyIndex). Numbers compare by value: integral
//! floats fold into the integer variants, so `1`, `1.0` and `1e0` are the same key. The
//! remaining floats are kept as IEEE bits so the type can be `Eq + Hash`; every NaN folds
//! into one canonical NaN.

use std::fmt;

use serde::{Serialize, Serializer};

/// Owned scalar value of a single key column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum KeyValue {
    /// Explicit null. Lookups treat an absent column as this value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value too large for [`KeyValue::Int`].
    UInt(u64),
    /// Non-integral (or out of integer range) float stored as canonical IEEE bits.
    Float(u64),
    /// UTF-8 string value.
    Utf8(String),
}

impl KeyValue {
    /// Build a numeric value from a float.
    ///
    /// Integral values within `i64`/`u64` range become [`KeyValue::Int`] or
    /// [`KeyValue::UInt`] (so `-0.0` becomes `Int(0)`); NaN payloads are canonicalized.
    pub fn float(value: f64) -> Self {
        // 2^63 and 2^64, both exact in f64.
        const I64_END: f64 = 9_223_372_036_854_775_808.0;
        const U64_END: f64 = 18_446_744_073_709_551_616.0;

        if value.is_nan() {
            return KeyValue::Float(f64::NAN.to_bits());
        }
        if value.is_finite() && value.fract() == 0.0 {
            if (-I64_END..I64_END).contains(&value) {
                return KeyValue::Int(value as i64);
            }
            if (I64_END..U64_END).contains(&value) {
                return KeyValue::UInt(value as u64);
            }
        }
        KeyValue::Float(value.to_bits())
    }

    /// Returns the value as `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            KeyValue::Int(v) => Some(*v as f64),
            KeyValue::UInt(v) => Some(*v as f64),
            KeyValue::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Null => f.write_str("null"),
            KeyValue::Bool(v) => write!(f, "{v}"),
            KeyValue::Int(v) => write!(f, "{v}"),
            KeyValue::UInt(v) => write!(f, "{v}"),
            KeyValue::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            KeyValue::Utf8(v) => f.write_str(v),
        }
    }
}

impl Serialize for KeyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            KeyValue::Null => serializer.serialize_unit(),
            KeyValue::Bool(v) => serializer.serialize_bool(*v),
            KeyValue::Int(v) => serializer.serialize_i64(*v),
            KeyValue::UInt(v) => serializer.serialize_u64(*v),
            KeyValue::Float(bits) => serializer.serialize_f64(f64::from_bits(*bits)),
            KeyValue::Utf8(v) => serializer.serialize_str(v),
        }
    }
}

impl From<&str> for KeyValue {
    fn from(value: &str) -> Self {
        KeyValue::Utf8(value.to_owned())
    }
}

impl From<String> for KeyValue {
    fn from(value: String) -> Self {
        KeyValue::Utf8(value)
    }
}

impl From<f64> for KeyValue {
    fn from(value: f64) -> Self {
        KeyValue::float(value)
    }
}

impl From<f32> for KeyValue {
    fn from(value: f32) -> Self {
        KeyValue::float(f64::from(value))
    }
}

impl From<u64> for KeyValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => KeyValue::Int(v),
            Err(_) => KeyValue::UInt(value),
        }
    }
}

impl<T: Into<KeyValue>> From<Option<T>> for KeyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(KeyValue::Null, Into::into)
    }
}

macro_rules! impl_from_scalar {
    ($variant:ident, $t:ty, $map:expr) => {
        impl From<$t> for KeyValue {
            fn from(value: $t) -> Self {
                KeyValue::$variant($map(value))
            }
        }
    };
}

impl_from_scalar!(Bool, bool, |v| v);
impl_from_scalar!(Int, i8, i64::from);
impl_from_scalar!(Int, i16, i64::from);
impl_from_scalar!(Int, i32, i64::from);
impl_from_scalar!(Int, i64, |v| v);
impl_from_scalar!(Int, u8, i64::from);
impl_from_scalar!(Int, u16, i64::from);
impl_from_scalar!(Int, u32, i64::from);
