//! Value model for debug dumps.
//!
//! Everything the serializer renders passes through [`Value`], a closed
//! tagged-variant tree covering the shapes a running application can hand to
//! a debugger: scalars, ordered sequences, keyed mappings, and named
//! structured objects. Native Rust values are converted explicitly, either
//! through the `From` impls and the [`Value::seq`]/[`Value::map`] helpers, or
//! through the [`Inspect`] capability trait for domain types that want to
//! control their own debug rendering.

/// A runtime value prepared for debug rendering.
///
/// Mirrors the value tree of a dynamic runtime but separates integers from
/// floats and uses `Vec<(MapKey, Value)>` for mappings to maintain insertion
/// order without depending on `IndexMap`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
    /// Key-value pairs in insertion order. Keys are unique by producer contract.
    Map(Vec<(MapKey, Value)>),
    /// A named, field-bearing composite (the analogue of an object instance).
    Structured {
        name: String,
        fields: Vec<(String, Value)>,
    },
}

/// A mapping key. String keys render quoted (`'key' =>`), integer keys bare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapKey {
    Str(String),
    Int(i64),
}

impl Value {
    /// Variant name for scalars and containers, or the declared type name for
    /// structured values. Used to tag dump payloads.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "mapping",
            Value::Structured { name, .. } => name,
        }
    }

    /// Builds a sequence from anything iterable over convertible items.
    pub fn seq<I, V>(items: I) -> Value
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a mapping from `(key, value)` pairs, preserving iteration order.
    pub fn map<I, K, V>(entries: I) -> Value
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<MapKey>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Converts a domain type into a [`Value::Structured`] via its
    /// [`Inspect`] capabilities: `debug_fields`, then `as_mapping`, then
    /// `fields`, first hit wins.
    pub fn from_inspect<T: Inspect + ?Sized>(source: &T) -> Value {
        let fields = source
            .debug_fields()
            .or_else(|| source.as_mapping())
            .unwrap_or_else(|| source.fields());
        Value::Structured {
            name: source.type_name().to_string(),
            fields,
        }
    }
}

/// Capability interface for rendering domain types as structured values.
///
/// `fields` is the universal default every implementor supplies: its own
/// publicly visible fields in declaration order. Types with a richer debug
/// representation override `debug_fields`; types with a canonical mapping
/// conversion override `as_mapping`. [`Value::from_inspect`] tries the three
/// in that priority order.
pub trait Inspect {
    /// Declared type name used to tag the rendered value.
    fn type_name(&self) -> &str;

    /// Preferred debug representation, if the type defines one.
    fn debug_fields(&self) -> Option<Vec<(String, Value)>> {
        None
    }

    /// Canonical conversion to a mapping, if the type defines one.
    fn as_mapping(&self) -> Option<Vec<(String, Value)>> {
        None
    }

    /// Publicly visible fields in declaration order.
    fn fields(&self) -> Vec<(String, Value)>;
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Int(i64::from(i))
            }
        })*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(opt: Option<V>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::seq(items)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Str(s.to_string())
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        MapKey::Str(s)
    }
}

impl From<i64> for MapKey {
    fn from(i: i64) -> Self {
        MapKey::Int(i)
    }
}

impl From<i32> for MapKey {
    fn from(i: i32) -> Self {
        MapKey::Int(i64::from(i))
    }
}
