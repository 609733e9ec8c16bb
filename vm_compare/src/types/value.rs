// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use super::{
    Array, ArrayData, ArrayKind, Class, ClsMeth, Func, Object, Record, Resource, StringData,
};

/// A runtime value: a kind discriminant and its payload.
///
/// Container payloads carry their own [`ArrayKind`]; a value is plausible
/// when that kind agrees with the variant holding it. The constructors of
/// this crate only build plausible values.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Uninit,
    Null,
    Boolean(bool),
    Int64(i64),
    Double(f64),
    String(StringData),

    /// Legacy array.
    Array(Array),
    Vec(Array),
    Dict(Array),
    Keyset(Array),

    Object(Object),
    Resource(Resource),
    Func(Func),
    Class(Class),
    /// A class and one of its methods.
    ClsMeth(ClsMeth),
    Record(Record),

    /// Indirect reference to another value. Never seen by the comparator
    /// itself; the public operations dereference it first.
    Ref(Reference),
}

/// The discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Uninit,
    Null,
    Boolean,
    Int64,
    Double,
    String,
    Array,
    Vec,
    Dict,
    Keyset,
    Object,
    Resource,
    Func,
    Class,
    ClsMeth,
    Record,
    Ref,
}

/// Shared indirection to a value.
#[derive(Debug, Clone)]
pub struct Reference(Arc<Value>);

impl Reference {
    /// Wrapping a reference shares its target instead of nesting it, so a
    /// reference always points at a plain value.
    pub fn new(value: Value) -> Self {
        match value {
            Value::Ref(r) => r,
            value => Self(Arc::new(value)),
        }
    }

    pub fn get(&self) -> &Value {
        &self.0
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Uninit => Kind::Uninit,
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Int64(_) => Kind::Int64,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Vec(_) => Kind::Vec,
            Value::Dict(_) => Kind::Dict,
            Value::Keyset(_) => Kind::Keyset,
            Value::Object(_) => Kind::Object,
            Value::Resource(_) => Kind::Resource,
            Value::Func(_) => Kind::Func,
            Value::Class(_) => Kind::Class,
            Value::ClsMeth(_) => Kind::ClsMeth,
            Value::Record(_) => Kind::Record,
            Value::Ref(_) => Kind::Ref,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Uninit | Value::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Legacy array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Any of the vec, dict and keyset kinds.
    pub fn is_hack_array(&self) -> bool {
        matches!(self, Value::Vec(_) | Value::Dict(_) | Value::Keyset(_))
    }

    /// Checks that the payload agrees with the discriminant.
    pub fn is_plausible(&self) -> bool {
        match self {
            Value::Array(a) => a.kind() == ArrayKind::Legacy,
            Value::Vec(a) => a.kind() == ArrayKind::Vec,
            Value::Dict(a) => a.kind() == ArrayKind::Dict,
            Value::Keyset(a) => a.kind() == ArrayKind::Keyset,
            Value::Ref(r) => !matches!(r.get(), Value::Ref(_)) && r.get().is_plausible(),
            _ => true,
        }
    }

    /// Strips one level of indirection.
    pub fn to_cell(&self) -> &Value {
        match self {
            Value::Ref(r) => r.get(),
            _ => self,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int64(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<StringData> for Value {
    fn from(value: StringData) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        match value.kind() {
            ArrayKind::Legacy => Value::Array(value),
            ArrayKind::Vec => Value::Vec(value),
            ArrayKind::Dict => Value::Dict(value),
            ArrayKind::Keyset => Value::Keyset(value),
        }
    }
}

impl From<ArrayData> for Value {
    fn from(value: ArrayData) -> Self {
        Array::new(value).into()
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Resource> for Value {
    fn from(value: Resource) -> Self {
        Value::Resource(value)
    }
}

impl From<Func> for Value {
    fn from(value: Func) -> Self {
        Value::Func(value)
    }
}

impl From<Class> for Value {
    fn from(value: Class) -> Self {
        Value::Class(value)
    }
}

impl From<ClsMeth> for Value {
    fn from(value: ClsMeth) -> Self {
        Value::ClsMeth(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Reference> for Value {
    fn from(value: Reference) -> Self {
        Value::Ref(value)
    }
}
