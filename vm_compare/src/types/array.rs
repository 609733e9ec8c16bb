// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## Containers
//!
//! One storage type backs all four container kinds; the [`ArrayKind`] tag
//! decides which comparison primitives apply. Legacy arrays compare loosely
//! and allow ordering, vecs allow ordering, dicts and keysets only support
//! equality.

use core::ops::Deref;
use std::sync::Arc;

use super::{OrderedMap, StringData, Value};
use crate::{
    abstract_operations::testing_and_comparison::{compare, equal, same},
    runtime::{Agent, CmpResult},
};

/// Key of a container entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayKey {
    Int(i64),
    Str(StringData),
}

impl From<i64> for ArrayKey {
    fn from(value: i64) -> Self {
        ArrayKey::Int(value)
    }
}

impl From<&str> for ArrayKey {
    fn from(value: &str) -> Self {
        ArrayKey::Str(value.into())
    }
}

impl ArrayKey {
    /// Legacy arrays store canonical decimal integer strings ("12", "-3",
    /// but not "012", "+3" or "-0") under the integer key.
    pub fn normalized(self) -> Self {
        match self {
            ArrayKey::Str(s) => match canonical_integer(s.as_bytes()) {
                Some(i) => ArrayKey::Int(i),
                None => ArrayKey::Str(s),
            },
            key => key,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            ArrayKey::Int(i) => Value::Int64(*i),
            ArrayKey::Str(s) => Value::String(s.clone()),
        }
    }
}

fn canonical_integer(bytes: &[u8]) -> Option<i64> {
    let digits = bytes.strip_prefix(b"-").unwrap_or(bytes);
    let valid = match digits {
        [] => false,
        [b'0'] => digits.len() == bytes.len(),
        [b'0', ..] => false,
        _ => digits.iter().all(u8::is_ascii_digit),
    };
    if !valid {
        return None;
    }
    core::str::from_utf8(bytes).ok()?.parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    /// The legacy, loosely comparable associative array.
    Legacy,
    Vec,
    Dict,
    Keyset,
}

#[derive(Debug, Clone)]
pub struct ArrayData {
    kind: ArrayKind,
    entries: OrderedMap,
}

impl ArrayData {
    pub fn legacy(entries: impl IntoIterator<Item = (ArrayKey, Value)>) -> Self {
        let mut map = OrderedMap::default();
        for (key, value) in entries {
            map.insert(key.normalized(), value);
        }
        Self {
            kind: ArrayKind::Legacy,
            entries: map,
        }
    }

    /// Legacy array with the keys `0..n`.
    pub fn legacy_list(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            kind: ArrayKind::Legacy,
            entries: list(values),
        }
    }

    pub fn vec(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            kind: ArrayKind::Vec,
            entries: list(values),
        }
    }

    pub fn dict(entries: impl IntoIterator<Item = (ArrayKey, Value)>) -> Self {
        let mut map = OrderedMap::default();
        for (key, value) in entries {
            map.insert(key, value);
        }
        Self {
            kind: ArrayKind::Dict,
            entries: map,
        }
    }

    pub fn keyset(keys: impl IntoIterator<Item = ArrayKey>) -> Self {
        let mut map = OrderedMap::default();
        for key in keys {
            let value = key.to_value();
            map.insert(key, value);
        }
        Self {
            kind: ArrayKind::Keyset,
            entries: map,
        }
    }

    pub fn kind(&self) -> ArrayKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &ArrayKey) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &ArrayKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&ArrayKey, &Value)> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.values()
    }
}

fn list(values: impl IntoIterator<Item = Value>) -> OrderedMap {
    let values = values.into_iter();
    let mut map = OrderedMap::with_capacity(values.size_hint().0);
    for (index, value) in (0i64..).zip(values) {
        map.insert(ArrayKey::Int(index), value);
    }
    map
}

/// Shared handle to an [`ArrayData`].
#[derive(Debug, Clone)]
pub struct Array(Arc<ArrayData>);

impl Deref for Array {
    type Target = ArrayData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ArrayData> for Array {
    fn from(value: ArrayData) -> Self {
        Self::new(value)
    }
}

impl Array {
    pub fn new(data: ArrayData) -> Self {
        Self(Arc::new(data))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Loose equality of two legacy arrays: same size, and every key of
    /// `self` maps to a loosely equal value in `other`. Order is ignored.
    pub(crate) fn legacy_equal(&self, agent: &Agent, other: &Array) -> CmpResult<bool> {
        debug_assert_eq!(self.kind(), ArrayKind::Legacy);
        debug_assert_eq!(other.kind(), ArrayKind::Legacy);
        self.unordered_equal(agent, other)
    }

    /// Three-way comparison of two legacy arrays.
    ///
    /// The smaller array is less. Otherwise the entries of `self` are visited
    /// in order: a key missing from `other` makes `self` greater, and the
    /// first non-equal pair of values decides. This is not antisymmetric, so
    /// `a > b` must be evaluated as `b < a`.
    pub(crate) fn legacy_compare(&self, agent: &Agent, other: &Array) -> CmpResult<i64> {
        debug_assert_eq!(self.kind(), ArrayKind::Legacy);
        debug_assert_eq!(other.kind(), ArrayKind::Legacy);
        let (size1, size2) = (self.len(), other.len());
        if size1 < size2 {
            return Ok(-1);
        }
        if size1 > size2 {
            return Ok(1);
        }
        for (key, value) in self.iter() {
            let Some(other_value) = other.get(key) else {
                return Ok(1);
            };
            let result = compare(agent, value, other_value)?;
            if result != 0 {
                return Ok(result);
            }
        }
        Ok(0)
    }

    /// Vecs are loosely equal when they have the same length and loosely
    /// equal elements at every index.
    pub(crate) fn vec_equal(&self, agent: &Agent, other: &Array) -> CmpResult<bool> {
        debug_assert_eq!(self.kind(), ArrayKind::Vec);
        debug_assert_eq!(other.kind(), ArrayKind::Vec);
        if self.ptr_eq(other) {
            return Ok(true);
        }
        if self.len() != other.len() {
            return Ok(false);
        }
        for (a, b) in self.values().zip(other.values()) {
            if !equal(agent, a, b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub(crate) fn dict_equal(&self, agent: &Agent, other: &Array) -> CmpResult<bool> {
        debug_assert_eq!(self.kind(), ArrayKind::Dict);
        debug_assert_eq!(other.kind(), ArrayKind::Dict);
        self.unordered_equal(agent, other)
    }

    pub(crate) fn keyset_equal(&self, other: &Array) -> bool {
        debug_assert_eq!(self.kind(), ArrayKind::Keyset);
        debug_assert_eq!(other.kind(), ArrayKind::Keyset);
        self.same_membership(other)
    }

    /// Strict equality of two containers of the same kind.
    ///
    /// Legacy arrays, vecs and dicts must hold identical keys in identical
    /// order with strictly equal values. Keysets only need the same members.
    pub(crate) fn strictly_equal(&self, agent: &Agent, other: &Array) -> bool {
        debug_assert_eq!(self.kind(), other.kind());
        if self.ptr_eq(other) {
            return true;
        }
        if self.kind() == ArrayKind::Keyset {
            return self.same_membership(other);
        }
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((k1, v1), (k2, v2))| k1 == k2 && same(agent, v1, v2))
    }

    fn unordered_equal(&self, agent: &Agent, other: &Array) -> CmpResult<bool> {
        if self.ptr_eq(other) {
            return Ok(true);
        }
        if self.len() != other.len() {
            return Ok(false);
        }
        for (key, value) in self.iter() {
            let Some(other_value) = other.get(key) else {
                return Ok(false);
            };
            if !equal(agent, value, other_value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn same_membership(&self, other: &Array) -> bool {
        self.len() == other.len() && self.iter().all(|(key, _)| other.contains_key(key))
    }
}

#[cfg(test)]
mod test {
    use super::{ArrayData, ArrayKey, ArrayKind};
    use crate::types::Value;

    #[test]
    fn legacy_keys_are_normalized() {
        let array = ArrayData::legacy([
            (ArrayKey::from("1"), Value::Int64(1)),
            (ArrayKey::from("01"), Value::Int64(2)),
            (ArrayKey::from("-5"), Value::Int64(3)),
            (ArrayKey::from("-0"), Value::Int64(4)),
        ]);
        assert_eq!(array.kind(), ArrayKind::Legacy);
        assert!(array.contains_key(&ArrayKey::Int(1)));
        assert!(array.contains_key(&ArrayKey::from("01")));
        assert!(array.contains_key(&ArrayKey::Int(-5)));
        assert!(array.contains_key(&ArrayKey::from("-0")));
        assert!(!array.contains_key(&ArrayKey::from("1")));
    }

    #[test]
    fn dict_keys_are_kept() {
        let dict = ArrayData::dict([(ArrayKey::from("1"), Value::Int64(1))]);
        assert!(dict.contains_key(&ArrayKey::from("1")));
        assert!(!dict.contains_key(&ArrayKey::Int(1)));
    }

    #[test]
    fn keysets_store_their_keys_as_values() {
        let keyset = ArrayData::keyset([ArrayKey::Int(3), ArrayKey::from("a")]);
        assert!(matches!(keyset.get(&ArrayKey::Int(3)), Some(Value::Int64(3))));
        assert_eq!(keyset.len(), 2);
    }
}
