// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::hash::{Hash, Hasher};

use ahash::AHasher;
use hashbrown::{HashTable, hash_table::Entry};

use super::{ArrayKey, Value};

fn hash_key(key: &ArrayKey) -> u64 {
    let mut hasher = AHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Insertion ordered map from array keys to values.
#[derive(Clone, Default)]
pub(crate) struct OrderedMap {
    // TODO: Use a SoA vector for keys and values.
    keys: Vec<ArrayKey>,
    values: Vec<Value>,
    hash_table: HashTable<u32>,
}

impl core::fmt::Debug for OrderedMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.keys.iter().zip(self.values.iter()))
            .finish()
    }
}

impl OrderedMap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            hash_table: HashTable::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        debug_assert!(
            self.keys.len() == self.values.len() && self.keys.len() == self.hash_table.len()
        );
        self.keys.len()
    }

    /// Inserts or overwrites. An overwritten entry keeps its position.
    pub(crate) fn insert(&mut self, key: ArrayKey, value: Value) {
        let hash = hash_key(&key);
        let entry = self.hash_table.entry(
            hash,
            |idx| self.keys[*idx as usize] == key,
            |idx| hash_key(&self.keys[*idx as usize]),
        );
        match entry {
            Entry::Occupied(occupied) => {
                let idx = *occupied.get() as usize;
                self.values[idx] = value;
            }
            Entry::Vacant(vacant) => {
                let idx = u32::try_from(self.keys.len()).expect("Ordered map overflowed");
                self.keys.push(key);
                self.values.push(value);
                vacant.insert(idx);
            }
        }
    }

    pub(crate) fn get(&self, key: &ArrayKey) -> Option<&Value> {
        let hash = hash_key(key);
        self.hash_table
            .find(hash, |idx| self.keys[*idx as usize] == *key)
            .map(|idx| &self.values[*idx as usize])
    }

    pub(crate) fn contains_key(&self, key: &ArrayKey) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = (&ArrayKey, &Value)> {
        self.keys.iter().zip(self.values.iter())
    }

    pub(crate) fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.values.iter()
    }
}

#[cfg(test)]
mod test {
    use super::OrderedMap;
    use crate::types::{ArrayKey, Value};

    #[test]
    fn insertion_order_is_kept() {
        let mut map = OrderedMap::default();
        map.insert(ArrayKey::Str("b".into()), Value::Int64(1));
        map.insert(ArrayKey::Int(7), Value::Int64(2));
        map.insert(ArrayKey::Str("a".into()), Value::Int64(3));
        map.insert(ArrayKey::Int(7), Value::Int64(4));
        assert_eq!(map.len(), 3);
        let keys = map.iter().map(|(key, _)| key.clone()).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                ArrayKey::Str("b".into()),
                ArrayKey::Int(7),
                ArrayKey::Str("a".into())
            ]
        );
        assert!(matches!(map.get(&ArrayKey::Int(7)), Some(Value::Int64(4))));
        assert!(!map.contains_key(&ArrayKey::Str("7".into())));
    }
}
