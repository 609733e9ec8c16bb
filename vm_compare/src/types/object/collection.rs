// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::any::Any;

use super::{Object, ObjectData};
use crate::{
    runtime::{Agent, CmpResult, ComparisonError},
    types::{Array, ArrayData, ArrayKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Vector,
    ImmVector,
    Map,
    ImmMap,
    Set,
    ImmSet,
    Pair,
}

impl CollectionKind {
    pub fn class_name(self) -> &'static str {
        match self {
            CollectionKind::Vector => "HH\\Vector",
            CollectionKind::ImmVector => "HH\\ImmVector",
            CollectionKind::Map => "HH\\Map",
            CollectionKind::ImmMap => "HH\\ImmMap",
            CollectionKind::Set => "HH\\Set",
            CollectionKind::ImmSet => "HH\\ImmSet",
            CollectionKind::Pair => "HH\\Pair",
        }
    }

    /// The container kind holding the elements.
    fn storage(self) -> ArrayKind {
        match self {
            CollectionKind::Vector | CollectionKind::ImmVector | CollectionKind::Pair => {
                ArrayKind::Vec
            }
            CollectionKind::Map | CollectionKind::ImmMap => ArrayKind::Dict,
            CollectionKind::Set | CollectionKind::ImmSet => ArrayKind::Keyset,
        }
    }

    /// Mutable and immutable variants of a collection compare as equals.
    fn same_family(self, other: CollectionKind) -> bool {
        match self {
            CollectionKind::Pair => other == CollectionKind::Pair,
            _ => other != CollectionKind::Pair && self.storage() == other.storage(),
        }
    }
}

/// A collection object.
#[derive(Debug)]
pub struct Collection {
    kind: CollectionKind,
    elements: Array,
}

impl Collection {
    /// Vector-like and pair collections take a vec, maps a dict, and sets a
    /// keyset.
    ///
    /// # Panics
    ///
    /// Panics if `elements` is not the container kind `kind` is stored in,
    /// or if a [`CollectionKind::Pair`] does not hold exactly two elements.
    pub fn new(kind: CollectionKind, elements: ArrayData) -> Self {
        assert_eq!(
            kind.storage(),
            elements.kind(),
            "{} cannot hold a {:?}",
            kind.class_name(),
            elements.kind()
        );
        assert!(kind != CollectionKind::Pair || elements.len() == 2);
        Self {
            kind,
            elements: Array::new(elements),
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn elements(&self) -> &Array {
        &self.elements
    }
}

impl ObjectData for Collection {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn class_name(&self) -> &str {
        self.kind.class_name()
    }

    fn is_collection(&self) -> bool {
        true
    }

    fn to_boolean(&self) -> bool {
        !self.elements.is_empty()
    }

    fn equal(&self, agent: &Agent, other: &Object) -> CmpResult<bool> {
        let Some(other) = other
            .downcast_ref::<Collection>()
            .filter(|other| self.kind.same_family(other.kind))
        else {
            return Ok(false);
        };
        match self.elements.kind() {
            ArrayKind::Vec => self.elements.vec_equal(agent, &other.elements),
            ArrayKind::Dict => self.elements.dict_equal(agent, &other.elements),
            ArrayKind::Keyset => Ok(self.elements.keyset_equal(&other.elements)),
            ArrayKind::Legacy => unreachable!(),
        }
    }

    fn compare(&self, _agent: &Agent, _other: &Object) -> CmpResult<i64> {
        Err(ComparisonError::CollectionMismatch)
    }
}
