// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## Objects
//!
//! The comparator only sees objects through the [`ObjectData`] trait. The
//! embedder provides the implementations; [`PlainObject`] and [`Collection`]
//! cover ordinary instances and the collection classes.

mod collection;
mod plain_object;

use core::any::Any;
use std::sync::Arc;

pub use collection::{Collection, CollectionKind};
pub use plain_object::PlainObject;

use super::StringData;
use crate::runtime::{Agent, CmpResult, ComparisonError, ExceptionType};

pub trait ObjectData: core::fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn class_name(&self) -> &str;

    /// Collections take part in container-like comparisons and can never be
    /// ordered.
    fn is_collection(&self) -> bool {
        false
    }

    fn has_to_string(&self) -> bool {
        false
    }

    /// Runs the object's string conversion. This may execute user code, and
    /// whatever that code throws is returned as the error.
    fn invoke_to_string(&self, agent: &Agent) -> CmpResult<StringData> {
        Err(agent.throw_exception(
            ExceptionType::Error,
            format!(
                "Object of class {} could not be converted to string",
                self.class_name()
            ),
        ))
    }

    fn to_boolean(&self) -> bool {
        true
    }

    fn to_int64(&self, _agent: &Agent) -> CmpResult<i64> {
        Ok(1)
    }

    fn to_double(&self, _agent: &Agent) -> CmpResult<f64> {
        Ok(1.0)
    }

    /// Loose equality with a different object.
    fn equal(&self, agent: &Agent, other: &Object) -> CmpResult<bool>;

    /// Three-way comparison with a different object. Neither side is a
    /// collection.
    fn compare(&self, agent: &Agent, other: &Object) -> CmpResult<i64>;
}

/// Shared handle to an object.
#[derive(Clone)]
pub struct Object(Arc<dyn ObjectData>);

impl core::fmt::Debug for Object {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

impl Object {
    pub fn new(data: impl ObjectData + 'static) -> Self {
        Self(Arc::new(data))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    pub fn data(&self) -> &dyn ObjectData {
        &*self.0
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    pub fn class_name(&self) -> &str {
        self.0.class_name()
    }

    pub fn is_collection(&self) -> bool {
        self.0.is_collection()
    }

    pub fn has_to_string(&self) -> bool {
        self.0.has_to_string()
    }

    pub fn invoke_to_string(&self, agent: &Agent) -> CmpResult<StringData> {
        self.0.invoke_to_string(agent)
    }

    pub fn to_boolean(&self) -> bool {
        self.0.to_boolean()
    }

    pub fn to_int64(&self, agent: &Agent) -> CmpResult<i64> {
        self.0.to_int64(agent)
    }

    pub fn to_double(&self, agent: &Agent) -> CmpResult<f64> {
        self.0.to_double(agent)
    }

    pub fn equal(&self, agent: &Agent, other: &Object) -> CmpResult<bool> {
        if self.ptr_eq(other) {
            return Ok(true);
        }
        self.0.equal(agent, other)
    }

    pub fn compare(&self, agent: &Agent, other: &Object) -> CmpResult<i64> {
        if self.is_collection() || other.is_collection() {
            return Err(ComparisonError::CollectionMismatch);
        }
        if self.ptr_eq(other) {
            return Ok(0);
        }
        self.0.compare(agent, other)
    }

    pub fn less(&self, agent: &Agent, other: &Object) -> CmpResult<bool> {
        Ok(self.compare(agent, other)? < 0)
    }

    pub fn less_equal(&self, agent: &Agent, other: &Object) -> CmpResult<bool> {
        Ok(self.compare(agent, other)? <= 0)
    }

    /// `compare` is not antisymmetric, so greater-than swaps the operands.
    pub fn more(&self, agent: &Agent, other: &Object) -> CmpResult<bool> {
        Ok(other.compare(agent, self)? < 0)
    }

    pub fn more_equal(&self, agent: &Agent, other: &Object) -> CmpResult<bool> {
        Ok(other.compare(agent, self)? <= 0)
    }
}
