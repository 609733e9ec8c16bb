// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Comparison semantics for a dynamically typed runtime value model.
//!
//! The public operations live in [`abstract_operations::testing_and_comparison`]
//! and are re-exported at the crate root. Every operation takes an [`Agent`]
//! which carries the runtime [`Options`] and the [`HostHooks`] that receive
//! compatibility notices.

pub mod abstract_operations;
pub mod runtime;
pub mod types;

pub use abstract_operations::testing_and_comparison::{
    ComparisonOperand, compare, equal, greater, greater_or_equal, less, less_or_equal, not_equal,
    not_same, same,
};
pub use runtime::{
    Agent, CmpResult, ComparisonError, DefaultHostHooks, ExceptionType, HostHooks, Notice, Options,
};
pub use types::{
    Array, ArrayData, ArrayKey, ArrayKind, Class, ClsMeth, Collection, CollectionKind, Func, Kind,
    Object, ObjectData, PlainObject, Record, Reference, Resource, StringData, Value,
};
