// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## Testing and Comparison Operations
//!
//! The public comparison operators: loose equality, strict equality
//! ("same"), the four ordering operators and the three-way comparison.
//!
//! Every operator takes the first operand as a [`Value`] and the second as
//! anything implementing [`ComparisonOperand`], so callers holding a typed
//! payload need not wrap it first. References on either side are stripped
//! before comparing.

use super::{
    relational_dispatch::{
        any_array_rel_op, bool_rel_op, cell_rel_op, class_rel_op, cls_meth_rel_op, func_rel_op,
        number_rel_op, object_rel_op, record_rel_op, resource_rel_op, string_rel_op,
    },
    relational_operators::{CmpOp, EqOp, GtOp, GteOp, LtOp, LteOp, RelOp},
    type_conversion::{
        Numeric, class_to_string, cls_meth_to_varray, cls_meth_to_vec, func_to_string,
        raise_cls_meth_conversion_warning,
    },
};
use crate::{
    runtime::{Agent, CmpResult, Notice},
    types::{Array, Class, ClsMeth, Func, Object, Record, Resource, StringData, Value},
};

mod private {
    pub trait Sealed {}
}

/// The second operand of a comparison.
///
/// Implemented for `&Value` and for the payload types that can be compared
/// without wrapping them in a [`Value`]. This trait is sealed.
pub trait ComparisonOperand: private::Sealed {
    #[doc(hidden)]
    fn relate<O: RelOp>(self, agent: &Agent, op: O, cell: &Value) -> CmpResult<O::Output>;

    #[doc(hidden)]
    fn same_as(self, agent: &Agent, cell: &Value) -> bool;
}

impl private::Sealed for &Value {}

impl ComparisonOperand for &Value {
    fn relate<O: RelOp>(self, agent: &Agent, op: O, cell: &Value) -> CmpResult<O::Output> {
        cell_rel_op(agent, op, cell, self.to_cell())
    }

    fn same_as(self, agent: &Agent, cell: &Value) -> bool {
        cell_same(agent, cell, self.to_cell())
    }
}

impl private::Sealed for bool {}

impl ComparisonOperand for bool {
    fn relate<O: RelOp>(self, agent: &Agent, op: O, cell: &Value) -> CmpResult<O::Output> {
        bool_rel_op(agent, op, cell, self)
    }

    fn same_as(self, agent: &Agent, cell: &Value) -> bool {
        cell_same(agent, cell, &Value::Boolean(self))
    }
}

impl private::Sealed for i64 {}

impl ComparisonOperand for i64 {
    fn relate<O: RelOp>(self, agent: &Agent, op: O, cell: &Value) -> CmpResult<O::Output> {
        number_rel_op(agent, op, cell, Numeric::Int(self))
    }

    fn same_as(self, agent: &Agent, cell: &Value) -> bool {
        cell_same(agent, cell, &Value::Int64(self))
    }
}

impl private::Sealed for i32 {}

impl ComparisonOperand for i32 {
    fn relate<O: RelOp>(self, agent: &Agent, op: O, cell: &Value) -> CmpResult<O::Output> {
        i64::from(self).relate(agent, op, cell)
    }

    fn same_as(self, agent: &Agent, cell: &Value) -> bool {
        i64::from(self).same_as(agent, cell)
    }
}

impl private::Sealed for f64 {}

impl ComparisonOperand for f64 {
    fn relate<O: RelOp>(self, agent: &Agent, op: O, cell: &Value) -> CmpResult<O::Output> {
        number_rel_op(agent, op, cell, Numeric::Double(self))
    }

    fn same_as(self, agent: &Agent, cell: &Value) -> bool {
        cell_same(agent, cell, &Value::Double(self))
    }
}

impl private::Sealed for &StringData {}

impl ComparisonOperand for &StringData {
    fn relate<O: RelOp>(self, agent: &Agent, op: O, cell: &Value) -> CmpResult<O::Output> {
        string_rel_op(agent, op, cell, self)
    }

    fn same_as(self, agent: &Agent, cell: &Value) -> bool {
        cell_same(agent, cell, &Value::String(self.clone()))
    }
}

impl private::Sealed for &Array {}

/// Dispatched on the container kind.
impl ComparisonOperand for &Array {
    fn relate<O: RelOp>(self, agent: &Agent, op: O, cell: &Value) -> CmpResult<O::Output> {
        any_array_rel_op(agent, op, cell, self)
    }

    fn same_as(self, agent: &Agent, cell: &Value) -> bool {
        cell_same(agent, cell, &Value::from(self.clone()))
    }
}

macro_rules! handle_operand {
    ($ty:ty, $variant:ident, $rel_op:ident) => {
        impl private::Sealed for &$ty {}

        impl ComparisonOperand for &$ty {
            fn relate<O: RelOp>(
                self,
                agent: &Agent,
                op: O,
                cell: &Value,
            ) -> CmpResult<O::Output> {
                $rel_op(agent, op, cell, self)
            }

            fn same_as(self, agent: &Agent, cell: &Value) -> bool {
                cell_same(agent, cell, &Value::$variant(self.clone()))
            }
        }
    };
}

handle_operand!(Object, Object, object_rel_op);
handle_operand!(Resource, Resource, resource_rel_op);
handle_operand!(Func, Func, func_rel_op);
handle_operand!(Class, Class, class_rel_op);
handle_operand!(ClsMeth, ClsMeth, cls_meth_rel_op);
handle_operand!(Record, Record, record_rel_op);

/// Loose equality, `x == y`.
pub fn equal(agent: &Agent, x: &Value, y: impl ComparisonOperand) -> CmpResult<bool> {
    y.relate(agent, EqOp, x.to_cell())
}

/// `x != y`
pub fn not_equal(agent: &Agent, x: &Value, y: impl ComparisonOperand) -> CmpResult<bool> {
    Ok(!equal(agent, x, y)?)
}

/// `x < y`
pub fn less(agent: &Agent, x: &Value, y: impl ComparisonOperand) -> CmpResult<bool> {
    y.relate(agent, LtOp, x.to_cell())
}

/// `x <= y`
pub fn less_or_equal(agent: &Agent, x: &Value, y: impl ComparisonOperand) -> CmpResult<bool> {
    y.relate(agent, LteOp, x.to_cell())
}

/// `x > y`
pub fn greater(agent: &Agent, x: &Value, y: impl ComparisonOperand) -> CmpResult<bool> {
    y.relate(agent, GtOp, x.to_cell())
}

/// `x >= y`
pub fn greater_or_equal(agent: &Agent, x: &Value, y: impl ComparisonOperand) -> CmpResult<bool> {
    y.relate(agent, GteOp, x.to_cell())
}

/// Three-way comparison, `x <=> y`: `-1`, `0` or `1`.
///
/// Unordered operands (a NaN on either side) yield `-1`.
pub fn compare(agent: &Agent, x: &Value, y: impl ComparisonOperand) -> CmpResult<i64> {
    y.relate(agent, CmpOp, x.to_cell())
}

/// Strict equality, `x === y`.
///
/// Kinds must match, with a few exceptions: a string is the same as a
/// function or class whose name it spells, and a class-method pair is the
/// same as its materialized two element container. Strict equality never
/// fails, although it may raise notices.
pub fn same(agent: &Agent, x: &Value, y: impl ComparisonOperand) -> bool {
    y.same_as(agent, x.to_cell())
}

/// `x !== y`
pub fn not_same(agent: &Agent, x: &Value, y: impl ComparisonOperand) -> bool {
    !same(agent, x, y)
}

fn cell_same(agent: &Agent, c1: &Value, c2: &Value) -> bool {
    debug_assert!(c1.is_plausible());
    debug_assert!(c2.is_plausible());

    let null1 = c1.is_null();
    let null2 = c2.is_null();
    if null1 && null2 {
        return true;
    }
    if null1 || null2 {
        return false;
    }

    let hack_array_check = || {
        if agent.check_hack_array_compare() && c2.is_array() {
            agent.raise_notice(Notice::ArrayHackArrayCompare);
        }
    };
    let unify = agent.options.unify_newer_container_family;

    match c1 {
        Value::Boolean(x) => matches!(c2, Value::Boolean(y) if x == y),
        Value::Int64(x) => matches!(c2, Value::Int64(y) if x == y),
        Value::Double(x) => matches!(c2, Value::Double(y) if x == y),
        Value::String(s) => match c2 {
            Value::String(t) => s.same(t),
            Value::Func(f) => s.same(&func_to_string(agent, f)),
            Value::Class(c) => s.same(&class_to_string(agent, c)),
            _ => false,
        },
        Value::Func(f) => match c2 {
            Value::String(t) => func_to_string(agent, f).same(t),
            Value::Func(g) => f.ptr_eq(g),
            _ => false,
        },
        Value::Class(c) => match c2 {
            Value::String(t) => class_to_string(agent, c).same(t),
            Value::Class(d) => c.ptr_eq(d),
            _ => false,
        },
        Value::Vec(a) => match c2 {
            Value::Vec(b) => a.strictly_equal(agent, b),
            Value::ClsMeth(m) => {
                if !unify {
                    return false;
                }
                raise_cls_meth_conversion_warning(agent);
                a.strictly_equal(agent, &cls_meth_to_vec(m))
            }
            _ => {
                hack_array_check();
                false
            }
        },
        Value::Dict(a) => match c2 {
            Value::Dict(b) => a.strictly_equal(agent, b),
            _ => {
                hack_array_check();
                false
            }
        },
        Value::Keyset(a) => match c2 {
            Value::Keyset(b) => a.strictly_equal(agent, b),
            _ => {
                hack_array_check();
                false
            }
        },
        Value::Array(a) => match c2 {
            Value::Array(b) => a.strictly_equal(agent, b),
            Value::ClsMeth(m) => {
                if unify {
                    return false;
                }
                raise_cls_meth_conversion_warning(agent);
                a.strictly_equal(agent, &cls_meth_to_varray(m))
            }
            _ => {
                if agent.check_hack_array_compare() && c2.is_hack_array() {
                    agent.raise_notice(Notice::ArrayHackArrayCompare);
                }
                false
            }
        },
        Value::Object(o) => matches!(c2, Value::Object(p) if o.ptr_eq(p)),
        Value::Resource(r) => matches!(c2, Value::Resource(s) if r.ptr_eq(s)),
        Value::ClsMeth(m) => match c2 {
            Value::ClsMeth(n) => m.ptr_eq(n),
            Value::Vec(b) if unify => {
                raise_cls_meth_conversion_warning(agent);
                cls_meth_to_vec(m).strictly_equal(agent, b)
            }
            Value::Array(b) if !unify => {
                raise_cls_meth_conversion_warning(agent);
                cls_meth_to_varray(m).strictly_equal(agent, b)
            }
            _ => false,
        },
        Value::Record(r) => matches!(c2, Value::Record(s) if r.same(agent, s)),
        Value::Uninit | Value::Null | Value::Ref(_) => unreachable!(),
    }
}
