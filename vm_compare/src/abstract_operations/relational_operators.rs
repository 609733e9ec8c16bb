// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## Relational operator policies
//!
//! A policy decides what "compare these two" means once the dispatch engine
//! has lined up two operands of compatible shape, and what happens when the
//! shapes cannot be compared at all. The default methods of [`RelOp`]
//! describe the ordering operators; [`EqOp`] overrides all of them.

use super::{
    relational_dispatch::cell_rel_op,
    testing_and_comparison::equal,
    type_conversion::{Numeric, class_to_string, func_to_string},
};
use crate::{
    runtime::{Agent, CmpResult, ComparisonError},
    types::{Array, Class, ClsMeth, Func, Object, Record, Resource, StringData},
};

pub trait RelOp: Copy {
    type Output;

    fn primitive<T: PartialOrd>(self, t: T, u: T) -> Self::Output;

    /// Mixed integer and double operands are compared as doubles.
    fn numeric(self, t: Numeric, u: Numeric) -> Self::Output {
        match (t, u) {
            (Numeric::Int(t), Numeric::Int(u)) => self.primitive(t, u),
            (t, u) => self.primitive(t.to_f64(), u.to_f64()),
        }
    }

    fn strings(self, t: &StringData, u: &StringData) -> Self::Output {
        self.primitive(t.compare(u), 0)
    }

    fn resources(self, t: &Resource, u: &Resource) -> Self::Output {
        self.primitive(t.to_int64(), u.to_int64())
    }

    fn funcs(self, agent: &Agent, t: &Func, u: &Func) -> Self::Output {
        self.strings(&func_to_string(agent, t), &func_to_string(agent, u))
    }

    fn classes(self, agent: &Agent, t: &Class, u: &Class) -> Self::Output {
        self.strings(&class_to_string(agent, t), &class_to_string(agent, u))
    }

    /// Pairs order by class name first, then by method name.
    fn class_methods(self, agent: &Agent, t: &ClsMeth, u: &ClsMeth) -> Self::Output {
        let class1 = class_to_string(agent, t.class());
        let class2 = class_to_string(agent, u.class());
        let cmp = class1.compare(&class2);
        if cmp != 0 {
            return self.primitive(cmp, 0);
        }
        self.strings(
            &func_to_string(agent, t.func()),
            &func_to_string(agent, u.func()),
        )
    }

    /// Two legacy arrays.
    fn arrays(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<Self::Output>;

    fn objects(self, agent: &Agent, t: &Object, u: &Object) -> CmpResult<Self::Output>;

    /// Vecs order by length, then by the first pair of elements that are not
    /// loosely equal.
    fn vecs(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<Self::Output> {
        if t.len() != u.len() {
            return Ok(self.primitive(t.len(), u.len()));
        }
        for (a, b) in t.values().zip(u.values()) {
            if !equal(agent, a, b)? {
                return cell_rel_op(agent, self, a.to_cell(), b.to_cell());
            }
        }
        Ok(self.primitive(0, 0))
    }

    fn dicts(self, _agent: &Agent, _t: &Array, _u: &Array) -> CmpResult<Self::Output> {
        Err(ComparisonError::DictMismatch)
    }

    fn keysets(self, _t: &Array, _u: &Array) -> CmpResult<Self::Output> {
        Err(ComparisonError::KeysetMismatch)
    }

    fn records(self, _agent: &Agent, _t: &Record, _u: &Record) -> CmpResult<Self::Output> {
        Err(ComparisonError::RecordOrdering)
    }

    fn vec_vs_non_vec(self) -> CmpResult<Self::Output> {
        Err(ComparisonError::VecMismatch)
    }

    fn dict_vs_non_dict(self) -> CmpResult<Self::Output> {
        Err(ComparisonError::DictMismatch)
    }

    fn keyset_vs_non_keyset(self) -> CmpResult<Self::Output> {
        Err(ComparisonError::KeysetMismatch)
    }

    fn collection_vs_non_obj(self) -> CmpResult<Self::Output> {
        Err(ComparisonError::CollectionMismatch)
    }

    fn record_vs_non_record(self) -> CmpResult<Self::Output> {
        Err(ComparisonError::RecordMismatch)
    }

    fn cls_meth_vs_non_cls_meth(self) -> CmpResult<Self::Output> {
        Err(ComparisonError::ClsMethMismatch)
    }

    /// Whether comparing a legacy array with a non-array raises a notice.
    fn notice_on_arr_non_arr(self, agent: &Agent) -> bool {
        agent.check_hack_array_compare_non_any_array()
    }

    /// Whether comparing a legacy array with a vec, dict or keyset raises a
    /// notice.
    fn notice_on_arr_hack_arr(self, agent: &Agent) -> bool {
        agent.check_hack_array_compare()
    }
}

/// Loose equality (`==`).
#[derive(Debug, Clone, Copy)]
pub struct EqOp;

impl RelOp for EqOp {
    type Output = bool;

    fn primitive<T: PartialOrd>(self, t: T, u: T) -> bool {
        t == u
    }

    fn strings(self, t: &StringData, u: &StringData) -> bool {
        t.equal(u)
    }

    fn resources(self, t: &Resource, u: &Resource) -> bool {
        t.ptr_eq(u)
    }

    fn funcs(self, _agent: &Agent, t: &Func, u: &Func) -> bool {
        t.ptr_eq(u)
    }

    fn classes(self, _agent: &Agent, t: &Class, u: &Class) -> bool {
        t.ptr_eq(u)
    }

    fn class_methods(self, _agent: &Agent, t: &ClsMeth, u: &ClsMeth) -> bool {
        t.ptr_eq(u)
    }

    fn arrays(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<bool> {
        t.legacy_equal(agent, u)
    }

    fn objects(self, agent: &Agent, t: &Object, u: &Object) -> CmpResult<bool> {
        t.equal(agent, u)
    }

    fn vecs(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<bool> {
        t.vec_equal(agent, u)
    }

    fn dicts(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<bool> {
        t.dict_equal(agent, u)
    }

    fn keysets(self, t: &Array, u: &Array) -> CmpResult<bool> {
        Ok(t.keyset_equal(u))
    }

    fn records(self, agent: &Agent, t: &Record, u: &Record) -> CmpResult<bool> {
        t.equal(agent, u)
    }

    fn vec_vs_non_vec(self) -> CmpResult<bool> {
        Ok(false)
    }

    fn dict_vs_non_dict(self) -> CmpResult<bool> {
        Ok(false)
    }

    fn keyset_vs_non_keyset(self) -> CmpResult<bool> {
        Ok(false)
    }

    fn collection_vs_non_obj(self) -> CmpResult<bool> {
        Ok(false)
    }

    fn record_vs_non_record(self) -> CmpResult<bool> {
        Ok(false)
    }

    fn cls_meth_vs_non_cls_meth(self) -> CmpResult<bool> {
        Ok(false)
    }

    fn notice_on_arr_non_arr(self, _agent: &Agent) -> bool {
        false
    }
}

/// `<`
#[derive(Debug, Clone, Copy)]
pub struct LtOp;

impl RelOp for LtOp {
    type Output = bool;

    fn primitive<T: PartialOrd>(self, t: T, u: T) -> bool {
        t < u
    }

    fn arrays(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<bool> {
        Ok(t.legacy_compare(agent, u)? < 0)
    }

    fn objects(self, agent: &Agent, t: &Object, u: &Object) -> CmpResult<bool> {
        t.less(agent, u)
    }
}

/// `<=`
#[derive(Debug, Clone, Copy)]
pub struct LteOp;

impl RelOp for LteOp {
    type Output = bool;

    fn primitive<T: PartialOrd>(self, t: T, u: T) -> bool {
        t <= u
    }

    fn arrays(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<bool> {
        Ok(t.legacy_compare(agent, u)? <= 0)
    }

    fn objects(self, agent: &Agent, t: &Object, u: &Object) -> CmpResult<bool> {
        t.less_equal(agent, u)
    }
}

/// `>`
#[derive(Debug, Clone, Copy)]
pub struct GtOp;

impl RelOp for GtOp {
    type Output = bool;

    fn primitive<T: PartialOrd>(self, t: T, u: T) -> bool {
        t > u
    }

    // Legacy array comparison is not antisymmetric.
    fn arrays(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<bool> {
        Ok(u.legacy_compare(agent, t)? < 0)
    }

    fn objects(self, agent: &Agent, t: &Object, u: &Object) -> CmpResult<bool> {
        t.more(agent, u)
    }
}

/// `>=`
#[derive(Debug, Clone, Copy)]
pub struct GteOp;

impl RelOp for GteOp {
    type Output = bool;

    fn primitive<T: PartialOrd>(self, t: T, u: T) -> bool {
        t >= u
    }

    fn arrays(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<bool> {
        Ok(u.legacy_compare(agent, t)? <= 0)
    }

    fn objects(self, agent: &Agent, t: &Object, u: &Object) -> CmpResult<bool> {
        t.more_equal(agent, u)
    }
}

/// Three-way comparison (`<=>`).
#[derive(Debug, Clone, Copy)]
pub struct CmpOp;

impl RelOp for CmpOp {
    type Output = i64;

    /// Checks equality and greater-than only, so an unordered pair (NaN)
    /// yields `-1` whichever side it is on.
    fn primitive<T: PartialOrd>(self, t: T, u: T) -> i64 {
        if t == u {
            0
        } else if t > u {
            1
        } else {
            -1
        }
    }

    fn arrays(self, agent: &Agent, t: &Array, u: &Array) -> CmpResult<i64> {
        t.legacy_compare(agent, u)
    }

    fn objects(self, agent: &Agent, t: &Object, u: &Object) -> CmpResult<i64> {
        t.compare(agent, u)
    }
}
