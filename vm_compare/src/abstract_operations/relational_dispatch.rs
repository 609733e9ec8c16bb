// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## Relational dispatch
//!
//! One resolver per shape of the second operand. Each resolver matches on
//! the kind of the first operand, performs whatever coercion the pairing
//! calls for, and hands the result to the operator policy. Pairings that
//! have no defined result go through the policy's mismatch methods so that
//! equality can answer `false` where ordering fails.
//!
//! References are stripped by the public operations; a [`Value::Ref`] never
//! reaches this module.

use super::{
    relational_operators::RelOp,
    type_conversion::{
        Numeric, class_to_string, cls_meth_to_varray, cls_meth_to_vec, func_to_string,
        raise_cls_meth_conversion_warning, to_boolean,
    },
};
use crate::{
    runtime::{Agent, CmpResult, Notice},
    types::{Array, ArrayKind, Class, ClsMeth, Func, Object, Record, Resource, StringData, Value},
};

fn check_arr_non_arr<O: RelOp>(agent: &Agent, op: O) {
    if op.notice_on_arr_non_arr(agent) {
        agent.raise_notice(Notice::ArrayNonArrayCompare);
    }
}

fn check_arr_hack_arr<O: RelOp>(agent: &Agent, op: O) {
    if op.notice_on_arr_hack_arr(agent) {
        agent.raise_notice(Notice::ArrayHackArrayCompare);
    }
}

fn unify(agent: &Agent) -> bool {
    agent.options.unify_newer_container_family
}

fn is_nonzero(value: Numeric) -> bool {
    match value {
        Numeric::Int(i) => i != 0,
        Numeric::Double(d) => d != 0.0,
    }
}

pub(crate) fn bool_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    val: bool,
) -> CmpResult<O::Output> {
    match cell {
        Value::Vec(_) => op.vec_vs_non_vec(),
        Value::Dict(_) => op.dict_vs_non_dict(),
        Value::Keyset(_) => op.keyset_vs_non_keyset(),
        Value::ClsMeth(_) => {
            if unify(agent) {
                op.cls_meth_vs_non_cls_meth()
            } else {
                check_arr_non_arr(agent, op);
                Ok(op.primitive(true, val))
            }
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Array(_) => {
            check_arr_non_arr(agent, op);
            Ok(op.primitive(to_boolean(cell), val))
        }
        Value::Ref(_) => unreachable!(),
        Value::Uninit
        | Value::Null
        | Value::Boolean(_)
        | Value::Int64(_)
        | Value::Double(_)
        | Value::String(_)
        | Value::Object(_)
        | Value::Resource(_)
        | Value::Func(_)
        | Value::Class(_) => Ok(op.primitive(to_boolean(cell), val)),
    }
}

/// Resolver for an integer or double second operand. The first operand is
/// projected onto the same numeric subtype where it has a choice.
pub(crate) fn number_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    val: Numeric,
) -> CmpResult<O::Output> {
    match cell {
        Value::Uninit | Value::Null => Ok(op.primitive(false, is_nonzero(val))),
        Value::Boolean(b) => Ok(op.primitive(*b, is_nonzero(val))),
        Value::Int64(i) => Ok(op.numeric(Numeric::Int(*i), val)),
        Value::Double(d) => Ok(op.numeric(Numeric::Double(*d), val)),
        Value::String(s) => Ok(op.numeric(s.to_numeric(), val)),
        Value::Vec(_) => op.vec_vs_non_vec(),
        Value::Dict(_) => op.dict_vs_non_dict(),
        Value::Keyset(_) => op.keyset_vs_non_keyset(),
        Value::Array(_) => {
            check_arr_non_arr(agent, op);
            Ok(op.primitive(true, false))
        }
        Value::Object(o) => {
            if o.is_collection() {
                return op.collection_vs_non_obj();
            }
            let projected = match val {
                Numeric::Int(_) => Numeric::Int(o.to_int64(agent)?),
                Numeric::Double(_) => Numeric::Double(o.to_double(agent)?),
            };
            Ok(op.numeric(projected, val))
        }
        Value::Resource(r) => {
            let projected = match val {
                Numeric::Int(_) => Numeric::Int(r.to_int64()),
                Numeric::Double(_) => Numeric::Double(r.to_double()),
            };
            Ok(op.numeric(projected, val))
        }
        Value::Func(f) => Ok(op.numeric(func_to_string(agent, f).to_numeric(), val)),
        Value::Class(c) => Ok(op.numeric(class_to_string(agent, c).to_numeric(), val)),
        Value::ClsMeth(_) => {
            if unify(agent) {
                op.cls_meth_vs_non_cls_meth()
            } else {
                check_arr_non_arr(agent, op);
                Ok(op.primitive(true, false))
            }
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
    }
}

pub(crate) fn string_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    val: &StringData,
) -> CmpResult<O::Output> {
    match cell {
        Value::Uninit | Value::Null => Ok(op.strings(&StringData::empty(), val)),
        Value::Boolean(b) => Ok(op.primitive(*b, val.to_boolean())),
        Value::Int64(i) => Ok(op.numeric(Numeric::Int(*i), val.to_numeric())),
        Value::Double(d) => Ok(op.numeric(Numeric::Double(*d), val.to_numeric())),
        Value::String(s) => Ok(op.strings(s, val)),
        Value::Vec(_) => op.vec_vs_non_vec(),
        Value::Dict(_) => op.dict_vs_non_dict(),
        Value::Keyset(_) => op.keyset_vs_non_keyset(),
        Value::Array(_) => {
            check_arr_non_arr(agent, op);
            Ok(op.primitive(true, false))
        }
        Value::Object(o) => {
            if o.is_collection() {
                return op.collection_vs_non_obj();
            }
            if o.has_to_string() {
                return Ok(op.strings(&o.invoke_to_string(agent)?, val));
            }
            Ok(op.primitive(true, false))
        }
        Value::Resource(r) => Ok(op.primitive(r.to_double(), val.to_double())),
        Value::Func(f) => Ok(op.strings(&func_to_string(agent, f), val)),
        Value::Class(c) => Ok(op.strings(&class_to_string(agent, c), val)),
        Value::ClsMeth(_) => {
            if unify(agent) {
                op.cls_meth_vs_non_cls_meth()
            } else {
                check_arr_non_arr(agent, op);
                Ok(op.primitive(true, false))
            }
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
    }
}

/// Resolver for a legacy array second operand.
pub(crate) fn array_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    ad: &Array,
) -> CmpResult<O::Output> {
    debug_assert_eq!(ad.kind(), ArrayKind::Legacy);
    match cell {
        Value::Uninit | Value::Null => {
            check_arr_non_arr(agent, op);
            Ok(op.primitive(false, !ad.is_empty()))
        }
        Value::Boolean(b) => {
            check_arr_non_arr(agent, op);
            Ok(op.primitive(*b, !ad.is_empty()))
        }
        Value::Int64(_) | Value::Double(_) | Value::String(_) | Value::Func(_) | Value::Class(_) => {
            check_arr_non_arr(agent, op);
            Ok(op.primitive(false, true))
        }
        Value::Vec(_) => {
            check_arr_hack_arr(agent, op);
            op.vec_vs_non_vec()
        }
        Value::Dict(_) => {
            check_arr_hack_arr(agent, op);
            op.dict_vs_non_dict()
        }
        Value::Keyset(_) => {
            check_arr_hack_arr(agent, op);
            op.keyset_vs_non_keyset()
        }
        Value::Array(a) => op.arrays(agent, a, ad),
        Value::Object(o) => {
            check_arr_non_arr(agent, op);
            if o.is_collection() {
                op.collection_vs_non_obj()
            } else {
                Ok(op.primitive(true, false))
            }
        }
        Value::Resource(_) => {
            check_arr_non_arr(agent, op);
            Ok(op.primitive(false, true))
        }
        Value::ClsMeth(m) => {
            if unify(agent) {
                op.cls_meth_vs_non_cls_meth()
            } else {
                raise_cls_meth_conversion_warning(agent);
                op.arrays(agent, &cls_meth_to_varray(m), ad)
            }
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
    }
}

pub(crate) fn vec_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    a: &Array,
) -> CmpResult<O::Output> {
    debug_assert_eq!(a.kind(), ArrayKind::Vec);
    match cell {
        Value::Vec(v) => op.vecs(agent, v, a),
        Value::ClsMeth(m) => {
            if unify(agent) {
                raise_cls_meth_conversion_warning(agent);
                op.vecs(agent, &cls_meth_to_vec(m), a)
            } else {
                op.vec_vs_non_vec()
            }
        }
        Value::Dict(_) => op.dict_vs_non_dict(),
        Value::Keyset(_) => op.keyset_vs_non_keyset(),
        Value::Array(_) => {
            check_arr_hack_arr(agent, op);
            op.vec_vs_non_vec()
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
        Value::Uninit
        | Value::Null
        | Value::Boolean(_)
        | Value::Int64(_)
        | Value::Double(_)
        | Value::String(_)
        | Value::Object(_)
        | Value::Resource(_)
        | Value::Func(_)
        | Value::Class(_) => op.vec_vs_non_vec(),
    }
}

pub(crate) fn dict_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    a: &Array,
) -> CmpResult<O::Output> {
    debug_assert_eq!(a.kind(), ArrayKind::Dict);
    match cell {
        Value::Dict(d) => op.dicts(agent, d, a),
        Value::Vec(_) => op.vec_vs_non_vec(),
        Value::Keyset(_) => op.keyset_vs_non_keyset(),
        Value::Array(_) => {
            check_arr_hack_arr(agent, op);
            op.dict_vs_non_dict()
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
        Value::Uninit
        | Value::Null
        | Value::Boolean(_)
        | Value::Int64(_)
        | Value::Double(_)
        | Value::String(_)
        | Value::Object(_)
        | Value::Resource(_)
        | Value::Func(_)
        | Value::Class(_)
        | Value::ClsMeth(_) => op.dict_vs_non_dict(),
    }
}

pub(crate) fn keyset_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    a: &Array,
) -> CmpResult<O::Output> {
    debug_assert_eq!(a.kind(), ArrayKind::Keyset);
    match cell {
        Value::Keyset(k) => op.keysets(k, a),
        Value::Vec(_) => op.vec_vs_non_vec(),
        Value::Dict(_) => op.dict_vs_non_dict(),
        Value::Array(_) => {
            check_arr_hack_arr(agent, op);
            op.keyset_vs_non_keyset()
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
        Value::Uninit
        | Value::Null
        | Value::Boolean(_)
        | Value::Int64(_)
        | Value::Double(_)
        | Value::String(_)
        | Value::Object(_)
        | Value::Resource(_)
        | Value::Func(_)
        | Value::Class(_)
        | Value::ClsMeth(_) => op.keyset_vs_non_keyset(),
    }
}

/// Resolver for a container second operand of any kind.
pub(crate) fn any_array_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    a: &Array,
) -> CmpResult<O::Output> {
    match a.kind() {
        ArrayKind::Legacy => array_rel_op(agent, op, cell, a),
        ArrayKind::Vec => vec_rel_op(agent, op, cell, a),
        ArrayKind::Dict => dict_rel_op(agent, op, cell, a),
        ArrayKind::Keyset => keyset_rel_op(agent, op, cell, a),
    }
}

pub(crate) fn object_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    od: &Object,
) -> CmpResult<O::Output> {
    let str_rel_op = |sd: &StringData| {
        if od.is_collection() {
            return op.collection_vs_non_obj();
        }
        if od.has_to_string() {
            return Ok(op.strings(sd, &od.invoke_to_string(agent)?));
        }
        Ok(op.primitive(false, true))
    };

    match cell {
        Value::Uninit | Value::Null => Ok(op.primitive(false, true)),
        Value::Boolean(b) => Ok(op.primitive(*b, od.to_boolean())),
        Value::Int64(i) => {
            if od.is_collection() {
                return op.collection_vs_non_obj();
            }
            Ok(op.numeric(Numeric::Int(*i), Numeric::Int(od.to_int64(agent)?)))
        }
        Value::Double(d) => {
            if od.is_collection() {
                return op.collection_vs_non_obj();
            }
            Ok(op.primitive(*d, od.to_double(agent)?))
        }
        Value::String(s) => str_rel_op(s),
        Value::Vec(_) => op.vec_vs_non_vec(),
        Value::Dict(_) => op.dict_vs_non_dict(),
        Value::Keyset(_) => op.keyset_vs_non_keyset(),
        Value::Array(_) => {
            check_arr_non_arr(agent, op);
            if od.is_collection() {
                op.collection_vs_non_obj()
            } else {
                Ok(op.primitive(false, true))
            }
        }
        Value::Object(o) => op.objects(agent, o, od),
        Value::Resource(_) => Ok(op.primitive(false, true)),
        Value::Func(f) => str_rel_op(&func_to_string(agent, f)),
        Value::Class(c) => str_rel_op(&class_to_string(agent, c)),
        Value::ClsMeth(_) => {
            if unify(agent) {
                return op.cls_meth_vs_non_cls_meth();
            }
            check_arr_non_arr(agent, op);
            if od.is_collection() {
                op.collection_vs_non_obj()
            } else {
                Ok(op.primitive(false, true))
            }
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
    }
}

pub(crate) fn record_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    rec: &Record,
) -> CmpResult<O::Output> {
    match cell {
        Value::Record(r) => op.records(agent, r, rec),
        Value::Uninit
        | Value::Null
        | Value::Boolean(_)
        | Value::Int64(_)
        | Value::Double(_)
        | Value::String(_)
        | Value::Array(_)
        | Value::Vec(_)
        | Value::Dict(_)
        | Value::Keyset(_)
        | Value::Object(_)
        | Value::Resource(_)
        | Value::Func(_)
        | Value::Class(_)
        | Value::ClsMeth(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
    }
}

pub(crate) fn resource_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    rd: &Resource,
) -> CmpResult<O::Output> {
    match cell {
        Value::Uninit | Value::Null => Ok(op.primitive(false, true)),
        Value::Boolean(b) => Ok(op.primitive(*b, true)),
        Value::Int64(i) => Ok(op.primitive(*i, rd.to_int64())),
        Value::Double(d) => Ok(op.primitive(*d, rd.to_double())),
        Value::String(s) => Ok(op.primitive(s.to_double(), rd.to_double())),
        Value::Vec(_) => op.vec_vs_non_vec(),
        Value::Dict(_) => op.dict_vs_non_dict(),
        Value::Keyset(_) => op.keyset_vs_non_keyset(),
        Value::Array(_) => {
            check_arr_non_arr(agent, op);
            Ok(op.primitive(true, false))
        }
        Value::Object(_) => Ok(op.primitive(true, false)),
        Value::Resource(r) => Ok(op.resources(r, rd)),
        Value::Func(f) => Ok(op.primitive(func_to_string(agent, f).to_double(), rd.to_double())),
        Value::Class(c) => Ok(op.primitive(
            class_to_string(agent, c).to_double(),
            rd.to_double(),
        )),
        Value::ClsMeth(_) => {
            raise_cls_meth_conversion_warning(agent);
            if unify(agent) {
                op.vec_vs_non_vec()
            } else {
                check_arr_non_arr(agent, op);
                Ok(op.primitive(true, false))
            }
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
    }
}

pub(crate) fn cls_meth_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    cls_meth: &ClsMeth,
) -> CmpResult<O::Output> {
    match cell {
        Value::Uninit
        | Value::Null
        | Value::Int64(_)
        | Value::Double(_)
        | Value::String(_)
        | Value::Func(_)
        | Value::Class(_)
        | Value::Resource(_) => {
            if unify(agent) {
                op.cls_meth_vs_non_cls_meth()
            } else {
                Ok(op.primitive(false, true))
            }
        }
        Value::Boolean(b) => {
            if unify(agent) {
                op.cls_meth_vs_non_cls_meth()
            } else {
                Ok(op.primitive(*b, true))
            }
        }
        Value::ClsMeth(m) => Ok(op.class_methods(agent, m, cls_meth)),
        Value::Dict(_) => op.dict_vs_non_dict(),
        Value::Keyset(_) => op.keyset_vs_non_keyset(),
        Value::Array(a) => {
            if unify(agent) {
                op.cls_meth_vs_non_cls_meth()
            } else {
                raise_cls_meth_conversion_warning(agent);
                op.arrays(agent, a, &cls_meth_to_varray(cls_meth))
            }
        }
        Value::Vec(v) => {
            if unify(agent) {
                raise_cls_meth_conversion_warning(agent);
                op.vecs(agent, v, &cls_meth_to_vec(cls_meth))
            } else {
                op.vec_vs_non_vec()
            }
        }
        Value::Object(o) => {
            if unify(agent) {
                op.cls_meth_vs_non_cls_meth()
            } else if o.is_collection() {
                op.collection_vs_non_obj()
            } else {
                Ok(op.primitive(true, false))
            }
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
    }
}

/// A function or class second operand. Both compare through their name.
#[derive(Clone, Copy)]
enum Named<'a> {
    Func(&'a Func),
    Class(&'a Class),
}

impl Named<'_> {
    fn name(self, agent: &Agent) -> StringData {
        match self {
            Named::Func(f) => func_to_string(agent, f),
            Named::Class(c) => class_to_string(agent, c),
        }
    }
}

fn named_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    val: Named<'_>,
) -> CmpResult<O::Output> {
    match cell {
        Value::Uninit | Value::Null => Ok(op.strings(&StringData::empty(), &val.name(agent))),
        Value::Boolean(b) => Ok(op.primitive(*b, val.name(agent).to_boolean())),
        Value::Int64(i) => Ok(op.numeric(Numeric::Int(*i), val.name(agent).to_numeric())),
        Value::Double(d) => Ok(op.numeric(
            Numeric::Double(*d),
            val.name(agent).to_numeric(),
        )),
        Value::String(s) => Ok(op.strings(s, &val.name(agent))),
        Value::Vec(_) => op.vec_vs_non_vec(),
        Value::Dict(_) => op.dict_vs_non_dict(),
        Value::Keyset(_) => op.keyset_vs_non_keyset(),
        Value::Array(_) => {
            check_arr_non_arr(agent, op);
            // Only for the conversion warning.
            val.name(agent);
            Ok(op.primitive(true, false))
        }
        Value::Object(o) => {
            if o.is_collection() {
                return op.collection_vs_non_obj();
            }
            if o.has_to_string() {
                let s = o.invoke_to_string(agent)?;
                return Ok(op.strings(&s, &val.name(agent)));
            }
            Ok(op.primitive(true, false))
        }
        Value::Resource(r) => Ok(op.primitive(r.to_double(), val.name(agent).to_double())),
        Value::Func(f) => match val {
            Named::Func(g) => Ok(op.funcs(agent, f, g)),
            Named::Class(_) => {
                let s = func_to_string(agent, f);
                Ok(op.strings(&s, &val.name(agent)))
            }
        },
        Value::Class(c) => match val {
            Named::Class(d) => Ok(op.classes(agent, c, d)),
            Named::Func(_) => {
                let s = class_to_string(agent, c);
                Ok(op.strings(&s, &val.name(agent)))
            }
        },
        Value::ClsMeth(_) => {
            raise_cls_meth_conversion_warning(agent);
            if unify(agent) {
                op.vec_vs_non_vec()
            } else {
                check_arr_non_arr(agent, op);
                val.name(agent);
                Ok(op.primitive(true, false))
            }
        }
        Value::Record(_) => op.record_vs_non_record(),
        Value::Ref(_) => unreachable!(),
    }
}

pub(crate) fn func_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    func: &Func,
) -> CmpResult<O::Output> {
    named_rel_op(agent, op, cell, Named::Func(func))
}

pub(crate) fn class_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    cell: &Value,
    class: &Class,
) -> CmpResult<O::Output> {
    named_rel_op(agent, op, cell, Named::Class(class))
}

/// Generic resolver: switches on the kind of the second operand.
///
/// A null second operand is not symmetric with a null first operand: a
/// string is compared with the empty string, an object compares as `true`
/// against `false`, and everything else goes through the `false` resolver.
pub(crate) fn cell_rel_op<O: RelOp>(
    agent: &Agent,
    op: O,
    c1: &Value,
    c2: &Value,
) -> CmpResult<O::Output> {
    debug_assert!(c1.is_plausible());
    debug_assert!(c2.is_plausible());
    match c2 {
        Value::Uninit | Value::Null => match c1 {
            Value::String(s) => Ok(op.strings(s, &StringData::empty())),
            Value::Object(_) => Ok(op.primitive(true, false)),
            _ => bool_rel_op(agent, op, c1, false),
        },
        Value::Boolean(b) => bool_rel_op(agent, op, c1, *b),
        Value::Int64(i) => number_rel_op(agent, op, c1, Numeric::Int(*i)),
        Value::Double(d) => number_rel_op(agent, op, c1, Numeric::Double(*d)),
        Value::String(s) => string_rel_op(agent, op, c1, s),
        Value::Array(a) => array_rel_op(agent, op, c1, a),
        Value::Vec(a) => vec_rel_op(agent, op, c1, a),
        Value::Dict(a) => dict_rel_op(agent, op, c1, a),
        Value::Keyset(a) => keyset_rel_op(agent, op, c1, a),
        Value::Object(o) => object_rel_op(agent, op, c1, o),
        Value::Resource(r) => resource_rel_op(agent, op, c1, r),
        Value::Func(f) => func_rel_op(agent, op, c1, f),
        Value::Class(c) => class_rel_op(agent, op, c1, c),
        Value::ClsMeth(m) => cls_meth_rel_op(agent, op, c1, m),
        Value::Record(r) => record_rel_op(agent, op, c1, r),
        Value::Ref(_) => unreachable!(),
    }
}
