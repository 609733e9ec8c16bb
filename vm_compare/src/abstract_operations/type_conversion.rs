// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## Type Conversion
//!
//! The implicit conversions the comparator performs on its operands: numeric
//! strings, truthiness, and the materialization of function, class and
//! class-method-pair references into strings and containers.

use crate::{
    runtime::{Agent, Notice},
    types::{Array, ArrayData, Class, ClsMeth, Func, StringData, Value},
};

/// The result of parsing a numeric string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Double(f64),
}

impl Numeric {
    pub fn to_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Double(d) => d,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Numeric::Int(_) => true,
            Numeric::Double(d) => d.is_finite(),
        }
    }
}

fn is_numeric_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses the longest numeric prefix of `bytes`, after leading whitespace.
///
/// Returns the value and the index one past its last byte. Integer text that
/// does not fit in an `i64` becomes a double.
fn parse_numeric_prefix(bytes: &[u8]) -> Option<(Numeric, usize)> {
    let start = bytes
        .iter()
        .position(|b| !is_numeric_whitespace(*b))
        .unwrap_or(bytes.len());
    let mut i = start;

    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let mantissa_start = i;

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut is_double = false;
    if bytes.get(i) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            is_double = true;
            i += 1 + frac_digits;
        }
    }
    if !is_double && int_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            is_double = true;
            i = j + exp_digits;
        }
    }

    let mantissa = &bytes[mantissa_start..i];
    if !is_double {
        let mut acc: Option<i64> = Some(0);
        for digit in mantissa {
            let digit = i64::from(digit - b'0');
            acc = acc.and_then(|acc| acc.checked_mul(10)).and_then(|acc| {
                if negative {
                    acc.checked_sub(digit)
                } else {
                    acc.checked_add(digit)
                }
            });
        }
        if let Some(value) = acc {
            return Some((Numeric::Int(value), i));
        }
    }

    let (value, _) = fast_float::parse_partial::<f64, _>(mantissa).ok()?;
    let value = if negative { -value } else { value };
    Some((Numeric::Double(value), i))
}

/// Parses a string that must be numeric in its entirety (leading whitespace
/// is allowed, trailing characters are not).
pub fn is_numeric_string(bytes: &[u8]) -> Option<Numeric> {
    match parse_numeric_prefix(bytes) {
        Some((numeric, end)) if end == bytes.len() => Some(numeric),
        _ => None,
    }
}

/// Loose numeric conversion of a string: the value of its numeric prefix, or
/// integer zero when it has none.
pub fn string_to_numeric(bytes: &[u8]) -> Numeric {
    parse_numeric_prefix(bytes)
        .map(|(numeric, _)| numeric)
        .unwrap_or(Numeric::Int(0))
}

pub fn string_to_double(bytes: &[u8]) -> f64 {
    string_to_numeric(bytes).to_f64()
}

/// Truthiness of a value.
pub(crate) fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Uninit | Value::Null => false,
        Value::Boolean(b) => *b,
        Value::Int64(i) => *i != 0,
        Value::Double(d) => *d != 0.0,
        Value::String(s) => s.to_boolean(),
        Value::Array(a) | Value::Vec(a) | Value::Dict(a) | Value::Keyset(a) => !a.is_empty(),
        Value::Object(o) => o.to_boolean(),
        Value::Resource(_) | Value::Func(_) | Value::Class(_) | Value::ClsMeth(_) => true,
        Value::Record(_) => true,
        Value::Ref(r) => to_boolean(r.get()),
    }
}

pub(crate) fn func_to_string(agent: &Agent, func: &Func) -> StringData {
    if agent.options.raise_func_conversion_warning {
        agent.raise_notice(Notice::FuncToString);
    }
    func.name().clone()
}

pub(crate) fn class_to_string(agent: &Agent, class: &Class) -> StringData {
    if agent.options.raise_class_conversion_warning {
        agent.raise_notice(Notice::ClassToString);
    }
    class.name().clone()
}

pub(crate) fn raise_cls_meth_conversion_warning(agent: &Agent) {
    if agent.options.raise_class_method_conversion_warning {
        agent.raise_notice(Notice::ClsMethToContainer);
    }
}

/// Materializes a class-method pair as the vec `[class name, method name]`.
pub(crate) fn cls_meth_to_vec(cls_meth: &ClsMeth) -> Array {
    Array::new(ArrayData::vec([
        Value::String(cls_meth.class().name().clone()),
        Value::String(cls_meth.func().name().clone()),
    ]))
}

/// Materializes a class-method pair as the legacy list
/// `[0 => class name, 1 => method name]`.
pub(crate) fn cls_meth_to_varray(cls_meth: &ClsMeth) -> Array {
    Array::new(ArrayData::legacy_list([
        Value::String(cls_meth.class().name().clone()),
        Value::String(cls_meth.func().name().clone()),
    ]))
}
