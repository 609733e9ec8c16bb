// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use vm_compare::{
    Agent, ArrayData, ArrayKey, Class, ClsMeth, Collection, CollectionKind, ComparisonError,
    DefaultHostHooks, ExceptionType, Func, Object, Options, PlainObject, Record, Resource,
    StringData, Value, compare, equal, greater, greater_or_equal, less, less_or_equal, same,
};

fn agent() -> Agent {
    Agent::new(Options::default(), &DefaultHostHooks)
}

fn vec_of(values: &[i64]) -> Value {
    ArrayData::vec(values.iter().copied().map(Value::Int64)).into()
}

fn dict_of(entries: &[(i64, i64)]) -> Value {
    ArrayData::dict(
        entries
            .iter()
            .map(|&(key, value)| (ArrayKey::Int(key), Value::Int64(value))),
    )
    .into()
}

/// One or more values of every kind. No NaN, which is not equal to itself.
fn sample_values() -> Vec<Value> {
    vec![
        Value::Uninit,
        Value::Null,
        Value::Boolean(false),
        Value::Boolean(true),
        Value::Int64(0),
        Value::Int64(1),
        Value::Int64(-7),
        Value::Int64(123),
        Value::Double(0.0),
        Value::Double(1.5),
        Value::Double(-0.5),
        Value::from(""),
        Value::from("0"),
        Value::from("123"),
        Value::from("1e3"),
        Value::from("abc"),
        Value::from(" 12"),
        ArrayData::legacy_list([]).into(),
        ArrayData::legacy_list([Value::Int64(1), Value::from("a")]).into(),
        ArrayData::legacy([(ArrayKey::from("k"), Value::Boolean(true))]).into(),
        vec_of(&[]),
        vec_of(&[1, 2, 3]),
        dict_of(&[(0, 1), (1, 2), (2, 3)]),
        ArrayData::keyset([ArrayKey::Int(1), ArrayKey::from("x")]).into(),
        Object::new(PlainObject::new("Point", [(StringData::from("x"), Value::Int64(1))])).into(),
        Object::new(PlainObject::new("Named", []).with_to_string("123")).into(),
        Object::new(Collection::new(
            CollectionKind::Vector,
            ArrayData::vec([Value::Int64(1)]),
        ))
        .into(),
        Resource::new(1, "stream").into(),
        Func::new("strlen").into(),
        Class::new("Foo").into(),
        ClsMeth::new(Class::new("Foo"), Func::new("bar")).into(),
        Record::new("R", [(StringData::from("f"), Value::Int64(1))]).into(),
    ]
}

/// Values of the kinds that can be ordered against each other.
fn ordered_values() -> Vec<Value> {
    vec![
        Value::Null,
        Value::Boolean(false),
        Value::Boolean(true),
        Value::Int64(0),
        Value::Int64(2),
        Value::Int64(10),
        Value::Int64(-3),
        Value::Double(0.0),
        Value::Double(2.0),
        Value::Double(9.5),
        Value::from(""),
        Value::from("0"),
        Value::from("10"),
        Value::from("1e1"),
        Value::from("9"),
        Value::from(" 2"),
        Value::from("abc"),
        Value::from("abd"),
        vec_of(&[]),
        vec_of(&[1, 2]),
        vec_of(&[1, 3]),
        vec_of(&[2]),
    ]
}

#[test]
fn equality_is_reflexive() {
    let agent = agent();
    for x in sample_values() {
        assert!(equal(&agent, &x, &x).unwrap(), "{x:?} == {x:?}");
        assert!(same(&agent, &x, &x), "{x:?} === {x:?}");
    }
}

#[test]
fn equality_is_symmetric() {
    let agent = agent();
    let values = sample_values();
    for a in &values {
        for b in &values {
            assert_eq!(
                equal(&agent, a, b).unwrap(),
                equal(&agent, b, a).unwrap(),
                "{a:?} == {b:?}"
            );
            assert_eq!(same(&agent, a, b), same(&agent, b, a), "{a:?} === {b:?}");
        }
    }
}

#[test]
fn three_way_comparison_is_consistent() {
    let agent = agent();
    let values = ordered_values();
    for a in &values {
        for b in &values {
            let Ok(cmp) = compare(&agent, a, b) else {
                continue;
            };
            assert!((-1..=1).contains(&cmp));
            assert_eq!(cmp < 0, less(&agent, a, b).unwrap(), "{a:?} < {b:?}");
            assert_eq!(cmp <= 0, less_or_equal(&agent, a, b).unwrap(), "{a:?} <= {b:?}");
            assert_eq!(cmp > 0, greater(&agent, a, b).unwrap(), "{a:?} > {b:?}");
            assert_eq!(
                cmp >= 0,
                greater_or_equal(&agent, a, b).unwrap(),
                "{a:?} >= {b:?}"
            );
            assert_eq!(cmp == 0, equal(&agent, a, b).unwrap(), "{a:?} == {b:?}");
        }
    }
}

#[test]
fn ordering_is_antisymmetric() {
    let agent = agent();
    let values = ordered_values();
    for a in &values {
        for b in &values {
            if less(&agent, a, b).unwrap_or(false) {
                assert!(!greater(&agent, a, b).unwrap(), "{a:?} < {b:?}");
            }
        }
    }
}

#[test]
fn numeric_string_coercion() {
    let agent = agent();
    assert!(equal(&agent, &Value::Int64(123), &Value::from("123")).unwrap());
    assert!(equal(&agent, &Value::Int64(0), &Value::from("abc")).unwrap());
    assert!(!same(&agent, &Value::Int64(123), &Value::from("123")));
    assert!(equal(&agent, &Value::from("1e3"), &Value::from("1000")).unwrap());
    assert!(!equal(&agent, &Value::from("abc"), &Value::from("ABC")).unwrap());
    assert!(less(&agent, &Value::from("9"), &Value::from("10")).unwrap());
    assert!(greater(&agent, &Value::from("9"), &Value::from("10a")).unwrap());
}

#[test]
fn container_families_are_isolated() {
    let agent = agent();
    let vec = vec_of(&[1, 2, 3]);
    let dict = dict_of(&[(0, 1), (1, 2), (2, 3)]);
    let legacy: Value = ArrayData::legacy_list([1, 2, 3].map(Value::Int64)).into();
    assert!(!equal(&agent, &vec, &dict).unwrap());
    assert!(!equal(&agent, &vec, &legacy).unwrap());
    assert!(!equal(&agent, &dict, &legacy).unwrap());
    assert_eq!(
        less(&agent, &vec_of(&[1]), &dict_of(&[(0, 1)])),
        Err(ComparisonError::VecMismatch)
    );
    assert_eq!(
        less(&agent, &legacy, &vec),
        Err(ComparisonError::VecMismatch)
    );
    assert_eq!(
        compare(&agent, &dict, &legacy),
        Err(ComparisonError::DictMismatch)
    );
}

#[test]
fn nan_orders_below_everything() {
    let agent = agent();
    let nan = Value::Double(f64::NAN);
    assert_eq!(compare(&agent, &nan, 1.0).unwrap(), -1);
    assert_eq!(compare(&agent, &Value::Double(1.0), f64::NAN).unwrap(), -1);
    assert!(!less(&agent, &nan, 1.0).unwrap());
    assert!(!greater(&agent, &nan, 1.0).unwrap());
}

#[test]
fn strict_equality_separates_kinds() {
    let agent = agent();
    assert!(equal(&agent, &Value::Int64(1), 1.0).unwrap());
    assert!(!same(&agent, &Value::Int64(1), 1.0));
    assert!(equal(&agent, &Value::Null, false).unwrap());
    assert!(!same(&agent, &Value::Null, false));
    assert!(same(&agent, &Value::Null, &Value::Uninit));
}

#[test]
fn strictly_equal_values_share_a_kind() {
    let agent = agent();
    let values = sample_values();
    for a in &values {
        for b in &values {
            if same(&agent, a, b) {
                assert!(
                    a.kind() == b.kind() || (a.is_null() && b.is_null()),
                    "{a:?} === {b:?}"
                );
            }
        }
    }
}

#[test]
fn mismatches_are_type_errors() {
    let agent = agent();
    let record = || Value::from(Record::new("R", [(StringData::from("f"), Value::Int64(1))]));
    let keyset: Value = ArrayData::keyset([ArrayKey::Int(1)]).into();
    let collection: Value = Object::new(Collection::new(
        CollectionKind::Vector,
        ArrayData::vec([Value::Int64(1)]),
    ))
    .into();
    let errors = [
        less(&agent, &vec_of(&[1]), &dict_of(&[(0, 1)])),
        compare(&agent, &dict_of(&[(0, 1)]), &dict_of(&[(0, 1)])).map(|cmp| cmp == 0),
        less(&agent, &keyset, &keyset),
        less(&agent, &collection, 1),
        less(&agent, &record(), 1),
        less(&agent, &record(), &record()),
    ]
    .map(Result::unwrap_err);
    assert_eq!(
        errors,
        [
            ComparisonError::VecMismatch,
            ComparisonError::DictMismatch,
            ComparisonError::KeysetMismatch,
            ComparisonError::CollectionMismatch,
            ComparisonError::RecordMismatch,
            ComparisonError::RecordOrdering,
        ]
    );

    let unified = Agent::new(
        Options {
            unify_newer_container_family: true,
            ..Default::default()
        },
        &DefaultHostHooks,
    );
    let pair: Value = ClsMeth::new(Class::new("Foo"), Func::new("bar")).into();
    let cls_meth = less(&unified, &pair, 1).unwrap_err();
    assert_eq!(cls_meth, ComparisonError::ClsMethMismatch);

    for error in errors.iter().chain([&cls_meth]) {
        assert_eq!(error.exception_type(), ExceptionType::TypeError, "{error:?}");
        assert!(error.to_string().starts_with("TypeError: "), "{error}");
    }
}

#[test]
fn strict_container_equality() {
    let agent = agent();
    let ab: Value = ArrayData::dict([
        (ArrayKey::from("a"), Value::Int64(1)),
        (ArrayKey::from("b"), Value::Int64(2)),
    ])
    .into();
    let ba: Value = ArrayData::dict([
        (ArrayKey::from("b"), Value::Int64(2)),
        (ArrayKey::from("a"), Value::Int64(1)),
    ])
    .into();
    assert!(equal(&agent, &ab, &ba).unwrap());
    assert!(!same(&agent, &ab, &ba));

    let keyset1: Value = ArrayData::keyset([ArrayKey::Int(1), ArrayKey::Int(2)]).into();
    let keyset2: Value = ArrayData::keyset([ArrayKey::Int(2), ArrayKey::Int(1)]).into();
    assert!(same(&agent, &keyset1, &keyset2));
}

#[test]
fn legacy_array_ordering_is_not_antisymmetric() {
    let agent = agent();
    let a: Value = ArrayData::legacy([(ArrayKey::from("a"), Value::Int64(1))]).into();
    let b: Value = ArrayData::legacy([(ArrayKey::from("b"), Value::Int64(1))]).into();
    assert_eq!(compare(&agent, &a, &b).unwrap(), 1);
    assert_eq!(compare(&agent, &b, &a).unwrap(), 1);
    assert!(!less(&agent, &a, &b).unwrap());
    assert!(!greater(&agent, &a, &b).unwrap());
    assert!(!equal(&agent, &a, &b).unwrap());
}

#[test]
fn legacy_arrays_against_scalars() {
    let agent = agent();
    let empty: Value = ArrayData::legacy_list([]).into();
    let full: Value = ArrayData::legacy_list([Value::Int64(0)]).into();
    assert!(equal(&agent, &empty, &Value::Null).unwrap());
    assert!(equal(&agent, &Value::Null, &empty).unwrap());
    assert!(equal(&agent, &full, true).unwrap());
    assert!(greater(&agent, &full, 1000).unwrap());
    assert!(greater(&agent, &empty, &Value::from("zzz")).unwrap());
}

#[test]
fn comparisons_run_concurrently() {
    let agent = agent();
    let values = sample_values();
    let expected: Vec<bool> = values
        .iter()
        .map(|value| equal(&agent, value, &Value::Int64(1)).unwrap())
        .collect();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (value, expected) in values.iter().zip(&expected) {
                    assert_eq!(equal(&agent, value, &Value::Int64(1)).unwrap(), *expected);
                }
            });
        }
    });
}
