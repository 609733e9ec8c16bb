// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::any::Any;

use vm_compare::{
    Agent, ArrayData, ArrayKey, CmpResult, Collection, CollectionKind, ComparisonError,
    DefaultHostHooks, ExceptionType, Object, ObjectData, Options, PlainObject, StringData, Value,
    compare, equal, greater, less, same,
};

fn agent() -> Agent {
    Agent::new(Options::default(), &DefaultHostHooks)
}

fn point(x: i64, y: i64) -> Object {
    Object::new(PlainObject::new(
        "Point",
        [
            (StringData::from("x"), Value::Int64(x)),
            (StringData::from("y"), Value::Int64(y)),
        ],
    ))
}

/// An object whose string conversion always throws.
#[derive(Debug)]
struct Throwing;

impl ObjectData for Throwing {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn class_name(&self) -> &str {
        "Throwing"
    }

    fn has_to_string(&self) -> bool {
        true
    }

    fn invoke_to_string(&self, agent: &Agent) -> CmpResult<StringData> {
        Err(agent.throw_exception(ExceptionType::Error, "toString failed"))
    }

    fn equal(&self, _agent: &Agent, _other: &Object) -> CmpResult<bool> {
        Ok(false)
    }

    fn compare(&self, _agent: &Agent, _other: &Object) -> CmpResult<i64> {
        Ok(1)
    }
}

#[test]
fn plain_objects_compare_by_properties() {
    let agent = agent();
    let a = Value::from(point(1, 2));
    assert!(equal(&agent, &a, &point(1, 2)).unwrap());
    assert!(!same(&agent, &a, &point(1, 2)));
    assert!(same(&agent, &a, &a));
    assert!(!equal(&agent, &a, &point(1, 3)).unwrap());
    assert!(less(&agent, &a, &point(1, 3)).unwrap());
    assert!(greater(&agent, &Value::from(point(2, 0)), &point(1, 9)).unwrap());
    assert_eq!(compare(&agent, &a, &point(1, 2)).unwrap(), 0);
}

#[test]
fn objects_of_different_classes_are_uncomparable() {
    let agent = agent();
    let a = Value::from(point(1, 2));
    let other = Object::new(PlainObject::new("Other", []));
    assert!(!equal(&agent, &a, &other).unwrap());
    assert_eq!(compare(&agent, &a, &other).unwrap(), 1);
    assert_eq!(compare(&agent, &Value::from(other.clone()), &point(1, 2)).unwrap(), 1);
    assert!(!less(&agent, &a, &other).unwrap());
    assert!(!greater(&agent, &a, &other).unwrap());
}

#[test]
fn objects_against_scalars() {
    let agent = agent();
    let a = Value::from(point(0, 0));
    assert!(equal(&agent, &a, true).unwrap());
    assert!(equal(&agent, &a, 1).unwrap());
    assert!(equal(&agent, &a, 1.0).unwrap());
    assert!(!equal(&agent, &a, &Value::Null).unwrap());
    assert!(greater(&agent, &a, &Value::from("text")).unwrap());
    assert!(less(&agent, &Value::from("text"), &point(0, 0)).unwrap());
}

#[test]
fn string_conversion_is_used_against_strings() {
    let agent = agent();
    let named = Object::new(PlainObject::new("Named", []).with_to_string("apple"));
    assert!(equal(&agent, &Value::from("apple"), &named).unwrap());
    assert!(equal(&agent, &Value::from(named.clone()), &Value::from("apple")).unwrap());
    assert!(less(&agent, &Value::from(named.clone()), &Value::from("banana")).unwrap());
    assert!(!same(&agent, &Value::from(named), &Value::from("apple")));
}

#[test]
fn string_conversion_failures_propagate() {
    let agent = agent();
    let throwing = Object::new(Throwing);
    let expected = Err(ComparisonError::Thrown {
        kind: ExceptionType::Error,
        message: "toString failed".into(),
    });
    assert_eq!(equal(&agent, &Value::from("x"), &throwing), expected);
    assert_eq!(
        less(&agent, &Value::from(throwing.clone()), &Value::from("x")),
        expected
    );
    // No conversion is attempted for anything but strings.
    assert!(equal(&agent, &Value::from(throwing), 1).unwrap());
}

#[test]
fn collections_compare_within_their_family() {
    let agent = agent();
    let vector = |values: [i64; 2], kind| {
        Value::from(Object::new(Collection::new(
            kind,
            ArrayData::vec(values.map(Value::Int64)),
        )))
    };
    let a = vector([1, 2], CollectionKind::Vector);
    let b = vector([1, 2], CollectionKind::ImmVector);
    let pair = vector([1, 2], CollectionKind::Pair);
    assert!(equal(&agent, &a, &b).unwrap());
    assert!(!equal(&agent, &a, &pair).unwrap());
    assert!(!equal(&agent, &a, &vector([2, 1], CollectionKind::Vector)).unwrap());

    let map = |entries: [(&str, i64); 2]| {
        Value::from(Object::new(Collection::new(
            CollectionKind::Map,
            ArrayData::dict(
                entries.map(|(key, value)| (ArrayKey::from(key), Value::Int64(value))),
            ),
        )))
    };
    assert!(equal(&agent, &map([("a", 1), ("b", 2)]), &map([("b", 2), ("a", 1)])).unwrap());

    let set = Value::from(Object::new(Collection::new(
        CollectionKind::Set,
        ArrayData::keyset([ArrayKey::Int(1)]),
    )));
    assert!(!equal(&agent, &a, &set).unwrap());
}

#[test]
fn collections_cannot_be_ordered() {
    let agent = agent();
    let empty = Value::from(Object::new(Collection::new(
        CollectionKind::Vector,
        ArrayData::vec([]),
    )));
    let full = Value::from(Object::new(Collection::new(
        CollectionKind::Set,
        ArrayData::keyset([ArrayKey::from("k")]),
    )));
    assert_eq!(
        less(&agent, &empty, &full),
        Err(ComparisonError::CollectionMismatch)
    );
    assert_eq!(
        compare(&agent, &empty, &empty),
        Err(ComparisonError::CollectionMismatch)
    );
    assert_eq!(
        less(&agent, &empty, 1),
        Err(ComparisonError::CollectionMismatch)
    );
    assert_eq!(
        compare(&agent, &Value::from(point(0, 0)), &full),
        Err(ComparisonError::CollectionMismatch)
    );
    assert!(!equal(&agent, &empty, 0).unwrap());
    assert!(equal(&agent, &empty, false).unwrap());
    assert!(equal(&agent, &full, true).unwrap());
}

#[test]
#[should_panic]
fn collections_check_their_storage() {
    Collection::new(CollectionKind::Map, ArrayData::vec([Value::Int64(1)]));
}

#[test]
#[should_panic]
fn pairs_hold_two_elements() {
    Collection::new(CollectionKind::Pair, ArrayData::vec([Value::Int64(1)]));
}
