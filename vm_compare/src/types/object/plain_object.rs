// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::any::Any;

use super::{Object, ObjectData};
use crate::{
    runtime::{Agent, CmpResult, ExceptionType},
    types::{Array, ArrayData, ArrayKey, StringData, Value},
};

/// An instance of a user class: a class name, its properties and an
/// optional string conversion.
#[derive(Debug)]
pub struct PlainObject {
    class_name: String,
    properties: Array,
    to_string: Option<StringData>,
}

impl PlainObject {
    pub fn new(
        class_name: impl Into<String>,
        properties: impl IntoIterator<Item = (StringData, Value)>,
    ) -> Self {
        let properties = ArrayData::legacy(
            properties
                .into_iter()
                .map(|(name, value)| (ArrayKey::Str(name), value)),
        );
        Self {
            class_name: class_name.into(),
            properties: Array::new(properties),
            to_string: None,
        }
    }

    /// Gives the object a string conversion producing `value`.
    pub fn with_to_string(mut self, value: impl Into<StringData>) -> Self {
        self.to_string = Some(value.into());
        self
    }

    pub fn properties(&self) -> &Array {
        &self.properties
    }

    fn same_class<'a>(&self, other: &'a Object) -> Option<&'a PlainObject> {
        other
            .downcast_ref::<PlainObject>()
            .filter(|other| other.class_name == self.class_name)
    }
}

impl ObjectData for PlainObject {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn has_to_string(&self) -> bool {
        self.to_string.is_some()
    }

    fn invoke_to_string(&self, agent: &Agent) -> CmpResult<StringData> {
        match &self.to_string {
            Some(value) => Ok(value.clone()),
            None => Err(agent.throw_exception(
                ExceptionType::Error,
                format!(
                    "Object of class {} could not be converted to string",
                    self.class_name
                ),
            )),
        }
    }

    /// Instances of the same class are equal when their properties are.
    fn equal(&self, agent: &Agent, other: &Object) -> CmpResult<bool> {
        match self.same_class(other) {
            Some(other) => self.properties.legacy_equal(agent, &other.properties),
            None => Ok(false),
        }
    }

    /// Instances of different classes are uncomparable, which is reported as
    /// `1` whichever side is asked.
    fn compare(&self, agent: &Agent, other: &Object) -> CmpResult<i64> {
        match self.same_class(other) {
            Some(other) => self.properties.legacy_compare(agent, &other.properties),
            None => Ok(1),
        }
    }
}
