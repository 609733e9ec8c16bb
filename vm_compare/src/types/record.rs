// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use super::{StringData, Value};
use crate::{
    abstract_operations::testing_and_comparison::{equal, same},
    runtime::{Agent, CmpResult},
};

#[derive(Debug)]
struct RecordData {
    record_name: StringData,
    fields: Vec<(StringData, Value)>,
}

/// An instance of a record type: a named, fixed list of fields.
#[derive(Debug, Clone)]
pub struct Record(Arc<RecordData>);

impl Record {
    pub fn new(
        record_name: impl Into<StringData>,
        fields: impl IntoIterator<Item = (StringData, Value)>,
    ) -> Self {
        Self(Arc::new(RecordData {
            record_name: record_name.into(),
            fields: fields.into_iter().collect(),
        }))
    }

    pub fn record_name(&self) -> &StringData {
        &self.0.record_name
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&StringData, &Value)> {
        self.0.fields.iter().map(|(name, value)| (name, value))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn same_layout(&self, other: &Self) -> bool {
        self.record_name().same(other.record_name())
            && self.0.fields.len() == other.0.fields.len()
            && self
                .fields()
                .zip(other.fields())
                .all(|((a, _), (b, _))| a.same(b))
    }

    /// Field-wise loose equality of two records of the same type.
    pub(crate) fn equal(&self, agent: &Agent, other: &Self) -> CmpResult<bool> {
        if self.ptr_eq(other) {
            return Ok(true);
        }
        if !self.same_layout(other) {
            return Ok(false);
        }
        for ((_, a), (_, b)) in self.fields().zip(other.fields()) {
            if !equal(agent, a, b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Field-wise strict equality of two records of the same type.
    pub(crate) fn same(&self, agent: &Agent, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.same_layout(other)
                && self
                    .fields()
                    .zip(other.fields())
                    .all(|((_, a), (_, b))| same(agent, a, b)))
    }
}
