// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;

#[derive(Debug)]
struct ResourceData {
    id: i64,
    type_name: String,
}

/// Handle to an opaque host resource such as a file or a socket.
///
/// Resources project to numbers through their id and are always truthy.
#[derive(Debug, Clone)]
pub struct Resource(Arc<ResourceData>);

impl Resource {
    pub fn new(id: i64, type_name: impl Into<String>) -> Self {
        Self(Arc::new(ResourceData {
            id,
            type_name: type_name.into(),
        }))
    }

    pub fn id(&self) -> i64 {
        self.0.id
    }

    pub fn type_name(&self) -> &str {
        &self.0.type_name
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn to_int64(&self) -> i64 {
        self.0.id
    }

    pub fn to_double(&self) -> f64 {
        self.0.id as f64
    }
}
