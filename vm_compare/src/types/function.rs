// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use super::StringData;

#[derive(Debug)]
struct FuncData {
    name: StringData,
}

/// Reference to a function. Two references are equal only when they point
/// at the same function.
#[derive(Debug, Clone)]
pub struct Func(Arc<FuncData>);

impl Func {
    pub fn new(name: impl Into<StringData>) -> Self {
        Self(Arc::new(FuncData { name: name.into() }))
    }

    pub fn name(&self) -> &StringData {
        &self.0.name
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug)]
struct ClassData {
    name: StringData,
}

/// Reference to a class.
#[derive(Debug, Clone)]
pub struct Class(Arc<ClassData>);

impl Class {
    pub fn new(name: impl Into<StringData>) -> Self {
        Self(Arc::new(ClassData { name: name.into() }))
    }

    pub fn name(&self) -> &StringData {
        &self.0.name
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A class paired with one of its methods.
#[derive(Debug, Clone)]
pub struct ClsMeth {
    class: Class,
    func: Func,
}

impl ClsMeth {
    pub fn new(class: Class, func: Func) -> Self {
        Self { class, func }
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    pub fn func(&self) -> &Func {
        &self.func
    }

    /// Both halves must be identical.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.class.ptr_eq(&other.class) && self.func.ptr_eq(&other.func)
    }
}
