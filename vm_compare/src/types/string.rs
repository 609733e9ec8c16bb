// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::cmp::Ordering;
use std::{borrow::Cow, sync::Arc};

use crate::abstract_operations::type_conversion::{
    Numeric, is_numeric_string, string_to_double, string_to_numeric,
};

/// An immutable, shared byte string.
///
/// Strings of the runtime are binary safe: they are not required to be valid
/// UTF-8 and all comparisons work on bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StringData(Arc<[u8]>);

impl core::fmt::Debug for StringData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl From<&str> for StringData {
    fn from(value: &str) -> Self {
        Self(Arc::from(value.as_bytes()))
    }
}

impl From<String> for StringData {
    fn from(value: String) -> Self {
        Self(Arc::from(value.into_bytes()))
    }
}

impl From<&[u8]> for StringData {
    fn from(value: &[u8]) -> Self {
        Self(Arc::from(value))
    }
}

impl StringData {
    pub fn empty() -> Self {
        Self(Arc::from(&[][..]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Byte-for-byte equality, used by strict equality.
    pub fn same(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }

    /// Loose equality: two numeric strings are equal when their numeric
    /// values are, everything else falls back to byte equality.
    pub fn equal(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        match self.numeric_compare(other) {
            Some(ret) => ret == 0,
            None => self.same(other),
        }
    }

    /// Loose three-way comparison returning -1, 0 or 1.
    pub fn compare(&self, other: &Self) -> i64 {
        if self.ptr_eq(other) {
            return 0;
        }
        if let Some(ret) = self.numeric_compare(other) {
            return ret;
        }
        match self.as_bytes().cmp(other.as_bytes()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Compares both strings numerically, or returns `None` when either one
    /// is not a numeric string or is a non-finite double.
    fn numeric_compare(&self, other: &Self) -> Option<i64> {
        let x = is_numeric_string(self.as_bytes()).filter(Numeric::is_finite)?;
        let y = is_numeric_string(other.as_bytes()).filter(Numeric::is_finite)?;
        let ret = match (x, y) {
            (Numeric::Int(x), Numeric::Int(y)) => match x.cmp(&y) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            },
            (x, y) => {
                let (x, y) = (x.to_f64(), y.to_f64());
                if x > y {
                    1
                } else if x == y {
                    0
                } else {
                    -1
                }
            }
        };
        Some(ret)
    }

    /// The empty string and `"0"` are falsy, every other string is truthy.
    pub fn to_boolean(&self) -> bool {
        !(self.is_empty() || self.as_bytes() == b"0")
    }

    /// Value of the longest numeric prefix, or integer zero.
    pub fn to_numeric(&self) -> Numeric {
        string_to_numeric(self.as_bytes())
    }

    /// Value of the longest numeric prefix as a double, or zero.
    pub fn to_double(&self) -> f64 {
        string_to_double(self.as_bytes())
    }
}

#[cfg(test)]
mod test {
    use super::StringData;

    #[test]
    fn loose_string_equality() {
        let s = |s: &str| StringData::from(s);
        assert!(s("abc").equal(&s("abc")));
        assert!(!s("abc").equal(&s("abd")));
        assert!(s("1e3").equal(&s("1000")));
        assert!(s(" 10").equal(&s("10.0")));
        assert!(!s("10 ").equal(&s("10")));
        assert!(!s("abc").equal(&s("ABC")));
        assert!(s("").equal(&StringData::empty()));
    }

    #[test]
    fn loose_string_compare() {
        let s = |s: &str| StringData::from(s);
        assert_eq!(s("10").compare(&s("9")), 1);
        assert_eq!(s("10").compare(&s("9a")), -1);
        assert_eq!(s("abc").compare(&s("abcd")), -1);
        assert_eq!(s("b").compare(&s("abcd")), 1);
        assert_eq!(s("1.5").compare(&s("1.50")), 0);
    }

    #[test]
    fn string_truthiness() {
        assert!(!StringData::from("").to_boolean());
        assert!(!StringData::from("0").to_boolean());
        assert!(StringData::from("0.0").to_boolean());
        assert!(StringData::from("00").to_boolean());
        assert!(StringData::from(" ").to_boolean());
    }
}
