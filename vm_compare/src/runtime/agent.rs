// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## Agent
//!
//! The agent bundles everything a comparison may consult besides its two
//! operands: the runtime [`Options`] and the embedder's [`HostHooks`].
//! Neither is mutated during a comparison, so one agent can be shared by any
//! number of threads.

use super::Notice;

/// Runtime-wide flags consumed by the comparator.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Treat class-method pairs as peers of the vec/dict/keyset family instead
    /// of silently converting them into legacy arrays.
    pub unify_newer_container_family: bool,
    /// Report legacy array vs vec/dict/keyset comparisons (and, for the
    /// ordering operators, legacy array vs non-array comparisons when
    /// [`Options::check_compare_non_any_array`] is also set).
    pub emit_compatibility_diagnostics: bool,
    /// Extend the compatibility diagnostics of the ordering operators to
    /// legacy array vs non-array comparisons.
    pub check_compare_non_any_array: bool,
    /// Warn when a class-method pair is materialized into a container.
    pub raise_class_method_conversion_warning: bool,
    /// Warn when a function reference is materialized into its name.
    pub raise_func_conversion_warning: bool,
    /// Warn when a class reference is materialized into its name.
    pub raise_class_conversion_warning: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unify_newer_container_family: false,
            emit_compatibility_diagnostics: false,
            check_compare_non_any_array: false,
            raise_class_method_conversion_warning: true,
            raise_func_conversion_warning: false,
            raise_class_conversion_warning: false,
        }
    }
}

pub type CmpResult<T> = core::result::Result<T, ComparisonError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    TypeError,
}

/// A comparison that has no defined result, or an exception raised by host
/// code while one of the operands was being converted.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonError {
    /// A vec was ordered against something that is not a vec.
    VecMismatch,
    /// A dict was ordered against anything, including another dict.
    DictMismatch,
    /// A keyset was ordered against anything, including another keyset.
    KeysetMismatch,
    /// A collection object was ordered against a non-object, or any ordering
    /// involving a collection object.
    CollectionMismatch,
    /// A record was compared with something that is not a record.
    RecordMismatch,
    /// Two records were ordered.
    RecordOrdering,
    /// A class-method pair was compared with something that is not a pair.
    ClsMethMismatch,
    /// Host code threw while converting an operand.
    Thrown {
        kind: ExceptionType,
        message: String,
    },
}

impl ComparisonError {
    pub fn exception_type(&self) -> ExceptionType {
        match self {
            ComparisonError::VecMismatch
            | ComparisonError::DictMismatch
            | ComparisonError::KeysetMismatch
            | ComparisonError::CollectionMismatch
            | ComparisonError::RecordMismatch
            | ComparisonError::RecordOrdering
            | ComparisonError::ClsMethMismatch => ExceptionType::TypeError,
            ComparisonError::Thrown { kind, .. } => *kind,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ComparisonError::VecMismatch => {
                "Cannot use relational comparison operators (<, <=, >, >=, <=>) to compare a vec with a non-vec"
            }
            ComparisonError::DictMismatch => {
                "Cannot use relational comparison operators (<, <=, >, >=, <=>) with dicts"
            }
            ComparisonError::KeysetMismatch => {
                "Cannot use relational comparison operators (<, <=, >, >=, <=>) with keysets"
            }
            ComparisonError::CollectionMismatch => {
                "Cannot use relational comparison operators (<, <=, >, >=, <=>) with collections"
            }
            ComparisonError::RecordMismatch => "Cannot compare records with non-records",
            ComparisonError::RecordOrdering => {
                "Cannot use relational comparison operators (<, <=, >, >=, <=>) with records"
            }
            ComparisonError::ClsMethMismatch => {
                "Cannot use relational comparison operators (<, <=, >, >=, <=>) to compare a clsmeth with a non-clsmeth"
            }
            ComparisonError::Thrown { message, .. } => message,
        }
    }
}

impl core::fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}: {}", self.exception_type(), self.message())
    }
}

impl core::error::Error for ComparisonError {}

/// Hooks through which the comparator talks back to its embedder.
pub trait HostHooks: core::fmt::Debug + Sync {
    /// Receives every non-fatal diagnostic raised during a comparison. The
    /// comparison result is never affected by what the host does here.
    fn report_notice(&self, notice: Notice);
}

#[derive(Debug, Clone, Copy)]
pub struct Agent {
    pub(crate) options: Options,
    pub(crate) host_hooks: &'static dyn HostHooks,
}

impl Agent {
    pub fn new(options: Options, host_hooks: &'static dyn HostHooks) -> Self {
        Self {
            options,
            host_hooks,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub(crate) fn raise_notice(&self, notice: Notice) {
        self.host_hooks.report_notice(notice);
    }

    /// Creates the error value for an exception thrown by host code, e.g. a
    /// string conversion that failed.
    pub fn throw_exception(&self, kind: ExceptionType, message: impl Into<String>) -> ComparisonError {
        ComparisonError::Thrown {
            kind,
            message: message.into(),
        }
    }

    /// Compatibility check for legacy array vs vec/dict/keyset comparisons.
    pub(crate) fn check_hack_array_compare(&self) -> bool {
        self.options.emit_compatibility_diagnostics
    }

    /// Compatibility check for legacy array vs non-array comparisons by the
    /// ordering operators.
    pub(crate) fn check_hack_array_compare_non_any_array(&self) -> bool {
        self.options.emit_compatibility_diagnostics && self.options.check_compare_non_any_array
    }
}
