// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Abstract Operations
//!
//! The comparison operators of the runtime and the implicit conversions they
//! perform. Every operator is built from one dispatch engine parameterized
//! by a relational operator policy.

mod relational_dispatch;
mod relational_operators;
pub mod testing_and_comparison;
pub mod type_conversion;
