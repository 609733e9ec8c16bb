// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Non-fatal diagnostics raised while comparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// A legacy array was compared with a scalar, object or resource.
    ArrayNonArrayCompare,
    /// A legacy array was compared with a vec, dict or keyset.
    ArrayHackArrayCompare,
    /// A class-method pair was converted into a two element container.
    ClsMethToContainer,
    /// A function reference was converted into its name.
    FuncToString,
    /// A class reference was converted into its name.
    ClassToString,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::ArrayNonArrayCompare => "Hack Array Compat: Comparing PHP array with non-array",
            Notice::ArrayHackArrayCompare => "Hack Array Compat: Comparing PHP array with Hack array",
            Notice::ClsMethToContainer => "Implicit clsmeth to array conversion",
            Notice::FuncToString => "Func to string conversion",
            Notice::ClassToString => "Class to string conversion",
        }
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
