// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod array;
mod function;
mod object;
mod ordered_map;
mod record;
mod resource;
mod string;
mod value;

pub use array::{Array, ArrayData, ArrayKey, ArrayKind};
pub use function::{Class, ClsMeth, Func};
pub use object::{Collection, CollectionKind, Object, ObjectData, PlainObject};
pub(crate) use ordered_map::OrderedMap;
pub use record::Record;
pub use resource::Resource;
pub use string::StringData;
pub use value::{Kind, Reference, Value};
