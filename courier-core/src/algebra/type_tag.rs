/*
 * Copyright (c) 2025. Courier Contributors
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The designated sentinel type.
///
/// Accessors on an empty [`TypeSeq`](crate::algebra::TypeSeq) and the padding
/// variants of slice/zip yield the tag of `Unit` rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unit;

/// An opaque runtime descriptor for a statically known type.
///
/// A `TypeTag` carries the [`TypeId`] used for equality plus the type's name
/// for diagnostics. [`TypeTag::of`] is the bridge between the static type
/// world and the dynamic payload world: it is the only reflection facility
/// the algebra needs.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Returns the tag describing `T`.
    pub fn of<T: 'static>() -> Self {
        TypeTag { id: TypeId::of::<T>(), name: type_name::<T>() }
    }

    /// Returns the [`Unit`] sentinel tag.
    pub fn unit() -> Self {
        Self::of::<Unit>()
    }

    /// Tests whether this tag is the [`Unit`] sentinel.
    pub fn is_unit(&self) -> bool {
        self.id == TypeId::of::<Unit>()
    }

    /// Returns the underlying [`TypeId`].
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Returns the type's name, for diagnostics only.
    ///
    /// Two tags comparing equal are guaranteed to describe the same type;
    /// the converse does not hold for names.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Tag identity is the TypeId alone; the name is diagnostic baggage.
impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_equality_ignores_name() {
        assert_eq!(TypeTag::of::<i32>(), TypeTag::of::<i32>());
        assert_ne!(TypeTag::of::<i32>(), TypeTag::of::<u32>());
    }

    #[test]
    fn unit_sentinel_is_recognizable() {
        assert!(TypeTag::unit().is_unit());
        assert!(!TypeTag::of::<String>().is_unit());
        assert_eq!(TypeTag::unit(), TypeTag::of::<Unit>());
    }
}
