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

use std::sync::Arc;

use crate::algebra::{TypeSeq, TypeTag};
use crate::traits::MessageBody;

/// The type-erased payload of an envelope: an ordered pack of message
/// elements together with their argument [`TypeSeq`].
///
/// An `ArgPack` exposes exactly the capability the correlator needs from a
/// payload: element count and per-index runtime type identity. The tags are
/// recorded when a value is pushed, so the signature always agrees with the
/// stored elements.
#[derive(Debug, Clone, Default)]
pub struct ArgPack {
    elements: Vec<Arc<dyn MessageBody>>,
    signature: TypeSeq,
}

impl ArgPack {
    /// Creates an empty pack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pack holding a single element.
    pub fn single<T: MessageBody>(value: T) -> Self {
        Self::new().push(value)
    }

    /// Appends `value`, recording its type tag.
    pub fn push<T: MessageBody>(mut self, value: T) -> Self {
        self.signature = self.signature.push_back(TypeTag::of::<T>());
        self.elements.push(Arc::new(value));
        self
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Tests whether the pack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Runtime type identity of the element at `index`, or the unit sentinel
    /// when out of range.
    pub fn tag_at(&self, index: usize) -> TypeTag {
        self.signature.at(index)
    }

    /// The argument types of this payload, in element order.
    pub fn signature(&self) -> &TypeSeq {
        &self.signature
    }

    /// Borrows the element at `index` as `T`, when present and of that type.
    pub fn get<T: 'static>(&self, index: usize) -> Option<&T> {
        (**self.elements.get(index)?).as_any().downcast_ref::<T>()
    }

    /// Clones the element at `index` out of the pack, when present.
    pub fn element(&self, index: usize) -> Option<Box<dyn MessageBody>> {
        self.elements.get(index).map(|e| dyn_clone::clone_box(&**e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_seq;

    #[test]
    fn records_tags_in_push_order() {
        let pack = ArgPack::new().push(7_i32).push("sealed".to_string());
        assert_eq!(pack.len(), 2);
        assert_eq!(pack.signature(), &type_seq![i32, String]);
        assert_eq!(pack.tag_at(0), TypeTag::of::<i32>());
        assert!(pack.tag_at(5).is_unit());
    }

    #[test]
    fn downcasts_elements_by_index() {
        let pack = ArgPack::single(42_i32);
        assert_eq!(pack.get::<i32>(0), Some(&42));
        assert!(pack.get::<String>(0).is_none());
        assert!(pack.get::<i32>(1).is_none());
        let cloned = pack.element(0).unwrap();
        assert_eq!(cloned.as_any().downcast_ref::<i32>(), Some(&42));
    }
}
