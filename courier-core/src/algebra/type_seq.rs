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

use std::fmt;

use derive_new::new;

use crate::algebra::TypeTag;

/// One element of a zipped sequence.
#[derive(new, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypePair {
    /// The element contributed by the left-hand sequence.
    pub first: TypeTag,
    /// The element contributed by the right-hand sequence.
    pub second: TypeTag,
}

/// Error produced by the strict [`TypeSeq::zip`] family when the two
/// sequences differ in length.
///
/// Mismatched-length zipping of genuinely paired lists signals an authoring
/// mistake, so unlike the rest of the algebra this is not papered over with
/// the unit sentinel. It surfaces at interface-construction time and must
/// never reach a running actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    /// Size of the left-hand sequence.
    pub left: usize,
    /// Size of the right-hand sequence.
    pub right: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot zip sequences of different size ({} vs {})", self.left, self.right)
    }
}

impl std::error::Error for LengthMismatch {}

/// An ordered, possibly empty, immutable sequence of [`TypeTag`]s.
///
/// `TypeSeq` is a pure specification artifact: every operation returns a new
/// sequence and none of them touches shared state. The derived `PartialEq`
/// is the order-sensitive equality; [`TypeSeq::equal`] is the
/// order-insensitive, duplicate-insensitive set equality used for interface
/// matching.
///
/// Accessors are total: [`head`](TypeSeq::head), [`back`](TypeSeq::back) and
/// [`at`](TypeSeq::at) yield [`TypeTag::unit`] rather than failing, so
/// callers needing boundedness must check [`size`](TypeSeq::size) first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeSeq {
    tags: Vec<TypeTag>,
}

/// Builds a [`TypeSeq`] from a comma-separated list of types.
///
/// # Example
/// ```
/// use courier_core::type_seq;
/// let seq = type_seq![i32, String];
/// assert_eq!(seq.size(), 2);
/// ```
#[macro_export]
macro_rules! type_seq {
    () => {
        $crate::prelude::TypeSeq::new()
    };
    ($($ty:ty),+ $(,)?) => {
        $crate::prelude::TypeSeq::from_tags(vec![$($crate::prelude::TypeTag::of::<$ty>()),+])
    };
}

impl TypeSeq {
    /// Creates the empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence from the given tags, preserving order.
    pub fn from_tags(tags: Vec<TypeTag>) -> Self {
        TypeSeq { tags }
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.tags.len()
    }

    /// Tests whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeTag> {
        self.tags.iter()
    }

    /// Tests whether `tag` occurs anywhere in the sequence.
    pub fn contains(&self, tag: &TypeTag) -> bool {
        self.tags.contains(tag)
    }

    /// First element, or the unit sentinel for an empty sequence.
    pub fn head(&self) -> TypeTag {
        self.tags.first().copied().unwrap_or_else(TypeTag::unit)
    }

    /// Last element, or the unit sentinel for an empty sequence.
    pub fn back(&self) -> TypeTag {
        self.tags.last().copied().unwrap_or_else(TypeTag::unit)
    }

    /// Everything but the first element; the tail of the empty sequence is
    /// the empty sequence.
    pub fn tail(&self) -> TypeSeq {
        TypeSeq { tags: self.tags.iter().skip(1).copied().collect() }
    }

    /// Element at `index`, or the unit sentinel when out of range.
    pub fn at(&self, index: usize) -> TypeTag {
        self.tags.get(index).copied().unwrap_or_else(TypeTag::unit)
    }

    /// Sub-sequence `[first, last)`.
    ///
    /// A `first` beyond `last` is clamped to `last`; positions past the end
    /// of the sequence are filled with the unit sentinel, so the result
    /// always has `last - first` elements.
    pub fn slice(&self, first: usize, last: usize) -> TypeSeq {
        let first = first.min(last);
        TypeSeq { tags: (first..last).map(|i| self.at(i)).collect() }
    }

    /// Resizes to `new_size` elements, appending unit sentinels or dropping
    /// trailing elements as needed.
    pub fn pad_right(&self, new_size: usize) -> TypeSeq {
        self.slice(0, new_size)
    }

    /// Grows to `new_size` elements by prepending unit sentinels; a sequence
    /// already at least that long is returned unchanged.
    pub fn pad_left(&self, new_size: usize) -> TypeSeq {
        if self.size() >= new_size {
            return self.clone();
        }
        let mut tags = vec![TypeTag::unit(); new_size - self.size()];
        tags.extend_from_slice(&self.tags);
        TypeSeq { tags }
    }

    /// Pairs this sequence with `other` element by element.
    ///
    /// # Errors
    /// Fails with [`LengthMismatch`] when the sequences differ in size.
    pub fn zip(&self, other: &TypeSeq) -> Result<Vec<TypePair>, LengthMismatch> {
        if self.size() != other.size() {
            return Err(LengthMismatch { left: self.size(), right: other.size() });
        }
        Ok(self
            .tags
            .iter()
            .zip(other.tags.iter())
            .map(|(&first, &second)| TypePair::new(first, second))
            .collect())
    }

    /// Combines this sequence with `other` element by element through `combine`.
    ///
    /// # Errors
    /// Fails with [`LengthMismatch`] when the sequences differ in size.
    pub fn zip_with(
        &self,
        other: &TypeSeq,
        combine: impl Fn(TypeTag, TypeTag) -> TypeTag,
    ) -> Result<TypeSeq, LengthMismatch> {
        let pairs = self.zip(other)?;
        Ok(TypeSeq { tags: pairs.into_iter().map(|p| combine(p.first, p.second)).collect() })
    }

    /// Pairs this sequence with `other`, padding the shorter one with the
    /// unit sentinel up to the longer length. Always succeeds.
    pub fn zip_all(&self, other: &TypeSeq) -> Vec<TypePair> {
        let len = self.size().max(other.size());
        (0..len).map(|i| TypePair::new(self.at(i), other.at(i))).collect()
    }

    /// Combines this sequence with `other` through `combine`, padding the
    /// shorter one with the unit sentinel. Always succeeds.
    pub fn zip_all_with(
        &self,
        other: &TypeSeq,
        combine: impl Fn(TypeTag, TypeTag) -> TypeTag,
    ) -> TypeSeq {
        TypeSeq {
            tags: self.zip_all(other).into_iter().map(|p| combine(p.first, p.second)).collect(),
        }
    }

    /// Splits a sequence of pairs back into its two component sequences.
    /// Inverse of [`TypeSeq::zip`].
    pub fn unzip(pairs: &[TypePair]) -> (TypeSeq, TypeSeq) {
        let (first, second) = pairs.iter().map(|p| (p.first, p.second)).unzip();
        (TypeSeq { tags: first }, TypeSeq { tags: second })
    }

    /// A new sequence with the elements in reverse order.
    pub fn reverse(&self) -> TypeSeq {
        TypeSeq { tags: self.tags.iter().rev().copied().collect() }
    }

    /// Concatenates the given sequences left to right.
    pub fn concat<'a>(seqs: impl IntoIterator<Item = &'a TypeSeq>) -> TypeSeq {
        let mut tags = Vec::new();
        for seq in seqs {
            tags.extend_from_slice(&seq.tags);
        }
        TypeSeq { tags }
    }

    /// Appends `tag`.
    pub fn push_back(&self, tag: TypeTag) -> TypeSeq {
        let mut tags = self.tags.clone();
        tags.push(tag);
        TypeSeq { tags }
    }

    /// Prepends `tag`.
    pub fn push_front(&self, tag: TypeTag) -> TypeSeq {
        let mut tags = Vec::with_capacity(self.size() + 1);
        tags.push(tag);
        tags.extend_from_slice(&self.tags);
        TypeSeq { tags }
    }

    /// Prepends `tag`. Alias for [`TypeSeq::push_front`].
    pub fn prepend(&self, tag: TypeTag) -> TypeSeq {
        self.push_front(tag)
    }

    /// Everything but the last element; the empty sequence stays empty.
    pub fn pop_back(&self) -> TypeSeq {
        let len = self.size().saturating_sub(1);
        TypeSeq { tags: self.tags[..len].to_vec() }
    }

    /// The last `n` elements, or the whole sequence when it is shorter.
    pub fn right(&self, n: usize) -> TypeSeq {
        let first = self.size().saturating_sub(n);
        TypeSeq { tags: self.tags[first..].to_vec() }
    }

    /// Strips trailing unit sentinels.
    pub fn trim(&self) -> TypeSeq {
        let mut len = self.size();
        while len > 0 && self.tags[len - 1].is_unit() {
            len -= 1;
        }
        TypeSeq { tags: self.tags[..len].to_vec() }
    }

    /// Applies `transform` to every element.
    pub fn map(&self, transform: impl Fn(TypeTag) -> TypeTag) -> TypeSeq {
        TypeSeq { tags: self.tags.iter().map(|&t| transform(t)).collect() }
    }

    /// Applies every transform, in order, to every element.
    pub fn map_all(&self, transforms: &[fn(TypeTag) -> TypeTag]) -> TypeSeq {
        self.map(|tag| transforms.iter().fold(tag, |acc, f| f(acc)))
    }

    /// Keeps the elements satisfying `predicate`, preserving order.
    pub fn filter(&self, predicate: impl Fn(&TypeTag) -> bool) -> TypeSeq {
        TypeSeq { tags: self.tags.iter().filter(|t| predicate(t)).copied().collect() }
    }

    /// Drops the elements satisfying `predicate`, preserving order.
    pub fn filter_not(&self, predicate: impl Fn(&TypeTag) -> bool) -> TypeSeq {
        self.filter(|t| !predicate(t))
    }

    /// Keeps the elements equal to `tag`.
    pub fn filter_type(&self, tag: TypeTag) -> TypeSeq {
        self.filter(|t| *t == tag)
    }

    /// Drops the elements equal to `tag`.
    pub fn filter_not_type(&self, tag: TypeTag) -> TypeSeq {
        self.filter(|t| *t != tag)
    }

    /// Stable dedup; the first occurrence of each element wins.
    pub fn distinct(&self) -> TypeSeq {
        let mut tags: Vec<TypeTag> = Vec::new();
        for &tag in &self.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        TypeSeq { tags }
    }

    /// Tests whether the sequence contains no duplicates.
    pub fn is_distinct(&self) -> bool {
        self.size() == self.distinct().size()
    }

    /// Partitions into maximal runs where `predicate` holds between each
    /// element and the last element of the current run.
    pub fn group_by(&self, predicate: impl Fn(TypeTag, TypeTag) -> bool) -> Vec<TypeSeq> {
        let mut groups: Vec<TypeSeq> = Vec::new();
        for &tag in &self.tags {
            match groups.last_mut() {
                Some(group) if predicate(tag, group.back()) => {
                    group.tags.push(tag);
                }
                _ => groups.push(TypeSeq { tags: vec![tag] }),
            }
        }
        groups
    }

    /// Index of the first occurrence of `tag`, if any.
    pub fn find(&self, tag: TypeTag) -> Option<usize> {
        self.find_if(|t| *t == tag)
    }

    /// Index of the first element satisfying `predicate`, if any.
    pub fn find_if(&self, predicate: impl Fn(&TypeTag) -> bool) -> Option<usize> {
        self.tags.iter().position(|t| predicate(t))
    }

    /// Tests whether `predicate` holds for every element.
    pub fn forall(&self, predicate: impl Fn(&TypeTag) -> bool) -> bool {
        self.tags.iter().all(|t| predicate(t))
    }

    /// Tests whether `predicate` holds for at least one element.
    pub fn exists(&self, predicate: impl Fn(&TypeTag) -> bool) -> bool {
        self.tags.iter().any(|t| predicate(t))
    }

    /// Number of elements satisfying `predicate`.
    pub fn count(&self, predicate: impl Fn(&TypeTag) -> bool) -> usize {
        self.tags.iter().filter(|t| predicate(t)).count()
    }

    /// Number of elements not satisfying `predicate`.
    pub fn count_not(&self, predicate: impl Fn(&TypeTag) -> bool) -> usize {
        self.size() - self.count(predicate)
    }

    /// Tests whether every distinct element of `self` occurs in `other`,
    /// ignoring order and duplicates. The empty sequence is a subset of
    /// everything, and any sequence with elements is not a subset of the
    /// empty one.
    pub fn is_strict_subset(&self, other: &TypeSeq) -> bool {
        self == other || self.distinct().iter().all(|t| other.contains(t))
    }

    /// Order-insensitive, duplicate-insensitive equality: mutual subset.
    pub fn equal(&self, other: &TypeSeq) -> bool {
        self.is_strict_subset(other) && other.is_strict_subset(self)
    }
}

impl fmt::Display for TypeSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tag}")?;
        }
        write!(f, "]")
    }
}
