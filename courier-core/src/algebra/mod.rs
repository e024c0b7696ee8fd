//! Pure operations over ordered sequences of type descriptors.
//!
//! An actor's interface is expressed as an ordered list of
//! ([`Signature`]) entries, each pairing an input [`TypeSeq`] with the
//! output [`TypeSeq`] it produces. Resolving "what type does calling this
//! destination with these argument types yield" scans the declared entries
//! for an order-insensitive subset match and takes the first hit.
//!
//! Every operation here is total unless documented otherwise: accessors on
//! an empty sequence yield the [`Unit`](TypeTag::unit) sentinel instead of
//! failing, and the padding variants of zip and slice keep downstream
//! computations composable. The strict [`TypeSeq::zip`] is intentionally
//! partial because zipping genuinely paired lists of unequal length signals
//! an authoring mistake.
//!
//! Nothing in this module holds runtime state; the same operations back
//! both interface checking at construction time and response-signature
//! verification at delivery time.

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

// --- Public Re-exports ---
pub use protocol::{Protocol, Signature};
pub use type_seq::{LengthMismatch, TypePair, TypeSeq};
pub use type_tag::{TypeTag, Unit};

// --- Submodules ---

/// Defines [`Protocol`] and [`Signature`] for typed actor interfaces.
mod protocol;
/// Defines [`TypeSeq`] and its operations.
mod type_seq;
/// Defines the opaque [`TypeTag`] descriptor and the [`Unit`] sentinel.
mod type_tag;
