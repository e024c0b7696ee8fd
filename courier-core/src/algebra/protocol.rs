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
use tracing::trace;

use crate::algebra::TypeSeq;

/// One declared handler of a typed actor interface: the argument types it
/// accepts paired with the response types it produces.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    inputs: TypeSeq,
    outputs: TypeSeq,
}

impl Signature {
    /// The argument types this handler accepts.
    pub fn inputs(&self) -> &TypeSeq {
        &self.inputs
    }

    /// The response types this handler produces.
    pub fn outputs(&self) -> &TypeSeq {
        &self.outputs
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.inputs, self.outputs)
    }
}

/// The complete declared interface of a typed destination: an ordered list
/// of [`Signature`]s.
///
/// Declaration order matters. When a caller's argument sequence
/// subset-matches more than one entry, the first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Protocol {
    signatures: Vec<Signature>,
}

impl Protocol {
    /// Creates a protocol from its declared signatures, in declaration order.
    pub fn new(signatures: Vec<Signature>) -> Self {
        Protocol { signatures }
    }

    /// The declared signatures, in declaration order.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Computes the response types produced by calling this interface with
    /// `args`: the outputs of the first declared signature whose inputs
    /// order-insensitively subset-match the argument sequence.
    ///
    /// `None` means the interface does not accept these argument types, which
    /// callers must treat as a construction error rather than something to
    /// surface at runtime.
    pub fn deduce_output(&self, args: &TypeSeq) -> Option<TypeSeq> {
        let matched = self.signatures.iter().find(|sig| args.is_strict_subset(sig.inputs()));
        if let Some(sig) = matched {
            trace!(%sig, %args, "matched declared signature");
        }
        matched.map(|sig| sig.outputs().clone())
    }

    /// Tests whether this interface accepts the given argument types.
    pub fn accepts(&self, args: &TypeSeq) -> bool {
        self.deduce_output(args).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_seq;

    fn pricing_protocol() -> Protocol {
        Protocol::new(vec![
            Signature::new(type_seq![i32], type_seq![bool]),
            Signature::new(type_seq![i32, String], type_seq![String]),
            Signature::new(type_seq![String, i32], type_seq![u8]),
        ])
    }

    #[test]
    fn deduces_output_of_matching_signature() {
        let protocol = pricing_protocol();
        assert_eq!(protocol.deduce_output(&type_seq![i32]), Some(type_seq![bool]));
        assert!(protocol.accepts(&type_seq![i32, String]));
        assert_eq!(protocol.deduce_output(&type_seq![f64]), None);
    }

    #[test]
    fn matching_ignores_argument_order() {
        let protocol = pricing_protocol();
        // [String, i32] subset-matches the second entry as well as the third.
        assert_eq!(protocol.deduce_output(&type_seq![String, i32]), Some(type_seq![String]));
    }

    #[test]
    fn first_declared_match_wins() {
        let protocol = Protocol::new(vec![
            Signature::new(type_seq![i32, bool], type_seq![String]),
            Signature::new(type_seq![i32], type_seq![u8]),
        ]);
        // [i32] is a subset of both declared inputs; declaration order decides.
        assert_eq!(protocol.deduce_output(&type_seq![i32]), Some(type_seq![String]));
    }
}
