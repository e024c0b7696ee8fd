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

use crate::algebra::TypeSeq;
use crate::message::ExitReason;

/// Failure outcome of a pending request, delivered through its
/// [`ResponseHandle`](crate::correlator::ResponseHandle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    /// The destination's mailbox closed before the request was processed.
    Bounced(ExitReason),
    /// The deadline elapsed with no fulfillment; the request is abandoned.
    Timeout,
    /// The correlator went away without fulfilling the request.
    Dropped,
    /// A typed destination replied with a payload whose signature does not
    /// match the statically inferred response types.
    UnexpectedResponseType {
        /// The response types deduced from the destination's interface.
        expected: TypeSeq,
        /// The signature the reply payload actually carried.
        actual: TypeSeq,
    },
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyError::Bounced(reason) => {
                write!(f, "request bounced: destination terminated ({reason})")
            }
            ReplyError::Timeout => write!(f, "request timed out"),
            ReplyError::Dropped => write!(f, "request dropped without fulfillment"),
            ReplyError::UnexpectedResponseType { expected, actual } => {
                write!(f, "unexpected response type: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for ReplyError {}

/// Failure to construct a request against a typed destination.
///
/// These errors surface before anything is enqueued: a request that does not
/// match the destination's declared interface never exists as an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// No declared signature of the destination accepts these argument types.
    UnsupportedRequest {
        /// The argument types the caller supplied.
        args: TypeSeq,
    },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnsupportedRequest { args } => {
                write!(f, "destination declares no handler accepting {args}")
            }
        }
    }
}

impl std::error::Error for ProtocolError {}
