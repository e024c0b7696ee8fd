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

use std::time::SystemTime;

use static_assertions::assert_impl_all;

use crate::message::{ArgPack, CorrelationId, Priority, ReturnAddress};

/// One message in flight between actors.
///
/// An envelope is exclusively owned by the destination's mailbox while
/// queued; ownership transfers to the consuming context on dequeue, or to
/// the bounce procedure when the mailbox is closed. The presence of a
/// [`CorrelationId`] marks the envelope as a synchronous request.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// The type-erased payload.
    pub payload: ArgPack,
    /// Delivery priority.
    pub priority: Priority,
    /// The sender's return address, when the sender expects to be reachable.
    pub reply_to: Option<ReturnAddress>,
    /// Set when this envelope is a synchronous request awaiting a reply.
    pub correlation: Option<CorrelationId>,
    /// The time when the envelope was created.
    pub timestamp: SystemTime,
}

impl Envelope {
    /// Creates a one-way envelope with no return address.
    pub fn new(payload: ArgPack, priority: Priority) -> Self {
        Envelope {
            payload,
            priority,
            reply_to: None,
            correlation: None,
            timestamp: SystemTime::now(),
        }
    }

    /// Creates a request-flagged envelope carrying the sender's return
    /// address and a correlation id.
    pub fn request(
        payload: ArgPack,
        priority: Priority,
        reply_to: ReturnAddress,
        correlation: CorrelationId,
    ) -> Self {
        Envelope {
            payload,
            priority,
            reply_to: Some(reply_to),
            correlation: Some(correlation),
            timestamp: SystemTime::now(),
        }
    }

    /// Tests whether this envelope is a synchronous request.
    pub fn is_request(&self) -> bool {
        self.correlation.is_some()
    }
}

// Ensures that Envelope implements the Send trait.
assert_impl_all!(Envelope: Send);
