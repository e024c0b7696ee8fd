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

use tracing::{instrument, trace};

use crate::common::ActorAddress;
use crate::correlator::Correlator;
use crate::message::{ArgPack, CorrelationId, Envelope, Priority, ReplyError};

/// The sender side of an envelope: where replies and failure notices go.
///
/// A return address couples the sender's [`ActorAddress`] with a handle to
/// its [`Correlator`], so that a responder (or the bounce procedure) running
/// in an arbitrary execution context can fulfill the matching pending
/// request directly, without going through the sender's mailbox.
#[derive(Debug, Clone)]
pub struct ReturnAddress {
    address: ActorAddress,
    correlator: Arc<Correlator>,
}

impl ReturnAddress {
    pub(crate) fn new(address: ActorAddress, correlator: Arc<Correlator>) -> Self {
        ReturnAddress { address, correlator }
    }

    /// The sender's address.
    pub fn address(&self) -> &ActorAddress {
        &self.address
    }

    /// Fulfills the sender's pending request with a successful reply.
    #[instrument(skip(self, payload), fields(sender = %self.address.id()))]
    pub fn reply(&self, correlation: &CorrelationId, payload: ArgPack) {
        trace!(%correlation, "delivering reply");
        self.correlator.on_response(correlation, Ok(payload));
    }

    /// Fulfills the sender's pending request with a failure.
    #[instrument(skip(self), fields(sender = %self.address.id()))]
    pub fn reply_failure(&self, correlation: &CorrelationId, error: ReplyError) {
        trace!(%correlation, %error, "delivering failure reply");
        self.correlator.on_response(correlation, Err(error));
    }

    /// Sends an ordinary one-way message back to the sender's mailbox.
    ///
    /// This is the conversational path for envelopes that are not
    /// correlated requests.
    pub fn send(&self, priority: Priority, payload: ArgPack) {
        self.address.mailbox().enqueue(Envelope::new(payload, priority));
    }
}
