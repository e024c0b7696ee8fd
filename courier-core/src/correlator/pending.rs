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
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::oneshot;
use tracing::{instrument, trace, warn};

use crate::algebra::TypeSeq;
use crate::common::{ActorAddress, ActorId, TypedAddress, CONFIG};
use crate::correlator::ResponseHandle;
use crate::message::{
    ArgPack, CorrelationId, Envelope, Priority, ProtocolError, ReturnAddress,
};

/// Outcome delivered to a pending request: a reply payload or a failure.
pub type ReplyResult = Result<ArgPack, crate::message::ReplyError>;

/// Tracks one actor's outstanding synchronous requests.
///
/// The correlator is owned by the requesting actor and `Arc`-shared into the
/// return address of every request envelope it sends. Its tables follow the
/// same multi-producer/single-consumer discipline as the mailbox: the owning
/// actor issues requests, while fulfillment callbacks arrive from arbitrary
/// responder contexts.
pub struct Correlator {
    owner: ActorAddress,
    /// Next sequence number per destination; ids need be unique only per
    /// (sender, destination) pair of outstanding requests.
    counters: DashMap<ActorId, u64>,
    pending: DashMap<CorrelationId, oneshot::Sender<ReplyResult>>,
}

impl fmt::Debug for Correlator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Correlator")
            .field("owner", &self.owner.id())
            .field("outstanding", &self.pending.len())
            .finish()
    }
}

impl Correlator {
    /// Creates the correlator for the actor reachable at `owner`.
    pub fn new(owner: ActorAddress) -> Arc<Self> {
        Arc::new(Correlator { owner, counters: DashMap::new(), pending: DashMap::new() })
    }

    /// The owning actor's address, used as the return address of requests.
    pub fn owner(&self) -> &ActorAddress {
        &self.owner
    }

    /// Number of requests awaiting fulfillment.
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    /// Sends a synchronous request to an untyped destination.
    ///
    /// Allocates a correlation id, enqueues a request-flagged envelope on
    /// the destination's mailbox, and returns the handle awaiting the reply.
    /// Without an explicit `deadline` the configured
    /// `timeouts.default_request_timeout_ms` applies, if set.
    #[instrument(skip(self, payload), fields(sender = %self.owner.id(), destination = %destination.id()))]
    pub fn send_request(
        self: &Arc<Self>,
        priority: Priority,
        destination: &ActorAddress,
        payload: ArgPack,
        deadline: Option<Duration>,
    ) -> ResponseHandle {
        self.send_request_impl(priority, destination, payload, deadline, None)
    }

    /// Sends a synchronous request to a typed destination.
    ///
    /// The payload's argument types are checked against the destination's
    /// declared interface first; the returned handle carries the response
    /// types inferred from the first matching signature.
    ///
    /// # Errors
    /// Fails with [`ProtocolError::UnsupportedRequest`] when no declared
    /// signature accepts the argument types. Nothing is enqueued in that
    /// case: the request fails to construct.
    #[instrument(skip(self, payload), fields(sender = %self.owner.id(), destination = %destination.address().id()))]
    pub fn send_request_typed(
        self: &Arc<Self>,
        priority: Priority,
        destination: &TypedAddress,
        payload: ArgPack,
        deadline: Option<Duration>,
    ) -> Result<ResponseHandle, ProtocolError> {
        let args = payload.signature();
        let Some(expected) = destination.deduce_output(args) else {
            return Err(ProtocolError::UnsupportedRequest { args: args.clone() });
        };
        trace!(%expected, "inferred response types");
        Ok(self.send_request_impl(priority, destination.address(), payload, deadline, Some(expected)))
    }

    fn send_request_impl(
        self: &Arc<Self>,
        priority: Priority,
        destination: &ActorAddress,
        payload: ArgPack,
        deadline: Option<Duration>,
        expected: Option<TypeSeq>,
    ) -> ResponseHandle {
        let seq = {
            let mut counter = self.counters.entry(destination.id().clone()).or_insert(0);
            *counter += 1;
            *counter
        };
        let correlation = CorrelationId::new(destination.id().clone(), seq);
        let (tx, rx) = oneshot::channel();
        self.pending.insert(correlation.clone(), tx);
        trace!(%correlation, "registered pending request");

        let reply_to = ReturnAddress::new(self.owner.clone(), Arc::clone(self));
        destination
            .mailbox()
            .enqueue(Envelope::request(payload, priority, reply_to, correlation.clone()));

        let deadline = deadline.or_else(|| CONFIG.default_request_timeout());
        ResponseHandle::new(
            correlation,
            destination.id().clone(),
            expected,
            deadline,
            rx,
            Arc::clone(self),
        )
    }

    /// Fulfills the pending request matching `correlation` exactly once.
    ///
    /// A delivery for an id with no pending entry — already fulfilled,
    /// abandoned after timeout, or never issued — is dropped and flagged as
    /// a protocol anomaly; it never reaches a caller.
    #[instrument(skip(self, result), fields(owner = %self.owner.id()))]
    pub fn on_response(&self, correlation: &CorrelationId, result: ReplyResult) {
        match self.pending.remove(correlation) {
            Some((_, tx)) => {
                if tx.send(result).is_err() {
                    // The handle was dropped between removal and delivery.
                    trace!(%correlation, "requester no longer awaiting reply");
                }
            }
            None => {
                warn!(%correlation, "dropping response with no pending request (duplicate or abandoned)");
            }
        }
    }

    /// Removes a pending request so later deliveries for its id are treated
    /// as stale. Called on timeout and when a handle is dropped unresolved.
    pub(crate) fn abandon(&self, correlation: &CorrelationId) {
        if self.pending.remove(correlation).is_some() {
            trace!(%correlation, "abandoned pending request");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_ids_are_unique_per_destination_pair() {
        let requester = Correlator::new(ActorAddress::new("requester"));
        let dest_a = ActorAddress::new("a");
        let dest_b = ActorAddress::new("b");
        let h1 = requester.send_request(Priority::Normal, &dest_a, ArgPack::single(1_i32), None);
        let h2 = requester.send_request(Priority::Normal, &dest_a, ArgPack::single(2_i32), None);
        let h3 = requester.send_request(Priority::Normal, &dest_b, ArgPack::single(3_i32), None);
        assert_ne!(h1.correlation(), h2.correlation());
        // Sequence numbers restart per destination; the destination id keeps
        // the full ids distinct.
        assert_eq!(h1.correlation().seq(), h3.correlation().seq());
        assert_ne!(h1.correlation(), h3.correlation());
        assert_eq!(requester.outstanding(), 3);
    }
}
