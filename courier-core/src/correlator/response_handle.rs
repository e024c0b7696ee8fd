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
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::timeout;
use tracing::{instrument, warn};

use crate::algebra::TypeSeq;
use crate::common::ActorId;
use crate::correlator::{Correlator, ReplyResult};
use crate::message::{ArgPack, CorrelationId, ReplyError};
use crate::traits::MessageBody;

/// Caller-held token representing one outstanding synchronous request.
///
/// Fulfilled exactly once with success, failure, or timeout — whichever
/// occurs first wins, and later attempts are no-ops. Dropping an unresolved
/// handle abandons the request, so a late reply is discarded rather than
/// accumulated.
#[derive(Debug)]
pub struct ResponseHandle {
    correlation: CorrelationId,
    destination: ActorId,
    expected: Option<TypeSeq>,
    deadline: Option<Duration>,
    rx: oneshot::Receiver<ReplyResult>,
    correlator: Arc<Correlator>,
}

impl ResponseHandle {
    pub(crate) fn new(
        correlation: CorrelationId,
        destination: ActorId,
        expected: Option<TypeSeq>,
        deadline: Option<Duration>,
        rx: oneshot::Receiver<ReplyResult>,
        correlator: Arc<Correlator>,
    ) -> Self {
        ResponseHandle { correlation, destination, expected, deadline, rx, correlator }
    }

    /// The id linking this handle to its eventual response.
    pub fn correlation(&self) -> &CorrelationId {
        &self.correlation
    }

    /// The destination the request was sent to.
    pub fn destination(&self) -> &ActorId {
        &self.destination
    }

    /// The response types inferred from a typed destination's interface,
    /// when the request was sent through one.
    pub fn expected(&self) -> Option<&TypeSeq> {
        self.expected.as_ref()
    }

    /// The deadline in effect for this request, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Awaits fulfillment.
    ///
    /// # Errors
    /// * [`ReplyError::Timeout`] once the deadline elapses; the request is
    ///   abandoned and any later reply for its id is discarded.
    /// * [`ReplyError::Bounced`] when the destination terminated before
    ///   answering.
    /// * [`ReplyError::UnexpectedResponseType`] when a typed destination
    ///   replied with a payload that does not match the inferred types.
    #[instrument(skip(self), fields(correlation = %self.correlation))]
    pub async fn receive(mut self) -> Result<ArgPack, ReplyError> {
        let outcome = match self.deadline {
            Some(limit) => match timeout(limit, &mut self.rx).await {
                Ok(received) => received,
                Err(_elapsed) => {
                    self.correlator.abandon(&self.correlation);
                    warn!("request deadline elapsed; abandoning");
                    return Err(ReplyError::Timeout);
                }
            },
            None => (&mut self.rx).await,
        };
        let payload = match outcome {
            Ok(result) => result?,
            Err(_closed) => return Err(ReplyError::Dropped),
        };
        if let Some(expected) = &self.expected {
            if !expected.equal(payload.signature()) {
                return Err(ReplyError::UnexpectedResponseType {
                    expected: expected.clone(),
                    actual: payload.signature().clone(),
                });
            }
        }
        Ok(payload)
    }

    /// Awaits fulfillment and extracts a single-element reply as `T`.
    pub async fn receive_as<T: MessageBody + Clone>(self) -> anyhow::Result<T> {
        let payload = self.receive().await?;
        payload.get::<T>(0).cloned().ok_or_else(|| {
            anyhow::anyhow!("reply payload is not a single {}", std::any::type_name::<T>())
        })
    }
}

impl Drop for ResponseHandle {
    fn drop(&mut self) {
        // Harmless after fulfillment; the pending entry is already gone.
        self.correlator.abandon(&self.correlation);
    }
}
