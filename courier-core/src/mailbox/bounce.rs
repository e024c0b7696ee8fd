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

use derive_new::new;
use tracing::{instrument, trace, warn};

use crate::message::{Envelope, ExitReason, ReplyError};

/// Receives every envelope a closed mailbox can no longer deliver.
///
/// Each undeliverable envelope passes through the bouncer exactly once:
/// either during the drain performed by `close`, or directly when a producer
/// enqueues against an already-closed mailbox.
pub trait Bouncer: Send + Sync {
    /// Disposes of one undeliverable envelope.
    fn bounce(&self, envelope: Envelope);
}

/// The standard bouncer used at actor termination.
///
/// Request envelopes are answered with a synthesized failure carrying the
/// actor's recorded [`ExitReason`], so the matching pending handle resolves
/// instead of hanging forever. One-way envelopes are discarded silently.
#[derive(new, Debug, Clone)]
pub struct RequestBouncer {
    reason: ExitReason,
}

impl RequestBouncer {
    /// The termination reason carried into failure replies.
    pub fn reason(&self) -> &ExitReason {
        &self.reason
    }
}

impl Bouncer for RequestBouncer {
    #[instrument(skip(self, envelope), fields(reason = %self.reason))]
    fn bounce(&self, envelope: Envelope) {
        match (envelope.correlation, envelope.reply_to) {
            (Some(correlation), Some(reply_to)) => {
                trace!(%correlation, "bouncing request with failure reply");
                reply_to.reply_failure(&correlation, ReplyError::Bounced(self.reason.clone()));
            }
            (Some(correlation), None) => {
                // A request without a return address cannot be answered.
                warn!(%correlation, "request envelope has no return address; dropping");
            }
            _ => {
                trace!("discarding one-way envelope");
            }
        }
    }
}
