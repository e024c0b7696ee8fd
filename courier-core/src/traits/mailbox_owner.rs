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

use async_trait::async_trait;

use crate::mailbox::{Mailbox, RequestBouncer};
use crate::message::{Envelope, ExitReason};

/// The capability of owning a mailbox: draining it as its single logical
/// consumer and closing it exactly once at termination.
#[async_trait]
pub trait MailboxOwner: Send + Sync {
    /// The owned mailbox.
    fn mailbox(&self) -> &Mailbox;

    /// Awaits the next envelope in priority-then-FIFO order.
    ///
    /// Resolves to `None` once the mailbox is closed and drained. Only the
    /// owning actor's execution context may call this.
    async fn next_envelope(&self) -> Option<Envelope> {
        self.mailbox().dequeue().await
    }

    /// Closes the mailbox at termination, bouncing everything still queued
    /// with the given reason.
    fn close_mailbox(&self, reason: ExitReason) {
        self.mailbox().close(RequestBouncer::new(reason));
    }
}
