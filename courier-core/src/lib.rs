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

#![forbid(unsafe_code)]
//! Courier Core Library
//!
//! This library provides the message-passing substrate of the Courier actor
//! runtime: the type-sequence algebra used to express and check actor
//! interfaces, the per-actor prioritized mailbox with close/bounce semantics,
//! and the request/response correlator that turns a one-way send into an
//! awaitable, type-inferred reply.

/// The type-sequence algebra: pure operations over ordered lists of type tags.
pub(crate) mod algebra;

/// Common utilities and structures used throughout the Courier framework.
pub(crate) mod common;

pub(crate) mod correlator;
pub(crate) mod mailbox;
pub(crate) mod message;
/// Trait definitions used in the Courier framework.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// This module re-exports commonly used items from the component modules,
/// as well as the `async_trait` crate.
pub mod prelude {
    pub use async_trait;

    pub use crate::algebra::{LengthMismatch, Protocol, Signature, TypePair, TypeSeq, TypeTag, Unit};
    pub use crate::common::{ActorAddress, ActorId, CourierConfig, TypedAddress, CONFIG};
    pub use crate::correlator::{Correlator, ReplyResult, ResponseHandle};
    pub use crate::mailbox::{Bouncer, Mailbox, RequestBouncer};
    pub use crate::message::{
        ArgPack, CorrelationId, Envelope, ExitReason, Priority, ProtocolError, ReplyError,
        ReturnAddress,
    };
    pub use crate::traits::{MailboxOwner, MessageBody, SyncSender};
}
