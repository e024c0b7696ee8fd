//! Defines the core traits that establish the fundamental contracts of the
//! Courier substrate.
//!
//! # Key Traits
//!
//! *   [`MessageBody`]: A marker trait required for all types used as message
//!     elements. Ensures elements are `Send`, `Sync`, `Debug`, `Clone`, and
//!     support downcasting via `Any`.
//! *   [`MailboxOwner`]: The capability of owning and draining a mailbox.
//!     One logical consumer per mailbox, closed exactly once at termination.
//! *   [`SyncSender`]: The capability of issuing correlated synchronous
//!     requests through a [`Correlator`](crate::correlator::Correlator).
//!
//! A concrete actor type composes these capabilities by delegation: it holds
//! a mailbox and a correlator and forwards to them.

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
pub use mailbox_owner::MailboxOwner;
pub use message_body::MessageBody;
pub use sync_sender::SyncSender;

// --- Submodules ---

/// Defines the [`MailboxOwner`] capability.
mod mailbox_owner;
/// Defines the [`MessageBody`] marker trait.
mod message_body;
/// Defines the [`SyncSender`] capability.
mod sync_sender;
