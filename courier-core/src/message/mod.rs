//! Message types exchanged between actors: payloads, envelopes, correlation
//! ids, return addresses, and the error/reason vocabulary of the substrate.

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
pub use arg_pack::ArgPack;
pub use correlation_id::CorrelationId;
pub use envelope::Envelope;
pub use exit_reason::ExitReason;
pub use message_error::{ProtocolError, ReplyError};
pub use priority::Priority;
pub use return_address::ReturnAddress;

// --- Submodules ---

/// Defines the type-erased [`ArgPack`] payload.
mod arg_pack;
/// Defines the [`CorrelationId`] linking requests to responses.
mod correlation_id;
/// Defines the [`Envelope`] carried through mailboxes.
mod envelope;
/// Defines the [`ExitReason`] codes supplied by the lifecycle subsystem.
mod exit_reason;
/// Defines the runtime error vocabulary.
mod message_error;
/// Defines delivery [`Priority`].
mod priority;
/// Defines the [`ReturnAddress`] delivery callback.
mod return_address;
