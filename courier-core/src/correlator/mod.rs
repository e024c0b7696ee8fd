//! The request/response correlator.
//!
//! Layers an awaitable reply mechanism on top of the mailbox: a one-way
//! send becomes a [`ResponseHandle`] bound to a correlation id, fulfilled
//! at most once with success, failure, or timeout. For typed destinations
//! the expected response types are inferred from the declared interface
//! before anything is enqueued.

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
pub use pending::{Correlator, ReplyResult};
pub use response_handle::ResponseHandle;

// --- Submodules ---

/// Defines the [`Correlator`] and its pending-request table.
mod pending;
/// Defines the caller-held [`ResponseHandle`].
mod response_handle;
