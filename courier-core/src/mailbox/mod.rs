//! The per-actor inbound queue.
//!
//! A [`Mailbox`] is a single-consumer, multi-producer structure: many sender
//! contexts enqueue concurrently, exactly one logical consumer drains it.
//! Delivery is priority-then-FIFO, and closing routes every remaining or
//! late envelope through a [`Bouncer`] so no request is silently lost.

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
pub use bounce::{Bouncer, RequestBouncer};
pub use queue::Mailbox;

// --- Submodules ---

/// Defines the [`Bouncer`] trait and the standard [`RequestBouncer`].
mod bounce;
/// Defines the [`Mailbox`] queue itself.
mod queue;
