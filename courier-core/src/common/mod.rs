//! Common utilities and structures used throughout the Courier framework:
//! actor identity, addressing, and configuration.

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
pub use actor_id::ActorId;
pub use address::{ActorAddress, TypedAddress};
pub use config::{CourierConfig, CONFIG};

// --- Submodules ---

/// Defines the opaque [`ActorId`] handle.
mod actor_id;
/// Defines [`ActorAddress`] and [`TypedAddress`].
mod address;
/// Defines [`CourierConfig`] and the global [`CONFIG`].
mod config;
