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

use derive_new::new;

use crate::common::ActorId;

/// Identifier linking a request envelope to its eventual response.
///
/// The sequence number is unique only among one sender's outstanding
/// requests to one destination, so the destination identity is part of the
/// id. Together they key the sender's pending-request table.
#[derive(new, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId {
    destination: ActorId,
    seq: u64,
}

impl CorrelationId {
    /// The destination the request was sent to.
    pub fn destination(&self) -> &ActorId {
        &self.destination
    }

    /// The per-destination sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.destination, self.seq)
    }
}
