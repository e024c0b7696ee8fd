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
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_INDEX: AtomicU64 = AtomicU64::new(1);

/// Opaque, equality-comparable identity of one actor instance.
///
/// Creation and directory lookup live in the surrounding runtime; this core
/// only needs identities to compare equal when and only when they denote the
/// same actor. The name is carried for diagnostics.
#[derive(Debug, Clone)]
pub struct ActorId {
    index: u64,
    name: Arc<str>,
}

impl ActorId {
    /// Allocates a fresh identity with the given diagnostic name.
    pub fn new(name: impl AsRef<str>) -> Self {
        ActorId {
            index: NEXT_INDEX.fetch_add(1, Ordering::Relaxed),
            name: Arc::from(name.as_ref()),
        }
    }

    /// The diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

// Identity is the allocated index; names may repeat.
impl PartialEq for ActorId {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for ActorId {}

impl Hash for ActorId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_per_instance() {
        let a = ActorId::new("worker");
        let b = ActorId::new("worker");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.name(), b.name());
    }
}
