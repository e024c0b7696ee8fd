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

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::instrument;

use crate::algebra::{Protocol, TypeSeq};
use crate::common::ActorId;
use crate::mailbox::Mailbox;
use crate::message::{ArgPack, Envelope, Priority};

/// The addressable endpoint of an actor: its identity plus its mailbox.
///
/// Cloning an address shares the underlying mailbox; equality and hashing
/// follow the [`ActorId`] alone.
#[derive(Debug, Clone)]
pub struct ActorAddress {
    id: ActorId,
    mailbox: Arc<Mailbox>,
}

impl ActorAddress {
    /// Creates an address with a fresh identity and an open mailbox.
    pub fn new(name: impl AsRef<str>) -> Self {
        ActorAddress { id: ActorId::new(name), mailbox: Arc::new(Mailbox::new()) }
    }

    /// Assembles an address from an existing identity and mailbox.
    pub fn from_parts(id: ActorId, mailbox: Arc<Mailbox>) -> Self {
        ActorAddress { id, mailbox }
    }

    /// The actor's identity.
    pub fn id(&self) -> &ActorId {
        &self.id
    }

    /// The actor's mailbox.
    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }

    /// Sends a one-way message: builds an envelope and enqueues it.
    ///
    /// One-way envelopes carry no return address; a closed destination
    /// discards them silently.
    #[instrument(skip(self, payload), fields(destination = %self.id))]
    pub fn send(&self, priority: Priority, payload: ArgPack) {
        self.mailbox.enqueue(Envelope::new(payload, priority));
    }
}

impl PartialEq for ActorAddress {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ActorAddress {}

impl Hash for ActorAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// An [`ActorAddress`] paired with the destination's declared interface.
///
/// Requests sent to a typed address are checked against the protocol before
/// an envelope exists, and the expected response types are inferred from the
/// first matching signature.
#[derive(Debug, Clone)]
pub struct TypedAddress {
    address: ActorAddress,
    protocol: Protocol,
}

impl TypedAddress {
    /// Pairs an address with its declared protocol.
    pub fn new(address: ActorAddress, protocol: Protocol) -> Self {
        TypedAddress { address, protocol }
    }

    /// The underlying untyped address.
    pub fn address(&self) -> &ActorAddress {
        &self.address
    }

    /// The declared interface.
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// Infers the response types for a call carrying `args`, if the
    /// interface accepts them.
    pub fn deduce_output(&self, args: &TypeSeq) -> Option<TypeSeq> {
        self.protocol.deduce_output(args)
    }
}
