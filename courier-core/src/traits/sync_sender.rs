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

use std::sync::Arc;
use std::time::Duration;

use crate::common::{ActorAddress, TypedAddress};
use crate::correlator::{Correlator, ResponseHandle};
use crate::message::{ArgPack, Priority, ProtocolError};

/// The capability of issuing correlated synchronous requests.
///
/// Implemented by delegation: the actor holds a [`Correlator`] and forwards
/// to it. The returned handles are actor-specific — a response cannot be
/// received by anyone but the requesting actor.
pub trait SyncSender {
    /// The actor's correlator.
    fn correlator(&self) -> &Arc<Correlator>;

    /// Sends a synchronous request to an untyped destination.
    fn request(
        &self,
        priority: Priority,
        destination: &ActorAddress,
        payload: ArgPack,
        deadline: Option<Duration>,
    ) -> ResponseHandle {
        self.correlator().send_request(priority, destination, payload, deadline)
    }

    /// Sends a synchronous request to a typed destination, checking the
    /// payload against the declared interface first.
    ///
    /// # Errors
    /// Fails with [`ProtocolError`] when the destination declares no
    /// signature accepting the payload's argument types.
    fn request_typed(
        &self,
        priority: Priority,
        destination: &TypedAddress,
        payload: ArgPack,
        deadline: Option<Duration>,
    ) -> Result<ResponseHandle, ProtocolError> {
        self.correlator().send_request_typed(priority, destination, payload, deadline)
    }
}
