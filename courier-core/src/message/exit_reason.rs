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

/// Why an actor terminated.
///
/// Supplied by the surrounding lifecycle subsystem when a mailbox is closed
/// and passed unchanged into the bounce procedure, so that bounced requests
/// report the reason their destination went away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// The actor finished its work and shut down normally.
    Normal,
    /// Shutdown was requested by a user or supervisor.
    UserShutdown,
    /// The actor terminated because of an unhandled fault.
    Fault(String),
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitReason::Normal => write!(f, "normal shutdown"),
            ExitReason::UserShutdown => write!(f, "user-requested shutdown"),
            ExitReason::Fault(cause) => write!(f, "unhandled fault: {cause}"),
        }
    }
}
