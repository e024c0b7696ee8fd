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

use async_trait::async_trait;

use courier_core::prelude::*;

/// A minimal concrete actor composing the substrate's capabilities by
/// delegation: it holds an address (identity + mailbox) and a correlator
/// and forwards to them.
#[derive(Debug, Clone)]
pub struct TestActor {
    address: ActorAddress,
    correlator: Arc<Correlator>,
}

impl TestActor {
    pub fn new(name: &str) -> Self {
        let address = ActorAddress::new(name);
        let correlator = Correlator::new(address.clone());
        TestActor { address, correlator }
    }

    pub fn address(&self) -> &ActorAddress {
        &self.address
    }

    /// Views this actor through a declared interface.
    pub fn typed(&self, protocol: Protocol) -> TypedAddress {
        TypedAddress::new(self.address.clone(), protocol)
    }
}

#[async_trait]
impl MailboxOwner for TestActor {
    fn mailbox(&self) -> &Mailbox {
        self.address.mailbox()
    }
}

impl SyncSender for TestActor {
    fn correlator(&self) -> &Arc<Correlator> {
        &self.correlator
    }
}
