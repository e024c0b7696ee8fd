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

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;
use tracing::{instrument, trace, warn};

use crate::common::CONFIG;
use crate::mailbox::Bouncer;
use crate::message::{Envelope, Priority};

/// An envelope stamped with its arrival order across both priority classes.
struct Stamped {
    stamp: u64,
    envelope: Envelope,
}

#[derive(Default)]
struct Inner {
    high: VecDeque<Stamped>,
    normal: VecDeque<Stamped>,
    next_stamp: u64,
    /// Set exactly once at close; late enqueues route through it.
    bouncer: Option<Arc<dyn Bouncer>>,
}

impl Inner {
    fn push(&mut self, envelope: Envelope) {
        let entry = Stamped { stamp: self.next_stamp, envelope };
        self.next_stamp += 1;
        match entry.envelope.priority {
            Priority::High => self.high.push_back(entry),
            Priority::Normal => self.normal.push_back(entry),
        }
    }

    fn pop(&mut self) -> Option<Envelope> {
        // Every queued high-priority envelope goes before any normal one;
        // within one class, arrival order holds.
        self.high
            .pop_front()
            .or_else(|| self.normal.pop_front())
            .map(|entry| entry.envelope)
    }

    fn len(&self) -> usize {
        self.high.len() + self.normal.len()
    }

    /// Removes everything still queued, in global arrival order.
    fn drain_arrival_order(&mut self) -> Vec<Envelope> {
        let mut drained = Vec::with_capacity(self.len());
        loop {
            let take_high = match (self.high.front(), self.normal.front()) {
                (Some(h), Some(n)) => h.stamp < n.stamp,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let entry = if take_high {
                self.high.pop_front()
            } else {
                self.normal.pop_front()
            };
            if let Some(entry) = entry {
                drained.push(entry.envelope);
            }
        }
        drained
    }
}

/// The per-actor concurrent inbound queue of [`Envelope`]s.
///
/// Owned by exactly one actor instance. Any number of sender contexts may
/// [`enqueue`](Mailbox::enqueue) concurrently; only the owning actor's
/// execution context may [`dequeue`](Mailbox::dequeue). Once
/// [`close`](Mailbox::close)d, every still-queued envelope and every
/// subsequent enqueue is routed through the registered [`Bouncer`] instead
/// of being delivered.
pub struct Mailbox {
    inner: Mutex<Inner>,
    notify: Notify,
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock().expect("mailbox lock poisoned");
        f.debug_struct("Mailbox")
            .field("len", &inner.len())
            .field("closed", &inner.bouncer.is_some())
            .finish()
    }
}

impl Mailbox {
    /// Creates an open, empty mailbox.
    pub fn new() -> Self {
        Mailbox { inner: Mutex::new(Inner::default()), notify: Notify::new() }
    }

    /// Makes `envelope` visible to the consumer, or hands it to the bounce
    /// procedure when the mailbox is already closed.
    ///
    /// Callable concurrently from any sender context. An envelope racing
    /// with [`close`](Mailbox::close) is either drained by the close (and
    /// bounced there) or bounced here; it is never lost and never delivered
    /// after shutdown begins.
    #[instrument(skip(self, envelope))]
    pub fn enqueue(&self, envelope: Envelope) {
        let backlog = {
            let mut inner = self.inner.lock().expect("mailbox lock poisoned");
            if let Some(bouncer) = inner.bouncer.clone() {
                drop(inner);
                trace!("mailbox closed; bouncing envelope");
                bouncer.bounce(envelope);
                return;
            }
            inner.push(envelope);
            inner.len()
        };
        if backlog > CONFIG.limits.mailbox_high_water_mark {
            warn!(backlog, "mailbox backlog above high-water mark");
        }
        self.notify.notify_one();
    }

    /// Returns the next envelope in priority-then-FIFO order, suspending the
    /// calling context while the mailbox is empty.
    ///
    /// Resolves to `None` once the mailbox is closed and nothing is pending.
    /// Must only be called from the owning actor's execution context.
    pub async fn dequeue(&self) -> Option<Envelope> {
        loop {
            let notified = self.notify.notified();
            tokio::pin!(notified);
            // Register for wakeups before checking, so an enqueue landing
            // between the check and the await is not missed.
            notified.as_mut().enable();
            {
                let mut inner = self.inner.lock().expect("mailbox lock poisoned");
                if let Some(envelope) = inner.pop() {
                    return Some(envelope);
                }
                if inner.bouncer.is_some() {
                    return None;
                }
            }
            notified.await;
        }
    }

    /// Closes the mailbox, draining every still-queued envelope through
    /// `bouncer` in arrival order.
    ///
    /// Invoked exactly once by the owning actor during shutdown; a second
    /// invocation is a no-op and never triggers a second bounce pass. The
    /// bouncer stays registered so that enqueues racing with or following
    /// the close are bounced as well.
    #[instrument(skip(self, bouncer))]
    pub fn close(&self, bouncer: impl Bouncer + 'static) {
        let (drained, bouncer) = {
            let mut inner = self.inner.lock().expect("mailbox lock poisoned");
            if inner.bouncer.is_some() {
                trace!("mailbox already closed; ignoring");
                return;
            }
            let bouncer: Arc<dyn Bouncer> = Arc::new(bouncer);
            let drained = inner.drain_arrival_order();
            inner.bouncer = Some(Arc::clone(&bouncer));
            (drained, bouncer)
        };
        trace!(count = drained.len(), "draining closed mailbox");
        for envelope in drained {
            bouncer.bounce(envelope);
        }
        self.notify.notify_one();
    }

    /// Number of envelopes currently queued.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("mailbox lock poisoned").len()
    }

    /// Tests whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tests whether the mailbox has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.lock().expect("mailbox lock poisoned").bouncer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::message::ArgPack;

    #[derive(Debug, Default)]
    struct CountingBouncer {
        hits: Arc<AtomicUsize>,
    }

    impl Bouncer for CountingBouncer {
        fn bounce(&self, _envelope: Envelope) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn tagged(n: i32, priority: Priority) -> Envelope {
        Envelope::new(ArgPack::single(n), priority)
    }

    #[tokio::test]
    async fn fifo_within_one_priority_class() {
        let mailbox = Mailbox::new();
        for n in 0..4 {
            mailbox.enqueue(tagged(n, Priority::Normal));
        }
        for expected in 0..4 {
            let envelope = mailbox.dequeue().await.unwrap();
            assert_eq!(envelope.payload.get::<i32>(0), Some(&expected));
        }
    }

    #[tokio::test]
    async fn dequeue_resolves_none_after_close() {
        let mailbox = Mailbox::new();
        mailbox.close(CountingBouncer::default());
        assert!(mailbox.is_closed());
        assert!(mailbox.dequeue().await.is_none());
    }

    #[tokio::test]
    async fn second_close_is_a_noop() {
        let mailbox = Mailbox::new();
        let hits = Arc::new(AtomicUsize::new(0));
        mailbox.enqueue(tagged(1, Priority::Normal));
        mailbox.enqueue(tagged(2, Priority::High));
        mailbox.close(CountingBouncer { hits: Arc::clone(&hits) });
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        let second = Arc::new(AtomicUsize::new(0));
        mailbox.close(CountingBouncer { hits: Arc::clone(&second) });
        assert_eq!(second.load(Ordering::SeqCst), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn close_drains_in_arrival_order() {
        let mailbox = Mailbox::new();
        mailbox.enqueue(tagged(1, Priority::Normal));
        mailbox.enqueue(tagged(2, Priority::High));
        mailbox.enqueue(tagged(3, Priority::Normal));
        let order = Arc::new(Mutex::new(Vec::new()));
        struct Recorder(Arc<Mutex<Vec<i32>>>);
        impl Bouncer for Recorder {
            fn bounce(&self, envelope: Envelope) {
                let n = *envelope.payload.get::<i32>(0).unwrap();
                self.0.lock().unwrap().push(n);
            }
        }
        mailbox.close(Recorder(Arc::clone(&order)));
        assert_eq!(*order.lock().unwrap(), vec![1, 2, 3]);
    }
}
