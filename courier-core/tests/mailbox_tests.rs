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

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio_util::task::TaskTracker;

use courier_core::prelude::*;

use crate::setup::actors::TestActor;
use crate::setup::messages::Ping;
use crate::setup::*;

mod setup;

/// Counts every bounced envelope, delegating request bouncing to the
/// standard [`RequestBouncer`].
struct CountingBouncer {
    inner: RequestBouncer,
    hits: Arc<AtomicUsize>,
}

impl CountingBouncer {
    fn new(reason: ExitReason) -> (Self, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        (CountingBouncer { inner: RequestBouncer::new(reason), hits: Arc::clone(&hits) }, hits)
    }
}

impl Bouncer for CountingBouncer {
    fn bounce(&self, envelope: Envelope) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.inner.bounce(envelope);
    }
}

/// Queued high-priority envelopes go before queued normal ones; within one
/// class, FIFO arrival order holds.
#[tokio::test]
async fn test_priority_then_fifo_ordering() {
    initialize_tracing();
    let mailbox = Mailbox::new();
    for (n, priority) in
        [(1, Priority::Normal), (2, Priority::High), (3, Priority::Normal), (4, Priority::High)]
    {
        mailbox.enqueue(Envelope::new(ArgPack::single(Ping(n)), priority));
    }

    let mut observed = Vec::new();
    for _ in 0..4 {
        let envelope = mailbox.dequeue().await.expect("mailbox should hold 4 envelopes");
        observed.push(envelope.payload.get::<Ping>(0).unwrap().0);
    }
    assert_eq!(observed, vec![2, 4, 1, 3]);
}

/// Envelopes from arbitrarily interleaved producers are observed exactly
/// once each: by the consumer or by the bouncer, with total count preserved.
#[tokio::test]
async fn test_interleaved_producers_every_envelope_observed_once() {
    initialize_tracing();
    const PRODUCERS: usize = 8;
    const PER_PRODUCER: usize = 25;
    const CONSUMED: usize = 100;

    let consumer = TestActor::new("consumer");
    let tracker = TaskTracker::new();
    for p in 0..PRODUCERS {
        let destination = consumer.address().clone();
        tracker.spawn(async move {
            for n in 0..PER_PRODUCER {
                let priority = if n % 3 == 0 { Priority::High } else { Priority::Normal };
                destination.send(priority, ArgPack::single(Ping((p * PER_PRODUCER + n) as i32)));
                tokio::task::yield_now().await;
            }
        });
    }
    tracker.close();
    tracker.wait().await;

    for _ in 0..CONSUMED {
        assert!(consumer.next_envelope().await.is_some());
    }

    let (bouncer, bounced) = CountingBouncer::new(ExitReason::Normal);
    consumer.mailbox().close(bouncer);

    let total = PRODUCERS * PER_PRODUCER;
    assert_eq!(CONSUMED + bounced.load(Ordering::SeqCst), total);
    assert!(consumer.mailbox().is_empty());
    assert!(consumer.next_envelope().await.is_none());
}

/// Closing a mailbox holding 3 pending requests and 2 one-way envelopes
/// produces exactly 3 bounce failure replies and 2 silent discards.
#[tokio::test]
async fn test_close_bounces_requests_and_discards_oneways() {
    initialize_tracing();
    let requester = TestActor::new("requester");
    let destination = TestActor::new("destination");

    let handles: Vec<_> = (0..3)
        .map(|n| {
            requester.request(
                Priority::Normal,
                destination.address(),
                ArgPack::single(Ping(n)),
                None,
            )
        })
        .collect();
    destination.address().send(Priority::Normal, ArgPack::single(Ping(100)));
    destination.address().send(Priority::High, ArgPack::single(Ping(101)));
    assert_eq!(destination.mailbox().len(), 5);

    let (bouncer, bounced) = CountingBouncer::new(ExitReason::UserShutdown);
    destination.mailbox().close(bouncer);

    assert_eq!(bounced.load(Ordering::SeqCst), 5);
    assert!(destination.mailbox().is_empty());
    for handle in handles {
        let outcome = handle.receive().await;
        assert_eq!(outcome.unwrap_err(), ReplyError::Bounced(ExitReason::UserShutdown));
    }
    assert_eq!(requester.correlator().outstanding(), 0);

    // A second close never triggers a second bounce pass.
    let (second_bouncer, second) = CountingBouncer::new(ExitReason::UserShutdown);
    destination.mailbox().close(second_bouncer);
    assert_eq!(second.load(Ordering::SeqCst), 0);
}

/// An enqueue racing with or following close is routed through the bounce
/// procedure with the recorded termination reason, never silently lost.
#[tokio::test]
async fn test_enqueue_after_close_is_bounced() {
    initialize_tracing();
    let requester = TestActor::new("requester");
    let destination = TestActor::new("destination");

    let reason = ExitReason::Fault("handler panicked".to_string());
    destination.close_mailbox(reason.clone());
    assert!(destination.mailbox().is_closed());

    // A late one-way send is discarded silently.
    destination.address().send(Priority::Normal, ArgPack::single(Ping(1)));
    assert!(destination.mailbox().is_empty());

    // A late request is answered with the recorded reason instead of hanging.
    let handle =
        requester.request(Priority::High, destination.address(), ArgPack::single(Ping(2)), None);
    assert_eq!(handle.receive().await.unwrap_err(), ReplyError::Bounced(reason));
}
