//=========================================================================
// Event Queue
//=========================================================================
//
// Bounded FIFO between event producers and `Event::poll()`.
//
// Architecture:
//   Platform pump / custom backend → EventSender → channel → Event
//
// A full queue drops the newest record and logs a warning instead of
// blocking the producer, which runs on the same thread as the consumer.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::record::EventRecord;

/// Default number of records the queue holds before dropping.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

//=== EventSender =========================================================

/// Producer half of the event queue.
///
/// Held by the platform; custom backends (for example a gamepad library)
/// can hold a clone to inject their own records.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<EventRecord>,
}

impl EventSender {
    /// Queues a record. Returns `false` if it was dropped.
    pub fn push(&self, record: EventRecord) -> bool {
        trace!(target: "easel::event", "Queued {:?}", record.kind());

        match self.sender.try_send(record) {
            Ok(()) => true,
            Err(TrySendError::Full(record)) => {
                warn!(
                    target: "easel::event",
                    "Event queue full ({} records), dropping {:?}",
                    self.sender.len(),
                    record.kind()
                );
                false
            }
            Err(TrySendError::Disconnected(record)) => {
                warn!(
                    target: "easel::event",
                    "No event receiver left, dropping {:?}",
                    record.kind()
                );
                false
            }
        }
    }

    /// Number of records waiting to be polled.
    pub fn pending(&self) -> usize {
        self.sender.len()
    }
}

//=== Construction ========================================================

/// Creates a bounded queue. A capacity of zero is raised to one.
pub(crate) fn queue(capacity: usize) -> (EventSender, Receiver<EventRecord>) {
    let (sender, receiver) = bounded(capacity.max(1));
    (EventSender { sender }, receiver)
}

//=========================================================================
// Unit Tests
//=========================================================================
