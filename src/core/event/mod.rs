//=========================================================================
// Event Dispatcher
//
// One-event-per-call polling with typed access to the current event.
//
// Responsibilities:
// - Pull the next queued record on `poll()`, pumping the platform when
//   the queue runs dry
// - Expose the current discriminant (`kind()`)
// - Hand out typed views only when the discriminant matches
//
// Typical usage:
// ```no_run
// use easel::core::event::EventType;
// use easel::core::input::Scancode;
// # fn frame(event: &mut easel::core::event::Event) -> bool {
// let mut quit = false;
// while event.poll() {
//     match event.kind() {
//         Some(EventType::Quit) => quit = true,
//         Some(EventType::KeyDown) => {
//             if event.key().is_some_and(|key| key == Scancode::SPACE) {
//                 // jump
//             }
//         }
//         _ => {}
//     }
// }
// # quit }
// ```
//
//=========================================================================

//=== Submodules ==========================================================
mod queue;
mod record;
mod views;

//=== External Crates =====================================================
use crossbeam_channel::{Receiver, TryRecvError};
use log::debug;

//=== Public Exports ======================================================
pub use queue::{EventSender, DEFAULT_QUEUE_CAPACITY};
pub(crate) use queue::queue as event_queue;
pub use record::{
    AxisRecord, ButtonRecord, ControllerButtonRecord, EventRecord, EventType, FingerRecord,
    GestureRecord, KeyRecord, MotionRecord, TextRecord, WheelRecord, WindowEventId,
    WindowRecord,
};
pub use views::{
    Button, ControllerButton, ControllerMotion, Finger, Gesture, Key, Motion, TextInput, Wheel,
    WindowEvent,
};

//=== EventPump ===========================================================

/// Source that refills the event queue on demand.
///
/// Implemented by the platform; `Event::poll()` calls it once whenever the
/// queue is empty.
pub trait EventPump {
    /// Moves pending OS events into the queue without blocking.
    fn pump(&mut self);
}

//=== Event ===============================================================

/// Holds the most recently polled event.
///
/// Views returned by the accessors borrow the event, so they must be
/// dropped before the next [`poll`](Self::poll).
pub struct Event {
    receiver: Receiver<EventRecord>,
    pump: Option<Box<dyn EventPump>>,
    current: Option<EventRecord>,
}

impl Event {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(receiver: Receiver<EventRecord>, pump: Option<Box<dyn EventPump>>) -> Self {
        Self {
            receiver,
            pump,
            current: None,
        }
    }

    //--- Polling ----------------------------------------------------------

    /// Moves the next queued event into this object.
    ///
    /// Returns `false` when no event is available; the previously held
    /// event is kept in that case. Call in a loop until it returns `false`
    /// once per frame so no events pile up.
    pub fn poll(&mut self) -> bool {
        if self.receiver.is_empty() {
            if let Some(pump) = self.pump.as_mut() {
                pump.pump();
            }
        }

        match self.receiver.try_recv() {
            Ok(record) => {
                self.current = Some(record);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                debug!(target: "easel::event", "Event queue has no producers left");
                false
            }
        }
    }

    //--- Discriminant -----------------------------------------------------

    /// Type of the current event, `None` before the first successful poll.
    pub fn kind(&self) -> Option<EventType> {
        self.current.as_ref().map(EventRecord::kind)
    }

    /// The current event record, for `match`-based dispatch.
    pub fn record(&self) -> Option<&EventRecord> {
        self.current.as_ref()
    }

    //--- Typed Views ------------------------------------------------------

    pub fn motion(&self) -> Option<Motion<'_>> {
        match self.current.as_ref()? {
            EventRecord::MouseMotion(r) => Some(Motion(r)),
            _ => None,
        }
    }

    /// Mouse button down or up.
    pub fn button(&self) -> Option<Button<'_>> {
        match self.current.as_ref()? {
            EventRecord::MouseButtonDown(r) | EventRecord::MouseButtonUp(r) => Some(Button(r)),
            _ => None,
        }
    }

    /// Key down or up.
    pub fn key(&self) -> Option<Key<'_>> {
        match self.current.as_ref()? {
            EventRecord::KeyDown(r) | EventRecord::KeyUp(r) => Some(Key(r)),
            _ => None,
        }
    }

    pub fn wheel(&self) -> Option<Wheel<'_>> {
        match self.current.as_ref()? {
            EventRecord::MouseWheel(r) => Some(Wheel(r)),
            _ => None,
        }
    }

    /// Finger down, motion or up.
    pub fn finger(&self) -> Option<Finger<'_>> {
        match self.current.as_ref()? {
            EventRecord::FingerDown(r) | EventRecord::FingerMotion(r) | EventRecord::FingerUp(r) => {
                Some(Finger(r))
            }
            _ => None,
        }
    }

    pub fn gesture(&self) -> Option<Gesture<'_>> {
        match self.current.as_ref()? {
            EventRecord::Gesture(r) => Some(Gesture(r)),
            _ => None,
        }
    }

    pub fn window(&self) -> Option<WindowEvent<'_>> {
        match self.current.as_ref()? {
            EventRecord::Window(r) => Some(WindowEvent(r)),
            _ => None,
        }
    }

    pub fn text_input(&self) -> Option<TextInput<'_>> {
        match self.current.as_ref()? {
            EventRecord::TextInput(r) => Some(TextInput(r)),
            _ => None,
        }
    }

    pub fn controller_motion(&self) -> Option<ControllerMotion<'_>> {
        match self.current.as_ref()? {
            EventRecord::ControllerMotion(r) => Some(ControllerMotion(r)),
            _ => None,
        }
    }

    /// Controller button down or up.
    pub fn controller_button(&self) -> Option<ControllerButton<'_>> {
        match self.current.as_ref()? {
            EventRecord::ControllerDown(r) | EventRecord::ControllerUp(r) => {
                Some(ControllerButton(r))
            }
            _ => None,
        }
    }
}

//=== Standalone Queues ===================================================

/// Creates an event queue that is not attached to any platform.
///
/// Useful for tests and for backends that produce every event themselves.
pub fn event_channel(capacity: usize) -> (EventSender, Event) {
    let (sender, receiver) = queue::queue(capacity);
    (sender, Event::new(receiver, None))
}

//=========================================================================
// Unit Tests
//=========================================================================
