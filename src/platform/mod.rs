//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the event queue and the shared
// input snapshot, on the calling thread.
//
// Architecture:
// ```text
//  Event::poll() (queue empty)
//   ↓
//  PlatformPump ──pump()──> Platform
//                            │
//                            ├─ EventLoop::pump_app_events(0 ms)
//                            │    ↓
//                            │  PlatformState (ApplicationHandler)
//                            │    ├─ windows: id → Weak<Window> (state lookups)
//                            │    ├─ InputProcessor
//                            │    │    ├─ Winit → EventRecord
//                            │    │    └─ updates SharedSnapshot
//                            │    └─ pending: Vec<EventRecord>
//                            │
//                            └─ flush ──> EventSender ──> Event queue
// ```
//
// Key Design Decisions:
// - **Pump on demand**: the OS queue is drained only when an `Event`
//   finds its queue empty, so no events arrive between polls
// - **Flush after pump**: records from one pump are queued together,
//   in the order the OS delivered them
// - **Close is not exit**: a close request becomes CLOSED + Quit records;
//   the application decides when to stop
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so the `Context` must be created there
//
// Responsibilities:
// - Own the Winit event loop
// - Create OS windows on request
// - Convert Winit events into event records
// - Keep the live input snapshot current
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod window;

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window as WinitWindow, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::error::EaselError;
use crate::core::event::{EventPump, EventRecord, EventSender};
use crate::core::input::SharedSnapshot;
use input_processor::{InputProcessor, WindowShape};

//=== Public Exports ======================================================

pub use window::{Window, WindowConfig};

//=== Platform ============================================================

/// Winit event loop plus the handler that turns its events into records.
///
/// # Thread Safety
///
/// This type is NOT Send/Sync. It lives on the thread that created the
/// `Context`, which must be the main thread.
pub(crate) struct Platform {
    event_loop: EventLoop<()>,
    state: PlatformState,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the Winit event loop.
    ///
    /// # Errors
    ///
    /// Fails if an event loop already exists in this process or the
    /// display server is unreachable.
    pub fn new(sender: EventSender, snapshot: SharedSnapshot) -> Result<Self, EaselError> {
        let event_loop = EventLoop::new().map_err(|e| {
            error!(target: "platform", "Event loop creation failed: {}", e);
            EaselError::EventLoopCreation(e)
        })?;

        info!(target: "platform", "Platform subsystem initialized");

        Ok(Self {
            event_loop,
            state: PlatformState::new(sender, snapshot),
        })
    }

    //--- Windows ----------------------------------------------------------

    /// Opens an OS window and registers it for state lookups.
    pub fn create_window(&mut self, attrs: WindowAttributes) -> Result<Rc<WinitWindow>, EaselError> {
        // Windows are created outside any handler callback, so the
        // event-loop-level constructor is the only one available.
        #[allow(deprecated)]
        let window = self.event_loop.create_window(attrs).map_err(|e| {
            error!(target: "platform", "Window creation failed: {}", e);
            EaselError::WindowCreation(e)
        })?;

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let window = Rc::new(window);
        self.state.windows.insert(window.id(), Rc::downgrade(&window));
        Ok(window)
    }

    //--- Execution --------------------------------------------------------

    /// Processes every OS event that is ready, without blocking, and
    /// queues the resulting records.
    pub fn pump(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.state);

        if let PumpStatus::Exit(code) = status {
            debug!(target: "platform", "Event loop reported exit ({})", code);
        }

        self.state.flush();
    }
}

//=== PlatformState =======================================================

/// Handler state driven by Winit during a pump.
struct PlatformState {
    /// Records produced during the current pump.
    pending: Vec<EventRecord>,

    sender: EventSender,

    /// Open windows, queried for their minimized/maximized state.
    windows: HashMap<WindowId, Weak<WinitWindow>>,

    input_processor: InputProcessor,
}

impl PlatformState {
    fn new(sender: EventSender, snapshot: SharedSnapshot) -> Self {
        Self {
            pending: Vec::with_capacity(64),
            sender,
            windows: HashMap::new(),
            input_processor: InputProcessor::new(snapshot),
        }
    }

    /// Current shape of a registered window; `None` once it is dropped.
    fn window_shape(&self, window_id: WindowId) -> Option<WindowShape> {
        let window = self.windows.get(&window_id)?.upgrade()?;
        Some(if window.is_minimized().unwrap_or(false) {
            WindowShape::Minimized
        } else if window.is_maximized() {
            WindowShape::Maximized
        } else {
            WindowShape::Normal
        })
    }

    /// Moves pending records into the event queue.
    ///
    /// A full queue drops the remaining records of this pump; the sender
    /// logs each drop.
    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        trace!(target: "platform::input", "Flushing {} events", self.pending.len());

        let total = self.pending.len();
        let queued = self
            .pending
            .drain(..)
            .map(|record| self.sender.push(record))
            .filter(|&ok| ok)
            .count();

        if queued < total {
            warn!(
                target: "platform::input",
                "Dropped {} of {} events",
                total - queued,
                total
            );
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for PlatformState {
    /// Windows are opened eagerly by `Context::window`, so there is
    /// nothing to create here.
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        debug!(target: "platform", "Application resumed");
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let shape = match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                None
            }
            WindowEvent::Resized(_) => self.window_shape(window_id),
            WindowEvent::Destroyed => {
                self.windows.remove(&window_id);
                None
            }
            _ => None,
        };

        self.input_processor
            .process_window_event(u64::from(window_id), &event, shape, &mut self.pending);
    }
}

//=== PlatformPump ========================================================

/// Shared handle that lets an `Event` pump the platform.
pub(crate) struct PlatformPump(pub(crate) Rc<RefCell<Platform>>);

impl EventPump for PlatformPump {
    fn pump(&mut self) {
        match self.0.try_borrow_mut() {
            Ok(mut platform) => platform.pump(),
            Err(_) => warn!(target: "platform", "Platform busy, skipping pump"),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{event_channel, EventType};
    use crate::core::input::Scancode;

    fn make_state(capacity: usize) -> (PlatformState, crate::core::event::Event, SharedSnapshot) {
        let (sender, event) = event_channel(capacity);
        let snapshot = SharedSnapshot::new();
        (PlatformState::new(sender, snapshot.clone()), event, snapshot)
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut state, mut event, _) = make_state(4);
        state.flush();
        assert!(!event.poll(), "No events should be queued for empty buffer");
    }

    #[test]
    fn flush_preserves_order() {
        let (mut state, mut event, _) = make_state(8);
        state.pending.push(EventRecord::Quit);
        state.pending.push(state.input_processor.process_cursor_moved(1, 5, 5));
        state.flush();

        assert!(event.poll());
        assert_eq!(event.kind(), Some(EventType::Quit));
        assert!(event.poll());
        assert_eq!(event.kind(), Some(EventType::MouseMotion));
        assert!(!event.poll());
    }

    #[test]
    fn flush_clears_buffer() {
        let (mut state, mut event, _) = make_state(8);
        state.pending.push(EventRecord::Quit);

        state.flush();
        state.flush();

        assert!(event.poll(), "First flush should queue");
        assert!(!event.poll(), "Second flush should not queue");
    }

    #[test]
    fn flush_drops_overflow() {
        let (mut state, mut event, _) = make_state(2);
        for _ in 0..5 {
            state.pending.push(EventRecord::Quit);
        }
        state.flush();

        assert!(state.pending.is_empty());
        let mut polled = 0;
        while event.poll() {
            polled += 1;
        }
        assert_eq!(polled, 2);
    }

    #[test]
    fn flush_survives_dropped_event() {
        let (mut state, event, _) = make_state(4);
        drop(event);
        state.pending.push(EventRecord::Quit);

        // Should not panic, just log
        state.flush();
        assert!(state.pending.is_empty());
    }

    #[test]
    fn unregistered_window_has_no_shape() {
        let (state, _event, _) = make_state(4);
        // SAFETY: the id is only used as a map key.
        let id = unsafe { WindowId::dummy() };
        assert_eq!(state.window_shape(id), None);
    }

    #[test]
    fn processed_keys_reach_snapshot_and_queue() {
        let (mut state, mut event, snapshot) = make_state(8);
        state.input_processor.process_key(
            1,
            Scancode::SPACE,
            winit::event::ElementState::Pressed,
            false,
            None,
            &mut state.pending,
        );
        state.flush();

        assert!(snapshot.key_down(Scancode::SPACE));
        assert!(event.poll());
        assert!(event.key().is_some_and(|k| k == Scancode::SPACE));
    }
}
