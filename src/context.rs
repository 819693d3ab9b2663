//=========================================================================
// Context
//
// Entry point that acquires the platform and hands out windows, event
// pollers and input trackers sharing it.
//
// Architecture:
// ```text
//     ContextBuilder  ──build()──>  Context
//         │                           ├─ window(config)  → Window
//         └─ with_queue_capacity()    ├─ event()         → Event (pumps platform)
//                                     ├─ keyboard()      → Keyboard
//                                     ├─ mouse()         → Mouse
//                                     └─ ticks()         → ms since build
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::error::EaselError;
use crate::core::event::{event_queue, Event, EventRecord, EventSender, DEFAULT_QUEUE_CAPACITY};
use crate::core::input::{Keyboard, Mouse, SharedSnapshot};
use crate::platform::{Platform, PlatformPump, Window, WindowConfig};

//=== ContextBuilder ======================================================

/// Builder for configuring and constructing a [`Context`].
///
/// # Default Values
///
/// - **Queue capacity**: 1024 events
///
/// # Examples
///
/// ```no_run
/// use easel::ContextBuilder;
///
/// let context = ContextBuilder::new()
///     .with_queue_capacity(4096)
///     .build()?;
/// # Ok::<(), easel::core::error::EaselError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    queue_capacity: usize,
}

impl ContextBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Sets how many events may wait between polls before new ones are
    /// dropped.
    ///
    /// Default: 1024
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Queue capacity must be positive");
        self.queue_capacity = capacity;
        self
    }

    /// Creates the event loop and the shared input state.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::EventLoopCreation`] when an event loop already
    /// exists in this process or no display is available.
    pub fn build(self) -> Result<Context, EaselError> {
        info!("Building context (queue: {})", self.queue_capacity);

        let (sender, receiver) = event_queue(self.queue_capacity);
        let snapshot = SharedSnapshot::new();
        let platform = Platform::new(sender.clone(), snapshot.clone())?;

        Ok(Context {
            platform: Rc::new(RefCell::new(platform)),
            snapshot,
            sender,
            receiver,
            started: Instant::now(),
        })
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Context =============================================================

/// Owner of the platform connection.
///
/// Everything created from a context shares its event loop and live input
/// state. Must be created on the main thread.
///
/// # Examples
///
/// ```no_run
/// use easel::core::event::EventType;
/// use easel::core::input::Scancode;
/// use easel::{Context, WindowConfig};
///
/// let context = Context::new()?;
/// let mut window = context.window(&WindowConfig::default())?;
/// let mut event = context.event();
/// let mut keyboard = context.keyboard();
///
/// 'main: loop {
///     while event.poll() {
///         if event.kind() == Some(EventType::Quit) {
///             break 'main;
///         }
///     }
///     if keyboard.pressed(Scancode::ESCAPE) {
///         break;
///     }
///     window.present()?;
///     easel::delay(16);
/// }
/// # Ok::<(), easel::core::error::EaselError>(())
/// ```
pub struct Context {
    platform: Rc<RefCell<Platform>>,
    snapshot: SharedSnapshot,
    sender: EventSender,
    receiver: Receiver<EventRecord>,
    started: Instant,
}

impl Context {
    /// Creates a context with default settings.
    pub fn new() -> Result<Self, EaselError> {
        ContextBuilder::new().build()
    }

    //--- Factories --------------------------------------------------------

    /// Opens a window, cleared to black and already presented.
    pub fn window(&self, config: &WindowConfig) -> Result<Window, EaselError> {
        Window::new(&mut self.platform.borrow_mut(), config)
    }

    /// Creates an event poller attached to this context's queue.
    ///
    /// Pollers share one queue; each record goes to whichever polls first.
    pub fn event(&self) -> Event {
        Event::new(
            self.receiver.clone(),
            Some(Box::new(PlatformPump(self.platform.clone()))),
        )
    }

    /// Creates a keyboard tracker with its own edge memory.
    pub fn keyboard(&self) -> Keyboard {
        Keyboard::new(self.snapshot.clone())
    }

    /// Creates a mouse tracker with its own edge memory.
    pub fn mouse(&self) -> Mouse {
        Mouse::new(self.snapshot.clone())
    }

    //--- Accessors --------------------------------------------------------

    /// The live input snapshot the platform writes.
    pub fn snapshot(&self) -> SharedSnapshot {
        self.snapshot.clone()
    }

    /// A sender for injecting records, e.g. from a gamepad library.
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Milliseconds since the context was built.
    pub fn ticks(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

//=== Timing ==============================================================

/// Blocks the calling thread for `ms` milliseconds.
pub fn delay(ms: u64) {
    std::thread::sleep(Duration::from_millis(ms));
}

//=========================================================================
// Unit Tests
//=========================================================================
