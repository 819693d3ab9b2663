//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit window events into event records and keeps the shared
// input snapshot current.
//
// Architecture:
//   Winit WindowEvent → InputProcessor → EventRecord(s) → event queue
//                            └─ SharedSnapshot (keys, buttons, cursor)
//
// Stateful tracking: the last cursor position (motion deltas, button
// coordinates), the last click (click counting), each active touch point
// (finger deltas) and each window's minimized/maximized state. Unmapped
// keys produce no key record. IME is never enabled, so text comes only
// from key presses.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::time::{Duration, Instant};

//=== External Dependencies ===============================================

use log::trace;
use winit::{
    event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, TouchPhase},
    event::{KeyEvent, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::event::{
    ButtonRecord, EventRecord, FingerRecord, GestureRecord, KeyRecord, MotionRecord, TextRecord,
    WheelRecord, WindowEventId, WindowRecord,
};
use crate::core::input::{MouseButton, Scancode, SharedSnapshot};

//=== Click Counting ======================================================

/// Longest gap between presses that still counts as a repeat click.
pub(crate) const CLICK_INTERVAL: Duration = Duration::from_millis(500);

/// Farthest the cursor may drift between repeat clicks, per axis.
pub(crate) const CLICK_RADIUS: i32 = 4;

#[derive(Debug, Clone, Copy)]
struct LastClick {
    button: MouseButton,
    at: Instant,
    x: i32,
    y: i32,
    count: u8,
}

//=== Window Shape ========================================================

/// Minimized/maximized state of a window, read by the platform when the
/// window is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum WindowShape {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

//=== InputProcessor ======================================================

/// Converts Winit events to event records with stateful tracking.
pub(crate) struct InputProcessor {
    snapshot: SharedSnapshot,
    cursor: Option<(i32, i32)>,
    last_click: Option<LastClick>,
    fingers: HashMap<u64, (f32, f32)>,
    shapes: HashMap<u64, WindowShape>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(snapshot: SharedSnapshot) -> Self {
        Self {
            snapshot,
            cursor: None,
            last_click: None,
            fingers: HashMap::new(),
            shapes: HashMap::new(),
        }
    }

    //--- Dispatch ---------------------------------------------------------

    /// Appends the records produced by one Winit window event to `out`.
    ///
    /// `shape` is the window's current state, looked up by the caller for
    /// `Resized` events; `None` when the window is unknown.
    pub(crate) fn process_window_event(
        &mut self,
        window_id: u64,
        event: &WindowEvent,
        shape: Option<WindowShape>,
        out: &mut Vec<EventRecord>,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                out.push(window_record(window_id, WindowEventId::CLOSED, 0, 0));
                out.push(EventRecord::Quit);
            }

            WindowEvent::Resized(size) => {
                let shape = shape.unwrap_or_default();
                self.process_resized(window_id, size.width, size.height, shape, out)
            }

            WindowEvent::Destroyed => {
                self.shapes.remove(&window_id);
            }

            WindowEvent::Moved(position) => out.push(window_record(
                window_id,
                WindowEventId::MOVED,
                position.x,
                position.y,
            )),

            WindowEvent::Focused(focused) => out.push(self.process_focus(window_id, *focused)),

            WindowEvent::CursorEntered { .. } => {
                out.push(window_record(window_id, WindowEventId::MOUSE_ENTER, 0, 0))
            }

            WindowEvent::CursorLeft { .. } => {
                out.push(window_record(window_id, WindowEventId::MOUSE_LEAVE, 0, 0))
            }

            WindowEvent::Occluded(occluded) => {
                let id = if *occluded { WindowEventId::HIDDEN } else { WindowEventId::SHOWN };
                out.push(window_record(window_id, id, 0, 0));
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.process_key_event(window_id, key_event, out)
            }

            WindowEvent::CursorMoved { position, .. } => {
                out.push(self.process_cursor_moved(window_id, position.x as i32, position.y as i32))
            }

            WindowEvent::MouseInput { state, button, .. } => match mouse_button(*button) {
                Some(button) => out.push(self.process_mouse_button(
                    window_id,
                    button,
                    *state,
                    Instant::now(),
                )),
                None => trace!(target: "platform::input", "Unmapped mouse button {:?}", button),
            },

            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (f64::from(*x), f64::from(*y)),
                    MouseScrollDelta::PixelDelta(p) => (p.x, p.y),
                };
                out.push(self.process_wheel(window_id, x, y));
            }

            WindowEvent::Touch(touch) => {
                let pressure = touch.force.map_or(1.0, |f| f.normalized() as f32);
                out.push(self.process_touch(
                    window_id,
                    touch.id,
                    touch.phase,
                    touch.location.x as f32,
                    touch.location.y as f32,
                    pressure,
                ));
            }

            WindowEvent::PinchGesture { delta, .. } => {
                out.push(self.process_gesture(window_id, *delta as f32, 0.0))
            }

            WindowEvent::RotationGesture { delta, .. } => {
                out.push(self.process_gesture(window_id, 0.0, delta.to_radians()))
            }

            _ => {}
        }
    }

    //--- Window State -----------------------------------------------------

    /// New inner size, plus a MINIMIZED, MAXIMIZED or RESTORED record when
    /// the window's shape differs from the one seen at its last resize.
    ///
    /// A zero-sized area (minimized on some platforms) gets no RESIZED.
    pub(crate) fn process_resized(
        &mut self,
        window_id: u64,
        width: u32,
        height: u32,
        shape: WindowShape,
        out: &mut Vec<EventRecord>,
    ) {
        if width > 0 && height > 0 {
            out.push(window_record(
                window_id,
                WindowEventId::RESIZED,
                clamp_i32(width),
                clamp_i32(height),
            ));
        }

        let previous = self.shapes.insert(window_id, shape).unwrap_or_default();
        if previous != shape {
            trace!(target: "platform::input", "Window {} now {:?}", window_id, shape);
            let id = match shape {
                WindowShape::Minimized => WindowEventId::MINIMIZED,
                WindowShape::Maximized => WindowEventId::MAXIMIZED,
                WindowShape::Normal => WindowEventId::RESTORED,
            };
            out.push(window_record(window_id, id, 0, 0));
        }
    }

    //--- Keyboard ---------------------------------------------------------

    fn process_key_event(&mut self, window_id: u64, key_event: &KeyEvent, out: &mut Vec<EventRecord>) {
        let scancode = match key_event.physical_key {
            PhysicalKey::Code(code) => Scancode::from(code),
            PhysicalKey::Unidentified(_) => Scancode::UNKNOWN,
        };

        self.process_key(
            window_id,
            scancode,
            key_event.state,
            key_event.repeat,
            key_event.text.as_deref(),
            out,
        );
    }

    /// Records a key transition, plus a text record when the press
    /// produced printable text.
    pub(crate) fn process_key(
        &mut self,
        window_id: u64,
        scancode: Scancode,
        state: ElementState,
        repeat: bool,
        text: Option<&str>,
        out: &mut Vec<EventRecord>,
    ) {
        if scancode == Scancode::UNKNOWN {
            trace!(target: "platform::input", "Unmapped key ignored");
        } else {
            let record = KeyRecord { window_id, scancode, repeat };
            match state {
                ElementState::Pressed => {
                    self.snapshot.press_key(scancode);
                    out.push(EventRecord::KeyDown(record));
                }
                ElementState::Released => {
                    self.snapshot.release_key(scancode);
                    out.push(EventRecord::KeyUp(record));
                }
            }
        }

        if state == ElementState::Pressed {
            if let Some(text) = text {
                out.extend(text_record(window_id, text));
            }
        }
    }

    /// Focus changes. Losing focus releases every held key and button,
    /// since their release events go to another window.
    pub(crate) fn process_focus(&mut self, window_id: u64, focused: bool) -> EventRecord {
        if focused {
            window_record(window_id, WindowEventId::KEYBOARD_ENTER, 0, 0)
        } else {
            trace!(target: "platform::input", "Focus lost, releasing held input");
            self.snapshot.release_all();
            window_record(window_id, WindowEventId::KEYBOARD_LEAVE, 0, 0)
        }
    }

    //--- Mouse ------------------------------------------------------------

    /// Pointer moved to `(x, y)`. The first motion reports zero deltas.
    pub(crate) fn process_cursor_moved(&mut self, window_id: u64, x: i32, y: i32) -> EventRecord {
        let (px, py) = self.cursor.unwrap_or((x, y));
        self.cursor = Some((x, y));
        self.snapshot.move_cursor(x, y);

        EventRecord::MouseMotion(MotionRecord {
            window_id,
            x,
            y,
            dx: x - px,
            dy: y - py,
        })
    }

    /// Button transition at the current cursor position.
    ///
    /// A press of the same button within [`CLICK_INTERVAL`] and
    /// [`CLICK_RADIUS`] of the previous one counts up; the matching
    /// release repeats the press's count.
    pub(crate) fn process_mouse_button(
        &mut self,
        window_id: u64,
        button: MouseButton,
        state: ElementState,
        now: Instant,
    ) -> EventRecord {
        let (x, y) = self.cursor.unwrap_or((0, 0));

        match state {
            ElementState::Pressed => {
                self.snapshot.press_button(button);

                let count = match self.last_click {
                    Some(last)
                        if last.button == button
                            && now.saturating_duration_since(last.at) <= CLICK_INTERVAL
                            && (x - last.x).abs() <= CLICK_RADIUS
                            && (y - last.y).abs() <= CLICK_RADIUS =>
                    {
                        last.count.saturating_add(1)
                    }
                    _ => 1,
                };
                self.last_click = Some(LastClick { button, at: now, x, y, count });

                EventRecord::MouseButtonDown(ButtonRecord { window_id, button, clicks: count, x, y })
            }
            ElementState::Released => {
                self.snapshot.release_button(button);

                let clicks = match self.last_click {
                    Some(last) if last.button == button => last.count,
                    _ => 1,
                };

                EventRecord::MouseButtonUp(ButtonRecord { window_id, button, clicks, x, y })
            }
        }
    }

    /// Wheel scroll reduced to one notch per axis.
    pub(crate) fn process_wheel(&mut self, window_id: u64, x: f64, y: f64) -> EventRecord {
        EventRecord::MouseWheel(WheelRecord {
            window_id,
            x: notch(x),
            y: notch(y),
        })
    }

    //--- Touch ------------------------------------------------------------

    /// Touch point update in window pixels.
    pub(crate) fn process_touch(
        &mut self,
        window_id: u64,
        finger_id: u64,
        phase: TouchPhase,
        x: f32,
        y: f32,
        pressure: f32,
    ) -> EventRecord {
        let (px, py) = match phase {
            TouchPhase::Started => (x, y),
            TouchPhase::Moved => self.fingers.get(&finger_id).copied().unwrap_or((x, y)),
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.fingers.remove(&finger_id).unwrap_or((x, y))
            }
        };

        if matches!(phase, TouchPhase::Started | TouchPhase::Moved) {
            self.fingers.insert(finger_id, (x, y));
        }

        let record = FingerRecord {
            window_id,
            finger_id,
            x,
            y,
            dx: x - px,
            dy: y - py,
            pressure,
        };

        match phase {
            TouchPhase::Started => EventRecord::FingerDown(record),
            TouchPhase::Moved => EventRecord::FingerMotion(record),
            TouchPhase::Ended | TouchPhase::Cancelled => EventRecord::FingerUp(record),
        }
    }

    /// Two-finger pinch or rotation centered on the cursor.
    pub(crate) fn process_gesture(&mut self, window_id: u64, pinch: f32, rotate: f32) -> EventRecord {
        let (x, y) = self.cursor.unwrap_or((0, 0));
        EventRecord::Gesture(GestureRecord {
            window_id,
            x: x as f32,
            y: y as f32,
            rotate,
            pinch,
            num_fingers: 2,
        })
    }
}

//--- Record Helpers ------------------------------------------------------

fn window_record(window_id: u64, event: WindowEventId, data1: i32, data2: i32) -> EventRecord {
    EventRecord::Window(WindowRecord { window_id, event, data1, data2 })
}

/// Text record for printable input; control characters are skipped.
fn text_record(window_id: u64, text: &str) -> Option<EventRecord> {
    if text.is_empty() || text.chars().any(char::is_control) {
        return None;
    }
    Some(EventRecord::TextInput(TextRecord {
        window_id,
        text: text.to_owned(),
    }))
}

fn notch(delta: f64) -> i32 {
    if delta > 0.0 {
        1
    } else if delta < 0.0 {
        -1
    } else {
        0
    }
}

fn clamp_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to USB HID scancodes.
///
/// Maps letters, digits, punctuation, F1-F12, navigation and modifier
/// keys. Everything else (F13-F24, numpad, media keys) becomes
/// `Scancode::UNKNOWN`.
impl From<WinitKeyCode> for Scancode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Letters ------------------------------------------------------

            KeyA => Scancode::A,
            KeyB => Scancode::B,
            KeyC => Scancode::C,
            KeyD => Scancode::D,
            KeyE => Scancode::E,
            KeyF => Scancode::F,
            KeyG => Scancode::G,
            KeyH => Scancode::H,
            KeyI => Scancode::I,
            KeyJ => Scancode::J,
            KeyK => Scancode::K,
            KeyL => Scancode::L,
            KeyM => Scancode::M,
            KeyN => Scancode::N,
            KeyO => Scancode::O,
            KeyP => Scancode::P,
            KeyQ => Scancode::Q,
            KeyR => Scancode::R,
            KeyS => Scancode::S,
            KeyT => Scancode::T,
            KeyU => Scancode::U,
            KeyV => Scancode::V,
            KeyW => Scancode::W,
            KeyX => Scancode::X,
            KeyY => Scancode::Y,
            KeyZ => Scancode::Z,

            //--- Digits -------------------------------------------------------

            Digit1 => Scancode::NUM_1,
            Digit2 => Scancode::NUM_2,
            Digit3 => Scancode::NUM_3,
            Digit4 => Scancode::NUM_4,
            Digit5 => Scancode::NUM_5,
            Digit6 => Scancode::NUM_6,
            Digit7 => Scancode::NUM_7,
            Digit8 => Scancode::NUM_8,
            Digit9 => Scancode::NUM_9,
            Digit0 => Scancode::NUM_0,

            //--- Editing ------------------------------------------------------

            Enter => Scancode::RETURN,
            Escape => Scancode::ESCAPE,
            Backspace => Scancode::BACKSPACE,
            Tab => Scancode::TAB,
            Space => Scancode::SPACE,

            //--- Punctuation --------------------------------------------------

            Minus => Scancode::MINUS,
            Equal => Scancode::EQUALS,
            BracketLeft => Scancode::LEFT_BRACKET,
            BracketRight => Scancode::RIGHT_BRACKET,
            Backslash => Scancode::BACKSLASH,
            Semicolon => Scancode::SEMICOLON,
            Quote => Scancode::APOSTROPHE,
            Backquote => Scancode::GRAVE,
            Comma => Scancode::COMMA,
            Period => Scancode::PERIOD,
            Slash => Scancode::SLASH,
            CapsLock => Scancode::CAPS_LOCK,

            //--- Function Keys ------------------------------------------------

            F1 => Scancode::F1,
            F2 => Scancode::F2,
            F3 => Scancode::F3,
            F4 => Scancode::F4,
            F5 => Scancode::F5,
            F6 => Scancode::F6,
            F7 => Scancode::F7,
            F8 => Scancode::F8,
            F9 => Scancode::F9,
            F10 => Scancode::F10,
            F11 => Scancode::F11,
            F12 => Scancode::F12,

            //--- Navigation ---------------------------------------------------

            Insert => Scancode::INSERT,
            Home => Scancode::HOME,
            PageUp => Scancode::PAGE_UP,
            Delete => Scancode::DELETE,
            End => Scancode::END,
            PageDown => Scancode::PAGE_DOWN,
            ArrowRight => Scancode::RIGHT,
            ArrowLeft => Scancode::LEFT,
            ArrowDown => Scancode::DOWN,
            ArrowUp => Scancode::UP,

            //--- Modifiers ----------------------------------------------------

            ControlLeft => Scancode::LEFT_CTRL,
            ShiftLeft => Scancode::LEFT_SHIFT,
            AltLeft => Scancode::LEFT_ALT,
            SuperLeft => Scancode::LEFT_GUI,
            ControlRight => Scancode::RIGHT_CTRL,
            ShiftRight => Scancode::RIGHT_SHIFT,
            AltRight => Scancode::RIGHT_ALT,
            SuperRight => Scancode::RIGHT_GUI,

            _ => Scancode::UNKNOWN,
        }
    }
}

/// Converts Winit mouse buttons; `Other(_)` has no id and maps to `None`.
pub(crate) fn mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::LEFT),
        WinitMouseButton::Middle => Some(MouseButton::MIDDLE),
        WinitMouseButton::Right => Some(MouseButton::RIGHT),
        WinitMouseButton::Back => Some(MouseButton::X1),
        WinitMouseButton::Forward => Some(MouseButton::X2),
        WinitMouseButton::Other(_) => None,
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, Ime};

    fn processor() -> (InputProcessor, SharedSnapshot) {
        let snapshot = SharedSnapshot::new();
        (InputProcessor::new(snapshot.clone()), snapshot)
    }

    fn dispatch(processor: &mut InputProcessor, event: WindowEvent) -> Vec<EventRecord> {
        dispatch_shaped(processor, event, None)
    }

    fn dispatch_shaped(
        processor: &mut InputProcessor,
        event: WindowEvent,
        shape: Option<WindowShape>,
    ) -> Vec<EventRecord> {
        let mut out = Vec::new();
        processor.process_window_event(1, &event, shape, &mut out);
        out
    }

    fn device() -> DeviceId {
        // SAFETY: only used as an opaque id in events built by tests.
        unsafe { DeviceId::dummy() }
    }

    fn resized(width: u32, height: u32) -> WindowEvent {
        WindowEvent::Resized(PhysicalSize::new(width, height))
    }

    fn clicks(record: &EventRecord) -> u8 {
        match record {
            EventRecord::MouseButtonDown(r) | EventRecord::MouseButtonUp(r) => r.clicks,
            other => panic!("Expected button record, got {:?}", other),
        }
    }

    //=====================================================================
    // Window Events
    //=====================================================================

    #[test]
    fn close_request_reports_closed_then_quit() {
        let (mut processor, _) = processor();
        assert_eq!(
            dispatch(&mut processor, WindowEvent::CloseRequested),
            vec![window_record(1, WindowEventId::CLOSED, 0, 0), EventRecord::Quit]
        );
    }

    #[test]
    fn resize_and_move_carry_coordinates() {
        let (mut processor, _) = processor();
        assert_eq!(
            dispatch(&mut processor, resized(800, 600)),
            vec![window_record(1, WindowEventId::RESIZED, 800, 600)]
        );
        assert_eq!(
            dispatch(&mut processor, WindowEvent::Moved(PhysicalPosition::new(10, -20))),
            vec![window_record(1, WindowEventId::MOVED, 10, -20)]
        );
    }

    #[test]
    fn occlusion_maps_to_hidden_and_shown() {
        let (mut processor, _) = processor();
        assert_eq!(
            dispatch(&mut processor, WindowEvent::Occluded(true)),
            vec![window_record(1, WindowEventId::HIDDEN, 0, 0)]
        );
        assert_eq!(
            dispatch(&mut processor, WindowEvent::Occluded(false)),
            vec![window_record(1, WindowEventId::SHOWN, 0, 0)]
        );
    }

    #[test]
    fn cursor_enter_and_leave() {
        let (mut processor, _) = processor();
        assert_eq!(
            dispatch(&mut processor, WindowEvent::CursorEntered { device_id: device() }),
            vec![window_record(1, WindowEventId::MOUSE_ENTER, 0, 0)]
        );
        assert_eq!(
            dispatch(&mut processor, WindowEvent::CursorLeft { device_id: device() }),
            vec![window_record(1, WindowEventId::MOUSE_LEAVE, 0, 0)]
        );
    }

    #[test]
    fn focus_loss_event_releases_snapshot() {
        let (mut processor, snapshot) = processor();
        snapshot.press_key(Scancode::A);

        assert_eq!(
            dispatch(&mut processor, WindowEvent::Focused(false)),
            vec![window_record(1, WindowEventId::KEYBOARD_LEAVE, 0, 0)]
        );
        assert!(!snapshot.key_down(Scancode::A));
    }

    #[test]
    fn cursor_and_button_events_share_position() {
        let (mut processor, snapshot) = processor();

        let moved = WindowEvent::CursorMoved { device_id: device(), position: PhysicalPosition::new(12.7, 3.2) };
        assert_eq!(
            dispatch(&mut processor, moved),
            vec![EventRecord::MouseMotion(MotionRecord { window_id: 1, x: 12, y: 3, dx: 0, dy: 0 })]
        );

        let press = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };
        assert_eq!(
            dispatch(&mut processor, press),
            vec![EventRecord::MouseButtonDown(ButtonRecord {
                window_id: 1,
                button: MouseButton::LEFT,
                clicks: 1,
                x: 12,
                y: 3,
            })]
        );
        assert_eq!(snapshot.mouse_buttons(), MouseButton::LEFT.mask());

        let other = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Other(7),
        };
        assert!(dispatch(&mut processor, other).is_empty());
    }

    #[test]
    fn wheel_line_and_pixel_deltas() {
        let (mut processor, _) = processor();

        let lines = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::LineDelta(0.0, -2.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            dispatch(&mut processor, lines),
            vec![EventRecord::MouseWheel(WheelRecord { window_id: 1, x: 0, y: -1 })]
        );

        let pixels = WindowEvent::MouseWheel {
            device_id: device(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(15.0, 0.0)),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            dispatch(&mut processor, pixels),
            vec![EventRecord::MouseWheel(WheelRecord { window_id: 1, x: 1, y: 0 })]
        );
    }

    #[test]
    fn rotation_gesture_is_reported_in_radians() {
        let (mut processor, _) = processor();

        let rotation = WindowEvent::RotationGesture { device_id: device(), delta: 90.0, phase: TouchPhase::Moved };
        match dispatch(&mut processor, rotation).as_slice() {
            [EventRecord::Gesture(r)] => {
                assert!((r.rotate - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
                assert_eq!(r.pinch, 0.0);
            }
            other => panic!("Expected one gesture, got {:?}", other),
        }

        let pinch = WindowEvent::PinchGesture { device_id: device(), delta: 0.5, phase: TouchPhase::Moved };
        match dispatch(&mut processor, pinch).as_slice() {
            [EventRecord::Gesture(r)] => {
                assert_eq!(r.pinch, 0.5);
                assert_eq!(r.rotate, 0.0);
            }
            other => panic!("Expected one gesture, got {:?}", other),
        }
    }

    #[test]
    fn ime_commit_produces_no_text() {
        let (mut processor, _) = processor();
        let commit = WindowEvent::Ime(Ime::Commit("é".to_owned()));
        assert!(dispatch(&mut processor, commit).is_empty());
    }

    //=====================================================================
    // Window State
    //=====================================================================

    #[test]
    fn maximize_then_restore() {
        let (mut processor, _) = processor();

        assert_eq!(
            dispatch_shaped(&mut processor, resized(1920, 1080), Some(WindowShape::Maximized)),
            vec![
                window_record(1, WindowEventId::RESIZED, 1920, 1080),
                window_record(1, WindowEventId::MAXIMIZED, 0, 0),
            ]
        );
        assert_eq!(
            dispatch_shaped(&mut processor, resized(640, 480), Some(WindowShape::Normal)),
            vec![
                window_record(1, WindowEventId::RESIZED, 640, 480),
                window_record(1, WindowEventId::RESTORED, 0, 0),
            ]
        );
        assert_eq!(
            dispatch_shaped(&mut processor, resized(700, 480), Some(WindowShape::Normal)),
            vec![window_record(1, WindowEventId::RESIZED, 700, 480)]
        );
    }

    #[test]
    fn minimize_to_zero_size_skips_resized() {
        let (mut processor, _) = processor();

        assert_eq!(
            dispatch_shaped(&mut processor, resized(0, 0), Some(WindowShape::Minimized)),
            vec![window_record(1, WindowEventId::MINIMIZED, 0, 0)]
        );
        assert_eq!(
            dispatch_shaped(&mut processor, resized(640, 480), Some(WindowShape::Maximized)),
            vec![
                window_record(1, WindowEventId::RESIZED, 640, 480),
                window_record(1, WindowEventId::MAXIMIZED, 0, 0),
            ]
        );
    }

    #[test]
    fn unknown_window_resizes_as_normal() {
        let (mut processor, _) = processor();
        assert_eq!(
            dispatch(&mut processor, resized(320, 200)),
            vec![window_record(1, WindowEventId::RESIZED, 320, 200)]
        );
    }

    #[test]
    fn window_shapes_are_tracked_per_window() {
        let (mut processor, _) = processor();
        let mut out = Vec::new();

        processor.process_resized(1, 800, 600, WindowShape::Maximized, &mut out);
        out.clear();
        processor.process_resized(2, 800, 600, WindowShape::Normal, &mut out);
        assert_eq!(out, vec![window_record(2, WindowEventId::RESIZED, 800, 600)]);

        dispatch(&mut processor, WindowEvent::Destroyed);
        assert!(!processor.shapes.contains_key(&1));
        assert!(processor.shapes.contains_key(&2));
    }

    //=====================================================================
    // Keyboard
    //=====================================================================

    #[test]
    fn key_press_updates_snapshot() {
        let (mut processor, snapshot) = processor();
        let mut out = Vec::new();

        processor.process_key(7, Scancode::W, ElementState::Pressed, false, None, &mut out);
        assert!(snapshot.key_down(Scancode::W));
        assert_eq!(
            out,
            vec![EventRecord::KeyDown(KeyRecord { window_id: 7, scancode: Scancode::W, repeat: false })]
        );

        out.clear();
        processor.process_key(7, Scancode::W, ElementState::Released, false, None, &mut out);
        assert!(!snapshot.key_down(Scancode::W));
        assert!(matches!(out[0], EventRecord::KeyUp(_)));
    }

    #[test]
    fn printable_press_adds_text_record() {
        let (mut processor, _) = processor();
        let mut out = Vec::new();

        processor.process_key(1, Scancode::A, ElementState::Pressed, false, Some("a"), &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(
            out[1],
            EventRecord::TextInput(TextRecord { window_id: 1, text: "a".to_owned() })
        );
    }

    #[test]
    fn control_text_is_not_reported() {
        let (mut processor, _) = processor();
        let mut out = Vec::new();

        processor.process_key(1, Scancode::RETURN, ElementState::Pressed, false, Some("\r"), &mut out);
        processor.process_key(1, Scancode::A, ElementState::Released, false, Some("a"), &mut out);

        assert!(out.iter().all(|r| !matches!(r, EventRecord::TextInput(_))));
    }

    #[test]
    fn unknown_key_is_filtered() {
        let (mut processor, _) = processor();
        let mut out = Vec::new();

        processor.process_key(1, Scancode::UNKNOWN, ElementState::Pressed, false, None, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn focus_loss_releases_everything() {
        let (mut processor, snapshot) = processor();
        let mut out = Vec::new();
        processor.process_key(1, Scancode::SPACE, ElementState::Pressed, false, None, &mut out);
        processor.process_mouse_button(1, MouseButton::LEFT, ElementState::Pressed, Instant::now());

        let record = processor.process_focus(1, false);

        assert!(!snapshot.key_down(Scancode::SPACE));
        assert_eq!(snapshot.mouse_buttons(), 0);
        match record {
            EventRecord::Window(r) => assert_eq!(r.event, WindowEventId::KEYBOARD_LEAVE),
            other => panic!("Expected window record, got {:?}", other),
        }
    }

    #[test]
    fn focus_gain_keeps_state() {
        let (mut processor, snapshot) = processor();
        snapshot.press_key(Scancode::UP);

        let record = processor.process_focus(3, true);

        assert!(snapshot.key_down(Scancode::UP));
        assert_eq!(record, window_record(3, WindowEventId::KEYBOARD_ENTER, 0, 0));
    }

    //=====================================================================
    // Mouse
    //=====================================================================

    #[test]
    fn cursor_motion_reports_deltas() {
        let (mut processor, snapshot) = processor();

        let first = processor.process_cursor_moved(1, 100, 50);
        let second = processor.process_cursor_moved(1, 110, 45);

        assert_eq!(
            first,
            EventRecord::MouseMotion(MotionRecord { window_id: 1, x: 100, y: 50, dx: 0, dy: 0 })
        );
        assert_eq!(
            second,
            EventRecord::MouseMotion(MotionRecord { window_id: 1, x: 110, y: 45, dx: 10, dy: -5 })
        );
        assert_eq!(snapshot.mouse_position(), (110, 45));
    }

    #[test]
    fn button_uses_cursor_position() {
        let (mut processor, snapshot) = processor();
        processor.process_cursor_moved(1, 30, 40);

        let record = processor.process_mouse_button(1, MouseButton::RIGHT, ElementState::Pressed, Instant::now());

        assert_eq!(
            record,
            EventRecord::MouseButtonDown(ButtonRecord {
                window_id: 1,
                button: MouseButton::RIGHT,
                clicks: 1,
                x: 30,
                y: 40,
            })
        );
        assert_eq!(snapshot.mouse_buttons(), MouseButton::RIGHT.mask());
    }

    #[test]
    fn quick_second_press_is_double_click() {
        let (mut processor, _) = processor();
        let t0 = Instant::now();
        let left = MouseButton::LEFT;

        processor.process_mouse_button(1, left, ElementState::Pressed, t0);
        processor.process_mouse_button(1, left, ElementState::Released, t0);
        let down = processor.process_mouse_button(1, left, ElementState::Pressed, t0 + Duration::from_millis(200));
        let up = processor.process_mouse_button(1, left, ElementState::Released, t0 + Duration::from_millis(250));

        assert_eq!(clicks(&down), 2);
        assert_eq!(clicks(&up), 2);
    }

    #[test]
    fn slow_second_press_starts_over() {
        let (mut processor, _) = processor();
        let t0 = Instant::now();

        processor.process_mouse_button(1, MouseButton::LEFT, ElementState::Pressed, t0);
        let down = processor.process_mouse_button(1, MouseButton::LEFT, ElementState::Pressed, t0 + Duration::from_millis(600));

        assert_eq!(clicks(&down), 1);
    }

    #[test]
    fn distant_or_different_press_starts_over() {
        let (mut processor, _) = processor();
        let t0 = Instant::now();

        processor.process_mouse_button(1, MouseButton::LEFT, ElementState::Pressed, t0);
        let other = processor.process_mouse_button(1, MouseButton::RIGHT, ElementState::Pressed, t0);
        assert_eq!(clicks(&other), 1);

        processor.process_cursor_moved(1, 10, 0);
        let moved = processor.process_mouse_button(1, MouseButton::RIGHT, ElementState::Pressed, t0);
        assert_eq!(clicks(&moved), 1);
    }

    #[test]
    fn wheel_is_reduced_to_notches() {
        let (mut processor, _) = processor();
        assert_eq!(
            processor.process_wheel(1, 0.0, 3.5),
            EventRecord::MouseWheel(WheelRecord { window_id: 1, x: 0, y: 1 })
        );
        assert_eq!(
            processor.process_wheel(1, -0.2, -12.0),
            EventRecord::MouseWheel(WheelRecord { window_id: 1, x: -1, y: -1 })
        );
    }

    //=====================================================================
    // Touch & Gestures
    //=====================================================================

    #[test]
    fn finger_deltas_track_each_id() {
        let (mut processor, _) = processor();

        let down = processor.process_touch(1, 9, TouchPhase::Started, 10.0, 10.0, 1.0);
        processor.process_touch(1, 4, TouchPhase::Started, 200.0, 200.0, 1.0);
        let moved = processor.process_touch(1, 9, TouchPhase::Moved, 15.0, 8.0, 0.5);
        let up = processor.process_touch(1, 9, TouchPhase::Ended, 15.0, 8.0, 0.0);

        assert!(matches!(down, EventRecord::FingerDown(FingerRecord { dx, dy, .. }) if dx == 0.0 && dy == 0.0));
        match moved {
            EventRecord::FingerMotion(r) => {
                assert_eq!((r.dx, r.dy), (5.0, -2.0));
                assert_eq!(r.pressure, 0.5);
            }
            other => panic!("Expected finger motion, got {:?}", other),
        }
        assert!(matches!(up, EventRecord::FingerUp(FingerRecord { finger_id: 9, .. })));
        assert!(!processor.fingers.contains_key(&9));
        assert!(processor.fingers.contains_key(&4));
    }

    #[test]
    fn gesture_centers_on_cursor() {
        let (mut processor, _) = processor();
        processor.process_cursor_moved(1, 64, 32);

        match processor.process_gesture(1, 0.25, 0.0) {
            EventRecord::Gesture(r) => {
                assert_eq!((r.x, r.y), (64.0, 32.0));
                assert_eq!(r.pinch, 0.25);
                assert_eq!(r.num_fingers, 2);
            }
            other => panic!("Expected gesture, got {:?}", other),
        }
    }

    //=====================================================================
    // Conversions
    //=====================================================================

    #[test]
    fn scancode_conversion_letters_and_digits() {
        assert_eq!(Scancode::from(WinitKeyCode::KeyA), Scancode::A);
        assert_eq!(Scancode::from(WinitKeyCode::KeyZ), Scancode::Z);
        assert_eq!(Scancode::from(WinitKeyCode::Digit0), Scancode::NUM_0);
        assert_eq!(Scancode::from(WinitKeyCode::Digit1), Scancode::NUM_1);
    }

    #[test]
    fn scancode_conversion_special() {
        assert_eq!(Scancode::from(WinitKeyCode::Space), Scancode::SPACE);
        assert_eq!(Scancode::from(WinitKeyCode::Enter), Scancode::RETURN);
        assert_eq!(Scancode::from(WinitKeyCode::ArrowUp), Scancode::UP);
        assert_eq!(Scancode::from(WinitKeyCode::ShiftRight), Scancode::RIGHT_SHIFT);
    }

    #[test]
    fn scancode_conversion_unmapped() {
        assert_eq!(Scancode::from(WinitKeyCode::F13), Scancode::UNKNOWN);
    }

    #[test]
    fn mouse_button_conversion() {
        assert_eq!(mouse_button(WinitMouseButton::Left), Some(MouseButton::LEFT));
        assert_eq!(mouse_button(WinitMouseButton::Middle), Some(MouseButton::MIDDLE));
        assert_eq!(mouse_button(WinitMouseButton::Right), Some(MouseButton::RIGHT));
        assert_eq!(mouse_button(WinitMouseButton::Back), Some(MouseButton::X1));
        assert_eq!(mouse_button(WinitMouseButton::Forward), Some(MouseButton::X2));
        assert_eq!(mouse_button(WinitMouseButton::Other(9)), None);
    }
}
