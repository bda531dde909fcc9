//! Input reader: dedicated thread polling terminal events.
//!
//! The reader owns no editor state; it polls crossterm with a short timeout
//! and forwards key-press and resize events over a bounded channel. The main
//! loop receives with a timeout of its own, which is what lets it redraw
//! periodically (message expiry) without any concurrent mutation.

use super::keys::{InputEvent, KeyCode, KeyModifiers};
use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Capacity of the event channel; a full channel just delays the reader.
const CHANNEL_CAPACITY: usize = 64;

/// Handle to the input thread.
pub struct InputReader {
    /// Join handle for the reader thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiving side of the event channel.
    events: Receiver<InputEvent>,
}

impl InputReader {
    /// Spawn the input thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for a terminal event
    /// before re-checking the shutdown flag.
    ///
    /// # Panics
    ///
    /// Panics if the OS refuses to spawn the thread, which is a fatal
    /// startup condition.
    pub fn spawn(poll_timeout: Duration) -> Self {
        let (sender, events) = bounded::<InputEvent>(CHANNEL_CAPACITY);
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("quill-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
            events,
        }
    }

    /// Wait up to `timeout` for the next event.
    ///
    /// Returns `None` on timeout; the caller redraws and calls again. A
    /// disconnected channel is reported as [`InputEvent::Shutdown`] so the
    /// main loop terminates instead of spinning.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<InputEvent> {
        match self.events.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(e) if e.is_timeout() => None,
            Err(_) => Some(InputEvent::Shutdown),
        }
    }

    /// Signal the input thread to shut down.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Signal shutdown and wait for the thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(input_event) = Self::convert_event(event) {
                            if sender.send(input_event).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown)
                }
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }

    /// Convert a crossterm event to our `InputEvent`.
    fn convert_event(event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (not release or repeat)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }

                let code = Self::convert_key_code(key_event.code)?;
                let modifiers = Self::convert_modifiers(key_event.modifiers);

                Some(InputEvent::Key { code, modifiers })
            }

            Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),

            // Mouse, focus, and paste events are outside the editor's key
            // contract.
            _ => None,
        }
    }

    /// Convert crossterm `KeyCode` to our `KeyCode`.
    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::Backspace => KeyCode::Backspace,
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Left => KeyCode::Left,
            event::KeyCode::Right => KeyCode::Right,
            event::KeyCode::Up => KeyCode::Up,
            event::KeyCode::Down => KeyCode::Down,
            event::KeyCode::Home => KeyCode::Home,
            event::KeyCode::End => KeyCode::End,
            event::KeyCode::PageUp => KeyCode::PageUp,
            event::KeyCode::PageDown => KeyCode::PageDown,
            event::KeyCode::Tab => KeyCode::Tab,
            event::KeyCode::Delete => KeyCode::Delete,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => return None, // Ignore other key codes
        })
    }

    /// Convert crossterm `KeyModifiers` to our `KeyModifiers`.
    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
            super_key: mods.contains(event::KeyModifiers::SUPER),
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.shutdown();
    }
}
