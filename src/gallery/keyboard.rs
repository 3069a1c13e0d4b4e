use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a DOM-style key name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// The page-wide keyboard event target. Views attach a listener while their
/// lightbox is open; the count of live listeners is observable so a leaked
/// registration shows up.
#[derive(Debug, Clone, Default)]
pub struct KeyboardHub {
    active: Arc<AtomicUsize>,
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self) -> KeyboardListener {
        let count = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Keyboard listener attached ({} active)", count);
        KeyboardListener {
            active: Arc::clone(&self.active),
        }
    }

    pub fn active_listeners(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// A registered listener; detaches itself when dropped.
#[derive(Debug)]
pub struct KeyboardListener {
    active: Arc<AtomicUsize>,
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        let count = self.active.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("Keyboard listener detached ({} active)", count);
    }
}
