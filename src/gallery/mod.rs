// Gallery module - lightbox state machine and keyboard wiring
mod keyboard;
mod state;

pub use keyboard::{Key, KeyboardHub, KeyboardListener};
pub use state::{GalleryState, Lightbox, LightboxEvent};

#[cfg(test)]
mod tests;
