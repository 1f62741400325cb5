//! Leptos Keyboard Navigation
//!
//! Keyboard commands for modal-style views (lightboxes, overlays).
//! Listeners are bound to the current reactive owner and removed when that
//! owner is cleaned up, so nothing leaks across page changes.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Commands a modal view reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Escape
    Dismiss,
    /// Left arrow
    Previous,
    /// Right arrow
    Next,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value. Older browsers report "Esc"/"Left"/"Right".
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Dismiss),
            "ArrowLeft" | "Left" => Some(Self::Previous),
            "ArrowRight" | "Right" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Keys typed into a text control belong to the control
fn from_text_control(ev: &web_sys::KeyboardEvent) -> bool {
    match ev.target() {
        Some(target) => {
            target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        }
        None => false,
    }
}

/// Bind a window keydown listener for the lifetime of the current owner.
///
/// `active` is checked on every key press; commands are only dispatched
/// while it returns true. Read signals untracked inside it.
pub fn bind_key_commands<A, F>(active: A, on_command: F)
where
    A: Fn() -> bool + 'static,
    F: Fn(KeyCommand) + 'static,
{
    let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if !active() || ev.default_prevented() || from_text_control(&ev) {
            return;
        }
        if let Some(command) = KeyCommand::from_key(&ev.key()) {
            ev.prevent_default();
            on_command(command);
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(KeyCommand::from_key("Escape"), Some(KeyCommand::Dismiss));
        assert_eq!(KeyCommand::from_key("ArrowLeft"), Some(KeyCommand::Previous));
        assert_eq!(KeyCommand::from_key("ArrowRight"), Some(KeyCommand::Next));
        assert_eq!(KeyCommand::from_key("Right"), Some(KeyCommand::Next));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(KeyCommand::from_key("Enter"), None);
        assert_eq!(KeyCommand::from_key("ArrowUp"), None);
        assert_eq!(KeyCommand::from_key("escape"), None);
    }
}
