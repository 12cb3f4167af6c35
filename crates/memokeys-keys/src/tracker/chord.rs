use memokeys_common::DisplayMode;
use tracing::trace;

use crate::keymap::Modifier;

use super::key::{KeyId, KeyInput};
use super::pressed::PressedKeySet;

/// Receives display updates from a [`ChordTracker`].
pub trait ChordSink {
    /// Called after every press and release with the labels to show.
    /// The slice is empty when nothing displayable is held.
    fn keys_changed(&mut self, labels: &[String]);

    /// Called once when a held set first forms a modifier chord such as
    /// `Cmd+Shift+P`.
    fn combination_ready(&mut self, _chord: &str) {}
}

impl<F> ChordSink for F
where
    F: FnMut(&[String]),
{
    fn keys_changed(&mut self, labels: &[String]) {
        self(labels)
    }
}

/// Tracks held keys and turns them into display labels.
#[derive(Debug, Clone, Default)]
pub struct ChordTracker {
    pressed: PressedKeySet,
    display_mode: DisplayMode,
    last_chord: Option<String>,
}

impl ChordTracker {
    pub fn new(display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            ..Self::default()
        }
    }

    pub fn on_press(&mut self, key: &KeyInput, sink: &mut dyn ChordSink) {
        let id = KeyId::resolve(key);
        if self.pressed.insert(id.clone()) {
            trace!(?id, "key down");
        }
        sink.keys_changed(&self.labels());

        if let Some(chord) = self.chord() {
            if self.last_chord.as_deref() != Some(chord.as_str()) {
                sink.combination_ready(&chord);
                self.last_chord = Some(chord);
            }
        }
    }

    pub fn on_release(&mut self, key: &KeyInput, sink: &mut dyn ChordSink) {
        let id = KeyId::resolve(key);
        if self.pressed.remove(&id) {
            trace!(?id, "key up");
            self.last_chord = None;
        }
        sink.keys_changed(&self.labels());
    }

    /// Forget every held key, e.g. between quiz questions.
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.last_chord = None;
    }

    /// Labels for the held keys after the display filter, in press order.
    pub fn labels(&self) -> Vec<String> {
        let modifier_held = self.pressed.has_modifier();
        self.pressed
            .iter()
            .filter(|k| modifier_held || !k.needs_modifier())
            .map(|k| k.label(self.display_mode))
            .collect()
    }

    /// Labels joined the way the live display shows them (`⌘ + C`).
    pub fn display_text(&self) -> String {
        self.labels().join(" + ")
    }

    /// The held chord spelled out, when at least one modifier and one
    /// other key are down. Modifiers come first in `Cmd, Ctrl, Alt, Shift`
    /// order, then the remaining keys sorted.
    pub fn chord(&self) -> Option<String> {
        if !(self.pressed.has_modifier() && self.pressed.has_non_modifier()) {
            return None;
        }
        let mut parts: Vec<String> = Modifier::CHORD_ORDER
            .iter()
            .filter(|m| self.pressed.contains(&KeyId::Modifier(**m)))
            .map(|m| m.chord_name().to_string())
            .collect();
        let mut keys: Vec<String> = self
            .pressed
            .iter()
            .filter(|k| !k.is_modifier())
            .map(KeyId::chord_name)
            .collect();
        keys.sort();
        parts.extend(keys);
        Some(parts.join("+"))
    }

    pub fn pressed(&self) -> &PressedKeySet {
        &self.pressed
    }

    pub fn pressed_len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Switch label style. Held keys re-render on the next event.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.display_mode = mode;
    }
}
