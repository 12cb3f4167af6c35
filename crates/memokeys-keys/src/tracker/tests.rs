use memokeys_common::DisplayMode;

use super::*;
use crate::keymap::{Modifier, NamedKey};

#[derive(Default)]
struct Recorder {
    updates: Vec<Vec<String>>,
    chords: Vec<String>,
}

impl Recorder {
    fn last(&self) -> Vec<String> {
        self.updates.last().cloned().unwrap_or_default()
    }
}

impl ChordSink for Recorder {
    fn keys_changed(&mut self, labels: &[String]) {
        self.updates.push(labels.to_vec());
    }

    fn combination_ready(&mut self, chord: &str) {
        self.chords.push(chord.to_string());
    }
}

fn press(tracker: &mut ChordTracker, sink: &mut Recorder, key: &str) {
    tracker.on_press(&KeyInput::parse(key), sink);
}

fn release(tracker: &mut ChordTracker, sink: &mut Recorder, key: &str) {
    tracker.on_release(&KeyInput::parse(key), sink);
}

#[test]
fn modifier_alone_is_shown() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "cmd");
    assert_eq!(sink.last(), vec!["⌘"]);
    assert!(sink.chords.is_empty());
}

#[test]
fn bare_letter_is_hidden_but_still_emitted() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "c");
    assert_eq!(sink.updates.len(), 1);
    assert!(sink.last().is_empty());
    assert_eq!(tracker.pressed_len(), 1);
}

#[test]
fn digits_and_named_keys_show_without_modifier() {
    let mut tracker = ChordTracker::new(DisplayMode::Text);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "1");
    press(&mut tracker, &mut sink, "return");
    assert_eq!(sink.last(), vec!["1", "ENTER"]);
}

#[test]
fn cmd_c_shows_both_and_release_clears() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "cmd");
    press(&mut tracker, &mut sink, "c");
    assert_eq!(sink.last(), vec!["⌘", "C"]);
    assert_eq!(tracker.display_text(), "⌘ + C");

    release(&mut tracker, &mut sink, "c");
    assert_eq!(sink.last(), vec!["⌘"]);
    release(&mut tracker, &mut sink, "cmd");
    assert!(sink.last().is_empty());
    assert!(tracker.is_empty());
    assert_eq!(sink.updates.len(), 4);
}

#[test]
fn release_under_alias_purges_key() {
    let mut tracker = ChordTracker::new(DisplayMode::Text);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "control");
    press(&mut tracker, &mut sink, "Shift");
    release(&mut tracker, &mut sink, "ctrl_l");
    assert_eq!(sink.last(), vec!["SHIFT"]);
    release(&mut tracker, &mut sink, "shift_r");
    assert!(tracker.is_empty());

    press(&mut tracker, &mut sink, "Meta");
    release(&mut tracker, &mut sink, "cmd");
    assert!(tracker.is_empty());
}

#[test]
fn shifted_letter_releases_lowercase() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "shift");
    press(&mut tracker, &mut sink, "A");
    release(&mut tracker, &mut sink, "a");
    assert_eq!(sink.last(), vec!["⇧"]);
}

#[test]
fn auto_repeat_does_not_duplicate() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "cmd");
    press(&mut tracker, &mut sink, "cmd");
    press(&mut tracker, &mut sink, "cmd_l");
    assert_eq!(tracker.pressed_len(), 1);
    assert_eq!(sink.updates.len(), 3);
}

#[test]
fn display_mode_switch_rerenders_held_keys() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "cmd");
    press(&mut tracker, &mut sink, "shift");
    assert_eq!(tracker.labels(), vec!["⌘", "⇧"]);

    tracker.set_display_mode(tracker.display_mode().toggled());
    assert_eq!(tracker.display_mode(), DisplayMode::Text);
    assert_eq!(tracker.labels(), vec!["CMD", "SHIFT"]);

    press(&mut tracker, &mut sink, "esc");
    assert_eq!(sink.last(), vec!["CMD", "SHIFT", "ESC"]);
}

#[test]
fn combination_fires_once_per_chord() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "shift");
    press(&mut tracker, &mut sink, "cmd");
    press(&mut tracker, &mut sink, "p");
    press(&mut tracker, &mut sink, "p");
    assert_eq!(sink.chords, vec!["Cmd+Shift+P"]);

    release(&mut tracker, &mut sink, "p");
    press(&mut tracker, &mut sink, "p");
    assert_eq!(sink.chords, vec!["Cmd+Shift+P", "Cmd+Shift+P"]);
}

#[test]
fn chord_sorts_non_modifiers() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "alt");
    press(&mut tracker, &mut sink, "ctrl");
    press(&mut tracker, &mut sink, "z");
    press(&mut tracker, &mut sink, "delete");
    assert_eq!(
        tracker.chord().as_deref(),
        Some("Ctrl+Alt+DELETE+Z")
    );
    assert_eq!(sink.chords, vec!["Ctrl+Alt+Z", "Ctrl+Alt+DELETE+Z"]);
}

#[test]
fn unknown_key_degrades_to_literal() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "media_play_pause");
    assert_eq!(sink.last(), vec!["MEDIA_PLAY_PAUSE"]);
    release(&mut tracker, &mut sink, "Media_Play_Pause");
    assert!(tracker.is_empty());
}

#[test]
fn browser_key_names_resolve() {
    assert_eq!(
        KeyId::resolve(&KeyInput::parse("Control")),
        KeyId::Modifier(Modifier::Ctrl)
    );
    assert_eq!(
        KeyId::resolve(&KeyInput::parse("ArrowUp")),
        KeyId::Named(NamedKey::Up)
    );
    assert_eq!(
        KeyId::resolve(&KeyInput::parse(" ")),
        KeyId::Named(NamedKey::Space)
    );
    assert_eq!(
        KeyId::resolve(&KeyInput::parse("caps_lock")),
        KeyId::Named(NamedKey::CapsLock)
    );
    assert_eq!(
        KeyId::resolve(&KeyInput::Named("a".into())),
        KeyId::Char('a')
    );
}

#[test]
fn function_keys_label_the_same_in_both_modes() {
    let f5 = KeyId::resolve(&KeyInput::parse("f5"));
    assert_eq!(f5.label(DisplayMode::Icons), "F5");
    assert_eq!(f5.label(DisplayMode::Text), "F5");
}

#[test]
fn reset_clears_everything() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "cmd");
    press(&mut tracker, &mut sink, "c");
    tracker.reset();
    assert!(tracker.is_empty());
    assert!(tracker.labels().is_empty());
    assert!(tracker.chord().is_none());

    press(&mut tracker, &mut sink, "cmd");
    press(&mut tracker, &mut sink, "c");
    assert_eq!(sink.chords, vec!["Cmd+C", "Cmd+C"]);
}

#[test]
fn closures_work_as_sinks() {
    let mut tracker = ChordTracker::new(DisplayMode::Text);
    let mut seen: Vec<String> = Vec::new();
    let mut sink = |labels: &[String]| seen = labels.to_vec();
    tracker.on_press(&KeyInput::parse("ctrl"), &mut sink);
    tracker.on_press(&KeyInput::Char('v'), &mut sink);
    assert_eq!(seen, vec!["CTRL", "V"]);
}

#[test]
fn stray_release_does_not_rearm_chord() {
    let mut tracker = ChordTracker::new(DisplayMode::Icons);
    let mut sink = Recorder::default();
    press(&mut tracker, &mut sink, "cmd");
    press(&mut tracker, &mut sink, "c");
    release(&mut tracker, &mut sink, "shift");
    press(&mut tracker, &mut sink, "c");
    assert_eq!(sink.chords, vec!["Cmd+C"]);
    assert_eq!(sink.updates.len(), 4);
}
