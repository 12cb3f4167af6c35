//! Live key display driven by a text script of key events.

use std::io::{BufRead, Write};

use memokeys_common::{DisplayMode, Platform, Result};
use memokeys_keys::{ChordSink, ChordTracker, KeyInput, ShortcutTable};
use tracing::warn;

use super::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastEvent {
    Down(KeyInput),
    Up(KeyInput),
    /// Switch between icon and text labels.
    Toggle,
    Reset,
}

/// Parse one script line: `down <key>`, `up <key>`, `toggle` or `reset`.
/// `down  ` (verb plus a single space) presses the space bar.
pub fn parse_line(line: &str) -> Option<CastEvent> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    match line.trim() {
        "toggle" => return Some(CastEvent::Toggle),
        "reset" => return Some(CastEvent::Reset),
        _ => {}
    }
    let (verb, key) = line.trim_start().split_once(' ')?;
    let key = match key.trim() {
        "" => " ",
        trimmed => trimmed,
    };
    match verb {
        "down" => Some(CastEvent::Down(KeyInput::parse(key))),
        "up" => Some(CastEvent::Up(KeyInput::parse(key))),
        _ => None,
    }
}

/// Collects display lines for one event.
struct CastSink<'a> {
    table: &'a ShortcutTable,
    lines: Vec<String>,
}

impl ChordSink for CastSink<'_> {
    fn keys_changed(&mut self, labels: &[String]) {
        if labels.is_empty() {
            self.lines.push("keys: -".into());
        } else {
            self.lines.push(format!("keys: {}", labels.join(" + ")));
        }
    }

    fn combination_ready(&mut self, chord: &str) {
        let action = self.table.lookup(chord).unwrap_or("no shortcut found");
        self.lines.push(format!("{chord}: {action}"));
    }
}

pub fn run(
    ctx: &Context,
    mode: Option<&str>,
    platform: Platform,
    display: DisplayMode,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let table = ctx.table(mode, platform)?;
    let mut tracker = ChordTracker::new(display);
    let mut sink = CastSink {
        table: &table,
        lines: Vec::new(),
    };

    let mut line = String::new();
    let mut number = 0usize;
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        number += 1;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        match parse_line(&line) {
            Some(CastEvent::Down(key)) => tracker.on_press(&key, &mut sink),
            Some(CastEvent::Up(key)) => tracker.on_release(&key, &mut sink),
            Some(CastEvent::Toggle) => {
                tracker.set_display_mode(tracker.display_mode().toggled());
                sink.keys_changed(&tracker.labels());
            }
            Some(CastEvent::Reset) => {
                tracker.reset();
                sink.keys_changed(&[]);
            }
            None => warn!("line {number}: cannot parse '{}'", line.trim()),
        }

        for text in sink.lines.drain(..) {
            writeln!(out, "{text}")?;
        }
    }
    Ok(())
}
