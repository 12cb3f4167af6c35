//! Live key display: which keys are held and how to show them.
//!
//! A keyboard hook feeds [`ChordTracker::on_press`] and
//! [`ChordTracker::on_release`]; the tracker reports filtered labels to a
//! [`ChordSink`] after every event.

mod chord;
mod key;
mod pressed;

pub use chord::{ChordSink, ChordTracker};
pub use key::{KeyId, KeyInput};
pub use pressed::PressedKeySet;

#[cfg(test)]
mod tests;
