use std::collections::VecDeque;

use crate::{
    clipboard::Clipboard,
    error::{Error, Result},
    password_generator::RandomIndex,
};

/// Hands out a fixed list of indexes, wrapping them into the requested range.
pub struct Sequence {
    indexes: VecDeque<usize>,
}

impl Sequence {
    pub fn new(indexes: &[usize]) -> Sequence {
        Sequence {
            indexes: indexes.iter().copied().collect(),
        }
    }
}

impl RandomIndex for Sequence {
    fn next_index(&mut self, upper: usize) -> usize {
        let next = self.indexes.pop_front().unwrap_or(0);
        self.indexes.push_back(next);
        next % upper
    }
}

/// A clipboard that remembers everything written to it.
#[derive(Default)]
pub struct RecordingClipboard {
    pub written: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, value: &str) -> Result<()> {
        self.written.push(value.to_owned());
        Ok(())
    }
}

/// A clipboard that always refuses writes, like a platform without clipboard access.
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&mut self, _value: &str) -> Result<()> {
        Err(Error::Clipboard(arboard::Error::ClipboardOccupied))
    }
}
