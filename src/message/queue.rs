//! Bounded pending-message queue.

use heapless::Deque;

use crate::error::{Error, MessageError, Result};

/// Characters waiting for the next rolling cycle, one per unit.
///
/// Capacity equals the row width, so anything past the last unit is dropped
/// at ingestion rather than lingering for a later cycle.
#[derive(Debug, Clone)]
pub struct MessageQueue<const N: usize> {
    chars: Deque<u8, N>,
}

impl<const N: usize> Default for MessageQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MessageQueue<N> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            chars: Deque::new(),
        }
    }

    /// Maximum characters held (the row width).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Characters currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether no message is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether one character per unit is already queued.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.chars.is_full()
    }

    /// Drop everything queued.
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Append one character.
    ///
    /// # Errors
    ///
    /// Returns `MessageError::Full` once every unit has a character.
    pub fn push(&mut self, ch: u8) -> Result<()> {
        self.chars
            .push_back(ch)
            .map_err(|_| Error::Message(MessageError::Full))
    }

    /// Take the character for the next unit.
    pub fn pop(&mut self) -> Option<u8> {
        self.chars.pop_front()
    }

    /// Queue a whole message, truncating it to the row width.
    ///
    /// Returns how many characters were accepted.
    ///
    /// # Errors
    ///
    /// Returns `MessageError::Pending` if the previous message has not been
    /// consumed yet; the queue is left untouched.
    pub fn load<T: AsRef<[u8]>>(&mut self, text: T) -> Result<usize> {
        if !self.is_empty() {
            return Err(Error::Message(MessageError::Pending));
        }

        let text = text.as_ref();
        let accepted = text.len().min(N);
        for &ch in &text[..accepted] {
            // Cannot fail: accepted <= N and the queue was empty
            let _ = self.chars.push_back(ch);
        }

        #[cfg(feature = "defmt")]
        if accepted < text.len() {
            defmt::warn!(
                "message truncated to {} of {} characters",
                accepted,
                text.len()
            );
        }

        Ok(accepted)
    }

    /// Iterate over queued characters, front first.
    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.chars.iter()
    }
}
