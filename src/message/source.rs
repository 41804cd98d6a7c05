//! Message sources polled by the host loop when the row goes idle.

/// Anything that can hand the display its next message.
///
/// Keyboards, serial links and demo rotations live outside this crate; they
/// only need to implement this.
pub trait MessageSource {
    /// The next message to show, or `None` to keep the current text.
    fn next_message(&mut self) -> Option<&[u8]>;
}

/// Cycles through a fixed list of messages forever.
#[derive(Debug, Clone)]
pub struct Playlist<'a> {
    messages: &'a [&'a str],
    next: usize,
}

impl<'a> Playlist<'a> {
    /// Create a playlist starting at the first message.
    pub const fn new(messages: &'a [&'a str]) -> Self {
        Self { messages, next: 0 }
    }

    /// Number of messages in the rotation.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the rotation has no messages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageSource for Playlist<'_> {
    fn next_message(&mut self) -> Option<&[u8]> {
        let message = self.messages.get(self.next)?;
        self.next = (self.next + 1) % self.messages.len();
        Some(message.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_wraps() {
        let mut playlist = Playlist::new(&["HELLO", "WORLD"]);
        assert_eq!(playlist.next_message(), Some(&b"HELLO"[..]));
        assert_eq!(playlist.next_message(), Some(&b"WORLD"[..]));
        assert_eq!(playlist.next_message(), Some(&b"HELLO"[..]));
    }

    #[test]
    fn test_empty_playlist() {
        let mut playlist = Playlist::new(&[]);
        assert!(playlist.is_empty());
        assert_eq!(playlist.next_message(), None);
    }
}
