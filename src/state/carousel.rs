/// Looping slide position for the landing page carousel
use std::time::Duration;

/// Default autoplay delay between slides
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a page dot. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}
