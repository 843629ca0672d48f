/// Which page section is in view, moved one step per wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollController {
    index: usize,
    len: usize,
}

impl ScrollController {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Starts at `index`, clamped to the last section.
    pub fn at(index: usize, len: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Target section for a wheel delta without moving. Negative deltas go up.
    pub fn neighbour(&self, delta_y: f64) -> Option<usize> {
        if delta_y < 0.0 {
            self.index.checked_sub(1)
        } else {
            Some(self.index + 1).filter(|next| *next < self.len)
        }
    }

    /// Returns the new index, or `None` when already at the boundary.
    pub fn on_wheel(&mut self, delta_y: f64) -> Option<usize> {
        let next = self.neighbour(delta_y)?;
        self.index = next;
        Some(next)
    }
}
