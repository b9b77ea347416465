/// An index into a fixed-length list that wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapCursor {
    index: usize,
    len: usize,
}

impl WrapCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len: len.max(1) }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to `index`. Out-of-range values are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut c = WrapCursor::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn next_from_last_wraps_to_zero() {
        let mut c = WrapCursor::new(4);
        c.set(3);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn full_cycle_returns_home() {
        let mut c = WrapCursor::new(4);
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.index(), 0);
        for _ in 0..8 {
            c.prev();
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn set_out_of_range_is_ignored() {
        let mut c = WrapCursor::new(4);
        c.set(2);
        c.set(9);
        assert_eq!(c.index(), 2);
    }
}
