/// Position within a non-empty ring of slides. Every operation keeps `index < len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Option<Self> {
        Self::starting_at(len, 0)
    }

    pub fn starting_at(len: usize, index: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self { index: index % len, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn peek_next(&self) -> usize {
        (self.index + 1) % self.len
    }

    pub fn peek_prev(&self) -> usize {
        if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        }
    }

    pub fn next(&mut self) -> usize {
        self.index = self.peek_next();
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = self.peek_prev();
        self.index
    }

    /// Auto-advance by `steps` ticks of the rotation timer.
    pub fn advance(&mut self, steps: u64) -> usize {
        let steps = (steps % self.len as u64) as usize;
        self.index = (self.index + steps) % self.len;
        self.index
    }

    pub fn jump(&mut self, index: usize) -> usize {
        self.index = index % self.len;
        self.index
    }
}

pub fn slide_count(items: usize, per_slide: usize) -> usize {
    if per_slide == 0 {
        return 0;
    }
    items.div_ceil(per_slide)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Carousel::new(0).is_none());
        assert!(Carousel::starting_at(0, 3).is_none());
    }

    #[test]
    fn test_wraps() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.jump(7), 1);
        assert_eq!(c.advance(5), 0);
        assert_eq!(Carousel::starting_at(4, 9).unwrap().index(), 1);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        for len in 1..8usize {
            let mut c = Carousel::new(len).unwrap();
            let mut seed = len as u64 * 2654435761;
            for step in 0..200u64 {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let i = match (seed >> 33) % 4 {
                    0 => c.next(),
                    1 => c.prev(),
                    2 => c.advance(seed >> 40),
                    _ => c.jump((seed >> 20) as usize + step as usize),
                };
                assert!(i < len);
                assert_eq!(i, c.index());
                assert!(c.peek_next() < len && c.peek_prev() < len);
            }
        }
    }

    #[test]
    fn test_single_slide() {
        let mut c = Carousel::new(1).unwrap();
        assert_eq!((c.next(), c.prev(), c.advance(u64::MAX)), (0, 0, 0));
    }

    #[test]
    fn test_slide_count() {
        assert_eq!(slide_count(0, 3), 0);
        assert_eq!(slide_count(3, 3), 1);
        assert_eq!(slide_count(7, 3), 3);
        assert_eq!(slide_count(7, 0), 0);
        assert_eq!(slide_count(2, usize::MAX), 1);
        assert_eq!(slide_count(usize::MAX, 2), usize::MAX / 2 + 1);
    }
}
