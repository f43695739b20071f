//! Scroll position of the content column.

/// Normalised scroll position, always in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const TOP: ScrollProgress = ScrollProgress(0.0);
    #[cfg(test)]
    pub const BOTTOM: ScrollProgress = ScrollProgress(1.0);

    /// Clamps into `[0, 1]`; NaN maps to the top
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return ScrollProgress::TOP;
        }
        ScrollProgress(value.clamp(0.0, 1.0))
    }

    /// Progress of `offset` rows out of `max_offset`
    pub fn from_offset(offset: usize, max_offset: usize) -> Self {
        if max_offset == 0 {
            return ScrollProgress::TOP;
        }
        ScrollProgress::new(offset as f64 / max_offset as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Owns the row offset of the scrollable sections
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollHost {
    offset: usize,
    viewport_rows: usize,
    content_rows: usize,
}

impl ScrollHost {
    pub fn new(viewport_rows: usize, content_rows: usize) -> Self {
        ScrollHost {
            offset: 0,
            viewport_rows,
            content_rows,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    pub fn progress(&self) -> ScrollProgress {
        ScrollProgress::from_offset(self.offset, self.max_offset())
    }

    /// Moves by `delta` rows, stopping at either end
    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.offset = target.min(self.max_offset());
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page_step() as isize);
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.page_step() as isize));
    }

    pub fn home(&mut self) {
        self.offset = 0;
    }

    pub fn end(&mut self) {
        self.offset = self.max_offset();
    }

    /// Jumps to a normalised position
    pub fn scroll_to(&mut self, progress: ScrollProgress) {
        self.offset = (progress.value() * self.max_offset() as f64).round() as usize;
    }

    /// Applies new dimensions, keeping the relative position
    pub fn resize(&mut self, viewport_rows: usize, content_rows: usize) {
        let progress = self.progress();
        self.viewport_rows = viewport_rows;
        self.content_rows = content_rows;
        self.scroll_to(progress);
    }

    fn page_step(&self) -> usize {
        self.viewport_rows.saturating_sub(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ScrollProgress::new(-3.0), ScrollProgress::TOP);
        assert_eq!(ScrollProgress::new(4.0), ScrollProgress::BOTTOM);
        assert_eq!(ScrollProgress::new(f64::NAN), ScrollProgress::TOP);
        assert_eq!(ScrollProgress::new(f64::INFINITY), ScrollProgress::BOTTOM);
        assert_eq!(ScrollProgress::from_offset(5, 0), ScrollProgress::TOP);
    }

    #[test]
    fn host_starts_at_top() {
        let host = ScrollHost::new(20, 80);
        assert_eq!(host.offset(), 0);
        assert_eq!(host.progress(), ScrollProgress::TOP);
        assert_eq!(host.max_offset(), 60);
    }

    #[test]
    fn scroll_stops_at_both_ends() {
        let mut host = ScrollHost::new(20, 80);
        host.scroll_by(-5);
        assert_eq!(host.offset(), 0);
        host.scroll_by(1000);
        assert_eq!(host.offset(), 60);
        assert_eq!(host.progress(), ScrollProgress::BOTTOM);
    }

    #[test]
    fn pages_and_jumps() {
        let mut host = ScrollHost::new(20, 80);
        host.page_down();
        assert_eq!(host.offset(), 19);
        host.page_up();
        assert_eq!(host.offset(), 0);
        host.end();
        assert_eq!(host.offset(), 60);
        host.home();
        assert_eq!(host.offset(), 0);
        host.scroll_to(ScrollProgress::new(0.5));
        assert_eq!(host.offset(), 30);
    }

    #[test]
    fn progress_is_monotone_in_offset() {
        let mut host = ScrollHost::new(10, 40);
        let mut last = host.progress();
        for _ in 0..40 {
            host.scroll_by(1);
            let next = host.progress();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn resize_keeps_relative_position() {
        let mut host = ScrollHost::new(20, 80);
        host.end();
        host.resize(10, 40);
        assert_eq!(host.offset(), 30);
        assert_eq!(host.progress(), ScrollProgress::BOTTOM);
    }

    #[test]
    fn content_shorter_than_viewport_never_scrolls() {
        let mut host = ScrollHost::new(50, 30);
        host.page_down();
        assert_eq!(host.offset(), 0);
        assert_eq!(host.progress(), ScrollProgress::TOP);
    }
}
