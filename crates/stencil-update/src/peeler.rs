//! The unstructured loop peeler: splits a physical index range into a
//! scalar head, a lane-aligned body, and a scalar tail.
//!
//! Exposed as a public, restartable iterator rather than a one-shot
//! function so model crates building vectorized `update_line_x` kernels on
//! top of [`crate::hood`] can reuse it directly.

/// Which segment of a peeled range a [`Peel`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeelKind {
    /// Leading indices before the first lane-aligned boundary.
    Head,
    /// The lane-aligned body, `lane_width` indices at a time.
    Body,
    /// Trailing indices after the last lane-aligned boundary.
    Tail,
}

/// One segment produced by [`peel`]: a contiguous `[start, end)` range and
/// the lane width it should be processed at (`1` for `Head`/`Tail`, the
/// peeler's configured width for `Body`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Peel {
    /// Which segment this is.
    pub kind: PeelKind,
    /// First physical index in this segment.
    pub start: usize,
    /// One past the last physical index in this segment.
    pub end: usize,
    /// The stride a kernel should advance by while consuming this segment.
    pub lane_width: usize,
}

impl Peel {
    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this segment is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Head,
    Body,
    Tail,
    Done,
}

/// A restartable iterator over the head/body/tail segments of
/// `[start, end)` relative to `lane_width`.
///
/// Any segment that would be empty is skipped rather than yielded with
/// `start == end`, so a caller can match on `kind` without special-casing
/// zero-length peels.
pub struct LoopPeeler {
    lane_width: usize,
    cursor: usize,
    end: usize,
    stage: Stage,
}

impl LoopPeeler {
    /// Build a peeler over `[start, end)`. `end < start` is treated as an
    /// empty range. Panics if `lane_width == 0`.
    pub fn new(start: usize, end: usize, lane_width: usize) -> Self {
        assert!(lane_width > 0, "lane_width must be positive");
        let end = end.max(start);
        Self {
            lane_width,
            cursor: start,
            end,
            stage: Stage::Head,
        }
    }
}

impl Iterator for LoopPeeler {
    type Item = Peel;

    fn next(&mut self) -> Option<Peel> {
        loop {
            match self.stage {
                Stage::Head => {
                    self.stage = Stage::Body;
                    let aligned = self.cursor.div_ceil(self.lane_width) * self.lane_width;
                    let head_end = aligned.min(self.end);
                    if head_end > self.cursor {
                        let peel = Peel {
                            kind: PeelKind::Head,
                            start: self.cursor,
                            end: head_end,
                            lane_width: 1,
                        };
                        self.cursor = head_end;
                        return Some(peel);
                    }
                }
                Stage::Body => {
                    self.stage = Stage::Tail;
                    let body_end = (self.end / self.lane_width) * self.lane_width;
                    if body_end > self.cursor {
                        let peel = Peel {
                            kind: PeelKind::Body,
                            start: self.cursor,
                            end: body_end,
                            lane_width: self.lane_width,
                        };
                        self.cursor = body_end;
                        return Some(peel);
                    }
                }
                Stage::Tail => {
                    self.stage = Stage::Done;
                    if self.end > self.cursor {
                        let peel = Peel {
                            kind: PeelKind::Tail,
                            start: self.cursor,
                            end: self.end,
                            lane_width: 1,
                        };
                        self.cursor = self.end;
                        return Some(peel);
                    }
                }
                Stage::Done => return None,
            }
        }
    }
}

/// Peel `[start, end)` into scalar head, lane-aligned body, and scalar
/// tail segments relative to `lane_width`.
pub fn peel(start: usize, end: usize, lane_width: usize) -> LoopPeeler {
    LoopPeeler::new(start, end, lane_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_range_has_no_head_or_tail() {
        let segs: Vec<_> = peel(8, 24, 8).collect();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].kind, PeelKind::Body);
        assert_eq!((segs[0].start, segs[0].end), (8, 24));
    }

    #[test]
    fn unaligned_range_yields_head_body_tail() {
        let segs: Vec<_> = peel(3, 19, 8).collect();
        let kinds: Vec<_> = segs.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PeelKind::Head, PeelKind::Body, PeelKind::Tail]);
        assert_eq!((segs[0].start, segs[0].end), (3, 8));
        assert_eq!((segs[1].start, segs[1].end), (8, 16));
        assert_eq!((segs[2].start, segs[2].end), (16, 19));
    }

    #[test]
    fn range_shorter_than_a_lane_is_all_head_or_tail() {
        let segs: Vec<_> = peel(1, 5, 8).collect();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].kind, PeelKind::Head);
        assert_eq!((segs[0].start, segs[0].end), (1, 5));
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert_eq!(peel(5, 5, 8).count(), 0);
        assert_eq!(peel(9, 5, 8).count(), 0);
    }

    #[test]
    fn total_coverage_matches_the_input_range() {
        for (start, end, lane) in [(0, 150, 4), (10, 149, 16), (37, 60, 32)] {
            let total: usize = peel(start, end, lane).map(|p| p.len()).sum();
            assert_eq!(total, end.saturating_sub(start));
        }
    }
}
