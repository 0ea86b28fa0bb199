/// A stepped, half-open range of decimal degrees: `[start, end)` sampled
/// every `step` degrees.
///
/// Values are computed by index multiplication (`start + i * step`) rather
/// than repeated accumulation, so long ranges don't drift with floating-point
/// error. The endpoint policy is explicit: the exact upper bound is never
/// sampled, and a final sample that rounding pushes to (or past) `end` is
/// dropped. Callers that want the last grid line included extend `end` with
/// slack themselves; the graticule builders pass `limit + 1.0` so stepping
/// always lands on the final parallel/meridian instead of truncating it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DegreeRange {
    start: f64,
    end: f64,
    step: f64,
}

impl DegreeRange {
    /// Construct a new range. `step` must be positive; configs are validated
    /// before any range is built, so a bad step here is an internal bug.
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        debug_assert!(step > 0.0, "non-positive step: {}", step);
        Self { start, end, step }
    }

    /// The number of samples this range yields: `ceil((end - start) / step)`,
    /// minus one if rounding in the division pushed the last sample out of
    /// the half-open interval.
    pub fn len(&self) -> usize {
        if self.end <= self.start {
            return 0;
        }
        let mut count = ((self.end - self.start) / self.step).ceil() as usize;
        if count > 0 && self.start + (count - 1) as f64 * self.step >= self.end {
            count -= 1;
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for DegreeRange {
    type Item = f64;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            range: self,
            len: self.len(),
            index: 0,
        }
    }
}

/// Iterator over the samples of a [DegreeRange].
#[derive(Copy, Clone, Debug)]
pub struct Iter {
    range: DegreeRange,
    len: usize,
    index: usize,
}

impl Iterator for Iter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index < self.len {
            let value = self.range.start + self.index as f64 * self.range.step;
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter {}
