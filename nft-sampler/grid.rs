use crate::error::{SamplerError, SamplerResult};

/// Regular sampling grid over an image.
///
/// Steps are `dim / divisions`, clamped to at least 1 so tiny images never
/// produce a zero stride. Points run from `step` (inclusive) to
/// `dim - step` (exclusive) on both axes, which leaves an empty grid for
/// images too small to hold an interior point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingGrid {
    pub width: usize,
    pub height: usize,
    pub step_x: usize,
    pub step_y: usize,
}

impl SamplingGrid {
    pub fn new(width: usize, height: usize, divisions: usize) -> SamplerResult<Self> {
        if width == 0 || height == 0 {
            return Err(SamplerError::InvalidImageSize { width, height });
        }
        if divisions == 0 {
            return Err(SamplerError::InvalidDivisions(divisions));
        }
        Ok(Self {
            width,
            height,
            step_x: (width / divisions).max(1),
            step_y: (height / divisions).max(1),
        })
    }

    fn xs(&self) -> std::iter::StepBy<std::ops::Range<usize>> {
        (self.step_x..self.width.saturating_sub(self.step_x)).step_by(self.step_x)
    }

    fn ys(&self) -> std::iter::StepBy<std::ops::Range<usize>> {
        (self.step_y..self.height.saturating_sub(self.step_y)).step_by(self.step_y)
    }

    /// Grid points in row-major order (y outer, x inner)
    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ys().flat_map(move |y| self.xs().map(move |x| (x, y)))
    }

    pub fn len(&self) -> usize {
        self.xs().len() * self.ys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
