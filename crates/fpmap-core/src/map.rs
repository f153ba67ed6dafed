// crates/fpmap-core/src/map.rs

/// Pass boundaries beyond this many fold into the last bucket. Known
/// limitation carried over from the on-disk multi-file convention.
pub const MAX_PASSES: usize = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

/// Insertion-ordered focus pixel coordinates plus cumulative pass
/// boundaries. One writer at a time; built once, saved once.
#[derive(Clone, Debug, Default)]
pub struct PixelMap {
    pixels: Vec<PixelCoord>,
    bounds: Vec<usize>,
}

impl PixelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: u32, y: u32) {
        self.pixels.push(PixelCoord { x, y });
    }

    /// Close the current pass at the present pixel count. The 10th and
    /// later passes collapse into the 9th boundary.
    pub fn end_pass(&mut self) {
        let n = self.pixels.len();
        if self.bounds.len() < MAX_PASSES {
            self.bounds.push(n);
        } else if let Some(last) = self.bounds.last_mut() {
            *last = n;
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[PixelCoord] {
        &self.pixels
    }

    pub fn pass_count(&self) -> usize {
        self.bounds.len()
    }

    pub fn pass_bounds(&self) -> &[usize] {
        &self.bounds
    }

    /// Pixels of one pass, zero-based index. Out-of-range passes are empty.
    pub fn pass_pixels(&self, pass: usize) -> &[PixelCoord] {
        if pass >= self.bounds.len() {
            return &[];
        }
        let start = if pass == 0 { 0 } else { self.bounds[pass - 1] };
        &self.pixels[start..self.bounds[pass]]
    }

    /// Boundaries must be non-decreasing, the last one must equal the pixel
    /// count, and there are never more than `MAX_PASSES` of them.
    pub fn invariants_hold(&self) -> bool {
        if self.bounds.len() > MAX_PASSES {
            return false;
        }
        if self.bounds.windows(2).any(|w| w[0] > w[1]) {
            return false;
        }
        match self.bounds.last() {
            Some(&last) => last == self.pixels.len(),
            None => self.pixels.is_empty(),
        }
    }
}
