/// Container geometry in pixels. Origin is the top-left corner, +y is down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Physics and spawning only run once both dimensions are known
    #[inline]
    pub fn is_known(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Resting `y` for a body of this size
    #[inline]
    pub fn floor_for(&self, size: f32) -> f32 {
        self.height - size
    }

    /// Largest `x` for a body of this size
    #[inline]
    pub fn right_wall_for(&self, size: f32) -> f32 {
        self.width - size
    }
}
