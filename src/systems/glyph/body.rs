use serde::Serialize;

use crate::core::Vec2;
use crate::domain::palette::DEFAULT_GLYPH;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Unique ID, assigned by the session on insertion
    pub id: u32,

    // === Physics State ===
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Velocity vector (pixels per frame)
    pub velocity: Vec2,
    /// Rotation angle (degrees, kept in [0, 360))
    pub rotation: f32,
    /// Angular velocity (degrees per frame)
    pub rotation_speed: f32,
    /// Side length of the bounding square, doubles as mass
    pub size: f32,
    /// Frozen at rest. Never cleared once set.
    pub settled: bool,

    // === Presentation ===
    pub glyph: char,
    /// Index into the session palette
    pub color: usize,
}

impl Body {
    /// A motionless, unsettled body. The ID is assigned when it is placed.
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            id: 0,
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            rotation: 0.0,
            rotation_speed: 0.0,
            size,
            settled: false,
            glyph: DEFAULT_GLYPH,
            color: 0,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    pub fn with_rotation(mut self, rotation: f32, rotation_speed: f32) -> Self {
        self.rotation = rotation;
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_color(mut self, color: usize) -> Self {
        self.color = color;
        self
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Builder form of [`Body::settle`]
    pub fn settled(mut self) -> Self {
        self.settle();
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        let r = self.radius();
        Vec2::new(self.pos.x + r, self.pos.y + r)
    }

    /// Settled bodies act as immovable obstacles
    #[inline]
    pub fn inv_mass(&self) -> f32 {
        if self.settled {
            0.0
        } else {
            1.0 / self.size
        }
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inv_mass();
    }

    /// Freeze the body in place
    pub fn settle(&mut self) {
        self.velocity = Vec2::zero();
        self.rotation_speed = 0.0;
        self.settled = true;
    }
}
