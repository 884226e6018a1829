//! A single drifting mote and its palette.

use rand::Rng;

/// The backdrop palette: gold, indigo, and white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    /// `#FFD700`
    Gold,
    /// `#4B0082`
    Indigo,
    /// `#FFFFFF`
    White,
}

impl Tint {
    /// All tints, in palette order.
    pub const ALL: [Tint; 3] = [Tint::Gold, Tint::Indigo, Tint::White];

    /// Red, green, and blue components.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Gold => (0xFF, 0xD7, 0x00),
            Self::Indigo => (0x4B, 0x00, 0x82),
            Self::White => (0xFF, 0xFF, 0xFF),
        }
    }

    /// CSS-style hex string.
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

/// One particle: position, velocity, radius, tint, and current opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Horizontal velocity per step.
    pub vx: f32,
    /// Vertical velocity per step.
    pub vy: f32,
    /// Radius, 1 to 4.
    pub radius: f32,
    /// Palette color.
    pub tint: Tint,
    /// Current opacity, 0.2 to 0.8 once stepped.
    pub opacity: f32,
}

impl Particle {
    /// Spawn a particle uniformly inside `width` x `height`.
    pub fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            x: rng.random::<f32>() * width,
            y: rng.random::<f32>() * height,
            vx: rng.random::<f32>() * 0.5 - 0.25,
            vy: rng.random::<f32>() * 0.5 - 0.25,
            radius: rng.random::<f32>() * 3.0 + 1.0,
            tint: Tint::ALL[rng.random_range(0..Tint::ALL.len())],
            opacity: rng.random::<f32>() * 0.5 + 0.2,
        }
    }

    /// Advance one step inside `width` x `height` at wall-clock `now_secs`.
    ///
    /// A component turns back towards the inside once the particle has
    /// crossed a bound, not at the bound itself, so a particle may sit
    /// slightly outside for a step. A particle left far outside by a resize
    /// keeps heading inwards until it is back.
    pub fn step(&mut self, width: f32, height: f32, now_secs: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 {
            self.vx = self.vx.abs();
        } else if self.x > width {
            self.vx = -self.vx.abs();
        }
        if self.y < 0.0 {
            self.vy = self.vy.abs();
        } else if self.y > height {
            self.vy = -self.vy.abs();
        }
        self.opacity = ((now_secs + f64::from(self.x)).sin() * 0.3 + 0.5) as f32;
    }
}
