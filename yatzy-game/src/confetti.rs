//! Particle model behind the Yatzy celebration burst.
//!
//! The model is renderer-agnostic: the web crate drives [`ConfettiBurst::advance`]
//! once per animation frame and paints [`Particle`]s onto a canvas.
use crate::constants::{
    CONFETTI_COUNT, CONFETTI_DRAG, CONFETTI_GRAVITY, CONFETTI_LAUNCH_X, CONFETTI_LAUNCH_Y,
    CONFETTI_SPIN_FREQUENCY, CONFETTI_SPREAD_X, CONFETTI_TERMINAL_VELOCITY,
};
use rand::Rng;
use std::f64::consts::TAU;

/// Two-sided paper colour; the back shows while a flake is flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfettiColor {
    pub front: &'static str,
    pub back: &'static str,
}

pub const PALETTE: [ConfettiColor; 10] = [
    ConfettiColor { front: "#c0c0c0", back: "#a9a9a9" },
    ConfettiColor { front: "#eeeeee", back: "#d3d3d3" },
    ConfettiColor { front: "#ffc0cb", back: "#db7093" },
    ConfettiColor { front: "#f5deb3", back: "#d2b48c" },
    ConfettiColor { front: "#deb887", back: "#a0522d" },
    ConfettiColor { front: "#fa8072", back: "#ffa07a" },
    ConfettiColor { front: "#ffd700", back: "#daa520" },
    ConfettiColor { front: "#ff6b6b", back: "#cc5555" },
    ConfettiColor { front: "#4ecdc4", back: "#3ba89f" },
    ConfettiColor { front: "#45b7d1", back: "#3692a8" },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub color: ConfettiColor,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
    /// Radians, fixed for the lifetime of the flake
    pub rotation: f64,
    /// Vertical squash in `[-1, 1]`; negative means the back is showing
    pub scale_y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    #[must_use]
    pub fn fill(&self) -> &'static str {
        if self.scale_y > 0.0 {
            self.color.front
        } else {
            self.color.back
        }
    }

    /// Width and height after the spin squash.
    #[must_use]
    pub fn drawn_size(&self) -> (f64, f64) {
        (self.width, self.height * self.scale_y)
    }
}

/// One burst of flakes launched from the bottom centre of a viewport.
#[derive(Debug, Clone)]
pub struct ConfettiBurst<R: Rng> {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: R,
}

impl<R: Rng> ConfettiBurst<R> {
    pub fn new(width: f64, height: f64, mut rng: R) -> Self {
        let centre = width / 2.0;
        let particles = (0..CONFETTI_COUNT)
            .map(|_| Particle {
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
                width: rng.gen_range(10.0..20.0),
                height: rng.gen_range(10.0..30.0),
                x: centre + rng.gen_range(-CONFETTI_SPREAD_X..CONFETTI_SPREAD_X),
                y: height - 1.0,
                rotation: rng.gen_range(0.0..TAU),
                scale_y: 1.0,
                vx: rng.gen_range(-CONFETTI_LAUNCH_X..CONFETTI_LAUNCH_X),
                vy: rng.gen_range(-CONFETTI_LAUNCH_Y..=0.0),
            })
            .collect();
        Self {
            particles,
            width,
            height,
            rng,
        }
    }

    /// Follow a viewport resize; flakes keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Step every flake by one frame and drop those below the viewport.
    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles.retain_mut(|p| {
            p.vx -= p.vx * CONFETTI_DRAG;
            p.vy = (p.vy + CONFETTI_GRAVITY).min(CONFETTI_TERMINAL_VELOCITY);
            let jitter: f64 = rng.r#gen();
            p.vx += if rng.gen_bool(0.5) { jitter } else { -jitter };

            p.x += p.vx;
            p.y += p.vy;
            if p.y >= height {
                return false;
            }
            if p.x > width {
                p.x = 0.0;
            }
            if p.x < 0.0 {
                p.x = width;
            }
            p.scale_y = (p.y * CONFETTI_SPIN_FREQUENCY).cos();
            true
        });
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}
