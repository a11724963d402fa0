//! Damped spring used to smooth pointer positions between animation frames.
//!
//! The target may jump arbitrarily; the position only ever changes through
//! integration, so the rendered trajectory stays continuous.

// Integration step. Long frames are split into steps of at most this size
// so stiff springs stay stable.
const MAX_STEP_SECS: f64 = 1.0 / 240.0;
// A frame longer than this (background tab, debugger pause) counts as this long.
const MAX_FRAME_SECS: f64 = 0.1;

const REST_DELTA: f64 = 1e-3;
const REST_SPEED: f64 = 1e-2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self { stiffness, damping, mass }
    }

    /// 1.0 is critical damping, below that the spring overshoots.
    #[cfg(test)]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    fn sanitized(self) -> Self {
        Self {
            stiffness: self.stiffness.max(0.0001),
            damping: self.damping.max(0.0),
            mass: self.mass.max(0.0001),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config: config.sanitized(),
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Advances the spring by `dt` seconds and returns the new position.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if !(dt > 0.0) {
            return self.position;
        }

        let SpringConfig { stiffness, damping, mass } = self.config;
        let mut remaining = dt.min(MAX_FRAME_SECS);
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            // Semi-implicit Euler: velocity first, then position.
            let acceleration =
                (stiffness * (self.target - self.position) - damping * self.velocity) / mass;
            self.velocity += acceleration * step;
            self.position += self.velocity * step;
            remaining -= step;
        }
        self.position
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.position).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Two independent springs sharing one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: Point) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x.position(), self.y.position())
    }

    #[cfg(test)]
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn set_target(&mut self, target: Point) {
        if target.is_finite() {
            self.x.set_target(target.x);
            self.y.set_target(target.y);
        }
    }

    pub fn tick(&mut self, dt: f64) -> Point {
        Point::new(self.x.tick(dt), self.y.tick(dt))
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
