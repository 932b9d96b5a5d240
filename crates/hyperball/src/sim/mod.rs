//! The ball/trail simulation: one agent walking the surface one tick at a
//! time.
//!
//! Motion is anchored: an *instruction* records where the agent last turned
//! (or crossed) and in which direction, and every tick recomputes the head
//! as the anchor advanced by `(steps + 1) · step_size`. Heads therefore lie
//! exactly on one geodesic between turns instead of accumulating per-step
//! heading error. A turn or a crossing re-anchors the instruction and
//! resets the step counter.
//!
//! All state lives in the caller-owned [`Ball`]; [`Simulation`] itself is
//! immutable after construction.

pub mod rand;

use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_8};

use crate::disk::{heading_toward, normalize_angle, opposite_angle, Point};
use crate::surface::{
    genus2_octagon, hexagon_quotient, transit, ConfigError, FundamentalDomain, Gluing, Step,
};

/// Turn request, a quarter revolution either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// The anchor the per-tick head recomputation starts from.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    pub position: Point,
    pub direction: f64,
}

/// Motion constants of one simulation.
#[derive(Clone, Copy, Debug)]
pub struct SimCfg {
    /// Geodesic length of one elementary step.
    pub step_size: f64,
    /// Trail length at initialization.
    pub start_len: usize,
    /// Trail growth granted by one [`Ball::grow`] trigger.
    pub growth_increment: u32,
    pub start_position: Point,
    pub start_direction: f64,
}

impl SimCfg {
    /// Constants of the octagon surface.
    pub fn octagon() -> Self {
        Self {
            step_size: 0.03,
            start_len: 30,
            growth_increment: 10,
            start_position: Point::origin(),
            start_direction: FRAC_PI_8,
        }
    }

    /// Constants of the hexagon surface.
    pub fn hexagon() -> Self {
        Self {
            step_size: 0.05,
            ..Self::octagon()
        }
    }
}

/// The moving agent: trail (front = head), anchor instruction, and the
/// remaining growth allowance. The trail is never empty.
#[derive(Clone, Debug)]
pub struct Ball {
    trail: VecDeque<Point>,
    instruction: Instruction,
    steps_from_instruction: u32,
    growing: u32,
}

impl Ball {
    /// Current head position.
    #[inline]
    pub fn head(&self) -> Point {
        self.trail[0]
    }

    #[inline]
    pub fn trail(&self) -> &VecDeque<Point> {
        &self.trail
    }

    #[inline]
    pub fn instruction(&self) -> Instruction {
        self.instruction
    }

    #[inline]
    pub fn growing(&self) -> u32 {
        self.growing
    }

    /// Grant `amount` more ticks of trail growth (external trigger, e.g. a
    /// pickup).
    pub fn grow(&mut self, amount: u32) {
        self.growing += amount;
    }
}

/// An immutable surface plus motion constants; ticks one [`Ball`] at a time.
#[derive(Clone, Debug)]
pub struct Simulation {
    domain: FundamentalDomain,
    gluing: Gluing,
    cfg: SimCfg,
}

impl Simulation {
    pub fn new(
        domain: FundamentalDomain,
        gluing: Gluing,
        cfg: SimCfg,
    ) -> Result<Self, ConfigError> {
        if domain.sides() != gluing.sides() {
            return Err(ConfigError::SideMismatch {
                domain: domain.sides(),
                gluing: gluing.sides(),
            });
        }
        Ok(Self {
            domain,
            gluing,
            cfg,
        })
    }

    /// The genus-2 octagon surface with its stock motion constants.
    pub fn octagon() -> Result<Self, ConfigError> {
        let (domain, gluing) = genus2_octagon()?;
        Self::new(domain, gluing, SimCfg::octagon())
    }

    /// The hexagon quotient with its stock motion constants.
    pub fn hexagon() -> Result<Self, ConfigError> {
        let (domain, gluing) = hexagon_quotient()?;
        Self::new(domain, gluing, SimCfg::hexagon())
    }

    #[inline]
    pub fn domain(&self) -> &FundamentalDomain {
        &self.domain
    }

    #[inline]
    pub fn gluing(&self) -> &Gluing {
        &self.gluing
    }

    #[inline]
    pub fn cfg(&self) -> SimCfg {
        self.cfg
    }

    /// Fresh ball at the start pose, trail seeded backwards along the
    /// opposite heading so the body starts fully extended.
    pub fn initialize(&self) -> Ball {
        let start = self.cfg.start_position;
        let back = opposite_angle(self.cfg.start_direction);
        let mut trail = VecDeque::with_capacity(self.cfg.start_len);
        trail.push_back(start);
        for i in 1..self.cfg.start_len {
            trail.push_back(start.distant_point(self.cfg.step_size * i as f64, back));
        }
        Ball {
            trail,
            instruction: Instruction {
                position: start,
                direction: normalize_angle(self.cfg.start_direction),
            },
            steps_from_instruction: 0,
            growing: 0,
        }
    }

    /// Advance one step: recompute the head from the anchor, run the
    /// crossing engine, commit, and update the trail.
    pub fn tick(&self, ball: &mut Ball) -> Step {
        let travelled = self.cfg.step_size * f64::from(ball.steps_from_instruction + 1);
        let candidate = ball
            .instruction
            .position
            .distant_point(travelled, ball.instruction.direction);
        ball.steps_from_instruction += 1;

        let step = transit(
            &self.domain,
            &self.gluing,
            ball.head(),
            candidate,
            ball.instruction.direction,
        );
        if step.crossing.is_some() {
            ball.instruction = Instruction {
                position: step.position,
                direction: step.direction,
            };
            ball.steps_from_instruction = 0;
        }

        ball.trail.push_front(step.position);
        if ball.growing > 0 {
            ball.growing -= 1;
        } else {
            ball.trail.pop_back();
        }
        step
    }

    /// Apply one growth trigger (a pickup): the trail gains
    /// `growth_increment` segments over the coming ticks.
    pub fn feed(&self, ball: &mut Ball) {
        ball.grow(self.cfg.growth_increment);
    }

    /// Re-anchor the instruction a quarter turn off the current course.
    ///
    /// The new heading is derived from the line between the current head
    /// and the head the current instruction would produce next, so a turn
    /// is exact regardless of how many steps the instruction has run.
    pub fn turn(&self, ball: &mut Ball, turn: Turn) {
        let travelled = self.cfg.step_size * f64::from(ball.steps_from_instruction + 1);
        let would_be = ball
            .instruction
            .position
            .distant_point(travelled, ball.instruction.direction);
        let heading = heading_toward(ball.head(), would_be);
        let rotated = match turn {
            Turn::Left => heading + FRAC_PI_2,
            Turn::Right => heading - FRAC_PI_2,
        };
        ball.instruction = Instruction {
            position: ball.head(),
            direction: normalize_angle(rotated),
        };
        ball.steps_from_instruction = 0;
    }
}

#[cfg(test)]
mod tests;
