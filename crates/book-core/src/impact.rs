//! Drop, bounce and settle of the book onto the ground plane.

use crate::clock::{clamp_frame_dt, ease_alpha};
use crate::params::PhysicsParams;
use rand::Rng;
use std::f32::consts::TAU;

/// Rotation about the horizontal axes, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f32,
    pub z: f32,
}

impl Tilt {
    fn is_level(&self, tolerance: f32) -> bool {
        self.x.abs() < tolerance && self.z.abs() < tolerance
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookState {
    pub vertical_position: f32,
    pub vertical_velocity: f32,
    pub rotation: Tilt,
    pub rotation_velocity: Tilt,
    pub yaw: f32,
    pub spinning: bool,
    pub has_settled: bool,
    grounded: bool,
    bounces: u32,
}

impl BookState {
    pub fn dropped_from(height: f32, yaw: f32) -> Self {
        Self {
            vertical_position: height,
            vertical_velocity: 0.0,
            rotation: Tilt::default(),
            rotation_velocity: Tilt::default(),
            yaw,
            spinning: true,
            has_settled: false,
            grounded: false,
            bounces: 0,
        }
    }

    pub fn is_airborne(&self) -> bool {
        !self.has_settled && self.vertical_position > 0.0
    }

    /// Resting contact reached; the book is leveling or settled.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn bounces(&self) -> u32 {
        self.bounces
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImpactEvent {
    Bounced { impact_speed: f32, rebound_speed: f32 },
    Landed { impact_speed: f32 },
    Settled,
}

pub struct ImpactSimulator {
    params: PhysicsParams,
    state: BookState,
}

impl ImpactSimulator {
    pub fn new(params: PhysicsParams) -> Self {
        let state = BookState::dropped_from(params.drop_height, params.initial_yaw);
        Self { params, state }
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn state(&self) -> &BookState {
        &self.state
    }

    pub fn has_settled(&self) -> bool {
        self.state.has_settled
    }

    pub fn stop_spin(&mut self) {
        self.state.spinning = false;
    }

    /// Advance one frame. `dt_sec` is clamped, so a stalled tab or a bogus
    /// timestamp cannot blow up the integration.
    pub fn step<R: Rng + ?Sized>(&mut self, dt_sec: f32, rng: &mut R) -> Option<ImpactEvent> {
        let dt = clamp_frame_dt(dt_sec, self.params.max_frame_dt);
        if dt == 0.0 {
            return None;
        }
        let p = &self.params;
        let s = &mut self.state;

        if s.spinning {
            s.yaw = (s.yaw + p.idle_spin_rate * dt).rem_euclid(TAU);
        }
        if s.has_settled {
            return None;
        }

        if !s.grounded {
            let v0 = s.vertical_velocity;
            let h0 = s.vertical_position.max(0.0);
            s.vertical_velocity -= p.gravity * dt;
            s.vertical_position += s.vertical_velocity * dt;

            if s.vertical_position > 0.0 {
                let wx = (rng.gen::<f32>() - 0.5) * p.wobble_impulse;
                let wz = (rng.gen::<f32>() - 0.5) * p.wobble_impulse;
                s.rotation_velocity.x += wx;
                s.rotation_velocity.z += wz;
                s.rotation.x += s.rotation_velocity.x * dt;
                s.rotation.z += s.rotation_velocity.z * dt;
                s.rotation_velocity.x *= p.wobble_damping;
                s.rotation_velocity.z *= p.wobble_damping;
                return None;
            }

            // Contact happened somewhere inside this step: use the speed the
            // book had when it reached the plane, not the end-of-step value.
            s.vertical_position = 0.0;
            let impact_speed = (v0 * v0 + 2.0 * p.gravity * h0).sqrt();
            if impact_speed > p.bounce_threshold {
                let (lo, hi) = p.bounce_jitter;
                let jitter = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
                let rebound_speed = impact_speed * p.restitution * jitter * p.friction;
                s.vertical_velocity = rebound_speed;
                s.bounces += 1;
                log::debug!(
                    "[impact] bounce #{} impact={:.3} rebound={:.3}",
                    s.bounces,
                    impact_speed,
                    rebound_speed
                );
                return Some(ImpactEvent::Bounced {
                    impact_speed,
                    rebound_speed,
                });
            }
            s.vertical_velocity = 0.0;
            s.rotation_velocity = Tilt::default();
            s.grounded = true;
            return Some(ImpactEvent::Landed { impact_speed });
        }

        let alpha = ease_alpha(p.level_rate, dt);
        s.rotation.x -= s.rotation.x * alpha;
        s.rotation.z -= s.rotation.z * alpha;
        if s.rotation.is_level(p.level_tolerance) {
            s.rotation = Tilt::default();
            s.has_settled = true;
            log::info!("[impact] settled after {} bounces", s.bounces);
            return Some(ImpactEvent::Settled);
        }
        None
    }
}
