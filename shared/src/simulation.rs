use std::f64::consts::TAU;

use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha8Rng,
};

use crate::{ExplosionFlash, Particle, Rocket};

/// A side effect of a tick that the host must carry out.
#[derive(Debug, PartialEq)]
pub enum Event {
    Explosion { x: f64, y: f64 },
}

/// The whole display: three pools of live entities plus the launch cadence.
///
/// Everything here is frame-synchronous. One `update` call advances every
/// pool exactly once, drops spent entities, and hands back the detonations
/// for the host to sound off. Randomness comes from an owned seeded stream,
/// so a run is reproducible from its seed.
pub struct Simulation {
    pub rockets: Vec<Rocket>,
    pub particles: Vec<Particle>,
    pub flashes: Vec<ExplosionFlash>,
    width: f64,
    height: f64,
    last_auto_launch: f64,
    rng: ChaCha8Rng,
}

impl Simulation {
    const AUTO_LAUNCH_INTERVAL_MS: f64 = 400.0;

    pub fn new(width: f64, height: f64, seed: u64) -> Simulation {
        Simulation {
            rockets: Vec::new(),
            particles: Vec::new(),
            flashes: Vec::new(),
            width,
            height,
            last_auto_launch: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Resyncs the viewport bounds after a resize. Entities already in
    /// flight keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Launches a single rocket from the bottom edge straight up towards
    /// `(x, y)`.
    pub fn launch_at(&mut self, x: f64, y: f64) {
        let phase = unit(&mut self.rng) * TAU;
        self.rockets.push(Rocket::new(x, self.height, x, y, phase));
    }

    /// Advances every pool by one frame.
    ///
    /// Pools are walked in draw order: flashes, then rockets, then
    /// particles. Entities spawned by a detonation join their pools at the
    /// end of the tick, so their first update lands on the next frame.
    pub fn update(&mut self, now_ms: f64) -> Vec<Event> {
        let mut events = Vec::new();

        self.auto_launch(now_ms);

        self.flashes.retain_mut(|flash| !flash.update());

        let mut detonations = Vec::new();
        self.rockets.retain_mut(|rocket| {
            if rocket.update() {
                detonations.push((rocket.x, rocket.ty));
                false
            } else {
                true
            }
        });

        self.particles.retain_mut(|particle| !particle.update());

        for (x, y) in detonations {
            self.explode(x, y, &mut events);
        }

        events
    }

    fn auto_launch(&mut self, now_ms: f64) {
        if now_ms - self.last_auto_launch >= Self::AUTO_LAUNCH_INTERVAL_MS {
            let group_size = if unit(&mut self.rng) < 0.5 { 2 } else { 3 };

            for _ in 0..group_size {
                let sx = unit(&mut self.rng) * self.width;
                let tx = unit(&mut self.rng) * self.width;
                let ty = unit(&mut self.rng) * self.height * 0.5 + self.height * 0.1;
                let phase = unit(&mut self.rng) * TAU;

                self.rockets
                    .push(Rocket::new(sx, self.height, tx, ty, phase));
            }

            self.last_auto_launch = now_ms;
        }
    }

    /// One detonation: a flash, a burst of 80 to 120 particles clustered
    /// around a shared base hue, and an event for the host.
    fn explode(&mut self, x: f64, y: f64, events: &mut Vec<Event>) {
        events.push(Event::Explosion { x, y });
        self.flashes.push(ExplosionFlash::new(x, y));

        let count = (80.0 + unit(&mut self.rng) * 40.0).ceil() as usize;
        let hue = unit(&mut self.rng) * 360.0;

        for _ in 0..count {
            let angle = unit(&mut self.rng) * TAU;
            let speed = unit(&mut self.rng) * 1.5 + 0.5;
            let jitter = unit(&mut self.rng) * 40.0 - 20.0;
            let lightness = unit(&mut self.rng) * 20.0 + 50.0;
            let life_decay = unit(&mut self.rng) * 0.01 + 0.005;

            self.particles.push(Particle::new(
                x,
                y,
                angle.cos() * speed,
                angle.sin() * speed,
                hue + jitter,
                lightness,
                life_decay,
            ));
        }
    }
}

/// Uniform draw in `[0, 1)` from the top 53 bits of the stream.
fn unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        for _ in 0..10_000 {
            let value = unit(&mut rng);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn spent_particles_leave_the_pool() {
        let mut simulation = Simulation::new(1000.0, 800.0, 5);

        simulation
            .particles
            .push(Particle::new(0.0, 0.0, 0.0, 0.0, 0.0, 50.0, 2.0));

        simulation.update(0.0);

        assert!(simulation.particles.is_empty());
    }

    #[test]
    fn same_seed_replays_the_same_show() {
        let mut first = Simulation::new(1000.0, 800.0, 42);
        let mut second = Simulation::new(1000.0, 800.0, 42);

        first.update(1000.0);
        second.update(1000.0);

        assert_eq!(first.rockets.len(), second.rockets.len());

        for (a, b) in first.rockets.iter().zip(second.rockets.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.tx, b.tx);
            assert_eq!(a.ty, b.ty);
        }
    }
}
