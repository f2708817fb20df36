use itertools::Itertools;

/// An ascending projectile. It climbs at a fixed rate with a slight
/// serpentine pulse, leaves a bounded trail behind it, and terminates once it
/// reaches its target height.
pub struct Rocket {
    pub x: f64,
    pub y: f64,
    pub tx: f64,
    /// Target height; the rocket detonates once `y` climbs past it.
    pub ty: f64,
    /// Lateral drift derived once at launch, pointing towards `tx`. The
    /// rocket does not home and never integrates it; `x` stays put.
    pub vx: f64,
    vy: f64,
    trail: Vec<(f64, f64)>,
    wave_phase: f64,
    time: u64,
}

impl Rocket {
    const ASCENT_RATE: f64 = -5.0;
    const TRAIL_LENGTH: usize = 20;
    const WAVE_AMPLITUDE: f64 = 0.2;
    const WAVE_FREQUENCY: f64 = 0.05;

    pub fn new(sx: f64, sy: f64, tx: f64, ty: f64, wave_phase: f64) -> Rocket {
        let vy = Self::ASCENT_RATE;
        let dx = tx - sx;

        Rocket {
            x: sx,
            y: sy,
            tx,
            ty,
            vx: if dx == 0.0 {
                0.0
            } else {
                dx.signum() * vy.abs() * 0.25
            },
            vy,
            trail: Vec::new(),
            wave_phase,
            time: 0,
        }
    }

    /// Advances the rocket by one frame. Returns `true` once the target
    /// height is reached and the rocket should detonate.
    pub fn update(&mut self) -> bool {
        self.time += 1;

        // The serpentine wave rides the climb axis, not across it: the
        // rocket pulses vertically while `x` stays fixed.
        let wave = ((self.time as f64) * Self::WAVE_FREQUENCY + self.wave_phase).sin()
            * Self::WAVE_AMPLITUDE;

        self.y += self.vy;
        self.y += wave;

        self.trail.push((self.x, self.y));
        if self.trail.len() > Self::TRAIL_LENGTH {
            self.trail.remove(0);
        }

        self.y <= self.ty
    }

    pub fn trail(&self) -> &[(f64, f64)] {
        &self.trail
    }

    /// Consecutive trail positions, paired up as segments of the streak
    /// polyline.
    pub fn trail_segments(&self) -> impl Iterator<Item = (&(f64, f64), &(f64, f64))> + '_ {
        self.trail.iter().tuple_windows()
    }
}
