use shared::{Config, Event, Simulation};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, DomRect, KeyboardEvent, MouseEvent, TouchEvent};

use super::{AudioSystem, Pointer};
use crate::draw::{draw_flash, draw_particle, draw_rocket, fade_frame};

/// Ties the simulation to the platform: pointer input in, canvas and audio
/// out.
pub struct App {
    pub config: Config,
    simulation: Simulation,
    audio: AudioSystem,
    pub pointer: Pointer,
}

impl App {
    pub fn new(width: f64, height: f64, seed: u64) -> App {
        App {
            config: Config::default(),
            simulation: Simulation::new(width, height, seed),
            audio: AudioSystem::new(),
            pointer: Pointer::new(),
        }
    }

    /// One tick: fade the previous frame, advance the pools, draw the
    /// survivors back to front, and sound off this frame's detonations.
    pub fn draw(
        &mut self,
        context: &CanvasRenderingContext2d,
        width: f64,
        height: f64,
        now_ms: f64,
    ) -> Result<(), JsValue> {
        fade_frame(context, width, height);

        if self.pointer.clicked() {
            let (x, y) = self.pointer.location;
            self.simulation.launch_at(x, y);
        }

        let events = self.simulation.update(now_ms);

        for flash in &self.simulation.flashes {
            draw_flash(context, flash)?;
        }

        for rocket in &self.simulation.rockets {
            draw_rocket(context, rocket);
        }

        for particle in &self.simulation.particles {
            draw_particle(context, particle)?;
        }

        for event in events {
            match event {
                Event::Explosion { .. } => {
                    if self.config.sound {
                        self.audio.play_explosion(self.config.volume);
                    }
                }
            }
        }

        self.pointer.swap();

        Ok(())
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.simulation.resize(width, height);
    }

    pub fn on_mouse_down(&mut self, bound: &DomRect, event: MouseEvent) {
        if event.button() == 0 {
            self.pointer.location = (
                event.client_x() as f64 - bound.left(),
                event.client_y() as f64 - bound.top(),
            );
            self.pointer.button = true;
        }
    }

    pub fn on_mouse_up(&mut self, event: MouseEvent) {
        if event.button() == 0 {
            self.pointer.button = false;
        }
    }

    pub fn on_touch_start(&mut self, bound: &DomRect, event: TouchEvent) {
        if let Some(touch) = event.target_touches().item(0) {
            self.pointer.location = (
                touch.client_x() as f64 - bound.left(),
                touch.client_y() as f64 - bound.top(),
            );
            self.pointer.button = true;
        }

        event.prevent_default();
    }

    pub fn on_touch_end(&mut self, _: TouchEvent) {
        self.pointer.button = false;
    }

    pub fn on_key_down(&mut self, event: KeyboardEvent) {
        match event.code().as_str() {
            "KeyM" => self.config.toggle_sound(),
            _ => (),
        }
    }

    /// Slider input arrives as `0..=100`.
    pub fn on_volume_input(&mut self, value: f64) {
        self.config.set_volume(value / 100.0);
    }
}
