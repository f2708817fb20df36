use js_sys::Math;
use wasm_bindgen::JsValue;
use web_sys::{console, AudioContext, BiquadFilterType, GainNode, OscillatorType};

/// Procedural explosion sounds, synthesized per detonation.
///
/// Every explosion builds a one-shot oscillator graph, schedules it, and
/// lets the context reap it; nothing is retained between shots. Sound is
/// best-effort: if the context cannot be created, explosions stay silent and
/// the animation is unaffected.
pub struct AudioSystem {
    context: Option<AudioContext>,
    failed: bool,
}

impl AudioSystem {
    pub fn new() -> AudioSystem {
        AudioSystem {
            context: None,
            failed: false,
        }
    }

    fn context(&mut self) -> Option<&AudioContext> {
        if self.context.is_none() && !self.failed {
            match AudioContext::new() {
                Ok(context) => self.context = Some(context),
                Err(_) => {
                    self.failed = true;
                    console::warn_1(&"audio unavailable, explosions stay silent".into());
                }
            }
        }

        self.context.as_ref()
    }

    /// Plays one of the two explosion envelopes, 50/50. Scheduling errors
    /// are discarded; playback is fire-and-forget.
    pub fn play_explosion(&mut self, volume: f64) {
        if volume <= 0.0 {
            return;
        }

        if let Some(context) = self.context() {
            let _ = if Math::random() < 0.5 {
                large_explosion(context, volume)
            } else {
                medium_explosion(context, volume)
            };
        }
    }
}

fn master_gain(context: &AudioContext, volume: f64) -> Result<GainNode, JsValue> {
    let master = context.create_gain()?;
    master.gain().set_value(volume as f32);
    master.connect_with_audio_node(&context.destination())?;

    Ok(master)
}

/// Deep rumble: a sawtooth sweeping 80 to 30 Hz through a lowpass.
fn large_explosion(context: &AudioContext, volume: f64) -> Result<(), JsValue> {
    let now = context.current_time();

    let oscillator = context.create_oscillator()?;
    let filter = context.create_biquad_filter()?;
    let gain = context.create_gain()?;
    let master = master_gain(context, volume)?;

    oscillator.connect_with_audio_node(&filter)?;
    filter.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&master)?;

    filter.set_type(BiquadFilterType::Lowpass);
    filter.frequency().set_value_at_time(400.0, now)?;
    filter.q().set_value_at_time(1.0, now)?;

    oscillator.set_type(OscillatorType::Sawtooth);
    oscillator.frequency().set_value_at_time(80.0, now)?;
    oscillator
        .frequency()
        .exponential_ramp_to_value_at_time(30.0, now + 0.2)?;

    gain.gain().set_value_at_time(0.5, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, now + 0.6)?;

    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(now + 0.6)?;

    Ok(())
}

/// Sharper crack: a square and a sine summed through a bandpass.
fn medium_explosion(context: &AudioContext, volume: f64) -> Result<(), JsValue> {
    let now = context.current_time();

    let square = context.create_oscillator()?;
    let sine = context.create_oscillator()?;
    let filter = context.create_biquad_filter()?;
    let gain = context.create_gain()?;
    let master = master_gain(context, volume)?;

    square.connect_with_audio_node(&filter)?;
    sine.connect_with_audio_node(&filter)?;
    filter.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&master)?;

    filter.set_type(BiquadFilterType::Bandpass);
    filter.frequency().set_value_at_time(1200.0, now)?;
    filter.q().set_value_at_time(2.0, now)?;

    square.set_type(OscillatorType::Square);
    square.frequency().set_value_at_time(200.0, now)?;
    square
        .frequency()
        .exponential_ramp_to_value_at_time(80.0, now + 0.15)?;

    sine.set_type(OscillatorType::Sine);
    sine.frequency().set_value_at_time(350.0, now)?;
    sine.frequency()
        .exponential_ramp_to_value_at_time(120.0, now + 0.1)?;

    gain.gain().set_value_at_time(0.3, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(0.01, now + 0.35)?;

    square.start_with_when(now)?;
    sine.start_with_when(now)?;
    square.stop_with_when(now + 0.35)?;
    sine.stop_with_when(now + 0.35)?;

    Ok(())
}
