//! Sound effects and background music
//!
//! The runtime only knows `Synth`. Each effect is a short oscillator sweep
//! whose parameters are rolled from the session seed, so one game always
//! sounds the same. The WebAudio synth lives behind `cfg(wasm32)`; everywhere
//! else `SilentSynth` stands in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::random::Random;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundEffect {
    Coin,
    Laser,
    Explosion,
    PowerUp,
    Hit,
    Jump,
    Select,
    Lucky,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 8] = [
        SoundEffect::Coin,
        SoundEffect::Laser,
        SoundEffect::Explosion,
        SoundEffect::PowerUp,
        SoundEffect::Hit,
        SoundEffect::Jump,
        SoundEffect::Select,
        SoundEffect::Lucky,
    ];

    /// Single-character synth code
    pub fn code(self) -> char {
        match self {
            SoundEffect::Coin => 'c',
            SoundEffect::Laser => 'l',
            SoundEffect::Explosion => 'e',
            SoundEffect::PowerUp => 'p',
            SoundEffect::Hit => 'h',
            SoundEffect::Jump => 'j',
            SoundEffect::Select => 's',
            SoundEffect::Lucky => 'u',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Coin => "coin",
            SoundEffect::Laser => "laser",
            SoundEffect::Explosion => "explosion",
            SoundEffect::PowerUp => "powerUp",
            SoundEffect::Hit => "hit",
            SoundEffect::Jump => "jump",
            SoundEffect::Select => "select",
            SoundEffect::Lucky => "lucky",
        }
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoundEffect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| format!("unknown sound effect: {s}"))
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One oscillator sweep with an exponential decay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    pub wave: Wave,
    pub freq_start: f32,
    pub freq_end: f32,
    /// Seconds
    pub duration: f32,
    pub volume: f32,
    /// Extra notes stacked after the first, each this many seconds apart
    pub repeat: u32,
    pub repeat_interval: f32,
}

/// Effect voices rolled from a seed
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBank {
    voices: [Voice; 8],
}

impl SoundBank {
    pub fn new(seed: u32) -> Self {
        let mut rng = Random::with_seed(seed);
        let voices = SoundEffect::ALL.map(|e| roll_voice(e, &mut rng));
        Self { voices }
    }

    pub fn voice(&self, effect: SoundEffect) -> &Voice {
        &self.voices[effect as usize]
    }
}

fn roll_voice(effect: SoundEffect, rng: &mut Random) -> Voice {
    let base = Voice {
        wave: Wave::Square,
        freq_start: 440.0,
        freq_end: 440.0,
        duration: 0.1,
        volume: 0.3,
        repeat: 0,
        repeat_interval: 0.0,
    };
    match effect {
        SoundEffect::Coin => {
            let f = rng.get_range(800.0, 1400.0);
            Voice {
                freq_start: f,
                freq_end: f * 1.5,
                duration: rng.get_range(0.08, 0.15),
                repeat: 1,
                repeat_interval: 0.06,
                ..base
            }
        }
        SoundEffect::Laser => Voice {
            wave: Wave::Sawtooth,
            freq_start: rng.get_range(1200.0, 2000.0),
            freq_end: rng.get_range(150.0, 300.0),
            duration: rng.get_range(0.1, 0.2),
            volume: 0.25,
            ..base
        },
        SoundEffect::Explosion => Voice {
            wave: Wave::Sawtooth,
            freq_start: rng.get_range(80.0, 140.0),
            freq_end: 30.0,
            duration: rng.get_range(0.3, 0.5),
            volume: 0.5,
            ..base
        },
        SoundEffect::PowerUp => {
            let f = rng.get_range(300.0, 500.0);
            Voice {
                wave: Wave::Triangle,
                freq_start: f,
                freq_end: f * 2.0,
                duration: 0.15,
                repeat: 2,
                repeat_interval: 0.08,
                ..base
            }
        }
        SoundEffect::Hit => Voice {
            freq_start: rng.get_range(200.0, 400.0),
            freq_end: rng.get_range(60.0, 100.0),
            duration: rng.get_range(0.05, 0.1),
            volume: 0.4,
            ..base
        },
        SoundEffect::Jump => {
            let f = rng.get_range(200.0, 350.0);
            Voice {
                wave: Wave::Triangle,
                freq_start: f,
                freq_end: f * rng.get_range(2.0, 3.0),
                duration: rng.get_range(0.1, 0.2),
                ..base
            }
        }
        SoundEffect::Select => {
            let f = rng.get_range(500.0, 900.0);
            Voice {
                freq_start: f,
                freq_end: f,
                duration: 0.05,
                volume: 0.2,
                ..base
            }
        }
        SoundEffect::Lucky => {
            let f = rng.get_range(600.0, 900.0);
            Voice {
                wave: Wave::Sine,
                freq_start: f,
                freq_end: f * 1.25,
                duration: 0.2,
                repeat: 3,
                repeat_interval: 0.1,
                ..base
            }
        }
    }
}

/// Looping background tune: one note (Hz) per step, `None` = rest
#[derive(Debug, Clone, PartialEq)]
pub struct Melody {
    pub notes: Vec<Option<f32>>,
    /// Seconds per step
    pub step: f32,
}

const MELODY_STEPS: usize = 32;
/// Pentatonic semitone offsets from the root
const SCALE: [i32; 5] = [0, 2, 4, 7, 9];

impl Melody {
    pub fn new(seed: u32) -> Self {
        let mut rng = Random::with_seed(seed.wrapping_add(1));
        let root = rng.get_range(110.0, 220.0);
        let step = rng.get_range(0.12, 0.2);
        let mut degree = 0i32;
        let notes = (0..MELODY_STEPS)
            .map(|_| {
                if rng.get(1.0) < 0.25 {
                    return None;
                }
                degree = (degree + rng.get_int_range(-2, 3)).clamp(0, 9);
                let octave = degree / 5;
                let semis = SCALE[(degree % 5) as usize] + octave * 12;
                Some(root * 2f32.powf(semis as f32 / 12.0))
            })
            .collect();
        Self { notes, step }
    }
}

/// Sound collaborator driven by the runtime
pub trait Synth {
    /// Called once with the session seed before anything plays
    fn init(&mut self, seed: u32);
    fn play(&mut self, effect: SoundEffect);
    fn play_bgm(&mut self);
    fn stop_bgm(&mut self);
    /// Once per accepted frame
    fn update(&mut self) {}
    /// Unlock audio on the first user gesture
    fn play_empty(&mut self) {}
}

/// Does nothing audible; logs what would have played
#[derive(Debug, Default)]
pub struct SilentSynth {
    is_bgm_playing: bool,
}

impl SilentSynth {
    pub fn is_bgm_playing(&self) -> bool {
        self.is_bgm_playing
    }
}

impl Synth for SilentSynth {
    fn init(&mut self, seed: u32) {
        log::debug!("silent synth seeded with {seed}");
    }

    fn play(&mut self, effect: SoundEffect) {
        log::debug!("play {effect} ({})", effect.code());
    }

    fn play_bgm(&mut self) {
        self.is_bgm_playing = true;
    }

    fn stop_bgm(&mut self) {
        self.is_bgm_playing = false;
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebSynth;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{Melody, SoundBank, SoundEffect, Synth, Voice, Wave};

    /// Seconds of music scheduled ahead of the audio clock
    const LOOKAHEAD: f64 = 0.2;
    const BGM_VOLUME: f32 = 0.08;

    /// WebAudio oscillator synth
    pub struct WebSynth {
        ctx: Option<AudioContext>,
        bank: SoundBank,
        melody: Melody,
        bgm_next_time: Option<f64>,
        bgm_index: usize,
        volume: f32,
    }

    impl Default for WebSynth {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebSynth {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                bank: SoundBank::new(0),
                melody: Melody::new(0),
                bgm_next_time: None,
                bgm_index: 0,
                volume: 0.8,
            }
        }

        fn osc_type(wave: Wave) -> OscillatorType {
            match wave {
                Wave::Sine => OscillatorType::Sine,
                Wave::Square => OscillatorType::Square,
                Wave::Sawtooth => OscillatorType::Sawtooth,
                Wave::Triangle => OscillatorType::Triangle,
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            wave: Wave,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(Self::osc_type(wave));
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_voice(ctx: &AudioContext, voice: &Voice, vol: f32) {
            for i in 0..=voice.repeat {
                let t = ctx.current_time() + f64::from(voice.repeat_interval) * f64::from(i);
                let end = t + f64::from(voice.duration);
                let Some((osc, gain)) = Self::create_osc(ctx, voice.freq_start, voice.wave)
                else {
                    return;
                };
                gain.gain().set_value_at_time(vol * voice.volume, t).ok();
                gain.gain().exponential_ramp_to_value_at_time(0.01, end).ok();
                osc.frequency().set_value_at_time(voice.freq_start, t).ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(voice.freq_end.max(1.0), end)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(end + 0.05).ok();
            }
        }

        fn resume_if_suspended(ctx: &AudioContext) {
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    impl Synth for WebSynth {
        fn init(&mut self, seed: u32) {
            self.bank = SoundBank::new(seed);
            self.melody = Melody::new(seed);
        }

        fn play(&mut self, effect: SoundEffect) {
            let Some(ctx) = &self.ctx else { return };
            Self::resume_if_suspended(ctx);
            log::debug!("play {effect}");
            Self::play_voice(ctx, self.bank.voice(effect), self.volume);
        }

        fn play_bgm(&mut self) {
            let Some(ctx) = &self.ctx else { return };
            self.bgm_next_time = Some(ctx.current_time());
            self.bgm_index = 0;
        }

        fn stop_bgm(&mut self) {
            self.bgm_next_time = None;
        }

        fn update(&mut self) {
            let (Some(ctx), Some(mut next)) = (&self.ctx, self.bgm_next_time) else {
                return;
            };
            if self.melody.notes.is_empty() {
                return;
            }
            let step = f64::from(self.melody.step);
            while next < ctx.current_time() + LOOKAHEAD {
                if let Some(freq) = self.melody.notes[self.bgm_index] {
                    if let Some((osc, gain)) = Self::create_osc(ctx, freq, Wave::Triangle) {
                        gain.gain().set_value_at_time(self.volume * BGM_VOLUME, next).ok();
                        gain.gain()
                            .exponential_ramp_to_value_at_time(0.01, next + step)
                            .ok();
                        osc.start_with_when(next).ok();
                        osc.stop_with_when(next + step).ok();
                    }
                }
                self.bgm_index = (self.bgm_index + 1) % self.melody.notes.len();
                next += step;
            }
            self.bgm_next_time = Some(next);
        }

        fn play_empty(&mut self) {
            if let Some(ctx) = &self.ctx {
                Self::resume_if_suspended(ctx);
            }
        }
    }
}
