//! Title / in-game / game over loop
//!
//! The host calls `Runner::tick` from its animation callback. Accepted ticks
//! run one frame: sample input, clear the hitbox registry, run the current
//! scene, advance the frame counter.

use glam::IVec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use super::replay::{Playback, Replay};
use super::{Game, GameOptions, GameSession, Scene};
use crate::audio::{SilentSynth, Synth};
use crate::console::Console;
use crate::consts::{
    CACHE_WARMUP_FRAMES, DESCRIPTION_TICKS, FRAME_SLACK_MS, GAME_OVER_GRACE_TICKS,
    GAME_OVER_REDRAW_TICK, GAME_OVER_TITLE_TIMEOUT, TARGET_FPS,
};
use crate::font::TextOptions;
use crate::random::string_hash;
use crate::terminal::Terminal;

/// Drops animation callbacks that arrive faster than the target rate
#[derive(Debug, Clone)]
pub struct FrameGate {
    min_interval_ms: f64,
    last_ms: Option<f64>,
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(TARGET_FPS, FRAME_SLACK_MS)
    }
}

impl FrameGate {
    pub fn new(fps: u32, slack_ms: f64) -> Self {
        Self {
            min_interval_ms: 1000.0 / f64::from(fps.max(1)) - slack_ms,
            last_ms: None,
        }
    }

    /// True when a frame should run at `now_ms`
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_ms
            && now_ms - last < self.min_interval_ms
        {
            return false;
        }
        self.last_ms = Some(now_ms);
        true
    }
}

pub struct Runner<G: Game> {
    game: G,
    console: Console,
    terminal: Terminal,
    options: GameOptions,
    title: String,
    description: String,
    has_title: bool,
    seed: u32,
    gate: FrameGate,
    cache_warmup: u32,
    run_seeds: Pcg32,
    recording: Option<Replay>,
    last_replay: Option<Replay>,
    playback: Option<Playback>,
}

impl<G: Game> Runner<G> {
    pub fn new(game: G) -> Self {
        Self::with_synth(game, Box::new(SilentSynth::default()))
    }

    pub fn with_synth(game: G, mut synth: Box<dyn Synth>) -> Self {
        let options = game.options();
        let title = game.title().to_string();
        let description = game.description().to_string();
        let has_title = !title.trim().is_empty() || !description.trim().is_empty();
        let seed = options.seed.wrapping_add(string_hash(&description) as u32);
        log::info!("Session seed: {seed}");

        synth.init(seed);
        let view = options.view_size.as_ivec2();
        let mut console = Console::with_synth(view, seed, synth);
        console.font_mut().define_characters(game.characters(), 'a');

        let mut runner = Self {
            game,
            console,
            terminal: Terminal::for_view(view),
            options,
            title,
            description,
            has_title,
            seed,
            gate: FrameGate::default(),
            cache_warmup: CACHE_WARMUP_FRAMES,
            run_seeds: Pcg32::seed_from_u64(u64::from(seed)),
            recording: None,
            last_replay: None,
            playback: None,
        };
        if runner.has_title {
            runner.enter_title();
        } else {
            runner.start_run();
            runner.console.session_mut().ticks = 0;
        }
        runner
    }

    /// Animation callback; returns whether a frame ran
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.gate.accept(now_ms) {
            return false;
        }
        self.frame();
        true
    }

    /// Run one frame unconditionally
    pub fn frame(&mut self) {
        self.console.synth_mut().update();
        self.sample_input();
        self.step();
        if self.cache_warmup > 0 {
            self.cache_warmup -= 1;
            if self.cache_warmup == 0 {
                self.console.font_mut().enable_cache();
                log::debug!("Glyph cache enabled");
            }
        }
    }

    pub fn run_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame();
        }
    }

    /// Replay a recorded run from its first frame
    pub fn play_replay(&mut self, replay: Replay) {
        log::info!(
            "Playing replay (seed {}, {} frames)",
            replay.seed,
            replay.len()
        );
        self.playback = Some(Playback::new(replay));
        self.start_run();
        // no end-of-frame increment before the first replayed frame
        self.console.session_mut().ticks = 0;
    }

    pub fn is_playing_replay(&self) -> bool {
        self.playback.is_some()
    }

    fn sample_input(&mut self) {
        let scene = self.console.session().scene;
        let input = self.console.input_mut();
        match (&mut self.playback, scene) {
            (Some(playback), Scene::InGame) => input.apply_snapshot(playback.next_input()),
            _ => input.update(),
        }
    }

    fn step(&mut self) {
        self.console.begin_frame();
        match self.console.session().scene {
            Scene::Title => self.update_title(),
            Scene::InGame => self.update_in_game(),
            Scene::GameOver => self.update_game_over(),
        }
        self.console.session_mut().end_frame();
    }

    // === Scenes ===

    fn enter_title(&mut self) {
        log::info!("Entering title");
        self.console.session_mut().enter(Scene::Title);
        self.terminal.clear();
        self.console.clear_canvas();
    }

    fn update_title(&mut self) {
        let ticks = self.console.session().ticks;
        if ticks == 0 {
            self.draw_score();
            let w = self.terminal.size().x;
            let len = self.title.chars().count() as i32;
            self.terminal
                .print(&self.title, (w - len).div_euclid(2), 3, &TextOptions::default());
            self.draw_terminal();
        }
        if DESCRIPTION_TICKS.contains(&ticks) {
            self.print_description();
            self.draw_terminal();
        }
        if self.console.input().is_just_pressed() {
            self.start_run();
        }
    }

    fn print_description(&mut self) {
        let size = self.terminal.size();
        let width = self
            .description
            .split('\n')
            .map(|l| l.chars().count() as i32)
            .max()
            .unwrap_or(0);
        let x = (size.x - width).div_euclid(2);
        for (i, line) in self.description.split('\n').enumerate() {
            self.terminal
                .print(line, x, size.y / 2 + i as i32, &TextOptions::default());
        }
    }

    fn start_run(&mut self) {
        let session = self.console.session_mut();
        let prev = session.hi_score;
        if session.start_run() {
            log::info!("New high score: {} (was {prev})", session.hi_score);
        }
        if self.options.is_playing_bgm {
            self.console.synth_mut().play_bgm();
        }
        self.console.reset_draw_state();

        if let Some(playback) = &self.playback {
            self.console.reseed(playback.seed());
        } else if self.options.is_replay_enabled {
            let run_seed = self.run_seeds.next_u32();
            self.console.reseed(run_seed);
            self.recording = Some(Replay::new(run_seed));
        }
        log::info!("Entering game");
    }

    fn update_in_game(&mut self) {
        self.terminal.clear();
        self.console.clear_canvas();
        if let Some(recording) = &mut self.recording {
            recording.record(self.console.input().snapshot());
        }
        self.game.update(&mut self.console);
        self.draw_score();
        if self.console.take_end_request() {
            self.enter_game_over();
        } else {
            self.draw_terminal();
        }
    }

    fn enter_game_over(&mut self) {
        log::info!(
            "Entering game over (score {})",
            self.console.session().score.floor()
        );
        self.console.session_mut().enter(Scene::GameOver);
        self.console.input_mut().clear_just_pressed();
        self.draw_game_over();
        if self.options.is_playing_bgm {
            self.console.synth_mut().stop_bgm();
        }
        if let Some(replay) = self.recording.take() {
            self.last_replay = Some(replay);
        }
        self.playback = None;
    }

    fn update_game_over(&mut self) {
        let ticks = self.console.session().ticks;
        if ticks > GAME_OVER_GRACE_TICKS && self.console.input().is_just_pressed() {
            self.start_run();
        } else if ticks == GAME_OVER_TITLE_TIMEOUT && self.has_title {
            self.enter_title();
        }
        if self.console.session().ticks == GAME_OVER_REDRAW_TICK {
            self.draw_game_over();
        }
    }

    // === Overlay ===

    fn draw_game_over(&mut self) {
        let size = self.terminal.size();
        self.terminal.print(
            "GAME OVER",
            (size.x - 9).div_euclid(2),
            size.y / 2,
            &TextOptions::default(),
        );
        self.draw_terminal();
    }

    fn draw_score(&mut self) {
        let session = self.console.session();
        let score = format!("{}", session.score.floor() as i64);
        let hi = format!("HI {}", session.hi_score);
        let w = self.terminal.size().x;
        let options = TextOptions::default();
        self.terminal.print(&score, 0, 0, &options);
        self.terminal
            .print(&hi, w - hi.chars().count() as i32, 0, &options);
    }

    fn draw_terminal(&mut self) {
        let (canvas, font) = self.console.canvas_and_font();
        self.terminal.draw(canvas, font);
    }

    // === Accessors ===

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Host access for wiring device events into `Input`
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn session(&self) -> &GameSession {
        self.console.session()
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn view_size(&self) -> IVec2 {
        self.console.view_size()
    }

    /// The most recently finished recorded run
    pub fn last_replay(&self) -> Option<&Replay> {
        self.last_replay.as_ref()
    }

    /// RGBA bytes of the current frame for the host to blit
    pub fn frame_rgba(&self) -> Vec<u8> {
        self.console.canvas().to_rgba_bytes(self.options.theme)
    }
}
