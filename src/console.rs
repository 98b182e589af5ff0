//! Drawing + collision facade
//!
//! `Console` is the frame context a game's `update` receives. Every draw call
//! rasterizes into the canvas, asks the hitbox registry what it overlaps and
//! then registers itself, so a shape only collides with what was drawn
//! before it in the same frame.
//!
//! Rectangles drawn in `Color::Transparent` are invisible colliders: they are
//! queried but neither drawn nor registered.

use glam::IVec2;

use crate::args::{
    self, Arg, BarSpec, DEFAULT_BAR_ANGLE, DEFAULT_BAR_CENTER_RATIO, DrawError, LineSpec,
};
use crate::audio::{SilentSynth, SoundEffect, Synth};
use crate::canvas::Canvas;
use crate::collision::{Collision, HitBox, HitBoxRegistry, HitTag, IRect};
use crate::color::Color;
use crate::consts::{
    LETTER_SIZE, LINE_SAMPLES_MAX, LINE_SAMPLES_MIN, LINE_THICKNESS_MAX, LINE_THICKNESS_MIN,
};
use crate::font::{Font, TextOptions};
use crate::game::GameSession;
use crate::geom::{Vector, VectorLike, clamp};
use crate::input::Input;
use crate::random::Random;

pub struct Console {
    canvas: Canvas,
    registry: HitBoxRegistry,
    font: Font,
    color: Color,
    random: Random,
    input: Input,
    synth: Box<dyn Synth>,
    session: GameSession,
    is_end_requested: bool,
}

impl Console {
    /// Silent console with a seeded RNG
    pub fn new(view_size: IVec2, seed: u32) -> Self {
        Self::with_synth(view_size, seed, Box::new(SilentSynth::default()))
    }

    pub fn with_synth(view_size: IVec2, seed: u32, synth: Box<dyn Synth>) -> Self {
        Self {
            canvas: Canvas::new(view_size.x, view_size.y),
            registry: HitBoxRegistry::new(),
            font: Font::new(),
            color: Color::Black,
            random: Random::with_seed(seed),
            input: Input::new(),
            synth,
            session: GameSession::new(),
            is_end_requested: false,
        }
    }

    // === Drawing ===

    /// Set the color used by subsequent shapes and text
    pub fn color(&mut self, color: Color) {
        self.color = color;
    }

    /// `color` by palette name (`"red"`, `"dark_blue"`, ...)
    pub fn color_named(&mut self, name: &str) -> Result<(), DrawError> {
        self.color = name.parse()?;
        Ok(())
    }

    pub fn current_color(&self) -> Color {
        self.color
    }

    /// Rectangle anchored at its top-left corner
    pub fn rect(&mut self, pos: impl VectorLike, width: f32, height: f32) -> Collision {
        self.add_rect(false, pos.x(), pos.y(), width, height, false)
    }

    pub fn rect_xy(&mut self, x: f32, y: f32, width: f32, height: f32) -> Collision {
        self.add_rect(false, x, y, width, height, false)
    }

    /// Rectangle anchored at its center
    pub fn box_(&mut self, pos: impl VectorLike, width: f32, height: f32) -> Collision {
        self.add_rect(true, pos.x(), pos.y(), width, height, false)
    }

    pub fn box_xy(&mut self, x: f32, y: f32, width: f32, height: f32) -> Collision {
        self.add_rect(true, x, y, width, height, false)
    }

    /// Thick segment from `p1` to `p2`
    pub fn line(&mut self, p1: impl VectorLike, p2: impl VectorLike, thickness: f32) -> Collision {
        self.draw_line_spec(LineSpec {
            from: Vector::from_like(p1),
            to: Vector::from_like(p2),
            thickness,
        })
    }

    pub fn line_xy(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32) -> Collision {
        self.line((x1, y1), (x2, y2), thickness)
    }

    /// Segment of `length` rotated by `angle`, placed so that the point at
    /// `center_ratio` along it sits on `center`
    pub fn bar(
        &mut self,
        center: impl VectorLike,
        length: f32,
        thickness: f32,
        angle: f32,
        center_ratio: f32,
    ) -> Collision {
        self.draw_bar_spec(BarSpec {
            center: Vector::from_like(center),
            length,
            thickness,
            angle,
            center_ratio,
        })
    }

    /// `bar` with the default angle and center ratio
    pub fn bar_default(&mut self, center: impl VectorLike, length: f32, thickness: f32) -> Collision {
        self.bar(
            center,
            length,
            thickness,
            DEFAULT_BAR_ANGLE,
            DEFAULT_BAR_CENTER_RATIO,
        )
    }

    /// Built-in glyphs, centered on `pos`, in the current color
    pub fn text(&mut self, s: &str, pos: impl VectorLike) -> Collision {
        let options = TextOptions::with_color(self.color);
        self.letters(false, s, pos.x(), pos.y(), options)
    }

    pub fn text_with(&mut self, s: &str, pos: impl VectorLike, options: TextOptions) -> Collision {
        self.letters(false, s, pos.x(), pos.y(), options)
    }

    /// Custom characters, centered on `pos`, in the current color
    pub fn char(&mut self, s: &str, pos: impl VectorLike) -> Collision {
        let options = TextOptions::with_color(self.color);
        self.letters(true, s, pos.x(), pos.y(), options)
    }

    pub fn char_with(&mut self, s: &str, pos: impl VectorLike, options: TextOptions) -> Collision {
        self.letters(true, s, pos.x(), pos.y(), options)
    }

    // === Untyped entry points ===

    pub fn rect_args(&mut self, args: &[Arg]) -> Result<Collision, DrawError> {
        let r = args::parse_rect("rect", args)?;
        Ok(self.add_rect(false, r.pos.x, r.pos.y, r.size.x, r.size.y, false))
    }

    pub fn box_args(&mut self, args: &[Arg]) -> Result<Collision, DrawError> {
        let r = args::parse_rect("box", args)?;
        Ok(self.add_rect(true, r.pos.x, r.pos.y, r.size.x, r.size.y, false))
    }

    pub fn line_args(&mut self, args: &[Arg]) -> Result<Collision, DrawError> {
        let spec = args::parse_line(args)?;
        Ok(self.draw_line_spec(spec))
    }

    pub fn bar_args(&mut self, args: &[Arg]) -> Result<Collision, DrawError> {
        let spec = args::parse_bar(args)?;
        Ok(self.draw_bar_spec(spec))
    }

    pub fn text_args(&mut self, s: &str, args: &[Arg]) -> Result<Collision, DrawError> {
        let p = args::parse_point("text", args)?;
        Ok(self.text(s, p))
    }

    pub fn char_args(&mut self, s: &str, args: &[Arg]) -> Result<Collision, DrawError> {
        let p = args::parse_point("char", args)?;
        Ok(self.char(s, p))
    }

    // === Primitives ===

    fn add_rect(
        &mut self,
        is_centered: bool,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        to_batch: bool,
    ) -> Collision {
        let pos = if is_centered {
            IVec2::new((x - width / 2.0).floor() as i32, (y - height / 2.0).floor() as i32)
        } else {
            IVec2::new(x.floor() as i32, y.floor() as i32)
        };
        let rect = IRect {
            pos,
            size: IVec2::new(width.floor() as i32, height.floor() as i32),
        };
        let collision = self.registry.query(&rect);
        if !self.color.is_transparent() {
            self.registry
                .register(HitBox::new(rect, HitTag::Rect(self.color)), to_batch);
            self.canvas.fill_rect(&rect, self.color);
        }
        collision
    }

    fn draw_line_spec(&mut self, spec: LineSpec) -> Collision {
        let mut delta = spec.to;
        delta.sub(spec.from);
        self.draw_line(spec.from, delta, spec.thickness)
    }

    fn draw_bar_spec(&mut self, spec: BarSpec) -> Collision {
        let mut l = Vector::new(spec.length, 0.0);
        l.rotate(spec.angle);
        let mut p = spec.center;
        p.sub_xy(l.x * spec.center_ratio, l.y * spec.center_ratio);
        self.draw_line(p, l, spec.thickness)
    }

    /// Sample `delta` into evenly spaced squares starting at `from`, both
    /// endpoints included. Segments are batched and become visible to
    /// queries only once the whole line is drawn.
    fn draw_line(&mut self, from: Vector, mut delta: Vector, thickness: f32) -> Collision {
        let t = clamp(thickness, LINE_THICKNESS_MIN, LINE_THICKNESS_MAX).floor();
        let major = delta.x.abs().max(delta.y.abs());
        let samples = clamp(
            (major / t).ceil() + 1.0,
            LINE_SAMPLES_MIN as f32,
            LINE_SAMPLES_MAX as f32,
        ) as u32;
        delta.div((samples - 1) as f32);

        let mut p = from;
        let mut collision = Collision::default();
        for _ in 0..samples {
            collision.merge(self.add_rect(true, p.x, p.y, t, t, true));
            p.add(delta);
        }
        self.registry.flush_batch();
        collision
    }

    fn letters(
        &mut self,
        is_character: bool,
        s: &str,
        x: f32,
        y: f32,
        options: TextOptions,
    ) -> Collision {
        let half = LETTER_SIZE as f32 / 2.0;
        let pos = IVec2::new((x - half).floor() as i32, (y - half).floor() as i32);
        let options = TextOptions {
            is_character,
            ..options
        };
        if options.color.is_transparent() {
            log::trace!("transparent text {s:?} skipped");
        }
        let registry = &mut self.registry;
        let mut collision = Collision::default();
        self.font
            .print(&mut self.canvas, s, pos, &options, |hit_box| {
                collision.merge(registry.query(&hit_box.rect));
                registry.register(hit_box, false);
            });
        collision
    }

    // === Game API ===

    /// Frames since the current scene started (0 on the first frame)
    pub fn ticks(&self) -> i32 {
        self.session.ticks
    }

    pub fn score(&self) -> f32 {
        self.session.score
    }

    pub fn add_score(&mut self, value: f32) {
        self.session.score += value;
    }

    pub fn difficulty(&self) -> f32 {
        self.session.difficulty
    }

    /// Request game over; takes effect once the current `update` returns
    pub fn end(&mut self) {
        self.is_end_requested = true;
    }

    pub fn play(&mut self, effect: SoundEffect) {
        self.synth.play(effect);
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    /// Float in `[0, high)`
    pub fn rnd(&mut self, high: f32) -> f32 {
        self.random.get(high)
    }

    pub fn rnd_range(&mut self, low: f32, high: f32) -> f32 {
        self.random.get_range(low, high)
    }

    /// Integer in `[0, high)`
    pub fn rndi(&mut self, high: i32) -> i32 {
        self.random.get_int(high)
    }

    pub fn rndi_range(&mut self, low: i32, high: i32) -> i32 {
        self.random.get_int_range(low, high)
    }

    /// -1 or 1
    pub fn rnd_pm(&mut self) -> i32 {
        self.random.get_plus_or_minus()
    }

    pub fn view_size(&self) -> IVec2 {
        self.canvas.size()
    }

    // === Runner plumbing ===

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn registry(&self) -> &HitBoxRegistry {
        &self.registry
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    pub fn synth_mut(&mut self) -> &mut dyn Synth {
        self.synth.as_mut()
    }

    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.font
    }

    /// Canvas and font together, for overlays drawn outside the facade
    pub fn canvas_and_font(&mut self) -> (&mut Canvas, &mut Font) {
        (&mut self.canvas, &mut self.font)
    }

    pub fn reseed(&mut self, seed: u32) {
        self.random.set_seed(seed);
    }

    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
    }

    /// Start-of-frame reset: empty registry, difficulty from the tick count
    pub fn begin_frame(&mut self) {
        self.registry.clear();
        self.session.begin_frame();
    }

    /// Reset per-run drawing state before a game's first frame
    pub fn reset_draw_state(&mut self) {
        self.color = Color::Black;
    }

    pub fn take_end_request(&mut self) -> bool {
        std::mem::take(&mut self.is_end_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::vec;
    use Arg::{Num as N, Vec as V};

    fn console() -> Console {
        Console::new(IVec2::new(100, 100), 1)
    }

    #[test]
    fn test_transparent_box_sees_red() {
        let mut c = console();
        c.color(Color::Red);
        assert!(c.box_(vec(0.0, 0.0), 10.0, 10.0).is_empty());
        c.color(Color::Transparent);
        let hit = c.box_(vec(0.0, 0.0), 2.0, 2.0);
        assert!(hit.rect.contains(Color::Red));
        // invisible colliders are not registered
        assert_eq!(c.registry().len(), 1);
    }

    #[test]
    fn test_rect_floors_and_fills() {
        let mut c = console();
        c.color(Color::Blue);
        c.rect(vec(1.7, 2.2), 3.9, 2.5);
        let hb = c.registry().hit_boxes()[0];
        assert_eq!(hb.rect, IRect::new(1, 2, 3, 2));
        assert_eq!(c.canvas().pixel(1, 2), Some(Color::Blue));
        assert_eq!(c.canvas().pixel(4, 2), Some(Color::Transparent));
    }

    #[test]
    fn test_box_is_centered() {
        let mut c = console();
        c.box_xy(50.0, 50.0, 10.0, 6.0);
        assert_eq!(c.registry().hit_boxes()[0].rect, IRect::new(45, 47, 10, 6));
    }

    #[test]
    fn test_touching_rects_do_not_collide() {
        let mut c = console();
        c.rect_xy(0.0, 0.0, 10.0, 10.0);
        assert!(c.rect_xy(10.0, 0.0, 10.0, 10.0).is_empty());
        assert!(!c.rect_xy(9.0, 9.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn test_line_sample_count() {
        let mut c = console();
        c.line_xy(0.0, 50.0, 30.0, 50.0, 3.0);
        // ceil(30 / 3) + 1
        assert_eq!(c.registry().len(), 11);

        c.begin_frame();
        c.line_xy(0.0, 0.0, 1.0, 0.0, 3.0);
        assert_eq!(c.registry().len(), 3);

        c.begin_frame();
        c.line_xy(0.0, 0.0, 1000.0, 0.0, 3.0);
        assert_eq!(c.registry().len(), 99);
    }

    #[test]
    fn test_line_thickness_is_clamped() {
        let mut c = console();
        c.line_xy(50.0, 50.0, 50.0, 50.0, 1.0);
        assert!(c.registry().hit_boxes().iter().all(|h| h.rect.size == IVec2::splat(3)));
        c.begin_frame();
        c.line_xy(50.0, 50.0, 50.0, 50.0, 25.0);
        assert!(c.registry().hit_boxes().iter().all(|h| h.rect.size == IVec2::splat(10)));
    }

    #[test]
    fn test_line_segments_do_not_collide_with_each_other() {
        let mut c = console();
        c.color(Color::Green);
        let hit = c.line_xy(10.0, 10.0, 20.0, 10.0, 5.0);
        assert!(hit.is_empty());
        assert_eq!(c.registry().pending_len(), 0);
        // visible after the flush
        assert!(c.box_xy(15.0, 10.0, 2.0, 2.0).rect.contains(Color::Green));
    }

    #[test]
    fn test_bar_endpoints() {
        let mut c = console();
        // horizontal bar of length 20 centered on (50, 50)
        c.bar(vec(50.0, 50.0), 20.0, 4.0, 0.0, 0.5);
        let xs: Vec<i32> = c.registry().hit_boxes().iter().map(|h| h.rect.pos.x).collect();
        assert_eq!(xs.first(), Some(&38));
        assert_eq!(xs.last(), Some(&58));
    }

    #[test]
    fn test_text_registers_glyph_hitboxes() {
        let mut c = console();
        let hit = c.text("I", vec(50.0, 50.0));
        assert!(hit.is_empty());
        assert_eq!(c.registry().len(), 1);
        assert_eq!(c.registry().hit_boxes()[0].tag, HitTag::Text('I'));

        c.color(Color::Transparent);
        let probe = c.box_xy(50.0, 50.0, 1.0, 1.0);
        assert!(probe.text.contains(&'I'));
    }

    #[test]
    fn test_char_requires_definition() {
        let mut c = console();
        assert!(c.char("a", vec(10.0, 10.0)).is_empty());
        assert!(c.registry().is_empty());
        c.font_mut().define_characters(&["\nll\nll\n"], 'a');
        c.char("a", vec(10.0, 10.0));
        assert_eq!(c.registry().hit_boxes()[0].tag, HitTag::Char('a'));
    }

    #[test]
    fn test_args_shapes() {
        let mut c = console();
        assert!(c.rect_args(&[N(0.0), N(0.0), N(5.0), N(5.0)]).is_ok());
        assert!(c.box_args(&[V(vec(1.0, 1.0)), N(2.0), N(2.0)]).is_ok());
        assert!(c.line_args(&[V(vec(0.0, 0.0)), V(vec(9.0, 9.0))]).is_ok());
        assert!(c.bar_args(&[N(5.0), N(5.0), N(10.0), N(3.0)]).is_ok());
        assert!(c.text_args("A", &[N(5.0), N(5.0)]).is_ok());

        let err = c.rect_args(&[N(0.0), V(vec(0.0, 0.0))]).unwrap_err();
        assert_eq!(
            err,
            DrawError::InvalidParams {
                op: "rect",
                shape: "num, vec".to_string()
            }
        );
        assert!(c.text_args("A", &[N(5.0)]).is_err());
        assert!(c.color_named("mauve").is_err());
        assert!(c.color_named("cyan").is_ok());
        assert_eq!(c.current_color(), Color::Cyan);
    }

    #[test]
    fn test_end_request_is_taken_once() {
        let mut c = console();
        c.end();
        assert!(c.take_end_request());
        assert!(!c.take_end_request());
    }
}
