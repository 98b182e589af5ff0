//! Pogo Console entry point
//!
//! In the browser this wires the canvas, input events, audio and the
//! animation loop to a `Runner`. Natively it plays both bundled games
//! headless with a scripted button and logs the results.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::Clamped;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, ImageData, KeyboardEvent, MouseEvent,
        TouchEvent,
    };

    use pogo_console::Game;
    use pogo_console::Runner;
    use pogo_console::audio::WebSynth;
    use pogo_console::games::{Jujump, PogoJumper};

    /// Everything the browser callbacks share
    struct App<G: Game> {
        runner: Runner<G>,
        ctx: CanvasRenderingContext2d,
        canvas: HtmlCanvasElement,
    }

    impl<G: Game> App<G> {
        fn sync_pointer_screen(&mut self) {
            let client = Vec2::new(
                self.canvas.client_width() as f32,
                self.canvas.client_height() as f32,
            );
            let view = self.runner.view_size().as_vec2();
            self.runner
                .console_mut()
                .input_mut()
                .pointer
                .set_screen(client, view);
        }

        /// Canvas-relative CSS pixel position of a client point
        fn to_canvas(&self, client_x: i32, client_y: i32) -> (f32, f32) {
            let rect = self.canvas.get_bounding_client_rect();
            (
                client_x as f32 - rect.left() as f32,
                client_y as f32 - rect.top() as f32,
            )
        }

        fn blit(&self) {
            let size = self.runner.view_size();
            let rgba = self.runner.frame_rgba();
            match ImageData::new_with_u8_clamped_array_and_sh(
                Clamped(&rgba[..]),
                size.x as u32,
                size.y as u32,
            ) {
                Ok(image) => {
                    let _ = self.ctx.put_image_data(&image, 0.0, 0.0);
                }
                Err(e) => log::warn!("ImageData error: {:?}", e),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pogo Console starting...");

        let window = web_sys::window().expect("no window");
        let query = window.location().search().unwrap_or_default();
        if query.contains("jujump") {
            start(Jujump::new());
        } else {
            start(PogoJumper::new());
        }
    }

    fn start<G: Game + 'static>(game: G) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let runner = Runner::with_synth(game, Box::new(WebSynth::new()));
        let size = runner.view_size();
        canvas.set_width(size.x as u32);
        canvas.set_height(size.y as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        ctx.set_image_smoothing_enabled(false);

        log::info!(
            "{} ({}x{}, seed {})",
            runner.game().title(),
            size.x,
            size.y,
            runner.seed()
        );

        let app = Rc::new(RefCell::new(App {
            runner,
            ctx,
            canvas: canvas.clone(),
        }));
        app.borrow_mut().sync_pointer_screen();

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Pogo Console running!");
    }

    fn setup_input_handlers<G: Game + 'static>(
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App<G>>>,
    ) {
        let window = web_sys::window().expect("no window");

        // Keyboard: any key is the button
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let mut a = app.borrow_mut();
                a.runner.console_mut().synth_mut().play_empty();
                a.runner.console_mut().input_mut().keyboard.on_key_down();
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: KeyboardEvent| {
                app.borrow_mut()
                    .runner
                    .console_mut()
                    .input_mut()
                    .keyboard
                    .on_key_up();
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.sync_pointer_screen();
                let (x, y) = a.to_canvas(event.client_x(), event.client_y());
                a.runner.console_mut().synth_mut().play_empty();
                a.runner.console_mut().input_mut().pointer.on_down(x, y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let (x, y) = a.to_canvas(event.client_x(), event.client_y());
                a.runner.console_mut().input_mut().pointer.on_move(x, y);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut()
                    .runner
                    .console_mut()
                    .input_mut()
                    .pointer
                    .on_up();
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut a = app.borrow_mut();
                a.sync_pointer_screen();
                a.runner.console_mut().synth_mut().play_empty();
                if let Some(touch) = event.touches().get(0) {
                    let (x, y) = a.to_canvas(touch.client_x(), touch.client_y());
                    a.runner.console_mut().input_mut().pointer.on_down(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut a = app.borrow_mut();
                if let Some(touch) = event.touches().get(0) {
                    let (x, y) = a.to_canvas(touch.client_x(), touch.client_y());
                    a.runner.console_mut().input_mut().pointer.on_move(x, y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut()
                    .runner
                    .console_mut()
                    .input_mut()
                    .pointer
                    .on_up();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame<G: Game + 'static>(app: Rc<RefCell<App<G>>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop<G: Game + 'static>(app: Rc<RefCell<App<G>>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            if a.runner.tick(time) {
                a.blit();
            }
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pogo_console::games::{Jujump, PogoJumper};

    env_logger::init();
    log::info!("Pogo Console (native) starting...");
    log::info!("Browser build: wasm32 target, canvas element with id \"canvas\"");

    play_headless(PogoJumper::new(), 37);
    play_headless(Jujump::new(), 23);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}

/// Play one run tapping every `period` frames, then check its replay
#[cfg(not(target_arch = "wasm32"))]
fn play_headless<G: pogo_console::Game>(game: G, period: usize) {
    use pogo_console::{Runner, Scene};

    const MAX_FRAMES: usize = 20_000;

    let mut runner = Runner::new(game);
    let name = runner.game().title().to_string();

    let mut frames = 0;
    loop {
        let tap = frames % period == 0;
        let input = runner.console_mut().input_mut();
        if tap {
            input.keyboard.on_key_down();
        } else {
            input.keyboard.on_key_up();
        }
        runner.frame();
        frames += 1;
        if runner.session().scene == Scene::GameOver {
            break;
        }
        if frames >= MAX_FRAMES {
            log::warn!("{name}: still running after {MAX_FRAMES} frames");
            return;
        }
    }

    let score = runner.session().score.floor();
    println!("{name}: score {score} after {frames} frames");

    let Some(replay) = runner.last_replay().cloned() else {
        return;
    };
    runner.play_replay(replay);
    for _ in 0..MAX_FRAMES {
        if runner.session().scene != Scene::InGame {
            break;
        }
        runner.frame();
    }
    let replayed = runner.session().score.floor();
    if replayed == score {
        println!("{name}: replay reproduced score {replayed}");
    } else {
        log::error!("{name}: replay diverged ({replayed} vs {score})");
    }
}
