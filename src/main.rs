//! Surf Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use surf_dash::Settings;
    use surf_dash::consts::*;
    use surf_dash::renderer::CanvasRenderer;
    use surf_dash::sim::{GameState, TickInput, Viewport, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        settings: Settings,
        input: TickInput,
        accumulator: f64,
        last_time: f64,
        /// Loop stops rescheduling itself at game over; restart resumes it
        halted: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, viewport: Viewport) -> Self {
            Self {
                state: GameState::new(seed, viewport),
                renderer: None,
                settings: Settings::load(),
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                halted: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks for the elapsed frame time
        fn update(&mut self, dt_ms: f64, time: f64, viewport: Viewport) {
            self.accumulator += dt_ms.min(100.0);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input, viewport, SIM_DT_MS);
                self.accumulator -= SIM_DT_MS;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.jump = false;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&self, viewport: Viewport) {
            if let Some(ref renderer) = self.renderer {
                if let Err(e) = renderer.render(&self.state, viewport, &self.settings) {
                    log::warn!("Render error: {:?}", e);
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&(self.state.score.max(0.0) as u32).to_string()));
            }
            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }

        /// Discard everything and start a fresh run
        fn restart(&mut self, seed: u64, viewport: Viewport) {
            self.state = GameState::new(seed, viewport);
            self.input = TickInput::default();
            self.accumulator = 0.0;
            self.last_time = 0.0;
            log::info!("Game restarted with seed: {}", seed);
        }
    }

    /// Current viewport, read from the canvas backing size each frame
    fn viewport_of(canvas: &HtmlCanvasElement) -> Viewport {
        Viewport {
            width: canvas.width() as f32,
            height: canvas.height() as f32,
        }
    }

    /// Match the canvas backing size to the window
    fn resize_canvas(canvas: &HtmlCanvasElement) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Surf Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        resize_canvas(&canvas);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(seed, viewport_of(&canvas));
        game.renderer = Some(CanvasRenderer::new(ctx));
        let game = Rc::new(RefCell::new(game));

        log::info!("Game initialized with seed: {}", seed);

        setup_resize_handler(canvas.clone());
        setup_input_handlers(canvas.clone(), game.clone());

        request_animation_frame(canvas, game);

        log::info!("Surf Dash running!");
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            resize_canvas(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keydown: held direction flags, one-shot jump, restart
        {
            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = true,
                    "ArrowRight" => g.input.right = true,
                    " " => {
                        if !event.repeat() {
                            g.input.jump = true;
                        }
                    }
                    "r" | "R" => {
                        if g.state.is_over() {
                            let seed = js_sys::Date::now() as u64;
                            g.restart(seed, viewport_of(&canvas));
                            if g.halted {
                                g.halted = false;
                                drop(g);
                                request_animation_frame(canvas.clone(), game.clone());
                            }
                        }
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup: release held directions
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = false,
                    "ArrowRight" => g.input.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(canvas, game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt_ms = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                SIM_DT_MS
            };
            g.last_time = time;

            let viewport = viewport_of(&canvas);
            g.update(dt_ms, time, viewport);
            g.render(viewport);
            g.update_hud();

            // Terminal state: draw the overlay, then stop rescheduling until
            // an explicit restart
            if g.state.is_over() {
                g.halted = true;
                log::info!("Game over, final score: {}", g.state.score.max(0.0) as u32);
                return;
            }
        }

        request_animation_frame(canvas, game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use surf_dash::consts::SIM_DT_MS;
    use surf_dash::sim::{GameState, TickInput, Viewport, tick};

    env_logger::init();
    log::info!("Surf Dash (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the real game");

    let viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let mut state = GameState::new(seed, viewport);

    // Scripted demo: carve right, hop every 1.5 seconds
    let max_ticks = 60 * 60;
    for n in 0..max_ticks {
        let input = TickInput {
            left: false,
            right: true,
            jump: n % 90 == 0,
        };
        tick(&mut state, &input, viewport, SIM_DT_MS);

        if state.is_over() {
            break;
        }
        if n % 600 == 0 {
            log::info!(
                "tick {}: score {}, difficulty {}, {} duckies afloat",
                n,
                state.score as u32,
                state.difficulty,
                state.duckies.len()
            );
        }
    }

    log::info!(
        "Demo finished after {} ticks: score {}, difficulty {}, dodged {}, game over: {}",
        state.time_ticks,
        state.score as u32,
        state.difficulty,
        state.dodged,
        state.is_over()
    );
}
