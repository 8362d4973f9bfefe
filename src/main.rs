//! Flappy Gates entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use flappy_gates::GameConfig;
    use flappy_gates::consts::*;
    use flappy_gates::renderer::{CanvasSurface, render};
    use flappy_gates::sim::{GameState, InputEvent, frame, handle_input};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        last_time: f64,
    }

    impl Game {
        /// Advance timers and physics, then draw
        fn update(&mut self, time: f64) {
            // Clamp so a backgrounded tab can't fire a burst of spawns
            let dt = if self.last_time > 0.0 {
                (((time - self.last_time) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT)
            } else {
                0.0
            };
            self.last_time = time;

            frame(&mut self.state, dt);
            render(&self.state, &mut self.surface);
            self.log_events();
        }

        fn input(&mut self, input: InputEvent) {
            handle_input(&mut self.state, input);
            self.log_events();
        }

        fn log_events(&mut self) {
            for event in self.state.drain_events() {
                event.log();
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .ok_or("no #board canvas")?
            .dyn_into()?;
        canvas.set_width(BOARD_WIDTH as u32);
        canvas.set_height(BOARD_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            surface: CanvasSurface::new(ctx)?,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy Gates running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Keyboard: Space is the only action key
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    game.borrow_mut().input(InputEvent::Action);
                }
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse press anywhere on the page, translated to board coordinates
        {
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas.get_bounding_client_rect();
                let pos = Vec2::new(
                    (event.client_x() as f64 - rect.left()) as f32,
                    (event.client_y() as f64 - rect.top()) as f32,
                );
                game.borrow_mut().input(InputEvent::Pointer(pos));
            });
            document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().update(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
    }

    log::info!("Flappy Gates starting...");
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Gates (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    match demo_run() {
        Ok(score) => println!("Headless demo finished with score {}", score),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Fly a scripted bird that flaps whenever it sinks below the next gap,
/// until it crashes or a minute of game time passes.
#[cfg(not(target_arch = "wasm32"))]
fn demo_run() -> Result<u32, flappy_gates::ConfigError> {
    use flappy_gates::GameConfig;
    use flappy_gates::sim::{GamePhase, GameState, InputEvent, PipeKind, frame, handle_input};

    const FRAME_DT: f32 = 1.0 / 60.0;

    let mut state = GameState::new(GameConfig::load(), 42)?;
    handle_input(&mut state, InputEvent::Action);

    for _ in 0..60 * 60 {
        let bird = state.player.rect();
        let gap_bottom = state
            .pipes
            .iter()
            .find(|p| p.kind == PipeKind::Bottom && p.right() >= bird.left())
            .map(|p| p.y)
            .unwrap_or(state.config.surface_height * 0.6);
        if bird.bottom() > gap_bottom - 20.0 && state.player.vel_y >= 0.0 {
            handle_input(&mut state, InputEvent::Action);
        }

        frame(&mut state, FRAME_DT);
        for event in state.drain_events() {
            event.log();
        }
        if state.phase != GamePhase::Playing {
            break;
        }
    }

    Ok(state.display_score())
}
