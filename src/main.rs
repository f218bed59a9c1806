//! Pirate Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use pirate_dash::consts::TICK_DT;
    use pirate_dash::hud::DomScoreBoard;
    use pirate_dash::render::CanvasSurface;
    use pirate_dash::sim::{Field, PressOutcome};
    use pirate_dash::{Game, LoopControl, Tuning};

    /// Everything the frame callback and the input listeners share
    struct App {
        game: Game,
        surface: CanvasSurface,
        board: DomScoreBoard,
        last_time: f64,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Pirate Dash starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Size once from the viewport
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let tuning = load_tuning(&canvas);
        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(seed, Field::new(width as f32, height as f32), tuning);

        let mut board = DomScoreBoard::new(
            document
                .get_element_by_id("scoreBoard")
                .ok_or("no score board")?,
        );
        game.start(&mut board);

        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(&canvas)?,
            board,
            last_time: 0.0,
        }));

        setup_input_handlers(&window, app.clone())?;

        // Start game loop
        request_animation_frame(app);

        log::info!("Pirate Dash running!");
        Ok(())
    }

    /// Optional JSON overrides in the canvas `data-tuning` attribute
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        let Some(json) = canvas.get_attribute("data-tuning") else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning: {:?}", tuning);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring data-tuning ({}), using defaults", e);
                Tuning::default()
            }
        }
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Mouse
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                handle_press(&app);
            });
            window.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                handle_press(&app);
            });
            window.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn handle_press(app: &Rc<RefCell<App>>) {
        let outcome = app.borrow_mut().game.press();
        if outcome != PressOutcome::RestartRequested {
            return;
        }
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("Reload failed: {:?}", e);
            }
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let control = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;

            // Calculate delta time
            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                TICK_DT
            };
            a.last_time = time;

            a.game.frame(dt, &mut a.surface, &mut a.board)
        };

        match control {
            LoopControl::Continue => request_animation_frame(app),
            LoopControl::Stop => log::info!("Game loop stopped"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pirate_dash::consts::TICK_DT;
    use pirate_dash::hud::ScoreLog;
    use pirate_dash::render::Recorder;
    use pirate_dash::sim::{Field, autopilot};
    use pirate_dash::{Game, LoopControl, Tuning};

    /// Two minutes of play at 60 Hz
    const HEADLESS_FRAMES: u32 = 60 * 120;

    env_logger::init();
    log::info!("Pirate Dash (native) starting...");
    log::info!("Native mode runs headless with the autopilot - serve index.html with `trunk serve` to play");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut game = Game::new(seed, Field::new(800.0, 600.0), Tuning::default());
    let mut surface = Recorder::new();
    let mut board = ScoreLog::default();
    game.start(&mut board);

    let mut frames = 0;
    let mut draw_calls = 0;
    while frames < HEADLESS_FRAMES {
        if autopilot::wants_jump(game.state()) {
            game.press();
        }
        surface.clear();
        let control = game.frame(TICK_DT, &mut surface, &mut board);
        draw_calls += surface.commands.len();
        frames += 1;
        if control == LoopControl::Stop {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "{} frames, {} draw calls/frame, speed {:.2}",
        frames,
        draw_calls / frames as usize,
        state.speed
    );
    println!(
        "seed {}: {} ({:?})",
        seed,
        board.last().unwrap_or_default(),
        state.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
