//! Safety Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlInputElement,
        HtmlTextAreaElement,
    };

    use safety_catch::consts::*;
    use safety_catch::input::{HeldKeys, TouchDirection};
    use safety_catch::renderer;
    use safety_catch::sim::{GameState, RunPhase, TickInput, tick};
    use safety_catch::{Leaderboard, ScoreRecord};

    /// How often the touch-hold interval nudges the player (ms)
    const TOUCH_NUDGE_MS: i32 = 16;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        ctx: CanvasRenderingContext2d,
        held: HeldKeys,
        touch: Option<TouchDirection>,
        /// Live `setInterval` handle while a touch button is held
        touch_interval: Option<i32>,
        /// Callback the touch interval fires; built once, reused per press
        touch_tick: Option<js_sys::Function>,
        input: TickInput,
        board: Leaderboard,
        last_time: f64,
        last_phase: RunPhase,
    }

    impl Game {
        fn new(seed: u64, ctx: CanvasRenderingContext2d) -> Self {
            Self {
                state: GameState::new(seed),
                ctx,
                held: HeldKeys::new(),
                touch: None,
                touch_interval: None,
                touch_tick: None,
                input: TickInput::default(),
                board: Leaderboard::load(),
                last_time: 0.0,
                last_phase: RunPhase::Idle,
            }
        }

        /// Run one frame of simulation and painting
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (((time - self.last_time) / FRAME_MS) as f32).min(MAX_DT)
            } else {
                1.0
            };
            self.last_time = time;

            // Held keys are the only movement the tick sees; touch-hold
            // movement goes through its own interval (`nudge_player`),
            // and folding it in here would apply it twice.
            self.input.direction = self.held.direction();

            tick(&mut self.state, &self.input, dt, time);

            // Clear one-shot inputs after processing
            self.input.start = false;
            self.input.pause = false;

            renderer::draw(&self.ctx, &self.state);

            let phase = self.state.phase;
            if phase != self.last_phase {
                self.sync_overlay_dom(phase);
                self.last_phase = phase;
            }
        }

        /// Show the save form only on the game-over screen
        fn sync_overlay_dom(&self, phase: RunPhase) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(form) = document.get_element_by_id("save-form") {
                let class = if phase == RunPhase::GameOver {
                    ""
                } else {
                    "hidden"
                };
                let _ = form.set_attribute("class", class);
            }
        }
    }

    /// Re-render the leaderboard list after any board mutation
    fn render_board(document: &Document, board: &Leaderboard) {
        let Some(el) = document.get_element_by_id("leaderboard") else {
            return;
        };
        if board.is_empty() {
            el.set_text_content(Some("No scores saved yet"));
            return;
        }
        let lines: Vec<String> = board
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{}. {} ({}) - {}", i + 1, r.name, r.dept, r.score))
            .collect();
        el.set_text_content(Some(&lines.join("\n")));
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Safety Catch starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed logical size, scaled for high-DPI displays
        let dpr = window.device_pixel_ratio();
        canvas.set_width((CANVAS_WIDTH as f64 * dpr) as u32);
        canvas.set_height((CANVAS_HEIGHT as f64 * dpr) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");
        let _ = ctx.scale(dpr, dpr);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, ctx)));
        log::info!("Game initialized with seed: {}", seed);

        render_board(&document, &game.borrow().board);

        setup_keyboard(game.clone());
        install_touch_tick(game.clone());
        setup_touch_button(game.clone(), "btn-left", TouchDirection::Left);
        setup_touch_button(game.clone(), "btn-right", TouchDirection::Right);
        setup_board_controls(game.clone());

        request_animation_frame(game);

        log::info!("Safety Catch running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key().to_lowercase();
                if matches!(key.as_str(), "arrowleft" | "arrowright" | " ") {
                    event.prevent_default();
                }
                let mut g = game.borrow_mut();
                match key.as_str() {
                    " " | "enter" => g.input.start = true,
                    "p" => g.input.pause = true,
                    _ => g.held.set(&key, true),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key().to_lowercase();
                game.borrow_mut().held.set(&key, false);
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Build the callback the touch-hold interval fires and stash it on
    /// the game. The interval itself starts on button press and is
    /// cleared on release; only the callback outlives presses.
    fn install_touch_tick(game: Rc<RefCell<Game>>) {
        let closure = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                if let Some(direction) = g.touch {
                    g.state.nudge_player(direction.signum());
                }
            })
        };
        game.borrow_mut().touch_tick =
            Some(closure.as_ref().unchecked_ref::<js_sys::Function>().clone());
        closure.forget();
    }

    /// Wire one on-screen direction button. Press sets a persistent
    /// direction signal and starts a fixed short interval, independent
    /// of the render loop, that nudges the player each firing; release
    /// clears both the direction and the interval.
    fn setup_touch_button(game: Rc<RefCell<Game>>, id: &str, direction: TouchDirection) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(button) = document.get_element_by_id(id) else {
            log::warn!("Touch button #{id} not found");
            return;
        };

        for press_event in ["touchstart", "mousedown"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                g.touch = Some(direction);
                if g.touch_interval.is_none()
                    && let Some(tick_fn) = g.touch_tick.clone()
                    && let Some(window) = web_sys::window()
                {
                    g.touch_interval = window
                        .set_interval_with_callback_and_timeout_and_arguments_0(
                            &tick_fn,
                            TOUCH_NUDGE_MS,
                        )
                        .ok();
                }
            });
            let _ = button
                .add_event_listener_with_callback(press_event, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for release_event in ["touchend", "touchcancel", "mouseup", "mouseleave"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                g.touch = None;
                if let Some(handle) = g.touch_interval.take()
                    && let Some(window) = web_sys::window()
                {
                    window.clear_interval_with_handle(handle);
                }
            });
            let _ = button
                .add_event_listener_with_callback(release_event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_board_controls(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Save score (game-over only)
        if let Some(btn) = document.get_element_by_id("save-score") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                let mut g = game.borrow_mut();
                if g.state.phase != RunPhase::GameOver {
                    return;
                }

                let name = input_value(&document, "player-name");
                let dept = input_value(&document, "player-dept");
                let date_iso = String::from(js_sys::Date::new_0().to_iso_string());

                match ScoreRecord::validated(&name, &dept, g.state.score, date_iso) {
                    Ok(record) => {
                        g.board.save(record);
                        render_board(&document, &g.board);
                    }
                    Err(e) => alert(&e.to_string()),
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Export to the shared textarea
        if let Some(btn) = document.get_element_by_id("export-board") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(area) = text_area(&document, "board-io") {
                    area.set_value(&game.borrow().board.export());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Import from the shared textarea
        if let Some(btn) = document.get_element_by_id("import-board") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                let Some(area) = text_area(&document, "board-io") else {
                    return;
                };
                let mut g = game.borrow_mut();
                match g.board.import(&area.value()) {
                    Ok(count) => {
                        render_board(&document, &g.board);
                        alert(&format!("Imported {count} record(s)"));
                    }
                    Err(e) => alert(&e.to_string()),
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Clear, behind a blocking confirmation
        if let Some(btn) = document.get_element_by_id("clear-board") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let window = web_sys::window().unwrap();
                let confirmed = window
                    .confirm_with_message("Clear all saved scores? This cannot be undone.")
                    .unwrap_or(false);
                if !confirmed {
                    return;
                }
                let document = window.document().unwrap();
                let mut g = game.borrow_mut();
                g.board.clear();
                render_board(&document, &g.board);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn input_value(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn text_area(document: &Document, id: &str) -> Option<HtmlTextAreaElement> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Safety Catch (native) starting...");
    log::info!("Run with `trunk serve` for the browser version");

    // Headless smoke run
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use safety_catch::consts::FRAME_MS;
    use safety_catch::sim::{GameState, RunPhase, TickInput, tick};

    let mut state = GameState::new(0xC0FFEE);
    state.start(0.0);

    let mut frames = 0u32;
    while state.phase == RunPhase::Running && frames < 60 * 60 {
        // Sweep back and forth so the paddle meets some items
        let direction = if (frames / 90) % 2 == 0 { 1.0 } else { -1.0 };
        let input = TickInput {
            direction,
            ..Default::default()
        };
        tick(&mut state, &input, 1.0, frames as f64 * FRAME_MS);
        frames += 1;
    }

    println!(
        "Smoke run: {} frames, score {}, difficulty {:.2}, phase {:?}",
        frames, state.score, state.difficulty, state.phase
    );
}
