pub mod runner;

pub use runner::EngineRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use lexiwalk_engine::{Command, RoundConfig};

thread_local! {
    static RUNNER: RefCell<Option<EngineRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut EngineRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Round not started. Call game_start() first.");
        f(runner)
    })
}

/// Start a round. The start/target pair and session id come from the
/// out-of-scope `/start` route; JS calls this once per round.
#[wasm_bindgen]
pub fn game_start(session_id: &str, player_name: &str, start_word: &str, target_word: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = EngineRunner::start(RoundConfig {
        session_id: session_id.to_string(),
        player_name: player_name.to_string(),
        start_word: start_word.to_string(),
        target_word: target_word.to_string(),
    });

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("lexiwalk: round started");
}

/// Advance the round clock by `dt` seconds.
#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Player commands ----

#[wasm_bindgen]
pub fn game_select_word(word: &str) {
    with_runner(|r| {
        r.push_command(Command::Select {
            word: word.to_string(),
        })
    });
}

#[wasm_bindgen]
pub fn game_revert_to(index: u32, word: &str) {
    with_runner(|r| {
        r.push_command(Command::Revert {
            index: index as usize,
            word: word.to_string(),
        })
    });
}

#[wasm_bindgen]
pub fn game_quit() {
    with_runner(|r| r.push_command(Command::Quit));
}

// ---- Fetch plumbing (JS performs the network requests) ----

/// Drain the `{seq, word}` tags of fetches JS still has to perform.
#[wasm_bindgen]
pub fn get_pending_fetches_json() -> String {
    with_runner(|r| r.take_pending_json())
}

#[wasm_bindgen]
pub fn game_apply_candidates(seq: u64, json: &str) -> bool {
    with_runner(|r| r.apply_candidates_json(seq, json))
}

#[wasm_bindgen]
pub fn game_candidates_failed(seq: u64) -> bool {
    with_runner(|r| r.candidates_failed(seq))
}

#[wasm_bindgen]
pub fn game_apply_similarity(seq: u64, value: f32) -> bool {
    with_runner(|r| r.apply_similarity(seq, value))
}

#[wasm_bindgen]
pub fn game_similarity_failed(seq: u64) -> bool {
    with_runner(|r| r.similarity_failed(seq))
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_session_json() -> String {
    with_runner(|r| r.session_json())
}

#[wasm_bindgen]
pub fn get_layout_json() -> String {
    with_runner(|r| r.layout_json())
}

#[wasm_bindgen]
pub fn get_summary_json() -> String {
    with_runner(|r| r.summary_json())
}
