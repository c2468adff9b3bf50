//! WASM bindings for in-browser play

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{Iocaine, IocaineConfig, Move, RoundResult, Strategy};

/// One game against Iocaine, driven round by round from JavaScript
#[wasm_bindgen]
pub struct IocaineSession {
    bot: Iocaine,
    results: Vec<RoundResult>,
}

#[wasm_bindgen]
impl IocaineSession {
    /// Start a session from a JSON configuration (see [`IocaineConfig`]).
    /// An empty string uses the classic table and a zero seed.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<IocaineSession, JsError> {
        let config = if config_json.trim().is_empty() {
            IocaineConfig::default()
        } else {
            IocaineConfig::from_json(config_json)
                .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?
        };
        Ok(Self { bot: Iocaine::new(&config), results: Vec::new() })
    }

    /// Our move for this round. Pass the opponent's previous move, or
    /// `undefined` on the first round.
    #[wasm_bindgen(js_name = nextMove)]
    pub fn next_move(&mut self, opponent: Option<u32>) -> Result<u32, JsError> {
        let observed = opponent.map(|m| Move(m as usize));
        if let (Some(theirs), Some(&ours)) = (observed, self.bot.history().mine().last()) {
            if self.bot.table().check(theirs).is_ok() {
                self.results.push(RoundResult::scored(self.bot.table(), ours, theirs));
            }
        }
        let mv = self.bot.next_move(observed).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(mv.index() as u32)
    }

    /// Display name of a move index
    #[wasm_bindgen(js_name = moveName)]
    pub fn move_name(&self, mv: u32) -> Option<String> {
        self.bot.move_name(Move(mv as usize)).map(str::to_string)
    }

    /// Names of all moves, in index order
    #[wasm_bindgen(js_name = moveNames)]
    pub fn move_names(&self) -> js_sys::Array {
        self.bot
            .table()
            .moves()
            .filter_map(|mv| self.bot.move_name(mv))
            .map(JsValue::from_str)
            .collect()
    }

    /// Rounds scored so far, as an array of `{own, opponent, score}`
    pub fn results(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.results)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// End the game: report the results and start over
    pub fn finish(&mut self) -> Result<JsValue, JsError> {
        let results = self.results()?;
        self.bot.finish(&self.results);
        self.results.clear();
        Ok(results)
    }
}
