// src/app/mod.rs
//! GameApp と、その周りのロジックを役割ごとに分割して置くモジュールだよ！

pub mod event_handler;
pub mod game_app;
pub mod state_getter;
pub mod wasm_game;

pub use game_app::GameApp;
pub use wasm_game::WasmGame;
