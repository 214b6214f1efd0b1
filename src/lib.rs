// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod system;
pub mod systems;
pub mod world;

#[cfg(test)]
mod test_support;

// よく使う型はここから直接使えるようにしておく
pub use crate::app::{GameApp, WasmGame};
pub use crate::components::{Card, GameStatus, Rank, Suit};
pub use crate::config::GameConfig;
pub use crate::error::{GameError, InvariantViolation};
pub use crate::protocol::{EntityRef, GameStateData, MoveOutcome, StackType};
pub use crate::world::World;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックしたらブラウザのコンソールにちゃんと出るようにする。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
