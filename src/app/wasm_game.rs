// src/app/wasm_game.rs
//! JavaScript から GameApp を使うための窓口だよ！
//! やり取りは全部 JSON 文字列。EntityRef / GameConfig を受け取って、
//! MoveOutcome / GameStateData を返す。

use log::info;
use wasm_bindgen::prelude::*;

use crate::app::game_app::GameApp;
use crate::app::state_getter;
use crate::config::GameConfig;
use crate::protocol::EntityRef;

#[wasm_bindgen]
pub struct WasmGame {
    app: GameApp,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config_json` は `{"seed": 42}` みたいな JSON。省略や空文字ならランダムな配り方。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmGame, JsError> {
        Ok(Self::from_config_json(config_json.as_deref().unwrap_or_default())?)
    }

    /// `{"kind":"Card","suit":"Spade","rank":"Ace"}` や `{"kind":"Stock"}` を受け取って、
    /// 何が起きたかを JSON で返す。
    pub fn activate(&mut self, entity_json: &str) -> Result<String, JsError> {
        Ok(self.activate_json(entity_json)?)
    }

    /// そのカードの移動先候補 (StackType の配列) を JSON で返す。
    pub fn destinations(&self, entity_json: &str) -> Result<String, JsError> {
        Ok(self.destinations_json(entity_json)?)
    }

    /// 盤面全体のスナップショットを JSON で返す。
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(state_getter::get_world_state_json(self.app.world())?)
    }

    pub fn is_won(&self) -> bool {
        self.app.is_won()
    }

    /// デバッグ用: 盤面をテキストで。
    pub fn board_text(&self) -> String {
        self.app.world().to_string()
    }
}

// JsError を作るのは wasm の上でしかできないので、
// 中身の処理は serde_json のエラーを返す普通の関数にしておく。
impl WasmGame {
    fn from_config_json(config_json: &str) -> Result<Self, serde_json::Error> {
        let config = GameConfig::from_json(config_json)?;
        info!("WasmGame: new game with {:?}", config);
        Ok(Self { app: GameApp::new_game(&config) })
    }

    fn activate_json(&mut self, entity_json: &str) -> Result<String, serde_json::Error> {
        let target: EntityRef = serde_json::from_str(entity_json)?;
        let outcome = self.app.activate(target);
        serde_json::to_string(&outcome)
    }

    fn destinations_json(&self, entity_json: &str) -> Result<String, serde_json::Error> {
        let target: EntityRef = serde_json::from_str(entity_json)?;
        serde_json::to_string(&self.app.destinations_for(target))
    }
}
