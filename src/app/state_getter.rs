//! Gets the current game state from the World and converts it to JSON.

use log::{debug, error};

use crate::protocol::GameStateData;
use crate::world::World;

/// ワールドの状態を取得し、JSON 文字列として返します。
pub fn get_world_state_json(world: &World) -> Result<String, serde_json::Error> {
    let game_state_data = GameStateData::from_world(world);
    debug!("Collected data for {} cards.", game_state_data.card_count());

    serde_json::to_string(&game_state_data).map_err(|e| {
        error!("Failed to serialize game state: {}", e);
        e
    })
}
