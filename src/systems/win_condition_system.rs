// src/systems/win_condition_system.rs
use log::info;

use crate::components::game_state::GameStatus;
use crate::logic::rules::check_win_condition;
use crate::system::System;
use crate::world::World;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 現在の World の状態を見て、勝利条件（4つの組札に13枚ずつ）を
/// 満たしているか判定し、満たしていれば GameState を `Won` に更新するよ。
/// 結果は「今勝っているかどうか」。
#[derive(Debug, Default, Clone, Copy)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    /// 新しい WinConditionSystem を作成するよ。
    pub fn new() -> Self {
        Self
    }
}

impl System for WinConditionSystem {
    type Output = bool;

    fn run(&mut self, world: &mut World) -> bool {
        if world.status() == GameStatus::Won {
            // もう勝ってる。勝ちは取り消されない！
            return true;
        }

        if check_win_condition(world.foundations()) {
            info!("WinConditionSystem: 勝利条件達成！🏆 ゲーム状態を更新します。");
            world.set_status(GameStatus::Won);
            return true;
        }
        false
    }
}
