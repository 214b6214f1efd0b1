// src/components/game_state.rs

// serde を使う宣言！スナップショットにもゲーム状態を載せるよ。
use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
///
/// クロンダイクは一人用なので、負け判定は無し。プレイ中か、勝ったか、だけ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    Playing,
    /// 勝利！🏆 全部の組札に13枚ずつ揃った。
    Won,
}

/// ゲーム状態を保持する構造体。
///
/// 中身はシンプルに GameStatus を持つだけ！
/// WinConditionSystem がこれを見て、勝ったら `Won` に書き換える。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Won
    }
}
