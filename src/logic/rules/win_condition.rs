//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::stack::Pile;
use crate::config::rules::{CARDS_PER_SUIT, FOUNDATION_COUNT};

/// ゲームのクリア条件（4つの組札が全部13枚ずつ）を判定する。
pub fn check_win_condition(foundations: &[Pile]) -> bool {
    foundations.len() == FOUNDATION_COUNT
        && foundations.iter().all(|pile| pile.len() == CARDS_PER_SUIT)
}
