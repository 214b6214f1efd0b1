//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;
use super::common::is_next_rank;

/// 指定されたカードが、ある組札 (Foundation) の一番上に置けるかチェックする。
///
/// - 組札が空なら、置けるのは A だけ。
/// - 空じゃなければ、一番上と同じスートで、ランクがちょうど1つ上のカードだけ。
pub fn can_move_to_foundation(card: &Card, foundation: &Pile) -> bool {
    let result = match foundation.top() {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && is_next_rank(top.rank, card.rank),
    };
    debug!(
        "[Foundation Rule] {} onto {} -> {}",
        card,
        foundation.top().map_or_else(|| "empty".to_string(), |top| top.to_string()),
        result
    );
    result
}
