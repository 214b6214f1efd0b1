//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;
use super::common::{is_next_rank, is_opposite_color};

/// 指定されたカードが、ある場札 (Tableau) の一番上に置けるかチェックする。
///
/// 複数枚をまとめて動かすときは、動かす列の一番下のカードを渡してね。
pub fn can_move_to_tableau(card: &Card, pile: &Pile) -> bool {
    match pile.top() {
        Some(top) => {
            let colors_different = is_opposite_color(card, top);
            let rank_is_one_less = is_next_rank(card.rank, top.rank);
            debug!(
                "[Tableau Rule] Moving {} onto {}. Colors different: {}. Rank is one less: {}.",
                card, top, colors_different, rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            let is_king = card.rank == Rank::King;
            debug!("[Tableau Rule] Moving {} onto empty Tableau. Is King: {}.", card, is_king);
            is_king
        }
    }
}
