// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//! 「どのカードを」「どこへ」の組み合わせが、クロンダイクで許される手かどうか。

use log::debug;

use crate::components::stack::{StackInfo, StackType};
use crate::logic::rules::{foundation, tableau};
use crate::world::World;

/// `source` の位置にあるカード (と、その上に乗っているカード全部) を
/// `target_stack` に移動できるか検証する。
///
/// - 裏向きのカードは動かせない
/// - 捨て札から動かせるのは一番上の1枚だけ
/// - 組札に行けるのは、場札・捨て札の一番上の1枚だけ (列ごとは無理)
/// - 自分自身のパイルや、山札・捨て札への移動はダメ
pub fn is_move_valid(world: &World, source: StackInfo, target_stack: StackType) -> bool {
    let Some(source_pile) = world.pile(source.stack_type) else {
        debug!("[Rules Validation] Unknown source stack {}", source.stack_type);
        return false;
    };
    let position = usize::from(source.position_in_stack);
    let Some(card) = source_pile.get(position) else {
        debug!("[Rules Validation] No card at {} position {}", source.stack_type, position);
        return false;
    };
    if !card.is_face_up {
        debug!("[Rules Validation] {} is face-down and cannot move", card);
        return false;
    }
    if source.stack_type == target_stack {
        return false;
    }

    let is_top = position + 1 == source_pile.len();
    match source.stack_type {
        StackType::Tableau(_) => {}
        StackType::Waste if is_top => {}
        _ => {
            debug!("[Rules Validation] Moving from {} position {} is not allowed.", source.stack_type, position);
            return false;
        }
    }

    let Some(target_pile) = world.pile(target_stack) else {
        return false;
    };
    match target_stack {
        StackType::Foundation(_) => is_top && foundation::can_move_to_foundation(card, target_pile),
        StackType::Tableau(_) => tableau::can_move_to_tableau(card, target_pile),
        StackType::Stock | StackType::Waste => {
            debug!("[Rules Validation] Moving to {} is not allowed.", target_stack);
            false
        }
    }
}
