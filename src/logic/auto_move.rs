// src/logic/auto_move.rs
//! カードをクリックしたときに「どこへ動かすか」を決めるモジュールだよ！🪄✨
//!
//! 探す順番はいつも同じ:
//! 1. 組札 0 → 1 → 2 → 3
//! 2. 場札 0 → 1 → ... → 6 (移動元の列は飛ばす)
//!
//! 最初に見つかった置き場所が勝ち。

use log::debug;

use crate::components::stack::{StackInfo, StackType};
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::logic::rules;
use crate::world::World;

/// 移動先の候補を、優先順位の順番で全部並べる (ルールはまだ見ない)。
fn destination_order(source: StackInfo) -> impl Iterator<Item = StackType> {
    (0..FOUNDATION_COUNT as u8)
        .map(StackType::Foundation)
        .chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
        .filter(move |&target| target != source.stack_type)
}

/// `source` のカードが実際に移動できる場所を、優先順位の順番で全部返す。
pub fn candidate_destinations(world: &World, source: StackInfo) -> Vec<StackType> {
    destination_order(source)
        .filter(|&target| rules::is_move_valid(world, source, target))
        .collect()
}

/// 自動で移動できる組札を探す。見つからなければ None。
pub fn find_automatic_foundation_move(world: &World, source: StackInfo) -> Option<StackType> {
    let found = (0..FOUNDATION_COUNT as u8)
        .map(StackType::Foundation)
        .find(|&target| rules::is_move_valid(world, source, target));
    debug!("[AutoMove] Foundation move for {:?}: {:?}", source, found);
    found
}

/// 最優先の移動先を一つだけ返す。組札がダメなら場札を探す。
pub fn find_best_destination(world: &World, source: StackInfo) -> Option<StackType> {
    let found = destination_order(source).find(|&target| rules::is_move_valid(world, source, target));
    debug!("[AutoMove] Best destination for {:?}: {:?}", source, found);
    found
}
