// src/app/event_handler.rs
//! 入力側から届いた「これが押されたよ」(EntityRef) を、エンジンの行動に読み替えるロジック。

use log::{debug, warn};

use crate::components::stack::{StackInfo, StackType};
use crate::protocol::EntityRef;
use crate::world::World;

/// 一回の activate で何をするか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// 山札をクリックした (めくる / 捨て札を戻す)。
    Stock,
    /// このカード (と、その上の列) を動かしてみる。
    MoveCard(StackInfo),
    /// 何もしない。
    Ignore,
}

/// EntityRef を World の中の具体的な場所に解決する。
///
/// - 山札の置き場所、または山札の中のカード → `Stock`
/// - 捨て札 → 一番上のカードだけが対象。それ以外のカードは無視
/// - 組札のカード → 動かさない
/// - 場札のカード → 表向きなら、そこから上の列ごと動かす
pub fn resolve_activation(world: &World, target: EntityRef) -> Activation {
    match target {
        EntityRef::Stock => Activation::Stock,
        EntityRef::Waste => top_of(world, StackType::Waste).map_or(Activation::Ignore, Activation::MoveCard),
        EntityRef::Card { suit, rank } => {
            let Some(info) = world.locate(suit, rank) else {
                warn!("resolve_activation: {:?} of {:?} is not on the board", rank, suit);
                return Activation::Ignore;
            };
            resolve_card(world, info)
        }
    }
}

fn resolve_card(world: &World, info: StackInfo) -> Activation {
    match info.stack_type {
        StackType::Stock => Activation::Stock,
        StackType::Foundation(_) => {
            debug!("  組札のカードはクリックしても動かないよ。");
            Activation::Ignore
        }
        StackType::Waste if top_of(world, StackType::Waste) != Some(info) => {
            debug!("  捨て札は一番上のカードしか触れないよ。");
            Activation::Ignore
        }
        StackType::Waste | StackType::Tableau(_) => {
            let is_face_up = world
                .pile(info.stack_type)
                .and_then(|pile| pile.get(usize::from(info.position_in_stack)))
                .is_some_and(|card| card.is_face_up);
            if is_face_up {
                Activation::MoveCard(info)
            } else {
                debug!("  裏向きのカードは動かせないよ。");
                Activation::Ignore
            }
        }
    }
}

/// パイルの一番上のカードの場所。空なら None。
fn top_of(world: &World, stack_type: StackType) -> Option<StackInfo> {
    let len = world.pile(stack_type)?.len();
    let position = u8::try_from(len.checked_sub(1)?).ok()?;
    Some(StackInfo::new(stack_type, position))
}
