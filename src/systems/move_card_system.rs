// src/systems/move_card_system.rs

use log::{debug, info, warn};

use crate::components::stack::{StackInfo, StackType};
use crate::logic::{auto_move, rules};
use crate::protocol::MoveOutcome;
use crate::system::System;
use crate::world::World;

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どのカードを (source)」「どこへ (target)」を受け取って、
/// ルール上可能かチェックし、可能なら World の状態を更新するよ。
/// target を指定しなければ、auto_move の優先順位 (組札 → 場札) で自動で探す。
///
/// 動かすのは source のカードと、その上に乗っているカード全部。
/// 捨て札や場札の一番上なら1枚、場札の途中なら列ごとだね。
#[derive(Debug, Clone, Copy)]
pub struct MoveCardSystem {
    source: StackInfo,
    target: Option<StackType>,
}

impl MoveCardSystem {
    /// source のカードを、一番優先度の高い置き場所へ動かすシステム。
    pub fn auto(source: StackInfo) -> Self {
        Self { source, target: None }
    }

    /// source のカードを、指定した target へ動かすシステム。
    #[cfg(test)]
    pub(crate) fn to_target(source: StackInfo, target: StackType) -> Self {
        Self { source, target: Some(target) }
    }

    /// 移動がルール上可能かチェックして、OK なら動かす。
    /// チェックを先に全部済ませてから書き換えるので、中途半端な状態にはならない。
    fn process_move_request(&self, world: &mut World, target: StackType) -> MoveOutcome {
        if !rules::is_move_valid(world, self.source, target) {
            debug!("  ルール違反！{:?} -> {} へは移動できませんでした。🙅‍♀️", self.source, target);
            return MoveOutcome::NoMove;
        }

        match apply_move(world, self.source, target) {
            Some(count) => {
                info!("  {} 枚のカードを {} から {} へ移動しました！", count, self.source.stack_type, target);
                MoveOutcome::Moved { from: self.source.stack_type, to: target, count }
            }
            None => {
                warn!("MoveCardSystem: 検証済みの移動 {:?} -> {} が適用できませんでした", self.source, target);
                MoveOutcome::NoMove
            }
        }
    }
}

impl System for MoveCardSystem {
    type Output = MoveOutcome;

    fn run(&mut self, world: &mut World) -> MoveOutcome {
        let target = match self.target {
            Some(target) => Some(target),
            None => auto_move::find_best_destination(world, self.source),
        };
        let Some(target) = target else {
            debug!("MoveCardSystem: {:?} の移動先が見つかりません。何もしないよ。", self.source);
            return MoveOutcome::NoMove;
        };

        let outcome = self.process_move_request(world, target);
        world.debug_assert_invariants();
        outcome
    }
}

/// 実際に World の状態を更新する関数。検証は済んでいる前提！
///
/// 1. source の位置から上のカードをまとめて取り出す (順番も向きもそのまま)
/// 2. target の上に積む
/// 3. source が場札なら、新しく一番上になったカードを表向きにする
///
/// 動いた枚数を返す。
fn apply_move(world: &mut World, source: StackInfo, target: StackType) -> Option<usize> {
    let (from, to) = world.pile_pair_mut(source.stack_type, target)?;

    let moving = from.split_off(usize::from(source.position_in_stack));
    if moving.is_empty() {
        return None;
    }
    let count = moving.len();
    to.extend(moving);

    if matches!(source.stack_type, StackType::Tableau(_)) && from.reveal_top() {
        if let Some(card) = from.top() {
            info!("    {} の一番上の {} を表向きにしました！", source.stack_type, card);
        }
    }
    Some(count)
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::test_support::{down, up, LayoutBuilder};

    #[test]
    fn test_waste_to_foundation() {
        let mut world = LayoutBuilder::new()
            .waste(&[up(Suit::Club, Rank::Nine), up(Suit::Diamond, Rank::Ace)])
            .build();

        let source = StackInfo::new(StackType::Waste, 1);
        let outcome = MoveCardSystem::auto(source).run(&mut world);

        assert_eq!(outcome, MoveOutcome::Moved { from: StackType::Waste, to: StackType::Foundation(0), count: 1 });
        assert_eq!(world.foundation(0).and_then(|pile| pile.top()), Some(&up(Suit::Diamond, Rank::Ace)));
        // 捨て札の新しい一番上はそのまま表向き
        assert_eq!(world.waste().top(), Some(&up(Suit::Club, Rank::Nine)));
    }

    #[test]
    fn test_tableau_top_to_foundation_reveals_next_card() {
        let mut world = LayoutBuilder::new()
            .foundation(0, &[up(Suit::Spade, Rank::Ace)])
            .tableau(2, &[down(Suit::Heart, Rank::Queen), down(Suit::Club, Rank::Six), up(Suit::Spade, Rank::Two)])
            .build();

        let source = StackInfo::new(StackType::Tableau(2), 2);
        let outcome = MoveCardSystem::auto(source).run(&mut world);

        assert_eq!(outcome, MoveOutcome::Moved { from: StackType::Tableau(2), to: StackType::Foundation(0), count: 1 });
        let pile = world.tableau(2).expect("tableau 2");
        assert_eq!(pile.cards(), &[down(Suit::Heart, Rank::Queen), up(Suit::Club, Rank::Six)]);
    }

    #[test]
    fn test_run_moves_as_a_unit() {
        // 場札 0: [4♣↓, 10♠, 9♥, 8♣]  場札 1: [J♦]
        let mut world = LayoutBuilder::new()
            .tableau(0, &[
                down(Suit::Club, Rank::Four),
                up(Suit::Spade, Rank::Ten),
                up(Suit::Heart, Rank::Nine),
                up(Suit::Club, Rank::Eight),
            ])
            .tableau(1, &[up(Suit::Diamond, Rank::Jack)])
            .build();

        let source = StackInfo::new(StackType::Tableau(0), 1);
        let outcome = MoveCardSystem::auto(source).run(&mut world);

        assert_eq!(outcome, MoveOutcome::Moved { from: StackType::Tableau(0), to: StackType::Tableau(1), count: 3 });
        assert_eq!(
            world.tableau(1).expect("tableau 1").cards(),
            &[
                up(Suit::Diamond, Rank::Jack),
                up(Suit::Spade, Rank::Ten),
                up(Suit::Heart, Rank::Nine),
                up(Suit::Club, Rank::Eight),
            ]
        );
        // 移動元の新しい一番上 (4♣) が表になる
        assert_eq!(world.tableau(0).expect("tableau 0").cards(), &[up(Suit::Club, Rank::Four)]);
    }

    #[test]
    fn test_illegal_run_changes_nothing() {
        // 10♠ の列は J♣ (同じ黒) には乗れない
        let mut world = LayoutBuilder::new()
            .tableau(0, &[
                down(Suit::Club, Rank::Four),
                up(Suit::Spade, Rank::Ten),
                up(Suit::Heart, Rank::Nine),
                up(Suit::Club, Rank::Eight),
            ])
            .tableau(1, &[up(Suit::Club, Rank::Jack)])
            .build();
        let before = world.clone();

        let source = StackInfo::new(StackType::Tableau(0), 1);
        assert_eq!(MoveCardSystem::auto(source).run(&mut world), MoveOutcome::NoMove);
        assert_eq!(
            MoveCardSystem::to_target(source, StackType::Tableau(1)).run(&mut world),
            MoveOutcome::NoMove
        );
        assert_eq!(world, before, "ルール違反の移動で盤面が変わってはいけない");
    }

    #[test]
    fn test_king_run_to_empty_tableau() {
        let mut world = LayoutBuilder::new()
            .tableau(0, &[up(Suit::Heart, Rank::Two)])
            .tableau(1, &[up(Suit::Diamond, Rank::Three)])
            .tableau(2, &[up(Suit::Club, Rank::Four)])
            .tableau(3, &[up(Suit::Spade, Rank::Five)])
            .tableau(4, &[down(Suit::Heart, Rank::Six), up(Suit::Club, Rank::King), up(Suit::Heart, Rank::Queen)])
            .build();

        let source = StackInfo::new(StackType::Tableau(4), 1);
        let outcome = MoveCardSystem::auto(source).run(&mut world);

        // 空いている最初の場札は 5
        assert_eq!(outcome, MoveOutcome::Moved { from: StackType::Tableau(4), to: StackType::Tableau(5), count: 2 });
        assert_eq!(world.tableau(4).expect("tableau 4").cards(), &[up(Suit::Heart, Rank::Six)]);
    }

    #[test]
    fn test_face_down_card_cannot_move() {
        let mut world = LayoutBuilder::new()
            .tableau(0, &[down(Suit::Heart, Rank::King), up(Suit::Spade, Rank::Two)])
            .build();
        let before = world.clone();

        let source = StackInfo::new(StackType::Tableau(0), 0);
        assert_eq!(MoveCardSystem::auto(source).run(&mut world), MoveOutcome::NoMove);
        assert_eq!(world, before);
    }
}
