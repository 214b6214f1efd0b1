// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{debug, info};

use crate::app::event_handler::{self, Activation};
use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::protocol::{EntityRef, GameStateData, MoveOutcome, StackType};
use crate::system::System;
use crate::systems::{DealInitialCardsSystem, MoveCardSystem, StockSystem, WinConditionSystem};
use crate::world::World;

/// ゲーム全体のアプリケーション状態を管理する構造体だよ！
///
/// 一つのゲームにつき一つ作って、入力が来るたびに `activate` を呼ぶ。
/// 状態は全部この中の World にあって、グローバルな状態は持たない。
#[derive(Debug, Clone, PartialEq)]
pub struct GameApp {
    world: World,
}

impl GameApp {
    /// 新しいゲームを始めるよ！デッキを作ってシャッフルして配る。
    pub fn new_game(config: &GameConfig) -> Self {
        info!("GameApp: 新しいゲームを初期化中... (seed: {:?})", config.seed);
        let mut world = World::new();
        DealInitialCardsSystem::shuffled(config.seed).run(&mut world);
        info!("GameApp: 初期化完了。");
        Self { world }
    }

    /// シード付きでゲームを始める。同じシードなら同じ配り方。
    pub fn with_seed(seed: u64) -> Self {
        Self::new_game(&GameConfig::with_seed(seed))
    }

    /// 並び順が決まったデッキを、シャッフルせずにそのまま配る。
    pub fn from_deck(deck: Vec<Card>) -> Result<Self, GameError> {
        let mut world = World::new();
        DealInitialCardsSystem::with_deck(deck)?.run(&mut world);
        Ok(Self { world })
    }

    /// 組み立て済みの盤面から始める。
    /// 52枚揃っていない、パイルのルールを破っている盤面ならエラー！
    pub fn from_world(world: World) -> Result<Self, GameError> {
        world.check_invariants()?;
        Ok(Self { world })
    }

    /// 入力側から「これが押された」と届いたときの処理。
    ///
    /// 1. EntityRef を行動に読み替える (event_handler)
    /// 2. 山札なら StockSystem、カードなら MoveCardSystem を走らせる
    /// 3. 盤面が変わったら勝利判定
    ///
    /// ルール上動かせないのはエラーじゃないので、`MoveOutcome::NoMove` が返るだけ。
    pub fn activate(&mut self, target: EntityRef) -> MoveOutcome {
        if self.is_won() {
            debug!("GameApp: もう勝っているので {:?} は無視するよ。", target);
            return MoveOutcome::NoMove;
        }

        let outcome = match event_handler::resolve_activation(&self.world, target) {
            Activation::Stock => StockSystem::new().run(&mut self.world),
            Activation::MoveCard(source) => MoveCardSystem::auto(source).run(&mut self.world),
            Activation::Ignore => MoveOutcome::NoMove,
        };

        if outcome.changed_board() && WinConditionSystem::new().run(&mut self.world) {
            info!("GameApp: 🏆 クリア！おめでとう！");
        }
        outcome
    }

    /// そのカードを今クリックしたら動かせる場所を、優先順位の順番で全部返す。
    /// 山札や、動かせないカードなら空っぽ。
    pub fn destinations_for(&self, target: EntityRef) -> Vec<StackType> {
        match event_handler::resolve_activation(&self.world, target) {
            Activation::MoveCard(source) => crate::logic::auto_move::candidate_destinations(&self.world, source),
            Activation::Stock | Activation::Ignore => Vec::new(),
        }
    }

    /// 今の盤面のスナップショット。描画側はこれを見て描く。
    pub fn snapshot(&self) -> GameStateData {
        GameStateData::from_world(&self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_won(&self) -> bool {
        self.world.status() == GameStatus::Won
    }

    pub fn status(&self) -> GameStatus {
        self.world.status()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit, ALL_RANKS};
    use crate::error::InvariantViolation;
    use crate::logic::deck::create_standard_deck;
    use crate::test_support::{down, up, LayoutBuilder};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn app_from(world: World) -> GameApp {
        GameApp::from_world(world).expect("valid layout")
    }

    fn assert_deck_integrity(app: &GameApp) {
        let snapshot = app.snapshot();
        assert_eq!(snapshot.card_count(), 52);
        let unique: HashSet<_> = World::stack_types()
            .flat_map(|stack_type| app.world().pile(stack_type).into_iter().flatten())
            .map(Card::identity)
            .collect();
        assert_eq!(unique.len(), 52, "カードが重複しているか、なくなっている");
        assert_eq!(app.world().check_invariants(), Ok(()));
    }

    #[test]
    fn test_new_game_is_dealt_and_playing() {
        let app = GameApp::with_seed(7);
        assert_eq!(app.status(), GameStatus::Playing);
        assert!(!app.is_won());
        assert_eq!(app.snapshot().stock.len(), 24);
        assert_deck_integrity(&app);
        assert_eq!(app, GameApp::new_game(&GameConfig::with_seed(7)));
    }

    #[test]
    fn test_from_deck_rejects_short_deck() {
        let mut deck = create_standard_deck();
        deck.pop();
        assert_eq!(
            GameApp::from_deck(deck).err(),
            Some(GameError::InvalidDeckSize { expected: 52, actual: 51 })
        );
    }

    #[test]
    fn test_from_world_rejects_incomplete_board() {
        assert_eq!(
            GameApp::from_world(World::new()).err(),
            Some(GameError::InvalidLayout(InvariantViolation::CardCount { expected: 52, actual: 0 }))
        );
        assert!(GameApp::from_world(World::default()).is_err());

        // 検証済みの盤面はそのまま使える
        let world = LayoutBuilder::new().build();
        let app = GameApp::from_world(world.clone()).expect("valid layout");
        assert_eq!(app.world(), &world);
    }

    #[test]
    fn test_stock_activation_draws_then_recycles() {
        let mut app = app_from(
            LayoutBuilder::new()
                .tableau(0, &[up(Suit::Spade, Rank::King)])
                .build(),
        );
        let stock_size = app.world().stock().len();

        for _ in 0..stock_size {
            assert!(matches!(app.activate(EntityRef::Stock), MoveOutcome::DrewFromStock { .. }));
        }
        assert_eq!(app.activate(EntityRef::Stock), MoveOutcome::RecycledWaste { count: stock_size });
        assert_deck_integrity(&app);
    }

    #[test]
    fn test_activate_waste_card_moves_to_foundation() {
        let mut app = app_from(
            LayoutBuilder::new()
                .waste(&[up(Suit::Heart, Rank::Ace)])
                .build(),
        );

        let outcome = app.activate(EntityRef::Waste);

        assert_eq!(outcome, MoveOutcome::Moved { from: StackType::Waste, to: StackType::Foundation(0), count: 1 });
        assert!(app.world().waste().is_empty());
    }

    #[test]
    fn test_illegal_activation_is_a_silent_no_op() {
        let mut app = app_from(
            LayoutBuilder::new()
                .tableau(0, &[down(Suit::Club, Rank::Nine), up(Suit::Diamond, Rank::Five)])
                .build(),
        );
        let before = app.clone();

        assert_eq!(app.activate(EntityRef::card(Suit::Diamond, Rank::Five)), MoveOutcome::NoMove);
        assert_eq!(app.activate(EntityRef::card(Suit::Club, Rank::Nine)), MoveOutcome::NoMove);
        assert_eq!(app, before);
    }

    #[test]
    fn test_run_atomicity_through_activate() {
        let mut app = app_from(
            LayoutBuilder::new()
                .tableau(0, &[
                    down(Suit::Heart, Rank::Two),
                    up(Suit::Club, Rank::Nine),
                    up(Suit::Diamond, Rank::Eight),
                    up(Suit::Spade, Rank::Seven),
                ])
                .tableau(3, &[up(Suit::Heart, Rank::Ten)])
                .build(),
        );

        let outcome = app.activate(EntityRef::card(Suit::Club, Rank::Nine));

        assert_eq!(outcome, MoveOutcome::Moved { from: StackType::Tableau(0), to: StackType::Tableau(3), count: 3 });
        let snapshot = app.snapshot();
        assert_eq!(
            snapshot.tableau[3],
            vec![
                up(Suit::Heart, Rank::Ten),
                up(Suit::Club, Rank::Nine),
                up(Suit::Diamond, Rank::Eight),
                up(Suit::Spade, Rank::Seven),
            ]
        );
        assert_eq!(snapshot.tableau[0], vec![up(Suit::Heart, Rank::Two)]);
    }

    #[test]
    fn test_last_card_to_foundation_wins() {
        let foundations = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade].map(|suit| {
            ALL_RANKS
                .iter()
                .filter(|&&rank| !(suit == Suit::Spade && rank == Rank::King))
                .map(|&rank| up(suit, rank))
                .collect::<Vec<_>>()
        });
        let mut builder = LayoutBuilder::new().tableau(5, &[up(Suit::Spade, Rank::King)]);
        builder.foundations = foundations;
        let mut app = app_from(builder.build());
        assert!(!app.is_won());

        let outcome = app.activate(EntityRef::card(Suit::Spade, Rank::King));

        assert_eq!(outcome, MoveOutcome::Moved { from: StackType::Tableau(5), to: StackType::Foundation(3), count: 1 });
        assert!(app.is_won());
        assert_eq!(app.status(), GameStatus::Won);
        // 勝った後は何も動かない
        assert_eq!(app.activate(EntityRef::Stock), MoveOutcome::NoMove);
    }

    #[test]
    fn test_destinations_for_lists_candidates_in_order() {
        let app = app_from(
            LayoutBuilder::new()
                .foundation(1, &[up(Suit::Club, Rank::Ace)])
                .tableau(2, &[up(Suit::Heart, Rank::Three)])
                .tableau(4, &[up(Suit::Club, Rank::Two)])
                .build(),
        );

        assert_eq!(
            app.destinations_for(EntityRef::card(Suit::Club, Rank::Two)),
            vec![StackType::Foundation(1), StackType::Tableau(2)]
        );
        assert!(app.destinations_for(EntityRef::Stock).is_empty());
    }

    #[test]
    fn test_deck_integrity_after_random_activations() {
        let mut rng = StdRng::seed_from_u64(2024);
        let all_cards = create_standard_deck();
        for seed in 0..20 {
            let mut app = GameApp::with_seed(seed);
            for _ in 0..300 {
                let target = if rng.gen_bool(0.3) {
                    EntityRef::Stock
                } else {
                    let card = all_cards.choose(&mut rng).expect("non-empty deck");
                    EntityRef::card(card.suit, card.rank)
                };
                app.activate(target);
                assert_deck_integrity(&app);
            }
        }
    }
}
