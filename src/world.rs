// src/world.rs

// === 標準ライブラリからのインポート ===
use std::collections::HashSet;
use std::fmt;

// === クレートの外からのインポート ===
// tuple_windows で「隣り合う2枚」を順番に見ていくのに使うよ。
use itertools::Itertools;

// === このクレート内のモジュールからのインポート ===
use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::{Pile, StackInfo, StackType};
use crate::config::rules::{DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::{GameError, InvariantViolation};

/// ゲーム世界の全てのカードを持っている中心的な構造体だよ！🌍
///
/// 場札 7列、組札 4つ、山札、捨て札、それとゲーム状態。
/// カードは必ずどれか一つのパイルに入っていて、52枚が増えたり減ったりすることはない。
/// グローバル変数は使わない！ゲームごとにこの World を一つ作って、それを持ち回るよ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct World {
    tableau: [Pile; TABLEAU_COUNT],
    foundations: [Pile; FOUNDATION_COUNT],
    stock: Pile,
    waste: Pile,
    game_state: GameState,
}

impl World {
    /// 新しい空の World を作成するコンストラクタ。
    /// カードが一枚も無いので、このままだとゲームにはならない。
    /// DealInitialCardsSystem でカードを配ってから使ってね。
    pub fn new() -> Self {
        Self::default()
    }

    /// パイルの中身を直接指定して World を作る。
    ///
    /// テストで好きな盤面を作ったり、途中の局面を再現したりするときに使うよ。
    /// 52枚が揃っていない、同じカードが2枚ある、パイルのルールを破っている、
    /// のどれかなら `GameError` を返す。中途半端な World は作らない！
    pub fn from_piles(
        tableau: [Vec<Card>; TABLEAU_COUNT],
        foundations: [Vec<Card>; FOUNDATION_COUNT],
        stock: Vec<Card>,
        waste: Vec<Card>,
    ) -> Result<Self, GameError> {
        let world = Self {
            tableau: tableau.map(Pile::from_cards),
            foundations: foundations.map(Pile::from_cards),
            stock: Pile::from_cards(stock),
            waste: Pile::from_cards(waste),
            game_state: GameState::default(),
        };
        world.check_invariants()?;
        Ok(world)
    }

    // --- パイルへのアクセス ---

    /// StackType に対応するパイルを返す。番号が範囲外なら None。
    pub fn pile(&self, stack_type: StackType) -> Option<&Pile> {
        match stack_type {
            StackType::Tableau(index) => self.tableau.get(usize::from(index)),
            StackType::Foundation(index) => self.foundations.get(usize::from(index)),
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
        }
    }

    /// 移動元と移動先のパイルを同時に可変で借りる。
    /// 同じパイルを指定したら None (自分自身には移動できないからね)。
    pub(crate) fn pile_pair_mut(
        &mut self,
        source: StackType,
        target: StackType,
    ) -> Option<(&mut Pile, &mut Pile)> {
        let Self { tableau, foundations, stock, waste, .. } = self;
        // フィールドごとに分けて借りれば、別々のパイルを同時に可変で持てる
        match (source, target) {
            (StackType::Tableau(a), StackType::Tableau(b)) => {
                pair_in_slice(tableau, usize::from(a), usize::from(b))
            }
            (StackType::Foundation(a), StackType::Foundation(b)) => {
                pair_in_slice(foundations, usize::from(a), usize::from(b))
            }
            (StackType::Tableau(a), StackType::Foundation(b)) => {
                Some((tableau.get_mut(usize::from(a))?, foundations.get_mut(usize::from(b))?))
            }
            (StackType::Foundation(a), StackType::Tableau(b)) => {
                Some((foundations.get_mut(usize::from(a))?, tableau.get_mut(usize::from(b))?))
            }
            (StackType::Waste, StackType::Tableau(b)) => Some((waste, tableau.get_mut(usize::from(b))?)),
            (StackType::Waste, StackType::Foundation(b)) => {
                Some((waste, foundations.get_mut(usize::from(b))?))
            }
            (StackType::Stock, StackType::Waste) => Some((stock, waste)),
            (StackType::Waste, StackType::Stock) => Some((waste, stock)),
            // 山札・捨て札へ場札や組札から戻す手はクロンダイクには無い
            _ => None,
        }
    }

    pub fn tableau(&self, index: usize) -> Option<&Pile> {
        self.tableau.get(index)
    }

    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.foundations.get(index)
    }

    pub fn tableau_piles(&self) -> &[Pile; TABLEAU_COUNT] {
        &self.tableau
    }

    pub fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub(crate) fn stock_and_waste_mut(&mut self) -> (&mut Pile, &mut Pile) {
        (&mut self.stock, &mut self.waste)
    }

    pub(crate) fn tableau_mut(&mut self) -> &mut [Pile; TABLEAU_COUNT] {
        &mut self.tableau
    }

    /// 全てのスタックの種類を決まった順番で列挙する。
    /// 山札 → 捨て札 → 組札 0..3 → 場札 0..6。
    pub fn stack_types() -> impl Iterator<Item = StackType> {
        [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
    }

    /// 全パイルのカード枚数の合計。ちゃんとしたゲームなら常に 52！
    pub fn card_count(&self) -> usize {
        Self::stack_types()
            .filter_map(|stack_type| self.pile(stack_type))
            .map(Pile::len)
            .sum()
    }

    /// 指定したカードが今どこにあるかを探す。🔍
    pub fn locate(&self, suit: Suit, rank: Rank) -> Option<StackInfo> {
        Self::stack_types().find_map(|stack_type| {
            let pile = self.pile(stack_type)?;
            pile.iter()
                .position(|card| card.suit == suit && card.rank == rank)
                .map(|position| StackInfo::new(stack_type, position as u8))
        })
    }

    // --- ゲーム状態 ---

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.game_state.status = status;
    }

    // --- 不変条件のチェック ---

    /// 盤面がクロンダイクのルール通りの形になっているかチェックする。
    ///
    /// - 52枚がちょうど一枚ずつ、どこかのパイルにある
    /// - 場札: 表向きのカードの上に裏向きは無い。一番上は表向き
    /// - 組札: A から始まって、同じスートで1ずつ増える。全部表向き
    /// - 山札は全部裏向き、捨て札は全部表向き
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let actual = self.card_count();
        if actual != DECK_SIZE {
            return Err(InvariantViolation::CardCount { expected: DECK_SIZE, actual });
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for stack_type in Self::stack_types() {
            for card in self.pile(stack_type).into_iter().flatten() {
                if !seen.insert(card.identity()) {
                    return Err(InvariantViolation::DuplicateCard { suit: card.suit, rank: card.rank });
                }
            }
        }

        for (index, pile) in self.tableau.iter().enumerate() {
            let stack = StackType::Tableau(index as u8);
            if let Some(position) = pile
                .iter()
                .tuple_windows()
                .position(|(lower, upper)| lower.is_face_up && !upper.is_face_up)
            {
                return Err(InvariantViolation::FaceDownAboveFaceUp { stack, position: position + 1 });
            }
            if pile.top().is_some_and(|card| !card.is_face_up) {
                return Err(InvariantViolation::TopCardFaceDown { stack });
            }
        }

        for (index, pile) in self.foundations.iter().enumerate() {
            let stack = StackType::Foundation(index as u8);
            if let Some(position) = pile.iter().position(|card| !card.is_face_up) {
                return Err(InvariantViolation::WrongOrientation { stack, position });
            }
            if pile.get(0).is_some_and(|card| card.rank != Rank::Ace) {
                return Err(InvariantViolation::FoundationOutOfOrder { stack, position: 0 });
            }
            if let Some(position) = pile
                .iter()
                .tuple_windows()
                .position(|(lower, upper)| upper.suit != lower.suit || lower.rank.next() != Some(upper.rank))
            {
                return Err(InvariantViolation::FoundationOutOfOrder { stack, position: position + 1 });
            }
        }

        if let Some(position) = self.stock.iter().position(|card| card.is_face_up) {
            return Err(InvariantViolation::WrongOrientation { stack: StackType::Stock, position });
        }
        if let Some(position) = self.waste.iter().position(|card| !card.is_face_up) {
            return Err(InvariantViolation::WrongOrientation { stack: StackType::Waste, position });
        }

        Ok(())
    }

    /// debug ビルドのときだけ不変条件をチェックして、破れていたら panic する。
    /// 手を動かした直後に毎回呼ぶよ。
    pub(crate) fn debug_assert_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violation) = self.check_invariants() {
                panic!("board invariant violated: {}\n{}", violation, self);
            }
        }
    }
}

fn pair_in_slice(piles: &mut [Pile], a: usize, b: usize) -> Option<(&mut Pile, &mut Pile)> {
    if a == b || a >= piles.len() || b >= piles.len() {
        return None;
    }
    if a < b {
        let (low, high) = piles.split_at_mut(b);
        Some((&mut low[a], &mut high[0]))
    } else {
        let (low, high) = piles.split_at_mut(a);
        Some((&mut high[0], &mut low[b]))
    }
}

impl fmt::Display for World {
    /// ログ用のテキスト表示。
    ///
    /// ```text
    /// Stock: [7♣] [2♥] ...
    /// Waste: A♠ 5♦
    /// Foundation(0): A♥ 2♥
    /// Tableau(0): [K♣] 9♥
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stack_type in Self::stack_types() {
            if let Some(pile) = self.pile(stack_type) {
                writeln!(f, "{}: {}", stack_type, pile.iter().join(" "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
