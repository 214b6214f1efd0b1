// src/logic/deck.rs

use std::collections::HashSet;

use itertools::iproduct;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;
use crate::error::GameError;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// スートとランクの組み合わせを全部作るよ。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
/// 画像があるかどうかなんて関係ない。デッキは常に52枚！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    deck.extend(iproduct!(ALL_SUITS, ALL_RANKS).map(|(suit, rank)| Card::new(suit, rank)));
    deck
}

/// カードデッキをシャッフルする関数だよ。
///
/// 乱数生成器は呼び出し側から渡してもらう。シード付きの `StdRng` を渡せば、
/// 毎回同じ順番になるからテストしやすい！
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シードがあればそれを使って、無ければ OS の乱数から `StdRng` を作る。
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// デッキが「ちょうど52枚、重複なし」かチェックする。
/// 外から渡されたデッキで配る前に必ず通すよ。
pub fn validate_deck(deck: &[Card]) -> Result<(), GameError> {
    if deck.len() != DECK_SIZE {
        return Err(GameError::InvalidDeckSize { expected: DECK_SIZE, actual: deck.len() });
    }
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    match deck.iter().find(|card| !seen.insert(card.identity())) {
        Some(card) => Err(GameError::DuplicateCard { suit: card.suit, rank: card.rank }),
        None => Ok(()),
    }
}
