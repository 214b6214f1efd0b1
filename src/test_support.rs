// src/test_support.rs
//! テスト用のヘルパー関数たち。好きな盤面を手早く組み立てるのに使うよ。

use std::collections::HashSet;

use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::Pile;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::logic::deck::create_standard_deck;
use crate::world::World;

/// 表向きのカード。
pub fn up(suit: Suit, rank: Rank) -> Card {
    Card::face_up(suit, rank)
}

/// 裏向きのカード。
pub fn down(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// カードを並べたパイル。
pub fn pile(cards: &[Card]) -> Pile {
    Pile::from_cards(cards.to_vec())
}

/// `used` に入っていない残りのカードを、裏向きで標準の順番に返す。
pub fn remaining_cards(used: &[&Card]) -> Vec<Card> {
    let used: HashSet<_> = used.iter().map(|card| card.identity()).collect();
    create_standard_deck()
        .into_iter()
        .filter(|card| !used.contains(&card.identity()))
        .collect()
}

/// 盤面の組み立て役。指定していないカードは全部山札に裏向きで入れる。
/// `leftovers_to_tableau` を指定すると、山札じゃなくてその場札の一番下に
/// 表向きで積む (山札を空にしたいテスト用)。
#[derive(Default)]
pub struct LayoutBuilder {
    pub tableau: [Vec<Card>; TABLEAU_COUNT],
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub leftovers_to_tableau: Option<usize>,
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tableau(mut self, index: usize, cards: &[Card]) -> Self {
        self.tableau[index] = cards.to_vec();
        self
    }

    pub fn foundation(mut self, index: usize, cards: &[Card]) -> Self {
        self.foundations[index] = cards.to_vec();
        self
    }

    pub fn stock(mut self, cards: &[Card]) -> Self {
        self.stock = cards.to_vec();
        self
    }

    pub fn waste(mut self, cards: &[Card]) -> Self {
        self.waste = cards.to_vec();
        self
    }

    pub fn leftovers_to_tableau(mut self, index: usize) -> Self {
        self.leftovers_to_tableau = Some(index);
        self
    }

    pub fn build(mut self) -> World {
        let used: Vec<&Card> = self
            .tableau
            .iter()
            .chain(self.foundations.iter())
            .chain([&self.stock, &self.waste])
            .flatten()
            .collect();
        let leftovers = remaining_cards(&used);
        match self.leftovers_to_tableau {
            Some(index) => {
                let mut column: Vec<Card> = leftovers
                    .into_iter()
                    .map(|card| Card::face_up(card.suit, card.rank))
                    .collect();
                column.append(&mut self.tableau[index]);
                self.tableau[index] = column;
            }
            None => {
                let mut stock = leftovers;
                stock.append(&mut self.stock);
                self.stock = stock;
            }
        }
        World::from_piles(self.tableau, self.foundations, self.stock, self.waste)
            .expect("test layout should be valid")
    }
}

/// 4つの組札に 13 枚ずつ揃った、勝ちの盤面。
pub fn won_world() -> World {
    let foundations = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade].map(|suit| {
        crate::components::card::ALL_RANKS
            .iter()
            .map(|&rank| up(suit, rank))
            .collect::<Vec<_>>()
    });
    World::from_piles(Default::default(), foundations, Vec::new(), Vec::new())
        .expect("complete foundations are a valid layout")
}
