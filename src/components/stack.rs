// src/components/stack.rs

use std::fmt;

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Deserialize, Serialize};

use crate::components::card::Card;

/// カードが存在する場所の種類を示す Enum だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。4つあって、番号 (0-3) で管理する。
    /// スートは固定しない！最初に置かれた A のスートでその組札のスートが決まるよ。
    Foundation(u8),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Tableau(index) => write!(f, "Tableau({})", index),
            StackType::Foundation(index) => write!(f, "Foundation({})", index),
            StackType::Stock => write!(f, "Stock"),
            StackType::Waste => write!(f, "Waste"),
        }
    }
}

/// カードが今どこにいるか、の情報だよ。
/// そのカードがどのスタックにあって、下から何番目か (0 が一番下) を持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackInfo {
    /// カードが属しているスタックの種類。
    pub stack_type: StackType,
    /// そのスタックの中で、カードが下から何番目に積まれているか (0 が一番下)。
    pub position_in_stack: u8,
}

impl StackInfo {
    /// 新しい StackInfo を作成するヘルパー関数。
    pub fn new(stack_type: StackType, position_in_stack: u8) -> Self {
        Self { stack_type, position_in_stack }
    }
}

/// カードの山 (パイル) そのもの！📚
///
/// 中身はただの `Vec<Card>` で、最後の要素が「一番上」のカード。
/// 場札・組札・山札・捨て札のどれでも同じ入れ物を使って、
/// ルールの違いは `logic::rules` 側で判定するよ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード (無ければ None)。
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// `index` から上のカードをまとめて取り出す (順番はそのまま)。
    /// `index` が範囲外なら空の Vec を返して、パイルは変えない。
    pub fn split_off(&mut self, index: usize) -> Vec<Card> {
        if index >= self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(index)
    }

    /// カードの列をそのまま上に積む。
    pub fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// 中身を全部取り出して、パイルを空にする。
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// 一番上のカードが裏向きなら表にする。表にしたら true。
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up => {
                card.is_face_up = true;
                true
            }
            _ => false,
        }
    }
}

impl<'a> IntoIterator for &'a Pile {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
