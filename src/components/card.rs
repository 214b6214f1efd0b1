// src/components/card.rs

use std::fmt;

// serde を使う宣言！スナップショットを JSON にして描画側に渡すときに使うよ。
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// - Debug: デバッグ表示用 (`println!("{:?}", suit);`)
/// - Clone, Copy: 簡単にコピーできるように
/// - PartialEq, Eq, Hash: 比較したり HashSet のキーにしたりできるように
/// - Serialize, Deserialize: JSON などに変換できるように
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) もできるようにしてある。
/// 並び順は A < 2 < ... < 10 < J < Q < K で固定。ラップアラウンドはしない！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // J (11 扱い)
    Queen, // Q (12 扱い)
    King,  // K (13 扱い)
}

/// デッキを作るときにループで回すための全スートの配列。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランクの配列 (A から K まで順番通り)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// ランクの数値 (A=1 ... K=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 次のランクを返すよ。K の次は無いので None！
    pub fn next(self) -> Option<Rank> {
        ALL_RANKS.get(self.value() as usize).copied()
    }

    /// 一つ前のランク。A の前は無いので None。
    pub fn prev(self) -> Option<Rank> {
        (self.value() as usize)
            .checked_sub(2)
            .and_then(|index| ALL_RANKS.get(index).copied())
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードの色（赤か黒か）だよ。場札のルール判定で使う！🟥⬛
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Suit {
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }

    fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードそのものを表すよ！🃏
///
/// - `suit` と `rank` はカードの「正体」。ゲーム中に変わることはないし、
///   52枚の中で同じ組み合わせは一枚だけ。
/// - `is_face_up` は表向きか裏向きか。これだけは、今カードを持っているパイルが書き換える。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。デッキを作るときは全部これ！
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表向きのカード。テストで盤面を組むときに便利。
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    /// (スート, ランク) の組。向きを無視してカードを識別したいとき用。
    pub fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    /// `A♠` みたいに表示する。裏向きなら `[A♠]` で囲むよ。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_face_up {
            write!(f, "{}{}", self.rank.label(), self.suit.symbol())
        } else {
            write!(f, "[{}{}]", self.rank.label(), self.suit.symbol())
        }
    }
}
