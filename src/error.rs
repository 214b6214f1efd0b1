// src/error.rs
//! ゲームを組み立てるときのエラーと、盤面のルール違反 (不変条件違反) の型だよ。
//!
//! 不正な手は「エラー」じゃない！ `activate` が `MoveOutcome::NoMove` を返すだけ。
//! ここにあるのは「そもそもゲームとして成り立たない入力」と「バグ」の方。

use std::error::Error;
use std::fmt;

use crate::components::card::{Rank, Suit};
use crate::components::stack::StackType;

/// ゲームの構築に失敗したときのエラー。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// デッキの枚数が 52 枚じゃない。
    InvalidDeckSize { expected: usize, actual: usize },
    /// 同じカードが2枚入っている。
    DuplicateCard { suit: Suit, rank: Rank },
    /// 渡された盤面がパイルのルールを破っている。
    InvalidLayout(InvariantViolation),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidDeckSize { expected, actual } => {
                write!(f, "deck must contain {} cards, got {}", expected, actual)
            }
            GameError::DuplicateCard { suit, rank } => {
                write!(f, "duplicate card in deck: {:?} of {:?}", rank, suit)
            }
            GameError::InvalidLayout(violation) => write!(f, "invalid layout: {}", violation),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::InvalidLayout(violation) => Some(violation),
            _ => None,
        }
    }
}

impl From<InvariantViolation> for GameError {
    fn from(violation: InvariantViolation) -> Self {
        GameError::InvalidLayout(violation)
    }
}

/// 盤面の不変条件が破れている、という報告。
/// 実行中にこれが出たらプログラムのバグなので、debug ビルドでは panic させる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// 全パイルのカード合計が 52 枚じゃない。
    CardCount { expected: usize, actual: usize },
    /// 同じカードが2か所にある。
    DuplicateCard { suit: Suit, rank: Rank },
    /// 場札で、表向きのカードの上に裏向きのカードがある。
    FaceDownAboveFaceUp { stack: StackType, position: usize },
    /// 場札の一番上が裏向きのまま。
    TopCardFaceDown { stack: StackType },
    /// 組札の並びが A から同じスートで1ずつ増えていない。
    FoundationOutOfOrder { stack: StackType, position: usize },
    /// 山札に表向き、または捨て札・組札に裏向きのカードがある。
    WrongOrientation { stack: StackType, position: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::CardCount { expected, actual } => {
                write!(f, "expected {} cards across all piles, found {}", expected, actual)
            }
            InvariantViolation::DuplicateCard { suit, rank } => {
                write!(f, "{:?} of {:?} appears more than once", rank, suit)
            }
            InvariantViolation::FaceDownAboveFaceUp { stack, position } => {
                write!(f, "{}: face-down card at {} sits above a face-up card", stack, position)
            }
            InvariantViolation::TopCardFaceDown { stack } => {
                write!(f, "{}: top card is face-down", stack)
            }
            InvariantViolation::FoundationOutOfOrder { stack, position } => {
                write!(f, "{}: card at {} breaks the ascending same-suit order", stack, position)
            }
            InvariantViolation::WrongOrientation { stack, position } => {
                write!(f, "{}: card at {} has the wrong orientation", stack, position)
            }
        }
    }
}

impl Error for InvariantViolation {}
