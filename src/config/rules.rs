// src/config/rules.rs
//! クロンダイクのルールに関する定数を定義するよ！
//! パイルの数とか、デッキの枚数とか。

pub const TABLEAU_COUNT: usize = 7; // 場札の列数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数 (スートの数と同じ)
pub const CARDS_PER_SUIT: usize = 13; // 1スートあたりの枚数 (A から K)
pub const DECK_SIZE: usize = FOUNDATION_COUNT * CARDS_PER_SUIT; // 52枚

// 場札には 1 + 2 + ... + 7 = 28 枚配るので、山札には残りの 24 枚
pub const INITIAL_TABLEAU_CARDS: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;
pub const INITIAL_STOCK_SIZE: usize = DECK_SIZE - INITIAL_TABLEAU_CARDS;
