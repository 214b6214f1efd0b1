// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod game_state;
pub mod stack;

// よく使う型はここから直接 use できるようにしておく。
pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::{GameState, GameStatus};
pub use stack::{Pile, StackInfo, StackType};
