//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::{Card, Rank};

/// 2枚のカードの色が違う (赤と黒) かどうか。
pub fn is_opposite_color(a: &Card, b: &Card) -> bool {
    a.color() != b.color()
}

/// `upper` が `lower` のちょうど次のランクかどうか。
/// K の次は無いので、`lower` が K なら常に false。
pub fn is_next_rank(lower: Rank, upper: Rank) -> bool {
    lower.next() == Some(upper)
}
