// src/system.rs

// これまで作った World を使うからインポートするよ。
use crate::world::World;

/// System（システム）トレイトだよ！
///
/// システムは、ゲームのロジック（ルールや振る舞い）を実行して World を更新する役割を持つんだ。
/// 配る、動かす、山札をめくる、勝ちを判定する、みたいに一つの関心事ごとに一つのシステム。
///
/// `run` は一回呼んだら最後まで走り切る。途中で止まったり、裏で何かが動き続けたりはしない。
/// 何が起きたかは `Output` で呼び出し元に返すよ (ログやテストで使える！)。
pub trait System {
    /// このシステムを一回実行した結果の型。
    type Output;

    /// このシステムを実行するよ！
    ///
    /// # 引数
    /// - `world`: ゲーム世界のデータを保持する World への可変参照。
    fn run(&mut self, world: &mut World) -> Self::Output;
}
