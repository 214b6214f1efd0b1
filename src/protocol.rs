// src/protocol.rs

// このファイルは、エンジンと外側 (描画・入力を担当する側) の間で
// やり取りするデータの形を定義するよ！💌
// 外側は「何がクリックされたか」を EntityRef で教えてくれて、
// エンジンは「何が起きたか」を MoveOutcome で、「今どうなっているか」を GameStateData で返す。
// JS 側とは JSON でやり取りするので、全部 serde で変換できるようにしてあるよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameStatus;
pub use crate::components::stack::StackType;
use crate::world::World;

/// 入力側が「これがクリックされたよ」と伝えてくるときの参照。
///
/// 座標からどのカードかを割り出す (ヒットテスト) のは入力側の仕事。
/// エンジンは座標のことは何も知らない！
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "kind")]
pub enum EntityRef {
    /// 特定のカード。(スート, ランク) でデッキの中の一枚が決まる。
    Card { suit: Suit, rank: Rank },
    /// 山札の置き場所 (カードが無くてもクリックできる)。
    Stock,
    /// 捨て札の一番上。
    Waste,
}

impl EntityRef {
    pub fn card(suit: Suit, rank: Rank) -> Self {
        EntityRef::Card { suit, rank }
    }
}

/// `activate` の結果。何が起きたか (または何も起きなかったか) を返すよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum MoveOutcome {
    /// 動かせる場所が無かった。エラーじゃないよ！盤面はそのまま。
    NoMove,
    /// 山札から1枚めくって捨て札に置いた。
    DrewFromStock { card: Card },
    /// 空になった山札に、捨て札を全部戻した。
    RecycledWaste { count: usize },
    /// カード (または列) を移動した。`count` は動いた枚数。
    Moved { from: StackType, to: StackType, count: usize },
}

impl MoveOutcome {
    /// 盤面が変わったかどうか。
    pub fn changed_board(&self) -> bool {
        !matches!(self, MoveOutcome::NoMove)
    }
}

/// ゲームの状態全体を表すデータ構造だよ。描画側は毎フレームこれを見て絵を描く。
///
/// どのパイルも「下から上」の順番でカードが並んでいて、最後の要素が一番上。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub status: GameStatus,
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: Vec<Vec<Card>>,
    pub tableau: Vec<Vec<Card>>,
}

impl GameStateData {
    /// World の中身をまるごとコピーしてスナップショットを作る。
    pub fn from_world(world: &World) -> Self {
        Self {
            status: world.status(),
            stock: world.stock().cards().to_vec(),
            waste: world.waste().cards().to_vec(),
            foundations: world.foundations().iter().map(|pile| pile.cards().to_vec()).collect(),
            tableau: world.tableau_piles().iter().map(|pile| pile.cards().to_vec()).collect(),
        }
    }

    /// 全部のカードの枚数 (常に 52 のはず)。
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
    }
}
