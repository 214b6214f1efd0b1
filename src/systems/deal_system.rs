// src/systems/deal_system.rs

// === 使うものを宣言するよ！ ===
use log::{info, warn};

use crate::components::card::Card;
use crate::config::rules::{DECK_SIZE, TABLEAU_COUNT};
use crate::error::GameError;
use crate::logic::deck::{create_standard_deck, make_rng, shuffle_deck, validate_deck};
use crate::system::System;
use crate::world::World;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
// 配るデッキは作るときに受け取っておいて、run で一回だけ配る。
#[derive(Debug, Clone)]
pub struct DealInitialCardsSystem {
    deck: Vec<Card>,
}

impl DealInitialCardsSystem {
    /// 新しいデッキを作って、シャッフルしてから配るシステムを作る。
    /// `seed` を渡すと、毎回同じ配り方になるよ🎲
    pub fn shuffled(seed: Option<u64>) -> Self {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, &mut make_rng(seed));
        info!("🃏 デッキ作成完了！ ({}枚, seed: {:?})", deck.len(), seed);
        Self { deck }
    }

    /// 外から渡された並び順のデッキで配るシステムを作る。
    /// 52枚ちょうど・重複なし、じゃなければエラー！
    pub fn with_deck(deck: Vec<Card>) -> Result<Self, GameError> {
        validate_deck(&deck)?;
        // 配る前は全部裏向きにそろえる
        let deck = deck.into_iter().map(|card| Card::new(card.suit, card.rank)).collect();
        Ok(Self { deck })
    }
}

impl System for DealInitialCardsSystem {
    type Output = ();

    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 0. デッキがもう配られていたら何もしない (盤面もそのまま)。
    /// 1. World に残っているカードがあれば全部片付ける (前のゲームの残り)。
    /// 2. デッキの後ろからカードを取り出して、場札に配っていく。
    ///    - 場札 i 列目 (0 始まり) には i+1 枚。一番上の1枚だけ表向き。
    /// 3. 残りの 24 枚はそのままの順番で山札へ、全部裏向き。
    /// 4. 捨て札と組札は空っぽ。
    fn run(&mut self, world: &mut World) {
        if self.deck.len() != DECK_SIZE {
            // 一回配ったらデッキは空っぽ。二回目の run では盤面に触らない
            warn!("DealInitialCardsSystem: deck has {} cards, nothing to deal", self.deck.len());
            return;
        }

        if world.card_count() > 0 {
            warn!("🧹 World に {} 枚のカードが残っていたので片付けます", world.card_count());
        }
        *world = World::new();
        let mut deck = std::mem::take(&mut self.deck);

        // --- 場札 (Tableau) への配置 ---
        let mut dealt = 0;
        for (tableau_index, pile) in world.tableau_mut().iter_mut().enumerate() {
            for card_in_tableau in 0..=tableau_index {
                let Some(mut card) = deck.pop() else {
                    warn!("デッキにカードが足りません！(場札配置中)");
                    return;
                };
                // その列の一番上のカードだけ表向きにするよ！👀
                card.is_face_up = card_in_tableau == tableau_index;
                pile.push(card);
                dealt += 1;
            }
        }
        info!("✅ 場札への配置完了！ ({}枚配置, {}列)", dealt, TABLEAU_COUNT);

        // --- 山札 (Stock) への配置 ---
        // 残りのカードを全部、そのままの順番で山札に裏向きで置くよ。
        let (stock, _) = world.stock_and_waste_mut();
        let stock_size = deck.len();
        for mut card in deck {
            card.is_face_up = false;
            stock.push(card);
        }
        info!("✅ 山札への配置完了！ ({}枚配置)", stock_size);

        world.debug_assert_invariants();
    }
}
