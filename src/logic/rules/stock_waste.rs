//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use serde::{Deserialize, Serialize};

/// 山札をクリックしたときに何が起きるかを決める状態。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockWasteState {
    /// 山札にカードがある → 1枚めくって捨て札へ
    StockHasCards,
    /// 山札は空、捨て札にはある → 捨て札を全部山札に戻す
    StockEmptyWasteHasCards,
    /// どっちも空 → 何もしない
    BothEmpty,
}

/// 山札と捨て札の枚数から、今の状態を求める。
pub fn stock_waste_state(stock_len: usize, waste_len: usize) -> StockWasteState {
    if stock_len > 0 {
        StockWasteState::StockHasCards
    } else if waste_len > 0 {
        StockWasteState::StockEmptyWasteHasCards
    } else {
        StockWasteState::BothEmpty
    }
}

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストック（山札）が空のときに、ウェスト（捨て札）からストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}
