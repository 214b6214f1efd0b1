// src/systems/mod.rs

// World を更新するシステムたち。一つの関心事ごとに一つのファイル！
pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::MoveCardSystem;
pub use stock_system::StockSystem;
pub use win_condition_system::WinConditionSystem;
