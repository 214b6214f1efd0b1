// src/systems/stock_system.rs
//! Handles clicks on the Stock pile (dealing to Waste, resetting Waste).

use log::{debug, info, warn};

use crate::components::card::Card;
use crate::logic::rules::stock_waste::{self, StockWasteState};
use crate::protocol::MoveOutcome;
use crate::system::System;
use crate::world::World;

/// Runs one Stock activation: draw a card, recycle the Waste, or do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct StockSystem;

impl StockSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for StockSystem {
    type Output = MoveOutcome;

    fn run(&mut self, world: &mut World) -> MoveOutcome {
        let state = stock_waste::stock_waste_state(world.stock().len(), world.waste().len());
        let outcome = match state {
            StockWasteState::StockHasCards => deal_one_card_from_stock(world)
                .map_or(MoveOutcome::NoMove, |card| MoveOutcome::DrewFromStock { card }),
            StockWasteState::StockEmptyWasteHasCards => reset_waste_to_stock(world)
                .map_or(MoveOutcome::NoMove, |count| MoveOutcome::RecycledWaste { count }),
            StockWasteState::BothEmpty => {
                debug!("Stock and Waste are both empty. Nothing to do.");
                MoveOutcome::NoMove
            }
        };
        world.debug_assert_invariants();
        outcome
    }
}

/// Deals one card from the Stock pile to the Waste pile.
/// Returns the dealt card (now face up), or None if the Stock was empty.
pub fn deal_one_card_from_stock(world: &mut World) -> Option<Card> {
    info!("Attempting to deal card from Stock to Waste...");
    let (stock, waste) = world.stock_and_waste_mut();

    if !stock_waste::can_deal_from_stock(stock.is_empty()) {
        info!("  Stock is empty. Cannot deal.");
        return None;
    }

    let Some(mut card) = stock.pop() else {
        warn!("  Could not find top card in Stock, even though it's not empty.");
        return None;
    };
    card.is_face_up = true; // Card dealt to Waste is face up
    waste.push(card.clone());

    info!("  Card {} moved to Waste.", card);
    Some(card)
}

/// Resets the Waste pile back to the Stock pile when Stock is empty.
/// The whole Waste is reversed and turned face down, so the card drawn first
/// comes out first again. Returns the number of recycled cards.
pub fn reset_waste_to_stock(world: &mut World) -> Option<usize> {
    info!("Attempting to reset Waste to Stock...");
    let (stock, waste) = world.stock_and_waste_mut();

    if !stock_waste::can_reset_stock_from_waste(stock.is_empty(), waste.is_empty()) {
        info!("  Cannot reset Waste to Stock (Stock not empty or Waste empty).");
        return None;
    }

    let mut recycled = waste.take_all();
    recycled.reverse();
    for card in &mut recycled {
        card.is_face_up = false; // Cards in Stock are face down
    }
    let count = recycled.len();
    stock.extend(recycled);

    info!("  Waste pile reset to Stock complete ({} cards).", count);
    Some(count)
}
