//! # Shop State
//!
//! The running totals and inventory of one coffee counter.
//!
//! ## State Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shop State Lifecycle                                 │
//! │                                                                         │
//! │  ShopState::opening() ──► process_order ──► new ShopState ──► ...      │
//! │        │                       │                                        │
//! │        │                       └── Err(rejection): caller keeps the    │
//! │        │                           state it already holds              │
//! │        │                                                                │
//! │  The value is REPLACED wholesale on every accepted order, never        │
//! │  mutated in place. There is no process-wide singleton: each caller     │
//! │  owns its own handle and threads it through successive calls.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `remaining_beans_g` and `remaining_milk_ml` never go negative: the
//!   fields are unsigned and the processor checks stock before deducting.
//! - `daily_sales` only ever accumulates already-rounded prices, so it is
//!   exact in cents.

use serde::{Deserialize, Serialize};

use crate::menu::Order;
use crate::money::Money;
use crate::{OPENING_BEANS_G, OPENING_MILK_ML};

/// Immutable snapshot of the shop's totals and stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopState {
    /// Cumulative revenue for the current session.
    pub daily_sales: Money,
    /// Count of successfully completed orders.
    pub total_coffee_made: u64,
    /// Grams of espresso beans in stock.
    pub remaining_beans_g: u32,
    /// Milliliters of milk in stock.
    pub remaining_milk_ml: u32,
}

impl ShopState {
    /// The state a shop opens with: full stock, nothing sold yet.
    ///
    /// Supplied by the caller at startup — the processor never conjures
    /// state on its own.
    pub const fn opening() -> Self {
        ShopState {
            daily_sales: Money::zero(),
            total_coffee_made: 0,
            remaining_beans_g: OPENING_BEANS_G,
            remaining_milk_ml: OPENING_MILK_ML,
        }
    }

    /// Whether current stock covers the order's bean and milk requirements.
    pub const fn can_fulfill(&self, order: &Order) -> bool {
        self.remaining_beans_g >= order.beans_required_g()
            && self.remaining_milk_ml >= order.milk_required_ml()
    }
}

impl Default for ShopState {
    fn default() -> Self {
        ShopState::opening()
    }
}
