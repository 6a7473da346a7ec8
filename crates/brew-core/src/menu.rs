//! # Menu Types
//!
//! The drink catalog and the shape of an order.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Types                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CoffeeType    │   │    CupSize      │   │  OrderOptions   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Americano $3.50│   │  Small   +$0.00 │   │  extra_shot     │       │
//! │  │  Latte     $4.50│   │  Medium  +$0.75 │   │  syrup          │       │
//! │  │  Cappuccino$4.70│   │  Large   +$1.50 │   │  whipped_cream  │       │
//! │  └─────────────────┘   └─────────────────┘   │  pumpkin_spice  │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │            Order = CoffeeType + CupSize + OrderOptions                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is fixed at compile time: prices, surcharges, and resource
//! costs are `const` lookups on the enums, not runtime configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OrderError;
use crate::money::Money;
use crate::BEANS_PER_SHOT_G;

// =============================================================================
// Coffee Type
// =============================================================================

/// A drink on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoffeeType {
    /// Espresso and hot water. The only drink without milk.
    Americano,
    /// Espresso with steamed milk.
    Latte,
    /// Espresso with steamed milk and foam.
    Cappuccino,
}

impl CoffeeType {
    /// Catalog base price, before size and options.
    #[inline]
    pub const fn base_price(&self) -> Money {
        match self {
            CoffeeType::Americano => Money::from_cents(350),
            CoffeeType::Latte => Money::from_cents(450),
            CoffeeType::Cappuccino => Money::from_cents(470),
        }
    }

    /// Whether the drink takes steamed milk.
    #[inline]
    pub const fn uses_milk(&self) -> bool {
        !matches!(self, CoffeeType::Americano)
    }

    /// The lowercase menu name, as printed on tickets and receipts.
    pub const fn name(&self) -> &'static str {
        match self {
            CoffeeType::Americano => "americano",
            CoffeeType::Latte => "latte",
            CoffeeType::Cappuccino => "cappuccino",
        }
    }
}

impl fmt::Display for CoffeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a ticket's drink name.
///
/// This is where [`OrderError::UnknownCoffeeType`] enters the system: once
/// a drink has parsed into this enum, every catalog lookup is total.
impl FromStr for CoffeeType {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "americano" => Ok(CoffeeType::Americano),
            "latte" => Ok(CoffeeType::Latte),
            "cappuccino" => Ok(CoffeeType::Cappuccino),
            other => Err(OrderError::UnknownCoffeeType(other.to_string())),
        }
    }
}

// =============================================================================
// Cup Size
// =============================================================================

/// Cup size for a drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CupSize {
    Small,
    Medium,
    Large,
}

impl CupSize {
    /// Price surcharge over the catalog base price.
    #[inline]
    pub const fn surcharge(&self) -> Money {
        match self {
            CupSize::Small => Money::zero(),
            CupSize::Medium => Money::from_cents(75),
            CupSize::Large => Money::from_cents(150),
        }
    }

    /// Milliliters of milk a milk drink of this size consumes.
    #[inline]
    pub const fn milk_ml(&self) -> u32 {
        match self {
            CupSize::Small => 150,
            CupSize::Medium => 250,
            CupSize::Large => 350,
        }
    }

    /// The lowercase size label.
    pub const fn name(&self) -> &'static str {
        match self {
            CupSize::Small => "small",
            CupSize::Medium => "medium",
            CupSize::Large => "large",
        }
    }

    /// Parses a ticket's size label, falling back to `Small`.
    ///
    /// Unrecognized sizes are not an error: a ticket with a smudged size
    /// gets the small cup (and the small milk amount).
    pub fn from_label(label: &str) -> CupSize {
        match label.trim() {
            "medium" => CupSize::Medium,
            "large" => CupSize::Large,
            _ => CupSize::Small,
        }
    }
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for CupSize {
    fn default() -> Self {
        CupSize::Small
    }
}

// =============================================================================
// Order Options
// =============================================================================

/// Optional extras on an order. Each surcharge is independent of the others.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderOptions {
    /// Second espresso shot (+$0.80, +7 g beans).
    pub extra_shot: bool,
    /// Flavor syrup label, e.g. "caramel" (+$0.50 when non-empty).
    pub syrup: Option<String>,
    /// Whipped cream topping (+$1.00).
    pub whipped_cream: bool,
    /// Pumpkin spice (+$0.90, only honored during pumpkin season).
    pub pumpkin_spice: bool,
}

impl OrderOptions {
    /// Whether a syrup surcharge applies.
    ///
    /// An empty label is treated the same as no syrup at all.
    pub fn has_syrup(&self) -> bool {
        self.syrup.as_deref().is_some_and(|label| !label.trim().is_empty())
    }
}

// =============================================================================
// Order
// =============================================================================

/// A single drink order, as handed to the processor.
///
/// Immutable input: the processor reads it and never writes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub coffee_type: CoffeeType,
    pub size: CupSize,
    pub options: OrderOptions,
}

impl Order {
    /// Number of espresso shots: one by default, two with the extra shot.
    #[inline]
    pub const fn shot_count(&self) -> u32 {
        if self.options.extra_shot {
            2
        } else {
            1
        }
    }

    /// Grams of beans this order consumes (7 g per shot).
    #[inline]
    pub const fn beans_required_g(&self) -> u32 {
        self.shot_count() * BEANS_PER_SHOT_G
    }

    /// Milliliters of milk this order consumes.
    ///
    /// An americano never takes milk, regardless of size.
    #[inline]
    pub const fn milk_required_ml(&self) -> u32 {
        if self.coffee_type.uses_milk() {
            self.size.milk_ml()
        } else {
            0
        }
    }

    /// The label that appears on the receipt, e.g. "large americano".
    pub fn drink_name(&self) -> String {
        format!("{} {}", self.size, self.coffee_type)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
