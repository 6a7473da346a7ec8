//! # Error Types
//!
//! Domain-specific error types for brew-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  brew-core errors (this file)                                          │
//! │  └── OrderError       - Business-rule rejections of a single order     │
//! │      ├── InsufficientInventory  - beans or milk stock too low          │
//! │      └── UnknownCoffeeType      - requested drink not on the menu      │
//! │                                                                         │
//! │  There is NO fatal error class in this core: every failure is a        │
//! │  recoverable rejection that leaves the shop state untouched.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (resource, amounts, drink name)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Resource
// =============================================================================

/// A consumable resource tracked by the shop.
///
/// Display includes the unit so inventory errors read naturally:
/// "beans (g)" / "milk (ml)".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Espresso beans, measured in grams.
    Beans,
    /// Steaming milk, measured in milliliters.
    Milk,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Beans => write!(f, "beans (g)"),
            Resource::Milk => write!(f, "milk (ml)"),
        }
    }
}

// =============================================================================
// Order Error
// =============================================================================

/// Rejection of a single order.
///
/// Both variants are expected, recoverable conditions: the caller keeps its
/// current [`ShopState`](crate::shop::ShopState) and may go on to process
/// the next order. Detection happens before any state is produced, so a
/// partial update is impossible by construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Not enough of a resource in stock to make the drink.
    ///
    /// ## When This Occurs
    /// - Beans below `shots × 7 g`
    /// - Milk below the size requirement of a milk drink
    ///
    /// ## User Workflow
    /// ```text
    /// Order: large latte
    ///      │
    ///      ▼
    /// Check stock: milk available=200, required=350
    ///      │
    ///      ▼
    /// InsufficientInventory { resource: Milk, available: 200, required: 350 }
    ///      │
    ///      ▼
    /// Counter shows: "Insufficient milk (ml): available 200, required 350"
    /// ```
    #[error("Insufficient {resource}: available {available_amount}, required {required_amount}")]
    InsufficientInventory {
        resource: Resource,
        available_amount: u32,
        required_amount: u32,
    },

    /// The requested drink is not in the catalog.
    ///
    /// Raised at the input boundary when a ticket names a drink the menu
    /// does not carry. Treated exactly like an inventory rejection: the
    /// order is refused, nothing is deducted.
    #[error("Unknown coffee type: {0}")]
    UnknownCoffeeType(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with OrderError.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
