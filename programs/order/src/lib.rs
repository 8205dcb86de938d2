//! # Pizza Order Program
//!
//! A native Solana program that records pizza orders on-chain.
//! Each order is a small account holding the buyer and three topping
//! quantities, written exactly once by the `Init` instruction.
//!
//! ## Overview
//!
//! This program allows you to:
//! - Create an order account (fresh, payer-funded)
//! - Populate it with a buyer and topping quantities in one step
//!
//! There is no update or delete path: once initialized, an order is
//! immutable for the rest of its life.
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Order | 36 bytes | One pizza order (buyer + toppings) |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | Init | Populate a freshly allocated order account |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions and parsing
pub mod instruction;

/// Instruction processors (business logic)
pub mod processor;

/// Account state structures (Order)
pub mod state;

/// Utility functions for account validation
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Make commonly used types available at crate root
// Users can write: use pizza_order_program::OrderError;
// Instead of: use pizza_order_program::error::OrderError;

pub use error::OrderError;
pub use instruction::OrderInstruction;
pub use processor::Processor;
pub use state::{Order, Pack};

// =============================================================================
// PROGRAM ID
// =============================================================================

// This macro declares the program's on-chain address
// It must match the deployed address exactly
solana_program::declare_id!("GJk5YqJDMgTT8CFWfDZLFVnw8GXJucyTnqBcFcf2Dxcf");
