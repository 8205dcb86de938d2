//! Custom Error Types
//!
//! This module defines all errors that the order program can return.
//! Each error has a unique numeric code that clients can match against.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-2 | Account validation errors |
//! | 3-4 | Initialization state errors |
//! | 5 | Instruction parsing errors |
//!
//! # Usage
//!
//! ```ignore
//! use crate::error::OrderError;
//!
//! fn some_check() -> ProgramResult {
//!     if order.is_initialized {
//!         return Err(OrderError::AlreadyInitialized.into());
//!     }
//!     Ok(())
//! }
//! ```

use solana_program::program_error::ProgramError;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the Order program.
///
/// Each variant becomes a unique error code when converted to ProgramError.
/// The codes are assigned based on the order of variants (0, 1, 2, ...).
///
/// # Important
///
/// After deployment, NEVER reorder these variants!
/// Clients depend on stable error codes.
/// Always add new errors at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OrderError {
    // =========================================================================
    // ACCOUNT VALIDATION ERRORS (0-2)
    // =========================================================================

    /// Error 0: Account is not owned by the order program.
    ///
    /// Every account we write to must be owned by our program.
    /// This rejects accounts allocated for some other program.
    #[error("Account not owned by order program")]
    InvalidAccountOwner,

    /// Error 1: Account data has wrong length.
    ///
    /// An Order must be exactly 36 bytes.
    /// Wrong size means the slot was allocated with the wrong layout.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: Account is not rent exempt.
    ///
    /// Accounts must hold enough lamports to be rent-exempt,
    /// otherwise the runtime can garbage collect them.
    #[error("Account is not rent exempt")]
    NotRentExempt,

    // =========================================================================
    // INITIALIZATION STATE ERRORS (3-4)
    // =========================================================================

    /// Error 3: Order is already initialized.
    ///
    /// An order can only be written once. A second Init against the
    /// same slot fails here and leaves the first write untouched.
    #[error("Order already initialized")]
    AlreadyInitialized,

    /// Error 4: Order is not initialized.
    ///
    /// Returned by readers that unpack an order account whose
    /// Init instruction has not run yet.
    #[error("Order not initialized")]
    UninitializedAccount,

    // =========================================================================
    // INSTRUCTION PARSING ERRORS (5)
    // =========================================================================

    /// Error 5: Invalid instruction data.
    ///
    /// Could not parse the instruction data.
    /// Wrong format, missing bytes, unknown discriminant.
    #[error("Invalid instruction")]
    InvalidInstruction,
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert OrderError to ProgramError.
///
/// This implementation allows using the `?` operator with our errors.
///
/// The error code is simply the enum variant's position (0-indexed):
/// InvalidAccountOwner = 0, InvalidAccountDataLength = 1, etc.
impl From<OrderError> for ProgramError {
    fn from(e: OrderError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
