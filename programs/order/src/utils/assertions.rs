//! Assertion Helper Functions
//!
//! Common validation checks used by the processors.
//! These functions make security checks consistent and readable.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_owned_by(account, program_id)?;
//!     assert_signer(payer)?;
//!     assert_writable(account)?;
//!
//!     // Then do the actual work
//!     ...
//! }
//! ```

use crate::error::OrderError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// An account allocated for another program may carry bytes that look
/// like a valid Order; only program-owned accounts are trusted.
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(OrderError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
///
/// The payer must have cryptographically authenticated the operation.
///
/// # Errors
///
/// Returns `MissingRequiredSignature` if not a signer.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

/// Assert that an account is writable.
///
/// The runtime rejects modifications to non-writable accounts anyway;
/// this check gives a clearer error earlier.
///
/// # Errors
///
/// Returns `InvalidAccountData` if not writable.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
///
/// An Order account must be exactly `Order::LEN` bytes; any other
/// size means the slot was allocated with the wrong layout.
///
/// # Errors
///
/// Returns `InvalidAccountDataLength` if length doesn't match.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(OrderError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// RENT CHECKS
// =============================================================================

/// Assert that an account is rent exempt.
///
/// Accounts that aren't rent-exempt can be garbage collected by the
/// runtime, losing the stored order.
///
/// # Errors
///
/// Returns `NotRentExempt` if the account doesn't have enough lamports.
pub fn assert_rent_exempt(rent: &Rent, account: &AccountInfo) -> ProgramResult {
    if !rent.is_exempt(account.lamports(), account.data_len()) {
        Err(OrderError::NotRentExempt.into())
    } else {
        Ok(())
    }
}
