//! Account State Structures
//!
//! This module defines the data structures stored in Solana accounts.
//!
//! # Account Types
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | Order | 36 bytes | One pizza order |
//!
//! # Serialization
//!
//! All structures use fixed-size, deterministic serialization:
//! - Single-byte fields stored as-is
//! - No padding between fields
//! - Same data always produces same bytes
//!
//! # The Pack Trait
//!
//! All state types implement the `Pack` trait for serialization:
//!
//! ```ignore
//! let order = Order::unpack(&account.data.borrow())?;   // Read
//! order.pack(&mut account.data.borrow_mut())?;          // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod order;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use order::Order;

use solana_program::program_error::ProgramError;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account state to/from bytes.
///
/// All state structures must implement this trait.
/// It provides a consistent interface for serialization.
///
/// The layout is manual rather than derived: account sizes are fixed
/// at creation, clients read the bytes directly, and the byte offsets
/// are part of the program's public interface.
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    ///
    /// This is used to:
    /// - Validate account data length
    /// - Allocate accounts with correct size
    /// - Calculate rent exemption
    const LEN: usize;

    /// Deserialize from a byte slice.
    ///
    /// # Panics
    /// May panic if input.len() < Self::LEN (use unpack_from_slice instead)
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack with length validation.
    ///
    /// Checks that `src.len() == Self::LEN` before unpacking.
    /// Use this instead of `unpack` when you have untrusted input.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    ///
    /// Checks that `dst.len() == Self::LEN` before packing.
    /// Use this instead of `pack` for safety.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}
