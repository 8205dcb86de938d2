//! Instruction Types
//!
//! This module defines all instructions supported by the order program.
//! Each instruction has:
//! - A discriminant (first byte, identifies the instruction type)
//! - Instruction-specific data (remaining bytes)
//! - Expected accounts (documented, not encoded in data)
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | Init |

use crate::error::OrderError;
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// ORDER INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the order program.
///
/// Each variant contains the instruction-specific data.
/// Account requirements are documented in comments but not encoded.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderInstruction {
    /// Populate a freshly allocated order account.
    ///
    /// The account itself is allocated by a preceding
    /// `system_instruction::create_account` in the same transaction,
    /// funded by the payer and owned by this program. Init validates
    /// the slot and performs the single write.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | order | ✓ | | The order account to initialize |
    /// | 1 | payer | | ✓ | The signer funding the allocation |
    /// | 2 | rent | | | Rent sysvar |
    ///
    /// # Data Layout
    ///
    /// ```text
    /// [0]: discriminant (0)
    /// [1..33]: buyer (Pubkey, 32 bytes)
    /// [33]: pepperoni (i8)
    /// [34]: cheese (i8)
    /// [35]: mushrooms (i8)
    /// ```
    ///
    /// # Notes
    ///
    /// - `buyer` is stored verbatim; it is NOT required to match the payer
    /// - Quantities accept the full i8 range, negatives included;
    ///   no bounds checking is performed
    Init {
        /// Identity the order is placed for (compared only for equality)
        buyer: Pubkey,

        /// Requested pepperoni quantity
        pepperoni: i8,

        /// Requested cheese quantity
        cheese: i8,

        /// Requested mushroom quantity
        mushrooms: i8,
    },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl OrderInstruction {
    /// Parse instruction data into an OrderInstruction.
    ///
    /// # Arguments
    /// * `input` - Raw instruction data bytes
    ///
    /// # Returns
    /// * `Ok(OrderInstruction)` - Successfully parsed instruction
    /// * `Err(InvalidInstruction)` - Could not parse
    ///
    /// # Format
    ///
    /// First byte is the discriminant, remaining bytes are instruction-specific.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        // Get the discriminant (first byte)
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(OrderError::InvalidInstruction)?;

        // Parse based on discriminant
        Ok(match discriminant {
            // =================================================================
            // 0: Init
            // =================================================================
            0 => {
                // Need: buyer(32) + pepperoni(1) + cheese(1) + mushrooms(1) = 35 bytes
                if rest.len() < 35 {
                    return Err(OrderError::InvalidInstruction.into());
                }

                // Parse buyer (bytes 0-31)
                let buyer = Pubkey::new_from_array(
                    rest[..32]
                        .try_into()
                        .map_err(|_| OrderError::InvalidInstruction)?,
                );

                // Quantities travel as single bytes; reinterpret as i8
                let pepperoni = rest[32] as i8;
                let cheese = rest[33] as i8;
                let mushrooms = rest[34] as i8;

                OrderInstruction::Init {
                    buyer,
                    pepperoni,
                    cheese,
                    mushrooms,
                }
            }

            // =================================================================
            // Unknown instruction
            // =================================================================
            _ => return Err(OrderError::InvalidInstruction.into()),
        })
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes.
    ///
    /// This is the inverse of `unpack()`.
    /// Used by tests and client libraries to create instruction data.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            OrderInstruction::Init {
                buyer,
                pepperoni,
                cheese,
                mushrooms,
            } => {
                buf.push(0); // discriminant
                buf.extend_from_slice(buyer.as_ref());
                buf.push(*pepperoni as u8);
                buf.push(*cheese as u8);
                buf.push(*mushrooms as u8);
            }
        }

        buf
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
