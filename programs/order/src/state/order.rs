//! Order Account State
//!
//! An Order is one pizza order: who it is for, and how much of each
//! topping they asked for. It is written exactly once by the Init
//! instruction and never modified afterwards.
//!
//! # Size: 36 bytes

use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// ORDER STRUCTURE
// =============================================================================

/// Order account data structure.
///
/// # Memory Layout (36 bytes total)
///
/// ```text
/// ┌────────┬──────┬────────────────┬──────────────┐
/// │ Offset │ Size │ Field          │ Type         │
/// ├────────┼──────┼────────────────┼──────────────┤
/// │ 0      │ 1    │ is_initialized │ bool (0 or 1)│
/// │ 1      │ 32   │ buyer          │ Pubkey       │
/// │ 33     │ 1    │ pepperoni      │ i8           │
/// │ 34     │ 1    │ cheese         │ i8           │
/// │ 35     │ 1    │ mushrooms      │ i8           │
/// └────────┴──────┴────────────────┴──────────────┘
/// ```
///
/// The `is_initialized` byte leads the layout: a freshly created
/// account is zero-filled, so it reads as uninitialized until Init
/// has written the record.
///
/// # Example Usage
///
/// ```ignore
/// let order_data = order_account_info.data.borrow();
/// let order = Order::unpack_from_slice(&order_data)?;
///
/// if !order.is_initialized {
///     return Err(OrderError::UninitializedAccount.into());
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Order {
    /// Whether this order has been initialized.
    ///
    /// # States
    ///
    /// - `false`: Account allocated, no logical content yet
    /// - `true`: Init was called, fields are set and final
    ///
    /// Init refuses to run twice: once this flag is set, the record
    /// is immutable.
    pub is_initialized: bool,

    /// Identity of the party the order is placed for.
    ///
    /// Stored verbatim from the instruction data, compared only for
    /// equality. It is NOT checked against the payer: any payer may
    /// place an order on behalf of any buyer.
    pub buyer: Pubkey,

    /// Requested pepperoni quantity.
    ///
    /// Full i8 range (-128..=127) is accepted and stored as supplied.
    /// No domain validation, so negative quantities are legal.
    pub pepperoni: i8,

    /// Requested cheese quantity. Same range rules as `pepperoni`.
    pub cheese: i8,

    /// Requested mushroom quantity. Same range rules as `pepperoni`.
    pub mushrooms: i8,
}

// =============================================================================
// ASSOCIATED CONSTANTS
// =============================================================================

impl Order {
    /// Size of Order when serialized to bytes.
    ///
    /// Calculation:
    /// - is_initialized: 1 byte (bool as u8)
    /// - buyer: 32 bytes (Pubkey)
    /// - pepperoni: 1 byte (i8)
    /// - cheese: 1 byte (i8)
    /// - mushrooms: 1 byte (i8)
    /// - Total: 1 + 32 + 1 + 1 + 1 = 36 bytes
    pub const LEN: usize = 36;
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Order {
    const LEN: usize = 36;

    /// Deserialize an Order from a byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `input.len() < 36`. Use `unpack_from_slice` for safe parsing.
    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Order::LEN];

        // Split into fixed-size field references; sizes must sum to 36
        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized_bytes, buyer_bytes, pepperoni_bytes, cheese_bytes, mushrooms_bytes) =
            array_refs![input, 1, 32, 1, 1, 1];

        let is_initialized = is_initialized_bytes[0] != 0;
        let buyer = Pubkey::new_from_array(*buyer_bytes);

        // Single-byte quantities, reinterpreted as signed
        let pepperoni = pepperoni_bytes[0] as i8;
        let cheese = cheese_bytes[0] as i8;
        let mushrooms = mushrooms_bytes[0] as i8;

        Ok(Order {
            is_initialized,
            buyer,
            pepperoni,
            cheese,
            mushrooms,
        })
    }

    /// Serialize an Order into a byte slice.
    ///
    /// This is the inverse of `unpack()`.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Order::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized_dst, buyer_dst, pepperoni_dst, cheese_dst, mushrooms_dst) =
            mut_array_refs![output, 1, 32, 1, 1, 1];

        is_initialized_dst[0] = self.is_initialized as u8;
        buyer_dst.copy_from_slice(self.buyer.as_ref());
        pepperoni_dst[0] = self.pepperoni as u8;
        cheese_dst[0] = self.cheese as u8;
        mushrooms_dst[0] = self.mushrooms as u8;

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
