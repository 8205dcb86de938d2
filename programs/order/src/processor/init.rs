//! Init Instruction Processor
//!
//! Populates a freshly allocated order account. The account is created
//! by a `system_instruction::create_account` in the same transaction,
//! funded by the payer and owned by this program; if that allocation
//! fails (slot occupied, payer underfunded) the whole transaction
//! fails and this handler never runs.

use crate::error::OrderError;
use crate::state::{Order, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process Init instruction
///
/// Accounts expected:
/// 0. `[writable]` Order account to initialize
/// 1. `[signer]` Payer funding the allocation
/// 2. `[]` Rent sysvar
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    buyer: Pubkey,
    pepperoni: i8,
    cheese: i8,
    mushrooms: i8,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Order account
    let order_info = next_account_info(account_info_iter)?;

    // Account 1: Payer
    let payer_info = next_account_info(account_info_iter)?;

    // Account 2: Rent sysvar
    let rent_info = next_account_info(account_info_iter)?;
    let rent = Rent::from_account_info(rent_info)?;

    // Validate order account
    assert_owned_by(order_info, program_id)?;
    assert_writable(order_info)?;
    assert_data_length(order_info, Order::LEN)?;
    assert_rent_exempt(&rent, order_info)?;

    // The payer must have authenticated this operation
    assert_signer(payer_info)?;

    // Load order
    let mut order = Order::unpack_from_slice(&order_info.data.borrow())?;

    // Prevent double initialization
    if order.is_initialized {
        return Err(OrderError::AlreadyInitialized.into());
    }

    // Initialize order; values are stored verbatim, no bounds checks
    order.is_initialized = true;
    order.buyer = buyer;
    order.pepperoni = pepperoni;
    order.cheese = cheese;
    order.mushrooms = mushrooms;

    // Save order
    order.pack_into_slice(&mut order_info.data.borrow_mut())?;

    Ok(())
}
