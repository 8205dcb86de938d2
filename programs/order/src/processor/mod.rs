//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file for clarity and maintainability.

pub mod init;

use crate::instruction::OrderInstruction;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process an Order program instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        // Parse the instruction
        let instruction = OrderInstruction::unpack(instruction_data)?;

        // Route to appropriate handler
        match instruction {
            OrderInstruction::Init {
                buyer,
                pepperoni,
                cheese,
                mushrooms,
            } => {
                msg!("Instruction: Init");
                init::process(program_id, accounts, buyer, pepperoni, cheese, mushrooms)
            }
        }
    }
}
