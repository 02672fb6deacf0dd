use anchor_lang::prelude::*;

pub use anchor_spl::associated_token::ID as ASSOCIATED_TOKEN_PROGRAM_ID;
pub use anchor_spl::token::ID as TOKEN_PROGRAM_ID;

pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");

/// Label seed of the per-mint gem metadata PDA.
pub const METADATA_SEED: &[u8] = b"gem";

/// Domain separator appended to every PDA hash input.
pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Maximum seeds per address, bump included.
pub const MAX_SEEDS: usize = 16;
pub const MAX_SEED_LEN: usize = 32;

pub const MINT_DISCRIMINANT: u8 = 0;
pub const TRANSFER_DISCRIMINANT: u8 = 1;
pub const BURN_DISCRIMINANT: u8 = 2;
