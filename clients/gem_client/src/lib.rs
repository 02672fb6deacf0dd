//! Client for the `validate_basic_nft` gem program.
//!
//! Builds `Mint`, `Transfer` and `Burn` instructions with the exact account
//! ordering the program expects, derives the program addresses they refer to,
//! and decodes the gem metadata accounts the program persists.
//!
//! ```no_run
//! use anchor_lang::prelude::Pubkey;
//! use gem_client::{ClientConfig, InstructionBuilder, MintArgs};
//!
//! # fn main() -> gem_client::Result<()> {
//! let payer = Pubkey::new_unique();
//! let mint = Pubkey::new_unique();
//! let builder = InstructionBuilder::new(ClientConfig::new(Pubkey::new_unique()));
//! let ix = builder.mint(
//!     &MintArgs::default()
//!         .fee_payer(payer)
//!         .funding(payer)
//!         .mint(mint)
//!         .wallet(payer)
//!         .owner(payer)
//!         .color("Purple")
//!         .rarity("Rare")
//!         .short_description("Only from the lost temple event"),
//!     &[],
//! )?;
//! assert_eq!(ix.accounts.len(), 11);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;

pub use config::ClientConfig;
pub use error::{GemClientError, Result};
pub use instructions::{
    AccountRole, AccountSet, AccountSlot, BurnArgs, GemInstruction, InstructionBuilder, MintArgs,
    TransferArgs,
};
pub use pda::DerivedAddress;
pub use state::{decode_gem, fetch_gem, AccountReader, GemRecord};
