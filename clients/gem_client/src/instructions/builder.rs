use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use tracing::{debug, instrument};

use crate::{
    config::ClientConfig,
    error::Result,
    instructions::{
        args::{BurnArgs, GemArgs, GemInstruction, MintArgs, TransferArgs},
        template::{AccountRole, AccountSet},
    },
};

/// Assembles gem program instructions for one configured deployment.
///
/// Building is pure: the same arguments always produce the same
/// instruction, and nothing is checked against ledger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionBuilder {
    config: ClientConfig,
}

impl InstructionBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Mints a gem NFT and records its metadata.
    ///
    /// Accounts:
    /// 0. `[writable, signer]` fee_payer
    /// 1. `[writable, signer]` mint
    /// 2. `[writable]` gem metadata PDA
    /// 3. `[]` system program
    /// 4. `[writable, signer]` funding
    /// 5. `[writable]` associated token account of `wallet`
    /// 6. `[]` wallet
    /// 7. `[]` token program
    /// 8. `[signer]` owner, the minting authority
    /// 9. `[]` token program
    /// 10. `[]` associated token program
    pub fn mint(&self, args: &MintArgs, extra: &[Pubkey]) -> Result<Instruction> {
        self.build_from(args, extra)
    }

    /// Moves a gem between token accounts and updates its metadata.
    ///
    /// Accounts:
    /// 0. `[writable, signer]` fee_payer
    /// 1. `[]` mint
    /// 2. `[writable]` gem metadata PDA
    /// 3. `[writable, signer]` funding
    /// 4. `[writable]` associated token account of `wallet`
    /// 5. `[]` wallet
    /// 6. `[]` system program
    /// 7. `[]` token program
    /// 8. `[writable]` source
    /// 9. `[writable]` destination
    /// 10. `[signer]` authority
    /// 11. `[]` associated token program
    /// 12. `[]` token program
    pub fn transfer(&self, args: &TransferArgs, extra: &[Pubkey]) -> Result<Instruction> {
        self.build_from(args, extra)
    }

    /// Burns a gem and closes its metadata.
    ///
    /// Accounts:
    /// 0. `[writable, signer]` fee_payer
    /// 1. `[writable]` mint
    /// 2. `[writable]` gem metadata PDA
    /// 3. `[writable]` associated token account being burned from
    /// 4. `[signer]` owner
    /// 5. `[]` wallet
    /// 6. `[]` token program
    /// 7. `[]` token program
    pub fn burn(&self, args: &BurnArgs, extra: &[Pubkey]) -> Result<Instruction> {
        self.build_from(args, extra)
    }

    fn build_from<A: GemArgs>(&self, args: &A, extra: &[Pubkey]) -> Result<Instruction> {
        let instruction = args.instruction()?;
        self.build(&instruction, &args.account_set(), extra)
    }

    /// Resolves the account template of `instruction` against `accounts`,
    /// appends `extra` as read-only non-signers and packs the payload.
    #[instrument(level = "debug", skip_all, fields(variant = instruction.name()))]
    pub fn build(
        &self,
        instruction: &GemInstruction,
        accounts: &AccountSet,
        extra: &[Pubkey],
    ) -> Result<Instruction> {
        let template = instruction.accounts();
        let mut metas = Vec::with_capacity(template.len() + extra.len());
        for slot in template {
            metas.push(AccountMeta {
                pubkey: self.resolve(slot.role, accounts)?,
                is_signer: slot.is_signer,
                is_writable: slot.is_writable,
            });
        }
        metas.extend(extra.iter().map(|key| AccountMeta::new_readonly(*key, false)));

        let data = instruction.pack()?;
        debug!(
            accounts = metas.len(),
            extra = extra.len(),
            data_len = data.len(),
            "built instruction"
        );

        Ok(Instruction {
            program_id: self.config.program_id,
            accounts: metas,
            data,
        })
    }

    fn resolve(&self, role: AccountRole, accounts: &AccountSet) -> Result<Pubkey> {
        let key = match role {
            AccountRole::Metadata => {
                let mint = accounts.require(AccountRole::Mint)?;
                self.config.metadata_address(&mint)?.address
            }
            AccountRole::AssociatedToken => {
                let wallet = accounts.require(AccountRole::Wallet)?;
                let mint = accounts.require(AccountRole::Mint)?;
                self.config.associated_token_address(&wallet, &mint)?.address
            }
            AccountRole::SystemProgram => self.config.system_program_id,
            AccountRole::TokenProgram => self.config.token_program_id,
            AccountRole::AssociatedTokenProgram => self.config.associated_token_program_id,
            caller_supplied => accounts.require(caller_supplied)?,
        };
        Ok(key)
    }
}
