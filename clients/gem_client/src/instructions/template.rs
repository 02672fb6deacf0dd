use anchor_lang::prelude::Pubkey;

use crate::error::{GemClientError, Result};

/// What fills one account slot of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountRole {
    FeePayer,
    Mint,
    /// Gem metadata PDA, derived from the mint.
    Metadata,
    SystemProgram,
    Funding,
    /// Associated token account PDA, derived from wallet and mint.
    AssociatedToken,
    Wallet,
    TokenProgram,
    Owner,
    Source,
    Destination,
    Authority,
    AssociatedTokenProgram,
}

impl AccountRole {
    pub fn name(&self) -> &'static str {
        match self {
            AccountRole::FeePayer => "fee_payer",
            AccountRole::Mint => "mint",
            AccountRole::Metadata => "gem",
            AccountRole::SystemProgram => "system_program",
            AccountRole::Funding => "funding",
            AccountRole::AssociatedToken => "assoc_token_account",
            AccountRole::Wallet => "wallet",
            AccountRole::TokenProgram => "token_program",
            AccountRole::Owner => "owner",
            AccountRole::Source => "source",
            AccountRole::Destination => "destination",
            AccountRole::Authority => "authority",
            AccountRole::AssociatedTokenProgram => "assoc_token_program",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSlot {
    pub role: AccountRole,
    pub is_signer: bool,
    pub is_writable: bool,
}

const fn slot(role: AccountRole, is_signer: bool, is_writable: bool) -> AccountSlot {
    AccountSlot {
        role,
        is_signer,
        is_writable,
    }
}

use AccountRole::*;

// Duplicated token program slots are part of the program's account layout.

pub const MINT_ACCOUNTS: &[AccountSlot] = &[
    slot(FeePayer, true, true),
    slot(Mint, true, true),
    slot(Metadata, false, true),
    slot(SystemProgram, false, false),
    slot(Funding, true, true),
    slot(AssociatedToken, false, true),
    slot(Wallet, false, false),
    slot(TokenProgram, false, false),
    slot(Owner, true, false),
    slot(TokenProgram, false, false),
    slot(AssociatedTokenProgram, false, false),
];

pub const TRANSFER_ACCOUNTS: &[AccountSlot] = &[
    slot(FeePayer, true, true),
    slot(Mint, false, false),
    slot(Metadata, false, true),
    slot(Funding, true, true),
    slot(AssociatedToken, false, true),
    slot(Wallet, false, false),
    slot(SystemProgram, false, false),
    slot(TokenProgram, false, false),
    slot(Source, false, true),
    slot(Destination, false, true),
    slot(Authority, true, false),
    slot(AssociatedTokenProgram, false, false),
    slot(TokenProgram, false, false),
];

pub const BURN_ACCOUNTS: &[AccountSlot] = &[
    slot(FeePayer, true, true),
    slot(Mint, false, true),
    slot(Metadata, false, true),
    slot(AssociatedToken, false, true),
    slot(Owner, true, false),
    slot(Wallet, false, false),
    slot(TokenProgram, false, false),
    slot(TokenProgram, false, false),
];

/// Caller-supplied addresses keyed by role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSet {
    entries: Vec<(AccountRole, Pubkey)>,
}

impl AccountSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, role: AccountRole, key: Pubkey) -> Self {
        self.insert(role, key);
        self
    }

    pub(crate) fn with_optional(self, role: AccountRole, key: Option<Pubkey>) -> Self {
        match key {
            Some(key) => self.with(role, key),
            None => self,
        }
    }

    pub fn insert(&mut self, role: AccountRole, key: Pubkey) {
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = key,
            None => self.entries.push((role, key)),
        }
    }

    pub fn get(&self, role: AccountRole) -> Option<Pubkey> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, key)| *key)
    }

    pub fn require(&self, role: AccountRole) -> Result<Pubkey> {
        self.get(role)
            .ok_or(GemClientError::MissingArgument(role.name()))
    }
}
