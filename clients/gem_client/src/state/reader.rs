use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use tracing::debug;

use crate::{error::Result, state::gem::{decode_gem, GemRecord}};

/// Source of raw account data, typically an RPC client or a test bank.
pub trait AccountReader {
    /// Returns the account's data, or `None` if the account does not exist.
    fn fetch_account_bytes(&self, address: &Pubkey) -> Result<Option<Vec<u8>>>;
}

impl AccountReader for HashMap<Pubkey, Vec<u8>> {
    fn fetch_account_bytes(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        Ok(self.get(address).cloned())
    }
}

/// Fetches and decodes the gem metadata account at `address`.
pub fn fetch_gem<R: AccountReader + ?Sized>(reader: &R, address: &Pubkey) -> Result<Option<GemRecord>> {
    let data = reader.fetch_account_bytes(address)?;
    let gem = decode_gem(data.as_deref())?;
    debug!(%address, found = gem.is_some(), "fetched gem account");
    Ok(gem)
}
