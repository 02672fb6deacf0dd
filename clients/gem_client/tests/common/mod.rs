#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use gem_client::{codec::WireRecord, AccountReader, GemInstruction, GemRecord};

/// In-memory stand-in for the ledger: applies the gem program's effects on
/// its metadata account, and nothing else.
#[derive(Debug, Default)]
pub struct Ledger {
    pub accounts: HashMap<Pubkey, Vec<u8>>,
}

const GEM_SLOT: usize = 2;

impl Ledger {
    pub fn execute(&mut self, ix: &Instruction) -> Result<(), String> {
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|meta| meta.pubkey).collect();
        let gem_key = keys[GEM_SLOT];

        match GemInstruction::unpack(&ix.data).map_err(|e| e.to_string())? {
            GemInstruction::Mint {
                color,
                rarity,
                short_description,
            } => {
                if self.accounts.get(&gem_key).is_some_and(|data| !data.is_empty()) {
                    return Err("account already in use".to_string());
                }
                let gem = GemRecord {
                    mint: keys[1],
                    associated_account: Some(keys[5]),
                    color,
                    rarity,
                    short_description,
                };
                self.store(gem_key, &gem)
            }
            GemInstruction::Transfer => {
                let mut gem = self.load(&gem_key)?;
                gem.associated_account = Some(keys[9]);
                self.store(gem_key, &gem)
            }
            GemInstruction::Burn => {
                self.load(&gem_key)?;
                self.accounts.insert(gem_key, Vec::new());
                Ok(())
            }
        }
    }

    fn load(&self, key: &Pubkey) -> Result<GemRecord, String> {
        gem_client::fetch_gem(self, key)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "gem account not initialized".to_string())
    }

    fn store(&mut self, key: Pubkey, gem: &GemRecord) -> Result<(), String> {
        let data = gem.to_bytes().map_err(|e| e.to_string())?;
        self.accounts.insert(key, data);
        Ok(())
    }
}

impl AccountReader for Ledger {
    fn fetch_account_bytes(&self, address: &Pubkey) -> gem_client::Result<Option<Vec<u8>>> {
        self.accounts.fetch_account_bytes(address)
    }
}
