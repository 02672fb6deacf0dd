use std::path::Path;

use anchor_lang::prelude::Pubkey;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID},
    error::{GemClientError, Result},
    pda::{self, DerivedAddress},
};

/// Program ids an [`InstructionBuilder`](crate::InstructionBuilder) targets.
///
/// Only `program_id` varies between deployments; the collaborator programs
/// default to their well-known mainnet addresses. Serialized pubkeys are
/// base58 strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(with = "pubkey_string")]
    pub program_id: Pubkey,

    #[serde(with = "pubkey_string", default = "default_system_program")]
    pub system_program_id: Pubkey,

    #[serde(with = "pubkey_string", default = "default_token_program")]
    pub token_program_id: Pubkey,

    #[serde(with = "pubkey_string", default = "default_associated_token_program")]
    pub associated_token_program_id: Pubkey,
}

fn default_system_program() -> Pubkey {
    SYSTEM_PROGRAM_ID
}

fn default_token_program() -> Pubkey {
    TOKEN_PROGRAM_ID
}

fn default_associated_token_program() -> Pubkey {
    ASSOCIATED_TOKEN_PROGRAM_ID
}

impl ClientConfig {
    pub fn new(program_id: Pubkey) -> Self {
        Self {
            program_id,
            system_program_id: SYSTEM_PROGRAM_ID,
            token_program_id: TOKEN_PROGRAM_ID,
            associated_token_program_id: ASSOCIATED_TOKEN_PROGRAM_ID,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GemClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GemClientError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.program_id == Pubkey::default() {
            return Err(GemClientError::Config("program_id is unset".to_string()));
        }
        let collaborators = [
            self.system_program_id,
            self.token_program_id,
            self.associated_token_program_id,
        ];
        if collaborators.contains(&self.program_id) {
            return Err(GemClientError::Config(format!(
                "program_id {} collides with a collaborator program",
                self.program_id
            )));
        }
        Ok(())
    }

    pub fn metadata_address(&self, mint: &Pubkey) -> Result<DerivedAddress> {
        pda::derive_metadata_address(mint, &self.program_id)
    }

    pub fn associated_token_address(&self, wallet: &Pubkey, mint: &Pubkey) -> Result<DerivedAddress> {
        pda::derive_associated_token_address(
            wallet,
            mint,
            &self.token_program_id,
            &self.associated_token_program_id,
        )
    }
}

mod pubkey_string {
    use std::str::FromStr;

    use anchor_lang::prelude::Pubkey;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Pubkey::from_str(&raw).map_err(D::Error::custom)
    }
}
