use anchor_lang::prelude::Pubkey;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    codec::{self, Field, FieldType, Record, Schema, Value, WireRecord},
    error::{GemClientError, Result},
};

/// Metadata account the gem program keeps for every minted gem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GemRecord {
    pub mint: Pubkey,
    /// Token account currently holding the gem.
    pub associated_account: Option<Pubkey>,
    pub color: String,
    pub rarity: String,
    pub short_description: String,
}

const GEM_FIELDS: &[Field] = &[
    Field::new("mint", FieldType::Address),
    Field::new("assoc_account", FieldType::Option(&FieldType::Address)),
    Field::new("color", FieldType::String),
    Field::new("rarity", FieldType::String),
    Field::new("short_description", FieldType::String),
];
const MINT_PREFIX_FIELDS: &[Field] = &[Field::new("mint", FieldType::Address)];

const MINT_PREFIX: Schema = Schema::new(MINT_PREFIX_FIELDS);

impl WireRecord for GemRecord {
    const SCHEMA: Schema = Schema::new(GEM_FIELDS);

    fn to_record(&self) -> Record {
        let associated = match self.associated_account {
            Some(key) => Value::some(Value::Address(key)),
            None => Value::Option(None),
        };
        Record::new()
            .with("mint", Value::Address(self.mint))
            .with("assoc_account", associated)
            .with("color", Value::String(self.color.clone()))
            .with("rarity", Value::String(self.rarity.clone()))
            .with("short_description", Value::String(self.short_description.clone()))
    }

    fn from_record(mut record: Record) -> Result<Self> {
        let associated_account = record
            .take("assoc_account")?
            .into_option("assoc_account")?
            .map(|value| value.into_address("assoc_account"))
            .transpose()?;

        Ok(Self {
            mint: record.take("mint")?.into_address("mint")?,
            associated_account,
            color: record.take("color")?.into_string("color")?,
            rarity: record.take("rarity")?.into_string("rarity")?,
            short_description: record
                .take("short_description")?
                .into_string("short_description")?,
        })
    }
}

/// Decodes raw gem account data.
///
/// A missing account and an empty buffer both mean the gem does not exist
/// (never minted, or burned) and yield `Ok(None)`. Bytes past the encoded
/// record are allocation slack and are ignored.
pub fn decode_gem(data: Option<&[u8]>) -> Result<Option<GemRecord>> {
    match data {
        None => Ok(None),
        Some(bytes) if bytes.is_empty() => Ok(None),
        Some(bytes) => GemRecord::from_bytes(bytes).map(Some),
    }
}

/// Decodes gem account data as returned base64-encoded by RPC nodes.
pub fn decode_gem_base64(encoded: &str) -> Result<Option<GemRecord>> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| GemClientError::Base64(e.to_string()))?;
    decode_gem(Some(bytes.as_slice()))
}

/// Reads only the leading mint address of a gem account.
pub fn read_gem_mint(data: &[u8]) -> Result<Pubkey> {
    let prefix = data.get(..32).ok_or(GemClientError::TruncatedInput {
        field: "mint",
        needed: 32,
        remaining: data.len(),
    })?;
    codec::decode_exact(&MINT_PREFIX, prefix)?
        .take("mint")?
        .into_address("mint")
}
