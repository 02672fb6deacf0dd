use anchor_lang::prelude::Pubkey;

use crate::{
    codec::{self, Field, FieldType, Record, Schema, Value},
    constants::{BURN_DISCRIMINANT, MINT_DISCRIMINANT, TRANSFER_DISCRIMINANT},
    error::{GemClientError, Result},
    instructions::template::{
        AccountRole, AccountSet, AccountSlot, BURN_ACCOUNTS, MINT_ACCOUNTS, TRANSFER_ACCOUNTS,
    },
};

const MINT_FIELDS: &[Field] = &[
    Field::new("id", FieldType::U8),
    Field::new("color", FieldType::String),
    Field::new("rarity", FieldType::String),
    Field::new("short_description", FieldType::String),
];
const DISCRIMINANT_ONLY_FIELDS: &[Field] = &[Field::new("id", FieldType::U8)];

const MINT_SCHEMA: Schema = Schema::new(MINT_FIELDS);
const DISCRIMINANT_ONLY_SCHEMA: Schema = Schema::new(DISCRIMINANT_ONLY_FIELDS);

/// Instruction payload of the gem program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GemInstruction {
    Mint {
        color: String,
        rarity: String,
        short_description: String,
    },
    Transfer,
    Burn,
}

impl GemInstruction {
    pub fn discriminant(&self) -> u8 {
        match self {
            GemInstruction::Mint { .. } => MINT_DISCRIMINANT,
            GemInstruction::Transfer => TRANSFER_DISCRIMINANT,
            GemInstruction::Burn => BURN_DISCRIMINANT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GemInstruction::Mint { .. } => "mint",
            GemInstruction::Transfer => "transfer",
            GemInstruction::Burn => "burn",
        }
    }

    pub fn schema(&self) -> &'static Schema {
        match self {
            GemInstruction::Mint { .. } => &MINT_SCHEMA,
            GemInstruction::Transfer | GemInstruction::Burn => &DISCRIMINANT_ONLY_SCHEMA,
        }
    }

    pub fn accounts(&self) -> &'static [AccountSlot] {
        match self {
            GemInstruction::Mint { .. } => MINT_ACCOUNTS,
            GemInstruction::Transfer => TRANSFER_ACCOUNTS,
            GemInstruction::Burn => BURN_ACCOUNTS,
        }
    }

    pub fn pack(&self) -> Result<Vec<u8>> {
        let mut record = Record::new().with("id", Value::U8(self.discriminant()));
        if let GemInstruction::Mint {
            color,
            rarity,
            short_description,
        } = self
        {
            record.insert("color", Value::String(color.clone()));
            record.insert("rarity", Value::String(rarity.clone()));
            record.insert("short_description", Value::String(short_description.clone()));
        }
        codec::encode(self.schema(), &record)
    }

    pub fn unpack(data: &[u8]) -> Result<Self> {
        let discriminant = *data.first().ok_or(GemClientError::TruncatedInput {
            field: "id",
            needed: 1,
            remaining: 0,
        })?;

        match discriminant {
            MINT_DISCRIMINANT => {
                let mut record = codec::decode_exact(&MINT_SCHEMA, data)?;
                Ok(GemInstruction::Mint {
                    color: record.take("color")?.into_string("color")?,
                    rarity: record.take("rarity")?.into_string("rarity")?,
                    short_description: record
                        .take("short_description")?
                        .into_string("short_description")?,
                })
            }
            TRANSFER_DISCRIMINANT => {
                codec::decode_exact(&DISCRIMINANT_ONLY_SCHEMA, data)?;
                Ok(GemInstruction::Transfer)
            }
            BURN_DISCRIMINANT => {
                codec::decode_exact(&DISCRIMINANT_ONLY_SCHEMA, data)?;
                Ok(GemInstruction::Burn)
            }
            other => Err(GemClientError::UnknownDiscriminant(other)),
        }
    }
}

/// Instruction arguments and the caller-supplied accounts that go with them.
pub trait GemArgs {
    fn instruction(&self) -> Result<GemInstruction>;

    fn account_set(&self) -> AccountSet;
}

macro_rules! impl_setters {
    ($t:ty { $($field:ident: $ty:ty),* $(,)? }) => {
        impl $t {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

fn required<T: Clone>(value: &Option<T>, name: &'static str) -> Result<T> {
    value.clone().ok_or(GemClientError::MissingArgument(name))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintArgs {
    pub fee_payer: Option<Pubkey>,
    pub mint: Option<Pubkey>,
    pub funding: Option<Pubkey>,
    /// Wallet that receives the associated token account.
    pub wallet: Option<Pubkey>,
    /// Minting authority of `mint`.
    pub owner: Option<Pubkey>,
    pub color: Option<String>,
    pub rarity: Option<String>,
    pub short_description: Option<String>,
}

impl_setters!(MintArgs {
    fee_payer: Pubkey,
    mint: Pubkey,
    funding: Pubkey,
    wallet: Pubkey,
    owner: Pubkey,
    color: String,
    rarity: String,
    short_description: String,
});

impl GemArgs for MintArgs {
    fn instruction(&self) -> Result<GemInstruction> {
        Ok(GemInstruction::Mint {
            color: required(&self.color, "color")?,
            rarity: required(&self.rarity, "rarity")?,
            short_description: required(&self.short_description, "short_description")?,
        })
    }

    fn account_set(&self) -> AccountSet {
        AccountSet::new()
            .with_optional(AccountRole::FeePayer, self.fee_payer)
            .with_optional(AccountRole::Mint, self.mint)
            .with_optional(AccountRole::Funding, self.funding)
            .with_optional(AccountRole::Wallet, self.wallet)
            .with_optional(AccountRole::Owner, self.owner)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferArgs {
    pub fee_payer: Option<Pubkey>,
    pub mint: Option<Pubkey>,
    pub funding: Option<Pubkey>,
    /// Receiving wallet; its associated token account is created if needed.
    pub wallet: Option<Pubkey>,
    pub source: Option<Pubkey>,
    pub destination: Option<Pubkey>,
    /// Owner or delegate of `source`.
    pub authority: Option<Pubkey>,
}

impl_setters!(TransferArgs {
    fee_payer: Pubkey,
    mint: Pubkey,
    funding: Pubkey,
    wallet: Pubkey,
    source: Pubkey,
    destination: Pubkey,
    authority: Pubkey,
});

impl GemArgs for TransferArgs {
    fn instruction(&self) -> Result<GemInstruction> {
        Ok(GemInstruction::Transfer)
    }

    fn account_set(&self) -> AccountSet {
        AccountSet::new()
            .with_optional(AccountRole::FeePayer, self.fee_payer)
            .with_optional(AccountRole::Mint, self.mint)
            .with_optional(AccountRole::Funding, self.funding)
            .with_optional(AccountRole::Wallet, self.wallet)
            .with_optional(AccountRole::Source, self.source)
            .with_optional(AccountRole::Destination, self.destination)
            .with_optional(AccountRole::Authority, self.authority)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BurnArgs {
    pub fee_payer: Option<Pubkey>,
    pub mint: Option<Pubkey>,
    /// Owner or delegate of the burned token account.
    pub owner: Option<Pubkey>,
    /// Wallet whose associated token account is burned from.
    pub wallet: Option<Pubkey>,
}

impl_setters!(BurnArgs {
    fee_payer: Pubkey,
    mint: Pubkey,
    owner: Pubkey,
    wallet: Pubkey,
});

impl GemArgs for BurnArgs {
    fn instruction(&self) -> Result<GemInstruction> {
        Ok(GemInstruction::Burn)
    }

    fn account_set(&self) -> AccountSet {
        AccountSet::new()
            .with_optional(AccountRole::FeePayer, self.fee_payer)
            .with_optional(AccountRole::Mint, self.mint)
            .with_optional(AccountRole::Owner, self.owner)
            .with_optional(AccountRole::Wallet, self.wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_payload_layout() {
        let ix = GemInstruction::Mint {
            color: "Red".into(),
            rarity: "".into(),
            short_description: "x".into(),
        };
        let data = ix.pack().unwrap();
        assert_eq!(
            data,
            vec![0, 3, 0, 0, 0, b'R', b'e', b'd', 0, 0, 0, 0, 1, 0, 0, 0, b'x']
        );
        assert_eq!(GemInstruction::unpack(&data).unwrap(), ix);
    }

    #[test]
    fn discriminant_only_payloads() {
        assert_eq!(GemInstruction::Transfer.pack().unwrap(), vec![1]);
        assert_eq!(GemInstruction::Burn.pack().unwrap(), vec![2]);
        assert_eq!(GemInstruction::unpack(&[2]).unwrap(), GemInstruction::Burn);
    }

    #[test]
    fn unpack_rejects_unknown_and_empty() {
        assert_eq!(
            GemInstruction::unpack(&[9]),
            Err(GemClientError::UnknownDiscriminant(9))
        );
        assert!(matches!(
            GemInstruction::unpack(&[]),
            Err(GemClientError::TruncatedInput { field: "id", .. })
        ));
        assert_eq!(
            GemInstruction::unpack(&[1, 0]),
            Err(GemClientError::TrailingBytes { remaining: 1 })
        );
    }

    #[test]
    fn missing_string_is_reported() {
        let args = MintArgs::default().color("Blue").rarity("Common");
        assert_eq!(
            args.instruction(),
            Err(GemClientError::MissingArgument("short_description"))
        );
    }
}
