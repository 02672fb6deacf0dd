//! Codec round trips and byte compatibility with borsh.

#![allow(clippy::unwrap_used)]

use anchor_lang::prelude::{AnchorSerialize, Pubkey};
use gem_client::{
    codec::{decode, decode_exact, encode, Field, FieldType, Record, Schema, Value, WireRecord},
    GemClientError, GemRecord,
};
use proptest::prelude::*;

const EVERYTHING_FIELDS: &[Field] = &[
    Field::new("a", FieldType::U8),
    Field::new("b", FieldType::U16),
    Field::new("c", FieldType::U32),
    Field::new("d", FieldType::U64),
    Field::new("key", FieldType::Address),
    Field::new("text", FieldType::String),
    Field::new("maybe_key", FieldType::Option(&FieldType::Address)),
    Field::new("maybe_text", FieldType::Option(&FieldType::String)),
];
const EVERYTHING: Schema = Schema::new(EVERYTHING_FIELDS);
const ONE_FIELDS: &[Field] = &[Field::new("s", FieldType::String)];
const ONE: Schema = Schema::new(ONE_FIELDS);

fn borsh_bytes(gem: &GemRecord) -> Vec<u8> {
    let mut buf = Vec::new();
    AnchorSerialize::serialize(&gem.mint, &mut buf).unwrap();
    AnchorSerialize::serialize(&gem.associated_account, &mut buf).unwrap();
    AnchorSerialize::serialize(&gem.color, &mut buf).unwrap();
    AnchorSerialize::serialize(&gem.rarity, &mut buf).unwrap();
    AnchorSerialize::serialize(&gem.short_description, &mut buf).unwrap();
    buf
}

fn pubkey() -> impl Strategy<Value = Pubkey> {
    any::<[u8; 32]>().prop_map(Pubkey::new_from_array)
}

fn gem() -> impl Strategy<Value = GemRecord> {
    (
        pubkey(),
        proptest::option::of(pubkey()),
        any::<String>(),
        any::<String>(),
        ".{0,200}",
    )
        .prop_map(|(mint, associated_account, color, rarity, short_description)| GemRecord {
            mint,
            associated_account,
            color,
            rarity,
            short_description,
        })
}

proptest! {
    #[test]
    fn prop_gem_roundtrip(gem in gem()) {
        let bytes = gem.to_bytes().unwrap();
        prop_assert_eq!(GemRecord::from_bytes(&bytes).unwrap(), gem);
    }

    #[test]
    fn prop_gem_matches_borsh(gem in gem()) {
        prop_assert_eq!(gem.to_bytes().unwrap(), borsh_bytes(&gem));
    }

    #[test]
    fn prop_every_field_type_roundtrip(
        a in any::<u8>(),
        b in any::<u16>(),
        c in any::<u32>(),
        d in any::<u64>(),
        key in pubkey(),
        text in any::<String>(),
        maybe_key in proptest::option::of(pubkey()),
        maybe_text in proptest::option::of(any::<String>()),
    ) {
        let record = Record::new()
            .with("a", Value::U8(a))
            .with("b", Value::U16(b))
            .with("c", Value::U32(c))
            .with("d", Value::U64(d))
            .with("key", Value::Address(key))
            .with("text", Value::String(text))
            .with("maybe_key", Value::Option(maybe_key.map(|k| Box::new(Value::Address(k)))))
            .with("maybe_text", Value::Option(maybe_text.map(|t| Box::new(Value::String(t)))));

        let bytes = encode(&EVERYTHING, &record).unwrap();
        let decoded = decode_exact(&EVERYTHING, &bytes).unwrap();
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn prop_truncation_never_panics(gem in gem(), cut in 0usize..400) {
        let bytes = gem.to_bytes().unwrap();
        let cut = cut.min(bytes.len());
        match GemRecord::from_bytes(&bytes[..cut]) {
            Ok(decoded) => prop_assert_eq!(decoded, gem),
            Err(err) => {
                let truncated = matches!(err, GemClientError::TruncatedInput { .. });
                prop_assert!(truncated);
            }
        }
    }
}

#[test]
fn gem_without_association() {
    let gem = GemRecord {
        mint: Pubkey::new_unique(),
        associated_account: None,
        color: "Green".into(),
        rarity: "Common".into(),
        short_description: String::new(),
    };
    let bytes = gem.to_bytes().unwrap();
    assert_eq!(bytes[32], 0);
    assert_eq!(bytes.len(), 32 + 1 + (4 + 5) + (4 + 6) + 4);
    assert_eq!(GemRecord::from_bytes(&bytes).unwrap(), gem);
}

#[test]
fn utf8_lengths_count_bytes() {
    let record = Record::new().with("s", Value::String("💎".into()));
    let bytes = encode(&ONE, &record).unwrap();
    assert_eq!(&bytes[..4], &4u32.to_le_bytes());

    let (decoded, consumed) = decode(&ONE, &bytes).unwrap();
    assert_eq!(consumed, 8);
    assert_eq!(decoded, record);
}

#[test]
fn invalid_utf8_is_reported() {
    assert_eq!(
        decode(&ONE, &[2, 0, 0, 0, 0xc3, 0x28]).unwrap_err(),
        GemClientError::InvalidUtf8 { field: "s" }
    );
}
