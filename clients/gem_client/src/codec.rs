//! Schema-driven binary codec.
//!
//! Values are written in schema order with no framing: integers as
//! little-endian fixed width, addresses as their raw 32 bytes, strings as a
//! `u32` little-endian byte count followed by the UTF-8 bytes, and options as
//! a `0`/`1` tag byte followed by the inner value when present. The layout is
//! byte-for-byte what borsh produces for the same struct.

use anchor_lang::prelude::Pubkey;

use crate::error::{GemClientError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U8,
    U16,
    U32,
    U64,
    Address,
    String,
    Option(&'static FieldType),
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::U8 => "u8",
            FieldType::U16 => "u16",
            FieldType::U32 => "u32",
            FieldType::U64 => "u64",
            FieldType::Address => "address",
            FieldType::String => "string",
            FieldType::Option(_) => "option",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

impl Field {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }
}

/// Ordered field layout of one wire structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [Field],
}

impl Schema {
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Address(Pubkey),
    String(String),
    Option(Option<Box<Value>>),
}

impl Value {
    pub fn some(value: Value) -> Self {
        Value::Option(Some(Box::new(value)))
    }

    pub fn into_u8(self, field: &'static str) -> Result<u8> {
        match self {
            Value::U8(v) => Ok(v),
            _ => Err(mismatch(field, &FieldType::U8)),
        }
    }

    pub fn into_address(self, field: &'static str) -> Result<Pubkey> {
        match self {
            Value::Address(key) => Ok(key),
            _ => Err(mismatch(field, &FieldType::Address)),
        }
    }

    pub fn into_string(self, field: &'static str) -> Result<String> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(mismatch(field, &FieldType::String)),
        }
    }

    pub fn into_option(self, field: &'static str) -> Result<Option<Value>> {
        match self {
            Value::Option(inner) => Ok(inner.map(|boxed| *boxed)),
            _ => Err(GemClientError::SchemaMismatch {
                field,
                expected: "option",
            }),
        }
    }
}

/// Named values in insertion order. Lookups are by name, so a record can be
/// assembled in any order and still encode in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    entries: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &'static str, value: Value) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }

    /// Removes and returns `name`, failing with `SchemaMismatch` if absent.
    pub fn take(&mut self, name: &'static str) -> Result<Value> {
        let index = self
            .entries
            .iter()
            .position(|(n, _)| *n == name)
            .ok_or(GemClientError::SchemaMismatch {
                field: name,
                expected: "a value",
            })?;
        Ok(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn mismatch(field: &'static str, ty: &FieldType) -> GemClientError {
    GemClientError::SchemaMismatch {
        field,
        expected: ty.name(),
    }
}

pub fn encode(schema: &Schema, record: &Record) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for field in schema.fields {
        let value = record
            .get(field.name)
            .ok_or_else(|| mismatch(field.name, &field.ty))?;
        write_value(&mut out, field.name, &field.ty, value)?;
    }
    Ok(out)
}

fn write_value(out: &mut Vec<u8>, field: &'static str, ty: &FieldType, value: &Value) -> Result<()> {
    match (ty, value) {
        (FieldType::U8, Value::U8(v)) => out.push(*v),
        (FieldType::U16, Value::U16(v)) => out.extend_from_slice(&v.to_le_bytes()),
        (FieldType::U32, Value::U32(v)) => out.extend_from_slice(&v.to_le_bytes()),
        (FieldType::U64, Value::U64(v)) => out.extend_from_slice(&v.to_le_bytes()),
        (FieldType::Address, Value::Address(key)) => out.extend_from_slice(key.as_ref()),
        (FieldType::String, Value::String(s)) => {
            let len = u32::try_from(s.len()).map_err(|_| mismatch(field, ty))?;
            out.extend_from_slice(&len.to_le_bytes());
            out.extend_from_slice(s.as_bytes());
        }
        (FieldType::Option(_), Value::Option(None)) => out.push(0),
        (FieldType::Option(inner), Value::Option(Some(v))) => {
            out.push(1);
            write_value(out, field, inner, v)?;
        }
        _ => return Err(mismatch(field, ty)),
    }
    Ok(())
}

struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, field: &'static str, needed: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(GemClientError::TruncatedInput {
                field,
                needed,
                remaining,
            });
        }
        let bytes = &self.data[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(field, N)?);
        Ok(array)
    }
}

fn read_value(reader: &mut Reader<'_>, field: &'static str, ty: &FieldType) -> Result<Value> {
    let value = match ty {
        FieldType::U8 => Value::U8(reader.take(field, 1)?[0]),
        FieldType::U16 => Value::U16(u16::from_le_bytes(reader.take_array(field)?)),
        FieldType::U32 => Value::U32(u32::from_le_bytes(reader.take_array(field)?)),
        FieldType::U64 => Value::U64(u64::from_le_bytes(reader.take_array(field)?)),
        FieldType::Address => Value::Address(Pubkey::new_from_array(reader.take_array(field)?)),
        FieldType::String => {
            let len = u32::from_le_bytes(reader.take_array(field)?) as usize;
            let raw = reader.take(field, len)?;
            let s = std::str::from_utf8(raw).map_err(|_| GemClientError::InvalidUtf8 { field })?;
            Value::String(s.to_owned())
        }
        FieldType::Option(inner) => match reader.take(field, 1)?[0] {
            0 => Value::Option(None),
            1 => Value::some(read_value(reader, field, inner)?),
            tag => return Err(GemClientError::InvalidOptionTag { field, tag }),
        },
    };
    Ok(value)
}

/// Decodes `schema` from the front of `data`, returning the record and the
/// number of bytes consumed. Bytes past the last field are ignored.
pub fn decode(schema: &Schema, data: &[u8]) -> Result<(Record, usize)> {
    let mut reader = Reader { data, offset: 0 };
    let mut record = Record::new();
    for field in schema.fields {
        let value = read_value(&mut reader, field.name, &field.ty)?;
        record.insert(field.name, value);
    }
    Ok((record, reader.offset))
}

/// Like [`decode`], but every byte of `data` must be consumed.
pub fn decode_exact(schema: &Schema, data: &[u8]) -> Result<Record> {
    let (record, consumed) = decode(schema, data)?;
    if consumed != data.len() {
        return Err(GemClientError::TrailingBytes {
            remaining: data.len() - consumed,
        });
    }
    Ok(record)
}

/// A typed structure with a fixed wire schema.
pub trait WireRecord: Sized {
    const SCHEMA: Schema;

    fn to_record(&self) -> Record;

    fn from_record(record: Record) -> Result<Self>;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        encode(&Self::SCHEMA, &self.to_record())
    }

    fn from_bytes(data: &[u8]) -> Result<Self> {
        let (record, _) = decode(&Self::SCHEMA, data)?;
        Self::from_record(record)
    }
}
