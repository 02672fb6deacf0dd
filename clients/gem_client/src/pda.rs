use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use tracing::{debug, trace};

use crate::{
    constants::{MAX_SEEDS, MAX_SEED_LEN, METADATA_SEED, PDA_MARKER},
    error::{GemClientError, Result},
};

/// An off-curve address together with the bump that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

fn check_seeds(seeds: &[&[u8]], max_seeds: usize) -> Result<()> {
    if seeds.len() > max_seeds || seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(GemClientError::MaxSeedLengthExceeded);
    }
    Ok(())
}

/// Hashes `seeds` (bump already included) into a program address.
pub fn create_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<Pubkey> {
    check_seeds(seeds, MAX_SEEDS)?;

    let mut input: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 2);
    input.extend_from_slice(seeds);
    input.push(program_id.as_ref());
    input.push(PDA_MARKER);

    let candidate = Pubkey::new_from_array(hashv(&input).to_bytes());
    if candidate.is_on_curve() {
        return Err(GemClientError::InvalidSeeds);
    }
    Ok(candidate)
}

/// Searches bumps from 255 down to 0 and returns the first off-curve address.
pub fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<DerivedAddress> {
    // One slot is reserved for the bump.
    check_seeds(seeds, MAX_SEEDS - 1)?;

    for bump in (0..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut candidate_seeds = seeds.to_vec();
        candidate_seeds.push(&bump_seed);

        match create_program_address(&candidate_seeds, program_id) {
            Ok(address) => {
                debug!(%address, bump, %program_id, "derived program address");
                return Ok(DerivedAddress { address, bump });
            }
            Err(GemClientError::InvalidSeeds) => trace!(bump, "candidate on curve"),
            Err(err) => return Err(err),
        }
    }

    Err(GemClientError::DerivationExhausted)
}

/// Gem metadata account for `mint`, owned by the gem program.
pub fn derive_metadata_address(mint: &Pubkey, program_id: &Pubkey) -> Result<DerivedAddress> {
    derive(&[METADATA_SEED, mint.as_ref()], program_id)
}

/// Associated token account of `wallet` for `mint`.
pub fn derive_associated_token_address(
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program_id: &Pubkey,
    associated_token_program_id: &Pubkey,
) -> Result<DerivedAddress> {
    derive(
        &[wallet.as_ref(), token_program_id.as_ref(), mint.as_ref()],
        associated_token_program_id,
    )
}
