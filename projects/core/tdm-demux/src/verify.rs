//! Correctness oracle.
//!
//! A candidate is run side by side with [`reference`] over identical, deterministically generated
//! input. Any difference is a [`VerifyError::Mismatch`]; timing a variant that fails here would be
//! meaningless.

use crate::allocate::{allocate_zeroed_align_64, AllocateError, ChannelBuffers};
use crate::demux::{reference, DemuxFn, DemuxVariant};
use crate::error::VerifyError;
use crate::layout::{DST_SIZE, NUM_TIMESLOTS, SRC_SIZE};
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use safe_allocator_api::RawAlloc;

/// Seed for [`generate_source`]. Fixed so every run verifies and times the same bytes.
pub const SOURCE_SEED: u64 = 0;

/// Allocates `len` bytes filled from a pseudo-random generator seeded with [`SOURCE_SEED`].
///
/// Two calls with the same `len` produce identical buffers.
pub fn generate_source(len: usize) -> Result<RawAlloc, AllocateError> {
    let mut buf = allocate_zeroed_align_64(len)?;
    let mut rng = StdRng::seed_from_u64(SOURCE_SEED);
    rng.fill_bytes(buf.as_mut_slice());
    Ok(buf)
}

/// Compares two destination sets channel by channel.
///
/// Returns the first channel that differs, and the first differing frame within it.
pub fn compare_channels<'a, 'b>(
    variant: &'static str,
    expected: impl IntoIterator<Item = &'a [u8]>,
    actual: impl IntoIterator<Item = &'b [u8]>,
) -> Result<(), VerifyError> {
    for (channel, (expected, actual)) in expected.into_iter().zip(actual).enumerate() {
        if expected != actual {
            let frame = expected
                .iter()
                .zip(actual)
                .position(|(a, b)| a != b)
                .unwrap_or(expected.len().min(actual.len()));
            return Err(VerifyError::Mismatch {
                variant,
                channel,
                frame,
            });
        }
    }
    Ok(())
}

/// Verifies a registered variant against the reference at the fixed configuration.
pub fn verify(variant: DemuxVariant) -> Result<(), VerifyError> {
    verify_fn(variant.name(), variant.function())
}

/// Verifies an arbitrary candidate against the reference at the fixed configuration.
///
/// A fresh source and two fresh, zeroed destination sets are used, so nothing a previous
/// benchmark left behind can mask a defect.
pub fn verify_fn(name: &'static str, candidate: DemuxFn<NUM_TIMESLOTS>) -> Result<(), VerifyError> {
    let src = generate_source(SRC_SIZE)?;
    let mut expected = ChannelBuffers::<NUM_TIMESLOTS>::new(DST_SIZE)?;
    let mut actual = ChannelBuffers::<NUM_TIMESLOTS>::new(DST_SIZE)?;

    reference::<NUM_TIMESLOTS>(src.as_slice(), &mut expected.as_mut_slices());
    candidate(src.as_slice(), &mut actual.as_mut_slices());

    compare_channels(name, expected.iter(), actual.iter())?;
    debug!("{name}: output identical to reference");
    Ok(())
}
