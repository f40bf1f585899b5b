//! Fixed buffer layout shared by every strategy.
//!
//! The general strategies accept any source whose length is a multiple of the channel count.
//! The fixed-shape ones (packed words, unrolled bodies) only accept exactly [`SRC_SIZE`] bytes.

/// Number of interleaved channels (timeslots) in a source buffer.
pub const NUM_TIMESLOTS: usize = 32;

/// Bytes per channel in the fixed configuration, i.e. the number of frames.
pub const DST_SIZE: usize = 64;

/// Bytes in a fixed-configuration source buffer.
pub const SRC_SIZE: usize = NUM_TIMESLOTS * DST_SIZE;

/// Default number of timed calls per benchmarked variant.
pub const ITERATIONS: u32 = 1_000_000;

/// Returns the number of frames held by a source of `source_len` bytes.
///
/// # Panics
///
/// If `channels` is zero or `source_len` is not a multiple of `channels`.
#[inline]
pub fn frame_count(source_len: usize, channels: usize) -> usize {
    assert!(channels > 0, "channel count must be non-zero");
    assert!(
        source_len % channels == 0,
        "source length {source_len} is not a multiple of {channels} channels"
    );
    source_len / channels
}

/// Asserts that every destination can hold `frames` bytes.
#[inline]
pub(crate) fn check_destinations<const CHANNELS: usize>(dst: &[&mut [u8]; CHANNELS], frames: usize) {
    for (channel, buffer) in dst.iter().enumerate() {
        assert!(
            buffer.len() >= frames,
            "destination {channel} holds {} bytes, {frames} required",
            buffer.len()
        );
    }
}

/// Asserts the fixed `NUM_TIMESLOTS x DST_SIZE` shape required by the fixed-shape strategies.
#[inline]
pub(crate) fn check_fixed_shape(src: &[u8], dst: &[&mut [u8]; NUM_TIMESLOTS]) {
    assert_eq!(
        src.len(),
        SRC_SIZE,
        "fixed-shape demux requires exactly {SRC_SIZE} source bytes"
    );
    check_destinations(dst, DST_SIZE);
}
