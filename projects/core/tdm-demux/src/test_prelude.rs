//! Common test imports and utilities for demux tests

pub use rstest::rstest;

pub use crate::demux::*;
pub use crate::layout::{DST_SIZE, NUM_TIMESLOTS, SRC_SIZE};

/// Source of `len` bytes whose value encodes its position, wrapping every 251 bytes
/// so neighbouring frames of one channel never repeat a value.
pub(crate) fn generate_test_source(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Runs `demux` into freshly zeroed destinations of `frames` bytes and returns them.
pub(crate) fn demux_into_vecs<const CHANNELS: usize>(
    demux: DemuxFn<CHANNELS>,
    src: &[u8],
    frames: usize,
) -> Vec<Vec<u8>> {
    let mut buffers: [Vec<u8>; CHANNELS] = core::array::from_fn(|_| vec![0u8; frames]);
    let mut dst = buffers.each_mut().map(|buffer| buffer.as_mut_slice());
    demux(src, &mut dst);
    buffers.into_iter().collect()
}

/// Asserts the mapping `dst[channel][frame] == src[frame * CHANNELS + channel]` directly.
pub(crate) fn assert_mapping<const CHANNELS: usize>(src: &[u8], dst: &[Vec<u8>], impl_name: &str) {
    for (channel, buffer) in dst.iter().enumerate() {
        for (frame, &byte) in buffer.iter().enumerate().take(src.len() / CHANNELS) {
            assert_eq!(
                byte,
                src[frame * CHANNELS + channel],
                "{impl_name} wrote the wrong byte at channel {channel}, frame {frame}"
            );
        }
    }
}

/// Helper to assert implementation results match reference implementation
pub(crate) fn assert_implementation_matches_reference(
    output_expected: &[Vec<u8>],
    output_test: &[Vec<u8>],
    impl_name: &str,
) {
    assert_eq!(output_expected.len(), output_test.len());
    for (channel, (expected, actual)) in output_expected.iter().zip(output_test).enumerate() {
        assert_eq!(
            expected, actual,
            "{impl_name} implementation produced different results than reference for channel {channel}.\n\
            Source byte values are (position % 251), so the first differing byte tells which frame was misplaced."
        );
    }
}

#[test]
fn validate_test_source_generator() {
    let src = generate_test_source(256);
    assert_eq!(src[0], 0);
    assert_eq!(src[250], 250);
    assert_eq!(src[251], 0);
    assert_eq!(src.len(), 256);
}
