//! Source-major strategies.
//!
//! The source is read front to back; consecutive writes land in different channel buffers.

use crate::layout::{check_destinations, frame_count};

/// Running source cursor; for each frame, scatters one byte into every channel.
///
/// # Panics
///
/// - If `src.len()` is not a multiple of `CHANNELS`.
/// - If any destination is shorter than `src.len() / CHANNELS`.
pub fn src_first_1<const CHANNELS: usize>(src: &[u8], dst: &mut [&mut [u8]; CHANNELS]) {
    check_destinations(dst, frame_count(src.len(), CHANNELS));

    let mut src_pos = 0;
    let mut dst_pos = 0;
    while src_pos < src.len() {
        for d in dst.iter_mut() {
            d[dst_pos] = src[src_pos];
            src_pos += 1;
        }
        dst_pos += 1;
    }
}

/// Frame-outer, channel-inner, with the source index computed from both.
///
/// # Panics
///
/// - If `src.len()` is not a multiple of `CHANNELS`.
/// - If any destination is shorter than `src.len() / CHANNELS`.
pub fn src_first_2<const CHANNELS: usize>(src: &[u8], dst: &mut [&mut [u8]; CHANNELS]) {
    let frames = frame_count(src.len(), CHANNELS);
    check_destinations(dst, frames);

    for dst_pos in 0..frames {
        for dst_num in 0..CHANNELS {
            dst[dst_num][dst_pos] = src[dst_pos * CHANNELS + dst_num];
        }
    }
}

/// Single loop over the source; channel and frame derived with `%` and `/`.
///
/// The naive baseline for the unrolled strategies.
///
/// # Panics
///
/// - If `src.len()` is not a multiple of `CHANNELS`.
/// - If any destination is shorter than `src.len() / CHANNELS`.
pub fn src_first_3<const CHANNELS: usize>(src: &[u8], dst: &mut [&mut [u8]; CHANNELS]) {
    check_destinations(dst, frame_count(src.len(), CHANNELS));

    for (i, &byte) in src.iter().enumerate() {
        dst[i % CHANNELS][i / CHANNELS] = byte;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(src_first_1::<4>, "src_first_1")]
    #[case(src_first_2::<4>, "src_first_2")]
    #[case(src_first_3::<4>, "src_first_3")]
    fn four_channel_scenario(#[case] demux: DemuxFn<4>, #[case] impl_name: &str) {
        let src = [10u8, 11, 12, 13, 20, 21, 22, 23];
        let out = demux_into_vecs::<4>(demux, &src, 2);
        assert_eq!(
            out,
            vec![vec![10, 20], vec![11, 21], vec![12, 22], vec![13, 23]],
            "{impl_name}"
        );
    }

    #[rstest]
    #[case(src_first_1::<NUM_TIMESLOTS>, "src_first_1")]
    #[case(src_first_2::<NUM_TIMESLOTS>, "src_first_2")]
    #[case(src_first_3::<NUM_TIMESLOTS>, "src_first_3")]
    fn test_src_first_implementation(
        #[case] demux: DemuxFn<NUM_TIMESLOTS>,
        #[case] impl_name: &str,
    ) {
        for frames in 0..=130 {
            let src = generate_test_source(frames * NUM_TIMESLOTS);
            let expected =
                demux_into_vecs::<NUM_TIMESLOTS>(reference::<NUM_TIMESLOTS>, &src, frames);
            let actual = demux_into_vecs::<NUM_TIMESLOTS>(demux, &src, frames);
            assert_implementation_matches_reference(&expected, &actual, impl_name);
        }
    }

    #[rstest]
    #[case(src_first_1::<3>)]
    #[case(src_first_2::<3>)]
    #[case(src_first_3::<3>)]
    #[should_panic(expected = "not a multiple")]
    fn partial_frame_is_rejected(#[case] demux: DemuxFn<3>) {
        let src = [1u8; 7];
        demux_into_vecs::<3>(demux, &src, 3);
    }

    #[rstest]
    #[case(src_first_1::<2>)]
    #[case(src_first_2::<2>)]
    #[case(src_first_3::<2>)]
    #[should_panic(expected = "required")]
    fn short_destination_is_rejected(#[case] demux: DemuxFn<2>) {
        let src = [1u8; 8];
        demux_into_vecs::<2>(demux, &src, 3);
    }
}
