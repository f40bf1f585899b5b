//! Destination-major strategies.
//!
//! Each channel buffer is filled front to back; the source is read with stride `CHANNELS`.

use crate::layout::{check_destinations, check_fixed_shape, frame_count, DST_SIZE, NUM_TIMESLOTS};

/// Channel-outer, frame-inner, indexing the destination set on every write.
///
/// # Panics
///
/// - If `src.len()` is not a multiple of `CHANNELS`.
/// - If any destination is shorter than `src.len() / CHANNELS`.
pub fn dst_first_1<const CHANNELS: usize>(src: &[u8], dst: &mut [&mut [u8]; CHANNELS]) {
    let frames = frame_count(src.len(), CHANNELS);
    check_destinations(dst, frames);

    for dst_num in 0..CHANNELS {
        for dst_pos in 0..frames {
            dst[dst_num][dst_pos] = src[dst_pos * CHANNELS + dst_num];
        }
    }
}

/// As [`dst_first_1`], with the channel's buffer hoisted out of the inner loop.
///
/// # Panics
///
/// - If `src.len()` is not a multiple of `CHANNELS`.
/// - If any destination is shorter than `src.len() / CHANNELS`.
pub fn dst_first_1a<const CHANNELS: usize>(src: &[u8], dst: &mut [&mut [u8]; CHANNELS]) {
    let frames = frame_count(src.len(), CHANNELS);
    check_destinations(dst, frames);

    for (dst_num, d) in dst.iter_mut().enumerate() {
        for dst_pos in 0..frames {
            d[dst_pos] = src[dst_pos * CHANNELS + dst_num];
        }
    }
}

/// Hoisted channel buffer plus a strided source cursor instead of a computed index.
///
/// # Panics
///
/// - If `src.len()` is not a multiple of `CHANNELS`.
/// - If any destination is shorter than `src.len() / CHANNELS`.
pub fn dst_first_2<const CHANNELS: usize>(src: &[u8], dst: &mut [&mut [u8]; CHANNELS]) {
    let frames = frame_count(src.len(), CHANNELS);
    check_destinations(dst, frames);

    for (dst_num, d) in dst.iter_mut().enumerate() {
        let strided = src.iter().skip(dst_num).step_by(CHANNELS);
        for (slot, &byte) in d[..frames].iter_mut().zip(strided) {
            *slot = byte;
        }
    }
}

/// [`dst_first_1`] with the frame loop bounded by the compile-time [`DST_SIZE`].
///
/// # Panics
///
/// If the source is not exactly [`SRC_SIZE`](crate::layout::SRC_SIZE) bytes, or a destination
/// is shorter than [`DST_SIZE`].
pub fn dst_first_3(src: &[u8], dst: &mut [&mut [u8]; NUM_TIMESLOTS]) {
    check_fixed_shape(src, dst);

    let src = src.as_ptr();
    unsafe {
        for dst_num in 0..NUM_TIMESLOTS {
            for dst_pos in 0..DST_SIZE {
                *dst[dst_num].as_mut_ptr().add(dst_pos) =
                    *src.add(dst_pos * NUM_TIMESLOTS + dst_num);
            }
        }
    }
}

/// [`dst_first_3`] with the channel's base pointer hoisted out of the frame loop.
///
/// # Panics
///
/// If the source is not exactly [`SRC_SIZE`](crate::layout::SRC_SIZE) bytes, or a destination
/// is shorter than [`DST_SIZE`].
pub fn dst_first_3a(src: &[u8], dst: &mut [&mut [u8]; NUM_TIMESLOTS]) {
    check_fixed_shape(src, dst);

    let src = src.as_ptr();
    unsafe {
        for (dst_num, d) in dst.iter_mut().enumerate() {
            let d = d.as_mut_ptr();
            for dst_pos in 0..DST_SIZE {
                *d.add(dst_pos) = *src.add(dst_pos * NUM_TIMESLOTS + dst_num);
            }
        }
    }
}
