//! Word-packed strategies.
//!
//! Destination-major like [`dst_first_3a`](super::dst_first_3a), but instead of one byte store
//! per frame, 4 (or 8) strided source bytes are assembled into a single word and written with
//! one wide store.
//!
//! ## Byte order
//!
//! Words are assembled least-significant byte first (the earliest frame in the lowest byte) and
//! stored in host order. That only yields the right memory layout on a little-endian host, so
//! both strategies assert one. This is a restriction of the strategy, not something they correct.

use crate::layout::{check_fixed_shape, DST_SIZE, NUM_TIMESLOTS};
use core::ptr::write_unaligned;

const _: () = assert!(DST_SIZE % 4 == 0);
const _: () = assert!(DST_SIZE % 8 == 0);

#[inline(always)]
fn make_32(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    (b0 as u32) | ((b1 as u32) << 8) | ((b2 as u32) << 16) | ((b3 as u32) << 24)
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn make_64(b0: u8, b1: u8, b2: u8, b3: u8, b4: u8, b5: u8, b6: u8, b7: u8) -> u64 {
    (make_32(b0, b1, b2, b3) as u64)
        | ((b4 as u64) << 32)
        | ((b5 as u64) << 40)
        | ((b6 as u64) << 48)
        | ((b7 as u64) << 56)
}

#[inline(always)]
fn assert_little_endian_host() {
    assert!(
        cfg!(target_endian = "little"),
        "word-packed demux stores little-endian words and requires a little-endian host"
    );
}

/// Packs 4 frames of a channel into a `u32` per store.
///
/// # Panics
///
/// - If the source is not exactly [`SRC_SIZE`](crate::layout::SRC_SIZE) bytes, or a
///   destination is shorter than [`DST_SIZE`].
/// - On a big-endian host.
pub fn write4(src: &[u8], dst: &mut [&mut [u8]; NUM_TIMESLOTS]) {
    check_fixed_shape(src, dst);
    assert_little_endian_host();

    let src = src.as_ptr();
    unsafe {
        for (dst_num, d) in dst.iter_mut().enumerate() {
            let d = d.as_mut_ptr();
            let s = src.add(dst_num);
            let mut dst_pos = 0;
            while dst_pos < DST_SIZE {
                let b0 = *s.add((dst_pos + 0) * NUM_TIMESLOTS);
                let b1 = *s.add((dst_pos + 1) * NUM_TIMESLOTS);
                let b2 = *s.add((dst_pos + 2) * NUM_TIMESLOTS);
                let b3 = *s.add((dst_pos + 3) * NUM_TIMESLOTS);
                write_unaligned(d.add(dst_pos) as *mut u32, make_32(b0, b1, b2, b3));
                dst_pos += 4;
            }
        }
    }
}

/// Packs 8 frames of a channel into a `u64` per store.
///
/// # Panics
///
/// - If the source is not exactly [`SRC_SIZE`](crate::layout::SRC_SIZE) bytes, or a
///   destination is shorter than [`DST_SIZE`].
/// - On a big-endian host.
pub fn write8(src: &[u8], dst: &mut [&mut [u8]; NUM_TIMESLOTS]) {
    check_fixed_shape(src, dst);
    assert_little_endian_host();

    let src = src.as_ptr();
    unsafe {
        for (dst_num, d) in dst.iter_mut().enumerate() {
            let d = d.as_mut_ptr();
            let s = src.add(dst_num);
            let mut dst_pos = 0;
            while dst_pos < DST_SIZE {
                let b0 = *s.add((dst_pos + 0) * NUM_TIMESLOTS);
                let b1 = *s.add((dst_pos + 1) * NUM_TIMESLOTS);
                let b2 = *s.add((dst_pos + 2) * NUM_TIMESLOTS);
                let b3 = *s.add((dst_pos + 3) * NUM_TIMESLOTS);
                let b4 = *s.add((dst_pos + 4) * NUM_TIMESLOTS);
                let b5 = *s.add((dst_pos + 5) * NUM_TIMESLOTS);
                let b6 = *s.add((dst_pos + 6) * NUM_TIMESLOTS);
                let b7 = *s.add((dst_pos + 7) * NUM_TIMESLOTS);
                write_unaligned(
                    d.add(dst_pos) as *mut u64,
                    make_64(b0, b1, b2, b3, b4, b5, b6, b7),
                );
                dst_pos += 8;
            }
        }
    }
}
