//! Unrolled strategies.
//!
//! These only exist for the fixed `32 x 64` shape. The body that moves one channel's 64 bytes is
//! fully unrolled, and the loop over channels is unrolled by 1, 2, 4, 8, 16 or 32 (no loop).
//!
//! All bodies come from [`move_timeslot!`] and the [`unrolled_variant!`] generator, so every
//! factor runs the exact same per-channel code.

use crate::layout::{check_fixed_shape, DST_SIZE, NUM_TIMESLOTS};
use seq_macro::seq;

// The literal bounds below are written against these values.
const _: () = assert!(NUM_TIMESLOTS == 32);
const _: () = assert!(DST_SIZE == 64);

/// Copies all 64 frames of channel `$j` from `$src` (a `*const u8`) into `$dst[$j]`.
macro_rules! move_timeslot {
    ($src:ident, $dst:ident, $j:expr) => {{
        let j = $j;
        let d = $dst[j].as_mut_ptr();
        let s = $src.add(j);
        seq!(I in 0..64 {
            *d.add(I) = *s.add(I * 32);
        });
    }};
}

/// Defines a strategy whose channel loop advances by `$step` channels per iteration.
macro_rules! unrolled_variant {
    ($(#[$meta:meta])* $name:ident, $step:tt) => {
        $(#[$meta])*
        ///
        /// # Panics
        ///
        /// If the source is not exactly [`SRC_SIZE`](crate::layout::SRC_SIZE) bytes, or a
        /// destination is shorter than [`DST_SIZE`].
        pub fn $name(src: &[u8], dst: &mut [&mut [u8]; NUM_TIMESLOTS]) {
            check_fixed_shape(src, dst);

            let src = src.as_ptr();
            let mut j = 0;
            unsafe {
                while j < NUM_TIMESLOTS {
                    seq!(K in 0..$step {
                        move_timeslot!(src, dst, j + K);
                    });
                    j += $step;
                }
            }
        }
    };
}

unrolled_variant!(
    /// One channel per loop iteration.
    unrolled_1, 1
);
unrolled_variant!(
    /// Two channels per loop iteration.
    unrolled_1_2, 2
);
unrolled_variant!(
    /// Four channels per loop iteration.
    unrolled_1_4, 4
);
unrolled_variant!(
    /// Eight channels per loop iteration.
    unrolled_1_8, 8
);
unrolled_variant!(
    /// Sixteen channels per loop iteration.
    unrolled_1_16, 16
);

/// All 32 channels in straight-line code, no loop at all.
///
/// # Panics
///
/// If the source is not exactly [`SRC_SIZE`](crate::layout::SRC_SIZE) bytes, or a destination
/// is shorter than [`DST_SIZE`].
pub fn unrolled_full(src: &[u8], dst: &mut [&mut [u8]; NUM_TIMESLOTS]) {
    check_fixed_shape(src, dst);

    let src = src.as_ptr();
    unsafe {
        seq!(J in 0..32 {
            move_timeslot!(src, dst, J);
        });
    }
}
