use crate::layout::{check_destinations, frame_count};

/// The canonical demux. Defines correctness, not performance.
///
/// Walks the source in natural order, round-robining the destination channel and advancing
/// the position within each channel once every `CHANNELS` bytes.
///
/// # Panics
///
/// - If `src.len()` is not a multiple of `CHANNELS`.
/// - If any destination is shorter than `src.len() / CHANNELS`.
pub fn reference<const CHANNELS: usize>(src: &[u8], dst: &mut [&mut [u8]; CHANNELS]) {
    check_destinations(dst, frame_count(src.len(), CHANNELS));

    let mut dst_pos = 0;
    let mut dst_num = 0;
    for &byte in src {
        dst[dst_num][dst_pos] = byte;
        dst_num += 1;
        if dst_num == CHANNELS {
            dst_num = 0;
            dst_pos += 1;
        }
    }
}
