#![no_main]

// Compares every length-generic strategy against the reference on arbitrary whole-frame
// sources, for both the 32-timeslot layout and an odd channel count.

use libfuzzer_sys::fuzz_target;
use tdm_demux::demux::*;
use tdm_demux::NUM_TIMESLOTS;

fn demux_into_vecs<const CHANNELS: usize>(demux: DemuxFn<CHANNELS>, src: &[u8]) -> Vec<Vec<u8>> {
    let frames = src.len() / CHANNELS;
    let mut channels: [Vec<u8>; CHANNELS] = core::array::from_fn(|_| vec![0u8; frames]);
    let mut dst = channels.each_mut().map(|c| c.as_mut_slice());
    demux(src, &mut dst);
    channels.into_iter().collect()
}

fn check_all<const CHANNELS: usize>(data: &[u8]) {
    let src = &data[..data.len() - data.len() % CHANNELS];
    let expected = demux_into_vecs::<CHANNELS>(reference::<CHANNELS>, src);

    let candidates: [(DemuxFn<CHANNELS>, &str); 6] = [
        (src_first_1::<CHANNELS>, "src_first_1"),
        (src_first_2::<CHANNELS>, "src_first_2"),
        (src_first_3::<CHANNELS>, "src_first_3"),
        (dst_first_1::<CHANNELS>, "dst_first_1"),
        (dst_first_1a::<CHANNELS>, "dst_first_1a"),
        (dst_first_2::<CHANNELS>, "dst_first_2"),
    ];
    for (demux, name) in candidates {
        let actual = demux_into_vecs::<CHANNELS>(demux, src);
        assert_eq!(expected, actual, "{name} differs from reference ({CHANNELS} channels)");
    }
}

fuzz_target!(|data: &[u8]| {
    check_all::<NUM_TIMESLOTS>(data);
    check_all::<3>(data);
});
