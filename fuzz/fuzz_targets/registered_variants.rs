#![no_main]

// Runs every registered variant on an arbitrary full-size frame and compares it with the
// reference. Inputs shorter than one full source are ignored.

use libfuzzer_sys::fuzz_target;
use tdm_demux::allocate::ChannelBuffers;
use tdm_demux::verify::compare_channels;
use tdm_demux::{DemuxVariant, DST_SIZE, NUM_TIMESLOTS, SRC_SIZE};

fuzz_target!(|data: &[u8]| {
    let Some(src) = data.get(..SRC_SIZE) else {
        return;
    };

    let mut expected = ChannelBuffers::<NUM_TIMESLOTS>::new(DST_SIZE).unwrap();
    DemuxVariant::Reference.function()(src, &mut expected.as_mut_slices());

    let mut actual = ChannelBuffers::<NUM_TIMESLOTS>::new(DST_SIZE).unwrap();
    for &variant in DemuxVariant::all_values() {
        actual.clear();
        variant.function()(src, &mut actual.as_mut_slices());
        if let Err(e) = compare_channels(variant.name(), expected.iter(), actual.iter()) {
            panic!("{e}");
        }
    }
});
