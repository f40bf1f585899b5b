//! # Demultiplexing Strategies
//!
//! Every function in this module performs the same mapping:
//!
//! ```text
//! dst[channel][frame] = src[frame * CHANNELS + channel]
//! ```
//!
//! ## Source layout (interleaved)
//!
//! ```text
//! Address: 0    1    2         N-1  N    N+1
//!          +----+----+-- ... --+----+----+----+--
//! Data:    | c0 | c1 |   ...   |cN-1| c0 | c1 | ...
//!          +----+----+-- ... --+----+----+----+--
//!          \________ frame 0 ________/\_ frame 1 ..
//! ```
//!
//! ## Destination layout (one buffer per channel)
//!
//! ```text
//! dst[0]:   | f0 | f1 | f2 | ... |
//! dst[1]:   | f0 | f1 | f2 | ... |
//! ...
//! dst[N-1]: | f0 | f1 | f2 | ... |
//! ```
//!
//! ## Strategies
//!
//! - Source-major ([`src_first`]): reads the source sequentially and scatters writes.
//! - Destination-major ([`dst_first`]): writes each channel sequentially and gathers with
//!   stride `CHANNELS` from the source.
//! - Word-packed ([`packed`]): destination-major, but assembles 4 or 8 strided bytes into one
//!   word before a single wide store.
//! - Unrolled ([`unrolled`]): destination-major with the per-channel body fully unrolled and the
//!   channel loop unrolled by a fixed factor.
//!
//! The general strategies accept any source length that is a multiple of `CHANNELS`.
//! The fixed-shape strategies require exactly [`SRC_SIZE`](crate::layout::SRC_SIZE) source bytes
//! and [`NUM_TIMESLOTS`] destinations of at least [`DST_SIZE`](crate::layout::DST_SIZE) bytes.
//! Violating either precondition panics; output is never truncated or padded.

pub mod dst_first;
pub mod packed;
pub mod reference;
pub mod src_first;
pub mod unrolled;

pub use dst_first::*;
pub use packed::*;
pub use reference::*;
pub use src_first::*;
pub use unrolled::*;

use crate::layout::NUM_TIMESLOTS;
use derive_enum_all_values::AllValues;

/// Signature shared by every strategy.
///
/// The source length is carried by the slice. The destination set is `CHANNELS` disjoint
/// buffers, written to and never read.
pub type DemuxFn<const CHANNELS: usize> = fn(&[u8], &mut [&mut [u8]; CHANNELS]);

/// Every strategy available at the fixed [`NUM_TIMESLOTS`] configuration.
///
/// Listed in benchmarking order. The tag is used for selection and reporting only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum DemuxVariant {
    /// [`reference`]
    Reference,
    /// [`src_first_1`]
    SrcFirst1,
    /// [`src_first_2`]
    SrcFirst2,
    /// [`src_first_3`]
    SrcFirst3,
    /// [`dst_first_1`]
    DstFirst1,
    /// [`dst_first_2`]
    DstFirst2,
    /// [`dst_first_3`]
    DstFirst3,
    /// [`dst_first_1a`]
    DstFirst1a,
    /// [`dst_first_3a`]
    DstFirst3a,
    /// [`unrolled_1`]
    Unrolled1,
    /// [`unrolled_1_2`]
    Unrolled1x2,
    /// [`unrolled_1_4`]
    Unrolled1x4,
    /// [`unrolled_1_8`]
    Unrolled1x8,
    /// [`unrolled_1_16`]
    Unrolled1x16,
    /// [`unrolled_full`]
    UnrolledFull,
    /// [`write4`]
    Write4,
    /// [`write8`]
    Write8,
}

impl DemuxVariant {
    /// Identifier printed in benchmark reports.
    pub const fn name(self) -> &'static str {
        match self {
            DemuxVariant::Reference => "Reference",
            DemuxVariant::SrcFirst1 => "Src_First_1",
            DemuxVariant::SrcFirst2 => "Src_First_2",
            DemuxVariant::SrcFirst3 => "Src_First_3",
            DemuxVariant::DstFirst1 => "Dst_First_1",
            DemuxVariant::DstFirst2 => "Dst_First_2",
            DemuxVariant::DstFirst3 => "Dst_First_3",
            DemuxVariant::DstFirst1a => "Dst_First_1a",
            DemuxVariant::DstFirst3a => "Dst_First_3a",
            DemuxVariant::Unrolled1 => "Unrolled_1",
            DemuxVariant::Unrolled1x2 => "Unrolled_1_2",
            DemuxVariant::Unrolled1x4 => "Unrolled_1_4",
            DemuxVariant::Unrolled1x8 => "Unrolled_1_8",
            DemuxVariant::Unrolled1x16 => "Unrolled_1_16",
            DemuxVariant::UnrolledFull => "Unrolled_2_Full",
            DemuxVariant::Write4 => "Write4",
            DemuxVariant::Write8 => "Write8",
        }
    }

    /// The strategy, instantiated at [`NUM_TIMESLOTS`] channels.
    pub fn function(self) -> DemuxFn<NUM_TIMESLOTS> {
        match self {
            DemuxVariant::Reference => reference::<NUM_TIMESLOTS>,
            DemuxVariant::SrcFirst1 => src_first_1::<NUM_TIMESLOTS>,
            DemuxVariant::SrcFirst2 => src_first_2::<NUM_TIMESLOTS>,
            DemuxVariant::SrcFirst3 => src_first_3::<NUM_TIMESLOTS>,
            DemuxVariant::DstFirst1 => dst_first_1::<NUM_TIMESLOTS>,
            DemuxVariant::DstFirst2 => dst_first_2::<NUM_TIMESLOTS>,
            DemuxVariant::DstFirst3 => dst_first_3,
            DemuxVariant::DstFirst1a => dst_first_1a::<NUM_TIMESLOTS>,
            DemuxVariant::DstFirst3a => dst_first_3a,
            DemuxVariant::Unrolled1 => unrolled_1,
            DemuxVariant::Unrolled1x2 => unrolled_1_2,
            DemuxVariant::Unrolled1x4 => unrolled_1_4,
            DemuxVariant::Unrolled1x8 => unrolled_1_8,
            DemuxVariant::Unrolled1x16 => unrolled_1_16,
            DemuxVariant::UnrolledFull => unrolled_full,
            DemuxVariant::Write4 => write4,
            DemuxVariant::Write8 => write8,
        }
    }

    /// Whether the strategy only accepts the fixed `NUM_TIMESLOTS x DST_SIZE` shape.
    pub const fn is_fixed_shape(self) -> bool {
        !matches!(
            self,
            DemuxVariant::Reference
                | DemuxVariant::SrcFirst1
                | DemuxVariant::SrcFirst2
                | DemuxVariant::SrcFirst3
                | DemuxVariant::DstFirst1
                | DemuxVariant::DstFirst2
                | DemuxVariant::DstFirst1a
        )
    }

    /// Looks up a variant by its report identifier, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        DemuxVariant::all_values()
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(name))
    }
}

impl core::fmt::Display for DemuxVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
