#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]

pub mod allocate;
pub mod demux;
pub mod error;
pub mod harness;
pub mod layout;
pub mod verify;

pub use demux::{DemuxFn, DemuxVariant};
pub use error::{HarnessError, VerifyError};
pub use layout::{DST_SIZE, ITERATIONS, NUM_TIMESLOTS, SRC_SIZE};

#[cfg(test)]
mod test_prelude;
