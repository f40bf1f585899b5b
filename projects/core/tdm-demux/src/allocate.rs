//! Aligned buffer allocation for sources and destination sets.
//!
//! ## Useful APIs
//!
//! [`allocate_align_64`]: Allocates uninitialized memory aligned to 64-bytes.
//! [`allocate_zeroed_align_64`]: Same, with every byte set to zero.
//! [`ChannelBuffers::new`]: Creates one zeroed, aligned allocation per channel.
//!
//! Buffers are allocated once by the caller and reused for every demux call; nothing in this
//! crate allocates inside a timed loop.

use core::alloc::{Layout, LayoutError};
use core::mem::MaybeUninit;
use safe_allocator_api::prelude::AllocError;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Allocates data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data. The contents are uninitialized.
pub fn allocate_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    Ok(RawAlloc::new(layout)?)
}

/// Allocates `num_bytes` zeroed bytes with an alignment of 64 bytes.
pub fn allocate_zeroed_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    Ok(RawAlloc::new_zeroed(layout)?)
}

/// One destination buffer per channel, each of the same length.
pub struct ChannelBuffers<const CHANNELS: usize> {
    allocations: [RawAlloc; CHANNELS],
    len: usize,
}

impl<const CHANNELS: usize> ChannelBuffers<CHANNELS> {
    /// Allocates `CHANNELS` zeroed buffers of `num_bytes` each.
    ///
    /// If any allocation fails, the ones already made are released before returning.
    pub fn new(num_bytes: usize) -> Result<Self, AllocateError> {
        let mut allocations: [MaybeUninit<RawAlloc>; CHANNELS] =
            core::array::from_fn(|_| MaybeUninit::uninit());

        let mut initialized_count = 0;
        for item in allocations.iter_mut() {
            match allocate_zeroed_align_64(num_bytes) {
                Ok(alloc) => {
                    item.write(alloc);
                    initialized_count += 1;
                }
                Err(e) => {
                    for cleanup_item in &mut allocations[0..initialized_count] {
                        unsafe {
                            cleanup_item.assume_init_drop();
                        }
                    }
                    return Err(e);
                }
            }
        }

        let allocations = allocations.map(|item| unsafe { item.assume_init() });
        Ok(Self {
            allocations,
            len: num_bytes,
        })
    }

    /// Length of each channel buffer in bytes.
    #[inline]
    pub fn channel_len(&self) -> usize {
        self.len
    }

    /// Read-only view of a single channel.
    ///
    /// # Panics
    ///
    /// If `channel >= CHANNELS`.
    #[inline]
    pub fn channel(&self, channel: usize) -> &[u8] {
        self.allocations[channel].as_slice()
    }

    /// The destination set in the shape every [`DemuxFn`](crate::demux::DemuxFn) writes to.
    #[inline]
    pub fn as_mut_slices(&mut self) -> [&mut [u8]; CHANNELS] {
        self.allocations.each_mut().map(|alloc| alloc.as_mut_slice())
    }

    /// Zeroes every channel.
    pub fn clear(&mut self) {
        for alloc in self.allocations.iter_mut() {
            alloc.as_mut_slice().fill(0);
        }
    }

    /// Iterates the channels in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.allocations.iter().map(|alloc| alloc.as_slice())
    }
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` in `allocate_align_64` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}
