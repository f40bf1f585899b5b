//! Benchmark harness.
//!
//! Each candidate is verified first, then timed over a fixed number of calls against one
//! pre-allocated source and destination set. Inputs never change between calls, so this is a
//! steady-state, cache-warm measurement of the transpose alone.

use crate::allocate::{AllocateError, ChannelBuffers};
use crate::demux::{DemuxFn, DemuxVariant};
use crate::error::HarnessError;
use crate::layout::{DST_SIZE, ITERATIONS, NUM_TIMESLOTS, SRC_SIZE};
use crate::verify::{generate_source, verify_fn};
use core::fmt;
use core::hint::black_box;
use core::time::Duration;
use log::{info, trace};
use safe_allocator_api::RawAlloc;
use std::time::Instant;

/// How long each variant is timed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Calls per timed loop.
    pub iterations: u32,
    /// Timed loops per variant. Each one yields its own [`Measurement`].
    pub repetitions: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            repetitions: 1,
        }
    }
}

/// Buffers reused by every timed call.
///
/// Allocate once, outside any timing region, and pass by reference into each measurement.
/// Destinations are overwritten by every call and never reallocated.
pub struct Workspace {
    src: RawAlloc,
    dst: ChannelBuffers<NUM_TIMESLOTS>,
}

impl Workspace {
    /// Generates the [`SRC_SIZE`] source and allocates [`NUM_TIMESLOTS`] destinations of
    /// [`DST_SIZE`] bytes.
    pub fn new() -> Result<Self, AllocateError> {
        Ok(Self {
            src: generate_source(SRC_SIZE)?,
            dst: ChannelBuffers::new(DST_SIZE)?,
        })
    }

    /// The source every timed call reads.
    pub fn source(&self) -> &[u8] {
        self.src.as_slice()
    }

    /// The destinations, as left by the most recent call.
    pub fn destinations(&self) -> &ChannelBuffers<NUM_TIMESLOTS> {
        &self.dst
    }
}

/// Total elapsed time of one timed loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub variant: &'static str,
    pub iterations: u32,
    pub elapsed: Duration,
}

impl fmt::Display for Measurement {
    /// `<variant>: <elapsed milliseconds>`, the total for all iterations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.variant, self.elapsed.as_millis())
    }
}

/// Calls `demux` `iterations` times against the workspace and returns the elapsed time.
///
/// Does not verify; see [`measure_fn`].
pub fn time_fn(
    workspace: &mut Workspace,
    demux: DemuxFn<NUM_TIMESLOTS>,
    iterations: u32,
) -> Duration {
    let src = workspace.src.as_slice();
    let mut dst = workspace.dst.as_mut_slices();

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(demux)(black_box(src), black_box(&mut dst));
    }
    start.elapsed()
}

/// Verifies `demux`, then times it `config.repetitions` times.
///
/// Nothing is timed if verification fails.
pub fn measure_fn(
    workspace: &mut Workspace,
    name: &'static str,
    demux: DemuxFn<NUM_TIMESLOTS>,
    config: &BenchConfig,
) -> Result<Vec<Measurement>, HarnessError> {
    verify_fn(name, demux)?;

    let mut results = Vec::with_capacity(config.repetitions as usize);
    for repetition in 0..config.repetitions {
        trace!(
            "{name}: timing {} iterations (repetition {repetition})",
            config.iterations
        );
        let elapsed = time_fn(workspace, demux, config.iterations);
        info!("{name}: {elapsed:?} for {} iterations", config.iterations);
        results.push(Measurement {
            variant: name,
            iterations: config.iterations,
            elapsed,
        });
    }
    Ok(results)
}

/// [`measure_fn`] for a registered variant.
pub fn measure(
    workspace: &mut Workspace,
    variant: DemuxVariant,
    config: &BenchConfig,
) -> Result<Vec<Measurement>, HarnessError> {
    measure_fn(workspace, variant.name(), variant.function(), config)
}

/// Measures each candidate in order, reporting every measurement through `on_result` as soon as
/// it is taken.
///
/// Stops at the first failure; no later candidate is verified or timed.
pub fn run_fns(
    workspace: &mut Workspace,
    candidates: &[(&'static str, DemuxFn<NUM_TIMESLOTS>)],
    config: &BenchConfig,
    mut on_result: impl FnMut(&Measurement),
) -> Result<Vec<Measurement>, HarnessError> {
    let mut all = Vec::with_capacity(candidates.len() * config.repetitions as usize);
    for &(name, demux) in candidates {
        for measurement in measure_fn(workspace, name, demux, config)? {
            on_result(&measurement);
            all.push(measurement);
        }
    }
    Ok(all)
}

/// [`run_fns`] over registered variants.
pub fn run(
    workspace: &mut Workspace,
    variants: &[DemuxVariant],
    config: &BenchConfig,
    on_result: impl FnMut(&Measurement),
) -> Result<Vec<Measurement>, HarnessError> {
    let candidates: Vec<_> = variants
        .iter()
        .map(|variant| (variant.name(), variant.function()))
        .collect();
    run_fns(workspace, &candidates, config, on_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VerifyError;
    use crate::test_prelude::*;

    fn flips_channel_0(src: &[u8], dst: &mut [&mut [u8]; NUM_TIMESLOTS]) {
        reference::<NUM_TIMESLOTS>(src, dst);
        let first = dst[0][0];
        dst[0].fill(!first);
    }

    fn quick() -> BenchConfig {
        BenchConfig {
            iterations: 16,
            repetitions: 1,
        }
    }

    #[test]
    fn default_config_matches_layout() {
        let config = BenchConfig::default();
        assert_eq!(config.iterations, ITERATIONS);
        assert_eq!(config.repetitions, 1);
    }

    #[test]
    fn measurement_reports_total_milliseconds() {
        let m = Measurement {
            variant: "Write4",
            iterations: 10,
            elapsed: Duration::from_micros(12_345),
        };
        assert_eq!(m.to_string(), "Write4: 12");
    }

    #[test]
    fn timed_calls_leave_reference_output_in_workspace() {
        let mut workspace = Workspace::new().unwrap();
        time_fn(&mut workspace, unrolled_full, 3);

        let src = workspace.source().to_vec();
        let expected =
            demux_into_vecs::<NUM_TIMESLOTS>(reference::<NUM_TIMESLOTS>, &src, DST_SIZE);
        for (channel, buffer) in workspace.destinations().iter().enumerate() {
            assert_eq!(buffer, expected[channel].as_slice());
        }
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    fn one_measurement_per_repetition(#[case] repetitions: u32) {
        let mut workspace = Workspace::new().unwrap();
        let config = BenchConfig {
            iterations: 8,
            repetitions,
        };
        let results = measure(&mut workspace, DemuxVariant::Write8, &config).unwrap();
        assert_eq!(results.len(), repetitions as usize);
        assert!(results
            .iter()
            .all(|m| m.variant == "Write8" && m.iterations == 8));
    }

    #[test]
    fn broken_candidate_is_never_timed() {
        let mut workspace = Workspace::new().unwrap();
        let err = measure_fn(&mut workspace, "broken", flips_channel_0, &quick())
            .unwrap_err();
        assert!(err.is_verification_failure());
        assert!(matches!(
            err,
            HarnessError::Verify(VerifyError::Mismatch { channel: 0, .. })
        ));
    }

    #[test]
    fn run_stops_at_first_failure() {
        let mut workspace = Workspace::new().unwrap();
        let candidates: [(&'static str, DemuxFn<NUM_TIMESLOTS>); 3] = [
            ("Reference", reference::<NUM_TIMESLOTS>),
            ("broken", flips_channel_0),
            ("Write4", write4),
        ];

        let mut reported = Vec::new();
        let result = run_fns(&mut workspace, &candidates, &quick(), |m| {
            reported.push(m.variant)
        });

        assert!(result.is_err());
        assert_eq!(reported, vec!["Reference"]);
    }

    #[test]
    fn run_reports_every_variant_in_order() {
        let mut workspace = Workspace::new().unwrap();
        let variants = DemuxVariant::all_values();

        let mut reported = Vec::new();
        let results = run(&mut workspace, variants, &quick(), |m| {
            reported.push(m.variant)
        })
        .unwrap();

        let expected: Vec<_> = variants.iter().map(|v| v.name()).collect();
        assert_eq!(reported, expected);
        assert_eq!(results.len(), variants.len());
    }

    /// Soft regression check; only meaningful in an optimised build:
    /// `cargo test --release -- --ignored`.
    #[test]
    #[ignore]
    fn unrolled_full_is_not_much_slower_than_naive() {
        let mut workspace = Workspace::new().unwrap();
        let iterations = 200_000;

        let naive = time_fn(&mut workspace, src_first_3::<NUM_TIMESLOTS>, iterations);
        let unrolled = time_fn(&mut workspace, unrolled_full, iterations);
        assert!(
            unrolled <= naive * 3,
            "unrolled_full took {unrolled:?}, src_first_3 took {naive:?}"
        );
    }
}
