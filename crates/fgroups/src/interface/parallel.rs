//! Per-frame read and write split across worker threads.
//!
//! The frame range is cut into contiguous partitions, one per worker. Workers
//! share the input read-only; each only addresses its own index range. Results
//! go through a mutex that is held for the insert only, never while a frame is
//! parsed or serialized. A failing worker records its error (first one wins)
//! and raises an abort flag that the other workers look at before starting
//! their next frame. A frame already in progress is always finished.
//!
//! Items carry no reference to their enclosing dataset, so workers never
//! touch shared ancestor state while resolving attributes.

use std::{
    collections::BTreeMap,
    ops::Range,
    sync::atomic::{AtomicBool, Ordering},
};

use fgitem::Item;
use log::{debug, error, trace};
use parking_lot::Mutex;
use rayon::ThreadPoolBuilder;

use super::{read::read_single_group, write::write_frame_groups};
use crate::{Error, GroupRegistry, GroupSet, Result};

/// Fewest frames a worker thread is given.
pub const MIN_FRAMES_PER_THREAD: usize = 10;

/// Number of threads to use for `num_frames` frames when `requested` threads are allowed.
///
/// Never fewer than one thread, and never fewer than [`MIN_FRAMES_PER_THREAD`]
/// frames per thread unless there are fewer frames than that in total.
pub fn find_adequate_number_of_threads(num_frames: usize, requested: usize) -> usize {
    let requested = requested.max(1);
    if num_frames / requested < MIN_FRAMES_PER_THREAD {
        (num_frames / MIN_FRAMES_PER_THREAD).max(1)
    } else {
        requested
    }
}

/// Splits `[0, num_frames)` into contiguous chunks of `ceil(num_frames / threads)` frames.
fn partition(num_frames: usize, threads: usize) -> Vec<Range<usize>> {
    let chunk = num_frames.div_ceil(threads.max(1)).max(1);
    (0..num_frames)
        .step_by(chunk)
        .map(|start| start..(start + chunk).min(num_frames))
        .collect()
}

/// First error of any worker, plus a flag to stop the others.
#[derive(Debug, Default)]
struct WorkerStatus {
    aborted: AtomicBool,
    first_error: Mutex<Option<Error>>,
}

impl WorkerStatus {
    fn fail(&self, err: Error) {
        let mut first_error = self.first_error.lock();
        if first_error.is_none() {
            error!("Worker failed: {err}");
            *first_error = Some(err);
        } else {
            debug!("Worker failed after another one already did: {err}");
        }
        self.aborted.store(true, Ordering::Release);
    }

    #[inline]
    fn should_abort(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }

    fn into_result(self) -> Result<()> {
        match self.first_error.into_inner() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Runs `work` once per partition on a dedicated pool of `threads` threads and
/// returns after all of them are done.
fn run_partitioned<F>(num_frames: usize, threads: usize, name: &'static str, work: F) -> Result<()>
where
    F: Fn(Range<usize>) + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(move |i| format!("fg-{name}-{i}"))
        .build()?;

    let work = &work;
    pool.scope(|scope| {
        for range in partition(num_frames, threads) {
            scope.spawn(move |_| work(range));
        }
    });
    Ok(())
}

fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end || range.end > len {
        return Err(Error::ParallelProcessingFailure(format!(
            "frame range {range:?} outside of {len} frames"
        )));
    }
    Ok(())
}

pub(super) fn read_per_frame_parallel(
    items: &[Item],
    registry: &GroupRegistry,
    threads: usize,
) -> Result<BTreeMap<u32, GroupSet>> {
    let status = WorkerStatus::default();
    let results = Mutex::new(BTreeMap::new());

    run_partitioned(items.len(), threads, "reader", |range| {
        read_worker(items, range, registry, &results, &status);
    })?;

    status.into_result()?;
    Ok(results.into_inner())
}

fn read_worker(
    items: &[Item],
    range: Range<usize>,
    registry: &GroupRegistry,
    results: &Mutex<BTreeMap<u32, GroupSet>>,
    status: &WorkerStatus,
) {
    if let Err(err) = check_range(&range, items.len()) {
        status.fail(err);
        return;
    }
    trace!("Reading frames {range:?}");

    for index in range {
        if status.should_abort() {
            debug!("Reader stopping before frame #{index}, another worker failed");
            return;
        }

        let Ok(frame_no) = u32::try_from(index) else {
            status.fail(Error::ParallelProcessingFailure(format!(
                "frame index {index} does not fit a frame number"
            )));
            return;
        };

        let mut groups = GroupSet::new();
        read_single_group(&items[index], &mut groups, registry);

        if results.lock().insert(frame_no, groups).is_some() {
            status.fail(Error::InternalInsertFailure { frame: index });
            return;
        }
    }
}

/// Serializes each frame into its own item; item `i` belongs to `frames[i]`.
pub(super) fn write_per_frame_parallel(frames: &[&GroupSet], threads: usize) -> Result<Vec<Item>> {
    let status = WorkerStatus::default();
    let slots = Mutex::new(vec![None; frames.len()]);

    run_partitioned(frames.len(), threads, "writer", |range| {
        write_worker(frames, range, &slots, &status);
    })?;

    status.into_result()?;
    slots
        .into_inner()
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(Error::InternalInsertFailure { frame: index }))
        .collect()
}

fn write_worker(
    frames: &[&GroupSet],
    range: Range<usize>,
    slots: &Mutex<Vec<Option<Item>>>,
    status: &WorkerStatus,
) {
    if let Err(err) = check_range(&range, frames.len()) {
        status.fail(err);
        return;
    }
    trace!("Writing frames {range:?}");

    for index in range {
        if status.should_abort() {
            debug!("Writer stopping before frame #{index}, another worker failed");
            return;
        }

        let mut item = Item::new();
        if let Err(err) = write_frame_groups(frames[index], &mut item, index) {
            status.fail(err);
            return;
        }

        slots.lock()[index] = Some(item);
    }
}
