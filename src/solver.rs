use rayon::prelude::*;

use crate::points::{PointId, Points};
use crate::table::{CostTable, Lower};
use crate::{Float, Triangulation};

/// Observer for the solver, used to monitor how a run progresses. All hooks
/// are called between phases, never from inside a parallel level.
#[allow(unused_variables)]
pub trait Observer {
    /// Every pairwise distance is in the table
    fn distances_done(&mut self, table: &CostTable) {}

    /// All cells with span `diff` are final
    fn level_filled(&mut self, diff: usize, table: &CostTable) {}

    /// Cost phase done, the table is read-only from here on
    fn solved(&mut self, table: &CostTable) {}

    /// Triangles extracted from the finished table
    fn extracted(&mut self, triangulation: &Triangulation) {}
}

/// Default dummy observer, blank impl, so all calls should be optimized out by compiler.
impl Observer for () {}

/// Where the parallel levels run.
pub(crate) enum Executor {
    Global,
    Pool(rayon::ThreadPool),
}

impl Executor {
    pub(crate) fn new(threads: Option<usize>) -> Result<Self, rayon::ThreadPoolBuildError> {
        match threads {
            None => Ok(Self::Global),
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map(Self::Pool),
        }
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match self {
            Executor::Global => op(),
            Executor::Pool(pool) => pool.install(op),
        }
    }
}

/// Fill a fresh table for `points`: distances first, then every level by
/// increasing span. Each level is a parallel iterator over its own slice, and
/// its completion is the barrier before the next one starts.
pub(crate) fn solve(
    points: &Points,
    executor: &Executor,
    observer: &mut dyn Observer,
) -> CostTable {
    let mut table = CostTable::new(points.len());

    executor.install(|| fill_distances(points, &mut table));
    observer.distances_done(&table);

    for diff in 0..points.len() {
        executor.install(|| fill_level(&mut table, diff));
        observer.level_filled(diff, &table);
    }

    observer.solved(&table);
    table
}

fn fill_distances(points: &Points, table: &mut CostTable) {
    table
        .diagonals_mut()
        .into_par_iter()
        .for_each(|(diff, diagonal)| {
            for (i, cell) in diagonal.iter_mut().enumerate() {
                cell.dist = points.distance(i, i + diff);
            }
        });
}

fn fill_level(table: &mut CostTable, diff: usize) {
    let (lower, level) = table.split_level_mut(diff);

    if diff < 2 {
        level.par_iter_mut().for_each(|cell| {
            cell.cost = 0.;
            cell.apex = PointId::INVALID;
        });
        return;
    }

    level.par_iter_mut().enumerate().for_each_init(
        || Vec::with_capacity(diff - 1),
        |scratch, (i, cell)| {
            let (best, apex) = best_split(lower, i, i + diff, scratch);
            cell.cost = best + cell.dist;
            cell.apex = apex;
        },
    );
}

/// Cheapest apex for span `(i, j)`, first minimum wins.
///
/// Returns the candidate sum without the closing chord. `scratch` is reused
/// across the cells one rayon task visits.
fn best_split(
    lower: Lower<'_>,
    i: usize,
    j: usize,
    scratch: &mut Vec<Float>,
) -> (Float, PointId) {
    scratch.clear();
    scratch.extend((i + 1..j).map(|k| {
        let left = lower.get(i, k);
        left.cost + left.dist
    }));
    for (candidate, k) in scratch.iter_mut().zip(i + 1..j) {
        let right = lower.get(k, j);
        *candidate += right.cost + right.dist;
    }

    let mut best = Float::INFINITY;
    let mut apex = PointId::INVALID;
    for (offset, &candidate) in scratch.iter().enumerate() {
        if candidate < best {
            best = candidate;
            apex = PointId::from_index(i + 1 + offset);
        }
    }
    (best, apex)
}
