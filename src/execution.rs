// src/execution.rs
//! Scheduling of the per-element loops
//!
//! Every transform in this crate updates each element independently, so the
//! element range can be split across workers in any way without changing the
//! result. [`Execution`] picks how that split happens.

/// Inputs shorter than this run sequentially under the default strategy
pub const DEFAULT_MIN_LEN: usize = 16 * 1024;

/// Loop scheduling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Execution {
    /// Single pass on the calling thread
    Sequential,
    /// Rayon work-stealing over the global pool, at least `min_len` elements
    /// per task. Runs sequentially when the `parallel` feature is disabled.
    Parallel { min_len: usize },
    /// Scoped threads, each owning one contiguous chunk. The count is capped
    /// at the element count and at the available hardware parallelism.
    Threads(usize),
}

impl Default for Execution {
    fn default() -> Self {
        if Self::parallel_available() {
            Execution::Parallel { min_len: DEFAULT_MIN_LEN }
        } else {
            Execution::Sequential
        }
    }
}

impl Execution {
    /// Whether the crate was built with rayon support
    pub const fn parallel_available() -> bool {
        cfg!(feature = "parallel")
    }

    /// Apply `op` to every element of `values`
    pub(crate) fn for_each_mut<T, F>(self, values: &mut [T], op: F)
    where
        T: Send,
        F: Fn(&mut T) + Sync + Send,
    {
        if values.is_empty() {
            return;
        }

        match self {
            Execution::Sequential => values.iter_mut().for_each(op),
            Execution::Parallel { min_len } => {
                let min_len = min_len.max(1);
                if values.len() < min_len {
                    log::debug!(
                        "{} elements below parallel threshold {}, running sequentially",
                        values.len(),
                        min_len
                    );
                    values.iter_mut().for_each(op);
                } else {
                    run_rayon(values, min_len, op);
                }
            }
            Execution::Threads(workers) => {
                let workers = scoped_workers(workers, values.len());
                if workers <= 1 {
                    values.iter_mut().for_each(op);
                } else {
                    run_scoped(values, workers, op);
                }
            }
        }
    }
}

#[cfg(feature = "parallel")]
fn run_rayon<T, F>(values: &mut [T], min_len: usize, op: F)
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    use rayon::prelude::*;

    values.par_iter_mut().with_min_len(min_len).for_each(op);
}

#[cfg(not(feature = "parallel"))]
fn run_rayon<T, F>(values: &mut [T], _min_len: usize, op: F)
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    log::debug!("parallel feature disabled, running sequentially");
    values.iter_mut().for_each(op);
}

/// Number of threads actually spawned for `requested` workers over `len` elements
fn scoped_workers(requested: usize, len: usize) -> usize {
    let hardware = std::thread::available_parallelism().map_or(1, |n| n.get());
    requested.min(len).min(hardware)
}

fn run_scoped<T, F>(values: &mut [T], workers: usize, op: F)
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    let chunk_len = values.len().div_ceil(workers);
    let op = &op;

    std::thread::scope(|scope| {
        for chunk in values.chunks_mut(chunk_len) {
            scope.spawn(move || chunk.iter_mut().for_each(op));
        }
    });
}
