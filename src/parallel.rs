//! Contiguous-chunk fan-out for element-wise passes.
//!
//! Only the Bluestein driver uses this: its pre-multiply and pointwise
//! multiply are embarrassingly parallel. Tasks run on the shared rayon pool;
//! the driver submits every chunk, blocks until all complete, and surfaces a
//! worker panic as an error instead of pretending the pass finished.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::common::DftError;

/// Host-tunable worker configuration.
///
/// `threshold_two`/`threshold_four` are the minimum transform lengths at
/// which 2 and 4 workers pay off; below `threshold_two` every pass runs
/// serially on the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct Concurrency {
    pub max_workers: usize,
    pub threshold_two: usize,
    pub threshold_four: usize,
}

impl Default for Concurrency {
    fn default() -> Self {
        Concurrency {
            max_workers: rayon::current_num_threads(),
            threshold_two: 8192,
            threshold_four: 65536,
        }
    }
}

impl Concurrency {
    /// Serial execution regardless of pool size.
    pub fn serial() -> Self {
        Concurrency {
            max_workers: 1,
            ..Default::default()
        }
    }

    pub(crate) fn workers_for(&self, n: usize) -> usize {
        if self.max_workers >= 4 && n >= self.threshold_four {
            4
        } else if self.max_workers >= 2 && n >= self.threshold_two {
            2
        } else {
            1
        }
    }
}

/// Runs `op` over `elems` interleaved complex elements of `data`, split into
/// `workers` contiguous chunks. The last chunk absorbs the remainder. `op`
/// receives the element index of its chunk's first pair.
pub(crate) fn run_chunked<F>(
    workers: usize,
    elems: usize,
    data: &mut [f32],
    op: F,
) -> Result<(), DftError>
where
    F: Fn(usize, &mut [f32]) + Sync,
{
    debug_assert!(data.len() >= 2 * elems);
    if workers <= 1 || elems < workers {
        op(0, data);
        return Ok(());
    }

    let chunk = elems / workers;
    let joined = catch_unwind(AssertUnwindSafe(|| {
        rayon::scope(|s| {
            let mut rest = data;
            let mut start = 0usize;
            for t in 0..workers {
                let take = if t == workers - 1 {
                    rest.len()
                } else {
                    2 * chunk
                };
                let (head, tail) = std::mem::take(&mut rest).split_at_mut(take);
                rest = tail;
                let op = &op;
                let first = start;
                s.spawn(move |_| op(first, head));
                start += take / 2;
            }
        });
    }));
    joined.map_err(|_| {
        log::error!("worker task panicked during a chunked transform pass");
        DftError::InternalError
    })
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn scale_by_index(workers: usize, elems: usize) -> Vec<f32> {
        let mut data = vec![1.0f32; 2 * elems];
        run_chunked(workers, elems, &mut data, |start, chunk| {
            for (j, pair) in chunk.chunks_exact_mut(2).enumerate() {
                let k = (start + j) as f32;
                pair[0] *= k;
                pair[1] *= k + 0.5;
            }
        })
        .unwrap();
        data
    }

    #[test]
    fn test_worker_counts_agree() {
        let serial = scale_by_index(1, 1001);
        assert_eq!(scale_by_index(2, 1001), serial);
        assert_eq!(scale_by_index(4, 1001), serial);
    }

    #[test]
    fn test_worker_selection() {
        let c = Concurrency {
            max_workers: 4,
            threshold_two: 100,
            threshold_four: 1000,
        };
        assert_eq!(c.workers_for(99), 1);
        assert_eq!(c.workers_for(100), 2);
        assert_eq!(c.workers_for(999), 2);
        assert_eq!(c.workers_for(1000), 4);

        let two = Concurrency { max_workers: 2, ..c };
        assert_eq!(two.workers_for(5000), 2);
        assert_eq!(Concurrency::serial().workers_for(usize::MAX), 1);
    }

    #[test]
    fn test_panic_surfaces_as_internal_error() {
        let mut data = vec![0.0f32; 64];
        let result = run_chunked(2, 32, &mut data, |start, _chunk| {
            if start > 0 {
                panic!("boom");
            }
        });
        assert_eq!(result, Err(DftError::InternalError));
    }
}
