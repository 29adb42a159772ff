use std::collections::HashMap;
use std::sync::Arc;

use crate::algorithm::{BluesteinReal, MixedRadixReal, SplitRadixReal};
use crate::common::DftError;
use crate::math_utils::reduce_by_small_factors;
use crate::parallel::Concurrency;
use crate::RealDft;

/// Cutoff on the factor left after dividing out {4, 2, 3, 5}. The general
/// radix pass costs O(p^2) in that factor, and 211 is the smallest value at
/// which the chirp-z convolution (roughly three power-of-two FFTs of length
/// at most 4n) wins.
const BLUESTEIN_CUTOFF: usize = 211;

/// Which kernel a plan dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanKind {
    SplitRadix,
    MixedRadix,
    Bluestein,
}

/// Classifies a transform length without building tables.
pub fn plan_kind(n: usize) -> Result<PlanKind, DftError> {
    if n < 1 {
        return Err(DftError::InvalidLength);
    }
    if n.is_power_of_two() {
        Ok(PlanKind::SplitRadix)
    } else if reduce_by_small_factors(n) >= BLUESTEIN_CUTOFF {
        Ok(PlanKind::Bluestein)
    } else {
        Ok(PlanKind::MixedRadix)
    }
}

/// Picks and caches real forward DFT plans.
///
/// ~~~
/// // Perform a forward real DFT of size 1234
/// use realdft::{RealDft, RealDftPlanner};
///
/// let mut buffer = vec![0.1f32; 1234];
///
/// let mut planner = RealDftPlanner::new();
/// let fft = planner.plan_real_forward(1234).unwrap();
/// fft.real_forward(&mut buffer, 0).unwrap();
///
/// // The plan is stored behind an `Arc`, so it's cheap to clone
/// let fft_clone = std::sync::Arc::clone(&fft);
/// ~~~
pub struct RealDftPlanner {
    concurrency: Concurrency,
    cache: HashMap<usize, Arc<dyn RealDft>>,
}

impl RealDftPlanner {
    pub fn new() -> Self {
        Self::with_concurrency(Concurrency::default())
    }

    /// A planner whose Bluestein plans use the given worker configuration.
    pub fn with_concurrency(concurrency: Concurrency) -> Self {
        RealDftPlanner {
            concurrency,
            cache: HashMap::new(),
        }
    }

    /// Returns a plan for length `n`, reusing a cached one when possible.
    pub fn plan_real_forward(&mut self, n: usize) -> Result<Arc<dyn RealDft>, DftError> {
        if let Some(plan) = self.cache.get(&n) {
            return Ok(Arc::clone(plan));
        }
        let kind = plan_kind(n)?;
        let plan: Arc<dyn RealDft> = match kind {
            PlanKind::SplitRadix => Arc::new(SplitRadixReal::new(n)),
            PlanKind::MixedRadix => Arc::new(MixedRadixReal::new(n)),
            PlanKind::Bluestein => Arc::new(BluesteinReal::with_concurrency(n, self.concurrency)?),
        };
        log::debug!("planned {:?} real forward of length {}", kind, n);
        self.cache.insert(n, Arc::clone(&plan));
        Ok(plan)
    }
}

impl Default for RealDftPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::Length;

    #[test]
    fn test_classification() {
        assert_eq!(plan_kind(0), Err(DftError::InvalidLength));
        assert_eq!(plan_kind(1), Ok(PlanKind::SplitRadix));
        assert_eq!(plan_kind(4096), Ok(PlanKind::SplitRadix));
        assert_eq!(plan_kind(100), Ok(PlanKind::MixedRadix));
        assert_eq!(plan_kind(209), Ok(PlanKind::MixedRadix)); // 11 * 19
        assert_eq!(plan_kind(210), Ok(PlanKind::MixedRadix)); // 2*3*5*7
        assert_eq!(plan_kind(211), Ok(PlanKind::Bluestein)); // cutoff is inclusive
        assert_eq!(plan_kind(2 * 211), Ok(PlanKind::Bluestein));
        assert_eq!(plan_kind(257), Ok(PlanKind::Bluestein));
    }

    #[test]
    fn test_planner_dispatch_and_cache() {
        let mut planner = RealDftPlanner::new();
        let first = planner.plan_real_forward(100).unwrap();
        assert_eq!(first.len(), 100);
        assert_eq!(first.kind(), PlanKind::MixedRadix);
        let second = planner.plan_real_forward(100).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        assert_eq!(
            planner.plan_real_forward(256).unwrap().kind(),
            PlanKind::SplitRadix
        );
        assert_eq!(
            planner.plan_real_forward(211).unwrap().kind(),
            PlanKind::Bluestein
        );
        assert_eq!(
            planner.plan_real_forward(0).err().unwrap(),
            DftError::InvalidLength
        );
    }
}
