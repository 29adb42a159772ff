//! realdft computes single-precision real-input forward DFTs of any size in O(nlogn) time.
//!
//! The recommended way to use realdft is to create a [`RealDftPlanner`](struct.RealDftPlanner.html) instance and then call its
//! `plan_real_forward` method. This method will automatically choose which algorithm is best
//! for a given size and initialize the required precomputed tables.
//!
//! ```
//! // Perform a forward real DFT of size 1234
//! use std::sync::Arc;
//! use realdft::{RealDft, RealDftPlanner};
//!
//! let mut buffer: Vec<f32> = vec![0.1; 1234];
//!
//! let mut planner = RealDftPlanner::new();
//! let fft = planner.plan_real_forward(1234).unwrap();
//! fft.real_forward(&mut buffer, 0).unwrap();
//!
//! // The plan returned by the planner is stored behind an `Arc`, so it's cheap to clone
//! let fft_clone = Arc::clone(&fft);
//! ```
//! The planner returns trait objects of the [`RealDft`](trait.RealDft.html) trait, allowing for transform sizes that aren't known
//! until runtime.
//!
//! realdft also exposes individual algorithms. If you know beforehand that you need a power-of-two transform, you can
//! avoid the overhead of the planner and trait object by directly creating instances of the SplitRadixReal algorithm:
//!
//! ```
//! // Computes a forward real DFT of size 4096
//! use realdft::algorithm::SplitRadixReal;
//! use realdft::RealDft;
//!
//! let mut buffer: Vec<f32> = vec![0.1; 4096];
//!
//! let fft = SplitRadixReal::new(4096);
//! fft.real_forward(&mut buffer, 0).unwrap();
//! ```
//!
//! For the vast majority of situations, simply using the [`RealDftPlanner`](struct.RealDftPlanner.html) will be enough, but
//! advanced users may have better insight than the planner into which algorithms are best for a specific size. See the
//! [`algorithm`](algorithm/index.html) module for a complete list of algorithms implemented by realdft.
//!
//! # Output layout
//!
//! The forward transform is unnormalized, follows the `exp(-2*pi*i*k*m/n)`
//! sign convention, and stores the non-redundant half of the spectrum in
//! place. For even n, slot 0 holds Re\[0\], slot 1 holds Re\[n/2\] and slots
//! (2k, 2k+1) hold (Re\[k\], Im\[k\]) for 0 < k < n/2. For odd n, slot 1
//! holds Im\[(n-1)/2\] instead and the even slots run through
//! Re\[(n-1)/2\].

pub use num_complex;
pub use num_traits;

/// Individual real DFT algorithms
pub mod algorithm;
mod common;
mod math_utils;
mod parallel;
mod plan;
mod twiddles;

pub use common::DftError;
pub use parallel::Concurrency;
pub use plan::{plan_kind, PlanKind, RealDftPlanner};

/// A trait that allows DFT algorithms to report their expected input size
pub trait Length {
    /// The transform size that this algorithm can process
    fn len(&self) -> usize;
}

/// An umbrella trait for all available real forward DFT algorithms
pub trait RealDft: Length + Sync + Send {
    /// The plan kind this algorithm implements
    fn kind(&self) -> PlanKind;

    /// Computes a forward DFT of `buffer[offset..offset + len]` in place,
    /// leaving the packed half-spectrum there.
    ///
    /// Concurrent calls on disjoint buffers are safe; concurrent calls on
    /// the same buffer are not. On error the buffer contents are
    /// unspecified.
    fn real_forward(&self, buffer: &mut [f32], offset: usize) -> Result<(), DftError>;
}

#[cfg(test)]
mod test_utils;
