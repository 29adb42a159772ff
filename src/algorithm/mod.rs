//! Individual real DFT algorithms

pub(crate) mod butterflies;
mod bluestein;
mod dft;
mod mixed_radix;
mod split_radix;

pub use self::bluestein::BluesteinReal;
pub use self::dft::Dft;
pub use self::mixed_radix::MixedRadixReal;
pub use self::split_radix::SplitRadixReal;
