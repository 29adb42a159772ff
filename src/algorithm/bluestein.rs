use std::f64::consts::PI;

use crate::algorithm::butterflies::{cftbsub, cftfsub};
use crate::common::{verify_real_buffer, DftError};
use crate::math_utils::bluestein_length;
use crate::parallel::{run_chunked, Concurrency};
use crate::plan::PlanKind;
use crate::twiddles::SplitRadixTables;
use crate::{Length, RealDft};

/// Real forward transform via Bluestein's chirp-z algorithm.
///
/// Expresses the length-n DFT as a circular convolution executed by a
/// power-of-two FFT of length `n_blue >= 2n - 1`, which keeps large prime
/// lengths at O(n log n).
///
/// ~~~
/// // Computes a packed real forward DFT of prime size 211
/// use realdft::algorithm::BluesteinReal;
/// use realdft::RealDft;
///
/// let mut buffer = vec![0.5f32; 211];
/// let fft = BluesteinReal::new(211).unwrap();
/// fft.real_forward(&mut buffer, 0).unwrap();
/// ~~~
pub struct BluesteinReal {
    n: usize,
    n_blue: usize,
    bk1: Vec<f32>,
    bk2: Vec<f32>,
    tables: SplitRadixTables,
    concurrency: Concurrency,
}

impl BluesteinReal {
    pub fn new(n: usize) -> Result<Self, DftError> {
        Self::with_concurrency(n, Concurrency::default())
    }

    pub fn with_concurrency(n: usize, concurrency: Concurrency) -> Result<Self, DftError> {
        if n < 1 {
            return Err(DftError::InvalidLength);
        }
        let n_blue = bluestein_length(n)?;
        let tables = SplitRadixTables::for_complex(n_blue);

        // Chirp phases are k^2 * pi / n with k^2 reduced mod 2n through the
        // running recurrence, which keeps the argument small for large k.
        let mut bk1 = vec![0.0f32; 2 * n];
        let mut sq = 0usize;
        for k in 0..n {
            if k > 0 {
                sq = (sq + 2 * k - 1) % (2 * n);
            }
            let (sin, cos) = (PI * sq as f64 / n as f64).sin_cos();
            bk1[2 * k] = cos as f32;
            bk1[2 * k + 1] = sin as f32;
        }

        // Convolution kernel: the chirp scaled by 1/n_blue (absorbing the
        // unnormalized inverse pass), mirrored about n_blue, then taken to
        // the frequency domain once.
        let mut bk2 = vec![0.0f32; 2 * n_blue];
        let scale = 1.0 / n_blue as f32;
        bk2[0] = bk1[0] * scale;
        bk2[1] = bk1[1] * scale;
        for k in 1..n {
            bk2[2 * k] = bk1[2 * k] * scale;
            bk2[2 * k + 1] = bk1[2 * k + 1] * scale;
            bk2[2 * (n_blue - k)] = bk2[2 * k];
            bk2[2 * (n_blue - k) + 1] = bk2[2 * k + 1];
        }
        cftbsub(2 * n_blue, &mut bk2, &tables.ip, tables.nw, &tables.w);

        log::debug!(
            "planned bluestein real forward: n = {}, n_blue = {}",
            n,
            n_blue
        );
        Ok(BluesteinReal {
            n,
            n_blue,
            bk1,
            bk2,
            tables,
            concurrency,
        })
    }

    fn perform(&self, a: &mut [f32]) -> Result<(), DftError> {
        let n = self.n;
        if n == 1 {
            return Ok(());
        }
        let m = self.n_blue;
        let t = &self.tables;
        let workers = self.concurrency.workers_for(n);
        let mut ak = vec![0.0f32; 2 * m];

        // Modulate the input by the conjugate chirp; ak[2n..] stays zero.
        let bk1 = &self.bk1;
        let src: &[f32] = a;
        run_chunked(workers, n, &mut ak[..2 * n], |start, chunk| {
            for (j, pair) in chunk.chunks_exact_mut(2).enumerate() {
                let k = start + j;
                pair[0] = src[k] * bk1[2 * k];
                pair[1] = -src[k] * bk1[2 * k + 1];
            }
        })?;

        cftbsub(2 * m, &mut ak, &t.ip, t.nw, &t.w);

        // Pointwise product with the frequency-domain kernel.
        let bk2 = &self.bk2;
        run_chunked(workers, m, &mut ak, |start, chunk| {
            for (j, pair) in chunk.chunks_exact_mut(2).enumerate() {
                let k = start + j;
                let br = bk2[2 * k];
                let bi = bk2[2 * k + 1];
                let ar = pair[0];
                let ai = pair[1];
                pair[0] = ar * br - ai * bi;
                pair[1] = ar * bi + ai * br;
            }
        })?;

        cftfsub(2 * m, &mut ak, &t.ip, t.nw, &t.w);

        // Demodulate and pack the half-spectrum. The edges fold the DC and
        // Nyquist (or highest-imaginary) lines into slots 0 and 1.
        a[0] = bk1[0] * ak[0] + bk1[1] * ak[1];
        if n % 2 == 0 {
            a[1] = bk1[n] * ak[n] + bk1[n + 1] * ak[n + 1];
            for k in 1..n / 2 {
                a[2 * k] = bk1[2 * k] * ak[2 * k] + bk1[2 * k + 1] * ak[2 * k + 1];
                a[2 * k + 1] = -bk1[2 * k + 1] * ak[2 * k] + bk1[2 * k] * ak[2 * k + 1];
            }
        } else {
            a[1] = -bk1[n] * ak[n - 1] + bk1[n - 1] * ak[n];
            for k in 1..(n - 1) / 2 {
                a[2 * k] = bk1[2 * k] * ak[2 * k] + bk1[2 * k + 1] * ak[2 * k + 1];
                a[2 * k + 1] = -bk1[2 * k + 1] * ak[2 * k] + bk1[2 * k] * ak[2 * k + 1];
            }
            a[n - 1] = bk1[n - 1] * ak[n - 1] + bk1[n] * ak[n];
        }
        Ok(())
    }
}

impl RealDft for BluesteinReal {
    fn kind(&self) -> PlanKind {
        PlanKind::Bluestein
    }

    fn real_forward(&self, buffer: &mut [f32], offset: usize) -> Result<(), DftError> {
        verify_real_buffer(buffer, offset, self.n)?;
        self.perform(&mut buffer[offset..offset + self.n])
    }
}

impl Length for BluesteinReal {
    #[inline(always)]
    fn len(&self) -> usize {
        self.n
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::test_utils::{check_real_dft, random_signal};

    #[test]
    fn test_bluestein() {
        // Small lengths are never planned this way but must still be exact.
        for n in [1, 2, 3, 4, 5, 16, 17, 100, 211, 257, 509] {
            let fft = BluesteinReal::new(n).unwrap();
            check_real_dft(&fft, n);
        }
    }

    #[test]
    fn test_prime_impulse_is_flat() {
        let n = 211;
        let fft = BluesteinReal::new(n).unwrap();
        let mut buffer = vec![0.0f32; n];
        buffer[0] = 1.0;
        fft.real_forward(&mut buffer, 0).unwrap();
        // Delta spectrum: every Re[k] is 1, every Im[k] is 0.
        assert!((buffer[0] - 1.0).abs() < 1e-4);
        assert!(buffer[1].abs() < 1e-4);
        for k in 1..(n - 1) / 2 {
            assert!((buffer[2 * k] - 1.0).abs() < 1e-4, "Re[{}]", k);
            assert!(buffer[2 * k + 1].abs() < 1e-4, "Im[{}]", k);
        }
        assert!((buffer[n - 1] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_worker_counts_agree_bitwise() {
        let n = 509;
        let signal = random_signal(n, 0x1f);
        let mut expected = signal.clone();
        BluesteinReal::with_concurrency(n, Concurrency::serial())
            .unwrap()
            .real_forward(&mut expected, 0)
            .unwrap();

        for max_workers in [2, 4] {
            let forced = Concurrency {
                max_workers,
                threshold_two: 1,
                threshold_four: 1,
            };
            let fft = BluesteinReal::with_concurrency(n, forced).unwrap();
            let mut buffer = signal.clone();
            fft.real_forward(&mut buffer, 0).unwrap();
            assert_eq!(buffer, expected, "max_workers = {}", max_workers);
        }
    }
}
