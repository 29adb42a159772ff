use num_complex::Complex;
use num_traits::Zero;

use crate::Length;

/// Naive O(n^2) DFT, used as a reference implementation.
///
/// ~~~
/// // Computes a packed real forward DFT of size 123
/// use realdft::algorithm::Dft;
///
/// let signal = vec![0.5f32; 123];
/// let dft = Dft::new(123);
/// let spectrum = dft.real_forward_packed(&signal);
/// ~~~
pub struct Dft {
    len: usize,
}

impl Dft {
    pub fn new(len: usize) -> Self {
        Dft { len }
    }

    /// Complex forward DFT with the negative-exponent convention.
    pub fn process(&self, signal: &[Complex<f32>], spectrum: &mut [Complex<f32>]) {
        assert_eq!(signal.len(), self.len);
        assert_eq!(spectrum.len(), self.len);

        for (k, spec_bin) in spectrum.iter_mut().enumerate() {
            let mut sum = Zero::zero();
            for (i, &x) in signal.iter().enumerate() {
                let angle = -2.0 * std::f64::consts::PI * (i * k) as f64 / self.len as f64;
                let twiddle = Complex::new(angle.cos() as f32, angle.sin() as f32);
                sum = sum + twiddle * x;
            }
            *spec_bin = sum;
        }
    }

    /// Real forward DFT in the packed half-spectrum layout.
    ///
    /// Slot 0 carries Re[0]; slot 1 carries Re[n/2] for even n and
    /// Im[(n-1)/2] for odd n; the remaining slots interleave Re[k], Im[k].
    pub fn real_forward_packed(&self, input: &[f32]) -> Vec<f32> {
        assert_eq!(input.len(), self.len);
        let n = self.len;

        let signal: Vec<Complex<f32>> = input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        let mut spectrum = vec![Complex::zero(); n];
        self.process(&signal, &mut spectrum);

        let mut packed = vec![0.0f32; n];
        packed[0] = spectrum[0].re;
        if n == 1 {
            return packed;
        }
        if n % 2 == 0 {
            packed[1] = spectrum[n / 2].re;
            for k in 1..n / 2 {
                packed[2 * k] = spectrum[k].re;
                packed[2 * k + 1] = spectrum[k].im;
            }
        } else {
            packed[1] = spectrum[(n - 1) / 2].im;
            for k in 1..=(n - 1) / 2 {
                packed[2 * k] = spectrum[k].re;
                if 2 * k + 1 < n {
                    packed[2 * k + 1] = spectrum[k].im;
                }
            }
        }
        packed
    }
}

impl Length for Dft {
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}
