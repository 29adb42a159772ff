use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Length, RealDft};

/// The seed for the random number generator used to generate
/// random signals. It's defined here so that we have deterministic tests
const RNG_SEED: [u8; 32] = [
    1, 9, 1, 0, 1, 1, 4, 3, 1, 4, 9, 8, 4, 1, 4, 8, 2, 8, 1, 2, 2, 2, 6, 1, 2, 3, 4, 5, 6, 7, 8, 9,
];

/// A deterministic random signal; `salt` varies the stream per call site.
pub fn random_signal(length: usize, salt: u8) -> Vec<f32> {
    let mut seed = RNG_SEED;
    seed[0] ^= salt;
    let mut rng = StdRng::from_seed(seed);
    (0..length).map(|_| rng.gen_range(-10.0f32..10.0)).collect()
}

/// Packed half-spectrum of `signal`, computed naively in f64.
pub fn reference_packed(signal: &[f32]) -> Vec<f32> {
    let n = signal.len();
    let mut re = vec![0.0f64; n / 2 + 1];
    let mut im = vec![0.0f64; n / 2 + 1];
    for k in 0..=n / 2 {
        for (j, &x) in signal.iter().enumerate() {
            let angle = -2.0 * std::f64::consts::PI * (j * k % n) as f64 / n as f64;
            re[k] += x as f64 * angle.cos();
            im[k] += x as f64 * angle.sin();
        }
    }

    let mut packed = vec![0.0f32; n];
    packed[0] = re[0] as f32;
    if n == 1 {
        return packed;
    }
    if n % 2 == 0 {
        packed[1] = re[n / 2] as f32;
        for k in 1..n / 2 {
            packed[2 * k] = re[k] as f32;
            packed[2 * k + 1] = im[k] as f32;
        }
    } else {
        packed[1] = im[(n - 1) / 2] as f32;
        for k in 1..=(n - 1) / 2 {
            packed[2 * k] = re[k] as f32;
            if 2 * k + 1 < n {
                packed[2 * k + 1] = im[k] as f32;
            }
        }
    }
    packed
}

/// Largest |a - b| over the packed slots, relative to the largest |b|.
pub fn max_relative_error(actual: &[f32], expected: &[f32]) -> f64 {
    let scale = expected
        .iter()
        .fold(1.0f64, |acc, &x| acc.max((x as f64).abs()));
    actual
        .iter()
        .zip(expected.iter())
        .fold(0.0f64, |acc, (&a, &b)| acc.max((a as f64 - b as f64).abs()))
        / scale
}

/// Runs `fft` on a random signal and checks the packed output against the
/// f64 reference, at offset 0 and again at a nonzero offset.
pub fn check_real_dft(fft: &dyn RealDft, n: usize) {
    assert_eq!(fft.len(), n, "plan reports the wrong length");

    let signal = random_signal(n, n as u8);
    let expected = reference_packed(&signal);

    let mut buffer = signal.clone();
    fft.real_forward(&mut buffer, 0).unwrap();
    let error = max_relative_error(&buffer, &expected);
    assert!(
        error < 1e-4,
        "n = {}: relative error {} exceeds 1e-4",
        n,
        error
    );

    // The same transform behind a nonzero offset must leave the prefix
    // alone and produce bitwise-identical output.
    let offset = 5;
    let mut shifted = vec![-3.25f32; offset];
    shifted.extend_from_slice(&signal);
    fft.real_forward(&mut shifted, offset).unwrap();
    assert!(shifted[..offset].iter().all(|&x| x == -3.25));
    assert_eq!(&shifted[offset..], &buffer[..], "offset run diverged, n = {}", n);
}
