use crate::common::DftError;

/// Trial divisors for the real-transform factorization, in the order the
/// pass planner wants them resolved. After 5 the sequence continues with the
/// odd numbers 7, 9, 11, ... (composites are harmless: their prime parts are
/// already divided out by the time they are tried).
const RADICES: [usize; 4] = [4, 2, 3, 5];

/// Divides out every factor of 4, then 2, 3 and 5, and returns what is left.
///
/// The plan selector uses the returned remainder to decide between the
/// mixed-radix and Bluestein kernels: the general-radix pass costs O(p^2) in
/// the remaining factor, so a large remainder is cheaper to handle as a
/// chirp-z convolution.
pub fn reduce_by_small_factors(n: usize) -> usize {
    let mut rem = n;
    for factor in RADICES {
        while rem != 1 && rem % factor == 0 {
            rem /= factor;
        }
    }
    rem
}

/// Factor list for the mixed-radix pass loop, kept as a record beside the
/// twiddle buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    pub n: usize,
    pub factors: Vec<usize>,
}

impl Factorization {
    #[inline]
    pub fn count(&self) -> usize {
        self.factors.len()
    }
}

/// Factorizes `n` by the ordered trial divisors {4, 2, 3, 5, 7, 9, 11, ...}.
///
/// Whenever a 2 is recorded after the first slot, the existing factors are
/// shifted up and the 2 inserted at the front, so all 2s end up leading the
/// list. The pass loop walks the list in reverse; keeping the 2s first keeps
/// the radix-4/radix-2 passes contiguous at the tail of the schedule.
pub fn factorize(n: usize) -> Factorization {
    let mut factors = Vec::new();
    let mut nl = n;
    let mut ntry = 0;
    let mut j = 0;

    while nl != 1 {
        if j < RADICES.len() {
            ntry = RADICES[j];
        } else {
            ntry += 2;
        }
        j += 1;

        while nl % ntry == 0 {
            nl /= ntry;
            if ntry == 2 && !factors.is_empty() {
                factors.insert(0, 2);
            } else {
                factors.push(ntry);
            }
        }
    }
    Factorization { n, factors }
}

/// Smallest power of two >= `2 * n - 1`, the Bluestein convolution length.
pub fn bluestein_length(n: usize) -> Result<usize, DftError> {
    let doubled = n
        .checked_mul(2)
        .and_then(|d| d.checked_sub(1))
        .ok_or(DftError::NotRepresentable)?;
    let n_blue = doubled
        .checked_next_power_of_two()
        .ok_or(DftError::NotRepresentable)?;
    // The kernels address 2 * n_blue interleaved floats.
    n_blue
        .checked_mul(2)
        .ok_or(DftError::NotRepresentable)
        .map(|_| n_blue)
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_reduce_by_small_factors() {
        assert_eq!(reduce_by_small_factors(1), 1);
        assert_eq!(reduce_by_small_factors(4096), 1);
        assert_eq!(reduce_by_small_factors(2 * 3 * 5 * 7), 7);
        assert_eq!(reduce_by_small_factors(211), 211);
        assert_eq!(reduce_by_small_factors(2 * 211), 211);
        assert_eq!(reduce_by_small_factors(4 * 9 * 25), 1);
        assert_eq!(reduce_by_small_factors(209), 209); // 11 * 19
    }

    #[test]
    fn test_factorize_products() {
        for n in 1..2000 {
            let f = factorize(n);
            assert_eq!(f.factors.iter().product::<usize>(), n, "n = {}", n);
        }
    }

    #[test]
    fn test_factorize_twos_first() {
        for n in 2..2000 {
            let f = factorize(n);
            let last_two = f.factors.iter().rposition(|&p| p == 2);
            if let Some(last) = last_two {
                assert!(
                    f.factors[..=last].iter().all(|&p| p == 2),
                    "2s are not leading for n = {}: {:?}",
                    n,
                    f.factors
                );
            }
        }
    }

    #[test]
    fn test_factorize_prefers_fours() {
        assert_eq!(factorize(16).factors, vec![4, 4]);
        assert_eq!(factorize(32).factors, vec![2, 4, 4]);
        assert_eq!(factorize(60).factors, vec![4, 3, 5]);
        assert_eq!(factorize(14).factors, vec![2, 7]);
    }

    #[test]
    fn test_bluestein_length() {
        assert_eq!(bluestein_length(211), Ok(512));
        assert_eq!(bluestein_length(257), Ok(1024));
        assert_eq!(bluestein_length(4), Ok(8));
        assert!(bluestein_length(usize::MAX / 2).is_err());
    }
}
