use crate::algorithm::butterflies::{cftfsub, cftx020, rftfsub};
use crate::common::{verify_real_buffer, DftError};
use crate::plan::PlanKind;
use crate::twiddles::SplitRadixTables;
use crate::{Length, RealDft};

/// Real forward transform for power-of-two lengths.
///
/// The input is viewed as n/2 complex points, run through the complex
/// butterfly, then unpacked by the real post-processing butterfly. The
/// closing patch resolves slots 0 and 1 into Re[0] and Re[n/2].
///
/// ~~~
/// // Computes a packed real forward DFT of size 4096
/// use realdft::algorithm::SplitRadixReal;
/// use realdft::RealDft;
///
/// let mut buffer = vec![0.5f32; 4096];
/// let fft = SplitRadixReal::new(4096);
/// fft.real_forward(&mut buffer, 0).unwrap();
/// ~~~
pub struct SplitRadixReal {
    n: usize,
    tables: SplitRadixTables,
}

impl SplitRadixReal {
    /// Creates a plan for length `n`, which must be a power of two.
    pub fn new(n: usize) -> Self {
        assert!(
            n.is_power_of_two(),
            "SplitRadixReal length must be a power of two, got {}",
            n
        );
        SplitRadixReal {
            n,
            tables: SplitRadixTables::for_real(n),
        }
    }

    fn perform(&self, a: &mut [f32]) {
        let n = self.n;
        if n == 1 {
            return;
        }
        if n == 4 {
            cftx020(a);
        } else if n > 4 {
            let t = &self.tables;
            cftfsub(n, a, &t.ip, t.nw, &t.w);
            rftfsub(n, a, t.nc, &t.w, t.nw);
        }
        let xi = a[0] - a[1];
        a[0] += a[1];
        a[1] = xi;
    }
}

impl RealDft for SplitRadixReal {
    fn kind(&self) -> PlanKind {
        PlanKind::SplitRadix
    }

    fn real_forward(&self, buffer: &mut [f32], offset: usize) -> Result<(), DftError> {
        verify_real_buffer(buffer, offset, self.n)?;
        self.perform(&mut buffer[offset..offset + self.n]);
        Ok(())
    }
}

impl Length for SplitRadixReal {
    #[inline(always)]
    fn len(&self) -> usize {
        self.n
    }
}
