//! In-place complex butterflies over interleaved `[re, im]` f32 buffers.
//!
//! These are the primitive kernels behind both the power-of-two real driver
//! and the Bluestein convolution. A call with float count `n2` transforms
//! `m = n2 / 2` complex points, m a power of two. `cftbsub` applies the
//! negative-exponent convention, `cftfsub` the positive one; both are
//! unnormalized. The `w` array and `ip` seed table come from
//! [`crate::twiddles::SplitRadixTables`].

/// Unnormalized in-place complex DFT, negative exponent.
pub fn cftbsub(n2: usize, a: &mut [f32], ip: &[usize], nw: usize, w: &[f32]) {
    cft_core(n2 / 2, a, &ip[2..], &w[..2 * nw], false);
}

/// Unnormalized in-place complex DFT, positive exponent.
pub fn cftfsub(n2: usize, a: &mut [f32], ip: &[usize], nw: usize, w: &[f32]) {
    cft_core(n2 / 2, a, &ip[2..], &w[..2 * nw], true);
}

/// Radix-2 decimation-in-time core shared by both directions.
fn cft_core(m: usize, a: &mut [f32], seeds: &[usize], w: &[f32], positive: bool) {
    if m < 2 {
        return;
    }
    bitrv2(m, a, seeds);

    let mut len = 1;
    while len < m {
        let tstep = m / (2 * len);
        let mut base = 0;
        while base < m {
            for j in 0..len {
                let widx = 2 * j * tstep;
                let wr = w[widx];
                let wi = if positive { w[widx + 1] } else { -w[widx + 1] };

                let p = 2 * (base + j);
                let q = 2 * (base + j + len);
                let qr = a[q];
                let qi = a[q + 1];
                let tr = wr * qr - wi * qi;
                let ti = wr * qi + wi * qr;
                let pr = a[p];
                let pi = a[p + 1];
                a[q] = pr - tr;
                a[q + 1] = pi - ti;
                a[p] = pr + tr;
                a[p + 1] = pi + ti;
            }
            base += 2 * len;
        }
        len *= 2;
    }
}

/// Permutes `m` complex points into bit-reversed order.
///
/// Full reversals are composed from the seed table, which holds the
/// reversals of the low `floor(log2(m) / 2)` bits only.
fn bitrv2(m: usize, a: &mut [f32], seeds: &[usize]) {
    let l = m.ilog2() as usize;
    let h = l / 2;
    let mask = (1usize << h) - 1;

    for i in 0..m {
        let j = if l == 2 * h {
            (seeds[i & mask] << h) | seeds[i >> h]
        } else {
            let mid = (i >> h) & 1;
            (seeds[i & mask] << (h + 1)) | (mid << h) | seeds[i >> (h + 1)]
        };
        if j > i {
            a.swap(2 * i, 2 * j);
            a.swap(2 * i + 1, 2 * j + 1);
        }
    }
}

/// Real-forward post-processing after `cftfsub` over `n / 2` packed points.
///
/// Rebuilds the n-point half-spectrum from the half-size complex transform.
/// Slots 0 and 1 are left for the driver's closing patch, which resolves
/// them into Re[0] and Re[n/2].
pub fn rftfsub(n: usize, a: &mut [f32], nc: usize, w: &[f32], nw: usize) {
    let c = &w[2 * nw..2 * (nw + nc)];
    let m = n / 2;

    for jc in 1..m / 2 {
        let kc = m - jc;
        let ar = a[2 * jc];
        let ai = a[2 * jc + 1];
        let br = a[2 * kc];
        let bi = a[2 * kc + 1];

        let hr = 0.5 * (br + ar);
        let hi = 0.5 * (bi - ai);
        let dr = 0.5 * (br - ar);
        let di = 0.5 * (bi + ai);

        let wkr = c[2 * jc];
        let wki = c[2 * jc + 1];
        let tr = wkr * di - wki * dr;
        let ti = -wkr * dr - wki * di;

        a[2 * jc] = hr + tr;
        a[2 * jc + 1] = hi + ti;
        a[2 * kc] = hr - tr;
        a[2 * kc + 1] = -hi + ti;
    }
    // Quarter-spectrum midpoint reduces to a conjugation.
    a[m + 1] = -a[m + 1];
}

/// Real forward special case for n == 4.
pub fn cftx020(a: &mut [f32]) {
    let xr = a[0] - a[2];
    let xi = a[3] - a[1];
    let t0 = a[0] + a[2];
    let t1 = a[1] + a[3];
    a[0] = t0;
    a[1] = t1;
    a[2] = xr;
    a[3] = xi;
}
