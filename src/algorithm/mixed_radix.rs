use std::f64::consts::PI;

use crate::common::{verify_real_buffer, DftError};
use crate::math_utils::{factorize, Factorization};
use crate::plan::PlanKind;
use crate::{Length, RealDft};

const TAUR: f32 = -0.5;
const TAUI: f32 = 0.866_025_403_784_438_6;
const HSQT2: f32 = 0.707_106_781_186_547_5;
const TR11: f32 = 0.309_016_994_374_947_45;
const TI11: f32 = 0.951_056_516_295_153_5;
const TR12: f32 = -0.809_016_994_374_947_5;
const TI12: f32 = 0.587_785_252_292_473_1;

/// Real forward transform for lengths whose factors stay small.
///
/// Runs the reversed factor schedule through radix-2/3/4/5 passes plus a
/// general radix pass, ping-ponging between the caller's buffer and a
/// per-call scratch buffer, then reorders into the packed half-spectrum.
///
/// ~~~
/// // Computes a packed real forward DFT of size 1000
/// use realdft::algorithm::MixedRadixReal;
/// use realdft::RealDft;
///
/// let mut buffer = vec![0.5f32; 1000];
/// let fft = MixedRadixReal::new(1000);
/// fft.real_forward(&mut buffer, 0).unwrap();
/// ~~~
pub struct MixedRadixReal {
    n: usize,
    wa: Vec<f32>,
    factors: Factorization,
}

impl MixedRadixReal {
    pub fn new(n: usize) -> Self {
        assert!(n >= 1, "MixedRadixReal length must be at least 1, got {}", n);
        let factors = factorize(n);
        let wa = real_twiddles(&factors);
        MixedRadixReal { n, wa, factors }
    }

    /// One pass per factor, walking the factor list from the back.
    fn rfftf(&self, a: &mut [f32], ch: &mut [f32]) {
        let n = self.n;
        let nf = self.factors.count();
        let mut na = 1usize;
        let mut l2 = n;
        let mut iw = n;

        for k1 in 0..nf {
            let kh = nf - k1 - 1;
            let ip = self.factors.factors[kh];
            let l1 = l2 / ip;
            let ido = n / l2;
            let idl1 = ido * l1;
            iw -= (ip - 1) * ido;
            na = 1 - na;
            let wa = &self.wa[iw - 1..];

            match ip {
                2 => {
                    if na != 0 {
                        radf2(ido, l1, ch, a, wa);
                    } else {
                        radf2(ido, l1, a, ch, wa);
                    }
                }
                3 => {
                    if na != 0 {
                        radf3(ido, l1, ch, a, wa);
                    } else {
                        radf3(ido, l1, a, ch, wa);
                    }
                }
                4 => {
                    if na != 0 {
                        radf4(ido, l1, ch, a, wa);
                    } else {
                        radf4(ido, l1, a, ch, wa);
                    }
                }
                5 => {
                    if na != 0 {
                        radf5(ido, l1, ch, a, wa);
                    } else {
                        radf5(ido, l1, a, ch, wa);
                    }
                }
                _ => {
                    // The general pass writes its result back into its first
                    // buffer, so the ping-pong accounting is explicit here.
                    if ido == 1 {
                        na = 1 - na;
                    }
                    if na != 0 {
                        radfg(ido, ip, l1, idl1, ch, a, wa);
                        na = 0;
                    } else {
                        radfg(ido, ip, l1, idl1, a, ch, wa);
                        na = 1;
                    }
                }
            }
            l2 = l1;
        }
        if na == 0 {
            a.copy_from_slice(ch);
        }
    }
}

impl RealDft for MixedRadixReal {
    fn kind(&self) -> PlanKind {
        PlanKind::MixedRadix
    }

    fn real_forward(&self, buffer: &mut [f32], offset: usize) -> Result<(), DftError> {
        verify_real_buffer(buffer, offset, self.n)?;
        if self.n == 1 {
            return Ok(());
        }
        let a = &mut buffer[offset..offset + self.n];
        let mut ch = vec![0.0f32; self.n];
        self.rfftf(a, &mut ch);

        // Bubble the highest slot down to index 1: rotates a[1..n) right by
        // one, turning [Re0, Re1, Im1, ..] into the packed half-spectrum.
        for k in (2..self.n).rev() {
            a.swap(k, k - 1);
        }
        Ok(())
    }
}

impl Length for MixedRadixReal {
    #[inline(always)]
    fn len(&self) -> usize {
        self.n
    }
}

/// Twiddle table in the classic real-transform layout: one block per factor
/// (except the last), one row of `ido` slots per non-zero column.
fn real_twiddles(factors: &Factorization) -> Vec<f32> {
    let n = factors.n;
    let mut wa = vec![0.0f32; n];
    let nf = factors.count();
    if nf < 2 {
        return wa;
    }
    let argh = 2.0 * PI / n as f64;
    let mut is = 0usize;
    let mut l1 = 1usize;

    for k1 in 0..nf - 1 {
        let ip = factors.factors[k1];
        let l2 = l1 * ip;
        let ido = n / l2;
        let mut ld = 0usize;
        for _j in 0..ip - 1 {
            ld += l1;
            let argld = ld as f64 * argh;
            let mut i = is;
            let mut fi = 0.0f64;
            let mut ii = 2;
            while ii < ido {
                fi += 1.0;
                let (sin, cos) = (fi * argld).sin_cos();
                wa[i] = cos as f32;
                wa[i + 1] = sin as f32;
                i += 2;
                ii += 2;
            }
            is += ido;
        }
        l1 = l2;
    }
    wa
}

// The radix kernels below keep the classic geometry: `cc` is indexed as
// (i, k, j) with i the inner stride, k the block, j the input column, and
// `ch` as (i, j, k) with j the output line. `ic = ido - i` addresses the
// reversed half of a packed output pair.

fn radf2(ido: usize, l1: usize, cc: &[f32], ch: &mut [f32], wa: &[f32]) {
    let cc_i = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    let ch_i = |i: usize, j: usize, k: usize| i + ido * (j + 2 * k);

    for k in 0..l1 {
        ch[ch_i(0, 0, k)] = cc[cc_i(0, k, 0)] + cc[cc_i(0, k, 1)];
        ch[ch_i(ido - 1, 1, k)] = cc[cc_i(0, k, 0)] - cc[cc_i(0, k, 1)];
    }
    if ido < 2 {
        return;
    }
    if ido > 2 {
        for k in 0..l1 {
            let mut i = 2;
            while i < ido {
                let ic = ido - i;
                let tr2 = wa[i - 2] * cc[cc_i(i - 1, k, 1)] + wa[i - 1] * cc[cc_i(i, k, 1)];
                let ti2 = wa[i - 2] * cc[cc_i(i, k, 1)] - wa[i - 1] * cc[cc_i(i - 1, k, 1)];
                ch[ch_i(i, 0, k)] = cc[cc_i(i, k, 0)] + ti2;
                ch[ch_i(ic, 1, k)] = ti2 - cc[cc_i(i, k, 0)];
                ch[ch_i(i - 1, 0, k)] = cc[cc_i(i - 1, k, 0)] + tr2;
                ch[ch_i(ic - 1, 1, k)] = cc[cc_i(i - 1, k, 0)] - tr2;
                i += 2;
            }
        }
        if ido % 2 == 1 {
            return;
        }
    }
    for k in 0..l1 {
        ch[ch_i(0, 1, k)] = -cc[cc_i(ido - 1, k, 1)];
        ch[ch_i(ido - 1, 0, k)] = cc[cc_i(ido - 1, k, 0)];
    }
}

fn radf3(ido: usize, l1: usize, cc: &[f32], ch: &mut [f32], wa: &[f32]) {
    let cc_i = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    let ch_i = |i: usize, j: usize, k: usize| i + ido * (j + 3 * k);

    for k in 0..l1 {
        let cr2 = cc[cc_i(0, k, 1)] + cc[cc_i(0, k, 2)];
        ch[ch_i(0, 0, k)] = cc[cc_i(0, k, 0)] + cr2;
        ch[ch_i(0, 2, k)] = TAUI * (cc[cc_i(0, k, 2)] - cc[cc_i(0, k, 1)]);
        ch[ch_i(ido - 1, 1, k)] = cc[cc_i(0, k, 0)] + TAUR * cr2;
    }
    if ido == 1 {
        return;
    }
    let (wa1, wa2) = (wa, &wa[ido..]);
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let dr2 = wa1[i - 2] * cc[cc_i(i - 1, k, 1)] + wa1[i - 1] * cc[cc_i(i, k, 1)];
            let di2 = wa1[i - 2] * cc[cc_i(i, k, 1)] - wa1[i - 1] * cc[cc_i(i - 1, k, 1)];
            let dr3 = wa2[i - 2] * cc[cc_i(i - 1, k, 2)] + wa2[i - 1] * cc[cc_i(i, k, 2)];
            let di3 = wa2[i - 2] * cc[cc_i(i, k, 2)] - wa2[i - 1] * cc[cc_i(i - 1, k, 2)];
            let cr2 = dr2 + dr3;
            let ci2 = di2 + di3;
            ch[ch_i(i - 1, 0, k)] = cc[cc_i(i - 1, k, 0)] + cr2;
            ch[ch_i(i, 0, k)] = cc[cc_i(i, k, 0)] + ci2;
            let tr2 = cc[cc_i(i - 1, k, 0)] + TAUR * cr2;
            let ti2 = cc[cc_i(i, k, 0)] + TAUR * ci2;
            let tr3 = TAUI * (di2 - di3);
            let ti3 = TAUI * (dr3 - dr2);
            ch[ch_i(i - 1, 2, k)] = tr2 + tr3;
            ch[ch_i(ic - 1, 1, k)] = tr2 - tr3;
            ch[ch_i(i, 2, k)] = ti2 + ti3;
            ch[ch_i(ic, 1, k)] = ti3 - ti2;
            i += 2;
        }
    }
}

fn radf4(ido: usize, l1: usize, cc: &[f32], ch: &mut [f32], wa: &[f32]) {
    let cc_i = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    let ch_i = |i: usize, j: usize, k: usize| i + ido * (j + 4 * k);

    for k in 0..l1 {
        let tr1 = cc[cc_i(0, k, 1)] + cc[cc_i(0, k, 3)];
        let tr2 = cc[cc_i(0, k, 0)] + cc[cc_i(0, k, 2)];
        ch[ch_i(0, 0, k)] = tr1 + tr2;
        ch[ch_i(ido - 1, 3, k)] = tr2 - tr1;
        ch[ch_i(ido - 1, 1, k)] = cc[cc_i(0, k, 0)] - cc[cc_i(0, k, 2)];
        ch[ch_i(0, 2, k)] = cc[cc_i(0, k, 3)] - cc[cc_i(0, k, 1)];
    }
    if ido < 2 {
        return;
    }
    if ido > 2 {
        let (wa1, wa2, wa3) = (wa, &wa[ido..], &wa[2 * ido..]);
        for k in 0..l1 {
            let mut i = 2;
            while i < ido {
                let ic = ido - i;
                let cr2 = wa1[i - 2] * cc[cc_i(i - 1, k, 1)] + wa1[i - 1] * cc[cc_i(i, k, 1)];
                let ci2 = wa1[i - 2] * cc[cc_i(i, k, 1)] - wa1[i - 1] * cc[cc_i(i - 1, k, 1)];
                let cr3 = wa2[i - 2] * cc[cc_i(i - 1, k, 2)] + wa2[i - 1] * cc[cc_i(i, k, 2)];
                let ci3 = wa2[i - 2] * cc[cc_i(i, k, 2)] - wa2[i - 1] * cc[cc_i(i - 1, k, 2)];
                let cr4 = wa3[i - 2] * cc[cc_i(i - 1, k, 3)] + wa3[i - 1] * cc[cc_i(i, k, 3)];
                let ci4 = wa3[i - 2] * cc[cc_i(i, k, 3)] - wa3[i - 1] * cc[cc_i(i - 1, k, 3)];
                let tr1 = cr2 + cr4;
                let tr4 = cr4 - cr2;
                let ti1 = ci2 + ci4;
                let ti4 = ci2 - ci4;
                let ti2 = cc[cc_i(i, k, 0)] + ci3;
                let ti3 = cc[cc_i(i, k, 0)] - ci3;
                let tr2 = cc[cc_i(i - 1, k, 0)] + cr3;
                let tr3 = cc[cc_i(i - 1, k, 0)] - cr3;
                ch[ch_i(i - 1, 0, k)] = tr1 + tr2;
                ch[ch_i(ic - 1, 3, k)] = tr2 - tr1;
                ch[ch_i(i, 0, k)] = ti1 + ti2;
                ch[ch_i(ic, 3, k)] = ti1 - ti2;
                ch[ch_i(i - 1, 2, k)] = ti4 + tr3;
                ch[ch_i(ic - 1, 1, k)] = tr3 - ti4;
                ch[ch_i(i, 2, k)] = tr4 + ti3;
                ch[ch_i(ic, 1, k)] = tr4 - ti3;
                i += 2;
            }
        }
        if ido % 2 == 1 {
            return;
        }
    }
    for k in 0..l1 {
        let ti1 = -HSQT2 * (cc[cc_i(ido - 1, k, 1)] + cc[cc_i(ido - 1, k, 3)]);
        let tr1 = HSQT2 * (cc[cc_i(ido - 1, k, 1)] - cc[cc_i(ido - 1, k, 3)]);
        ch[ch_i(ido - 1, 0, k)] = tr1 + cc[cc_i(ido - 1, k, 0)];
        ch[ch_i(ido - 1, 2, k)] = cc[cc_i(ido - 1, k, 0)] - tr1;
        ch[ch_i(0, 1, k)] = ti1 - cc[cc_i(ido - 1, k, 2)];
        ch[ch_i(0, 3, k)] = ti1 + cc[cc_i(ido - 1, k, 2)];
    }
}

fn radf5(ido: usize, l1: usize, cc: &[f32], ch: &mut [f32], wa: &[f32]) {
    let cc_i = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    let ch_i = |i: usize, j: usize, k: usize| i + ido * (j + 5 * k);

    for k in 0..l1 {
        let cr2 = cc[cc_i(0, k, 4)] + cc[cc_i(0, k, 1)];
        let ci5 = cc[cc_i(0, k, 4)] - cc[cc_i(0, k, 1)];
        let cr3 = cc[cc_i(0, k, 3)] + cc[cc_i(0, k, 2)];
        let ci4 = cc[cc_i(0, k, 3)] - cc[cc_i(0, k, 2)];
        ch[ch_i(0, 0, k)] = cc[cc_i(0, k, 0)] + cr2 + cr3;
        ch[ch_i(ido - 1, 1, k)] = cc[cc_i(0, k, 0)] + TR11 * cr2 + TR12 * cr3;
        ch[ch_i(0, 2, k)] = TI11 * ci5 + TI12 * ci4;
        ch[ch_i(ido - 1, 3, k)] = cc[cc_i(0, k, 0)] + TR12 * cr2 + TR11 * cr3;
        ch[ch_i(0, 4, k)] = TI12 * ci5 - TI11 * ci4;
    }
    if ido == 1 {
        return;
    }
    let (wa1, wa2, wa3, wa4) = (wa, &wa[ido..], &wa[2 * ido..], &wa[3 * ido..]);
    for k in 0..l1 {
        let mut i = 2;
        while i < ido {
            let ic = ido - i;
            let dr2 = wa1[i - 2] * cc[cc_i(i - 1, k, 1)] + wa1[i - 1] * cc[cc_i(i, k, 1)];
            let di2 = wa1[i - 2] * cc[cc_i(i, k, 1)] - wa1[i - 1] * cc[cc_i(i - 1, k, 1)];
            let dr3 = wa2[i - 2] * cc[cc_i(i - 1, k, 2)] + wa2[i - 1] * cc[cc_i(i, k, 2)];
            let di3 = wa2[i - 2] * cc[cc_i(i, k, 2)] - wa2[i - 1] * cc[cc_i(i - 1, k, 2)];
            let dr4 = wa3[i - 2] * cc[cc_i(i - 1, k, 3)] + wa3[i - 1] * cc[cc_i(i, k, 3)];
            let di4 = wa3[i - 2] * cc[cc_i(i, k, 3)] - wa3[i - 1] * cc[cc_i(i - 1, k, 3)];
            let dr5 = wa4[i - 2] * cc[cc_i(i - 1, k, 4)] + wa4[i - 1] * cc[cc_i(i, k, 4)];
            let di5 = wa4[i - 2] * cc[cc_i(i, k, 4)] - wa4[i - 1] * cc[cc_i(i - 1, k, 4)];
            let cr2 = dr2 + dr5;
            let ci5 = dr5 - dr2;
            let cr5 = di2 - di5;
            let ci2 = di2 + di5;
            let cr3 = dr3 + dr4;
            let ci4 = dr4 - dr3;
            let cr4 = di3 - di4;
            let ci3 = di3 + di4;
            ch[ch_i(i - 1, 0, k)] = cc[cc_i(i - 1, k, 0)] + cr2 + cr3;
            ch[ch_i(i, 0, k)] = cc[cc_i(i, k, 0)] + ci2 + ci3;
            let tr2 = cc[cc_i(i - 1, k, 0)] + TR11 * cr2 + TR12 * cr3;
            let ti2 = cc[cc_i(i, k, 0)] + TR11 * ci2 + TR12 * ci3;
            let tr3 = cc[cc_i(i - 1, k, 0)] + TR12 * cr2 + TR11 * cr3;
            let ti3 = cc[cc_i(i, k, 0)] + TR12 * ci2 + TR11 * ci3;
            let tr5 = TI11 * cr5 + TI12 * cr4;
            let ti5 = TI11 * ci5 + TI12 * ci4;
            let tr4 = TI12 * cr5 - TI11 * cr4;
            let ti4 = TI12 * ci5 - TI11 * ci4;
            ch[ch_i(i - 1, 2, k)] = tr2 + tr5;
            ch[ch_i(ic - 1, 1, k)] = tr2 - tr5;
            ch[ch_i(i, 2, k)] = ti2 + ti5;
            ch[ch_i(ic, 1, k)] = ti5 - ti2;
            ch[ch_i(i - 1, 4, k)] = tr3 + tr4;
            ch[ch_i(ic - 1, 3, k)] = tr3 - tr4;
            ch[ch_i(i, 4, k)] = ti3 + ti4;
            ch[ch_i(ic, 3, k)] = ti4 - ti3;
            i += 2;
        }
    }
}

/// General radix pass for factors outside {2, 3, 4, 5}.
///
/// `cc` is both the source and the final destination; `ch` is scratch. The
/// radix-p DFT across column slots is the O(p^2) recurrence on (ar1, ai1)
/// and (ar2, ai2). Loop orders switch on `nbd` vs `l1` to keep the hotter
/// stride innermost; both orders produce identical results.
fn radfg(
    ido: usize,
    ip: usize,
    l1: usize,
    idl1: usize,
    cc: &mut [f32],
    ch: &mut [f32],
    wa: &[f32],
) {
    // cc viewed as (i, j, k) on output, c1 as (i, k, j), c2 flat (ik, j);
    // ch as (i, k, j), ch2 flat (ik, j). c1/c2 alias cc, ch2 aliases ch.
    let cc_i = |i: usize, j: usize, k: usize| i + ido * (j + ip * k);
    let c1_i = |i: usize, k: usize, j: usize| i + ido * (k + l1 * j);
    let c2_i = |ik: usize, j: usize| ik + idl1 * j;
    let ch_i = c1_i;
    let ch2_i = c2_i;

    let arg = 2.0 * PI / ip as f64;
    let dcp = arg.cos() as f32;
    let dsp = arg.sin() as f32;
    let ipph = (ip + 1) / 2;
    let nbd = (ido - 1) / 2;

    if ido != 1 {
        for ik in 0..idl1 {
            ch[ch2_i(ik, 0)] = cc[c2_i(ik, 0)];
        }
        for j in 1..ip {
            for k in 0..l1 {
                ch[ch_i(0, k, j)] = cc[c1_i(0, k, j)];
            }
        }

        // Per-column twiddles, conjugate multiply.
        if nbd <= l1 {
            let mut is = 0;
            for j in 1..ip {
                let mut idij = is;
                let mut i = 2;
                while i < ido {
                    for k in 0..l1 {
                        ch[ch_i(i - 1, k, j)] =
                            wa[idij] * cc[c1_i(i - 1, k, j)] + wa[idij + 1] * cc[c1_i(i, k, j)];
                        ch[ch_i(i, k, j)] =
                            wa[idij] * cc[c1_i(i, k, j)] - wa[idij + 1] * cc[c1_i(i - 1, k, j)];
                    }
                    idij += 2;
                    i += 2;
                }
                is += ido;
            }
        } else {
            let mut is = 0;
            for j in 1..ip {
                for k in 0..l1 {
                    let mut idij = is;
                    let mut i = 2;
                    while i < ido {
                        ch[ch_i(i - 1, k, j)] =
                            wa[idij] * cc[c1_i(i - 1, k, j)] + wa[idij + 1] * cc[c1_i(i, k, j)];
                        ch[ch_i(i, k, j)] =
                            wa[idij] * cc[c1_i(i, k, j)] - wa[idij + 1] * cc[c1_i(i - 1, k, j)];
                        idij += 2;
                        i += 2;
                    }
                }
                is += ido;
            }
        }

        // Fold the twiddled columns into symmetric (j, ip - j) sum/diff slots.
        if nbd >= l1 {
            for j in 1..ipph {
                let jc = ip - j;
                for k in 0..l1 {
                    let mut i = 2;
                    while i < ido {
                        cc[c1_i(i - 1, k, j)] = ch[ch_i(i - 1, k, j)] + ch[ch_i(i - 1, k, jc)];
                        cc[c1_i(i - 1, k, jc)] = ch[ch_i(i, k, j)] - ch[ch_i(i, k, jc)];
                        cc[c1_i(i, k, j)] = ch[ch_i(i, k, j)] + ch[ch_i(i, k, jc)];
                        cc[c1_i(i, k, jc)] = ch[ch_i(i - 1, k, jc)] - ch[ch_i(i - 1, k, j)];
                        i += 2;
                    }
                }
            }
        } else {
            for j in 1..ipph {
                let jc = ip - j;
                let mut i = 2;
                while i < ido {
                    for k in 0..l1 {
                        cc[c1_i(i - 1, k, j)] = ch[ch_i(i - 1, k, j)] + ch[ch_i(i - 1, k, jc)];
                        cc[c1_i(i - 1, k, jc)] = ch[ch_i(i, k, j)] - ch[ch_i(i, k, jc)];
                        cc[c1_i(i, k, j)] = ch[ch_i(i, k, j)] + ch[ch_i(i, k, jc)];
                        cc[c1_i(i, k, jc)] = ch[ch_i(i - 1, k, jc)] - ch[ch_i(i - 1, k, j)];
                    }
                    i += 2;
                }
            }
        }
    } else {
        for ik in 0..idl1 {
            cc[c2_i(ik, 0)] = ch[ch2_i(ik, 0)];
        }
    }

    for j in 1..ipph {
        let jc = ip - j;
        for k in 0..l1 {
            cc[c1_i(0, k, j)] = ch[ch_i(0, k, j)] + ch[ch_i(0, k, jc)];
            cc[c1_i(0, k, jc)] = ch[ch_i(0, k, jc)] - ch[ch_i(0, k, j)];
        }
    }

    // Radix-p DFT across the column slots.
    let mut ar1 = 1.0f32;
    let mut ai1 = 0.0f32;
    for l in 1..ipph {
        let lc = ip - l;
        let ar1h = dcp * ar1 - dsp * ai1;
        ai1 = dcp * ai1 + dsp * ar1;
        ar1 = ar1h;
        for ik in 0..idl1 {
            ch[ch2_i(ik, l)] = cc[c2_i(ik, 0)] + ar1 * cc[c2_i(ik, 1)];
            ch[ch2_i(ik, lc)] = ai1 * cc[c2_i(ik, ip - 1)];
        }
        let dc2 = ar1;
        let ds2 = ai1;
        let mut ar2 = ar1;
        let mut ai2 = ai1;
        for j in 2..ipph {
            let jc = ip - j;
            let ar2h = dc2 * ar2 - ds2 * ai2;
            ai2 = dc2 * ai2 + ds2 * ar2;
            ar2 = ar2h;
            for ik in 0..idl1 {
                ch[ch2_i(ik, l)] += ar2 * cc[c2_i(ik, j)];
                ch[ch2_i(ik, lc)] += ai2 * cc[c2_i(ik, jc)];
            }
        }
    }
    for j in 1..ipph {
        for ik in 0..idl1 {
            ch[ch2_i(ik, 0)] += cc[c2_i(ik, j)];
        }
    }

    // Scatter the p-point results into the strided packed output.
    if ido >= l1 {
        for k in 0..l1 {
            for i in 0..ido {
                cc[cc_i(i, 0, k)] = ch[ch_i(i, k, 0)];
            }
        }
    } else {
        for i in 0..ido {
            for k in 0..l1 {
                cc[cc_i(i, 0, k)] = ch[ch_i(i, k, 0)];
            }
        }
    }
    for j in 1..ipph {
        let jc = ip - j;
        let j2 = 2 * j;
        for k in 0..l1 {
            cc[cc_i(ido - 1, j2 - 1, k)] = ch[ch_i(0, k, j)];
            cc[cc_i(0, j2, k)] = ch[ch_i(0, k, jc)];
        }
    }
    if ido == 1 {
        return;
    }
    if nbd >= l1 {
        for j in 1..ipph {
            let jc = ip - j;
            let j2 = 2 * j;
            for k in 0..l1 {
                let mut i = 2;
                while i < ido {
                    let ic = ido - i;
                    cc[cc_i(i - 1, j2, k)] = ch[ch_i(i - 1, k, j)] + ch[ch_i(i - 1, k, jc)];
                    cc[cc_i(ic - 1, j2 - 1, k)] = ch[ch_i(i - 1, k, j)] - ch[ch_i(i - 1, k, jc)];
                    cc[cc_i(i, j2, k)] = ch[ch_i(i, k, j)] + ch[ch_i(i, k, jc)];
                    cc[cc_i(ic, j2 - 1, k)] = ch[ch_i(i, k, jc)] - ch[ch_i(i, k, j)];
                    i += 2;
                }
            }
        }
    } else {
        for j in 1..ipph {
            let jc = ip - j;
            let j2 = 2 * j;
            let mut i = 2;
            while i < ido {
                let ic = ido - i;
                for k in 0..l1 {
                    cc[cc_i(i - 1, j2, k)] = ch[ch_i(i - 1, k, j)] + ch[ch_i(i - 1, k, jc)];
                    cc[cc_i(ic - 1, j2 - 1, k)] = ch[ch_i(i - 1, k, j)] - ch[ch_i(i - 1, k, jc)];
                    cc[cc_i(i, j2, k)] = ch[ch_i(i, k, j)] + ch[ch_i(i, k, jc)];
                    cc[cc_i(ic, j2 - 1, k)] = ch[ch_i(i, k, jc)] - ch[ch_i(i, k, j)];
                }
                i += 2;
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::test_utils::check_real_dft;

    #[test]
    fn test_small_radices() {
        for n in [3, 5, 6, 9, 10, 12, 15, 20, 24, 40, 45, 60, 100, 120] {
            let fft = MixedRadixReal::new(n);
            check_real_dft(&fft, n);
        }
    }

    #[test]
    fn test_general_radix() {
        // Factors of 7, 11, 13 and their mixes exercise the O(p^2) pass;
        // 343 and 441 hit the large-l1 loop-order variants.
        for n in [7, 11, 13, 14, 21, 22, 33, 35, 49, 77, 91, 209, 210, 343, 441] {
            let fft = MixedRadixReal::new(n);
            check_real_dft(&fft, n);
        }
    }

    #[test]
    fn test_all_lengths_to_100() {
        for n in 1..=100 {
            let fft = MixedRadixReal::new(n);
            check_real_dft(&fft, n);
        }
    }

    #[test]
    fn test_all_ones_concentrates_in_dc() {
        let fft = MixedRadixReal::new(3);
        let mut buffer = [1.0f32, 1.0, 1.0];
        fft.real_forward(&mut buffer, 0).unwrap();
        assert_eq!(buffer, [3.0, 0.0, 0.0]);
    }
}
