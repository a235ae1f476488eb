use std::f32::consts::TAU;

use itertools::iproduct;

use crate::hal::layouts::{Complex32, Direction};

/// True if `n` factors into powers of 2, 3 and 5 only. These are the radices
/// the engine supports; everything else is rejected at plan creation.
pub(crate) fn smooth_235(mut n: u64) -> bool {
    if n == 0 {
        return false;
    }
    for p in [2u64, 3, 5] {
        while n.is_multiple_of(p) {
            n /= p;
        }
    }
    n == 1
}

/// Transforms a dense row-major block along every dimension. `lengths[0]`
/// is the contiguous dimension. Inverse transforms carry the engine's
/// default 1/N scaling, N being the total sample count.
pub(crate) fn transform(data: &mut [Complex32], lengths: &[u64], direction: Direction) {
    let total: usize = data.len();
    let sign: f32 = match direction {
        Direction::Forward => -1.0,
        Direction::Inverse => 1.0,
    };

    let mut stride: usize = 1;
    for &len in lengths {
        let len = len as usize;
        for (chunk, offset) in iproduct!((0..total).step_by(stride * len), 0..stride) {
            transform_line(data, chunk + offset, stride, len, sign);
        }
        stride *= len;
    }

    if direction == Direction::Inverse {
        let scale: f32 = 1.0 / total as f32;
        data.iter_mut().for_each(|x| *x = x.scale(scale));
    }
}

fn transform_line(data: &mut [Complex32], base: usize, stride: usize, len: usize, sign: f32) {
    let line: Vec<Complex32> = (0..len).map(|k| data[base + k * stride]).collect();
    let line: Vec<Complex32> = fft(&line, sign);
    (0..len).for_each(|k| data[base + k * stride] = line[k]);
}

/// Mixed-radix decimation in time over the factors {2, 3, 5}. Not tuned:
/// this engine exists as a correctness reference, not a production FFT.
fn fft(input: &[Complex32], sign: f32) -> Vec<Complex32> {
    let n: usize = input.len();
    if n == 1 {
        return input.to_vec();
    }

    let radix: usize = [2usize, 3, 5]
        .into_iter()
        .find(|p| n.is_multiple_of(*p))
        .expect("length must factor into {2, 3, 5}");
    let m: usize = n / radix;

    let subs: Vec<Vec<Complex32>> = (0..radix)
        .map(|q| {
            let part: Vec<Complex32> = input.iter().skip(q).step_by(radix).copied().collect();
            fft(&part, sign)
        })
        .collect();

    let step: f32 = sign * TAU / n as f32;
    (0..n)
        .map(|k| {
            subs.iter()
                .enumerate()
                .fold(Complex32::ZERO, |acc, (q, sub)| {
                    acc + Complex32::from_polar(1.0, step * ((q * k) % n) as f32) * sub[k % m]
                })
        })
        .collect()
}
