//! Scalar lane kernels: pure functions computing one result lane from one
//! to three input lane values plus the data format.
//!
//! Inputs arrive sign-extended to i64; kernels that work in the unsigned
//! domain mask internally, which is equivalent on extended inputs. Results
//! are returned in the i64 accumulator domain and truncated to the lane
//! width by the caller's store.

use crate::format::DataFormat;

fn abs_u(df: DataFormat, a: i64) -> u64 {
    let a = if a >= 0 { a as u64 } else { (a as u64).wrapping_neg() };
    a & df.max_uint()
}

/// Low sub-lane, sign-extended.
fn signed_even(df: DataFormat, a: i64) -> i64 {
    let sh = 64 - df.bits() / 2;
    (a << sh) >> sh
}

/// High sub-lane, sign-extended.
fn signed_odd(df: DataFormat, a: i64) -> i64 {
    (a << (64 - df.bits())) >> (64 - df.bits() / 2)
}

/// Low sub-lane, zero-extended.
fn unsigned_even(df: DataFormat, a: i64) -> u64 {
    a as u64 & (u64::MAX >> (64 - df.bits() / 2))
}

/// High sub-lane, zero-extended.
fn unsigned_odd(df: DataFormat, a: i64) -> u64 {
    ((a as u64) << (64 - df.bits())) >> (64 - df.bits() / 2)
}

// ---------------------------------------------------------------------------
// Modular and saturating add/sub
// ---------------------------------------------------------------------------

pub(crate) fn addv(_df: DataFormat, a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

pub(crate) fn subv(_df: DataFormat, a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

pub(crate) fn adds_s(df: DataFormat, a: i64, b: i64) -> i64 {
    let max = df.max_int();
    let min = df.min_int();
    if a < 0 {
        // The limit test is phrased as limit-minus-operand to avoid
        // overflowing the accumulator at full lane width.
        if min - a < b {
            a.wrapping_add(b)
        } else {
            min
        }
    } else if b < max - a {
        a.wrapping_add(b)
    } else {
        max
    }
}

pub(crate) fn adds_u(df: DataFormat, a: i64, b: i64) -> i64 {
    let max = df.max_uint();
    let a = df.to_unsigned(a);
    let b = df.to_unsigned(b);
    if a < max - b {
        (a + b) as i64
    } else {
        max as i64
    }
}

pub(crate) fn subs_s(df: DataFormat, a: i64, b: i64) -> i64 {
    let max = df.max_int();
    let min = df.min_int();
    if b > 0 {
        if min + b < a {
            a.wrapping_sub(b)
        } else {
            min
        }
    } else if a < max + b {
        a.wrapping_sub(b)
    } else {
        max
    }
}

pub(crate) fn subs_u(df: DataFormat, a: i64, b: i64) -> i64 {
    let a = df.to_unsigned(a);
    let b = df.to_unsigned(b);
    if a > b {
        (a - b) as i64
    } else {
        0
    }
}

/// Unsigned minuend, signed subtrahend, unsigned saturated result.
pub(crate) fn subsus_u(df: DataFormat, a: i64, b: i64) -> i64 {
    let u_a = df.to_unsigned(a);
    let max = df.max_uint();
    if b >= 0 {
        let u_b = b as u64;
        if u_a > u_b {
            (u_a - u_b) as i64
        } else {
            0
        }
    } else {
        let u_b = (b as u64).wrapping_neg() & max;
        if u_a < max - u_b {
            (u_a + u_b) as i64
        } else {
            max as i64
        }
    }
}

/// Unsigned operands, signed saturated result.
pub(crate) fn subsuu_s(df: DataFormat, a: i64, b: i64) -> i64 {
    let u_a = df.to_unsigned(a);
    let u_b = df.to_unsigned(b);
    let max = df.max_int();
    let min = df.min_int();
    if u_a > u_b {
        if u_a - u_b < max as u64 {
            (u_a - u_b) as i64
        } else {
            max
        }
    } else if u_b - u_a < min.wrapping_neg() as u64 {
        u_a.wrapping_sub(u_b) as i64
    } else {
        min
    }
}

pub(crate) fn asub_s(_df: DataFormat, a: i64, b: i64) -> i64 {
    if a > b {
        a.wrapping_sub(b)
    } else {
        b.wrapping_sub(a)
    }
}

pub(crate) fn asub_u(df: DataFormat, a: i64, b: i64) -> i64 {
    let a = df.to_unsigned(a);
    let b = df.to_unsigned(b);
    if a > b { (a - b) as i64 } else { (b - a) as i64 }
}

pub(crate) fn add_a(df: DataFormat, a: i64, b: i64) -> i64 {
    abs_u(df, a).wrapping_add(abs_u(df, b)) as i64
}

pub(crate) fn adds_a(df: DataFormat, a: i64, b: i64) -> i64 {
    let max = df.max_int() as u64;
    let abs_a = abs_u(df, a);
    let abs_b = abs_u(df, b);
    if abs_a > max || abs_b > max {
        max as i64
    } else if abs_a < max - abs_b {
        (abs_a + abs_b) as i64
    } else {
        max as i64
    }
}

// ---------------------------------------------------------------------------
// Averages
// ---------------------------------------------------------------------------

// The operand sum is never formed directly; the halved-operand form with an
// explicit round bit cannot overflow at full lane width.

pub(crate) fn ave_s(_df: DataFormat, a: i64, b: i64) -> i64 {
    (a >> 1) + (b >> 1) + (a & b & 1)
}

pub(crate) fn ave_u(df: DataFormat, a: i64, b: i64) -> i64 {
    let a = df.to_unsigned(a);
    let b = df.to_unsigned(b);
    ((a >> 1) + (b >> 1) + (a & b & 1)) as i64
}

pub(crate) fn aver_s(_df: DataFormat, a: i64, b: i64) -> i64 {
    (a >> 1) + (b >> 1) + ((a | b) & 1)
}

pub(crate) fn aver_u(df: DataFormat, a: i64, b: i64) -> i64 {
    let a = df.to_unsigned(a);
    let b = df.to_unsigned(b);
    ((a >> 1) + (b >> 1) + ((a | b) & 1)) as i64
}

// ---------------------------------------------------------------------------
// Min/max
// ---------------------------------------------------------------------------

pub(crate) fn max_s(_df: DataFormat, a: i64, b: i64) -> i64 {
    a.max(b)
}

pub(crate) fn min_s(_df: DataFormat, a: i64, b: i64) -> i64 {
    a.min(b)
}

pub(crate) fn max_u(df: DataFormat, a: i64, b: i64) -> i64 {
    df.to_unsigned(a).max(df.to_unsigned(b)) as i64
}

pub(crate) fn min_u(df: DataFormat, a: i64, b: i64) -> i64 {
    df.to_unsigned(a).min(df.to_unsigned(b)) as i64
}

// Magnitude ties keep the first operand.

pub(crate) fn max_a(df: DataFormat, a: i64, b: i64) -> i64 {
    if abs_u(df, a) >= abs_u(df, b) { a } else { b }
}

pub(crate) fn min_a(df: DataFormat, a: i64, b: i64) -> i64 {
    if abs_u(df, a) <= abs_u(df, b) { a } else { b }
}

// ---------------------------------------------------------------------------
// Compare-as-mask: all ones when the predicate holds, all zeros otherwise
// ---------------------------------------------------------------------------

pub(crate) fn ceq(_df: DataFormat, a: i64, b: i64) -> i64 {
    if a == b { -1 } else { 0 }
}

pub(crate) fn clt_s(_df: DataFormat, a: i64, b: i64) -> i64 {
    if a < b { -1 } else { 0 }
}

pub(crate) fn cle_s(_df: DataFormat, a: i64, b: i64) -> i64 {
    if a <= b { -1 } else { 0 }
}

pub(crate) fn clt_u(df: DataFormat, a: i64, b: i64) -> i64 {
    if df.to_unsigned(a) < df.to_unsigned(b) {
        -1
    } else {
        0
    }
}

pub(crate) fn cle_u(df: DataFormat, a: i64, b: i64) -> i64 {
    if df.to_unsigned(a) <= df.to_unsigned(b) {
        -1
    } else {
        0
    }
}

// ---------------------------------------------------------------------------
// Horizontal add/sub and dot products over even/odd sub-lanes
// ---------------------------------------------------------------------------

pub(crate) fn hadd_s(df: DataFormat, a: i64, b: i64) -> i64 {
    signed_odd(df, a).wrapping_add(signed_even(df, b))
}

pub(crate) fn hadd_u(df: DataFormat, a: i64, b: i64) -> i64 {
    (unsigned_odd(df, a).wrapping_add(unsigned_even(df, b))) as i64
}

pub(crate) fn hsub_s(df: DataFormat, a: i64, b: i64) -> i64 {
    signed_odd(df, a).wrapping_sub(signed_even(df, b))
}

pub(crate) fn hsub_u(df: DataFormat, a: i64, b: i64) -> i64 {
    unsigned_odd(df, a).wrapping_sub(unsigned_even(df, b)) as i64
}

pub(crate) fn dotp_s(df: DataFormat, a: i64, b: i64) -> i64 {
    let even = signed_even(df, a).wrapping_mul(signed_even(df, b));
    let odd = signed_odd(df, a).wrapping_mul(signed_odd(df, b));
    even.wrapping_add(odd)
}

pub(crate) fn dotp_u(df: DataFormat, a: i64, b: i64) -> i64 {
    let even = unsigned_even(df, a).wrapping_mul(unsigned_even(df, b));
    let odd = unsigned_odd(df, a).wrapping_mul(unsigned_odd(df, b));
    even.wrapping_add(odd) as i64
}

pub(crate) fn dpadd_s(df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_add(dotp_s(df, a, b))
}

pub(crate) fn dpadd_u(df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_add(dotp_u(df, a, b))
}

pub(crate) fn dpsub_s(df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_sub(dotp_s(df, a, b))
}

pub(crate) fn dpsub_u(df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_sub(dotp_u(df, a, b))
}

// ---------------------------------------------------------------------------
// Multiply and divide
// ---------------------------------------------------------------------------

pub(crate) fn mulv(_df: DataFormat, a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

pub(crate) fn maddv(_df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_add(a.wrapping_mul(b))
}

pub(crate) fn msubv(_df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    dest.wrapping_sub(a.wrapping_mul(b))
}

pub(crate) fn div_s(df: DataFormat, a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    // The minimum divided by -1 is not representable; the architected
    // result is the minimum unchanged.
    if a == df.min_int() && b == -1 {
        return df.min_int();
    }
    a / b
}

pub(crate) fn div_u(df: DataFormat, a: i64, b: i64) -> i64 {
    let b = df.to_unsigned(b);
    if b == 0 {
        return 0;
    }
    (df.to_unsigned(a) / b) as i64
}

pub(crate) fn mod_s(df: DataFormat, a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    if a == df.min_int() && b == -1 {
        return 0;
    }
    a % b
}

pub(crate) fn mod_u(df: DataFormat, a: i64, b: i64) -> i64 {
    let b = df.to_unsigned(b);
    if b == 0 {
        return 0;
    }
    (df.to_unsigned(a) % b) as i64
}

// ---------------------------------------------------------------------------
// Bit manipulation
// ---------------------------------------------------------------------------

pub(crate) fn bclr(df: DataFormat, a: i64, b: i64) -> i64 {
    (df.to_unsigned(a) & !(1u64 << df.bit_position(b))) as i64
}

pub(crate) fn bset(df: DataFormat, a: i64, b: i64) -> i64 {
    (df.to_unsigned(a) | (1u64 << df.bit_position(b))) as i64
}

pub(crate) fn bneg(df: DataFormat, a: i64, b: i64) -> i64 {
    (df.to_unsigned(a) ^ (1u64 << df.bit_position(b))) as i64
}

/// Insert the top `pos+1` bits of `a` into `dest`, keeping the low bits of
/// `dest`. A split equal to the lane width degenerates to a copy of `a`.
pub(crate) fn binsl(df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    let u_a = df.to_unsigned(a);
    let u_dest = df.to_unsigned(dest);
    let bits = df.bits();
    let mask = df.max_uint();
    let sh_d = df.bit_position(b) + 1;
    if sh_d == bits {
        return u_a as i64;
    }
    let sh_a = bits - sh_d;
    let low = ((u_dest << sh_d) & mask) >> sh_d;
    let high = (u_a >> sh_a) << sh_a;
    (low | high) as i64
}

/// Mirror of `binsl`: the low `pos+1` bits come from `a`.
pub(crate) fn binsr(df: DataFormat, dest: i64, a: i64, b: i64) -> i64 {
    let u_a = df.to_unsigned(a);
    let u_dest = df.to_unsigned(dest);
    let bits = df.bits();
    let mask = df.max_uint();
    let sh_d = df.bit_position(b) + 1;
    if sh_d == bits {
        return u_a as i64;
    }
    let sh_a = bits - sh_d;
    let high = (u_dest >> sh_d) << sh_d;
    let low = ((u_a << sh_a) & mask) >> sh_a;
    (high | low) as i64
}

/// Saturate to an (m+1)-bit signed range, m in 0..width.
pub(crate) fn sat_s(df: DataFormat, a: i64, m: u32) -> i64 {
    if m == df.bits() - 1 {
        return a;
    }
    let max = (1i64 << m) - 1;
    let min = -(1i64 << m);
    a.clamp(min, max)
}

/// Saturate to an (m+1)-bit unsigned range.
pub(crate) fn sat_u(df: DataFormat, a: i64, m: u32) -> i64 {
    let u_a = df.to_unsigned(a);
    if m == df.bits() - 1 {
        return u_a as i64;
    }
    let max = (1u64 << (m + 1)) - 1;
    u_a.min(max) as i64
}

// ---------------------------------------------------------------------------
// Shifts
// ---------------------------------------------------------------------------

pub(crate) fn sll(df: DataFormat, a: i64, b: i64) -> i64 {
    ((a as u64) << df.bit_position(b)) as i64
}

pub(crate) fn sra(df: DataFormat, a: i64, b: i64) -> i64 {
    a >> df.bit_position(b)
}

pub(crate) fn srl(df: DataFormat, a: i64, b: i64) -> i64 {
    (df.to_unsigned(a) >> df.bit_position(b)) as i64
}

/// Rounded arithmetic right shift: adds the bit just below the shifted-out
/// position. Shift by zero returns the operand unchanged.
pub(crate) fn srar(df: DataFormat, a: i64, b: i64) -> i64 {
    let sh = df.bit_position(b);
    if sh == 0 {
        return a;
    }
    (a >> sh) + ((a >> (sh - 1)) & 1)
}

/// Rounded logical right shift.
pub(crate) fn srlr(df: DataFormat, a: i64, b: i64) -> i64 {
    let sh = df.bit_position(b);
    let u_a = df.to_unsigned(a);
    if sh == 0 {
        return u_a as i64;
    }
    ((u_a >> sh) + ((u_a >> (sh - 1)) & 1)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DataFormat::*;

    #[test]
    fn adds_s_clamps() {
        assert_eq!(adds_s(Byte, 127, 1), 127);
        assert_eq!(adds_s(Byte, -128, -1), -128);
        assert_eq!(adds_s(Byte, 100, -50), 50);
        assert_eq!(adds_s(Double, i64::MIN, -1), i64::MIN);
        assert_eq!(adds_s(Double, i64::MAX, 1), i64::MAX);
        assert_eq!(adds_s(Double, i64::MAX, i64::MIN), -1);
    }

    #[test]
    fn subs_s_clamps() {
        assert_eq!(subs_s(Byte, -128, 1), -128);
        assert_eq!(subs_s(Byte, 127, -1), 127);
        assert_eq!(subs_s(Double, i64::MIN, 1), i64::MIN);
        assert_eq!(subs_s(Double, i64::MAX, -1), i64::MAX);
        assert_eq!(subs_s(Half, 5, 10), -5);
    }

    #[test]
    fn cross_domain_saturation() {
        // unsigned - signed, unsigned clamp
        assert_eq!(subsus_u(Byte, 10, -250), 255);
        assert_eq!(subsus_u(Byte, 10, 20), 0);
        assert_eq!(subsus_u(Byte, -1, -1), 255); // 255 - (-1) saturates
        // unsigned - unsigned, signed clamp
        assert_eq!(subsuu_s(Byte, -1, 0), 127); // 255 - 0 clamps to 127
        assert_eq!(subsuu_s(Byte, 0, -1), -128); // 0 - 255 clamps to -128
        assert_eq!(subsuu_s(Byte, 20, 10), 10);
        assert_eq!(subsuu_s(Byte, 10, 20), -10);
    }

    #[test]
    fn magnitude_tie_keeps_first() {
        assert_eq!(max_a(Byte, -5, 5), -5);
        assert_eq!(min_a(Byte, -5, 5), -5);
        assert_eq!(max_a(Byte, 3, -7), -7);
        assert_eq!(min_a(Byte, 3, -7), 3);
    }

    #[test]
    fn average_no_overflow() {
        assert_eq!(ave_s(Double, i64::MAX, i64::MAX), i64::MAX);
        assert_eq!(ave_s(Byte, 7, 8), 7);
        assert_eq!(aver_s(Byte, 7, 8), 8);
        assert_eq!(ave_s(Byte, -7, -8), -8);
        assert_eq!(ave_u(Double, -1, -1), u64::MAX as i64);
    }

    #[test]
    fn division_edges() {
        assert_eq!(div_s(Word, 5, 0), 0);
        assert_eq!(div_u(Word, 5, 0), 0);
        assert_eq!(mod_s(Word, 5, 0), 0);
        assert_eq!(div_s(Word, i32::MIN as i64, -1), i32::MIN as i64);
        assert_eq!(mod_s(Word, i32::MIN as i64, -1), 0);
        assert_eq!(div_s(Double, i64::MIN, -1), i64::MIN);
        assert_eq!(div_s(Word, -7, 2), -3);
        assert_eq!(mod_s(Word, -7, 2), -1);
    }

    #[test]
    fn bit_splice() {
        // binsl.b, split at bit 3+1=4: top 4 bits from a, low 4 from dest
        assert_eq!(binsl(Byte, 0x0F, 0xA0u8 as i8 as i64, 3) & 0xFF, 0xAF);
        // split == width degenerates to a copy of a
        assert_eq!(binsl(Byte, 0x0F, 0x5A, 7) & 0xFF, 0x5A);
        assert_eq!(binsr(Byte, 0x0F, 0x5A, 7) & 0xFF, 0x5A);
        // binsr.b, low 4 bits from a
        assert_eq!(binsr(Byte, 0xF0u8 as i8 as i64, 0x0A, 3) & 0xFF, 0xFA);
    }

    #[test]
    fn rounded_shifts() {
        // word, -5 >> 1 rounded: (-5 >> 1) + bit shifted out = -3 + 1 = -2
        assert_eq!(srar(Word, -5, 1), -2);
        assert_eq!(srar(Word, -5, 0), -5);
        assert_eq!(srlr(Byte, 0x03, 1), 0x02);
        assert_eq!(srlr(Byte, 0x03, 0), 0x03);
    }

    #[test]
    fn dot_product_sublanes() {
        // half lanes: 0x0102 -> even 0x02, odd 0x01
        assert_eq!(dotp_s(Half, 0x0102, 0x0304), 2 * 4 + 3);
        assert_eq!(hadd_s(Half, 0x0102, 0x0304), 1 + 4);
        assert_eq!(hsub_s(Half, 0x0102, 0x0304), 1 - 4);
        // signed high sub-lane: 0xFF02 -> odd = -1
        assert_eq!(hadd_s(Half, 0xFF02u16 as i16 as i64, 0x0004), 3);
        assert_eq!(hadd_u(Half, 0xFF02u16 as i16 as i64, 0x0004), 0xFF + 4);
    }
}
