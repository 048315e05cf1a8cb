/// Quantized fixed-point sine table
use crate::fixed;

/// Sine values over `period` quantized angles, scaled to `[-unit, unit]`.
///
/// Angles wrap modulo the period. There is no interpolation between entries;
/// the stepping is part of the look.
#[derive(Debug, Clone)]
pub struct TrigTable {
    period: u32,
    frac_bits: u32,
    table: Vec<i32>,
}

impl TrigTable {
    /// Build the table from `f64::sin`. `period` must be a power of two of at
    /// least 4; [`RenderConfig::validate`](crate::RenderConfig::validate)
    /// checks this before a table is ever built.
    pub fn new(period: u32, frac_bits: u32) -> Self {
        debug_assert!(period.is_power_of_two() && period >= 4);

        let unit = fixed::unit(frac_bits) as f64;
        let quarter_len = (period / 4) as usize;
        let half_len = (period / 2) as usize;

        // One quarter wave, mirrored and negated for the rest. This keeps
        // sin(a + N/2) == -sin(a) exact regardless of float rounding.
        let quarter: Vec<i32> = (0..=quarter_len)
            .map(|k| {
                let radians = k as f64 * std::f64::consts::TAU / period as f64;
                (unit * radians.sin()).round() as i32
            })
            .collect();

        let table = (0..period as usize)
            .map(|i| {
                let q = i % half_len;
                let v = if q <= quarter_len {
                    quarter[q]
                } else {
                    quarter[half_len - q]
                };
                if i >= half_len {
                    -v
                } else {
                    v
                }
            })
            .collect();

        Self {
            period,
            frac_bits,
            table,
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn frac_bits(&self) -> u32 {
        self.frac_bits
    }

    pub fn unit(&self) -> i32 {
        fixed::unit(self.frac_bits)
    }

    /// Raw table lookup, angle taken modulo the period.
    #[inline]
    pub fn lookup(&self, angle: u32) -> i32 {
        self.table[(angle & (self.period - 1)) as usize]
    }

    #[inline]
    pub fn sin(&self, angle: u32) -> i32 {
        self.lookup(angle)
    }

    /// Cosine as the sine a quarter turn ahead.
    #[inline]
    pub fn cos(&self, angle: u32) -> i32 {
        self.lookup(angle.wrapping_add(self.period / 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configurations() -> [TrigTable; 2] {
        [TrigTable::new(256, 8), TrigTable::new(4096, 12)]
    }

    #[test]
    fn test_cardinal_angles() {
        for trig in configurations() {
            let n = trig.period();
            let unit = trig.unit();
            assert_eq!(trig.sin(0), 0);
            assert_eq!(trig.sin(n / 4), unit);
            assert_eq!(trig.sin(n / 2), 0);
            assert_eq!(trig.sin(3 * n / 4), -unit);
            assert_eq!(trig.cos(0), unit);
            assert_eq!(trig.cos(n / 2), -unit);
        }
    }

    #[test]
    fn test_half_turn_negates() {
        for trig in configurations() {
            let n = trig.period();
            for angle in 0..n {
                assert_eq!(trig.lookup(angle + n / 2), -trig.lookup(angle), "angle {angle}");
            }
        }
    }

    #[test]
    fn test_unit_circle_within_one_step() {
        for trig in configurations() {
            let unit = trig.unit() as i64;
            let low = (unit - 1) * (unit - 1);
            let high = (unit + 1) * (unit + 1);
            for angle in 0..trig.period() {
                let s = trig.sin(angle) as i64;
                let c = trig.cos(angle) as i64;
                let r2 = s * s + c * c;
                assert!(low <= r2 && r2 <= high, "angle {angle}: {s}^2 + {c}^2 = {r2}");
            }
        }
    }

    #[test]
    fn test_angles_wrap() {
        let trig = TrigTable::new(256, 8);
        assert_eq!(trig.lookup(300), trig.lookup(44));
        assert_eq!(trig.cos(255), trig.sin(63));
        assert_eq!(trig.cos(u32::MAX), trig.lookup(63));
    }

    #[test]
    fn test_third_quadrant_is_negative() {
        let trig = TrigTable::new(256, 8);
        for angle in 129..192 {
            assert!(trig.sin(angle) < 0, "angle {angle}");
        }
    }
}
