//! Floating-point opcode taxonomy.
//!
//! Every recognized operation maps to a bit width, a lane count and a
//! category. Only the arithmetic categories are countable; compares and
//! intrinsics are known so that they can be named, never counted.

mod ops;

pub use ops::FpOp;

use crate::result::FlopError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Label used for operations outside the taxonomy
pub const UNKNOWN_LABEL: &str = "unknown";

/// Operand precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BitWidth {
    /// binary32
    B32,
    /// binary64
    B64,
}

impl BitWidth {
    /// Number of bits
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::B32 => 32,
            Self::B64 => 64,
        }
    }

    /// Type part of a label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::B32 => "b32",
            Self::B64 => "b64",
        }
    }
}

/// What an operation computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Negation
    Negate,
    /// Absolute value
    Abs,
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Mul,
    /// Division
    Div,
    /// Fused multiply-add
    Fma,
    /// Fused multiply-subtract
    Fms,
    /// Comparison
    Compare,
    /// Square root, estimates, transcendental and scaling operations
    Intrinsic,
}

impl Category {
    /// Check whether operations of this category are counted
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        !matches!(self, Self::Compare | Self::Intrinsic)
    }

    /// Operation part of a label; FMA and FMS share `fma`
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "neg",
            Self::Abs => "abs",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Fma | Self::Fms => "fma",
            Self::Compare => "cmp",
            Self::Intrinsic => "intrinsic",
        }
    }
}

/// Classification of one opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OpcodeDescriptor {
    /// Operand precision
    pub bit_width: BitWidth,
    /// Lanes touched: 1 for scalar and lowest-lane-only forms
    pub lanes: u8,
    /// Operation category
    pub category: Category,
}

impl FpOp {
    /// Look up an operation by IR name
    #[must_use]
    pub fn lookup(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.raw_name() == raw)
    }

    /// Check whether this operation is counted
    #[inline]
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        self.descriptor().category.is_arithmetic()
    }

    /// Number of lanes the operation touches
    #[inline]
    #[must_use]
    pub const fn lane_count(self) -> u8 {
        self.descriptor().lanes
    }

    /// Counter increment for one execution of this operation
    ///
    /// # Panics
    ///
    /// Panics when the operation is not arithmetic. Callers must check
    /// [`FpOp::is_arithmetic`] first.
    #[must_use]
    pub fn size_of(self) -> u64 {
        assert!(
            self.is_arithmetic(),
            "size requested for non-arithmetic opcode {}",
            self.raw_name()
        );
        u64::from(self.lane_count())
    }

    /// Diagnostic label, e.g. `b32addx4`
    #[must_use]
    pub fn label(self) -> String {
        let d = self.descriptor();
        format!(
            "{}{}x{}",
            d.bit_width.label(),
            d.category.symbol(),
            d.lanes
        )
    }
}

impl fmt::Display for FpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_name())
    }
}

impl FromStr for FpOp {
    type Err = FlopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| FlopError::UnknownOpcode {
            name: s.to_string(),
        })
    }
}

/// Label for a raw IR name, [`UNKNOWN_LABEL`] when it is not in the table
#[must_use]
pub fn label_of(raw: &str) -> String {
    match FpOp::lookup(raw) {
        Some(op) => op.label(),
        None => {
            tracing::warn!(opcode = raw, "no label for unrecognized opcode");
            UNKNOWN_LABEL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_scalar_b32_add() {
        let op = FpOp::AddF32;
        assert!(op.is_arithmetic());
        assert_eq!(op.size_of(), 1);
        assert_eq!(op.label(), "b32addx1");
    }

    #[test]
    fn test_vector_b32_add() {
        let op = FpOp::Add32Fx4;
        assert!(op.is_arithmetic());
        assert_eq!(op.size_of(), 4);
        assert_eq!(op.label(), "b32addx4");
    }

    #[test]
    fn test_eight_lanes() {
        assert_eq!(FpOp::Mul32Fx8.size_of(), 8);
        assert_eq!(FpOp::Div32Fx8.label(), "b32divx8");
    }

    #[test]
    fn test_lowest_lane_only_counts_one() {
        assert_eq!(FpOp::Add32F0x4.size_of(), 1);
        assert_eq!(FpOp::Div64F0x2.size_of(), 1);
        assert_eq!(FpOp::Mul64F0x2.label(), "b64mulx1");
    }

    #[test]
    fn test_compares_are_not_arithmetic() {
        let compares: Vec<FpOp> = FpOp::ALL
            .iter()
            .copied()
            .filter(|op| op.raw_name().starts_with("Cmp"))
            .collect();
        assert!(!compares.is_empty());
        for op in compares {
            assert!(!op.is_arithmetic(), "{op}");
            assert_eq!(op.descriptor().category, Category::Compare);
        }
    }

    #[test]
    fn test_sqrt_is_intrinsic() {
        assert!(!FpOp::SqrtF64.is_arithmetic());
        assert_eq!(FpOp::SqrtF64.descriptor().category, Category::Intrinsic);
    }

    #[test]
    #[should_panic(expected = "non-arithmetic opcode SqrtF64")]
    fn test_size_of_intrinsic_panics() {
        let _ = FpOp::SqrtF64.size_of();
    }

    #[test]
    #[should_panic(expected = "non-arithmetic opcode CmpF32")]
    fn test_size_of_compare_panics() {
        let _ = FpOp::CmpF32.size_of();
    }

    #[test]
    fn test_fused_ops() {
        assert_eq!(FpOp::MAddF64.label(), "b64fmax1");
        assert_eq!(FpOp::MSubF32.label(), "b32fmax1");
        assert_eq!(FpOp::MSubF64r32.descriptor().category, Category::Fms);
        assert!(FpOp::MSubF64r32.is_arithmetic());
    }

    #[test]
    fn test_negate_and_abs_are_counted() {
        assert_eq!(FpOp::Neg32Fx4.size_of(), 4);
        assert_eq!(FpOp::Abs64Fx2.label(), "b64absx2");
    }

    #[test]
    fn test_raw_names_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for &op in FpOp::ALL {
            assert!(seen.insert(op.raw_name()), "duplicate {}", op.raw_name());
            assert_eq!(op.raw_name().parse::<FpOp>().unwrap(), op);
        }
    }

    #[test]
    fn test_lane_counts_are_valid() {
        for &op in FpOp::ALL {
            assert!(matches!(op.lane_count(), 1 | 2 | 4 | 8), "{op}");
        }
    }

    #[test]
    fn test_label_agrees_with_arithmetic_flag() {
        for &op in FpOp::ALL {
            let label = op.label();
            let d = op.descriptor();
            assert!(label.starts_with(d.bit_width.label()));
            assert!(label.ends_with(&format!("x{}", d.lanes)));
            let non_arith = label.contains("cmp") || label.contains("intrinsic");
            assert_eq!(op.is_arithmetic(), !non_arith, "{op}");
        }
    }

    #[test]
    fn test_name_conventions_match_width() {
        for &op in FpOp::ALL {
            let name = op.raw_name();
            let expected = if name.contains("64") {
                BitWidth::B64
            } else {
                BitWidth::B32
            };
            assert_eq!(op.descriptor().bit_width, expected, "{name}");
        }
    }

    #[test]
    fn test_unknown_opcode() {
        assert!(FpOp::lookup("Add32").is_none());
        assert!("Add8x16".parse::<FpOp>().is_err());
        assert_eq!(label_of("Add8x16"), UNKNOWN_LABEL);
        assert_eq!(label_of("Sub64Fx4"), "b64subx4");
    }

    #[test]
    fn test_special_raw_name() {
        assert_eq!(FpOp::TwoXm1F64.raw_name(), "2xm1F64");
        assert_eq!(FpOp::lookup("2xm1F64"), Some(FpOp::TwoXm1F64));
    }
}
