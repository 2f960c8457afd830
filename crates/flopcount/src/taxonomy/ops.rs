//! The opcode table.
//!
//! Each row is `Variant = "RawName": width, lanes, category`. Raw names are
//! the IR operation names submitted by the instrumentation driver. `F0xN`
//! forms only touch the lowest lane and are listed with one lane.

use super::{BitWidth, Category, OpcodeDescriptor};

macro_rules! fp_ops {
    ($( $variant:ident = $raw:literal : $width:ident, $lanes:literal, $cat:ident; )*) => {
        /// A recognized floating-point IR operation
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FpOp {
            $(
                #[doc = $raw]
                $variant,
            )*
        }

        impl FpOp {
            /// Every recognized operation, in table order
            pub const ALL: &'static [FpOp] = &[$(FpOp::$variant,)*];

            /// IR name of the operation
            #[must_use]
            pub const fn raw_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $raw,)*
                }
            }

            /// Width, lanes and category
            #[must_use]
            pub const fn descriptor(self) -> OpcodeDescriptor {
                match self {
                    $(Self::$variant => OpcodeDescriptor {
                        bit_width: BitWidth::$width,
                        lanes: $lanes,
                        category: Category::$cat,
                    },)*
                }
            }
        }
    };
}

fp_ops! {
    // binary32, scalar
    NegF32 = "NegF32": B32, 1, Negate;
    AbsF32 = "AbsF32": B32, 1, Abs;
    AddF32 = "AddF32": B32, 1, Add;
    SubF32 = "SubF32": B32, 1, Sub;
    MulF32 = "MulF32": B32, 1, Mul;
    DivF32 = "DivF32": B32, 1, Div;
    MAddF32 = "MAddF32": B32, 1, Fma;
    MSubF32 = "MSubF32": B32, 1, Fms;
    CmpF32 = "CmpF32": B32, 1, Compare;
    SqrtF32 = "SqrtF32": B32, 1, Intrinsic;
    RecpExpF32 = "RecpExpF32": B32, 1, Intrinsic;

    // binary32, lowest lane of 4
    Add32F0x4 = "Add32F0x4": B32, 1, Add;
    Sub32F0x4 = "Sub32F0x4": B32, 1, Sub;
    Mul32F0x4 = "Mul32F0x4": B32, 1, Mul;
    Div32F0x4 = "Div32F0x4": B32, 1, Div;
    CmpEQ32F0x4 = "CmpEQ32F0x4": B32, 1, Compare;
    CmpLT32F0x4 = "CmpLT32F0x4": B32, 1, Compare;
    CmpLE32F0x4 = "CmpLE32F0x4": B32, 1, Compare;
    CmpUN32F0x4 = "CmpUN32F0x4": B32, 1, Compare;
    RecipEst32F0x4 = "RecipEst32F0x4": B32, 1, Intrinsic;
    Sqrt32F0x4 = "Sqrt32F0x4": B32, 1, Intrinsic;
    RSqrtEst32F0x4 = "RSqrtEst32F0x4": B32, 1, Intrinsic;

    // binary32 x2
    Neg32Fx2 = "Neg32Fx2": B32, 2, Negate;
    Abs32Fx2 = "Abs32Fx2": B32, 2, Abs;
    Add32Fx2 = "Add32Fx2": B32, 2, Add;
    Sub32Fx2 = "Sub32Fx2": B32, 2, Sub;
    Mul32Fx2 = "Mul32Fx2": B32, 2, Mul;
    CmpEQ32Fx2 = "CmpEQ32Fx2": B32, 2, Compare;
    CmpGT32Fx2 = "CmpGT32Fx2": B32, 2, Compare;
    CmpGE32Fx2 = "CmpGE32Fx2": B32, 2, Compare;
    RecipEst32Fx2 = "RecipEst32Fx2": B32, 2, Intrinsic;
    RecipStep32Fx2 = "RecipStep32Fx2": B32, 2, Intrinsic;
    RSqrtEst32Fx2 = "RSqrtEst32Fx2": B32, 2, Intrinsic;
    RSqrtStep32Fx2 = "RSqrtStep32Fx2": B32, 2, Intrinsic;

    // binary32 x4
    Neg32Fx4 = "Neg32Fx4": B32, 4, Negate;
    Abs32Fx4 = "Abs32Fx4": B32, 4, Abs;
    Add32Fx4 = "Add32Fx4": B32, 4, Add;
    Sub32Fx4 = "Sub32Fx4": B32, 4, Sub;
    Mul32Fx4 = "Mul32Fx4": B32, 4, Mul;
    Div32Fx4 = "Div32Fx4": B32, 4, Div;
    CmpEQ32Fx4 = "CmpEQ32Fx4": B32, 4, Compare;
    CmpLT32Fx4 = "CmpLT32Fx4": B32, 4, Compare;
    CmpLE32Fx4 = "CmpLE32Fx4": B32, 4, Compare;
    CmpUN32Fx4 = "CmpUN32Fx4": B32, 4, Compare;
    CmpGT32Fx4 = "CmpGT32Fx4": B32, 4, Compare;
    CmpGE32Fx4 = "CmpGE32Fx4": B32, 4, Compare;
    Sqrt32Fx4 = "Sqrt32Fx4": B32, 4, Intrinsic;
    RecipEst32Fx4 = "RecipEst32Fx4": B32, 4, Intrinsic;
    RecipStep32Fx4 = "RecipStep32Fx4": B32, 4, Intrinsic;
    RSqrtEst32Fx4 = "RSqrtEst32Fx4": B32, 4, Intrinsic;
    RSqrtStep32Fx4 = "RSqrtStep32Fx4": B32, 4, Intrinsic;
    Scale2_32Fx4 = "Scale2_32Fx4": B32, 4, Intrinsic;
    Log2_32Fx4 = "Log2_32Fx4": B32, 4, Intrinsic;
    Exp2_32Fx4 = "Exp2_32Fx4": B32, 4, Intrinsic;

    // binary32 x8
    Add32Fx8 = "Add32Fx8": B32, 8, Add;
    Sub32Fx8 = "Sub32Fx8": B32, 8, Sub;
    Mul32Fx8 = "Mul32Fx8": B32, 8, Mul;
    Div32Fx8 = "Div32Fx8": B32, 8, Div;
    Sqrt32Fx8 = "Sqrt32Fx8": B32, 8, Intrinsic;
    RSqrtEst32Fx8 = "RSqrtEst32Fx8": B32, 8, Intrinsic;
    RecipEst32Fx8 = "RecipEst32Fx8": B32, 8, Intrinsic;

    // binary64, scalar
    NegF64 = "NegF64": B64, 1, Negate;
    AbsF64 = "AbsF64": B64, 1, Abs;
    AddF64 = "AddF64": B64, 1, Add;
    SubF64 = "SubF64": B64, 1, Sub;
    MulF64 = "MulF64": B64, 1, Mul;
    DivF64 = "DivF64": B64, 1, Div;
    AddF64r32 = "AddF64r32": B64, 1, Add;
    SubF64r32 = "SubF64r32": B64, 1, Sub;
    MulF64r32 = "MulF64r32": B64, 1, Mul;
    DivF64r32 = "DivF64r32": B64, 1, Div;
    MAddF64 = "MAddF64": B64, 1, Fma;
    MSubF64 = "MSubF64": B64, 1, Fms;
    MAddF64r32 = "MAddF64r32": B64, 1, Fma;
    MSubF64r32 = "MSubF64r32": B64, 1, Fms;
    CmpF64 = "CmpF64": B64, 1, Compare;
    SqrtF64 = "SqrtF64": B64, 1, Intrinsic;
    AtanF64 = "AtanF64": B64, 1, Intrinsic;
    Yl2xF64 = "Yl2xF64": B64, 1, Intrinsic;
    Yl2xp1F64 = "Yl2xp1F64": B64, 1, Intrinsic;
    PRemF64 = "PRemF64": B64, 1, Intrinsic;
    PRemC3210F64 = "PRemC3210F64": B64, 1, Intrinsic;
    PRem1F64 = "PRem1F64": B64, 1, Intrinsic;
    PRem1C3210F64 = "PRem1C3210F64": B64, 1, Intrinsic;
    ScaleF64 = "ScaleF64": B64, 1, Intrinsic;
    SinF64 = "SinF64": B64, 1, Intrinsic;
    CosF64 = "CosF64": B64, 1, Intrinsic;
    TanF64 = "TanF64": B64, 1, Intrinsic;
    TwoXm1F64 = "2xm1F64": B64, 1, Intrinsic;
    RSqrtEst5GoodF64 = "RSqrtEst5GoodF64": B64, 1, Intrinsic;
    RecpExpF64 = "RecpExpF64": B64, 1, Intrinsic;

    // binary64, lowest lane of 2
    Add64F0x2 = "Add64F0x2": B64, 1, Add;
    Sub64F0x2 = "Sub64F0x2": B64, 1, Sub;
    Mul64F0x2 = "Mul64F0x2": B64, 1, Mul;
    Div64F0x2 = "Div64F0x2": B64, 1, Div;
    CmpEQ64F0x2 = "CmpEQ64F0x2": B64, 1, Compare;
    CmpLT64F0x2 = "CmpLT64F0x2": B64, 1, Compare;
    CmpLE64F0x2 = "CmpLE64F0x2": B64, 1, Compare;
    CmpUN64F0x2 = "CmpUN64F0x2": B64, 1, Compare;
    Sqrt64F0x2 = "Sqrt64F0x2": B64, 1, Intrinsic;

    // binary64 x2
    Neg64Fx2 = "Neg64Fx2": B64, 2, Negate;
    Abs64Fx2 = "Abs64Fx2": B64, 2, Abs;
    Add64Fx2 = "Add64Fx2": B64, 2, Add;
    Sub64Fx2 = "Sub64Fx2": B64, 2, Sub;
    Mul64Fx2 = "Mul64Fx2": B64, 2, Mul;
    Div64Fx2 = "Div64Fx2": B64, 2, Div;
    CmpEQ64Fx2 = "CmpEQ64Fx2": B64, 2, Compare;
    CmpLT64Fx2 = "CmpLT64Fx2": B64, 2, Compare;
    CmpLE64Fx2 = "CmpLE64Fx2": B64, 2, Compare;
    CmpUN64Fx2 = "CmpUN64Fx2": B64, 2, Compare;
    Sqrt64Fx2 = "Sqrt64Fx2": B64, 2, Intrinsic;
    Scale2_64Fx2 = "Scale2_64Fx2": B64, 2, Intrinsic;
    Log2_64Fx2 = "Log2_64Fx2": B64, 2, Intrinsic;
    RecipEst64Fx2 = "RecipEst64Fx2": B64, 2, Intrinsic;
    RecipStep64Fx2 = "RecipStep64Fx2": B64, 2, Intrinsic;
    RSqrtEst64Fx2 = "RSqrtEst64Fx2": B64, 2, Intrinsic;
    RSqrtStep64Fx2 = "RSqrtStep64Fx2": B64, 2, Intrinsic;

    // binary64 x4
    Add64Fx4 = "Add64Fx4": B64, 4, Add;
    Sub64Fx4 = "Sub64Fx4": B64, 4, Sub;
    Mul64Fx4 = "Mul64Fx4": B64, 4, Mul;
    Div64Fx4 = "Div64Fx4": B64, 4, Div;
    Sqrt64Fx4 = "Sqrt64Fx4": B64, 4, Intrinsic;
}
