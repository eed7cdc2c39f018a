use num_bigint::BigInt;
use num_traits::Zero;
use thiserror::Error;

/// パラメータ検証エラー。
/// P=0 と a=0 のみが不正であり、どちらも呼び出し側の修正が必要。
/// リトライしても結果は変わらない（入力のみから決定される）。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// P=0: 法（モジュラス）が 0 だと除算枝が定義できない
    #[error("'P' should not be 0 ~ violates modulo being non-zero.")]
    ZeroModulus,
    /// a=0: 乗数が 0 だと逆関数が成立しない
    /// （P の倍数でない全ての値が単一の b に潰れてしまう）
    #[error("'a' should not be 0 ~ violates the reversability.")]
    ZeroMultiplicand,
}

/// 一般化コラッツ写像のパラメータ (P, a, b)。
///
/// T(n) = n/P      (n ≡ 0 mod P)
///      = a*n + b  (それ以外)
///
/// 標準のコラッツ写像は (P, a, b) = (2, 3, 1)。
/// 各呼び出しに独立に渡される不変値であり、共有可変状態は持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameterisation {
    /// 法 P。n が (0 mod P) のとき n を P で割る
    pub p: BigInt,
    /// 乗数 a
    pub a: BigInt,
    /// 乗算後に加える値 b
    pub b: BigInt,
}

impl Default for Parameterisation {
    /// 標準パラメータ (2, 3, 1)
    fn default() -> Self {
        Parameterisation::new(2, 3, 1)
    }
}

impl Parameterisation {
    pub fn new(p: impl Into<BigInt>, a: impl Into<BigInt>, b: impl Into<BigInt>) -> Self {
        Parameterisation { p: p.into(), a: a.into(), b: b.into() }
    }

    /// (P, a, b) の健全性検査。
    /// P は絶対に 0 であってはならない。a も理論上は 0 を許せるが、
    /// 逆関数の成立を壊すため拒否する。b=0 や P ∈ {1, -1} は退化的な
    /// 1〜2 長サイクルを生むだけで、不正な演算ではないので許容する。
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.p.is_zero() {
            return Err(ParameterError::ZeroModulus);
        }
        if self.a.is_zero() {
            return Err(ParameterError::ZeroMultiplicand);
        }
        Ok(())
    }
}
