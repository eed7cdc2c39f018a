use num_bigint::BigInt;
use num_integer::Integer;

use crate::params::{ParameterError, Parameterisation};

/// 検証済みパラメータに対する順方向 1 ステップ。
/// 剰余判定は「P の倍数かどうか」の符号非依存な述語のみを使う。
/// (0 mod P) の判定にしか剰余を使わないので、floor 剰余か truncate
/// 剰余かの違いは結果に影響しない。除算は常に割り切れる。
pub(crate) fn apply(n: &BigInt, params: &Parameterisation) -> BigInt {
    if n.is_multiple_of(&params.p) {
        n / &params.p
    } else {
        n * &params.a + &params.b
    }
}

/// 検証済みパラメータに対する逆方向 1 ステップ。
/// 除算枝から来る先行値 P*n は常に存在する。乗算枝から来る先行値
/// (n-b)/a は、割り切れて、かつその値が順方向で除算枝に入らない
/// （(n-b) が P*a の倍数でない）場合にのみ存在する。後者の条件を
/// 外すと step(m) == n が成り立たない偽の先行値を報告してしまう。
/// 返却順は決定的: 除算枝の値が先、乗算枝の値が後。
pub(crate) fn reverse(n: &BigInt, params: &Parameterisation) -> Vec<BigInt> {
    let n_minus_b = n - &params.b;
    let pa = &params.p * &params.a;
    if n_minus_b.is_multiple_of(&params.a) && !n_minus_b.is_multiple_of(&pa) {
        vec![&params.p * n, n_minus_b / &params.a]
    } else {
        vec![&params.p * n]
    }
}

/// コラッツ型写像の 1 ステップを計算する。
/// n が (0 mod P) なら n/P、それ以外なら a*n+b を返す。
pub fn step(n: &BigInt, params: &Parameterisation) -> Result<BigInt, ParameterError> {
    params.validate()?;
    Ok(apply(n, params))
}

/// 標準パラメータ (2, 3, 1) での 1 ステップ。
pub fn step_default(n: &BigInt) -> BigInt {
    apply(n, &Parameterisation::default())
}

/// 逆写像を計算し、n に写る 1 個または 2 個の先行値を返す。
/// 1 個なら P で割られて n になる値のみ。2 個なら先頭が P で割られて
/// n になる値、2 番目が乗算・加算を経て n になる値（大小に関わらず）。
pub fn reverse_step(n: &BigInt, params: &Parameterisation) -> Result<Vec<BigInt>, ParameterError> {
    params.validate()?;
    Ok(reverse(n, params))
}

/// 標準パラメータ (2, 3, 1) での逆写像。
pub fn reverse_step_default(n: &BigInt) -> Vec<BigInt> {
    reverse(n, &Parameterisation::default())
}
