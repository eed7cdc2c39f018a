use num_bigint::BigInt;

/// 標準パラメータ (2, 3, 1) で知られている 4 つのサイクル。
/// テストの参照データであり、コア算法の実行時には使われない。
pub const KNOWN_CYCLES: [&[i64]; 4] = [
    &[1, 4, 2],
    &[-1, -2],
    &[-5, -14, -7, -20, -10],
    &[
        -17, -50, -25, -74, -37, -110, -55, -164, -82, -41, -122, -61, -182, -91, -272, -136,
        -68, -34,
    ],
];

/// 標準パラメータで予想が検証済みの上限値。情報提供のみで強制はしない
pub const VERIFIED_MAXIMUM: u128 = 295_147_905_179_352_825_856;

/// 標準パラメータで予想が検証済みの下限値。情報提供のみで強制はしない
pub const VERIFIED_MINIMUM: i64 = -272;

/// 既知サイクルを BigInt の列として返す
pub fn known_cycles() -> Vec<Vec<BigInt>> {
    KNOWN_CYCLES
        .iter()
        .map(|cycle| cycle.iter().map(|&v| BigInt::from(v)).collect())
        .collect()
}

/// 検証済み上限を BigInt で返す
pub fn verified_maximum() -> BigInt {
    BigInt::from(VERIFIED_MAXIMUM)
}

/// 検証済み下限を BigInt で返す
pub fn verified_minimum() -> BigInt {
    BigInt::from(VERIFIED_MINIMUM)
}
