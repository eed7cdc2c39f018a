use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::function::apply;
use crate::params::{ParameterError, Parameterisation};

/// 軌道の終端分類。変種ごとに意味の異なるステータス値を持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminus {
    /// 初期値より 0 に近い値（停止時間）に到達した。値は反復回数
    StoppingTime(u64),
    /// 1（総停止時間）に到達した。値は反復回数
    TotalStoppingTime(u64),
    /// 既出の値に再到達してサイクルを形成した。値はサイクル長
    CycleLength(u64),
    /// 0 に到達して停止した。値は反復回数の符号反転（初期値 0 なら 0）
    ZeroStop(i64),
    /// 反復上限に達した。値は（強制された）上限値
    MaxStopOutOfBounds(u64),
}

impl Terminus {
    /// 終端ステータスを符号付き整数に射影する。
    /// 意味は変種ごとに異なる（反復回数 / サイクル長 / 負の反復回数 / 上限値）。
    pub fn status(&self) -> i64 {
        match *self {
            Terminus::StoppingTime(k)
            | Terminus::TotalStoppingTime(k)
            | Terminus::CycleLength(k)
            | Terminus::MaxStopOutOfBounds(k) => k as i64,
            Terminus::ZeroStop(k) => k,
        }
    }
}

/// ヘイルストーン軌道の計算結果。
/// values は初期値で始まり、終端を引き起こした値（上限到達時は最後に
/// 計算された値）で終わる。構築後は不変で、呼び出し側が単独で所有する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HailstoneSequence {
    /// 軌道の値列（先頭は初期値）
    pub values: Vec<BigInt>,
    /// 終端分類
    pub terminus: Terminus,
}

/// 停止判定述語を初期値とモードから一度だけ選択する。
/// total_stop なら 1 への到達、そうでなければ初期値の符号方向で
/// 初期値より 0 に近づいたかどうかを判定する。
fn stopping_time_terminus<'a>(
    initial: &'a BigInt,
    total_stop: bool,
) -> Box<dyn Fn(&BigInt) -> bool + 'a> {
    if total_stop {
        Box::new(|x: &BigInt| x.is_one())
    } else if !initial.is_negative() {
        Box::new(move |x: &BigInt| x < initial && x.is_positive())
    } else {
        Box::new(move |x: &BigInt| x > initial && x.is_negative())
    }
}

/// 初期値から写像を反復し、ヘイルストーン軌道を終端分類付きで返す。
///
/// total_stop が真なら 1 への到達（総停止時間）まで、偽なら初期値より
/// 0 に近い値への到達（停止時間）まで反復する。サイクル検出能力は
/// あるが、"1" は総停止として扱うため 1 を含むサイクルは報告されない。
/// max_iterations は最低 1 に強制される。
pub fn hailstone_sequence(
    initial: &BigInt,
    params: &Parameterisation,
    max_iterations: u64,
    total_stop: bool,
) -> Result<HailstoneSequence, ParameterError> {
    params.validate()?;

    // 0 は常に即時停止
    if initial.is_zero() {
        return Ok(HailstoneSequence {
            values: vec![BigInt::zero()],
            terminus: Terminus::ZeroStop(0),
        });
    }
    // 1 は常に即時停止（停止時間 0）
    if initial.is_one() {
        return Ok(HailstoneSequence {
            values: vec![BigInt::one()],
            terminus: Terminus::TotalStoppingTime(0),
        });
    }

    let terminate = stopping_time_terminus(initial, total_stop);
    let max_iterations = max_iterations.max(1);
    let mut values = vec![initial.clone()];

    for k in 1..=max_iterations {
        let next = apply(values.last().unwrap_or(initial), params);

        // 優先順: 停止 > サイクル > 0 到達 > 続行
        if terminate(&next) {
            let terminus = if next.is_one() {
                Terminus::TotalStoppingTime(k)
            } else {
                Terminus::StoppingTime(k)
            };
            values.push(next);
            return Ok(HailstoneSequence { values, terminus });
        }
        if values.contains(&next) {
            values.push(next.clone());
            // 直近から遡って最初に一致する距離がサイクル長
            let last = values.len() - 1;
            let mut cycle_length = 1u64;
            for j in 1..=last {
                if values[last - j] == next {
                    cycle_length = j as u64;
                    break;
                }
            }
            return Ok(HailstoneSequence {
                values,
                terminus: Terminus::CycleLength(cycle_length),
            });
        }
        if next.is_zero() {
            values.push(next);
            return Ok(HailstoneSequence {
                values,
                terminus: Terminus::ZeroStop(-(k as i64)),
            });
        }
        values.push(next);
    }

    Ok(HailstoneSequence {
        values,
        terminus: Terminus::MaxStopOutOfBounds(max_iterations),
    })
}

/// 標準パラメータ (2, 3, 1)、上限 1000 回、総停止時間モードでの軌道。
pub fn hailstone_sequence_default(initial: &BigInt) -> HailstoneSequence {
    let result = hailstone_sequence(initial, &Parameterisation::default(), 1000, true);
    // 標準パラメータは常に検証を通る
    result.expect("default parameterisation is always valid")
}

/// 停止時間を返す。初期値より 0 に近い値への到達に要した反復回数、
/// total_stop が真なら 1 への到達回数。サイクルで終わる場合は正の無限大、
/// 0 で停止する場合は到達回数の符号反転。上限超過は None
/// （期待される非例外的な結果なのでエラーにはしない）。
pub fn stopping_time(
    initial: &BigInt,
    params: &Parameterisation,
    max_iterations: u64,
    total_stop: bool,
) -> Result<Option<f64>, ParameterError> {
    // 情報は軌道の終端分類にすべて含まれている
    let hail = hailstone_sequence(initial, params, max_iterations, total_stop)?;
    Ok(match hail.terminus {
        Terminus::StoppingTime(k) | Terminus::TotalStoppingTime(k) => Some(k as f64),
        Terminus::ZeroStop(k) => Some(k as f64),
        Terminus::CycleLength(_) => Some(f64::INFINITY),
        Terminus::MaxStopOutOfBounds(_) => None,
    })
}

/// 標準パラメータ (2, 3, 1)、上限 1000 回、停止時間モード。
pub fn stopping_time_default(initial: &BigInt) -> Option<f64> {
    stopping_time(initial, &Parameterisation::default(), 1000, false)
        .expect("default parameterisation is always valid")
}
