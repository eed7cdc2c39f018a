use collatz_pab::*;
use num_bigint::BigInt;

fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

fn bigs(ns: &[i64]) -> Vec<BigInt> {
    ns.iter().map(|&n| big(n)).collect()
}

// ===== 即時停止と基本の軌道 =====

#[test]
fn test_immediate_stops() {
    let hail = hailstone_sequence_default(&big(0));
    assert_eq!((hail.values, hail.terminus), (bigs(&[0]), Terminus::ZeroStop(0)));

    let hail = hailstone_sequence_default(&big(1));
    assert_eq!(
        (hail.values, hail.terminus),
        (bigs(&[1]), Terminus::TotalStoppingTime(0))
    );
}

#[test]
fn test_total_and_regular_stopping_of_4() {
    let params = Parameterisation::default();
    let hail = hailstone_sequence(&big(4), &params, 1000, true).unwrap();
    assert_eq!(hail.values, bigs(&[4, 2, 1]));
    assert_eq!(hail.terminus, Terminus::TotalStoppingTime(2));

    let hail = hailstone_sequence(&big(4), &params, 1000, false).unwrap();
    assert_eq!(hail.values, bigs(&[4, 2]));
    assert_eq!(hail.terminus, Terminus::StoppingTime(1));
}

#[test]
fn test_hailstone_well_formedness() {
    // values[0] == 初期値、values[i] == step(values[i-1])
    let params = Parameterisation::default();
    for initial in [3i64, 7, 27, 97, -9, -56] {
        let initial = big(initial);
        let hail = hailstone_sequence(&initial, &params, 1000, true).unwrap();
        assert_eq!(hail.values[0], initial);
        for i in 1..hail.values.len() {
            assert_eq!(
                hail.values[i],
                step(&hail.values[i - 1], &params).unwrap(),
                "initial={}, index={}",
                initial, i
            );
        }
    }
}

#[test]
fn test_famous_trajectories() {
    // 27 の総停止時間は 111、軌道の最大値は 9232
    let hail = hailstone_sequence_default(&big(27));
    assert_eq!(hail.terminus, Terminus::TotalStoppingTime(111));
    assert_eq!(hail.values.len(), 112);
    assert_eq!(hail.values.iter().max(), Some(&big(9232)));

    // 97 の総停止時間は 118
    let hail = hailstone_sequence_default(&big(97));
    assert_eq!(hail.terminus, Terminus::TotalStoppingTime(118));
}

// ===== 既知サイクル =====

#[test]
fn test_known_cycles_are_detected() {
    // 1 を含むサイクルを除き、サイクル中のどの値から始めても
    // CycleLength(サイクル長) で終端し、軌道は初期値から始まる回転に
    // 初期値をもう一度付け足したものになる
    for cycle in &known_cycles()[1..] {
        let len = cycle.len();
        for start in 0..len {
            let initial = &cycle[start];
            let hail = hailstone_sequence_default(initial);
            assert_eq!(
                hail.terminus,
                Terminus::CycleLength(len as u64),
                "cycle {:?} from {}",
                cycle, initial
            );
            let mut expected: Vec<BigInt> =
                (0..len).map(|i| cycle[(start + i) % len].clone()).collect();
            expected.push(initial.clone());
            assert_eq!(hail.values, expected, "cycle {:?} from {}", cycle, initial);
        }
    }
}

#[test]
fn test_cycle_containing_one_is_a_total_stop() {
    // [1, 4, 2] はサイクルだが、1 は総停止として扱われる
    let hail = hailstone_sequence_default(&big(4));
    assert_eq!(hail.terminus, Terminus::TotalStoppingTime(2));
    let hail = hailstone_sequence_default(&big(2));
    assert_eq!(hail.terminus, Terminus::TotalStoppingTime(1));
}

// ===== 0 到達と上限 =====

#[test]
fn test_zero_absorption() {
    // (2, 3, -9): step(3) = 3*3-9 = 0
    let params = Parameterisation::new(2, 3, -9);
    let hail = hailstone_sequence(&big(3), &params, 100, true).unwrap();
    assert_eq!(hail.values, bigs(&[3, 0]));
    assert_eq!(hail.terminus, Terminus::ZeroStop(-1));
    assert_eq!(hail.terminus.status(), -1);
}

#[test]
fn test_max_iterations_and_coercion() {
    let params = Parameterisation::default();

    let hail = hailstone_sequence(&big(27), &params, 10, true).unwrap();
    assert_eq!(hail.terminus, Terminus::MaxStopOutOfBounds(10));
    assert_eq!(hail.values.len(), 11);

    // 上限 0 は 1 に強制される
    let hail = hailstone_sequence(&big(27), &params, 0, true).unwrap();
    assert_eq!(hail.terminus, Terminus::MaxStopOutOfBounds(1));
    assert_eq!(hail.values, bigs(&[27, 82]));
}

// ===== 停止時間射影 =====

#[test]
fn test_stopping_time_projection() {
    // 数値ステータスはそのまま、サイクルは +∞、上限超過は None
    assert_eq!(stopping_time_default(&big(0)), Some(0.0));
    assert_eq!(stopping_time_default(&big(1)), Some(0.0));
    assert_eq!(stopping_time_default(&big(4)), Some(1.0));
    assert_eq!(stopping_time_default(&big(27)), Some(96.0));
    assert_eq!(stopping_time_default(&big(-5)), Some(f64::INFINITY));

    let params = Parameterisation::default();
    assert_eq!(stopping_time(&big(27), &params, 10, true).unwrap(), None);
    assert_eq!(
        stopping_time(&big(27), &params, 1000, true).unwrap(),
        Some(111.0)
    );
}

#[test]
fn test_stopping_time_matches_terminus_tag() {
    // +∞ ⟺ CycleLength、None ⟺ MaxStopOutOfBounds
    let params = Parameterisation::default();
    for initial in -60i64..=60 {
        let initial = big(initial);
        for max_iterations in [1u64, 5, 1000] {
            let hail = hailstone_sequence(&initial, &params, max_iterations, false).unwrap();
            let st = stopping_time(&initial, &params, max_iterations, false).unwrap();
            match hail.terminus {
                Terminus::CycleLength(_) => assert_eq!(st, Some(f64::INFINITY)),
                Terminus::MaxStopOutOfBounds(_) => assert_eq!(st, None),
                _ => assert_eq!(st, Some(hail.terminus.status() as f64)),
            }
        }
    }
}
