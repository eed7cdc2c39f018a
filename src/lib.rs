//! 一般化コラッツ写像 (P, a, b) の探索ライブラリ。
//!
//! Conway 流の一般化と同じ (P, a, b) 記法でパラメータ化された
//! コラッツ型写像 T(n) = n/P (n ≡ 0 mod P) / a*n+b (それ以外) について、
//! 順方向 1 ステップとその（多価になりうる）逆写像、終端分類付きの
//! ヘイルストーン軌道、および深さ制限付きの逆方向（先行値）木を計算する。
//!
//! 値はすべて任意精度整数（BigInt）で扱うため、オーバーフローは
//! 構造的に発生しない。全操作は同期・シングルスレッドで、呼び出し間に
//! 共有可変状態を持たない。

pub mod constants;
pub mod function;
pub mod hailstone;
pub mod params;
pub mod tree;

pub use constants::{known_cycles, verified_maximum, verified_minimum, KNOWN_CYCLES, VERIFIED_MAXIMUM, VERIFIED_MINIMUM};
pub use function::{reverse_step, reverse_step_default, step, step_default};
pub use hailstone::{hailstone_sequence, hailstone_sequence_default, stopping_time, stopping_time_default, HailstoneSequence, Terminus};
pub use params::{ParameterError, Parameterisation};
pub use tree::{tree_graph, tree_graph_default, TreeGraph, TreeGraphNode, TreeState};
