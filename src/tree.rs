use std::collections::HashMap;

use num_bigint::BigInt;

use crate::function::reverse;
use crate::params::{ParameterError, Parameterisation};

/// 逆方向木ノードの終端状態。
/// 内部ノードは状態を持たない（None）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    /// この値が木の別の場所で再登場し、サイクルの起点と判明した。
    /// 再登場側の発見時に遡って付与される
    CycleStart,
    /// 既出の値への再到達。サイクルの終端
    CycleEnd,
    /// 最大軌道距離に達した
    MaxDepthReached,
}

/// 逆方向（先行値）木のノード。
/// 子は高々 2 つ: 除算枝の先行値 P*n と、存在する場合の乗算枝の
/// 先行値 (n-b)/a。各ノードは子を排他的に所有する（木であり DAG でない）。
///
/// 派生 PartialEq は値・終端状態・子を再帰的に比較する全木等価。
/// サイクル検出に使う等価は値のみ（構築中の seen マップのキー比較）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeGraphNode {
    /// このノードの値
    pub value: BigInt,
    /// 終端状態。内部ノードでは None
    pub state: Option<TreeState>,
    /// 除算枝の子 (P*n)。終端ノードでなければ常に存在する
    pub pre_div: Option<Box<TreeGraphNode>>,
    /// 乗算枝の子 ((n-b)/a)。存在し、かつ終端ノードでない場合のみ
    pub pre_mul: Option<Box<TreeGraphNode>>,
}

impl TreeGraphNode {
    /// 期待する木をテストなどで手組みするための直接コンストラクタ。
    pub fn new(
        value: impl Into<BigInt>,
        state: Option<TreeState>,
        pre_div: Option<TreeGraphNode>,
        pre_mul: Option<TreeGraphNode>,
    ) -> Self {
        TreeGraphNode {
            value: value.into(),
            state,
            pre_div: pre_div.map(Box::new),
            pre_mul: pre_mul.map(Box::new),
        }
    }
}

/// 逆方向木の計算結果。根ノードを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeGraph {
    pub root: TreeGraphNode,
}

/// 構築中の中間表現。子はアリーナ添字で参照し、遡及的な
/// CycleStart の付与を添字更新として安全に行う。
#[derive(Debug)]
struct ArenaNode {
    value: BigInt,
    state: Option<TreeState>,
    pre_div: Option<usize>,
    pre_mul: Option<usize>,
}

/// 親ノードのどちらの枝に繋ぐか
#[derive(Debug, Clone, Copy)]
enum Branch {
    PreDiv,
    PreMul,
}

/// 未訪問ノードの作業項目
struct Pending {
    value: BigInt,
    remaining: u64,
    parent: Option<(usize, Branch)>,
}

/// 根から先行値の木を深さ優先・先行順で構築する。
/// seen マップは木 1 本の構築全体で共有され（パス単位ではない）、
/// 再帰の代わりに明示的な作業スタックで深さを max_orbit_distance に
/// 制限する。ノード生成順は親が常に子より先（先行順）。
fn build(root_value: BigInt, max_orbit_distance: u64, params: &Parameterisation) -> TreeGraphNode {
    let mut arena: Vec<ArenaNode> = Vec::new();
    let mut seen: HashMap<BigInt, usize> = HashMap::new();
    let mut stack = vec![Pending {
        value: root_value,
        remaining: max_orbit_distance,
        parent: None,
    }];

    while let Some(task) = stack.pop() {
        let idx = arena.len();
        arena.push(ArenaNode {
            value: task.value.clone(),
            state: None,
            pre_div: None,
            pre_mul: None,
        });
        if let Some((parent, branch)) = task.parent {
            match branch {
                Branch::PreDiv => arena[parent].pre_div = Some(idx),
                Branch::PreMul => arena[parent].pre_mul = Some(idx),
            }
        }

        // 既出の値への再到達が深さ切れより優先される
        if let Some(&origin) = seen.get(&task.value) {
            // サイクルの成立は再到達側からしか確認できないので、
            // 起点側のノードをここで遡って CycleStart に付け替える
            arena[origin].state = Some(TreeState::CycleStart);
            arena[idx].state = Some(TreeState::CycleEnd);
            continue;
        }
        if task.remaining == 0 {
            arena[idx].state = Some(TreeState::MaxDepthReached);
            continue;
        }

        seen.insert(task.value.clone(), idx);
        let reverses = reverse(&task.value, params);
        // LIFO スタックなので乗算枝を先に積み、除算枝の部分木を
        // 完全に辿り終えてから乗算枝に移る
        if reverses.len() == 2 {
            stack.push(Pending {
                value: reverses[1].clone(),
                remaining: task.remaining - 1,
                parent: Some((idx, Branch::PreMul)),
            });
        }
        stack.push(Pending {
            value: reverses[0].clone(),
            remaining: task.remaining - 1,
            parent: Some((idx, Branch::PreDiv)),
        });
    }

    // 子の添字は常に親より大きいので、末尾から所有権付きの木に畳み込む
    let mut built: Vec<Option<TreeGraphNode>> = (0..arena.len()).map(|_| None).collect();
    while let Some(node) = arena.pop() {
        let idx = arena.len();
        built[idx] = Some(TreeGraphNode {
            value: node.value,
            state: node.state,
            pre_div: node
                .pre_div
                .map(|child| Box::new(built[child].take().expect("child folded before parent"))),
            pre_mul: node
                .pre_mul
                .map(|child| Box::new(built[child].take().expect("child folded before parent"))),
        });
    }
    built[0].take().expect("root node")
}

/// 根の値から逆写像を max_orbit_distance 段まで反復し、有向木を返す。
/// 逆方向の木には（順方向の停止時間のような）自然な終端が存在しない
/// ため、深さの上限は省略できない必須引数となる。
pub fn tree_graph(
    root: &BigInt,
    max_orbit_distance: u64,
    params: &Parameterisation,
) -> Result<TreeGraph, ParameterError> {
    params.validate()?;
    Ok(TreeGraph {
        root: build(root.clone(), max_orbit_distance, params),
    })
}

/// 標準パラメータ (2, 3, 1) での逆方向木。
pub fn tree_graph_default(root: &BigInt, max_orbit_distance: u64) -> TreeGraph {
    tree_graph(root, max_orbit_distance, &Parameterisation::default())
        .expect("default parameterisation is always valid")
}
