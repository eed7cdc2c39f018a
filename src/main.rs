use collatz_pab::*;
use num_bigint::BigInt;
use std::env;
use std::process::exit;
use std::str::FromStr;

fn print_usage() {
    eprintln!("一般化コラッツ写像 (P,a,b) 探索ツール");
    eprintln!();
    eprintln!("使い方:");
    eprintln!("  collatz-pab step <n> [P a b]           順方向 1 ステップ");
    eprintln!("  collatz-pab reverse <n> [P a b]        逆方向の先行値 (1 個または 2 個)");
    eprintln!("  collatz-pab hailstone <n> [P a b]      ヘイルストーン軌道 (最大 1000 ステップ)");
    eprintln!("  collatz-pab stop <n> [P a b]           停止時間");
    eprintln!("  collatz-pab tree <n> <depth> [P a b]   逆方向の先行値木");
    eprintln!();
    eprintln!("P a b を省略すると標準パラメータ (2, 3, 1) を使う。");
    eprintln!();
    eprintln!("例:");
    eprintln!("  collatz-pab step 27              3*27+1 の 1 ステップ");
    eprintln!("  collatz-pab hailstone 27         27 から 1 までの軌道");
    eprintln!("  collatz-pab tree 4 3             4 を根とする深さ 3 の木");
    eprintln!("  collatz-pab step 27 5 2 3        (P,a,b)=(5,2,3) での 1 ステップ");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "step" => cmd_step(&args[2..]),
        "reverse" => cmd_reverse(&args[2..]),
        "hailstone" => cmd_hailstone(&args[2..]),
        "stop" => cmd_stop(&args[2..]),
        "tree" => cmd_tree(&args[2..]),
        _ => {
            eprintln!("不明なコマンド: {}", args[1]);
            print_usage();
        }
    }
}

fn parse_n(s: &str) -> BigInt {
    BigInt::from_str(s).unwrap_or_else(|_| {
        eprintln!("数値を解析できません: {}", s);
        exit(1);
    })
}

/// 末尾の [P a b] を解析する。省略時は標準パラメータ
fn parse_params(args: &[String]) -> Parameterisation {
    match args.len() {
        0 => Parameterisation::default(),
        3 => Parameterisation {
            p: parse_n(&args[0]),
            a: parse_n(&args[1]),
            b: parse_n(&args[2]),
        },
        _ => {
            eprintln!("パラメータは P a b の 3 個で指定してください: {:?}", args);
            exit(1);
        }
    }
}

fn fail(err: ParameterError) -> ! {
    eprintln!("パラメータが不正です: {}", err);
    exit(1);
}

fn cmd_step(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: collatz-pab step <n> [P a b]");
        return;
    }
    let n = parse_n(&args[0]);
    let params = parse_params(&args[1..]);

    match step(&n, &params) {
        Ok(next) => {
            println!("n = {}", n);
            println!("(P, a, b) = ({}, {}, {})", params.p, params.a, params.b);
            println!("T(n) = {}", next);
        }
        Err(err) => fail(err),
    }
}

fn cmd_reverse(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: collatz-pab reverse <n> [P a b]");
        return;
    }
    let n = parse_n(&args[0]);
    let params = parse_params(&args[1..]);

    match reverse_step(&n, &params) {
        Ok(reverses) => {
            println!("n = {}", n);
            println!("(P, a, b) = ({}, {}, {})", params.p, params.a, params.b);
            println!("P*n (除算枝の先行値)     = {}", reverses[0]);
            if let Some(pre_mul) = reverses.get(1) {
                println!("(n-b)/a (乗算枝の先行値) = {}", pre_mul);
            } else {
                println!("(n-b)/a (乗算枝の先行値) = なし");
            }
        }
        Err(err) => fail(err),
    }
}

fn terminus_label(terminus: &Terminus) -> String {
    match terminus {
        Terminus::StoppingTime(k) => format!("停止時間に到達 (反復 {} 回)", k),
        Terminus::TotalStoppingTime(k) => format!("総停止時間に到達 (反復 {} 回)", k),
        Terminus::CycleLength(k) => format!("サイクルを検出 (長さ {})", k),
        Terminus::ZeroStop(k) => format!("0 に到達 (ステータス {})", k),
        Terminus::MaxStopOutOfBounds(k) => format!("反復上限 {} に到達", k),
    }
}

fn cmd_hailstone(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: collatz-pab hailstone <n> [P a b]");
        return;
    }
    let n = parse_n(&args[0]);
    let params = parse_params(&args[1..]);

    match hailstone_sequence(&n, &params, 1000, true) {
        Ok(hail) => {
            println!("初期値 = {}", n);
            println!("(P, a, b) = ({}, {}, {})", params.p, params.a, params.b);
            println!();
            // 長すぎる軌道は中間を省略して表示
            let show_limit = 50;
            for (i, value) in hail.values.iter().enumerate() {
                if i < show_limit || i >= hail.values.len().saturating_sub(5) {
                    println!("  {:>6}  {}", i, value);
                } else if i == show_limit {
                    println!(
                        "  ... ({} 値省略) ...",
                        hail.values.len().saturating_sub(show_limit + 5)
                    );
                }
            }
            println!();
            println!("軌道長   = {}", hail.values.len());
            println!("終端分類 = {}", terminus_label(&hail.terminus));
        }
        Err(err) => fail(err),
    }
}

fn cmd_stop(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: collatz-pab stop <n> [P a b]");
        return;
    }
    let n = parse_n(&args[0]);
    let params = parse_params(&args[1..]);

    match stopping_time(&n, &params, 1000, false) {
        Ok(Some(time)) => println!("停止時間 = {}", time),
        Ok(None) => println!("停止時間 = 不明 (反復上限内に停止せず)"),
        Err(err) => fail(err),
    }
}

fn state_label(state: Option<TreeState>) -> &'static str {
    match state {
        None => "",
        Some(TreeState::CycleStart) => "  [サイクル起点]",
        Some(TreeState::CycleEnd) => "  [サイクル終端]",
        Some(TreeState::MaxDepthReached) => "  [深さ上限]",
    }
}

fn print_node(node: &TreeGraphNode, prefix: &str, branch: &str) {
    println!("{}{}{}{}", prefix, branch, node.value, state_label(node.state));
    let child_prefix = format!("{}    ", prefix);
    if let Some(pre_div) = &node.pre_div {
        print_node(pre_div, &child_prefix, "÷P ← ");
    }
    if let Some(pre_mul) = &node.pre_mul {
        print_node(pre_mul, &child_prefix, "a·+b ← ");
    }
}

fn cmd_tree(args: &[String]) {
    if args.len() < 2 {
        eprintln!("使い方: collatz-pab tree <n> <depth> [P a b]");
        return;
    }
    let n = parse_n(&args[0]);
    let depth = args[1].parse::<u64>().unwrap_or_else(|_| {
        eprintln!("深さを解析できません: {}", args[1]);
        exit(1);
    });
    let params = parse_params(&args[2..]);

    match tree_graph(&n, depth, &params) {
        Ok(tree) => {
            println!("根 = {}, 最大軌道距離 = {}", n, depth);
            println!("(P, a, b) = ({}, {}, {})", params.p, params.a, params.b);
            println!();
            print_node(&tree.root, "", "");
        }
        Err(err) => fail(err),
    }
}
