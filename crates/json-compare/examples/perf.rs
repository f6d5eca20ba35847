//! Comparison throughput check over synthetic documents.
//!
//! Run:  cargo run --example perf --release -p json-compare

use std::time::Instant;

use json_compare::{compare_values, Options};
use serde_json::{json, Map, Value};

// ── harness ───────────────────────────────────────────────────────────────

fn bench<F: FnMut()>(n: u32, mut f: F) -> u64 {
    let warmup = std::cmp::max(50, n / 10);
    for _ in 0..warmup {
        f();
    }
    let start = Instant::now();
    for _ in 0..n {
        f();
    }
    let elapsed = start.elapsed();
    (n as f64 / elapsed.as_secs_f64()) as u64
}

fn fmt(n: u64) -> String {
    // comma-grouped number
    let s = n.to_string();
    let mut out = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.chars().rev().collect()
}

fn row(label: &str, ops: u64) {
    println!("  {:<22}  {:>14} op/s", label, fmt(ops));
}

// ── documents ─────────────────────────────────────────────────────────────

fn wide(n: usize) -> Value {
    let mut obj = Map::new();
    for i in 0..n {
        obj.insert(format!("key{i:04}"), json!(i));
    }
    Value::Object(obj)
}

fn deep(levels: usize) -> Value {
    let mut v = json!([1, "leaf", null]);
    for _ in 0..levels {
        v = json!({ "child": v.clone(), "list": [v, true] });
    }
    v
}

fn main() {
    let console = Options::console();
    let yaml = Options::default().with_yaml_output();

    let a = wide(200);
    let mut b = wide(200);
    if let Value::Object(entries) = &mut b {
        entries.insert("key0100".to_owned(), json!("changed"));
        entries.remove("key0199");
    }
    let d = deep(8);

    println!("\n  json-compare\n");
    let n = 2_000;
    row("wide equal, json", bench(n, || {
        compare_values(&a, &a, &console);
    }));
    row("wide diff, json", bench(n, || {
        compare_values(&a, &b, &console);
    }));
    row("wide diff, yaml", bench(n, || {
        compare_values(&a, &b, &yaml);
    }));
    row("deep equal, json", bench(n, || {
        compare_values(&d, &d, &console);
    }));
    println!();
}
