//! slsh ベンチマーク: 行リーダー、トークナイザ、ビルトイン、fork/exec の計測。
//!
//! `std::time::Instant` による手動計測（外部クレート不要）。
//!
//! 実行: `cargo bench`

use std::io::Cursor;
use std::time::{Duration, Instant};

// ── ベンチマークインフラ ──────────────────────────────────────────

struct BenchResult {
    category: &'static str,
    name: &'static str,
    avg: Duration,
    iters: u64,
}

impl BenchResult {
    fn print(&self) {
        let avg_us = self.avg.as_nanos() as f64 / 1000.0;
        println!(
            "[{:<8}] {:<40}: avg {:>10.2}µs  ({} iters)",
            self.category, self.name, avg_us, self.iters,
        );
    }
}

fn bench<F: FnMut()>(category: &'static str, name: &'static str, iters: u64, mut f: F) -> BenchResult {
    // ウォームアップ
    for _ in 0..iters.min(100) {
        f();
    }

    let start = Instant::now();
    for _ in 0..iters {
        f();
    }
    let elapsed = start.elapsed();

    BenchResult {
        category,
        name,
        avg: elapsed / iters as u32,
        iters,
    }
}

fn print_all(results: &mut Vec<BenchResult>) {
    for r in results.iter() {
        r.print();
    }
    results.clear();
}

// ── メイン ────────────────────────────────────────────────────────

fn main() {
    println!("slsh benchmark suite");
    println!("{}", "=".repeat(80));

    let mut results = Vec::new();

    // ── 行リーダー ──
    println!("\n--- Reader ---");

    results.push(bench("reader", "short line", 10_000, || {
        let mut r = slsh::reader::LineReader::new(Cursor::new("ls -l /tmp\n"));
        let _ = r.read_line();
    }));

    let long = format!("{}\n", "x".repeat(slsh::reader::LINE_CHUNK * 8));
    results.push(bench("reader", "8 chunk line", 1_000, || {
        let mut r = slsh::reader::LineReader::new(Cursor::new(long.as_str()));
        let _ = r.read_line();
    }));

    print_all(&mut results);

    // ── トークナイザ ──
    println!("\n--- Tokenizer ---");

    results.push(bench("split", "ls -l /tmp", 10_000, || {
        let _ = slsh::tokenize::split(b"ls -l /tmp");
    }));

    results.push(bench("split", "  echo\\t a  \\x07 b \\r", 10_000, || {
        let _ = slsh::tokenize::split(b"  echo\t a  \x07 b \r");
    }));

    let many: String = (0..500).map(|i| format!("arg{} ", i)).collect();
    results.push(bench("split", "500 tokens", 1_000, || {
        let _ = slsh::tokenize::split(many.as_bytes());
    }));

    print_all(&mut results);

    // ── ビルトイン ──
    println!("\n--- Builtins ---");

    results.push(bench("builtin", "help", 10_000, || {
        let args = slsh::tokenize::split(b"help").unwrap();
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        slsh::executor::execute(&args, &mut out, &mut err);
    }));

    results.push(bench("builtin", "exit", 10_000, || {
        let args = slsh::tokenize::split(b"exit").unwrap();
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        slsh::executor::execute(&args, &mut out, &mut err);
    }));

    print_all(&mut results);

    // ── fork + execvp + waitpid ──
    println!("\n--- Spawn (fork + execvp) ---");

    results.push(bench("spawn", "/bin/true", 1_000, || {
        let args = slsh::tokenize::split(b"/bin/true").unwrap();
        if let Ok(pid) = slsh::spawn::spawn(&args) {
            slsh::spawn::wait(pid);
        }
    }));

    results.push(bench("spawn", "true (PATH search)", 1_000, || {
        let args = slsh::tokenize::split(b"true").unwrap();
        let mut err: Vec<u8> = Vec::new();
        slsh::spawn::launch(&args, &mut err);
    }));

    print_all(&mut results);

    println!("\n{}", "=".repeat(80));
    println!("done.");
}
