//! slsh — シンプルな Linux シェル
//!
//! REPLループ: プロンプト表示 → 1 行読み取り → 分割 → ビルトイン or 外部コマンド → ループ
//!
//! `exit` でループを抜け、常に終了ステータス 0 で終わる。
//! バッファ確保に失敗した場合のみ失敗ステータスで即終了する。

use std::io;

use slsh::reader;
use slsh::shell::Shell;

fn main() {
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), io::stderr());

    if let Err(e) = shell.run() {
        reader::fatal(e);
    }
}
