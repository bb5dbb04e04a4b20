//! slsh ライブラリ — ベンチマーク・テスト用にモジュールを公開する。
//!
//! バイナリ本体は `main.rs` の REPL ループ。
//!
//! ## モジュール構成
//!
//! | モジュール | 役割 |
//! |-----------|------|
//! | [`reader`] | 行リーダー（チャンク単位で伸長するバッファ、EOF は空行） |
//! | [`tokenize`] | 空白区切りの分割（トークンは行内の範囲として保持） |
//! | [`builtins`] | ビルトイン（`cd`, `help`, `exit`） |
//! | [`executor`] | ディスパッチ（空行 → ビルトイン → 外部コマンド） |
//! | [`spawn`] | `fork` + `execvp` による外部コマンド起動と `waitpid` 待機 |
//! | [`shell`] | REPL ループ（プロンプト、1 反復ごとの行・引数の解放） |

pub mod builtins;
pub mod executor;
pub mod reader;
pub mod shell;
pub mod spawn;
pub mod tokenize;

/// 診断メッセージの接頭辞。
pub const SHELL_NAME: &str = "slsh";
