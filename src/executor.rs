//! コマンドのディスパッチ。
//!
//! - 空の引数ベクタ（空行）: 何もせず [`Flow::Continue`]
//! - `args[0]` がビルトイン: [`builtins`] のハンドラを実行（fork なし）
//! - それ以外: [`spawn::launch`] で外部コマンドとして起動し、終了まで待つ

use std::io::Write;

use crate::builtins;
use crate::spawn;
use crate::tokenize::Args;

/// ディスパッチ結果。REPL ループを続けるか止めるか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// 引数ベクタを実行し、ループの継続可否を返す。
///
/// 終了を返すのは `exit` ビルトインだけ。外部コマンドの失敗はループを止めない。
pub fn execute(args: &Args<'_>, out: &mut dyn Write, err: &mut dyn Write) -> Flow {
    let Some(name) = args.command() else {
        return Flow::Continue;
    };

    match builtins::lookup(name) {
        Some(builtin) => builtin.run(args, out, err),
        None => {
            // 子プロセスに出力順序を抜かされないよう先に吐き出す
            let _ = out.flush();
            spawn::launch(args, err)
        }
    }
}
