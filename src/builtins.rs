//! ビルトインコマンドの実装。
//!
//! ビルトインは fork/exec を経由せずプロセス内で直接実行される。
//! [`lookup()`] が `Some(builtin)` を返せばビルトインとして処理し、
//! `None` なら外部コマンドとして [`spawn`](crate::spawn) に委ねる。

use std::env;
use std::ffi::OsStr;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use crate::executor::Flow;
use crate::tokenize::Args;
use crate::SHELL_NAME;

/// ビルトインの種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Help,
    Exit,
}

/// 登録順のビルトイン表。`help` の一覧表示もこの順になる。
pub const BUILTINS: &[(&str, Builtin)] = &[
    ("cd", Builtin::Cd),
    ("help", Builtin::Help),
    ("exit", Builtin::Exit),
];

/// 名前の完全一致でビルトインを探す。先に登録されたものが優先。
pub fn lookup(name: &[u8]) -> Option<Builtin> {
    BUILTINS
        .iter()
        .find(|(n, _)| n.as_bytes() == name)
        .map(|&(_, builtin)| builtin)
}

impl Builtin {
    /// ビルトインを実行する。`args[0]` はビルトイン名自身。
    pub fn run(self, args: &Args<'_>, out: &mut dyn Write, err: &mut dyn Write) -> Flow {
        match self {
            Builtin::Cd => builtin_cd(args, err),
            Builtin::Help => builtin_help(out),
            Builtin::Exit => Flow::Terminate,
        }
    }
}

/// `cd dir` — カレントディレクトリを変更する。引数省略はエラー。
fn builtin_cd(args: &Args<'_>, err: &mut dyn Write) -> Flow {
    match args.get(1) {
        None => {
            let _ = writeln!(err, "{}: expected argument to \"cd\"", SHELL_NAME);
        }
        Some(target) => {
            if let Err(e) = env::set_current_dir(OsStr::from_bytes(target)) {
                let target = String::from_utf8_lossy(target);
                let _ = writeln!(err, "{}: cd: {}: {}", SHELL_NAME, target, e);
            }
        }
    }
    Flow::Continue
}

/// `help` — プログラム情報とビルトイン一覧を表示する。引数は無視。
fn builtin_help(out: &mut dyn Write) -> Flow {
    let _ = writeln!(out, "Name\t\t:\t{}", env!("CARGO_PKG_NAME"));
    let _ = writeln!(out, "Authors\t\t:\t{}", env!("CARGO_PKG_AUTHORS"));
    let _ = writeln!(out, "Version\t\t:\t{}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(
        out,
        "Copyright\t:\t{}, {} License",
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_LICENSE")
    );
    let _ = writeln!(out, "Description\t:\t{}", env!("CARGO_PKG_DESCRIPTION"));
    let _ = writeln!(out, "Usage:");
    let _ = writeln!(out, "\tType program names and arguments, and hit enter.");
    let _ = writeln!(out, "\tThe following are built in:");
    for (name, _) in BUILTINS {
        let _ = writeln!(out, "\t  {}", name);
    }
    let _ = writeln!(out, "\tUse the man command for information on other programs.");
    Flow::Continue
}
