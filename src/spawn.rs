//! `fork()` + `execvp()` による外部コマンドの起動と待機。
//!
//! ## 構成
//!
//! | 型・関数 | 役割 |
//! |-----|------|
//! | [`Fork`] | `fork()` の結果（子 / 親）。失敗は `Err` |
//! | [`CStringVec`] | argv 用の NULL 終端ポインタ配列 |
//! | [`spawn`] | fork して子で `execvp`。親には子 PID を返す |
//! | [`wait`] | 子が終了（正常終了 or シグナル）するまで待つ |
//! | [`launch`] | spawn + wait。常に [`Flow::Continue`] |
//!
//! 子は `execvp` に失敗したらエラーを出して `_exit(EXIT_FAILURE)` する。
//! シェルのロジックに戻ることはない。

use std::ffi::CString;
use std::fmt;
use std::io::{self, Write};

use libc::pid_t;

use crate::executor::Flow;
use crate::tokenize::Args;
use crate::SHELL_NAME;

// ── エラー型 ──────────────────────────────────────────────────────

/// 子プロセスを作れなかった理由。
#[derive(Debug)]
pub enum SpawnError {
    /// `fork()` 自体の失敗。
    Fork(io::Error),
    /// 引数に NUL バイトが含まれており argv を組み立てられない。
    NulByte(String),
    /// 引数ベクタが空でプログラム名がない。
    EmptyCommand,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::Fork(e) => write!(f, "fork: {}", e),
            SpawnError::NulByte(arg) => write!(f, "{}: argument contains a NUL byte", arg),
            SpawnError::EmptyCommand => write!(f, "empty command"),
        }
    }
}

impl std::error::Error for SpawnError {}

// ── Fork ──────────────────────────────────────────────────────────

/// `fork()` が返った側。
#[derive(Debug, PartialEq)]
pub enum Fork {
    Child,
    Parent(pid_t),
}

fn fork() -> io::Result<Fork> {
    match unsafe { libc::fork() } {
        -1 => Err(io::Error::last_os_error()),
        0 => Ok(Fork::Child),
        pid => Ok(Fork::Parent(pid)),
    }
}

// ── CStringVec ────────────────────────────────────────────────────

/// argv 用の CString ベクタ。NULL 終端のポインタ配列を構築する。
struct CStringVec {
    strings: Vec<CString>,
    ptrs: Vec<*const libc::c_char>,
}

impl CStringVec {
    /// 空の引数ベクタは [`SpawnError::EmptyCommand`]。`strings[0]` は常に存在する。
    fn from_args(args: &Args<'_>) -> Result<Self, SpawnError> {
        if args.is_empty() {
            return Err(SpawnError::EmptyCommand);
        }
        let strings = args
            .iter()
            .map(|s| {
                CString::new(s)
                    .map_err(|_| SpawnError::NulByte(String::from_utf8_lossy(s).into_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut ptrs: Vec<*const libc::c_char> = strings.iter().map(|s| s.as_ptr()).collect();
        ptrs.push(std::ptr::null()); // NULL 終端
        Ok(Self { strings, ptrs })
    }

    fn program(&self) -> &CString {
        &self.strings[0]
    }

    fn as_ptr(&self) -> *const *const libc::c_char {
        self.ptrs.as_ptr()
    }
}

// ── spawn / wait ──────────────────────────────────────────────────

/// 子プロセスで `args[0]` を `PATH` 検索付きで実行する。成功時は子 PID を返す。
///
/// 環境変数とカレントディレクトリは親から継承される。
/// 空の `args` や NUL を含む引数は fork 前に `Err` になる。
pub fn spawn(args: &Args<'_>) -> Result<pid_t, SpawnError> {
    // fork 前に argv を組み立てておき、子では exec するだけにする
    let argv = CStringVec::from_args(args)?;

    match fork().map_err(SpawnError::Fork)? {
        Fork::Child => exec_child(&argv),
        Fork::Parent(pid) => Ok(pid),
    }
}

/// 子プロセス側: exec に成功すれば戻らない。失敗時は報告して `_exit`。
fn exec_child(argv: &CStringVec) -> ! {
    unsafe {
        libc::execvp(argv.program().as_ptr(), argv.as_ptr());
    }
    let e = io::Error::last_os_error();
    eprintln!(
        "{}: {}: {}",
        SHELL_NAME,
        argv.program().to_string_lossy(),
        e
    );
    unsafe { libc::_exit(libc::EXIT_FAILURE) }
}

/// 子が正常終了またはシグナル終了するまで `waitpid(WUNTRACED)` を繰り返す。
///
/// 停止通知は無視して待ち続ける。`EINTR` は再試行。
/// 戻り値は最後の raw status。`waitpid` がそれ以外のエラーを返したら `None`。
pub fn wait(pid: pid_t) -> Option<i32> {
    loop {
        let mut raw_status: i32 = 0;
        let ret = unsafe { libc::waitpid(pid, &mut raw_status, libc::WUNTRACED) };

        if ret < 0 {
            if io::Error::last_os_error().kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return None;
        }

        if libc::WIFEXITED(raw_status) || libc::WIFSIGNALED(raw_status) {
            return Some(raw_status);
        }
    }
}

/// 外部コマンドを起動し、終了まで待つ。
///
/// 子の終了ステータスは問わない。起動失敗は `err` に報告するだけで、
/// いずれの場合もループは継続する。
pub fn launch(args: &Args<'_>, err: &mut dyn Write) -> Flow {
    match spawn(args) {
        Ok(pid) => {
            wait(pid);
        }
        Err(e) => {
            let _ = writeln!(err, "{}: {}", SHELL_NAME, e);
        }
    }
    Flow::Continue
}
