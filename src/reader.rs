//! 行リーダー: 入力ストリームから 1 行ずつ読み取る。
//!
//! - バッファは [`LINE_CHUNK`] バイトで確保し、溢れるたびに同じ量だけ伸長する
//! - 伸長失敗は [`AllocError`]。呼び出し側は [`fatal`] でプロセスごと終了する
//! - EOF は空行として返す（ループ側では空行扱いになり、シェルは終了しない）
//!
//! 行はバイト列のまま保持する。UTF-8 でない入力もそのまま `execvp` / `chdir` に渡る。

use std::fmt;
use std::io::{self, BufReader, Read};

use crate::SHELL_NAME;

/// 行バッファの初期容量および伸長単位（バイト）。
pub const LINE_CHUNK: usize = 1024;

// ── エラー型 ──────────────────────────────────────────────────────

/// バッファ伸長の失敗。シェルは入力バッファなしでは動作できないため致命的。
#[derive(Debug, PartialEq)]
pub struct AllocError;

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allocation error")
    }
}

impl std::error::Error for AllocError {}

/// `AllocError` を報告して失敗ステータスで終了する。
pub fn fatal(err: AllocError) -> ! {
    eprintln!("{}: {}", SHELL_NAME, err);
    std::process::exit(libc::EXIT_FAILURE)
}

/// `len == capacity` のときだけ `chunk` 要素分を追加確保する。
pub(crate) fn grow<T>(buf: &mut Vec<T>, chunk: usize) -> Result<(), AllocError> {
    if buf.len() == buf.capacity() {
        buf.try_reserve_exact(chunk).map_err(|_| AllocError)?;
    }
    Ok(())
}

// ── Line ──────────────────────────────────────────────────────────

/// 読み取った 1 行。行末の改行は含まない。
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

// ── LineReader ────────────────────────────────────────────────────

/// バイトストリームから行を切り出すリーダー。
pub struct LineReader<R> {
    input: BufReader<R>,
}

impl<R: Read> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: BufReader::new(input),
        }
    }

    /// `\n` または EOF まで 1 バイトずつ読み取る。
    ///
    /// `Interrupted` は再試行し、それ以外の I/O エラーは EOF と同じ扱いにする。
    pub fn read_line(&mut self) -> Result<Line, AllocError> {
        let mut buf: Vec<u8> = Vec::new();
        grow(&mut buf, LINE_CHUNK)?;

        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => break,
                Ok(_) if byte[0] == b'\n' => break,
                Ok(_) => {
                    grow(&mut buf, LINE_CHUNK)?;
                    buf.push(byte[0]);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => break,
            }
        }

        Ok(Line { bytes: buf })
    }
}
