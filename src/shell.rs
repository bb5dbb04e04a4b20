//! REPL ループ: プロンプト表示 → 1 行読み取り → 分割 → 実行 → ループ。
//!
//! プロンプトは `<カレントディレクトリ>> `。カレントディレクトリが取得できなければ
//! `> ` に縮退する。EOF は空行として扱うため、`exit` 以外ではループは終わらない。

use std::env;
use std::io::{Read, Write};

use crate::executor::{self, Flow};
use crate::reader::{AllocError, LineReader};
use crate::tokenize;

/// シェルの実行状態。入力・出力・エラー出力を所有する。
pub struct Shell<R, W, E> {
    reader: LineReader<R>,
    out: W,
    err: E,
}

/// 現在のプロンプト文字列。
pub fn prompt() -> String {
    match env::current_dir() {
        Ok(dir) => format!("{}> ", dir.display()),
        Err(_) => "> ".to_string(),
    }
}

impl<R: Read, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            reader: LineReader::new(input),
            out,
            err,
        }
    }

    /// 1 反復分を実行する。行と引数ベクタはこの関数を抜けると解放される。
    pub fn step(&mut self) -> Result<Flow, AllocError> {
        let _ = write!(self.out, "{}", prompt());
        let _ = self.out.flush();

        let line = self.reader.read_line()?;
        let args = tokenize::split(line.as_bytes())?;
        let flow = executor::execute(&args, &mut self.out, &mut self.err);
        let _ = self.out.flush();
        Ok(flow)
    }

    /// `exit` が実行されるまでループする。
    pub fn run(&mut self) -> Result<(), AllocError> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    /// 出力先とエラー出力先を取り出す。
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}
