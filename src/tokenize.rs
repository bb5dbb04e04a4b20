//! トークナイザ: 1 行を空白区切りの引数ベクタに分割する。
//!
//! 区切り文字は [`SEPARATORS`]（空白, `\t`, `\r`, `\n`, BEL）。連続する区切りは
//! 空トークンを作らない。トークンは行をコピーせず、行内のバイト範囲として保持する。
//! 区切りはすべて ASCII なので、UTF-8 でない行もそのまま分割できる。
//!
//! | 型 | 役割 |
//! |-----|------|
//! | [`Args`] | 行への参照 + 各トークンの範囲。`args[0]` がコマンド名 |
//! | [`split`] | 行を [`Args`] に分割する |

use std::ops::Range;

use crate::reader::{grow, AllocError};

/// トークンの区切り文字。
pub const SEPARATORS: &[u8] = b" \t\r\n\x07";

/// 範囲ベクタの初期容量および伸長単位（トークン数）。
pub const ARGS_CHUNK: usize = 64;

/// 引数ベクタ。元の行より長生きできない。
#[derive(Debug)]
pub struct Args<'a> {
    line: &'a [u8],
    spans: Vec<Range<usize>>,
}

impl<'a> Args<'a> {
    /// `i` 番目のトークン。範囲外なら `None`（= 引数リストの終端）。
    pub fn get(&self, i: usize) -> Option<&'a [u8]> {
        let line = self.line;
        self.spans.get(i).map(|r| &line[r.clone()])
    }

    /// コマンド名（先頭トークン）。空行なら `None`。
    pub fn command(&self) -> Option<&'a [u8]> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        let line = self.line;
        self.spans.iter().map(move |r| &line[r.clone()])
    }
}

fn is_separator(b: u8) -> bool {
    SEPARATORS.contains(&b)
}

/// 行を区切り文字で分割する。空行・区切りのみの行は 0 トークンになる。
pub fn split(line: &[u8]) -> Result<Args<'_>, AllocError> {
    let mut spans: Vec<Range<usize>> = Vec::new();
    grow(&mut spans, ARGS_CHUNK)?;

    let mut start: Option<usize> = None;
    for (i, &b) in line.iter().enumerate() {
        match (is_separator(b), start) {
            (true, Some(s)) => {
                grow(&mut spans, ARGS_CHUNK)?;
                spans.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        grow(&mut spans, ARGS_CHUNK)?;
        spans.push(s..line.len());
    }

    Ok(Args { line, spans })
}
