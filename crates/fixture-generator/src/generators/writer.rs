//! SQL 文件写入
//!
//! 每条语句一行。启用事务包裹时首行为 `BEGIN TRANSACTION;`，末尾为不带换行的
//! `COMMIT;`。目标文件每次都会被截断重写，写入不是原子的，中途中断可能留下
//! 空文件或部分内容。

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use seed_shared::{FixtureError, Result};

pub const BEGIN_TRANSACTION: &str = "BEGIN TRANSACTION;";
pub const COMMIT: &str = "COMMIT;";

/// 将语句写入任意输出
///
/// 返回写入的数据语句条数（不含事务框架行）。
pub fn write_statements<W, I, S>(
    out: &mut W,
    statements: I,
    wrap_in_transaction: bool,
) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if wrap_in_transaction {
        writeln!(out, "{}", BEGIN_TRANSACTION)?;
    }

    let mut written = 0;
    for statement in statements {
        writeln!(out, "{}", statement.as_ref())?;
        written += 1;
    }

    if wrap_in_transaction {
        write!(out, "{}", COMMIT)?;
    }

    Ok(written)
}

/// 将语句写入文件，覆盖原有内容
///
/// 父目录不存在或不可写时返回 `FixtureError::Io`。
pub fn write_sql_file<I, S>(path: &Path, statements: I, wrap_in_transaction: bool) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path).map_err(|e| FixtureError::io(path, e))?;
    let mut out = BufWriter::new(file);

    let written = write_statements(&mut out, statements, wrap_in_transaction)
        .map_err(|e| FixtureError::io(path, e))?;
    out.flush().map_err(|e| FixtureError::io(path, e))?;

    Ok(written)
}
