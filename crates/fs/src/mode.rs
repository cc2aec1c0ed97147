//! `ls -l` style rendering of raw `st_mode` values.

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Render a mode as a ten character string, e.g. `-rw-r--r--`.
///
/// The first character is the file type. Setuid, setgid and sticky bits
/// replace the matching execute slot with `s`/`S` or `t`/`T` (lowercase
/// when the execute bit is also set).
pub fn filemode(mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(type_char(mode));

    out.push(bit(mode, 0o400, 'r'));
    out.push(bit(mode, 0o200, 'w'));
    out.push(exec_char(mode, 0o100, S_ISUID, 's'));

    out.push(bit(mode, 0o040, 'r'));
    out.push(bit(mode, 0o020, 'w'));
    out.push(exec_char(mode, 0o010, S_ISGID, 's'));

    out.push(bit(mode, 0o004, 'r'));
    out.push(bit(mode, 0o002, 'w'));
    out.push(exec_char(mode, 0o001, S_ISVTX, 't'));

    out
}

fn type_char(mode: u32) -> char {
    match mode & S_IFMT {
        S_IFLNK => 'l',
        S_IFSOCK => 's',
        S_IFREG => '-',
        S_IFBLK => 'b',
        S_IFDIR => 'd',
        S_IFCHR => 'c',
        S_IFIFO => 'p',
        _ => '-',
    }
}

#[inline]
fn bit(mode: u32, mask: u32, ch: char) -> char {
    if mode & mask != 0 { ch } else { '-' }
}

fn exec_char(mode: u32, exec: u32, special: u32, special_ch: char) -> char {
    match (mode & exec != 0, mode & special != 0) {
        (true, true) => special_ch,
        (false, true) => special_ch.to_ascii_uppercase(),
        (true, false) => 'x',
        (false, false) => '-',
    }
}

/// Synthesize a regular-file mode on platforms without POSIX permission bits.
#[cfg(not(unix))]
pub(crate) fn synthesize_mode(readonly: bool) -> u32 {
    let perms = if readonly { 0o444 } else { 0o666 };
    S_IFREG | perms
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
