use super::*;

use std::fs::{read_to_string, write};

use fstimeline_fs::{FIELD_COUNT, inspect_file};

fn record_for(dir: &Path, name: &str, body: &[u8]) -> FileMetadataRecord {
    let path = dir.join(name);
    write(&path, body).expect("write fixture");
    inspect_file(&path).expect("inspect fixture")
}

struct FlakyWriter {
    flushes: usize,
}

impl Write for FlakyWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[test]
fn line_sink_writes_one_line_per_record_in_order() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let first = record_for(tmp.path(), "first.txt", b"1");
    let second = record_for(tmp.path(), "second.txt", b"22");

    let mut sink = LineSink::new(Vec::new());
    sink.write_record(&first).expect("write first");
    sink.write_record(&second).expect("write second");

    let out = String::from_utf8(sink.into_inner()).expect("utf8");
    let lines: Vec<&str> = out.lines().collect();

    assert!(out.ends_with('\n'));
    assert_eq!(lines, vec![first.to_line(), second.to_line()]);
    for line in lines {
        assert_eq!(line.split(',').count(), FIELD_COUNT);
    }
}

#[test]
fn line_sink_surfaces_write_errors() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let rec = record_for(tmp.path(), "a.txt", b"a");

    let mut sink = LineSink::new(FlakyWriter { flushes: 0 });
    let err = sink.write_record(&rec).expect_err("write should fail");

    assert_eq!(err.to_string(), "disk full");
    assert_eq!(sink.into_inner().flushes, 0);
}

#[test]
fn open_file_sink_truncates_existing_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let out = tmp.path().join("out.csv");
    write(&out, "stale line that must disappear\n").expect("seed output");

    let rec = record_for(tmp.path(), "a.txt", b"a");
    {
        let mut sink = open(Some(out.as_path())).expect("open sink");
        sink.write_record(&rec).expect("write");
    }

    let contents = read_to_string(&out).expect("read output");
    assert_eq!(contents, format!("{}\n", rec.to_line()));
}

#[test]
fn open_file_sink_fails_for_missing_parent_dir() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let out = tmp.path().join("no-such-dir").join("out.csv");

    assert!(open(Some(out.as_path())).is_err());
}

#[test]
fn file_sink_lines_are_visible_before_drop() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let out = tmp.path().join("out.csv");
    let rec = record_for(tmp.path(), "a.txt", b"a");

    let mut sink = open(Some(out.as_path())).expect("open sink");
    sink.write_record(&rec).expect("write");

    // Flushed per record, so the line is on disk while the sink is alive.
    let contents = read_to_string(&out).expect("read output");
    assert_eq!(contents.lines().count(), 1);
    drop(sink);
}
