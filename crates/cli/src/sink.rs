use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use fstimeline_fs::FileMetadataRecord;

/// Destination for serialized records.
///
/// Each call to `write_record` must reach the underlying writer before it
/// returns, so the output order is exactly the order records arrive in.
pub trait RecordSink {
    fn write_record(&mut self, record: &FileMetadataRecord) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Writes one newline-terminated line per record and flushes after each.
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for LineSink<W> {
    fn write_record(&mut self, record: &FileMetadataRecord) -> io::Result<()> {
        writeln!(self.out, "{record}")?;
        self.out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Open the run's sink: a freshly created (truncated) file, or stdout.
///
/// The returned value owns the file handle; dropping it closes the file.
pub fn open(output: Option<&Path>) -> io::Result<Box<dyn RecordSink>> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Box::new(LineSink::new(BufWriter::new(file))))
        }
        None => Ok(Box::new(LineSink::new(io::stdout()))),
    }
}

/// Buffering sink for testing.
#[cfg(test)]
#[derive(Default)]
pub struct BufferedSink {
    lines: Vec<String>,
}

#[cfg(test)]
impl BufferedSink {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
impl RecordSink for BufferedSink {
    fn write_record(&mut self, record: &FileMetadataRecord) -> io::Result<()> {
        self.lines.push(record.to_line());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
