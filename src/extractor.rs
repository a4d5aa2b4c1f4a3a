use crate::error::Error;
use regex::Regex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The kind of traced system call a line was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Read,
    Write,
}

impl CallKind {
    // the prefix of the output file name for this kind
    fn tag(&self) -> &'static str {
        match self {
            CallKind::Read => "r",
            CallKind::Write => "w",
        }
    }
}

///
/// Extracts hex payloads from the log of an strace invocation such as
/// `strace -ff -x -s 65536 -e trace=read,write -o /tmp/out`.
///
/// Each matched `read`/`write` line contributes one line to an output file
/// named after the call kind and file descriptor, e.g. `r_3.hex` for reads
/// on descriptor 3. Output files are truncated on first use within a run
/// and appended to afterwards, so payload chunks land in input order.
///
pub struct Extractor {
    out_dir: PathBuf,
    read_re: Regex,
    write_re: Regex,
    sinks: HashMap<PathBuf, BufWriter<File>>,
}

impl Extractor {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Extractor {
            out_dir: out_dir.as_ref().to_path_buf(),
            read_re: Regex::new(r#"^read\((\d+), "([^"]+)""#).unwrap(),
            write_re: Regex::new(r#"^write\((\d+), "([^"]+)""#).unwrap(),
            sinks: HashMap::new(),
        }
    }

    /// Run the extraction over a whole input stream, one line at a time.
    ///
    /// Open sinks are flushed once the input is exhausted. Any I/O failure
    /// aborts the run; the partially populated output files are left behind
    /// and a rerun against the full input reproduces them.
    pub fn process<R: BufRead>(&mut self, input: R) -> Result<(), Error> {
        for line in input.lines() {
            let line = line.map_err(Error::ReadInput)?;
            self.process_line(line.as_ref())?;
        }

        for (path, sink) in &mut self.sinks {
            sink.flush()
                .map_err(|err| Error::WriteOutput(path.clone(), err))?;
        }

        Ok(())
    }

    // classify one trace line and append its cleaned payload, if any
    fn process_line(&mut self, line: &str) -> Result<(), Error> {
        // a matching line of the strace log is like:
        //  read(3, "\x00\x00\x00\x33", 4)          = 4

        // both patterns are tried independently; a write match overwrites a
        // read match, though the anchored prefixes never match the same line
        let mut record = None;
        if let Some(caps) = self.read_re.captures(line) {
            record = Some((CallKind::Read, caps));
        }
        if let Some(caps) = self.write_re.captures(line) {
            record = Some((CallKind::Write, caps));
        }

        let (kind, caps) = match record {
            Some(record) => record,
            None => return Ok(()),
        };

        // the descriptor stays the digit string it appeared as; the trailer
        // after the closing quote (", 4) = 4") is ignored by the patterns
        let fd = &caps[1];
        let body = caps[2].replace("\\x", "");

        let name = self.out_dir.join(format!("{}_{}.hex", kind.tag(), fd));
        let sink = self.sink(name.clone())?;

        writeln!(sink, "{}", body).map_err(|err| Error::WriteOutput(name, err))
    }

    // look up the open sink for an output path, creating it on first use
    fn sink(&mut self, name: PathBuf) -> Result<&mut BufWriter<File>, Error> {
        match self.sinks.entry(name) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                // File::create truncates anything left over from an earlier run
                let file = File::create(entry.key())
                    .map_err(|err| Error::OpenOutput(entry.key().clone(), err))?;
                Ok(entry.insert(BufWriter::new(file)))
            }
        }
    }
}
