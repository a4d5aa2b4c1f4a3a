use clap::Parser as ClapParser;
use std::io;
use std::path::PathBuf;
use strace_io_extract::Extractor;

/// Extract hex payloads from traced read/write calls on standard input
#[derive(ClapParser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The directory to store the per-descriptor .hex files
    #[clap(short, long, default_value = "/tmp")]
    out_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let stdin = io::stdin();
    let mut extractor = Extractor::new(args.out_dir);
    extractor.process(stdin.lock())?;

    Ok(())
}
