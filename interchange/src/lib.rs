pub mod convert;
pub mod error;
pub mod host;
pub mod model;
pub mod writer;

pub use convert::{ExportOptions, SequenceConverter, convert_sequence};
pub use error::InterchangeError;

use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info};

use crate::host::SequenceData;
use crate::writer::write_timeline_file;

const USAGE: &str = "usage: cli <sequence.json> [-o OUTPUT] [--include-tags]";

/// Command line entry point: load a host sequence from JSON, convert it
/// and write the interchange document beside the input or to `-o PATH`.
pub fn run(args: Vec<String>) -> Result<(), InterchangeError> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut options = ExportOptions::default();

    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let value = iter.next().ok_or_else(|| {
                    InterchangeError::InvalidArgument(format!("{} needs a path\n{}", arg, USAGE))
                })?;
                output = Some(PathBuf::from(value));
            }
            "--include-tags" => options.include_tags = true,
            _ if arg.starts_with('-') => {
                return Err(InterchangeError::InvalidArgument(format!(
                    "unknown flag {}\n{}",
                    arg, USAGE
                )));
            }
            _ => {
                if input.is_some() {
                    return Err(InterchangeError::InvalidArgument(format!(
                        "more than one input given\n{}",
                        USAGE
                    )));
                }
                input = Some(PathBuf::from(arg));
            }
        }
    }

    let input = input.ok_or_else(|| InterchangeError::InvalidArgument(USAGE.to_string()))?;
    let output = output.unwrap_or_else(|| input.with_extension(""));

    let start = Instant::now();

    let json = std::fs::read_to_string(&input)?;
    let sequence = SequenceData::load(&json)?;
    debug!("loaded sequence '{}' ({})", sequence.name, sequence.id);

    let timeline = convert_sequence(&sequence, options);
    let written = write_timeline_file(&timeline, &output)?;

    let clip_count: usize = timeline.tracks.iter().map(|t| t.clips().count()).sum();
    info!(
        "converted '{}' ({} tracks, {} clips) to {} in {} ms",
        timeline.name,
        timeline.tracks.len(),
        clip_count,
        written.display(),
        start.elapsed().as_millis()
    );

    Ok(())
}
