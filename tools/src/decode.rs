use crate::sample_format::SampleReader;
use clap::Args;
use evalboards::decode_to_fen;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

#[derive(Args)]
pub struct DecodeCommand {
    /// Binary dataset written by `build-dataset`
    #[arg(long, value_name = "input")]
    input: String,

    /// Whether the dataset is ZSTD compressed
    #[arg(long, default_value = "false")]
    compressed: bool,

    /// Stop after this many samples
    #[arg(long, value_name = "limit")]
    limit: Option<usize>,
}

/// Prints `fen,side,score` for every sample of a dataset
pub fn decode(cmd: DecodeCommand) -> Result<(), Box<dyn Error>> {
    let file = File::open(&cmd.input)?;
    let reader: Box<dyn io::Read> = if cmd.compressed {
        Box::new(zstd::Decoder::new(file)?)
    } else {
        Box::new(BufReader::new(file))
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let limit = cmd.limit.unwrap_or(usize::MAX);
    let mut count = 0;

    for sample in SampleReader::new(reader).take(limit) {
        let sample = sample?;
        writeln!(
            out,
            "{},{},{}",
            decode_to_fen(&sample.bitboards)?,
            sample.turn.fold_wb('w', 'b'),
            sample.score
        )?;
        count += 1;
    }
    out.flush()?;

    log::info!("Decoded {} samples from {}", count, cmd.input);

    Ok(())
}
