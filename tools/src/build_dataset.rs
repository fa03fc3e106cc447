use crate::sample_format::{Format, SampleWriter};
use clap::Args;
use evalboards::EvalGames;
use indicatif::{HumanCount, ProgressBar, ProgressStyle};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use zstd::Encoder;

#[derive(Args)]
pub struct BuildDatasetCommand {
    /// Path of a .pgn or .pgn.zst file to read games
    #[arg(long, value_name = "input")]
    input: String,

    /// Output file to write the samples
    #[arg(long, value_name = "output")]
    output: String,

    /// Whether to compress the output with the ZSTD algorithm
    #[arg(long, default_value = "false")]
    compress: bool,

    /// Layout of the written samples
    #[arg(long, value_enum, default_value = "binary")]
    format: Format,
}

pub fn build_dataset(cmd: BuildDatasetCommand) -> Result<(), Box<dyn Error>> {
    let file = File::open(&cmd.input)?;

    // decompress if necessary
    let reader: Box<dyn io::Read> = if cmd.input.ends_with(".zst") {
        Box::new(zstd::Decoder::new(file)?)
    } else {
        Box::new(BufReader::new(file))
    };

    // compress output if asked
    let output_file = File::create(&cmd.output)?;
    let writer: Box<dyn io::Write> = if cmd.compress {
        // the encoder is buffered internally
        Box::new(Encoder::new(output_file, 3)?.auto_finish())
    } else {
        Box::new(BufWriter::new(output_file))
    };

    log::info!("Input: {}", cmd.input);
    log::info!("Output: {}", cmd.output);
    log::info!("Format: {:?} (compressed: {})", cmd.format, cmd.compress);

    let mut games = EvalGames::new(reader);
    let mut writer = SampleWriter::new(writer, cmd.format);
    let mut annotated = 0u64;
    let mut count = 0u64;

    let bar = ProgressBar::new_spinner().with_style(
        ProgressStyle::default_spinner()
            .template(
                "{spinner:.green} [Elapsed {elapsed_precise}] [Games {human_pos} @ {per_sec}] {msg}",
            )?,
    );

    while let Some(samples) = games.next_game()? {
        bar.inc(1);

        if samples.is_empty() {
            continue;
        }
        annotated += 1;

        for sample in &samples {
            writer.write_sample(sample)?;
        }

        count += samples.len() as u64;
        bar.set_message(format!("[Samples {}]", HumanCount(count)));
    }
    bar.finish();
    writer.finish()?;

    log::info!(
        "Done. Games: {} annotated of {}, samples written: {}",
        annotated,
        bar.position(),
        count
    );

    Ok(())
}
