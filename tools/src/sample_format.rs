use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use clap::ValueEnum;
use evalboards::{Sample, NUM_BITBOARDS};
use shakmaty::Color;
use std::io::{self, Read, Write};

/// Size of a sample in the binary format: 12 bitboards, the turn and the score
pub const BINARY_SAMPLE_SIZE: usize = NUM_BITBOARDS * 8 + 1 + 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Fixed size little endian records (12 x u64, u8 turn, f32 score)
    Binary,
    /// One line per sample: `bb0,...,bb11,w|b,score`
    Text,
}

/// Writes samples to a dataset file
pub struct SampleWriter<W: Write> {
    writer: W,
    format: Format,
}

impl<W: Write> SampleWriter<W> {
    pub fn new(writer: W, format: Format) -> Self {
        SampleWriter { writer, format }
    }

    pub fn write_sample(&mut self, sample: &Sample) -> io::Result<()> {
        match self.format {
            Format::Binary => {
                for bitboard in sample.bitboards {
                    self.writer.write_u64::<LittleEndian>(bitboard)?;
                }
                self.writer.write_u8(sample.white_to_move() as u8)?;
                self.writer.write_f32::<LittleEndian>(sample.score)
            }
            Format::Text => {
                for bitboard in sample.bitboards {
                    write!(self.writer, "{},", bitboard)?;
                }
                writeln!(
                    self.writer,
                    "{},{}",
                    sample.turn.fold_wb('w', 'b'),
                    sample.score
                )
            }
        }
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Reads samples written in the binary format
pub struct SampleReader<R: Read> {
    reader: R,
}

impl<R: Read> SampleReader<R> {
    pub fn new(reader: R) -> Self {
        SampleReader { reader }
    }

    /// Reads the next sample, `None` at the end of the stream.
    /// A truncated trailing record is an error
    pub fn read_sample(&mut self) -> io::Result<Option<Sample>> {
        let mut bitboards = [0u64; NUM_BITBOARDS];

        match self.reader.read_u64::<LittleEndian>() {
            Ok(first) => bitboards[0] = first,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(err) => return Err(err),
        }
        for bitboard in bitboards.iter_mut().skip(1) {
            *bitboard = self.reader.read_u64::<LittleEndian>()?;
        }

        let turn = match self.reader.read_u8()? {
            0 => Color::Black,
            1 => Color::White,
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid turn byte {}", other),
                ))
            }
        };
        let score = self.reader.read_f32::<LittleEndian>()?;

        Ok(Some(Sample {
            bitboards,
            turn,
            score,
        }))
    }
}

impl<R: Read> Iterator for SampleReader<R> {
    type Item = io::Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_sample().transpose()
    }
}
