use crate::error::Error;
use crate::sample::Sample;
use crate::visitor::EvalVisitor;
use pgn_reader::BufferedReader;
use std::io::Read;

/// Reads evaluated samples from a PGN stream, one game at a time
pub struct EvalGames<R> {
    reader: BufferedReader<R>,
    visitor: EvalVisitor,
}

impl<R: Read> EvalGames<R> {
    pub fn new(reader: R) -> Self {
        EvalGames {
            reader: BufferedReader::new(reader),
            visitor: EvalVisitor::new(),
        }
    }

    /// Samples of the next game, or `None` once the stream is exhausted.
    /// Games without eval annotations yield an empty list
    pub fn next_game(&mut self) -> Result<Option<Vec<Sample>>, Error> {
        match self.reader.read_game(&mut self.visitor)? {
            Some(samples) => samples.map(Some),
            None => Ok(None),
        }
    }
}

impl<R: Read> Iterator for EvalGames<R> {
    type Item = Result<Vec<Sample>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_game().transpose()
    }
}

/// Extracts the samples of every game in a PGN stream, in game then move order.
/// Any error discards everything read so far
pub fn extract_reader<R: Read>(reader: R) -> Result<Vec<Sample>, Error> {
    let mut samples = Vec::new();
    let mut games = 0;

    for game in EvalGames::new(reader) {
        samples.extend(game?);
        games += 1;
    }

    log::debug!("extracted {} samples from {} games", samples.len(), games);

    Ok(samples)
}

/// Extracts the samples of every game in a PGN string
pub fn extract(pgn: &str) -> Result<Vec<Sample>, Error> {
    extract_reader(pgn.as_bytes())
}
