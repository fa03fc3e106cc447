use crate::encoding::encode;
use crate::error::Error;
use crate::sample::Sample;
use pgn_reader::{RawComment, SanPlus, Skip, Visitor};
use regex::Regex;
use shakmaty::{Chess, Color, Position};

/// Matches an engine evaluation inside a move comment, e.g. `[%eval 0.25]`
pub const EVAL_PATTERN: &str = r"\[%eval (.*?)\]";

/// A mainline move and the comments attached after it
#[derive(Debug)]
struct Ply {
    san: SanPlus,
    comment: String,
}

/// Collects the mainline of each game and turns its annotated moves into samples
pub struct EvalVisitor {
    pattern: Regex,

    /// Mainline of the current game
    plies: Vec<Ply>,
}

impl EvalVisitor {
    pub fn new() -> Self {
        EvalVisitor {
            pattern: Regex::new(EVAL_PATTERN).expect("eval pattern is valid"),
            plies: Vec::new(),
        }
    }

    /// Returns the raw eval text of a comment, if any
    fn annotation<'c>(&self, comment: &'c str) -> Option<&'c str> {
        self.pattern
            .captures(comment)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }

    /// Replays the current game from the starting position and emits a sample
    /// for every move with an eval annotation
    fn replay(&self) -> Result<Vec<Sample>, Error> {
        let mut samples = Vec::new();
        let mut position = Chess::default();

        // side to play after white's first move
        let mut turn = Color::Black;

        for (index, ply) in self.plies.iter().enumerate() {
            let illegal = || Error::IllegalMove {
                ply: index + 1,
                san: ply.san.to_string(),
            };

            let mov = ply.san.san.to_move(&position).map_err(|_| illegal())?;
            position = position.play(&mov).map_err(|_| illegal())?;

            let Some(text) = self.annotation(&ply.comment) else {
                // the tracker is not flipped here
                continue;
            };

            let score = text
                .trim()
                .parse::<f32>()
                .map_err(|_| Error::MalformedAnnotation {
                    ply: index + 1,
                    text: text.to_string(),
                })?;

            samples.push(Sample {
                bitboards: encode(position.board()),
                turn,
                score,
            });

            turn = !turn;
        }

        Ok(samples)
    }
}

impl Default for EvalVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for EvalVisitor {
    type Result = Result<Vec<Sample>, Error>;

    fn begin_game(&mut self) {
        self.plies.clear();
    }

    fn begin_variation(&mut self) -> Skip {
        Skip(true) // mainline only
    }

    fn san(&mut self, san_plus: SanPlus) {
        self.plies.push(Ply {
            san: san_plus,
            comment: String::new(),
        });
    }

    fn comment(&mut self, comment: RawComment<'_>) {
        // comments before the first move belong to the game
        let Some(ply) = self.plies.last_mut() else {
            return;
        };

        let text = String::from_utf8_lossy(comment.as_bytes());
        let text = text.trim();

        if !ply.comment.is_empty() {
            ply.comment.push(' ');
        }
        ply.comment.push_str(text);
    }

    fn end_game(&mut self) -> Self::Result {
        let annotated = self
            .plies
            .iter()
            .any(|ply| self.pattern.is_match(&ply.comment));

        if !annotated {
            log::trace!(
                "skipping game without eval annotations ({} plies)",
                self.plies.len()
            );
            return Ok(Vec::new());
        }

        self.replay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgn_reader::BufferedReader;

    fn read_one(pgn: &str) -> Result<Vec<Sample>, Error> {
        let mut reader = BufferedReader::new_cursor(pgn.as_bytes());
        let mut visitor = EvalVisitor::new();
        reader.read_game(&mut visitor).unwrap().unwrap()
    }

    #[test]
    fn test_annotation_capture() {
        let visitor = EvalVisitor::new();

        assert_eq!(visitor.annotation("[%eval 0.17]"), Some("0.17"));
        assert_eq!(
            visitor.annotation("[%clk 0:03:00] [%eval -1.5] [%eval 2]"),
            Some("-1.5")
        );
        assert_eq!(visitor.annotation("[%eval #-3]"), Some("#-3"));
        assert_eq!(visitor.annotation("[%clk 0:03:00]"), None);
        assert_eq!(visitor.annotation("%eval 0.3"), None);
    }

    #[test]
    fn test_comments_are_joined() {
        let samples = read_one("1. e4 { good } { [%eval 0.4] } *").unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].score, 0.4);
    }

    #[test]
    fn test_visitor_resets_between_games() {
        let pgn = "1. e4 { [%eval 0.2] } *\n\n1. d4 *\n";
        let mut reader = BufferedReader::new_cursor(pgn.as_bytes());
        let mut visitor = EvalVisitor::new();

        let first = reader.read_game(&mut visitor).unwrap().unwrap().unwrap();
        let second = reader.read_game(&mut visitor).unwrap().unwrap().unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert!(reader.read_game(&mut visitor).unwrap().is_none());
    }
}
