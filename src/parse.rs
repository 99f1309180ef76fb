//! Parse puzzles from text
//!
//! A puzzle is written as its digits followed by `=` and the target, e.g. `9 7 7 6 = 56`.
//! Digits may be separated by whitespace or commas.

use crate::error::ParsePuzzleErrorType::{MissingDigits, MissingTarget, UnexpectedToken};
use crate::error::{ParseError, ParsePuzzleError, UNEXPECTED_END};
use crate::puzzle::{Puzzle, Value};
use token_iterator::TokenIterator;

pub(crate) use token::Token;

mod token;
mod token_iterator;

/// The result of parsing part of a puzzle
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// parse a `Puzzle` from a string
pub fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut s = TokenIterator::new(s);
    let digits = read_digits(&mut s)?;
    let target = read_target(&mut s)?;
    if let Some((i, t)) = s.next_skip_space()? {
        return Err(ParseError::new(UnexpectedToken, t, i).into());
    }
    let puzzle = Puzzle::new(digits, target)?;
    Ok(puzzle)
}

/// Reads digits up to and including the `=`
fn read_digits(s: &mut TokenIterator<'_>) -> Result<Vec<Value>> {
    let mut digits = Vec::new();
    let mut comma = false;
    loop {
        let (i, token) = match s.next()? {
            Some(next) => next,
            None if digits.is_empty() => return Err(UNEXPECTED_END),
            None => return Err(ParseError::from_type(MissingTarget)),
        };
        match token {
            Token::Number(n) => {
                digits.push(n);
                comma = false;
            }
            Token::Space => {}
            Token::Comma if !digits.is_empty() && !comma => comma = true,
            Token::Equals if digits.is_empty() => return Err(ParseError::new(MissingDigits, token, i)),
            Token::Equals => break,
            Token::Comma => return Err(ParseError::new(UnexpectedToken, token, i)),
        }
    }
    Ok(digits)
}

fn read_target(s: &mut TokenIterator<'_>) -> Result<Value> {
    let (i, token) = s.next_skip_space()?.ok_or(UNEXPECTED_END)?;
    token
        .number()
        .ok_or_else(|| ParseError::new(UnexpectedToken, token, i))
}

#[cfg(test)]
mod tests {
    use crate::error::{ParsePuzzleError, ParsePuzzleErrorType};
    use crate::parse::parse_puzzle;
    use crate::puzzle::Puzzle;

    fn assert_error(s: &str, expected: ParsePuzzleErrorType) {
        match parse_puzzle(s) {
            Err(ParsePuzzleError::Parse(e)) => assert_eq!(e.error_type(), &expected, "{:?}", s),
            other => panic!("expected a parse error for {:?}, got {:?}", s, other),
        }
    }

    #[test]
    fn empty() {
        assert!(parse_puzzle("").is_err());
        assert_error("  ", ParsePuzzleErrorType::UnexpectedEnd);
    }

    #[test]
    fn test() {
        let expected = Puzzle::new(vec![9, 7, 7, 6], 56).unwrap();
        assert_eq!(parse_puzzle("9 7 7 6 = 56").unwrap(), expected);
        assert_eq!(parse_puzzle("  9,7, 7 ,6=56\n").unwrap(), expected);
        assert_eq!("9 7 7 6 = 56".parse::<Puzzle>().unwrap(), expected);
    }

    #[test]
    fn display_parses_back() {
        let puzzle = Puzzle::new(vec![8, 5, 3, 2, 1], 42).unwrap();
        assert_eq!(parse_puzzle(&puzzle.to_string()).unwrap(), puzzle);
    }

    #[test]
    fn errors() {
        assert_error("= 5", ParsePuzzleErrorType::MissingDigits);
        assert_error("4 2", ParsePuzzleErrorType::MissingTarget);
        assert_error("4 2 =", ParsePuzzleErrorType::UnexpectedEnd);
        assert_error("4 2 = 6 7", ParsePuzzleErrorType::UnexpectedToken);
        assert_error("4,,2 = 6", ParsePuzzleErrorType::UnexpectedToken);
        assert_error("4 2 = =", ParsePuzzleErrorType::UnexpectedToken);
        assert_error("4 a = 6", ParsePuzzleErrorType::InvalidToken);
        assert_error("4 99999999999999999999999 = 6", ParsePuzzleErrorType::InvalidNumber);
    }

    #[test]
    fn invalid_puzzle() {
        assert!(matches!(
            parse_puzzle("4 0 = 6"),
            Err(ParsePuzzleError::InvalidPuzzle(_))
        ));
        assert!(matches!(
            parse_puzzle("4 2 = 0"),
            Err(ParsePuzzleError::InvalidPuzzle(_))
        ));
    }
}
