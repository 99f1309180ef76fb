use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::ParseError;
use crate::error::ParsePuzzleErrorType::{InvalidNumber, InvalidToken};
use crate::parse::{Result, Token};

pub(crate) type IndexedToken = (usize, Token);

pub(crate) struct TokenIterator<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> TokenIterator<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            chars: s.char_indices().peekable(),
        }
    }

    pub fn next_skip_space(&mut self) -> Result<Option<IndexedToken>> {
        loop {
            match self.next()? {
                Some((_, Token::Space)) => {}
                next => return Ok(next),
            }
        }
    }

    pub fn next(&mut self) -> Result<Option<IndexedToken>> {
        let (idx, c) = match self.chars.next() {
            Some(next) => next,
            None => return Ok(None),
        };
        let token = match c {
            ',' => Token::Comma,
            '=' => Token::Equals,
            c if c.is_whitespace() => {
                while self.chars.peek().map_or(false, |&(_, c)| c.is_whitespace()) {
                    self.chars.next();
                }
                Token::Space
            }
            c if c.is_ascii_digit() => {
                let mut s = c.to_string();
                while let Some(&(_, c)) = self.chars.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    s.push(c);
                    self.chars.next();
                }
                let n = s.parse().map_err(|_| ParseError::new(InvalidNumber, &s, idx))?;
                Token::Number(n)
            }
            c => return Err(ParseError::new(InvalidToken, c, idx)),
        };
        Ok(Some((idx, token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<Token> {
        let mut iter = TokenIterator::new(s);
        let mut tokens = Vec::new();
        while let Some((_, token)) = iter.next().unwrap() {
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn tokenize() {
        assert_eq!(
            tokens("12,3  = 45"),
            vec![
                Token::Number(12),
                Token::Comma,
                Token::Number(3),
                Token::Space,
                Token::Equals,
                Token::Space,
                Token::Number(45),
            ]
        );
    }

    #[test]
    fn invalid_token() {
        let mut iter = TokenIterator::new("4 a");
        assert_eq!(iter.next().unwrap(), Some((0, Token::Number(4))));
        assert_eq!(iter.next().unwrap(), Some((1, Token::Space)));
        assert_eq!(
            iter.next().unwrap_err(),
            ParseError::new(InvalidToken, 'a', 2)
        );
    }
}
