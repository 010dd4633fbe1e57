//! Lexer for PGN movetext (everything after the tag section).

use tracing::trace;

use crate::errors::{ParseError, ParseResult};
use crate::game_state::game::GameResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{...}` or `;...` comment, trimmed.
    Comment(String),
    /// `$n`
    Nag(u8),
    /// `n.` (White) or `n...` (Black).
    MoveNumber { number: u32, black: bool },
    OpenVariation,
    CloseVariation,
    Result(GameResult),
    /// A move in SAN, possibly with an annotation or `e.p.` marker attached.
    San(String),
}

const RESULT_TOKENS: [&str; 3] = ["1-0", "0-1", "1/2-1/2"];

#[inline]
fn is_san_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '=' | '+' | '#' | 'x' | '-')
}

pub fn tokenize(movetext: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer { text: movetext, pos: 0 };
    let mut tokens = Vec::new();

    loop {
        lexer.skip_whitespace();
        let Some(ch) = lexer.peek() else {
            break;
        };

        // `1. ... e5` spells a Black move number in two pieces.
        if ch == '.' {
            let offset = lexer.pos;
            let dots = lexer.take_while(|c| c == '.').len();
            match tokens.last_mut() {
                Some(Token::MoveNumber { black, .. }) if dots >= 2 && !*black => *black = true,
                _ => return Err(ParseError::UnexpectedCharacter { character: '.', offset }),
            }
            continue;
        }

        tokens.push(lexer.next_token(ch)?);
    }

    trace!(count = tokens.len(), "tokenized movetext");
    Ok(tokens)
}

struct Lexer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    #[inline]
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !predicate(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn next_token(&mut self, ch: char) -> ParseResult<Token> {
        let offset = self.pos;
        let rest = self.rest();

        match ch {
            '{' => {
                let close = rest.find('}').ok_or(ParseError::UnterminatedComment { offset })?;
                self.pos += close + 1;
                Ok(Token::Comment(rest[1..close].trim().to_owned()))
            }
            ';' => {
                let end = rest.find('\n').unwrap_or(rest.len());
                self.pos += end;
                Ok(Token::Comment(rest[1..end].trim().to_owned()))
            }
            '(' => {
                self.pos += 1;
                Ok(Token::OpenVariation)
            }
            ')' => {
                self.pos += 1;
                Ok(Token::CloseVariation)
            }
            '*' => {
                self.pos += 1;
                Ok(Token::Result(GameResult::Ongoing))
            }
            '$' => {
                self.pos += 1;
                let digits = self.take_while(|c| c.is_ascii_digit());
                digits.parse::<u8>().map(Token::Nag).map_err(|_| ParseError::InvalidNag {
                    nag: format!("${digits}"),
                })
            }
            _ if ch.is_ascii_digit() => self.number_or_result(offset),
            _ if ch.is_ascii_alphabetic() => Ok(Token::San(self.san())),
            _ => Err(ParseError::UnexpectedCharacter { character: ch, offset }),
        }
    }

    fn number_or_result(&mut self, offset: usize) -> ParseResult<Token> {
        let rest = self.rest();

        if let Some(result) = RESULT_TOKENS.iter().find(|token| rest.starts_with(**token)) {
            self.pos += result.len();
            return GameResult::from_token(result)
                .map(Token::Result)
                .ok_or(ParseError::UnexpectedCharacter { character: '0', offset });
        }
        if rest.starts_with("0-0") {
            return Ok(Token::San(self.san()));
        }

        let digits = self.take_while(|c| c.is_ascii_digit());
        let unexpected = ParseError::UnexpectedCharacter {
            character: digits.chars().next().unwrap_or('0'),
            offset,
        };
        let number = digits.parse::<u32>().map_err(|_| unexpected.clone())?;

        match self.take_while(|c| c == '.').len() {
            0 => Err(unexpected),
            1 => Ok(Token::MoveNumber { number, black: false }),
            _ => Ok(Token::MoveNumber { number, black: true }),
        }
    }

    /// Move text plus any attached annotation or `e.p.` marker, which may
    /// also follow after whitespace.
    fn san(&mut self) -> String {
        let start = self.pos;

        loop {
            let rest = self.rest();
            if rest.starts_with("e.p.") {
                self.pos += 4;
                break;
            }
            match rest.chars().next() {
                Some(c) if is_san_char(c) => self.pos += c.len_utf8(),
                _ => break,
            }
        }
        self.take_while(|c| c == '!' || c == '?');

        let rest = self.rest();
        let detached = rest.trim_start();
        let gap = rest.len() - detached.len();
        if detached.starts_with("e.p.") {
            self.pos += gap + 4;
        } else if detached.starts_with(['!', '?']) {
            self.pos += gap;
            self.take_while(|c| c == '!' || c == '?');
        }

        self.text[start..self.pos].to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::{tokenize, Token};
    use crate::errors::ParseError;
    use crate::game_state::game::GameResult;

    fn san(text: &str) -> Token {
        Token::San(text.to_owned())
    }

    #[test]
    fn tokenizes_basic_movetext() {
        let tokens = tokenize("1. e4 e5 2.Nf3 {Best} $1 (2. f4 exf4) 2... Nc6 1-0")
            .expect("movetext should tokenize");
        assert_eq!(
            tokens,
            vec![
                Token::MoveNumber { number: 1, black: false },
                san("e4"),
                san("e5"),
                Token::MoveNumber { number: 2, black: false },
                san("Nf3"),
                Token::Comment("Best".to_owned()),
                Token::Nag(1),
                Token::OpenVariation,
                Token::MoveNumber { number: 2, black: false },
                san("f4"),
                san("exf4"),
                Token::CloseVariation,
                Token::MoveNumber { number: 2, black: true },
                san("Nc6"),
                Token::Result(GameResult::WhiteWins),
            ]
        );
    }

    #[test]
    fn results_and_castling_are_distinguished() {
        let tokens = tokenize("O-O 0-0-0 0-1 1/2-1/2 *").expect("movetext should tokenize");
        assert_eq!(
            tokens,
            vec![
                san("O-O"),
                san("0-0-0"),
                Token::Result(GameResult::BlackWins),
                Token::Result(GameResult::Draw),
                Token::Result(GameResult::Ongoing),
            ]
        );
    }

    #[test]
    fn attached_markers_stay_with_the_move() {
        let tokens = tokenize("5. exd6 e.p. Qxd6!? 6. Bb5 ?").expect("movetext should tokenize");
        assert_eq!(
            tokens,
            vec![
                Token::MoveNumber { number: 5, black: false },
                san("exd6 e.p."),
                san("Qxd6!?"),
                Token::MoveNumber { number: 6, black: false },
                san("Bb5 ?"),
            ]
        );
    }

    #[test]
    fn spaced_ellipsis_marks_black_move() {
        let tokens = tokenize("1. ... e5 ; line comment\n").expect("movetext should tokenize");
        assert_eq!(
            tokens,
            vec![
                Token::MoveNumber { number: 1, black: true },
                san("e5"),
                Token::Comment("line comment".to_owned()),
            ]
        );
    }

    #[test]
    fn lexical_errors() {
        assert_eq!(
            tokenize("1. e4 {never closed"),
            Err(ParseError::UnterminatedComment { offset: 6 })
        );
        assert_eq!(
            tokenize("1. e4 @"),
            Err(ParseError::UnexpectedCharacter { character: '@', offset: 6 })
        );
        assert_eq!(
            tokenize("1. e4 $300"),
            Err(ParseError::InvalidNag { nag: "$300".to_owned() })
        );
    }
}
