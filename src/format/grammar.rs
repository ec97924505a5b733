//! A small hand-written scanner for the color notations.

use crate::color::Component;

use super::{Accepts, ChannelSpec, Token, Unit, ALPHA};

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn is_done(&self) -> bool {
        self.rest.is_empty()
    }

    /// Skip whitespace and return true if any was consumed.
    fn skip_whitespace(&mut self) -> bool {
        let trimmed = self.rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        let skipped = trimmed.len() != self.rest.len();
        self.rest = trimmed;
        skipped
    }

    fn eat(&mut self, c: char) -> bool {
        match self.rest.strip_prefix(c) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        match self.rest.get(..keyword.len()) {
            Some(head) if head.eq_ignore_ascii_case(keyword) => {
                self.rest = &self.rest[keyword.len()..];
                true
            }
            _ => false,
        }
    }

    fn digits(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        digits
    }

    /// `[+-]?(digits[.digits]|.digits)` followed by an optional unit.
    fn token(&mut self) -> Option<Token> {
        let start = self.rest;

        if !self.eat('+') {
            self.eat('-');
        }

        if self.digits().is_empty() {
            if !self.eat('.') || self.digits().is_empty() {
                return None;
            }
        } else if self.eat('.') && self.digits().is_empty() {
            return None;
        }

        let number = &start[..start.len() - self.rest.len()];
        let value = number.parse::<Component>().ok()?;

        let unit = if self.eat('%') {
            Unit::Percent
        } else {
            let end = self
                .rest
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(self.rest.len());
            let (suffix, rest) = self.rest.split_at(end);
            self.rest = rest;
            match suffix.to_ascii_lowercase().as_str() {
                "" => Unit::Number,
                "deg" => Unit::Degrees,
                "rad" => Unit::Radians,
                "grad" => Unit::Gradians,
                "turn" => Unit::Turns,
                _ => return None,
            }
        };

        Some(Token { value, unit })
    }

    fn token_for(&mut self, accepts: Accepts) -> Option<Token> {
        self.token().filter(|token| token.is_accepted_by(accepts))
    }
}

/// `#` followed by 3, 4, 6 or 8 hex digits. Tokens are the channels on the
/// `[0..255]` scale followed by an alpha in `[0..1]` when present.
pub(super) fn hex(input: &str) -> Option<Vec<Token>> {
    let digits = input.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let values = match digits.len() {
        3 | 4 => digits
            .chars()
            .map(|c| c.to_digit(16).map(|v| v * 17))
            .collect::<Option<Vec<_>>>()?,
        6 | 8 => (0..digits.len())
            .step_by(2)
            .map(|i| u32::from_str_radix(&digits[i..i + 2], 16).ok())
            .collect::<Option<Vec<_>>>()?,
        _ => return None,
    };

    let mut tokens = values
        .iter()
        .map(|&v| Token::number(v as Component))
        .collect::<Vec<_>>();
    if let Some(alpha) = tokens.get_mut(3) {
        alpha.value /= 255.0;
    }

    Some(tokens)
}

/// A functional notation such as `rgb(0 0 0 / 50%)`. When `legacy` is set
/// the comma separated form is accepted as well.
pub(super) fn functional(
    input: &str,
    prefixes: &[&str],
    channels: &[ChannelSpec],
    legacy: bool,
) -> Option<Vec<Token>> {
    let mut scanner = Scanner::new(input);

    let opened = prefixes.iter().any(|prefix| {
        let mut probe = Scanner::new(input);
        let matched = probe.eat_keyword(prefix) && probe.eat('(');
        if matched {
            scanner = probe;
        }
        matched
    });
    if !opened {
        return None;
    }
    scanner.skip_whitespace();

    let (first, rest) = channels.split_first()?;
    let mut tokens = vec![scanner.token_for(first.accepts)?];

    let before_separator = scanner.rest;
    scanner.skip_whitespace();
    let commas = scanner.eat(',');
    if commas && !legacy {
        return None;
    }
    if !commas {
        scanner.rest = before_separator;
    }

    for (i, spec) in rest.iter().enumerate() {
        if commas {
            if i > 0 {
                scanner.skip_whitespace();
                if !scanner.eat(',') {
                    return None;
                }
            }
            scanner.skip_whitespace();
        } else if !scanner.skip_whitespace() {
            return None;
        }
        tokens.push(scanner.token_for(spec.accepts)?);
    }

    let had_space = scanner.skip_whitespace();
    if commas {
        if scanner.eat(',') {
            scanner.skip_whitespace();
            tokens.push(scanner.token_for(ALPHA.accepts)?);
            scanner.skip_whitespace();
        }
    } else if scanner.eat('/') {
        scanner.skip_whitespace();
        tokens.push(scanner.token_for(ALPHA.accepts)?);
        scanner.skip_whitespace();
    } else if had_space && !scanner.rest.starts_with(')') {
        tokens.push(scanner.token_for(ALPHA.accepts)?);
        scanner.skip_whitespace();
    }

    if !scanner.eat(')') || !scanner.is_done() {
        return None;
    }

    Some(tokens)
}
