/// 単位文字列の構文解析。
///
/// ```text
/// unit    := product [ "/" "(" product ")" ]
/// product := factor { ("*" | " ") factor }
/// factor  := "1" | symbol [ "^" integer ]
/// ```
///
/// `*` または `/` を含む演算子形式では正の指数のみを許す（`kg*m^2/(s^2)`）。
/// 空白区切りの形式では符号付きの指数を許す（`m s^-2`）。指数 0 は常に不正。
/// 組み立てた次元の指数は `i8` に収まり、倍率は正の有限値でなければならない。
use super::Unit;
use super::symbols;
use crate::error::UnitError;

pub(super) fn parse_unit(input: &str) -> Result<Unit, UnitError> {
    let src = input.trim();
    if src.is_empty() {
        return Err(UnitError::Empty);
    }
    let mut parser = Parser {
        src,
        pos: 0,
        operator_form: src.contains(['*', '/']),
    };

    let numerator = parser.product()?;
    let unit = if parser.eat('/') {
        parser.skip_spaces();
        if !parser.eat('(') {
            return Err(UnitError::ExpectedParenthesis {
                position: parser.pos,
            });
        }
        let denominator = parser.product()?;
        parser.skip_spaces();
        if !parser.eat(')') {
            return Err(parser.unexpected());
        }
        numerator.checked_div(denominator)?
    } else {
        numerator
    };

    parser.skip_spaces();
    if parser.pos < src.len() {
        return Err(UnitError::TrailingInput {
            position: parser.pos,
        });
    }
    Unit::try_new(unit.scale(), unit.dimension())
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    operator_form: bool,
}

fn is_symbol_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '*' | '/' | '^' | '(' | ')')
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_spaces(&mut self) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
        self.pos > start
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek().filter(|&c| pred(c)) {
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    fn unexpected(&self) -> UnitError {
        match self.peek() {
            Some(ch) => UnitError::UnexpectedCharacter {
                ch,
                position: self.pos,
            },
            None => UnitError::MissingFactor { position: self.pos },
        }
    }

    fn product(&mut self) -> Result<Unit, UnitError> {
        self.skip_spaces();
        let mut unit = self.factor()?;
        loop {
            let spaced = self.skip_spaces();
            if self.eat('*') {
                self.skip_spaces();
                unit = unit.checked_mul(self.factor()?)?;
            } else if spaced && self.peek().is_some_and(is_symbol_char) {
                unit = unit.checked_mul(self.factor()?)?;
            } else {
                return Ok(unit);
            }
        }
    }

    fn factor(&mut self) -> Result<Unit, UnitError> {
        let symbol = self.take_while(is_symbol_char);
        if symbol.is_empty() {
            return Err(self.unexpected());
        }
        let base = if symbol == "1" {
            Unit::DIMENSIONLESS
        } else {
            let (scale, dimension) =
                symbols::lookup(symbol).ok_or_else(|| UnitError::UnknownSymbol {
                    symbol: symbol.to_string(),
                })?;
            Unit::new(scale, dimension)
        };

        if !self.eat('^') {
            return Ok(base);
        }
        let text = self.take_while(|c| c == '-' || c == '+' || c.is_ascii_digit());
        let exponent: i32 = text.parse().map_err(|_| UnitError::InvalidExponent {
            symbol: symbol.to_string(),
            exponent: text.to_string(),
        })?;
        if exponent == 0 {
            return Err(UnitError::ZeroExponent {
                symbol: symbol.to_string(),
            });
        }
        if self.operator_form && exponent < 0 {
            return Err(UnitError::NegativeExponent {
                symbol: symbol.to_string(),
                exponent,
            });
        }
        base.checked_powi(exponent).map_err(UnitError::from)
    }
}
