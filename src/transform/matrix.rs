//! Parser for resolved CSS transform values.
//!
//! Engines serialize any 2D computed transform as `matrix(a, b, c, d, tx, ty)`, or `none`
//! when no transform applies. Everything else is rejected with
//! [`GeomError::MalformedTransform`].

use crate::foundation::core::{Affine, Coeffs, TRANSFORM_NONE};
use crate::foundation::error::{GeomError, GeomResult};

const MATRIX_FN: &str = "matrix";
const MATRIX_ARGS: usize = 6;

/// Parse a resolved transform value into an affine transform.
pub fn parse_transform(value: &str) -> GeomResult<Affine> {
    if value.trim() == TRANSFORM_NONE {
        return Ok(Affine::IDENTITY);
    }
    let coeffs = parse_matrix(value).map_err(|e| GeomError::malformed(value, e.to_string()))?;
    Ok(Affine::new(coeffs))
}

#[derive(Debug, Clone, PartialEq)]
struct MatrixError {
    pos: usize,
    msg: String,
}

impl MatrixError {
    fn new(pos: usize, msg: impl Into<String>) -> Self {
        Self {
            pos,
            msg: msg.into(),
        }
    }
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at byte {})", self.msg, self.pos)
    }
}

fn parse_matrix(src: &str) -> Result<Coeffs, MatrixError> {
    let mut c = Cursor { src, pos: 0 };

    c.skip_ws();
    let name_start = c.pos;
    let name = c.ident();
    if name != MATRIX_FN {
        return Err(MatrixError::new(
            name_start,
            format!("expected '{MATRIX_FN}', found '{name}'"),
        ));
    }
    c.skip_ws();
    c.expect(b'(')?;

    let mut args = Vec::with_capacity(MATRIX_ARGS);
    loop {
        c.skip_ws();
        args.push(c.number()?);
        c.skip_ws();
        match c.peek() {
            Some(b',') => c.pos += 1,
            Some(b')') => {
                c.pos += 1;
                break;
            }
            Some(b) => {
                return Err(MatrixError::new(
                    c.pos,
                    format!("expected ',' or ')', found '{}'", b as char),
                ));
            }
            None => return Err(MatrixError::new(c.pos, "unterminated argument list")),
        }
    }

    c.skip_ws();
    if c.pos != src.len() {
        return Err(MatrixError::new(c.pos, "unexpected trailing input"));
    }

    <Coeffs>::try_from(args.as_slice()).map_err(|_| {
        MatrixError::new(
            name_start,
            format!("expected {MATRIX_ARGS} arguments, found {}", args.len()),
        )
    })
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn ident(&mut self) -> &'a str {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn expect(&mut self, want: u8) -> Result<(), MatrixError> {
        match self.peek() {
            Some(b) if b == want => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(MatrixError::new(
                self.pos,
                format!("expected '{}', found '{}'", want as char, b as char),
            )),
            None => Err(MatrixError::new(
                self.pos,
                format!("expected '{}', found end of input", want as char),
            )),
        }
    }

    // CSS <number>: [+-]? (digits ('.' digits)? | '.' digits) ([eE] [+-]? digits)?
    fn number(&mut self) -> Result<f64, MatrixError> {
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }

        let int_digits = self.eat_digits();
        if self.peek() == Some(b'.') {
            let dot = self.pos;
            self.pos += 1;
            if self.eat_digits() == 0 {
                if int_digits == 0 {
                    return Err(MatrixError::new(start, "expected number"));
                }
                return Err(MatrixError::new(dot, "expected digits after '.'"));
            }
        } else if int_digits == 0 {
            return Err(MatrixError::new(start, "expected number"));
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            let e_pos = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                return Err(MatrixError::new(
                    e_pos,
                    "invalid number exponent (expected digits)",
                ));
            }
        }

        let text = &self.src[start..self.pos];
        let v: f64 = text
            .parse()
            .map_err(|_| MatrixError::new(start, format!("invalid number '{text}'")))?;
        if !v.is_finite() {
            return Err(MatrixError::new(start, format!("non-finite number '{text}'")));
        }
        Ok(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/matrix.rs"]
mod tests;
