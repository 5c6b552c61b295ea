use std::io::Write;
use std::str::{self, FromStr};

use crate::error::{Error, Result};

pub trait InputStream {
    fn token(&mut self) -> Option<&[u8]>;

    fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.token().ok_or(Error::UnexpectedEof { expected })?;
        str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .ok_or_else(|| Error::InvalidToken {
                token: String::from_utf8_lossy(token).into_owned(),
            })
    }
}

// cheap whitespace check, also treats control bytes as separators
#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Option<&[u8]> {
        let idx = self.iter().position(|&c| !is_whitespace(c))?;
        *self = &self[idx..];
        let idx = self
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.len());
        let (token, buf_new) = self.split_at(idx);
        *self = buf_new;
        Some(token)
    }
}

/// Directed graph as read from the input, with 0-based vertex ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub n: usize,
    pub edges: Vec<[u32; 2]>,
}

/// Reads `N M` followed by `M` pairs of 1-based vertex ids.
pub fn read_problem(mut input: &[u8]) -> Result<Problem> {
    let n: u32 = input.value("vertex count")?;
    let m: usize = input.value("edge count")?;
    let n = n as usize;

    let vertex = |input: &mut &[u8]| -> Result<u32> {
        let u: u64 = input.value("edge endpoint")?;
        if u == 0 || u > n as u64 {
            return Err(Error::VertexOutOfRange { vertex: u, n });
        }
        Ok(u as u32 - 1)
    };

    let mut edges = Vec::with_capacity(m.min(input.len() / 4 + 1));
    for _ in 0..m {
        let u = vertex(&mut input)?;
        let v = vertex(&mut input)?;
        edges.push([u, v]);
    }
    Ok(Problem { n, edges })
}

/// Writes the count, then the vertices as 1-based ids on one line.
pub fn write_answer(out: &mut impl Write, vertices: &[u32]) -> Result<()> {
    writeln!(out, "{}", vertices.len())?;
    for (i, u) in vertices.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{}", u + 1)?;
    }
    writeln!(out)?;
    Ok(())
}
