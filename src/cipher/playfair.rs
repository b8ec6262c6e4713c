use super::{CipherKind, CipherMode};
use crate::error::{CipherError, Result};

const GRID: usize = 5;

/// Filler inserted between repeated letters and used for end padding
const FILLER: char = 'X';
/// Filler used when the letter being separated is itself the filler
const ALT_FILLER: char = 'Q';

/// 5x5 Playfair key square, I and J share a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    letters: [u8; GRID * GRID],
    /// (row, column) for each letter A-Z; J points at I's cell
    coords: [(u8, u8); 26],
}

impl KeySquare {
    /// Build the square from a keyword: key letters first (deduplicated,
    /// J merged into I), then the remaining alphabet.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CipherError::invalid_key(CipherKind::Playfair, "key is empty"));
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(CipherError::invalid_key(
                CipherKind::Playfair,
                format!("'{}' is not a letter", bad),
            ));
        }

        let mut letters = [0u8; GRID * GRID];
        let mut coords = [(0u8, 0u8); 26];
        let mut seen = [false; 26];
        let mut filled = 0;

        let candidates = raw
            .bytes()
            .map(|b| b.to_ascii_uppercase())
            .chain(b'A'..=b'Z')
            .map(|b| if b == b'J' { b'I' } else { b });

        for letter in candidates {
            let index = (letter - b'A') as usize;
            if seen[index] {
                continue;
            }
            seen[index] = true;
            letters[filled] = letter;
            coords[index] = ((filled / GRID) as u8, (filled % GRID) as u8);
            filled += 1;
        }
        debug_assert_eq!(filled, GRID * GRID);
        coords[(b'J' - b'A') as usize] = coords[(b'I' - b'A') as usize];

        Ok(Self { letters, coords })
    }

    /// Square rows, top to bottom
    pub fn rows(&self) -> Vec<String> {
        self.letters
            .chunks_exact(GRID)
            .map(|row| row.iter().map(|&b| b as char).collect())
            .collect()
    }

    fn locate(&self, c: char, position: usize) -> Result<(usize, usize)> {
        if !c.is_ascii_alphabetic() {
            return Err(CipherError::UnsupportedCharacter { ch: c, position });
        }
        let (row, col) = self.coords[(c.to_ascii_uppercase() as u8 - b'A') as usize];
        Ok((row as usize, col as usize))
    }

    fn at(&self, row: usize, col: usize) -> char {
        self.letters[row * GRID + col] as char
    }

    /// Substitute prepared digraphs. `start_offset` and the segment length
    /// must both be even or a pair would be split.
    pub(crate) fn apply(&self, text: &str, mode: CipherMode, start_offset: usize) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        if start_offset % 2 != 0 || chars.len() % 2 != 0 {
            return Err(CipherError::DigraphAlignment {
                offset: start_offset,
                len: chars.len(),
            });
        }

        let step = match mode {
            CipherMode::Encrypt => 1,
            CipherMode::Decrypt => GRID - 1,
        };

        let mut out = String::with_capacity(chars.len());
        for (pair, digraph) in chars.chunks_exact(2).enumerate() {
            let position = start_offset + pair * 2;
            let (r1, c1) = self.locate(digraph[0], position)?;
            let (r2, c2) = self.locate(digraph[1], position + 1)?;

            let (a, b) = if r1 == r2 {
                (
                    self.at(r1, (c1 + step) % GRID),
                    self.at(r2, (c2 + step) % GRID),
                )
            } else if c1 == c2 {
                (
                    self.at((r1 + step) % GRID, c1),
                    self.at((r2 + step) % GRID, c2),
                )
            } else {
                (self.at(r1, c2), self.at(r2, c1))
            };
            out.push(a);
            out.push(b);
        }
        Ok(out)
    }
}

fn filler_for(c: char) -> char {
    if c == FILLER {
        ALT_FILLER
    } else {
        FILLER
    }
}

/// Form Playfair digraphs over the whole text.
///
/// Letters are upper-cased and J becomes I. A repeated letter inside a pair
/// is split by a filler, and an odd trailing letter is padded with one.
/// Characters that are not letters are kept as-is so that `apply` reports
/// them with their position. That position is an offset into the prepared
/// text, fillers included, not into the text passed in here.
pub fn prepare_digraphs(text: &str) -> String {
    let chars: Vec<char> = text
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            upper => upper,
        })
        .collect();

    let mut out = String::with_capacity(chars.len() + chars.len() / 2 + 1);
    let mut i = 0;
    while i < chars.len() {
        let first = chars[i];
        match chars.get(i + 1) {
            Some(&second) if second != first => {
                out.push(first);
                out.push(second);
                i += 2;
            }
            _ => {
                out.push(first);
                out.push(filler_for(first));
                i += 1;
            }
        }
    }
    out
}
