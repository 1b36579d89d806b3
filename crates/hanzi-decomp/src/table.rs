// Decomposition table: character -> structure code and component tokens
//
// Source format, one entry per line:
//
//   是:d(日,𤴓)
//   口:c()
//   092345:d(冖,092346)
//
// Keys are single glyphs or decimal back-reference numbers. The code `c`
// marks an atomic component; every other code describes how a compound is
// assembled and is kept verbatim.

use hashbrown::HashMap;
use log::{debug, info};

use hanzi_core::character::is_numeric_token;
use hanzi_core::{HanziError, Result};

const ORIGIN: &str = "decomposition";

/// Structure code of atomic (non-decomposable) entries.
const ATOMIC_CODE: &str = "c";

/// Structural kind of a decomposition entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecompositionKind {
    /// A terminal component; decomposes to itself.
    Atomic,
    /// A compound with its structure code (`a` across, `d` down, `s` surround, ...).
    Compound(String),
}

impl DecompositionKind {
    pub fn from_code(code: &str) -> Self {
        if code == ATOMIC_CODE {
            DecompositionKind::Atomic
        } else {
            DecompositionKind::Compound(code.to_string())
        }
    }

    pub fn code(&self) -> &str {
        match self {
            DecompositionKind::Atomic => ATOMIC_CODE,
            DecompositionKind::Compound(code) => code,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, DecompositionKind::Compound(_))
    }
}

/// One row of the decomposition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionEntry {
    pub kind: DecompositionKind,
    /// Component tokens in source order (glyphs or numeric back-references).
    pub components: Vec<String>,
}

/// Read-only character -> decomposition mapping.
///
/// Construction validates that no chain of expansions the engine can follow
/// returns to a token already being expanded, so every walk over a built
/// table terminates.
#[derive(Debug, Clone, Default)]
pub struct DecompositionTable {
    entries: HashMap<String, DecompositionEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

impl DecompositionTable {
    /// Parse the line-oriented table source. Blank lines are skipped; a later
    /// line for the same key replaces the earlier one.
    pub fn parse(source: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            entries.push(parse_line(line, idx + 1)?);
        }
        debug!("parsed {} decomposition lines", entries.len());
        Self::from_entries(entries)
    }

    /// Build a table from already-split entries and validate it.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, DecompositionEntry)>,
    {
        let table = Self {
            entries: entries.into_iter().collect(),
        };
        table.validate()?;
        info!("decomposition table loaded: {} entries", table.entries.len());
        Ok(table)
    }

    pub fn get(&self, key: &str) -> Option<&DecompositionEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Depth-first search over expansion edges; a grey node reached again is
    /// a cycle.
    fn validate(&self) -> Result<()> {
        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(self.entries.len());
        for key in self.entries.keys() {
            self.visit(key, &mut marks)?;
        }
        Ok(())
    }

    fn visit<'a>(&'a self, key: &'a str, marks: &mut HashMap<&'a str, Mark>) -> Result<()> {
        match marks.get(key) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::Visiting) => return Err(HanziError::CyclicDecomposition(key.to_string())),
            None => {}
        }
        marks.insert(key, Mark::Visiting);
        for next in self.expansion_edges(key) {
            self.visit(next, marks)?;
        }
        marks.insert(key, Mark::Done);
        Ok(())
    }

    /// Tokens a decomposition walk may expand directly after `key`.
    ///
    /// Two-component compounds expand into both components. A numeric entry
    /// additionally unwinds into its numeric components; a numeric entry that
    /// only names itself is a dangling reference, not an edge.
    fn expansion_edges<'a>(&'a self, key: &str) -> Vec<&'a str> {
        let Some(entry) = self.entries.get(key) else {
            return Vec::new();
        };
        if !entry.kind.is_compound() {
            return Vec::new();
        }
        if entry.components.len() == 2 {
            return entry.components.iter().map(String::as_str).collect();
        }
        if is_numeric_token(key) {
            return entry
                .components
                .iter()
                .map(String::as_str)
                .filter(|c| is_numeric_token(c) && *c != key)
                .collect();
        }
        Vec::new()
    }
}

/// Split one `KEY:CODE(C1,C2)` line.
fn parse_line(line: &str, line_no: usize) -> Result<(String, DecompositionEntry)> {
    let (key, rest) = line
        .split_once(':')
        .ok_or_else(|| HanziError::malformed(ORIGIN, line_no, "missing ':' separator"))?;
    if key.is_empty() {
        return Err(HanziError::malformed(ORIGIN, line_no, "empty character key"));
    }

    let open = rest
        .find('(')
        .ok_or_else(|| HanziError::malformed(ORIGIN, line_no, "missing '('"))?;
    let close = rest[open..]
        .find(')')
        .map(|i| open + i)
        .ok_or_else(|| HanziError::malformed(ORIGIN, line_no, "missing ')'"))?;

    let code = &rest[..open];
    if code.is_empty() {
        return Err(HanziError::malformed(ORIGIN, line_no, "empty structure code"));
    }

    let components = rest[open + 1..close]
        .split(',')
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    Ok((
        key.to_string(),
        DecompositionEntry {
            kind: DecompositionKind::from_code(code),
            components,
        },
    ))
}
