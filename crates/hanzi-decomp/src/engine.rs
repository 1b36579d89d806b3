// Decomposition engine: the four component walks over the decomposition table
//
// Each view has its own termination and dedup rule, so each is a separate
// walk:
//
//   once        immediate components, numeric tokens masked
//   radical     descend until a radical or a leaf, dedup, numerics masked
//   graphical   descend to leaves ignoring radicals, numerics resolved, no dedup
//   radical_up  like radical, also emitting every compound passed through
//
// A `Trail` holds the tokens currently being expanded. Tables are validated
// acyclic when built, so the trail only fires if that invariant is broken.

use log::{debug, trace};

use hanzi_core::character::{contains_hanzi, is_numeric_token, single_char, strip_whitespace};
use hanzi_core::decomposition::{
    ComponentList, Decomposition, DecompositionMap, DecompositionResult, NO_GLYPH,
};
use hanzi_core::enums::DecompositionMode;
use hanzi_core::{HanziError, Result};

use crate::radicals::RadicalTable;
use crate::table::DecompositionTable;

/// Answers decomposition queries over an immutable table pair.
#[derive(Debug, Clone)]
pub struct DecompositionEngine {
    table: DecompositionTable,
    radicals: RadicalTable,
}

/// Tokens on the current expansion path.
struct Trail<'a> {
    path: Vec<&'a str>,
}

impl<'a> Trail<'a> {
    fn starting_at(root: &'a str) -> Self {
        Self { path: vec![root] }
    }

    fn enter(&mut self, token: &'a str) -> Result<()> {
        if self.path.contains(&token) {
            return Err(HanziError::CyclicDecomposition(token.to_string()));
        }
        self.path.push(token);
        Ok(())
    }

    fn leave(&mut self) {
        self.path.pop();
    }
}

impl DecompositionEngine {
    pub fn new(table: DecompositionTable, radicals: RadicalTable) -> Self {
        Self { table, radicals }
    }

    /// Parse both sources and build an engine.
    pub fn from_sources(decomposition: &str, radicals_json: &str) -> Result<Self> {
        Ok(Self::new(
            DecompositionTable::parse(decomposition)?,
            RadicalTable::from_json(radicals_json)?,
        ))
    }

    pub fn table(&self) -> &DecompositionTable {
        &self.table
    }

    pub fn radicals(&self) -> &RadicalTable {
        &self.radicals
    }

    pub fn is_radical(&self, character: &str) -> bool {
        self.radicals.is_radical(character)
    }

    pub fn get_radical_meaning(&self, character: &str) -> Option<&str> {
        self.radicals.meaning(character)
    }

    /// Raw component tokens of a table entry. Atomic entries, entries with no
    /// components and characters missing from the table decompose to
    /// themselves.
    pub fn get_components<'a>(&'a self, character: &'a str) -> Vec<&'a str> {
        match self.table.get(character) {
            Some(entry) if entry.kind.is_compound() && !entry.components.is_empty() => {
                entry.components.iter().map(String::as_str).collect()
            }
            _ => vec![character],
        }
    }

    // -----------------------------------------------------------------------
    // Query surface
    // -----------------------------------------------------------------------

    /// Decompose one character, either into every view (`mode = None`) or into
    /// the requested view only.
    ///
    /// Surrounding whitespace is trimmed. Empty input and input holding more
    /// than one character are rejected. Characters outside the CJK blocks are
    /// accepted and, lacking a table entry, decompose to themselves.
    pub fn decompose(
        &self,
        character: &str,
        mode: Option<DecompositionMode>,
    ) -> Result<DecompositionResult> {
        let character = character.trim();
        if character.is_empty() {
            return Err(HanziError::InvalidInput("empty character".to_string()));
        }
        if single_char(character).is_none() {
            return Err(HanziError::InvalidInput(format!(
                "{character} is more than one character"
            )));
        }

        let result = match mode {
            None => DecompositionResult::Full(Decomposition {
                character: character.to_string(),
                once: self.once_decomposition(character),
                radical: self.radical_decomposition(character)?,
                graphical: self.graphical_decomposition(character)?,
                radical_up: self.radical_up_decomposition(character)?,
            }),
            Some(mode) => DecompositionResult::Single(ComponentList {
                character: character.to_string(),
                mode,
                components: self.decompose_view(character, mode)?,
            }),
        };
        Ok(result)
    }

    /// One view of `character`, without input validation.
    pub fn decompose_view(&self, character: &str, mode: DecompositionMode) -> Result<Vec<String>> {
        match mode {
            DecompositionMode::Once => Ok(self.once_decomposition(character)),
            DecompositionMode::Radical => self.radical_decomposition(character),
            DecompositionMode::Graphical => self.graphical_decomposition(character),
            DecompositionMode::RadicalUp => self.radical_up_decomposition(character),
        }
    }

    /// Decompose every distinct character of `text` in first-occurrence
    /// order. Whitespace is removed first; the text must contain at least one
    /// CJK Unified Ideograph.
    pub fn decompose_many(
        &self,
        text: &str,
        mode: Option<DecompositionMode>,
    ) -> Result<DecompositionMap> {
        if !contains_hanzi(text) {
            return Err(HanziError::NotHanziCharacter(text.to_string()));
        }

        let mut map = DecompositionMap::new();
        for c in strip_whitespace(text).chars() {
            let key = c.to_string();
            if map.contains_key(&key) {
                continue;
            }
            let result = self.decompose(&key, mode)?;
            map.insert_if_absent(key, result);
        }
        debug!("decomposed {} distinct characters", map.len());
        Ok(map)
    }

    // -----------------------------------------------------------------------
    // The four views
    // -----------------------------------------------------------------------

    /// Immediate components with numeric tokens masked. Not deduplicated.
    pub fn once_decomposition(&self, character: &str) -> Vec<String> {
        self.get_components(character)
            .into_iter()
            .map(|c| mask(c).to_string())
            .collect()
    }

    /// Components down to the first radical or leaf on each branch.
    pub fn radical_decomposition(&self, character: &str) -> Result<Vec<String>> {
        let mut out = Vec::new();
        let mut trail = Trail::starting_at(character);
        self.radical_walk(character, &mut trail, &mut out)?;
        Ok(into_owned(out))
    }

    /// Leaf components ignoring radical status, numeric tokens resolved to
    /// glyphs. Repeated leaves are kept.
    pub fn graphical_decomposition(&self, character: &str) -> Result<Vec<String>> {
        let mut out = Vec::new();
        let mut trail = Trail::starting_at(character);
        self.graphical_walk(character, &mut trail, &mut out)?;
        Ok(into_owned(out))
    }

    /// The radical view plus every compound passed through on the way down,
    /// each compound listed before its own components. The queried character
    /// itself is not listed unless it is a radical or a leaf.
    pub fn radical_up_decomposition(&self, character: &str) -> Result<Vec<String>> {
        let mut out = Vec::new();
        let mut trail = Trail::starting_at(character);
        self.radical_up_walk(character, true, &mut trail, &mut out)?;
        Ok(into_owned(out))
    }

    fn radical_walk<'a>(
        &'a self,
        token: &'a str,
        trail: &mut Trail<'a>,
        out: &mut Vec<&'a str>,
    ) -> Result<()> {
        if self.is_radical(token) {
            push_unique(out, token);
            return Ok(());
        }
        let components = self.get_components(token);
        if components.len() != 2 {
            push_unique(out, mask(token));
            return Ok(());
        }
        for component in components {
            trail.enter(component)?;
            self.radical_walk(component, trail, out)?;
            trail.leave();
        }
        Ok(())
    }

    fn radical_up_walk<'a>(
        &'a self,
        token: &'a str,
        is_root: bool,
        trail: &mut Trail<'a>,
        out: &mut Vec<&'a str>,
    ) -> Result<()> {
        if self.is_radical(token) {
            push_unique(out, token);
            return Ok(());
        }
        let components = self.get_components(token);
        if components.len() != 2 {
            push_unique(out, mask(token));
            return Ok(());
        }
        if !is_root {
            push_unique(out, mask(token));
        }
        for component in components {
            trail.enter(component)?;
            self.radical_up_walk(component, false, trail, out)?;
            trail.leave();
        }
        Ok(())
    }

    fn graphical_walk<'a>(
        &'a self,
        token: &'a str,
        trail: &mut Trail<'a>,
        out: &mut Vec<&'a str>,
    ) -> Result<()> {
        let components = self.get_components(token);
        if components.len() == 2 {
            for component in components {
                trail.enter(component)?;
                self.graphical_walk(component, trail, out)?;
                trail.leave();
            }
        } else if is_numeric_token(token) {
            self.resolve_numeric(token, trail, out)?;
        } else {
            out.push(token);
        }
        Ok(())
    }

    /// Unwind a numeric back-reference until only glyphs remain. A reference
    /// with no entry of its own has no glyph to offer.
    fn resolve_numeric<'a>(
        &'a self,
        number: &'a str,
        trail: &mut Trail<'a>,
        out: &mut Vec<&'a str>,
    ) -> Result<()> {
        for component in self.get_components(number) {
            if !is_numeric_token(component) {
                out.push(component);
            } else if component == number {
                debug!("numeric reference {number} has no glyph");
                out.push(NO_GLYPH);
            } else {
                trace!("resolving {number} through {component}");
                trail.enter(component)?;
                self.resolve_numeric(component, trail, out)?;
                trail.leave();
            }
        }
        Ok(())
    }
}

/// Replace a numeric back-reference with the missing-glyph sentinel.
fn mask(token: &str) -> &str {
    if is_numeric_token(token) {
        NO_GLYPH
    } else {
        token
    }
}

fn push_unique<'a>(out: &mut Vec<&'a str>, token: &'a str) {
    if !out.contains(&token) {
        out.push(token);
    }
}

fn into_owned(tokens: Vec<&str>) -> Vec<String> {
    tokens.into_iter().map(str::to_string).collect()
}
