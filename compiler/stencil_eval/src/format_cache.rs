//! Process-wide cache of `number` and `time` formatters.
//!
//! Building a formatter parses and validates its pattern, so each distinct
//! pattern is built once and shared: every template that uses `".3f"`
//! holds the same `Arc<Formatter>`.
//!
//! # Thread Safety
//! Lookups take a read lock. A miss takes the write lock and checks again
//! before building, so racing first uses store exactly one formatter.

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use stencil_ir::FormatFamily;

use crate::format::{FormatError, Formatter};

/// Formatters keyed by `(family, pattern)`.
///
/// Entries keep their construction order; [`FormatCache::index_of`] is a
/// position in [`FormatCache::entries`].
pub struct FormatCache {
    state: RwLock<CacheState>,
}

#[derive(Default)]
struct CacheState {
    /// Pattern to entry index, one map per family.
    number: FxHashMap<String, usize>,
    time: FxHashMap<String, usize>,
    entries: Vec<Arc<Formatter>>,
}

impl CacheState {
    fn index(&self, family: FormatFamily) -> &FxHashMap<String, usize> {
        match family {
            FormatFamily::Number => &self.number,
            FormatFamily::Time => &self.time,
        }
    }

    fn index_mut(&mut self, family: FormatFamily) -> &mut FxHashMap<String, usize> {
        match family {
            FormatFamily::Number => &mut self.number,
            FormatFamily::Time => &mut self.time,
        }
    }

    fn lookup(&self, family: FormatFamily, pattern: &str) -> Option<(usize, &Arc<Formatter>)> {
        let &index = self.index(family).get(pattern)?;
        self.entries.get(index).map(|formatter| (index, formatter))
    }
}

static GLOBAL: OnceLock<Arc<FormatCache>> = OnceLock::new();

impl FormatCache {
    pub fn new() -> Self {
        FormatCache {
            state: RwLock::new(CacheState::default()),
        }
    }

    /// The process-wide cache, created on first use.
    pub fn global() -> Arc<FormatCache> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(FormatCache::new())))
    }

    /// Return the formatter for `pattern`, building and storing it on first
    /// request.
    pub fn get_or_insert(
        &self,
        family: FormatFamily,
        pattern: &str,
    ) -> Result<Arc<Formatter>, FormatError> {
        self.get_or_insert_indexed(family, pattern)
            .map(|(_, formatter)| formatter)
    }

    /// Like [`FormatCache::get_or_insert`], also returning the formatter's
    /// position in [`FormatCache::entries`] as of the same lookup.
    pub fn get_or_insert_indexed(
        &self,
        family: FormatFamily,
        pattern: &str,
    ) -> Result<(usize, Arc<Formatter>), FormatError> {
        // Fast path: already built
        if let Some((index, formatter)) = self.state.read().lookup(family, pattern) {
            return Ok((index, Arc::clone(formatter)));
        }

        let mut state = self.state.write();

        // Double-check after acquiring write lock
        if let Some((index, formatter)) = state.lookup(family, pattern) {
            return Ok((index, Arc::clone(formatter)));
        }

        let formatter = Arc::new(Formatter::parse(family, pattern)?);
        let index = state.entries.len();
        state.entries.push(Arc::clone(&formatter));
        state.index_mut(family).insert(pattern.to_string(), index);
        tracing::debug!(%family, pattern, index, "cached formatter");
        Ok((index, formatter))
    }

    /// The stored formatter, without building one.
    pub fn get(&self, family: FormatFamily, pattern: &str) -> Option<Arc<Formatter>> {
        self.state
            .read()
            .lookup(family, pattern)
            .map(|(_, formatter)| Arc::clone(formatter))
    }

    /// Position of the formatter in [`FormatCache::entries`].
    pub fn index_of(&self, family: FormatFamily, pattern: &str) -> Option<usize> {
        self.state.read().index(family).get(pattern).copied()
    }

    /// All stored formatters, in construction order.
    pub fn entries(&self) -> Vec<Arc<Formatter>> {
        self.state.read().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry of both families.
    ///
    /// Compiled templates keep the formatters they already hold; later
    /// lookups build fresh ones.
    pub fn clear(&self) {
        let mut state = self.state.write();
        let dropped = state.entries.len();
        *state = CacheState::default();
        tracing::debug!(dropped, "cleared format cache");
    }
}

impl Default for FormatCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormatCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("FormatCache")
            .field("numbers", &state.number.len())
            .field("times", &state.time.len())
            .finish()
    }
}
