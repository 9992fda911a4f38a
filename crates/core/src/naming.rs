//! Run-wide naming authority.
//!
//! Every generated identifier is allocated here so that two distinct originals
//! never end up with the same name within one [`NameKind`]. Collisions get a
//! numeric suffix in first-seen order: `Pet`, `Pet2`, `Pet3`.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Upper bound on the suffix search; only reachable with a resolver that maps
/// every candidate to the same name.
const MAX_SUFFIX: usize = 10_000;

/// Namespace of a generated identifier. Names in different kinds never collide
/// with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameKind {
    /// Client request functions.
    Client,
    /// Type names of the companion type output.
    Type,
    /// Validation schema constants.
    Schema,
    /// Mock request handlers.
    Handler,
    /// Mock data factories.
    Mock,
    /// Standalone files such as the operation index.
    File,
}

impl NameKind {
    /// Lowercase label used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            NameKind::Client => "client",
            NameKind::Type => "type",
            NameKind::Schema => "schema",
            NameKind::Handler => "handler",
            NameKind::Mock => "mock",
            NameKind::File => "file",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// The original name, suffixed if it collided (`Pet2`).
    pub original: String,
    /// The final identifier (`pet2Schema`).
    pub generated: String,
}

#[derive(Debug, Default)]
struct KindState {
    /// How many times each original base name has been allocated.
    seen: HashMap<String, usize>,
    /// Every generated identifier handed out so far.
    taken: HashSet<String>,
}

/// Collision-free identifier allocator, scoped per [`NameKind`].
#[derive(Debug, Default)]
pub struct NamingRegistrar {
    kinds: HashMap<NameKind, KindState>,
}

impl NamingRegistrar {
    /// An empty registrar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `original` verbatim (suffixed on collision).
    pub fn allocate(&mut self, original: &str, kind: NameKind) -> String {
        self.try_allocate(original, kind, |candidate| Some(candidate.to_string()))
            .map_or_else(|| original.to_string(), |allocation| allocation.generated)
    }

    /// Allocate a name for `original`, passing every candidate through
    /// `resolve` (casing, prefixes) and checking the *resolved* name for
    /// uniqueness.
    ///
    /// Returns `None` without touching any state when `resolve` yields nothing.
    pub fn try_allocate(
        &mut self,
        original: &str,
        kind: NameKind,
        mut resolve: impl FnMut(&str) -> Option<String>,
    ) -> Option<Allocation> {
        let state = self.kinds.entry(kind).or_default();
        let seen = state.seen.get(original).copied().unwrap_or(0);

        let mut suffix = seen;
        loop {
            let candidate = if suffix == 0 {
                original.to_string()
            } else {
                format!("{original}{}", suffix + 1)
            };
            let generated = resolve(&candidate)?;
            if !state.taken.contains(&generated) {
                state.seen.insert(original.to_string(), suffix + 1);
                state.taken.insert(generated.clone());
                return Some(Allocation {
                    original: candidate,
                    generated,
                });
            }
            suffix += 1;
            if suffix > MAX_SUFFIX {
                return None;
            }
        }
    }

    /// Number of allocations made for `original` in `kind`.
    pub fn seen(&self, original: &str, kind: NameKind) -> usize {
        self.kinds
            .get(&kind)
            .and_then(|state| state.seen.get(original).copied())
            .unwrap_or(0)
    }
}
