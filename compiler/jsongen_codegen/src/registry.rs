//! Record registry and worklist.
//!
//! Each record type gets one encoder function per generation run. The
//! registry hands out stable function names, remembers which records have
//! been seen, and queues newly discovered ones so the generator can emit
//! them later instead of recursing into them.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use jsongen_ir::{TypeGraph, TypeId};

use crate::naming::snake_case;
use crate::GenError;

/// Identity of one record's generated encoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Encoder function name, unique within the run.
    pub function: String,
    /// Canonical type reference for generated signatures.
    pub type_ref: String,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum State {
    Pending,
    Generated,
}

/// Function names and worklist for one generation run.
pub struct TypeRegistry {
    prefix: String,
    entries: FxHashMap<TypeId, (RegistryEntry, State)>,
    taken: FxHashSet<String>,
    queue: VecDeque<TypeId>,
}

impl TypeRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        TypeRegistry {
            prefix: prefix.into(),
            entries: FxHashMap::default(),
            taken: FxHashSet::default(),
            queue: VecDeque::new(),
        }
    }

    /// Reference a record, queueing it for generation on first sight.
    pub fn request(&mut self, graph: &TypeGraph, id: TypeId) -> Result<&RegistryEntry, GenError> {
        if !self.entries.contains_key(&id) {
            let entry = self.make_entry(graph, id)?;
            trace!(function = %entry.function, "queued record");
            self.entries.insert(id, (entry, State::Pending));
            self.queue.push_back(id);
        }
        Ok(self.entry_ref(id))
    }

    /// Claim a record for generation right now, registering it if needed.
    ///
    /// A claimed record is never handed out by `next_pending`.
    pub fn claim(&mut self, graph: &TypeGraph, id: TypeId) -> Result<RegistryEntry, GenError> {
        if let Some((entry, state)) = self.entries.get_mut(&id) {
            *state = State::Generated;
            return Ok(entry.clone());
        }
        let entry = self.make_entry(graph, id)?;
        self.entries.insert(id, (entry.clone(), State::Generated));
        Ok(entry)
    }

    /// Next queued record that has not been claimed yet.
    pub fn next_pending(&mut self) -> Option<TypeId> {
        while let Some(id) = self.queue.pop_front() {
            if let Some((_, state)) = self.entries.get(&id) {
                if *state == State::Pending {
                    return Some(id);
                }
            }
        }
        None
    }

    pub fn get(&self, id: TypeId) -> Option<&RegistryEntry> {
        self.entries.get(&id).map(|(entry, _)| entry)
    }

    /// Number of distinct records seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_ref(&self, id: TypeId) -> &RegistryEntry {
        // Only called after insertion.
        &self.entries[&id].0
    }

    fn make_entry(&mut self, graph: &TypeGraph, id: TypeId) -> Result<RegistryEntry, GenError> {
        let desc = graph.get(id).filter(|desc| desc.is_record());
        let Some(type_ref) = desc.and_then(|desc| desc.name.clone()) else {
            return Err(GenError::NotARecord {
                ty: graph.display(id),
            });
        };

        let base = format!("{}{}", self.prefix, snake_case(short_name(&type_ref)));
        let mut function = base.clone();
        let mut suffix = 2;
        while !self.taken.insert(function.clone()) {
            function = format!("{base}_{suffix}");
            suffix += 1;
        }
        Ok(RegistryEntry { function, type_ref })
    }
}

/// Last path segment without generic arguments:
/// `crate::model::Page<User>` -> `Page`.
fn short_name(type_ref: &str) -> &str {
    let without_generics = type_ref.split('<').next().unwrap_or(type_ref);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

#[cfg(test)]
mod tests;
