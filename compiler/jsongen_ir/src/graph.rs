//! Validated type graph.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{TypeDesc, TypeId, TypeKind};

/// Structural problems found while building a `TypeGraph`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("type {from} references {to}, which is not part of the graph")]
    DanglingReference { from: TypeId, to: TypeId },
    #[error("record type {id} has no name")]
    UnnamedRecord { id: TypeId },
    #[error("root {id} (`{ty}`) is not a record type")]
    RootNotRecord { id: TypeId, ty: String },
    #[error("type {id} contains itself without passing through a record")]
    InfiniteType { id: TypeId },
    #[error("type {id} was reserved but never defined")]
    Undefined { id: TypeId },
}

/// Serialized form of a graph, validated into a `TypeGraph`.
#[derive(Deserialize)]
struct RawTypeGraph {
    types: Vec<TypeDesc>,
    #[serde(default)]
    roots: Vec<TypeId>,
}

/// Arena of type descriptors plus the records generation starts from.
///
/// Every `TypeId` stored inside the graph is in range, every record is
/// named, and every cycle passes through at least one record. Indexing
/// with an id from another graph panics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTypeGraph")]
pub struct TypeGraph {
    types: Vec<TypeDesc>,
    roots: Vec<TypeId>,
}

impl TryFrom<RawTypeGraph> for TypeGraph {
    type Error = GraphError;

    fn try_from(raw: RawTypeGraph) -> Result<Self, Self::Error> {
        TypeGraph::new(raw.types, raw.roots)
    }
}

impl TypeGraph {
    /// Validate and wrap a list of descriptors.
    pub fn new(types: Vec<TypeDesc>, roots: Vec<TypeId>) -> Result<Self, GraphError> {
        let graph = TypeGraph { types, roots };
        graph.validate()?;
        Ok(graph)
    }

    /// Look up a descriptor.
    pub fn get(&self, id: TypeId) -> Option<&TypeDesc> {
        self.types.get(id.index())
    }

    /// Explicit roots, in declaration order.
    pub fn roots(&self) -> &[TypeId] {
        &self.roots
    }

    /// Roots to generate: the explicit roots, or every record when none
    /// were declared.
    pub fn effective_roots(&self) -> Vec<TypeId> {
        if self.roots.is_empty() {
            self.iter()
                .filter(|(_, desc)| desc.is_record())
                .map(|(id, _)| id)
                .collect()
        } else {
            self.roots.clone()
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all descriptors with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDesc)> {
        self.types.iter().enumerate().map(|(i, desc)| (Self::id_at(i), desc))
    }

    /// Render a type for diagnostics, e.g. `Map<i32, String>`.
    pub fn display(&self, id: TypeId) -> String {
        let Some(desc) = self.get(id) else {
            return format!("<unknown {id}>");
        };
        if let Some(name) = &desc.name {
            return name.clone();
        }
        match &desc.kind {
            TypeKind::Scalar(kind) => kind.rust_type().to_string(),
            TypeKind::Record(_) => format!("<record {id}>"),
            TypeKind::Sequence { element } => format!("Vec<{}>", self.display(*element)),
            TypeKind::Map { key, value } => {
                format!("Map<{}, {}>", self.display(*key), self.display(*value))
            }
            TypeKind::Optional {
                element,
                boxed: false,
            } => format!("Option<{}>", self.display(*element)),
            TypeKind::Optional {
                element,
                boxed: true,
            } => format!("Option<Box<{}>>", self.display(*element)),
            TypeKind::Any { methods } if methods.is_empty() => "dyn Any".to_string(),
            TypeKind::Any { methods } => format!("dyn {{{}}}", methods.join(", ")),
            TypeKind::Custom => format!("<custom {id}>"),
        }
    }

    fn id_at(index: usize) -> TypeId {
        // Construction guarantees the arena fits in u32 ids.
        TypeId::new(u32::try_from(index).unwrap_or(u32::MAX))
    }

    fn validate(&self) -> Result<(), GraphError> {
        for (id, desc) in self.iter() {
            for to in desc.kind.references() {
                if self.get(to).is_none() {
                    return Err(GraphError::DanglingReference { from: id, to });
                }
            }
            if desc.is_record() && desc.name.is_none() {
                return Err(GraphError::UnnamedRecord { id });
            }
        }

        for &root in &self.roots {
            match self.get(root) {
                Some(desc) if desc.is_record() => {}
                Some(_) => {
                    return Err(GraphError::RootNotRecord {
                        id: root,
                        ty: self.display(root),
                    })
                }
                None => {
                    return Err(GraphError::DanglingReference {
                        from: root,
                        to: root,
                    })
                }
            }
        }

        self.check_acyclic_shapes()
    }

    /// Reject cycles that never cross a record boundary (`Vec<Self>` with
    /// no record in between). Encoding such a type would never terminate.
    fn check_acyclic_shapes(&self) -> Result<(), GraphError> {
        #[derive(Copy, Clone, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.types.len()];
        for (start, desc) in self.iter() {
            if desc.is_record() || marks[start.index()] != Mark::Unvisited {
                continue;
            }
            // Iterative DFS: (node, next reference index).
            let mut stack = vec![(start, 0usize)];
            marks[start.index()] = Mark::InProgress;
            while let Some(top) = stack.last_mut() {
                let (node, cursor) = *top;
                top.1 += 1;
                let refs = self.types[node.index()].kind.references();
                if let Some(&child) = refs.get(cursor) {
                    if self.types[child.index()].is_record() {
                        continue;
                    }
                    match marks[child.index()] {
                        Mark::InProgress => return Err(GraphError::InfiniteType { id: child }),
                        Mark::Done => {}
                        Mark::Unvisited => {
                            marks[child.index()] = Mark::InProgress;
                            stack.push((child, 0));
                        }
                    }
                } else {
                    marks[node.index()] = Mark::Done;
                    stack.pop();
                }
            }
        }
        Ok(())
    }
}

impl Index<TypeId> for TypeGraph {
    type Output = TypeDesc;

    #[inline]
    fn index(&self, id: TypeId) -> &TypeDesc {
        &self.types[id.index()]
    }
}
