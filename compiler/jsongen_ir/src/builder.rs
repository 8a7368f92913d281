//! Incremental construction of a `TypeGraph`.
//!
//! Recursive types are built by reserving an id first and defining it once
//! its fields (which may mention the reserved id) are known:
//!
//! ```
//! use jsongen_ir::{FieldDesc, ScalarKind, TypeGraphBuilder};
//!
//! let mut b = TypeGraphBuilder::new();
//! let node = b.reserve();
//! let value = b.scalar(ScalarKind::Int64);
//! let next = b.boxed(node);
//! b.define_record(node, "crate::Node", vec![
//!     FieldDesc::new("value", value),
//!     FieldDesc::new("next", next),
//! ]);
//! b.root(node);
//! let graph = b.build().unwrap();
//! assert_eq!(graph.display(next), "Option<Box<crate::Node>>");
//! ```

use crate::{
    Capabilities, FieldDesc, GraphError, RecordDesc, ScalarKind, TypeDesc, TypeGraph, TypeId,
    TypeKind,
};

/// Builder for `TypeGraph`.
#[derive(Default)]
pub struct TypeGraphBuilder {
    slots: Vec<Option<TypeDesc>>,
    roots: Vec<TypeId>,
    scalars: [Option<TypeId>; ScalarKind::ALL.len()],
}

impl TypeGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an id to be defined later.
    pub fn reserve(&mut self) -> TypeId {
        let id = TypeId::new(u32::try_from(self.slots.len()).unwrap_or(u32::MAX));
        self.slots.push(None);
        id
    }

    /// Define a previously reserved id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this builder.
    pub fn define(&mut self, id: TypeId, desc: TypeDesc) {
        self.slots[id.index()] = Some(desc);
    }

    /// Define a previously reserved id as a named record.
    pub fn define_record(&mut self, id: TypeId, name: &str, fields: Vec<FieldDesc>) {
        self.define(
            id,
            TypeDesc::named(name, TypeKind::Record(RecordDesc { fields })),
        );
    }

    /// Add a fully known descriptor.
    pub fn add(&mut self, desc: TypeDesc) -> TypeId {
        let id = self.reserve();
        self.define(id, desc);
        id
    }

    /// Get the shared id for a scalar kind.
    pub fn scalar(&mut self, kind: ScalarKind) -> TypeId {
        let slot = kind as usize;
        if let Some(id) = self.scalars[slot] {
            return id;
        }
        let id = self.add(TypeDesc::new(TypeKind::Scalar(kind)));
        self.scalars[slot] = Some(id);
        id
    }

    pub fn sequence(&mut self, element: TypeId) -> TypeId {
        self.add(TypeDesc::new(TypeKind::Sequence { element }))
    }

    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.add(TypeDesc::new(TypeKind::Map { key, value }))
    }

    /// `Option<T>`.
    pub fn optional(&mut self, element: TypeId) -> TypeId {
        self.add(TypeDesc::new(TypeKind::Optional {
            element,
            boxed: false,
        }))
    }

    /// `Option<Box<T>>`.
    pub fn boxed(&mut self, element: TypeId) -> TypeId {
        self.add(TypeDesc::new(TypeKind::Optional {
            element,
            boxed: true,
        }))
    }

    /// A method-free dynamic value.
    pub fn any(&mut self) -> TypeId {
        self.add(TypeDesc::new(TypeKind::Any {
            methods: Vec::new(),
        }))
    }

    /// An opaque named type carrying the given capabilities.
    pub fn custom(&mut self, name: &str, capabilities: Capabilities) -> TypeId {
        self.add(TypeDesc::named(name, TypeKind::Custom).with_capabilities(capabilities))
    }

    /// A named record.
    pub fn record(&mut self, name: &str, fields: Vec<FieldDesc>) -> TypeId {
        let id = self.reserve();
        self.define_record(id, name, fields);
        id
    }

    /// Mark a record as a generation root.
    pub fn root(&mut self, id: TypeId) -> &mut Self {
        self.roots.push(id);
        self
    }

    /// Validate and produce the graph.
    pub fn build(self) -> Result<TypeGraph, GraphError> {
        let mut types = Vec::with_capacity(self.slots.len());
        for (index, slot) in self.slots.into_iter().enumerate() {
            match slot {
                Some(desc) => types.push(desc),
                None => {
                    return Err(GraphError::Undefined {
                        id: TypeId::new(u32::try_from(index).unwrap_or(u32::MAX)),
                    })
                }
            }
        }
        TypeGraph::new(types, self.roots)
    }
}
