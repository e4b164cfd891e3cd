//! Runtime registry of record types.
//!
//! The static entry points know the record type at compile time. The
//! dynamic ones (`marshal_any`, `unmarshal_any`) only see a `&dyn Any`,
//! so every record type they should accept is registered up front. Each
//! registration covers both `R` and `Vec<R>`.

use crate::classify::{AttributeInput, Marshaled, RecordOutput, Shape};
use crate::codec::{AttributeCodec, DocumentCodec};
use crate::converter::Converter;
use crate::record::Record;
use attrmap_core::{Cause, Error, Result};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

type MarshalHook<D, A> = fn(&Converter<D, A>, &dyn Any) -> Result<Marshaled>;
type UnmarshalHook<D, A> = fn(&Converter<D, A>, AttributeInput<'_>, &mut dyn Any) -> Result<()>;
type MarshalElementsHook<D, A> = fn(&Converter<D, A>, &[Box<dyn Any>]) -> Result<Marshaled>;

/// Type-erased conversion hooks of one registered type.
pub struct Registration<D, A> {
    name: &'static str,
    shape: Shape,
    marshal: MarshalHook<D, A>,
    unmarshal: UnmarshalHook<D, A>,
}

impl<D, A> Registration<D, A> {
    /// Type name of the registered record or collection
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this entry is for the record or its collection
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub(crate) fn marshal(&self, converter: &Converter<D, A>, value: &dyn Any) -> Result<Marshaled> {
        (self.marshal)(converter, value)
    }

    pub(crate) fn unmarshal(
        &self,
        converter: &Converter<D, A>,
        input: AttributeInput<'_>,
        output: &mut dyn Any,
    ) -> Result<()> {
        (self.unmarshal)(converter, input, output)
    }
}

impl<D, A> Clone for Registration<D, A> {
    fn clone(&self) -> Self {
        Registration {
            name: self.name,
            shape: self.shape,
            marshal: self.marshal,
            unmarshal: self.unmarshal,
        }
    }
}

/// Record type of the elements of a dynamic collection.
pub struct ElementType<D, A> {
    name: &'static str,
    marshal_all: MarshalElementsHook<D, A>,
}

impl<D, A> ElementType<D, A> {
    /// Type name of the record
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn marshal_all(
        &self,
        converter: &Converter<D, A>,
        elements: &[Box<dyn Any>],
    ) -> Result<Marshaled> {
        (self.marshal_all)(converter, elements)
    }
}

impl<D, A> Clone for ElementType<D, A> {
    fn clone(&self) -> Self {
        ElementType {
            name: self.name,
            marshal_all: self.marshal_all,
        }
    }
}

impl<D, A> fmt::Debug for ElementType<D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementType").field("name", &self.name).finish()
    }
}

/// Record types accepted by the dynamic entry points.
pub struct RecordRegistry<D, A> {
    entries: HashMap<TypeId, Registration<D, A>>,
    elements: HashMap<TypeId, ElementType<D, A>>,
}

impl<D, A> Default for RecordRegistry<D, A> {
    fn default() -> Self {
        RecordRegistry {
            entries: HashMap::new(),
            elements: HashMap::new(),
        }
    }
}

impl<D, A> Clone for RecordRegistry<D, A> {
    fn clone(&self) -> Self {
        RecordRegistry {
            entries: self.entries.clone(),
            elements: self.elements.clone(),
        }
    }
}

impl<D, A> fmt::Debug for RecordRegistry<D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.values().map(|r| r.name).collect();
        names.sort_unstable();
        f.debug_struct("RecordRegistry").field("types", &names).finish()
    }
}

impl<D: DocumentCodec, A: AttributeCodec> RecordRegistry<D, A> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `R` and `Vec<R>`. Registering twice is a no-op.
    pub fn register<R: Record>(&mut self) {
        if self.contains::<R>() {
            return;
        }
        let name = std::any::type_name::<R>();
        self.entries.insert(
            TypeId::of::<R>(),
            Registration {
                name,
                shape: Shape::One,
                marshal: marshal_one::<R, D, A>,
                unmarshal: unmarshal_one::<R, D, A>,
            },
        );
        self.entries.insert(
            TypeId::of::<Vec<R>>(),
            Registration {
                name: std::any::type_name::<Vec<R>>(),
                shape: Shape::Many,
                marshal: marshal_many::<R, D, A>,
                unmarshal: unmarshal_many::<R, D, A>,
            },
        );
        self.elements.insert(
            TypeId::of::<R>(),
            ElementType {
                name,
                marshal_all: marshal_elements::<R, D, A>,
            },
        );
        debug!(target: "attrmap::registry", record = R::record_name(), "Registered record type");
    }

    /// Whether `R` is registered
    pub fn contains<R: Record>(&self) -> bool {
        self.elements.contains_key(&TypeId::of::<R>())
    }

    /// Number of registered record types
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no record type is registered
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up the hooks for a runtime type
    pub fn get(&self, type_id: TypeId) -> Option<&Registration<D, A>> {
        self.entries.get(&type_id)
    }

    /// Classify the elements of a dynamic collection.
    ///
    /// The collection is accepted only if it is non-empty and every element
    /// is the same registered record type. Nothing is converted here.
    pub fn classify_elements(&self, elements: &[Box<dyn Any>]) -> Result<&ElementType<D, A>> {
        let collection = std::any::type_name::<Vec<Box<dyn Any>>>();
        let first = match elements.first() {
            Some(first) => (**first).type_id(),
            None => {
                return Err(Error::marshal(Cause::invalid_input(
                    collection,
                    "empty collection has no element type",
                )))
            }
        };

        let element_type = match self.elements.get(&first) {
            Some(element_type) => element_type,
            None => {
                debug!(target: "attrmap::registry", "Rejected collection of unregistered elements");
                return Err(Error::marshal(Cause::invalid_input(
                    collection,
                    "element type is not a registered record type",
                )));
            }
        };

        if let Some(position) = elements.iter().position(|e| (**e).type_id() != first) {
            debug!(
                target: "attrmap::registry",
                expected = element_type.name,
                position,
                "Rejected heterogeneous collection"
            );
            return Err(Error::marshal(Cause::invalid_input(
                collection,
                "elements are not all the same record type",
            )));
        }

        Ok(element_type)
    }
}

fn mismatch(name: &'static str) -> Cause {
    Cause::invalid_input(name, "value does not match its registered type")
}

fn marshal_one<R: Record, D: DocumentCodec, A: AttributeCodec>(
    converter: &Converter<D, A>,
    value: &dyn Any,
) -> Result<Marshaled> {
    let record = value
        .downcast_ref::<R>()
        .ok_or_else(|| Error::marshal(mismatch(std::any::type_name::<R>())))?;
    converter.marshal_record(record).map(Marshaled::One)
}

fn marshal_many<R: Record, D: DocumentCodec, A: AttributeCodec>(
    converter: &Converter<D, A>,
    value: &dyn Any,
) -> Result<Marshaled> {
    let records = value
        .downcast_ref::<Vec<R>>()
        .ok_or_else(|| Error::marshal(mismatch(std::any::type_name::<Vec<R>>())))?;
    converter.marshal_records(records).map(Marshaled::Many)
}

fn marshal_elements<R: Record, D: DocumentCodec, A: AttributeCodec>(
    converter: &Converter<D, A>,
    elements: &[Box<dyn Any>],
) -> Result<Marshaled> {
    let records = elements
        .iter()
        .map(|e| (**e).downcast_ref::<R>())
        .collect::<Option<Vec<&R>>>()
        .ok_or_else(|| Error::marshal(mismatch(std::any::type_name::<R>())))?;
    converter
        .encode_all(records.into_iter())
        .map(Marshaled::Many)
}

fn unmarshal_one<R: Record, D: DocumentCodec, A: AttributeCodec>(
    converter: &Converter<D, A>,
    input: AttributeInput<'_>,
    output: &mut dyn Any,
) -> Result<()> {
    let record = output.downcast_mut::<R>().ok_or_else(|| {
        Error::unmarshal(Cause::invalid_output(
            std::any::type_name::<R>(),
            "destination does not match its registered type",
        ))
    })?;
    converter.unmarshal(input, RecordOutput::One(record))
}

fn unmarshal_many<R: Record, D: DocumentCodec, A: AttributeCodec>(
    converter: &Converter<D, A>,
    input: AttributeInput<'_>,
    output: &mut dyn Any,
) -> Result<()> {
    let records = output.downcast_mut::<Vec<R>>().ok_or_else(|| {
        Error::unmarshal(Cause::invalid_output(
            std::any::type_name::<Vec<R>>(),
            "destination does not match its registered type",
        ))
    })?;
    converter.unmarshal(input, RecordOutput::Many(records))
}
