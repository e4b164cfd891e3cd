//! Input and output shapes of the pipelines.
//!
//! Every pipeline call works on exactly one of two shapes: a single record
//! (one item) or a homogeneous collection of records (a sequence of items).
//! The shape is carried in the type of the argument, so callers never
//! branch and the pipelines never guess.

use crate::record::Record;
use attrmap_core::{AttributeMap, AttributeValue};

/// One record or a collection of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single record / item
    One,
    /// An ordered collection of records / items
    Many,
}

impl Shape {
    /// Lowercase name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::One => "one",
            Shape::Many => "many",
        }
    }
}

/// Encode input: a record or a collection of records of one type.
#[derive(Debug)]
pub enum RecordInput<'a, R> {
    /// A single record
    One(&'a R),
    /// A collection of records, in order
    Many(&'a [R]),
}

impl<R> RecordInput<'_, R> {
    /// Shape of the input
    pub fn shape(&self) -> Shape {
        match self {
            RecordInput::One(_) => Shape::One,
            RecordInput::Many(_) => Shape::Many,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        match self {
            RecordInput::One(_) => 1,
            RecordInput::Many(records) => records.len(),
        }
    }

    /// Whether the input holds no record
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R> Clone for RecordInput<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RecordInput<'_, R> {}

impl<'a, R: Record> From<&'a R> for RecordInput<'a, R> {
    fn from(record: &'a R) -> Self {
        RecordInput::One(record)
    }
}

impl<'a, R: Record> From<&'a [R]> for RecordInput<'a, R> {
    fn from(records: &'a [R]) -> Self {
        RecordInput::Many(records)
    }
}

impl<'a, R: Record> From<&'a Vec<R>> for RecordInput<'a, R> {
    fn from(records: &'a Vec<R>) -> Self {
        RecordInput::Many(records)
    }
}

/// Decode destination: a record to overwrite or a collection to append to.
#[derive(Debug)]
pub enum RecordOutput<'a, R> {
    /// A single record, overwritten on success
    One(&'a mut R),
    /// A collection, extended in input order on success
    Many(&'a mut Vec<R>),
}

impl<R> RecordOutput<'_, R> {
    /// Shape of the destination
    pub fn shape(&self) -> Shape {
        match self {
            RecordOutput::One(_) => Shape::One,
            RecordOutput::Many(_) => Shape::Many,
        }
    }

    /// Runtime type name of the destination, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            RecordOutput::One(_) => std::any::type_name::<R>(),
            RecordOutput::Many(_) => std::any::type_name::<Vec<R>>(),
        }
    }
}

impl<'a, R: Record> From<&'a mut R> for RecordOutput<'a, R> {
    fn from(record: &'a mut R) -> Self {
        RecordOutput::One(record)
    }
}

impl<'a, R: Record> From<&'a mut Vec<R>> for RecordOutput<'a, R> {
    fn from(records: &'a mut Vec<R>) -> Self {
        RecordOutput::Many(records)
    }
}

/// Decode input.
///
/// A bare attribute value is interpreted by its variant: `M` holds one
/// item, `L` holds a sequence of items, and anything else is treated as a
/// single item that the attribute stage rejects.
#[derive(Debug, Clone, Copy)]
pub enum AttributeInput<'a> {
    /// A single attribute value
    Value(&'a AttributeValue),
    /// One item
    Map(&'a AttributeMap),
    /// A sequence of items
    Many(&'a [AttributeMap]),
}

impl AttributeInput<'_> {
    /// Shape of the input
    pub fn shape(&self) -> Shape {
        match self {
            AttributeInput::Value(AttributeValue::List(_)) | AttributeInput::Many(_) => Shape::Many,
            AttributeInput::Value(_) | AttributeInput::Map(_) => Shape::One,
        }
    }

    /// Number of items the input holds
    pub fn len(&self) -> usize {
        match self {
            AttributeInput::Value(AttributeValue::List(items)) => items.len(),
            AttributeInput::Many(items) => items.len(),
            AttributeInput::Value(_) | AttributeInput::Map(_) => 1,
        }
    }

    /// Whether the input holds no item
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a AttributeValue> for AttributeInput<'a> {
    fn from(value: &'a AttributeValue) -> Self {
        AttributeInput::Value(value)
    }
}

impl<'a> From<&'a AttributeMap> for AttributeInput<'a> {
    fn from(item: &'a AttributeMap) -> Self {
        AttributeInput::Map(item)
    }
}

impl<'a> From<&'a [AttributeMap]> for AttributeInput<'a> {
    fn from(items: &'a [AttributeMap]) -> Self {
        AttributeInput::Many(items)
    }
}

impl<'a> From<&'a Vec<AttributeMap>> for AttributeInput<'a> {
    fn from(items: &'a Vec<AttributeMap>) -> Self {
        AttributeInput::Many(items)
    }
}

impl<'a> From<&'a Marshaled> for AttributeInput<'a> {
    fn from(marshaled: &'a Marshaled) -> Self {
        match marshaled {
            Marshaled::One(item) => AttributeInput::Map(item),
            Marshaled::Many(items) => AttributeInput::Many(items),
        }
    }
}

/// Encode result, shaped like the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Marshaled {
    /// The item of a single record
    One(AttributeMap),
    /// The items of a collection, in input order
    Many(Vec<AttributeMap>),
}

impl Marshaled {
    /// Shape of the result
    pub fn shape(&self) -> Shape {
        match self {
            Marshaled::One(_) => Shape::One,
            Marshaled::Many(_) => Shape::Many,
        }
    }

    /// The single item, if this is a single-record result
    pub fn into_one(self) -> Option<AttributeMap> {
        match self {
            Marshaled::One(item) => Some(item),
            Marshaled::Many(_) => None,
        }
    }

    /// The items, if this is a collection result
    pub fn into_many(self) -> Option<Vec<AttributeMap>> {
        match self {
            Marshaled::Many(items) => Some(items),
            Marshaled::One(_) => None,
        }
    }

    /// Borrow as a decode input
    pub fn as_input(&self) -> AttributeInput<'_> {
        self.into()
    }
}
