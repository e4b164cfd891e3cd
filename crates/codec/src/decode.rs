//! Decode pipeline: items to records.
//!
//! ```text
//! AttributeMap --AttributeCodec--> Document --DocumentCodec--> record
//! ```
//!
//! The destination shape is checked against the input shape before any
//! field is decoded. Collection destinations are extended only after every
//! element decoded, so a failed call leaves them untouched.

use crate::classify::{AttributeInput, RecordOutput, Shape};
use crate::codec::{AttributeCodec, DocumentCodec};
use crate::converter::Converter;
use crate::record::Record;
use attrmap_core::{AttributeMap, AttributeValue, Cause, Document, Error, Result};
use std::any::Any;
use tracing::{debug, trace};

impl<D: DocumentCodec, A: AttributeCodec> Converter<D, A> {
    /// Decode an item or a sequence of items into `output`.
    ///
    /// A single destination is overwritten; a collection destination is
    /// appended to in input order.
    ///
    /// # Errors
    ///
    /// `InvalidOutput` if the destination shape does not match the input
    /// shape. Otherwise the first failing item, with its index when the
    /// input is a sequence.
    pub fn unmarshal<'a, R: Record>(
        &self,
        input: impl Into<AttributeInput<'a>>,
        output: RecordOutput<'_, R>,
    ) -> Result<()> {
        let input = input.into();
        debug!(
            target: "attrmap::decode",
            record = R::record_name(),
            shape = input.shape().as_str(),
            count = input.len(),
            "Decoding"
        );

        let decoded = match (input, output) {
            (AttributeInput::Map(item), RecordOutput::One(record)) => {
                self.decode_item(item).map(|decoded| *record = decoded)
            }
            (AttributeInput::Value(value), RecordOutput::One(record)) if !value.is_list() => {
                self.decode_value(value).map(|decoded| *record = decoded)
            }
            (AttributeInput::Many(items), RecordOutput::Many(records)) => self
                .decode_each(items.iter(), Self::decode_item::<R>)
                .map(|staged| records.extend(staged)),
            (AttributeInput::Value(AttributeValue::List(values)), RecordOutput::Many(records)) => {
                self.decode_each(values.iter(), Self::decode_value::<R>)
                    .map(|staged| records.extend(staged))
            }
            (input, output) => {
                let reason = match input.shape() {
                    Shape::One => "a single item cannot be decoded into a collection",
                    Shape::Many => "a sequence of items cannot be decoded into a single record",
                };
                return Err(self.shape_mismatch(&output, reason));
            }
        };
        decoded.map_err(|e| {
            debug!(target: "attrmap::decode", index = e.index(), error = %e, "Decode failed");
            e
        })
    }

    /// Decode one item into a new record.
    pub fn unmarshal_record<R: Record>(&self, item: &AttributeMap) -> Result<R> {
        self.decode_item(item)
    }

    /// Decode a sequence of items into new records, in order.
    pub fn unmarshal_records<R: Record>(&self, items: &[AttributeMap]) -> Result<Vec<R>> {
        self.decode_each(items.iter(), Self::decode_item::<R>)
    }

    /// Decode into a destination whose type is only known at runtime.
    ///
    /// The destination must be a registered record type `R` or a
    /// `Vec<R>`, possibly held in a `Box<dyn Any>`; anything else fails
    /// with `InvalidOutput` before any field is decoded.
    pub fn unmarshal_any<'a, T: Any>(
        &self,
        input: impl Into<AttributeInput<'a>>,
        output: &mut T,
    ) -> Result<()> {
        self.unmarshal_dynamic(input.into(), output, std::any::type_name::<T>())
    }

    /// Decode into a type-erased destination, as [`Converter::unmarshal_any`].
    pub fn unmarshal_dyn<'a>(
        &self,
        input: impl Into<AttributeInput<'a>>,
        output: &mut dyn Any,
    ) -> Result<()> {
        self.unmarshal_dynamic(input.into(), output, "dyn Any")
    }

    fn unmarshal_dynamic(
        &self,
        input: AttributeInput<'_>,
        output: &mut dyn Any,
        type_name: &'static str,
    ) -> Result<()> {
        if let Some(boxed) = output.downcast_mut::<Box<dyn Any>>() {
            return self.unmarshal_dynamic(input, &mut **boxed, "Box<dyn Any>");
        }

        match self.registry().get(Any::type_id(&*output)) {
            Some(registration) => registration.unmarshal(self, input, output),
            None => {
                debug!(target: "attrmap::decode", output = type_name, "Rejected output");
                Err(Error::unmarshal(Cause::invalid_output(
                    type_name,
                    "not a registered record type",
                )))
            }
        }
    }

    fn shape_mismatch<R>(&self, output: &RecordOutput<'_, R>, reason: &'static str) -> Error {
        debug!(target: "attrmap::decode", output = output.type_name(), reason, "Rejected output");
        Error::unmarshal(Cause::invalid_output(output.type_name(), reason))
    }

    fn decode_each<'i, T: 'i, R: Record>(
        &self,
        elements: impl ExactSizeIterator<Item = &'i T>,
        decode: impl Fn(&Self, &T) -> Result<R>,
    ) -> Result<Vec<R>> {
        let mut staged = Vec::with_capacity(elements.len());
        for (i, element) in elements.enumerate() {
            trace!(target: "attrmap::decode", index = i, "Decoding element");
            staged.push(decode(self, element).map_err(|e| e.at(i))?);
        }
        Ok(staged)
    }

    fn decode_item<R: Record>(&self, item: &AttributeMap) -> Result<R> {
        let document = self
            .attributes()
            .from_attribute_map(item)
            .map_err(|e| Error::unmarshal(Cause::Attribute(e)))?;
        self.decode_document(document)
    }

    fn decode_value<R: Record>(&self, value: &AttributeValue) -> Result<R> {
        let document = self
            .attributes()
            .value_to_document(value)
            .map_err(|e| Error::unmarshal(Cause::Attribute(e)))?;
        self.decode_document(document)
    }

    fn decode_document<R: Record>(&self, document: Document) -> Result<R> {
        self.documents()
            .from_document(document)
            .map_err(|e| Error::unmarshal(Cause::UnmarshalIntermediary(e)))
    }
}
