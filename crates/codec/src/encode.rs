//! Encode pipeline: records to items.
//!
//! ```text
//! record --DocumentCodec--> Document --AttributeCodec--> AttributeMap
//! ```
//!
//! Collections are a strictly sequential fold. The first failing element
//! aborts the call and is reported with its index; no partial result is
//! ever returned.

use crate::classify::{Marshaled, RecordInput};
use crate::codec::{AttributeCodec, DocumentCodec};
use crate::converter::Converter;
use crate::record::{Record, TableRecord};
use attrmap_core::{AttributeMap, Cause, Error, Result};
use std::any::Any;
use tracing::{debug, trace};

impl<D: DocumentCodec, A: AttributeCodec> Converter<D, A> {
    /// Encode a record or a collection of records.
    ///
    /// The result has the shape of the input. An empty collection yields
    /// `Marshaled::Many(vec![])`.
    pub fn marshal<R: Record>(&self, input: RecordInput<'_, R>) -> Result<Marshaled> {
        match input {
            RecordInput::One(record) => self.marshal_record(record).map(Marshaled::One),
            RecordInput::Many(records) => self.marshal_records(records).map(Marshaled::Many),
        }
    }

    /// Encode a single record into one item.
    pub fn marshal_record<R: Record>(&self, record: &R) -> Result<AttributeMap> {
        debug!(target: "attrmap::encode", record = R::record_name(), shape = "one", "Encoding");
        self.encode_record(record).map_err(|e| {
            debug!(target: "attrmap::encode", error = %e, "Encode failed");
            e
        })
    }

    /// Encode a collection of records into items, in order.
    pub fn marshal_records<R: Record>(&self, records: &[R]) -> Result<Vec<AttributeMap>> {
        self.encode_all(records.iter())
    }

    /// Encode a record and extract its primary key attributes.
    ///
    /// # Errors
    ///
    /// Encode failures as for [`Converter::marshal_record`]; a missing or
    /// wrongly typed key attribute fails with cause `Key`.
    pub fn marshal_key<R: TableRecord>(&self, record: &R) -> Result<AttributeMap> {
        let item = self.encode_record(record)?;
        let schema = R::table_schema();
        schema.key_schema.key_of(&item).map_err(|e| {
            debug!(
                target: "attrmap::encode",
                table = %schema.table_name,
                error = %e,
                "Key extraction failed"
            );
            Error::marshal(Cause::Key(e))
        })
    }

    /// Encode a value whose type is only known at runtime.
    ///
    /// Accepts any registered record type `R`, a `Vec<R>`, or a
    /// `Vec<Box<dyn Any>>` whose elements are all the same registered
    /// record type. A `Box<dyn Any>` is dispatched on the type it holds.
    /// Anything else fails with `InvalidInput` before any conversion.
    pub fn marshal_any<T: Any>(&self, value: &T) -> Result<Marshaled> {
        self.marshal_dynamic(value, std::any::type_name::<T>())
    }

    /// Encode a type-erased value, as [`Converter::marshal_any`].
    pub fn marshal_dyn(&self, value: &dyn Any) -> Result<Marshaled> {
        self.marshal_dynamic(value, "dyn Any")
    }

    fn marshal_dynamic(&self, value: &dyn Any, type_name: &'static str) -> Result<Marshaled> {
        if let Some(boxed) = value.downcast_ref::<Box<dyn Any>>() {
            return self.marshal_dynamic(&**boxed, "Box<dyn Any>");
        }

        if let Some(elements) = value.downcast_ref::<Vec<Box<dyn Any>>>() {
            let element_type = self.registry().classify_elements(elements)?;
            debug!(
                target: "attrmap::encode",
                record = element_type.name(),
                count = elements.len(),
                "Encoding dynamic collection"
            );
            return element_type.marshal_all(self, elements);
        }

        match self.registry().get(Any::type_id(value)) {
            Some(registration) => registration.marshal(self, value),
            None => {
                debug!(target: "attrmap::encode", input = type_name, "Rejected input");
                Err(Error::marshal(Cause::invalid_input(
                    type_name,
                    "not a registered record type",
                )))
            }
        }
    }

    pub(crate) fn encode_all<'r, R: Record>(
        &self,
        records: impl ExactSizeIterator<Item = &'r R>,
    ) -> Result<Vec<AttributeMap>> {
        debug!(
            target: "attrmap::encode",
            record = R::record_name(),
            shape = "many",
            count = records.len(),
            "Encoding"
        );
        let mut items = Vec::with_capacity(records.len());
        for (i, record) in records.enumerate() {
            trace!(target: "attrmap::encode", index = i, "Encoding element");
            let item = self.encode_record(record).map_err(|e| {
                let e = e.at(i);
                debug!(target: "attrmap::encode", index = i, error = %e, "Encode failed");
                e
            })?;
            items.push(item);
        }
        Ok(items)
    }

    fn encode_record<R: Record>(&self, record: &R) -> Result<AttributeMap> {
        let document = self
            .documents()
            .to_document(record)
            .map_err(|e| Error::marshal(Cause::MarshalIntermediary(e)))?;
        self.attributes()
            .to_attribute_map(&document)
            .map_err(|e| Error::marshal(Cause::Attribute(e)))
    }
}
