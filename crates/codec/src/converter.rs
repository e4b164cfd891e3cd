//! The converter: codecs plus a record registry.
//!
//! A `Converter` is immutable once built. Registration uses builder
//! methods that consume and return the converter, so a shared converter
//! can never change under a running call.

use crate::codec::{AttributeCodec, DocumentCodec, JsonDocumentCodec, StandardAttributeCodec};
use crate::config::{ConfigError, ConverterConfig};
use crate::record::Record;
use crate::registry::RecordRegistry;
use attrmap_core::Document;

/// Encode and decode pipelines over a pair of codecs.
///
/// # Example
///
/// ```
/// use attrmap_codec::{Converter, Record};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
/// #[serde(default)]
/// struct Greeting {
///     bar: String,
/// }
///
/// impl Record for Greeting {}
///
/// let converter = Converter::new().register::<Greeting>();
/// let item = converter
///     .marshal_record(&Greeting { bar: "hello world".into() })
///     .unwrap();
///
/// let mut restored = Greeting::default();
/// converter.unmarshal(&item, (&mut restored).into()).unwrap();
/// assert_eq!(restored.bar, "hello world");
/// ```
#[derive(Debug)]
pub struct Converter<D = JsonDocumentCodec, A = StandardAttributeCodec> {
    documents: D,
    attributes: A,
    registry: RecordRegistry<D, A>,
}

impl Converter {
    /// Converter with the default codecs and store limits
    pub fn new() -> Self {
        Self::with_codecs(JsonDocumentCodec, StandardAttributeCodec::default())
    }

    /// Converter with the default codecs configured by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the config fails validation.
    pub fn with_config(config: &ConverterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let attributes =
            StandardAttributeCodec::new(config.limits()).with_omit_nulls(config.omit_nulls);
        Ok(Self::with_codecs(JsonDocumentCodec, attributes))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DocumentCodec, A: AttributeCodec> Converter<D, A> {
    /// Converter over custom codecs.
    ///
    /// Free-form documents are registered for the dynamic entry points.
    pub fn with_codecs(documents: D, attributes: A) -> Self {
        let mut registry = RecordRegistry::new();
        registry.register::<Document>();
        Self {
            documents,
            attributes,
            registry,
        }
    }

    /// Register a record type with the dynamic entry points
    pub fn register<R: Record>(mut self) -> Self {
        self.registry.register::<R>();
        self
    }

    /// The record ⇄ document codec
    pub fn documents(&self) -> &D {
        &self.documents
    }

    /// The document ⇄ item codec
    pub fn attributes(&self) -> &A {
        &self.attributes
    }

    /// Record types accepted by the dynamic entry points
    pub fn registry(&self) -> &RecordRegistry<D, A> {
        &self.registry
    }
}
