//! A failing collection element aborts the whole call.
//!
//! The error names the failing index, no partial result is returned, and
//! a collection destination is left as it was.

use crate::common::*;
use attrmap::{marshal, unmarshal, AttributeValue, ErrorKind, Record, RecordInput, RecordOutput};
use serde::ser::{Error as _, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};

/// Record whose serialization fails on demand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Flaky {
    name: String,
    #[serde(default)]
    fail: bool,
}

impl Serialize for Flaky {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.fail {
            return Err(S::Error::custom("refusing to serialize"));
        }
        let mut state = serializer.serialize_struct("Flaky", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("fail", &self.fail)?;
        state.end()
    }
}

impl Record for Flaky {}

fn flaky(name: &str, fail: bool) -> Flaky {
    Flaky {
        name: name.to_string(),
        fail,
    }
}

#[test]
fn test_encode_failure_reports_index() {
    let input = vec![flaky("a", false), flaky("b", true), flaky("c", false)];
    let err = marshal(RecordInput::Many(&input)).unwrap_err();

    assert_eq!(err.index(), Some(1));
    assert!(err.is(ErrorKind::FailedToMarshal));
    assert!(err.is(ErrorKind::FailedToMarshalIntermediary));
    assert!(err.to_string().contains("at index 1"));
}

#[test]
fn test_encode_first_failure_wins() {
    let input = vec![flaky("a", true), flaky("b", true)];
    let err = marshal(RecordInput::Many(&input)).unwrap_err();
    assert_eq!(err.index(), Some(0));
}

#[test]
fn test_single_record_failure_has_no_index() {
    let err = marshal(RecordInput::One(&flaky("a", true))).unwrap_err();
    assert_eq!(err.index(), None);
    assert!(!err.to_string().contains("at index"));
}

#[test]
fn test_decode_failure_leaves_collection_untouched() {
    let items = vec![
        hello_world_item(),
        item([("bar", AttributeValue::Number("not-a-number".into()))]),
        hello_world_item(),
    ];
    let mut output = vec![Foo::new("existing")];

    let err = unmarshal(&items, RecordOutput::Many(&mut output)).unwrap_err();
    assert_eq!(err.index(), Some(1));
    assert!(err.is(ErrorKind::FailedToUnmarshal));
    assert_eq!(output, vec![Foo::new("existing")]);
}

#[test]
fn test_decode_failure_leaves_single_record_untouched() {
    // a bool cannot populate a string field
    let bad = item([("bar", AttributeValue::Bool(true))]);
    let mut output = Foo::new("existing");

    let err = unmarshal(&bad, RecordOutput::One(&mut output)).unwrap_err();
    assert!(err.is(ErrorKind::FailedToUnmarshalIntermediary));
    assert_eq!(err.index(), None);
    assert_eq!(output, Foo::new("existing"));
}
