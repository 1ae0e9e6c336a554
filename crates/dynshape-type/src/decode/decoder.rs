//! Recursive descent decoder for dynamic values.

use serde_json::Value;

use dynshape_path::PathStep;

use crate::classify::{
    as_scalar, classify, iterate_mapping, iterate_sequence, Scalar, ScalarKind, Shape,
};
use crate::constants::DecodeError;
use crate::schema::{ArrSchema, ObjSchema, OptSchema, Schema};
use crate::value::{DecodedValue, FieldValue, RecordValue};

use super::error::DecodeFailure;

/// Decode a dynamic value against a schema.
///
/// Succeeds with a [`DecodedValue`] matching the schema's declared shape
/// exactly, or fails fast with a [`DecodeFailure`] locating the first
/// divergence. Record fields are processed in schema declaration order
/// and sequence elements in source order, so the first-declared failure
/// wins. Unknown mapping keys are ignored.
///
/// Pure: no state is shared across calls, the dynamic value is only
/// borrowed, and recursion depth equals schema nesting depth.
pub fn decode(schema: &Schema, value: &Value) -> Result<DecodedValue, DecodeFailure> {
    let mut path = Vec::new();
    decode_node(schema, value, &mut path)
}

fn decode_node(
    schema: &Schema,
    value: &Value,
    path: &mut Vec<PathStep>,
) -> Result<DecodedValue, DecodeFailure> {
    match schema {
        Schema::Bool(_) => decode_scalar(ScalarKind::Bool, value, path),
        Schema::Int(_) => decode_scalar(ScalarKind::Int, value, path),
        Schema::Float(_) => decode_scalar(ScalarKind::Float, value, path),
        Schema::Str(_) => decode_scalar(ScalarKind::Str, value, path),
        Schema::Opt(s) => decode_opt(s, value, path),
        Schema::Arr(s) => decode_arr(s, value, path),
        Schema::Obj(s) => decode_obj(s, value, path),
    }
}

fn decode_scalar(
    kind: ScalarKind,
    value: &Value,
    path: &mut Vec<PathStep>,
) -> Result<DecodedValue, DecodeFailure> {
    match as_scalar(value, kind) {
        Ok(Scalar::Bool(b)) => Ok(DecodedValue::Bool(b)),
        Ok(Scalar::Int(n)) => Ok(DecodedValue::Int(n)),
        Ok(Scalar::Float(x)) => Ok(DecodedValue::Float(x)),
        Ok(Scalar::Text(s)) => Ok(DecodedValue::Text(s)),
        Err(err) => Err(DecodeFailure::new(
            DecodeError::Type,
            path.clone(),
            err.expected.as_str(),
            err.actual.as_str(),
        )),
    }
}

fn decode_opt(
    schema: &OptSchema,
    value: &Value,
    path: &mut Vec<PathStep>,
) -> Result<DecodedValue, DecodeFailure> {
    if classify(value) == Shape::Null {
        return Ok(DecodedValue::Absent);
    }
    decode_node(&schema.type_, value, path)
}

fn decode_arr(
    schema: &ArrSchema,
    value: &Value,
    path: &mut Vec<PathStep>,
) -> Result<DecodedValue, DecodeFailure> {
    let items = iterate_sequence(value).map_err(|err| {
        DecodeFailure::new(
            DecodeError::Shape,
            path.clone(),
            err.expected.as_str(),
            err.actual.as_str(),
        )
    })?;

    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        path.push(PathStep::Index(index));
        let decoded = decode_node(&schema.type_, item, path)?;
        path.pop();
        out.push(decoded);
    }
    Ok(DecodedValue::Sequence(out))
}

fn decode_obj(
    schema: &ObjSchema,
    value: &Value,
    path: &mut Vec<PathStep>,
) -> Result<DecodedValue, DecodeFailure> {
    let entries = iterate_mapping(value).map_err(|err| {
        DecodeFailure::new(
            DecodeError::Shape,
            path.clone(),
            err.expected.as_str(),
            err.actual.as_str(),
        )
    })?;

    let mut fields = Vec::with_capacity(schema.keys.len());
    for key in &schema.keys {
        let decoded = match entries.get(&key.key) {
            None if key.is_optional() => DecodedValue::Absent,
            None => {
                path.push(PathStep::Key(key.key.clone()));
                return Err(DecodeFailure::new(
                    DecodeError::Key,
                    path.clone(),
                    key.value.kind(),
                    "missing",
                ));
            }
            // Present-but-null on an optional field decodes as absent, as
            // if the field schema were wrapped in an implicit optional.
            Some(child) if key.is_optional() && classify(child) == Shape::Null => {
                DecodedValue::Absent
            }
            Some(child) => {
                path.push(PathStep::Key(key.key.clone()));
                let decoded = decode_node(&key.value, child, path)?;
                path.pop();
                decoded
            }
        };
        fields.push(FieldValue {
            key: key.key.clone(),
            value: decoded,
        });
    }
    Ok(DecodedValue::Record(RecordValue { fields }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaBuilder;
    use serde_json::json;

    fn s() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    #[test]
    fn decode_scalars_at_root() {
        assert_eq!(decode(&s().bool(), &json!(true)).unwrap(), DecodedValue::Bool(true));
        assert_eq!(decode(&s().int(), &json!(-5)).unwrap(), DecodedValue::Int(-5));
        assert_eq!(decode(&s().float(), &json!(1.334)).unwrap(), DecodedValue::Float(1.334));
        assert_eq!(
            decode(&s().str(), &json!("asb")).unwrap(),
            DecodedValue::Text("asb".to_string())
        );
    }

    #[test]
    fn decode_scalar_mismatch_fails_at_root() {
        let failure = decode(&s().int(), &json!("TEXT")).unwrap_err();
        assert_eq!(failure.code, DecodeError::Type);
        assert!(failure.path.is_empty());
        assert_eq!(failure.expected, "int");
        assert_eq!(failure.actual, "text");
    }

    #[test]
    fn decode_int_widens_into_float_target() {
        assert_eq!(decode(&s().float(), &json!(3)).unwrap(), DecodedValue::Float(3.0));
    }

    #[test]
    fn decode_float_never_narrows_into_int_target() {
        let failure = decode(&s().int(), &json!(1.0)).unwrap_err();
        assert_eq!(failure.code, DecodeError::Type);
        assert_eq!(failure.expected, "int");
        assert_eq!(failure.actual, "float");
    }

    #[test]
    fn decode_opt_null_is_absent() {
        assert_eq!(decode(&s().opt(s().int()), &json!(null)).unwrap(), DecodedValue::Absent);
    }

    #[test]
    fn decode_opt_present_recurses() {
        assert_eq!(
            decode(&s().opt(s().int()), &json!(7)).unwrap(),
            DecodedValue::Int(7)
        );
        // A present wrong-kind value still fails.
        let failure = decode(&s().opt(s().int()), &json!("7")).unwrap_err();
        assert_eq!(failure.code, DecodeError::Type);
    }

    #[test]
    fn decode_sequence_preserves_order_and_count() {
        let decoded = decode(&s().arr(s().int()), &json!([1, 2, 3])).unwrap();
        assert_eq!(
            decoded,
            DecodedValue::Sequence(vec![
                DecodedValue::Int(1),
                DecodedValue::Int(2),
                DecodedValue::Int(3),
            ])
        );
    }

    #[test]
    fn decode_empty_sequence_succeeds() {
        assert_eq!(
            decode(&s().arr(s().str()), &json!([])).unwrap(),
            DecodedValue::Sequence(vec![])
        );
    }

    #[test]
    fn decode_sequence_shape_mismatch() {
        let failure = decode(&s().arr(s().int()), &json!({"k": 1})).unwrap_err();
        assert_eq!(failure.code, DecodeError::Shape);
        assert_eq!(failure.expected, "sequence");
        assert_eq!(failure.actual, "mapping");
    }

    #[test]
    fn decode_sequence_fails_fast_at_first_bad_element() {
        let failure = decode(&s().arr(s().int()), &json!([1, "two", "three"])).unwrap_err();
        assert_eq!(failure.code, DecodeError::Type);
        assert_eq!(failure.path, vec![PathStep::Index(1)]);
    }

    #[test]
    fn decode_record_in_declaration_order() {
        let schema = s().Object(
            vec![s().Key("int", s().int()), s().Key("string", s().str())],
            None,
        );
        let decoded = decode(&schema, &json!({"string": "asb", "int": 1})).unwrap();
        let record = decoded.as_record().unwrap();
        // Declaration order, not mapping order.
        assert_eq!(record.fields[0].key, "int");
        assert_eq!(record.fields[1].key, "string");
    }

    #[test]
    fn decode_record_shape_mismatch() {
        let schema = s().Object(vec![s().Key("int", s().int())], None);
        let failure = decode(&schema, &json!([])).unwrap_err();
        assert_eq!(failure.code, DecodeError::Shape);
        assert_eq!(failure.expected, "mapping");
        assert_eq!(failure.actual, "sequence");
        assert!(failure.path.is_empty());
    }

    #[test]
    fn decode_record_missing_required_field() {
        let schema = s().Object(
            vec![s().Key("int", s().int()), s().Key("string", s().str())],
            None,
        );
        let failure = decode(&schema, &json!({})).unwrap_err();
        assert_eq!(failure.code, DecodeError::Key);
        assert_eq!(failure.path, vec![PathStep::key("int")]);
        assert_eq!(failure.expected, "int");
        assert_eq!(failure.actual, "missing");
    }

    #[test]
    fn decode_record_first_declared_failure_wins() {
        let schema = s().Object(
            vec![s().Key("a", s().int()), s().Key("b", s().str())],
            None,
        );
        // Both fields are invalid; the first-declared one is reported.
        let failure = decode(&schema, &json!({"b": 1, "a": "x"})).unwrap_err();
        assert_eq!(failure.path, vec![PathStep::key("a")]);
    }

    #[test]
    fn decode_record_missing_optional_field_is_absent() {
        let schema = s().Object(
            vec![s().Key("int", s().int()), s().KeyOpt("bool", s().bool())],
            None,
        );
        let decoded = decode(&schema, &json!({"int": 1})).unwrap();
        let record = decoded.as_record().unwrap();
        assert_eq!(record.get("bool"), Some(&DecodedValue::Absent));
    }

    #[test]
    fn decode_record_null_optional_field_is_absent() {
        let schema = s().Object(
            vec![s().Key("int", s().int()), s().KeyOpt("string", s().str())],
            None,
        );
        let decoded = decode(&schema, &json!({"int": 0, "string": null})).unwrap();
        let record = decoded.as_record().unwrap();
        assert_eq!(record.get("string"), Some(&DecodedValue::Absent));
    }

    #[test]
    fn decode_record_null_required_field_is_type_mismatch() {
        // "Present but null" is distinguished from "absent".
        let schema = s().Object(
            vec![s().Key("int", s().int()), s().Key("string", s().str())],
            None,
        );
        let failure = decode(&schema, &json!({"int": 1, "string": null})).unwrap_err();
        assert_eq!(failure.code, DecodeError::Type);
        assert_eq!(failure.path, vec![PathStep::key("string")]);
        assert_eq!(failure.expected, "str");
        assert_eq!(failure.actual, "null");
    }

    #[test]
    fn decode_record_ignores_unknown_keys() {
        let schema = s().Object(vec![s().Key("int", s().int())], None);
        let with_extra = decode(&schema, &json!({"int": 1, "_fake_": "454"})).unwrap();
        let without_extra = decode(&schema, &json!({"int": 1})).unwrap();
        assert_eq!(with_extra, without_extra);
    }

    #[test]
    fn decode_record_keys_are_case_exact() {
        let schema = s().Object(vec![s().Key("int", s().int())], None);
        let failure = decode(&schema, &json!({"Int": 1})).unwrap_err();
        assert_eq!(failure.code, DecodeError::Key);
        assert_eq!(failure.path, vec![PathStep::key("int")]);
    }

    #[test]
    fn decode_nested_failure_carries_full_path() {
        let schema = s().Object(
            vec![s().Key(
                "rows",
                s().arr(s().Object(vec![s().Key("id", s().int())], None)),
            )],
            None,
        );
        let failure = decode(&schema, &json!({"rows": [{"id": 1}, {"id": "x"}]})).unwrap_err();
        assert_eq!(failure.code, DecodeError::Type);
        assert_eq!(
            failure.path,
            vec![PathStep::key("rows"), PathStep::Index(1), PathStep::key("id")]
        );
        assert_eq!(failure.to_string(), "TYPE at \"/rows/1/id\": expected int, found text");
    }

    #[test]
    fn decode_sequence_of_optionals_keeps_positions() {
        let schema = s().arr(s().opt(s().str()));
        let decoded = decode(&schema, &json!(["None", null])).unwrap();
        assert_eq!(
            decoded,
            DecodedValue::Sequence(vec![
                DecodedValue::Text("None".to_string()),
                DecodedValue::Absent,
            ])
        );
    }

    #[test]
    fn decode_result_shape_matches_schema() {
        let schema = s().Object(
            vec![
                s().Key("int", s().int()),
                s().Key("string", s().str()),
                s().KeyOpt("bool", s().bool()),
            ],
            None,
        );
        let decoded = decode(&schema, &json!({"int": 1, "string": "asb"})).unwrap();
        let record = decoded.as_record().unwrap();
        // Every declared field is populated, absent-marker included.
        assert_eq!(record.fields.len(), 3);
        assert_eq!(decoded.to_json(), json!({"int": 1, "string": "asb"}));
    }
}
