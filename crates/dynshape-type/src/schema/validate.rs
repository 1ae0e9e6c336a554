//! Schema integrity validator.

use std::collections::HashSet;

use super::schema::*;

/// Validate a schema for structural integrity.
///
/// Returns `Ok(())` if the schema is valid, or `Err(msg)` with a
/// description. Degenerate schemas (empty or duplicate field names,
/// directly nested optionals) are caller errors and surface here rather
/// than at decode time.
pub fn validate_schema(schema: &Schema) -> Result<(), String> {
    match schema {
        Schema::Bool(_) => Ok(()),
        Schema::Int(_) => Ok(()),
        Schema::Float(_) => Ok(()),
        Schema::Str(_) => Ok(()),
        Schema::Opt(s) => validate_opt(s),
        Schema::Arr(s) => validate_schema(&s.type_),
        Schema::Obj(s) => validate_obj(s),
    }
}

fn validate_opt(s: &OptSchema) -> Result<(), String> {
    if matches!(s.type_.as_ref(), Schema::Opt(_)) {
        return Err("OPT_OPT".into());
    }
    validate_schema(&s.type_)
}

fn validate_obj(s: &ObjSchema) -> Result<(), String> {
    let mut seen = HashSet::new();
    for key in &s.keys {
        if key.key.is_empty() {
            return Err("KEY_EMPTY".into());
        }
        if !seen.insert(key.key.as_str()) {
            return Err("KEY_DUPLICATE".into());
        }
        validate_schema(&key.value)?;
    }
    Ok(())
}
