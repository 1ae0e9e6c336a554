//! Schema builder.
//!
//! Provides a fluent API for constructing schema values.

use super::schema::*;

/// Builder for constructing schema values.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder;

#[allow(non_snake_case)]
impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Shorthand property accessors (no options)

    pub fn bool(&self) -> Schema {
        self.Boolean(None)
    }

    pub fn int(&self) -> Schema {
        self.Integer(None)
    }

    pub fn float(&self) -> Schema {
        self.Float(None)
    }

    pub fn str(&self) -> Schema {
        self.String(None)
    }

    pub fn opt(&self, type_: Schema) -> Schema {
        self.Optional(type_, None)
    }

    pub fn arr(&self, type_: Schema) -> Schema {
        self.Array(type_, None)
    }

    pub fn obj(&self) -> Schema {
        self.Object(vec![], None)
    }

    // ------------------------------------------------------------------
    // Named constructors

    pub fn Boolean(&self, base: Option<SchemaBase>) -> Schema {
        Schema::Bool(BoolSchema {
            base: base.unwrap_or_default(),
        })
    }

    pub fn Integer(&self, base: Option<SchemaBase>) -> Schema {
        Schema::Int(IntSchema {
            base: base.unwrap_or_default(),
        })
    }

    pub fn Float(&self, base: Option<SchemaBase>) -> Schema {
        Schema::Float(FloatSchema {
            base: base.unwrap_or_default(),
        })
    }

    pub fn String(&self, base: Option<SchemaBase>) -> Schema {
        Schema::Str(StrSchema {
            base: base.unwrap_or_default(),
        })
    }

    pub fn Optional(&self, type_: Schema, base: Option<SchemaBase>) -> Schema {
        Schema::Opt(OptSchema {
            base: base.unwrap_or_default(),
            type_: Box::new(type_),
        })
    }

    pub fn Array(&self, type_: Schema, base: Option<SchemaBase>) -> Schema {
        Schema::Arr(ArrSchema {
            base: base.unwrap_or_default(),
            type_: Box::new(type_),
        })
    }

    pub fn Object(&self, keys: Vec<KeySchema>, base: Option<SchemaBase>) -> Schema {
        Schema::Obj(ObjSchema {
            base: base.unwrap_or_default(),
            keys,
        })
    }

    pub fn Key(&self, key: impl Into<String>, value: Schema) -> KeySchema {
        KeySchema {
            base: SchemaBase::default(),
            key: key.into(),
            value: Box::new(value),
            optional: None,
        }
    }

    pub fn KeyOpt(&self, key: impl Into<String>, value: Schema) -> KeySchema {
        KeySchema {
            base: SchemaBase::default(),
            key: key.into(),
            value: Box::new(value),
            optional: Some(true),
        }
    }
}

/// Global default schema builder.
pub static S: SchemaBuilder = SchemaBuilder;
