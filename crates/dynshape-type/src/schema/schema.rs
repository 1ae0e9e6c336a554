//! Schema AST.
//!
//! One schema tree describes one decode target. The tree is read-only to
//! the decoder and must be acyclic (a cyclic schema is a caller error).

/// Fields common to all schema nodes.
#[derive(Debug, Clone, Default)]
pub struct SchemaBase {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Declares a boolean scalar target.
#[derive(Debug, Clone, Default)]
pub struct BoolSchema {
    pub base: SchemaBase,
}

/// Declares an integer scalar target.
#[derive(Debug, Clone, Default)]
pub struct IntSchema {
    pub base: SchemaBase,
}

/// Declares a floating point scalar target.
#[derive(Debug, Clone, Default)]
pub struct FloatSchema {
    pub base: SchemaBase,
}

/// Declares a text scalar target.
#[derive(Debug, Clone, Default)]
pub struct StrSchema {
    pub base: SchemaBase,
}

/// Wraps another schema node; a null dynamic value decodes as absent
/// instead of recursing into the inner node.
#[derive(Debug, Clone)]
pub struct OptSchema {
    pub base: SchemaBase,
    /// Inner decode target.
    pub type_: Box<Schema>,
}

/// Declares an ordered sequence with one element schema.
#[derive(Debug, Clone)]
pub struct ArrSchema {
    pub base: SchemaBase,
    /// Element type for all positions.
    pub type_: Box<Schema>,
}

/// Represents a single field of a record.
#[derive(Debug, Clone)]
pub struct KeySchema {
    pub base: SchemaBase,
    pub key: String,
    pub value: Box<Schema>,
    pub optional: Option<bool>,
}

impl KeySchema {
    /// Whether the field may be absent from the dynamic mapping.
    pub fn is_optional(&self) -> bool {
        self.optional == Some(true)
    }
}

/// Declares a keyed record with named fields in declaration order.
///
/// Declaration order determines field processing order during decoding.
/// Unknown keys present in the dynamic mapping are ignored.
#[derive(Debug, Clone, Default)]
pub struct ObjSchema {
    pub base: SchemaBase,
    pub keys: Vec<KeySchema>,
}

/// The unified Schema enum covering all schema kinds.
#[derive(Debug, Clone)]
pub enum Schema {
    Bool(BoolSchema),
    Int(IntSchema),
    Float(FloatSchema),
    Str(StrSchema),
    Opt(OptSchema),
    Arr(ArrSchema),
    Obj(ObjSchema),
}

impl Schema {
    /// Returns the "kind" string identifier for this schema node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Opt(_) => "opt",
            Self::Arr(_) => "arr",
            Self::Obj(_) => "obj",
        }
    }

    /// Returns the base schema fields.
    pub fn base(&self) -> &SchemaBase {
        match self {
            Self::Bool(s) => &s.base,
            Self::Int(s) => &s.base,
            Self::Float(s) => &s.base,
            Self::Str(s) => &s.base,
            Self::Opt(s) => &s.base,
            Self::Arr(s) => &s.base,
            Self::Obj(s) => &s.base,
        }
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
