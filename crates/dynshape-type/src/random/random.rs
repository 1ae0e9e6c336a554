//! Random value generator for schema nodes.

use rand::Rng;
use serde_json::{Map, Value};

use crate::schema::{ArrSchema, ObjSchema, OptSchema, Schema};

/// Generates random dynamic values that conform to a given schema.
///
/// Every generated value decodes successfully against the schema it was
/// generated from: scalars of the declared native kind, optional record
/// keys omitted about half the time, optional nodes null about half the
/// time, sequences of bounded random length.
pub struct Random;

impl Random {
    pub fn new() -> Self {
        Self
    }

    /// Generate a random value matching the given schema node.
    pub fn gen(&self, schema: &Schema) -> Value {
        match schema {
            Schema::Bool(_) => Value::Bool(rand::thread_rng().gen_bool(0.5)),
            Schema::Int(_) => Value::from(rand::thread_rng().gen_range(-1_000_000_i64..=1_000_000)),
            Schema::Float(_) => self.gen_float(),
            Schema::Str(_) => Value::String(self.gen_string()),
            Schema::Opt(s) => self.gen_opt(s),
            Schema::Arr(s) => self.gen_arr(s),
            Schema::Obj(s) => self.gen_obj(s),
        }
    }

    fn gen_float(&self) -> Value {
        let v = rand::thread_rng().gen::<f64>() * 1_000_000.0;
        serde_json::Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or_else(|| Value::Number(0.into()))
    }

    fn gen_string(&self) -> String {
        let mut rng = rand::thread_rng();
        let len = rng.gen_range(0..=16);
        (0..len).map(|_| rng.gen_range(32u8..=126) as char).collect()
    }

    fn gen_opt(&self, s: &OptSchema) -> Value {
        if rand::thread_rng().gen_bool(0.5) {
            Value::Null
        } else {
            self.gen(&s.type_)
        }
    }

    fn gen_arr(&self, s: &ArrSchema) -> Value {
        let count = rand::thread_rng().gen_range(0..=5usize);
        Value::Array((0..count).map(|_| self.gen(&s.type_)).collect())
    }

    fn gen_obj(&self, s: &ObjSchema) -> Value {
        let mut map = Map::new();
        for field in &s.keys {
            if field.is_optional() && rand::thread_rng().gen_bool(0.5) {
                continue;
            }
            map.insert(field.key.clone(), self.gen(&field.value));
        }
        Value::Object(map)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
