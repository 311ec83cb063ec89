use super::{EvalError, Object};
use fnv::FnvHasher;
use std::convert::TryFrom;
use std::hash::Hasher;

/// Content-addressed key for hash maps. Two hashable objects with equal
/// contents yield equal keys even when they are distinct allocations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashKey {
    object_type: &'static str,
    value: u64,
}

impl TryFrom<&Object> for HashKey {
    type Error = EvalError;

    fn try_from(obj: &Object) -> std::result::Result<Self, Self::Error> {
        let value = match obj {
            Object::Integer(n) => *n as u64,
            Object::Boolean(b) => *b as u64,
            Object::String(s) => {
                let mut hasher = FnvHasher::default();
                hasher.write(s.as_bytes());
                hasher.finish()
            }
            obj => {
                return Err(EvalError::NotHashable {
                    type_name: obj.type_name(),
                })
            }
        };

        Ok(Self {
            object_type: obj.type_name(),
            value,
        })
    }
}
