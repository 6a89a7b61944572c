//! Core types: the vector value type, its operands, and errors

pub mod error;
pub mod operand;
pub mod vec3;

pub use error::{Operation, VectorError};
pub use operand::{Operand, OperandKind};
pub use vec3::Vector3;
