//! Trusted and untrusted function declarations.

use std::fmt::Write as _;

use crate::Declaration;

/// Name of the synthetic declaration describing a function's return value.
pub const RETURN_VALUE_NAME: &str = "_return_value_";

/// One function from the `trusted` or `untrusted` bank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    /// The developer-facing name; overloads share it.
    pub name: String,
    /// Unique exported symbol name (`{name}_{index}`), assigned in parse
    /// order across both banks.
    pub abi_name: String,
    /// Synthetic declaration for the return value: named
    /// [`RETURN_VALUE_NAME`], direction `[out]`, never a pointer.
    pub return_info: Declaration,
    pub parameters: Vec<Declaration>,
}

impl Function {
    /// Signature string used for duplicate detection within a bank:
    /// `name(type1,type2,...)`. Overloads differ here even though their
    /// `name` is shared.
    pub fn signature(&self) -> String {
        let mut signature = String::with_capacity(self.name.len() + 16);
        signature.push_str(&self.name);
        signature.push('(');
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                signature.push(',');
            }
            let _ = write!(signature, "{}", parameter.type_info);
        }
        signature.push(')');
        signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeclarationParentKind, EdlTypeInfo, EdlTypeKind};
    use pretty_assertions::assert_eq;

    fn param(name: &str, ty: &str, kind: EdlTypeKind, pointer: bool) -> Declaration {
        let mut info = EdlTypeInfo::new(ty, kind);
        info.is_pointer = pointer;
        Declaration::new(DeclarationParentKind::Function, name, info)
    }

    fn void_return() -> Declaration {
        Declaration::new(
            DeclarationParentKind::Function,
            RETURN_VALUE_NAME,
            EdlTypeInfo::new("void", EdlTypeKind::Void),
        )
    }

    #[test]
    fn signature_distinguishes_overloads() {
        let f32 = Function {
            name: "F".into(),
            abi_name: "F_0".into(),
            return_info: void_return(),
            parameters: vec![param("x", "uint32_t", EdlTypeKind::UInt32, false)],
        };
        let f64 = Function {
            name: "F".into(),
            abi_name: "F_1".into(),
            return_info: void_return(),
            parameters: vec![param("x", "uint64_t", EdlTypeKind::UInt64, false)],
        };
        assert_eq!(f32.signature(), "F(uint32_t)");
        assert_eq!(f64.signature(), "F(uint64_t)");
        assert_ne!(f32.signature(), f64.signature());
    }

    #[test]
    fn signature_includes_pointers() {
        let f = Function {
            name: "Write".into(),
            abi_name: "Write_0".into(),
            return_info: void_return(),
            parameters: vec![
                param("buf", "uint8_t", EdlTypeKind::UInt8, true),
                param("len", "size_t", EdlTypeKind::SizeT, false),
            ],
        };
        assert_eq!(f.signature(), "Write(uint8_t*,size_t)");
    }
}
