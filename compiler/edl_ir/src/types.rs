//! The EDL type universe.
//!
//! `EdlTypeKind` is a closed tagged set; `EdlTypeInfo` describes one use of a
//! type in a declaration (name, kind, pointer flag, and the element type for
//! vectors). Developer types are referenced by name and resolved through the
//! module's type table, never by owning links.

use std::fmt;

/// Closed set of type kinds the EDL knows about.
///
/// The variants through `UIntPtr` are the primitives; `Vector` is the only
/// generic container; `Struct`, `Enum` and `AnonymousEnum` are developer
/// types declared in the module.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdlTypeKind {
    Void,
    Bool,
    Char,
    WChar,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    SizeT,
    UIntPtr,
    Vector,
    Struct,
    Enum,
    AnonymousEnum,
}

impl EdlTypeKind {
    /// True for the built-in value types (everything through `UIntPtr`).
    pub fn is_primitive(self) -> bool {
        !matches!(
            self,
            EdlTypeKind::Vector
                | EdlTypeKind::Struct
                | EdlTypeKind::Enum
                | EdlTypeKind::AnonymousEnum
        )
    }

    /// The unsigned-integer subset legal as a `size`/`count` reference.
    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            EdlTypeKind::UInt8
                | EdlTypeKind::UInt16
                | EdlTypeKind::UInt32
                | EdlTypeKind::UInt64
                | EdlTypeKind::SizeT
        )
    }

    /// The EDL spelling of this kind, as used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            EdlTypeKind::Void => "void",
            EdlTypeKind::Bool => "bool",
            EdlTypeKind::Char => "char",
            EdlTypeKind::WChar => "wchar_t",
            EdlTypeKind::Int8 => "int8_t",
            EdlTypeKind::Int16 => "int16_t",
            EdlTypeKind::Int32 => "int32_t",
            EdlTypeKind::Int64 => "int64_t",
            EdlTypeKind::UInt8 => "uint8_t",
            EdlTypeKind::UInt16 => "uint16_t",
            EdlTypeKind::UInt32 => "uint32_t",
            EdlTypeKind::UInt64 => "uint64_t",
            EdlTypeKind::Float => "float",
            EdlTypeKind::Double => "double",
            EdlTypeKind::SizeT => "size_t",
            EdlTypeKind::UIntPtr => "uintptr_t",
            EdlTypeKind::Vector => "vector",
            EdlTypeKind::Struct => "struct",
            EdlTypeKind::Enum => "enum",
            EdlTypeKind::AnonymousEnum => "enum",
        }
    }
}

/// One use of a type inside a declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdlTypeInfo {
    /// The type name as written in the source (`uint8_t`, `vector`, or a
    /// developer type name).
    pub name: String,
    pub kind: EdlTypeKind,
    pub is_pointer: bool,
    /// Element type, populated only when `kind` is [`EdlTypeKind::Vector`].
    pub inner_type: Option<Box<EdlTypeInfo>>,
}

impl EdlTypeInfo {
    pub fn new(name: impl Into<String>, kind: EdlTypeKind) -> Self {
        EdlTypeInfo {
            name: name.into(),
            kind,
            is_pointer: false,
            inner_type: None,
        }
    }

    #[inline]
    pub fn is_vector(&self) -> bool {
        self.kind == EdlTypeKind::Vector
    }
}

/// Formats the type as it contributes to a function signature:
/// `uint8_t*`, `vector<uint32_t>`, `MyStruct`.
impl fmt::Display for EdlTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(inner) = &self.inner_type {
            write!(f, "<{inner}>")?;
        }
        if self.is_pointer {
            f.write_str("*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_subsets() {
        assert!(EdlTypeKind::Void.is_primitive());
        assert!(EdlTypeKind::UIntPtr.is_primitive());
        assert!(!EdlTypeKind::Vector.is_primitive());
        assert!(!EdlTypeKind::Struct.is_primitive());

        assert!(EdlTypeKind::SizeT.is_unsigned_integer());
        assert!(EdlTypeKind::UInt64.is_unsigned_integer());
        assert!(!EdlTypeKind::Int64.is_unsigned_integer());
        assert!(!EdlTypeKind::UIntPtr.is_unsigned_integer());
    }

    #[test]
    fn display_covers_pointers_and_vectors() {
        let mut ptr = EdlTypeInfo::new("uint8_t", EdlTypeKind::UInt8);
        ptr.is_pointer = true;
        assert_eq!(ptr.to_string(), "uint8_t*");

        let mut vec = EdlTypeInfo::new("vector", EdlTypeKind::Vector);
        vec.inner_type = Some(Box::new(EdlTypeInfo::new("uint32_t", EdlTypeKind::UInt32)));
        assert_eq!(vec.to_string(), "vector<uint32_t>");
    }
}
