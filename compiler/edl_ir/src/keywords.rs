//! Reserved names and the primitive-type table.
//!
//! Both tables are match-based: the set is small and fixed, so there is no
//! runtime map to initialize.

use crate::EdlTypeKind;

/// Look up a built-in type name.
///
/// Covers every primitive spelling plus `vector`. Returns `None` for
/// developer-type names and everything else.
pub fn primitive_kind(name: &str) -> Option<EdlTypeKind> {
    match name {
        "void" => Some(EdlTypeKind::Void),
        "bool" => Some(EdlTypeKind::Bool),
        "char" => Some(EdlTypeKind::Char),
        "wchar_t" => Some(EdlTypeKind::WChar),
        "int8_t" => Some(EdlTypeKind::Int8),
        "int16_t" => Some(EdlTypeKind::Int16),
        "int32_t" => Some(EdlTypeKind::Int32),
        "int64_t" => Some(EdlTypeKind::Int64),
        "uint8_t" => Some(EdlTypeKind::UInt8),
        "uint16_t" => Some(EdlTypeKind::UInt16),
        "uint32_t" => Some(EdlTypeKind::UInt32),
        "uint64_t" => Some(EdlTypeKind::UInt64),
        "float" => Some(EdlTypeKind::Float),
        "double" => Some(EdlTypeKind::Double),
        "size_t" => Some(EdlTypeKind::SizeT),
        "uintptr_t" => Some(EdlTypeKind::UIntPtr),
        "vector" => Some(EdlTypeKind::Vector),
        _ => None,
    }
}

/// True when `name` may not be used for a developer type, function, field
/// or parameter: the structural keywords plus every built-in type name.
pub fn is_reserved(name: &str) -> bool {
    matches!(name, "enclave" | "trusted" | "untrusted" | "enum" | "struct")
        || primitive_kind(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_resolve() {
        assert_eq!(primitive_kind("uint8_t"), Some(EdlTypeKind::UInt8));
        assert_eq!(primitive_kind("size_t"), Some(EdlTypeKind::SizeT));
        assert_eq!(primitive_kind("vector"), Some(EdlTypeKind::Vector));
        assert_eq!(primitive_kind("MyStruct"), None);
    }

    #[test]
    fn keywords_and_primitives_are_reserved() {
        for name in ["enclave", "trusted", "untrusted", "enum", "struct"] {
            assert!(is_reserved(name), "{name} should be reserved");
        }
        assert!(is_reserved("uint64_t"));
        assert!(is_reserved("vector"));
        assert!(!is_reserved("my_function"));
        assert!(!is_reserved("_return_value_"));
    }
}
