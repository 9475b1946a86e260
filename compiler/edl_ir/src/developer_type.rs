//! Developer-declared types: structs, enums, and the anonymous enum.

use crate::{Declaration, EdlTypeKind, Token};

/// Internal name under which all anonymous `enum { ... }` blocks merge.
/// The leading/trailing underscores keep it out of the way of any name a
/// developer can write next to it in diagnostics.
pub const ANONYMOUS_ENUM_NAME: &str = "__anonymous_enum__";

/// One enum member.
///
/// `position` is the effective value; `declared_position` is set only when
/// the source carried an explicit `= N`. `is_hex` records the base of the
/// most recent explicit value, so implicitly numbered members that follow a
/// hex value render as hex too.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumMember {
    pub name: String,
    pub position: u64,
    pub declared_position: Option<u64>,
    pub value_token: Option<Token>,
    pub is_hex: bool,
    /// True for the first member of the enum.
    pub is_default: bool,
}

/// A struct or enum declared in the module.
///
/// For enums `fields` is empty; for structs `items` is empty. The two
/// `contains_*` flags are the transitive closure over struct-typed fields,
/// filled in by the parser's final pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeveloperType {
    pub name: String,
    /// `Struct`, `Enum` or `AnonymousEnum`.
    pub kind: EdlTypeKind,
    pub fields: Vec<Declaration>,
    /// Members in declaration order.
    pub items: Vec<EnumMember>,
    pub contains_inner_pointer: bool,
    pub contains_container_type: bool,
}

impl DeveloperType {
    pub fn new(name: impl Into<String>, kind: EdlTypeKind) -> Self {
        DeveloperType {
            name: name.into(),
            kind,
            fields: Vec::new(),
            items: Vec::new(),
            contains_inner_pointer: false,
            contains_container_type: false,
        }
    }

    /// Look up an enum member by name.
    pub fn item(&self, name: &str) -> Option<&EnumMember> {
        self.items.iter().find(|member| member.name == name)
    }

    #[inline]
    pub fn has_item(&self, name: &str) -> bool {
        self.item(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_lookup_is_by_name() {
        let mut ty = DeveloperType::new(ANONYMOUS_ENUM_NAME, EdlTypeKind::AnonymousEnum);
        ty.items.push(EnumMember {
            name: "BUFFER_LEN".into(),
            position: 0,
            declared_position: None,
            value_token: None,
            is_hex: false,
            is_default: true,
        });
        assert!(ty.has_item("BUFFER_LEN"));
        assert!(!ty.has_item("MISSING"));
        assert_eq!(ty.item("BUFFER_LEN").unwrap().position, 0);
    }
}
