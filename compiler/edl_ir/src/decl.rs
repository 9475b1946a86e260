//! Declarations: struct fields, function parameters, and their attributes.

use crate::{EdlTypeInfo, EdlTypeKind, Token};

/// What a declaration belongs to. Some rules differ between the two
/// (attribute legality, default direction, pointer restrictions).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationParentKind {
    Function,
    Struct,
}

/// The attribute keywords legal inside `[ ... ]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    In,
    Out,
    Size,
    Count,
}

/// Parsed contents of one `[ ... ]` attribute block.
///
/// `in_and_out_present` is derived: it is true exactly when both directions
/// were given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParsedAttributeInfo {
    pub in_present: bool,
    pub out_present: bool,
    pub in_and_out_present: bool,
    /// Value token of `size=...`, either an unsigned-integer literal or an
    /// identifier resolved during final validation.
    pub size_info: Option<Token>,
    /// Value token of `count=...`, same shapes as `size_info`.
    pub count_info: Option<Token>,
}

impl ParsedAttributeInfo {
    /// The implicit direction of an unannotated function parameter.
    pub fn in_only() -> Self {
        ParsedAttributeInfo {
            in_present: true,
            ..ParsedAttributeInfo::default()
        }
    }

    /// The direction of the synthetic return-value declaration.
    pub fn out_only() -> Self {
        ParsedAttributeInfo {
            out_present: true,
            ..ParsedAttributeInfo::default()
        }
    }

    #[inline]
    pub fn is_size_or_count_present(&self) -> bool {
        self.size_info.is_some() || self.count_info.is_some()
    }
}

/// A struct field, a function parameter, or the synthetic return value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub parent_kind: DeclarationParentKind,
    pub name: String,
    pub type_info: EdlTypeInfo,
    /// Absent when no `[ ... ]` block was written; the parser fills the
    /// default `[in]` for function parameters.
    pub attributes: Option<ParsedAttributeInfo>,
    /// At most one dimension token (`[N]` or `[EnumConstant]`).
    pub array_dimensions: Vec<Token>,
}

impl Declaration {
    pub fn new(parent_kind: DeclarationParentKind, name: impl Into<String>, type_info: EdlTypeInfo) -> Self {
        Declaration {
            parent_kind,
            name: name.into(),
            type_info,
            attributes: None,
            array_dimensions: Vec::new(),
        }
    }

    #[inline]
    pub fn has_pointer(&self) -> bool {
        self.type_info.is_pointer
    }

    /// True when the declared type is the `vector` container.
    #[inline]
    pub fn is_container(&self) -> bool {
        self.type_info.kind == EdlTypeKind::Vector
    }

    #[inline]
    pub fn is_kind(&self, kind: EdlTypeKind) -> bool {
        self.type_info.kind == kind
    }

    /// The `size`/`count` value tokens this declaration carries, for the
    /// final resolution pass. Order is size first, then count.
    pub fn size_count_tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        if let Some(info) = &self.attributes {
            if let Some(size) = &info.size_info {
                tokens.push(size);
            }
            if let Some(count) = &info.count_info {
                tokens.push(count);
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenClass;

    fn sized_counted_decl() -> Declaration {
        let mut ty = EdlTypeInfo::new("uint8_t", EdlTypeKind::UInt8);
        ty.is_pointer = true;
        let mut decl = Declaration::new(DeclarationParentKind::Function, "buf", ty);
        decl.attributes = Some(ParsedAttributeInfo {
            in_present: true,
            size_info: Some(Token::new("len", TokenClass::Identifier, 1, 10)),
            count_info: Some(Token::new("n", TokenClass::Identifier, 1, 20)),
            ..ParsedAttributeInfo::default()
        });
        decl
    }

    #[test]
    fn size_count_tokens_returns_both_tokens() {
        let decl = sized_counted_decl();
        let tokens = decl.size_count_tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].value, "len");
        assert_eq!(tokens[1].value, "n");
    }

    #[test]
    fn derived_direction_helpers() {
        assert!(ParsedAttributeInfo::in_only().in_present);
        assert!(!ParsedAttributeInfo::in_only().out_present);
        assert!(ParsedAttributeInfo::out_only().out_present);
        assert!(!ParsedAttributeInfo::out_only().in_and_out_present);
    }
}
