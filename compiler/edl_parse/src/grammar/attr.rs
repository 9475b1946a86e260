//! Attribute block parsing: `[in]`, `[out]`, `[in, size=len]`, ...
//!
//! Attributes are collected as `(kind, token)` pairs so duplicate detection
//! works on the attribute kind regardless of value: `[size=1, size=2]` is a
//! duplicate. `in` and `out` take no value; since after either one only `,`
//! or `]` is accepted, a stray `=` fails as an unexpected token.

use edl_diagnostic::{EdlError, ErrorCode};
use edl_ir::{AttributeKind, DeclarationParentKind, ParsedAttributeInfo, Token};

use crate::Parser;

impl Parser {
    /// Parse an optional `[ ... ]` attribute block.
    ///
    /// Returns `None` when the declaration has no block; the caller decides
    /// whether a default direction applies.
    pub(crate) fn parse_attribute_block(
        &mut self,
        parent_kind: DeclarationParentKind,
    ) -> Result<Option<ParsedAttributeInfo>, EdlError> {
        if self.cursor.current() != "[" {
            return Ok(None);
        }
        self.cursor.advance();

        let mut info = ParsedAttributeInfo::default();
        let mut seen: Vec<(AttributeKind, Token)> = Vec::new();

        while self.cursor.current() != "]" {
            let token = self.cursor.advance();
            let kind = self.attribute_kind(&token)?;
            let is_size_or_count = matches!(kind, AttributeKind::Size | AttributeKind::Count);

            if parent_kind == DeclarationParentKind::Struct && !is_size_or_count {
                return Err(self
                    .cursor
                    .error_here(ErrorCode::NonSizeOrCountAttributeInStruct));
            }

            if seen.iter().any(|(existing, _)| *existing == kind) {
                return Err(self.cursor.error_here(ErrorCode::DuplicateAttributeFound));
            }
            seen.push((kind, token));

            match kind {
                AttributeKind::Size => info.size_info = Some(self.parse_attribute_value()?),
                AttributeKind::Count => info.count_info = Some(self.parse_attribute_value()?),
                AttributeKind::In => info.in_present = true,
                AttributeKind::Out => info.out_present = true,
            }
            info.in_and_out_present = info.in_present && info.out_present;

            if self.cursor.current() != "]" {
                self.cursor.expect(",")?;
            }
        }

        self.cursor.expect("]")?;
        Ok(Some(info))
    }

    fn attribute_kind(&self, token: &Token) -> Result<AttributeKind, EdlError> {
        match token.value.as_str() {
            "in" => Ok(AttributeKind::In),
            "out" => Ok(AttributeKind::Out),
            "size" => Ok(AttributeKind::Size),
            "count" => Ok(AttributeKind::Count),
            _ => Err(self
                .cursor
                .error_at(ErrorCode::InvalidAttribute, token)
                .with_arg(token.value.clone())),
        }
    }

    /// Parse `= value` after `size`/`count`. The value must be an
    /// unsigned-integer literal or an identifier; identifiers are resolved
    /// in the final validation pass.
    fn parse_attribute_value(&mut self) -> Result<Token, EdlError> {
        self.cursor.expect("=")?;
        let value = self.cursor.advance();
        if !value.is_identifier() && !value.is_unsigned_integer() {
            return Err(self
                .cursor
                .error_at(ErrorCode::SizeOrCountValueInvalid, &value)
                .with_arg(value.value.clone()));
        }
        Ok(value)
    }
}
