//! Declarations: struct fields and function parameters.
//!
//! Both go through [`Parser::parse_declaration_list`]; the parent kind and
//! the separator/terminator pair are the only differences between a field
//! list (`;` / `}`) and a parameter list (`,` / `)`).

use edl_diagnostic::{EdlError, ErrorCode};
use edl_ir::{Declaration, DeclarationParentKind, EdlTypeKind, ParsedAttributeInfo, Token};
use rustc_hash::FxHashSet;

use crate::Parser;

impl Parser {
    /// Parse declarations until `terminator`, separated by `separator`.
    ///
    /// Per-declaration rules (default direction, pointer restrictions,
    /// duplicate names) are enforced here; the ones needing the complete
    /// module wait for the final pass.
    pub(crate) fn parse_declaration_list(
        &mut self,
        parent_kind: DeclarationParentKind,
        parent_name: &str,
        terminator: &str,
        separator: &str,
    ) -> Result<Vec<Declaration>, EdlError> {
        let mut declarations = Vec::new();
        let mut seen_names = FxHashSet::default();

        while self.cursor.current() != terminator {
            let mut declaration = self.parse_declaration(parent_kind)?;

            // Unannotated function parameters default to [in].
            if parent_kind == DeclarationParentKind::Function && declaration.attributes.is_none() {
                declaration.attributes = Some(ParsedAttributeInfo::in_only());
            }

            self.validate_pointer_rules(&declaration)?;

            if !seen_names.insert(declaration.name.clone()) {
                return Err(self
                    .cursor
                    .error_here(ErrorCode::DuplicateFieldOrParameter)
                    .with_arg(declaration.name)
                    .with_arg(parent_name));
            }
            declarations.push(declaration);

            if self.cursor.current() != terminator {
                self.cursor.expect(separator)?;
            }
        }

        Ok(declarations)
    }

    fn parse_declaration(
        &mut self,
        parent_kind: DeclarationParentKind,
    ) -> Result<Declaration, EdlError> {
        let attributes = self.parse_attribute_block(parent_kind)?;
        let type_info = self.parse_type_info()?;
        let name_token = self
            .cursor
            .expect_identifier(ErrorCode::IdentifierNameNotFound)?;
        self.check_reserved_name(&name_token.value)?;
        let array_dimensions = self.parse_array_dimensions()?;

        let declaration = Declaration {
            parent_kind,
            name: name_token.value,
            type_info,
            attributes,
            array_dimensions,
        };

        // size/count only make sense when there is a pointee to measure.
        if let Some(info) = &declaration.attributes {
            if info.is_size_or_count_present() && !declaration.has_pointer() {
                return Err(self
                    .cursor
                    .error_here(ErrorCode::SizeAndCountNotValidForNonPointer)
                    .with_arg(declaration.type_info.name.clone()));
            }
        }

        Ok(declaration)
    }

    /// Pointer restrictions that are checkable per-declaration.
    fn validate_pointer_rules(&self, declaration: &Declaration) -> Result<(), EdlError> {
        if !declaration.has_pointer() {
            return Ok(());
        }

        // A void pointee has no size; only an explicit size/count makes it
        // marshalable.
        if declaration.is_kind(EdlTypeKind::Void)
            && !declaration
                .attributes
                .as_ref()
                .is_some_and(ParsedAttributeInfo::is_size_or_count_present)
        {
            return Err(self
                .cursor
                .error_here(ErrorCode::PointerToVoidMustBeAnnotated));
        }

        let Some(info) = &declaration.attributes else {
            return Ok(());
        };
        let directed = info.in_present || info.out_present;

        if declaration.parent_kind == DeclarationParentKind::Function {
            if directed && !declaration.array_dimensions.is_empty() {
                return Err(self.cursor.error_here(ErrorCode::PointerToArrayNotAllowed));
            }
            if directed && declaration.is_container() {
                return Err(self.cursor.error_here(ErrorCode::PointerToArrayNotAllowed));
            }
        }

        Ok(())
    }

    /// Parse the optional array dimension: `[N]` or `[EnumConstant]`.
    ///
    /// Identifiers resolve only against the anonymous enum. A second `[`
    /// is rejected before it is consumed.
    fn parse_array_dimensions(&mut self) -> Result<Vec<Token>, EdlError> {
        let mut dimensions = Vec::new();

        while self.cursor.current() == "[" {
            if !dimensions.is_empty() {
                return Err(self
                    .cursor
                    .error_here(ErrorCode::OnlySingleDimensionsSupported));
            }

            self.cursor.advance();
            let value = self.cursor.advance();

            let is_enum_constant = value.is_identifier()
                && self
                    .developer_types
                    .get(edl_ir::ANONYMOUS_ENUM_NAME)
                    .is_some_and(|anonymous| anonymous.has_item(&value.value));

            if !value.is_unsigned_integer() && !is_enum_constant {
                return Err(self
                    .cursor
                    .error_at(ErrorCode::ArrayDimensionIdentifierInvalid, &value)
                    .with_arg(value.value.clone()));
            }

            dimensions.push(value);
            self.cursor.expect("]")?;
        }

        Ok(dimensions)
    }
}
