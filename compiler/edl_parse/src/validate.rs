//! Final validation pass, run after the enclave body closes.
//!
//! Two jobs need the whole module: resolving `size`/`count` identifiers
//! (the referenced sibling may be declared after the pointer that uses it)
//! and folding nested-struct metadata into parents.

use edl_diagnostic::{EdlError, ErrorCode};
use edl_ir::{Declaration, EdlTypeKind, ANONYMOUS_ENUM_NAME};

use crate::Parser;

impl Parser {
    /// Resolve every identifier-valued `size`/`count` token.
    ///
    /// Resolution order: anonymous-enum members first, then a sibling
    /// declaration in the same list. A sibling must be a bare unsigned
    /// integer — no array dimensions, and a kind from the unsigned subset.
    pub(crate) fn validate_size_count_references(&self) -> Result<(), EdlError> {
        for function in self.trusted_list.iter().chain(self.untrusted_list.iter()) {
            self.validate_size_count_list(&function.name, &function.parameters)?;
        }
        for name in &self.type_order {
            if let Some(developer_type) = self.developer_types.get(name) {
                self.validate_size_count_list(&developer_type.name, &developer_type.fields)?;
            }
        }
        Ok(())
    }

    fn validate_size_count_list(
        &self,
        parent_name: &str,
        declarations: &[Declaration],
    ) -> Result<(), EdlError> {
        let anonymous_enum = self.developer_types.get(ANONYMOUS_ENUM_NAME);

        for declaration in declarations {
            for token in declaration.size_count_tokens() {
                // Literals were validated lexically when the attribute parsed.
                if !token.is_identifier() {
                    continue;
                }

                if anonymous_enum.is_some_and(|enum_type| enum_type.has_item(&token.value)) {
                    continue;
                }

                let Some(sibling) = declarations
                    .iter()
                    .find(|candidate| candidate.name == token.value)
                else {
                    return Err(EdlError::new(
                        ErrorCode::SizeOrCountAttributeNotFound,
                        self.cursor.file(),
                        token.line,
                        token.column,
                    )
                    .with_arg(token.value.clone())
                    .with_arg(parent_name));
                };

                if !sibling.array_dimensions.is_empty() {
                    return Err(EdlError::new(
                        ErrorCode::SizeOrCountForArrayNotValid,
                        self.cursor.file(),
                        token.line,
                        token.column,
                    )
                    .with_arg(parent_name));
                }

                if !sibling.type_info.kind.is_unsigned_integer() {
                    return Err(EdlError::new(
                        ErrorCode::SizeOrCountInvalidType,
                        self.cursor.file(),
                        token.line,
                        token.column,
                    )
                    .with_arg(sibling.type_info.kind.display_name())
                    .with_arg(parent_name));
                }
            }
        }
        Ok(())
    }

    /// Fold nested-struct metadata into parents.
    ///
    /// Declare-before-use means every nested struct precedes its user in
    /// `type_order`, so one in-order pass yields the transitive closure.
    pub(crate) fn propagate_struct_metadata(&mut self) {
        for name in self.type_order.clone() {
            let Some(current) = self.developer_types.get(&name) else {
                continue;
            };
            if current.kind != EdlTypeKind::Struct {
                continue;
            }

            let mut inner_pointer = current.contains_inner_pointer;
            let mut container = current.contains_container_type;
            for field in &current.fields {
                if field.is_kind(EdlTypeKind::Struct) {
                    if let Some(nested) = self.developer_types.get(&field.type_info.name) {
                        inner_pointer |= nested.contains_inner_pointer;
                        container |= nested.contains_container_type;
                    }
                }
            }

            if let Some(current) = self.developer_types.get_mut(&name) {
                current.contains_inner_pointer = inner_pointer;
                current.contains_container_type = container;
            }
        }
    }
}
