//! Type references: primitives, developer types, pointers, `vector<...>`.

use edl_diagnostic::{EdlError, ErrorCode};
use edl_ir::{keywords, EdlTypeInfo, EdlTypeKind};

use crate::Parser;

impl Parser {
    /// Parse a type reference plus an optional `*`.
    ///
    /// The name must be a primitive or a developer type that is already in
    /// the table: forward references are a hard error, which is also what
    /// keeps the type graph acyclic.
    pub(crate) fn parse_type_info(&mut self) -> Result<EdlTypeInfo, EdlError> {
        let type_token = self
            .cursor
            .expect_identifier(ErrorCode::IdentifierNameNotFound)?;
        let type_name = type_token.value.clone();

        let mut type_info = if let Some(kind) = keywords::primitive_kind(&type_name) {
            if kind == EdlTypeKind::Vector {
                self.parse_vector()?
            } else {
                EdlTypeInfo::new(type_name, kind)
            }
        } else if let Some(developer_type) = self.developer_types.get(&type_name) {
            EdlTypeInfo::new(type_name, developer_type.kind)
        } else {
            return Err(self
                .cursor
                .error_at(ErrorCode::DeveloperTypesMustBeDefinedBeforeUse, &type_token)
                .with_arg(type_name));
        };

        if self.cursor.current() == "*" {
            self.cursor.advance();
            type_info.is_pointer = true;

            if self.cursor.current() == "*" {
                return Err(self.cursor.error_here(ErrorCode::PointerToPointerInvalid));
            }
        }

        Ok(type_info)
    }

    /// Parse `<T>` after the `vector` keyword.
    fn parse_vector(&mut self) -> Result<EdlTypeInfo, EdlError> {
        if self.cursor.current() != "<" {
            return Err(self
                .cursor
                .error_here(ErrorCode::VectorDoesNotStartWithArrowBracket));
        }
        self.cursor.advance();

        let element_token = self
            .cursor
            .expect_identifier(ErrorCode::VectorNameIdentifierNotFound)?;
        let element_name = element_token.value;

        let inner = if let Some(kind) = keywords::primitive_kind(&element_name) {
            if kind == EdlTypeKind::Vector {
                // vector<vector<...>> is a second dimension.
                return Err(self
                    .cursor
                    .error_here(ErrorCode::OnlySingleDimensionsSupported));
            }
            EdlTypeInfo::new(element_name, kind)
        } else if let Some(developer_type) = self.developer_types.get(&element_name) {
            EdlTypeInfo::new(developer_type.name.clone(), developer_type.kind)
        } else {
            return Err(self
                .cursor
                .error_here(ErrorCode::TypeInVectorMustBePreviouslyDefined)
                .with_arg(element_name));
        };

        let mut vector_info = EdlTypeInfo::new("vector", EdlTypeKind::Vector);
        vector_info.inner_type = Some(Box::new(inner));
        self.cursor.expect(">")?;
        Ok(vector_info)
    }
}
