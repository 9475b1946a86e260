//! Struct parsing.

use edl_diagnostic::{EdlError, ErrorCode};
use edl_ir::{DeclarationParentKind, DeveloperType, EdlTypeKind};

use crate::Parser;

impl Parser {
    /// Parse one `struct` definition, the keyword already consumed.
    ///
    /// The type is registered only after its fields parse, so a struct
    /// cannot reference itself — the field lookup fails as an undefined
    /// type, the same as any other forward reference.
    pub(crate) fn parse_struct(&mut self) -> Result<(), EdlError> {
        let name_token = self.cursor.advance();
        if !name_token.is_identifier() {
            return Err(self
                .cursor
                .error_at(ErrorCode::StructIdentifierNotFound, &name_token)
                .with_arg(name_token.value.clone()));
        }
        self.check_type_name(&name_token)?;
        self.cursor.expect("{")?;

        let fields = self.parse_declaration_list(
            DeclarationParentKind::Struct,
            &name_token.value,
            "}",
            ";",
        )?;

        let mut struct_type = DeveloperType::new(&name_token.value, EdlTypeKind::Struct);
        // Direct flags from the fields themselves; nested-struct metadata is
        // folded in by the final pass.
        struct_type.contains_inner_pointer = fields.iter().any(|field| field.has_pointer());
        struct_type.contains_container_type = fields.iter().any(|field| field.is_container());
        struct_type.fields = fields;

        self.cursor.expect("}")?;
        self.cursor.expect(";")?;

        self.register_developer_type(struct_type);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_str;
    use edl_diagnostic::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_struct_is_legal_with_clear_flags() {
        let edl = parse_str("m", "enclave { struct Empty { }; };").unwrap();
        let empty = edl.developer_type("Empty").unwrap();
        assert!(empty.fields.is_empty());
        assert!(!empty.contains_inner_pointer);
        assert!(!empty.contains_container_type);
    }

    #[test]
    fn direct_metadata_is_set_from_fields() {
        let edl = parse_str(
            "m",
            "enclave { struct S { [size=len] uint8_t* data; size_t len; vector<uint32_t> values; }; };",
        )
        .unwrap();
        let s = edl.developer_type("S").unwrap();
        assert!(s.contains_inner_pointer);
        assert!(s.contains_container_type);
        assert_eq!(s.fields.len(), 3);
    }

    #[test]
    fn self_reference_is_an_undefined_type() {
        let error = parse_str("m", "enclave { struct A { A inner; }; };").unwrap_err();
        assert_eq!(error.code(), ErrorCode::DeveloperTypesMustBeDefinedBeforeUse);
    }

    #[test]
    fn duplicate_field_names_are_rejected() {
        let error =
            parse_str("m", "enclave { struct S { uint8_t x; uint16_t x; }; };").unwrap_err();
        assert_eq!(error.code(), ErrorCode::DuplicateFieldOrParameter);
        assert_eq!(error.args(), ["x".to_string(), "S".to_string()]);
    }

    #[test]
    fn reserved_struct_name_is_rejected() {
        let error = parse_str("m", "enclave { struct vector { }; };").unwrap_err();
        assert_eq!(error.code(), ErrorCode::TypeNameIdentifierIsReserved);
    }
}
