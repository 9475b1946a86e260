//! Enum parsing: named enums and the merged anonymous enum.
//!
//! Member numbering starts at 0 and increments from the last value. An
//! explicit `= N` (decimal or hex) resets the counter; the hex flag is
//! sticky, so members after `= 0x10` keep rendering as hex until the next
//! explicit decimal value.

use edl_diagnostic::{EdlError, ErrorCode};
use edl_ir::{DeveloperType, EdlTypeKind, EnumMember, ANONYMOUS_ENUM_NAME};

use crate::Parser;

impl Parser {
    /// Parse one `enum` block, the keyword already consumed.
    ///
    /// An anonymous block merges into the single anonymous enum type, which
    /// keeps the order-list position of its first block.
    pub(crate) fn parse_enum(&mut self) -> Result<(), EdlError> {
        let header_token = self.cursor.advance();
        let is_anonymous = header_token == "{";

        let type_name = if is_anonymous {
            if !self.developer_types.contains_key(ANONYMOUS_ENUM_NAME) {
                self.register_developer_type(DeveloperType::new(
                    ANONYMOUS_ENUM_NAME,
                    EdlTypeKind::AnonymousEnum,
                ));
            }
            ANONYMOUS_ENUM_NAME.to_string()
        } else {
            if !header_token.is_identifier() {
                return Err(self
                    .cursor
                    .error_at(ErrorCode::EnumNameIdentifierNotFound, &header_token)
                    .with_arg(header_token.value.clone()));
            }
            self.check_type_name(&header_token)?;
            self.register_developer_type(DeveloperType::new(
                &header_token.value,
                EdlTypeKind::Enum,
            ));
            self.cursor.expect("{")?;
            header_token.value
        };

        let mut position: u64 = 0;
        let mut previous_was_hex = false;
        let mut is_default = true;
        let mut new_members: Vec<EnumMember> = Vec::new();

        while self.cursor.current() != "}" {
            let member_token = self.cursor.advance();
            if !member_token.is_identifier() {
                return Err(self
                    .cursor
                    .error_at(ErrorCode::EnumValueIdentifierNotFound, &member_token)
                    .with_arg(member_token.value.clone()));
            }
            let member_name = member_token.value;

            let mut member = EnumMember {
                name: member_name.clone(),
                position,
                declared_position: None,
                value_token: None,
                is_hex: previous_was_hex,
                is_default,
            };

            if self.cursor.current() == "=" {
                self.cursor.advance();
                let value_token = self.cursor.advance();

                let declared = match value_token.as_unsigned() {
                    Some(value) if value_token.is_unsigned_integer() => {
                        previous_was_hex = false;
                        value
                    }
                    Some(value) if value_token.is_hexadecimal() => {
                        previous_was_hex = true;
                        value
                    }
                    _ => {
                        return Err(self
                            .cursor
                            .error_at(ErrorCode::EnumValueNotFound, &value_token)
                            .with_arg(value_token.value.clone()))
                    }
                };

                member.declared_position = Some(declared);
                member.position = declared;
                member.is_hex = previous_was_hex;
                member.value_token = Some(value_token);
                position = declared;
            }

            if self.cursor.current() != "}" {
                self.cursor.expect(",")?;
                // A comma commits to another member; `enum { A, }` fails here.
                if self.cursor.current() == "}" {
                    let brace = self.cursor.current().clone();
                    return Err(self
                        .cursor
                        .error_at(ErrorCode::EnumValueIdentifierNotFound, &brace)
                        .with_arg(brace.value.clone()));
                }
            }

            let already_defined = new_members.iter().any(|earlier| earlier.name == member_name)
                || self
                    .developer_types
                    .get(&type_name)
                    .is_some_and(|existing| existing.has_item(&member_name));
            if already_defined {
                return Err(self
                    .cursor
                    .error_here(ErrorCode::EnumNameDuplicated)
                    .with_arg(member_name));
            }

            new_members.push(member);
            position = position.wrapping_add(1);
            is_default = false;
        }

        self.cursor.expect("}")?;
        self.cursor.expect(";")?;

        if let Some(enum_type) = self.developer_types.get_mut(&type_name) {
            enum_type.items.extend(new_members);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_str;
    use edl_diagnostic::ErrorCode;
    use edl_ir::ANONYMOUS_ENUM_NAME;
    use pretty_assertions::assert_eq;

    #[test]
    fn implicit_positions_count_from_zero() {
        let edl = parse_str("m", "enclave { enum Color { RED, GREEN, BLUE }; };").unwrap();
        let color = edl.developer_type("Color").unwrap();
        let positions: Vec<u64> = color.items.iter().map(|m| m.position).collect();
        assert_eq!(positions, [0, 1, 2]);
        assert!(color.items[0].is_default);
        assert!(!color.items[1].is_default);
    }

    #[test]
    fn explicit_value_resets_the_counter() {
        let edl = parse_str("m", "enclave { enum E { A, B = 10, C }; };").unwrap();
        let e = edl.developer_type("E").unwrap();
        assert_eq!(e.items[0].position, 0);
        assert_eq!(e.items[1].position, 10);
        assert_eq!(e.items[1].declared_position, Some(10));
        assert_eq!(e.items[2].position, 11);
        assert_eq!(e.items[2].declared_position, None);
    }

    #[test]
    fn hex_flag_is_sticky_until_next_decimal() {
        let edl = parse_str("m", "enclave { enum E { A = 0x10, B, C = 2, D }; };").unwrap();
        let e = edl.developer_type("E").unwrap();
        assert!(e.items[0].is_hex);
        assert_eq!(e.items[0].position, 16);
        assert!(e.items[1].is_hex, "implicit member keeps the hex base");
        assert_eq!(e.items[1].position, 17);
        assert!(!e.items[2].is_hex);
        assert!(!e.items[3].is_hex);
    }

    #[test]
    fn anonymous_blocks_merge_into_one_type() {
        let edl = parse_str(
            "m",
            "enclave { enum { A = 4 }; enum { B = 8 }; };",
        )
        .unwrap();
        let anonymous = edl.anonymous_enum().unwrap();
        assert_eq!(anonymous.items.len(), 2);
        assert!(anonymous.has_item("A"));
        assert!(anonymous.has_item("B"));

        // One entry in the order list, at the first block's position.
        let order: Vec<&str> = edl
            .developer_types_order
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(order, [ANONYMOUS_ENUM_NAME]);
    }

    #[test]
    fn duplicate_member_across_anonymous_blocks_fails() {
        let error = parse_str("m", "enclave { enum { A }; enum { A }; };").unwrap_err();
        assert_eq!(error.code(), ErrorCode::EnumNameDuplicated);
    }

    #[test]
    fn single_member_without_trailing_comma_is_legal() {
        let edl = parse_str("m", "enclave { enum E { A }; };").unwrap();
        assert_eq!(edl.developer_type("E").unwrap().items.len(), 1);
    }

    #[test]
    fn trailing_comma_is_rejected() {
        let error = parse_str("m", "enclave { enum E { A, }; };").unwrap_err();
        assert_eq!(error.code(), ErrorCode::EnumValueIdentifierNotFound);
    }

    #[test]
    fn non_numeric_explicit_value_is_rejected() {
        let error = parse_str("m", "enclave { enum E { A = B }; };").unwrap_err();
        assert_eq!(error.code(), ErrorCode::EnumValueNotFound);
    }
}
