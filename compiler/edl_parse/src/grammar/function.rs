//! Function bank parsing: `trusted { ... };` and `untrusted { ... };`.

use edl_diagnostic::{EdlError, ErrorCode};
use edl_ir::{
    Declaration, DeclarationParentKind, Function, ParsedAttributeInfo, RETURN_VALUE_NAME,
};

use crate::Parser;

/// Which bank a function block belongs to. The banks have independent
/// signature namespaces but share the ABI-name counter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FunctionBank {
    Trusted,
    Untrusted,
}

impl Parser {
    /// Parse one `trusted`/`untrusted` block, the keyword already consumed.
    pub(crate) fn parse_functions(&mut self, bank: FunctionBank) -> Result<(), EdlError> {
        self.cursor.expect("{")?;

        while self.cursor.current() != "}" {
            let mut function = self.parse_function_declaration()?;
            let signature = function.signature();

            let map = match bank {
                FunctionBank::Trusted => &self.trusted_map,
                FunctionBank::Untrusted => &self.untrusted_map,
            };
            if map.contains_key(&signature) {
                return Err(self
                    .cursor
                    .error_here(ErrorCode::DuplicateFunctionDeclaration)
                    .with_arg(function.name));
            }

            // Overloads share a developer name; the numbered ABI name is
            // what keeps exported symbols unique.
            function.abi_name = format!("{}_{}", function.name, self.abi_function_index);
            self.abi_function_index += 1;

            match bank {
                FunctionBank::Trusted => {
                    self.trusted_map.insert(signature, function.clone());
                    self.trusted_list.push(function);
                }
                FunctionBank::Untrusted => {
                    self.untrusted_map.insert(signature, function.clone());
                    self.untrusted_list.push(function);
                }
            }
        }

        self.cursor.expect("}")?;
        self.cursor.expect(";")?;
        Ok(())
    }

    fn parse_function_declaration(&mut self) -> Result<Function, EdlError> {
        let return_type = self.parse_type_info()?;
        let mut return_info = Declaration::new(
            DeclarationParentKind::Function,
            RETURN_VALUE_NAME,
            return_type,
        );
        return_info.attributes = Some(ParsedAttributeInfo::out_only());

        let name_token = self
            .cursor
            .expect_identifier(ErrorCode::FunctionIdentifierNotFound)?;
        let name = name_token.value;

        // Returned pointers have no size the ABI could copy; data that
        // must flow back by reference goes in an annotated struct instead.
        if return_info.has_pointer() {
            return Err(self
                .cursor
                .error_here(ErrorCode::ReturnValuesCannotBePointers)
                .with_arg(name));
        }
        self.check_reserved_name(&name)?;

        self.cursor.expect("(")?;
        let parameters =
            self.parse_declaration_list(DeclarationParentKind::Function, &name, ")", ",")?;
        self.cursor.expect(")")?;
        self.cursor.expect(";")?;

        Ok(Function {
            name,
            abi_name: String::new(),
            return_info,
            parameters,
        })
    }
}
