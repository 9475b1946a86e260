//! Error codes for all EDL analysis failures.
//!
//! The taxonomy is closed: every way a parse or validation can fail has
//! exactly one discriminant here. Code names are stable; message templates
//! are not.
//!
//! All codes are declared in a single [`define_error_codes!`] invocation.
//! The macro generates the `ErrorCode` enum, `ALL`, `COUNT`, `as_str()`,
//! `template()`, `Display`, and `FromStr`.

use std::fmt;
use std::str::FromStr;

/// Declare all error codes in a single location.
///
/// Each entry is `$variant, $template` where `$template` is the message
/// template with positional `{0}`/`{1}` argument slots.
macro_rules! define_error_codes {
    ($( $variant:ident, $template:literal );+ $(;)?) => {
        /// Discriminant of an EDL analysis failure.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum ErrorCode {
            $(
                #[doc = $template]
                $variant,
            )+
        }

        impl ErrorCode {
            /// All codes, for exhaustive iteration and testing.
            pub const ALL: &'static [ErrorCode] = &[ $( ErrorCode::$variant, )+ ];

            /// Number of codes in the taxonomy.
            pub const COUNT: usize = [ $( ErrorCode::$variant, )+ ].len();

            /// The code name as a string (e.g. `"UnexpectedToken"`).
            pub fn as_str(self) -> &'static str {
                match self {
                    $( ErrorCode::$variant => stringify!($variant), )+
                }
            }

            /// The message template with positional argument slots.
            pub fn template(self) -> &'static str {
                match self {
                    $( ErrorCode::$variant => $template, )+
                }
            }
        }

        impl FromStr for ErrorCode {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($variant) => Ok(ErrorCode::$variant), )+
                    _ => Err(()),
                }
            }
        }
    };
}

define_error_codes! {
    ExpectedTokenNotFound, "expected `{0}` but found `{1}`";
    UnexpectedToken, "unexpected token `{0}`";
    DuplicateTypeDefinition, "type `{0}` is already defined";
    TypeNameIdentifierIsReserved, "`{0}` is a reserved name";
    DuplicateFieldOrParameter, "`{0}` is already declared in `{1}`";
    EnumNameIdentifierNotFound, "expected an enum name, found `{0}`";
    EnumValueIdentifierNotFound, "expected an enum member name, found `{0}`";
    EnumValueNotFound, "expected a decimal or hexadecimal value, found `{0}`";
    EnumNameDuplicated, "enum member `{0}` is already defined";
    StructIdentifierNotFound, "expected a struct name, found `{0}`";
    IdentifierNameNotFound, "expected an identifier, found `{0}`";
    InvalidAttribute, "`{0}` is not a valid attribute";
    DuplicateAttributeFound, "duplicate attribute in attribute block";
    NonSizeOrCountAttributeInStruct, "only `size` and `count` attributes are valid for struct fields";
    SizeOrCountValueInvalid, "`{0}` is not a valid `size` or `count` value";
    SizeAndCountNotValidForNonPointer, "`size` and `count` require a pointer, but `{0}` is not one";
    SizeOrCountAttributeNotFound, "`size`/`count` value `{0}` does not name a declaration in `{1}`";
    SizeOrCountForArrayNotValid, "`size`/`count` in `{0}` refers to an array declaration";
    SizeOrCountInvalidType, "`size`/`count` declaration of type `{0}` in `{1}` is not an unsigned integer";
    PointerToVoidMustBeAnnotated, "a `void` pointer must carry a `size` or `count` attribute";
    PointerToPointerInvalid, "pointers to pointers are not supported";
    PointerToArrayNotAllowed, "a pointer parameter cannot also be an array or vector";
    ReturnValuesCannotBePointers, "function `{0}` cannot return a pointer";
    OnlySingleDimensionsSupported, "only single-dimension arrays are supported";
    ArrayDimensionIdentifierInvalid, "`{0}` is not a valid array dimension";
    FunctionIdentifierNotFound, "expected a function name, found `{0}`";
    DuplicateFunctionDeclaration, "function `{0}` is already declared with this signature";
    VectorDoesNotStartWithArrowBracket, "expected `<` after `vector`";
    VectorNameIdentifierNotFound, "expected a type name inside `vector<...>`, found `{0}`";
    TypeInVectorMustBePreviouslyDefined, "type `{0}` used in a vector must be defined first";
    DeveloperTypesMustBeDefinedBeforeUse, "type `{0}` must be defined before use";
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_is_complete() {
        assert_eq!(ErrorCode::COUNT, 31);
        assert_eq!(ErrorCode::ALL.len(), ErrorCode::COUNT);
    }

    #[test]
    fn round_trips_through_strings() {
        for code in ErrorCode::ALL {
            assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
        }
        assert_eq!("NotACode".parse::<ErrorCode>(), Err(()));
    }

    #[test]
    fn templates_are_nonempty() {
        for code in ErrorCode::ALL {
            assert!(!code.template().is_empty(), "{code} has no template");
        }
    }
}
