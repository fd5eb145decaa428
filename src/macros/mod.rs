/// Declares a code table: a fieldless enum of symbolic names where every
/// name carries a dialing code. Codes may repeat between names, which is why
/// they are not used as discriminants.
///
/// Generates `code()` for the enum, everything else (iteration, name
/// parsing) comes from the strum derives given in the attributes.
macro_rules! code_table {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $name {
            /// Dialing code this name stands for.
            pub const fn code(self) -> u8 {
                match self {
                    $( Self::$variant => $code ),+
                }
            }
        }
    };
}

/// Expands to one `is_<name>()` method per listed code name, each of them
/// delegating to the alias-aware comparison of the stored code.
macro_rules! name_queries {
    ($( $method:ident => $name:expr ),+ $(,)?) => {
        $(
            #[inline]
            pub fn $method(&self) -> bool {
                self.operator_or_region.denotes(CodeName::from($name))
            }
        )+
    };
}

pub(crate) use code_table;
pub(crate) use name_queries;
