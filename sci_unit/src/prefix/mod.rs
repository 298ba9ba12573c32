/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod prefix_trait;

#[macro_use]
mod prefix_macro {
    /// Declares a prefix enum together with its power and symbol tables.
    /// Variants must be listed from the smallest to the largest power,
    /// and include `Unit` for the empty prefix.
    macro_rules! prefix_enum {
        ($(#[$meta:meta])* $name:ident, $base:expr,
         [ $( $variant:ident = $power:expr, $symbol:expr ),+ $(,)? ]) => {
            $(#[$meta])*
            #[derive(
                serde::Serialize,
                serde::Deserialize,
                PartialEq,
                PartialOrd,
                Eq,
                Ord,
                Hash,
                Clone,
                Copy,
                Debug,
            )]
            #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
            pub enum $name {
                $($variant),+
            }

            impl $crate::prefix::Prefix for $name {
                const BASE: u64 = $base;
                const SCALE: &'static [Self] = &[$(Self::$variant),+];
                const UNIT: Self = Self::Unit;

                fn power(&self) -> i64 {
                    match self {
                        $(Self::$variant => $power),+
                    }
                }

                fn prefix(&self) -> &'static str {
                    match self {
                        $(Self::$variant => $symbol),+
                    }
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(
                    &self,
                    f: &mut std::fmt::Formatter,
                ) -> Result<(), std::fmt::Error> {
                    write!(f, "{}", $crate::prefix::Prefix::prefix(self))
                }
            }
        };
    }
}

pub mod frac_prefix;
pub mod si_prefix;

pub use prefix_trait::Prefix;

pub use frac_prefix::FracPrefix;
pub use si_prefix::SiPrefix;
