//! Error types for the roadnet core library.
//!
//! Defines error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::network::Road;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element was never registered with `create_set`.
    #[error("element `{element}` is not registered in the disjoint set")]
    UnknownElement {
        /// Display form of the unregistered element.
        element: String,
    },
    /// The element was registered twice.
    #[error("element `{element}` is already registered in the disjoint set")]
    DuplicateElement {
        /// Display form of the duplicated element.
        element: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element was never registered.
        UnknownElement => UnknownElement { .. } => "DISJOINT_SET_UNKNOWN_ELEMENT",
        /// The element was registered twice.
        DuplicateElement => DuplicateElement { .. } => "DISJOINT_SET_DUPLICATE_ELEMENT",
    }
}

/// Error type produced while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// A road referenced a district absent from the network's district list.
    #[error("road {road} references unknown district `{district}`")]
    UnknownDistrict {
        /// The label that could not be resolved.
        district: String,
        /// The offending road.
        road: Road,
    },
    /// The network listed the same district label more than once.
    #[error("district `{district}` is listed more than once")]
    DuplicateDistrict {
        /// The repeated label.
        district: String,
    },
    /// The accumulated tree cost does not fit in an `i64`.
    #[error("total cost {total} does not fit in an i64")]
    CostOverflow {
        /// The exact tree cost.
        total: i128,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A road referenced an unknown district.
        UnknownDistrict => UnknownDistrict { .. } => "MST_UNKNOWN_DISTRICT",
        /// The network listed a district more than once.
        DuplicateDistrict => DuplicateDistrict { .. } => "MST_DUPLICATE_DISTRICT",
        /// The tree cost does not fit in an `i64`.
        CostOverflow => CostOverflow { .. } => "MST_COST_OVERFLOW",
    }
}

impl MstError {
    /// Translates a disjoint-set failure raised while processing `road`.
    pub(crate) fn from_disjoint_set(error: DisjointSetError, road: &Road) -> Self {
        match error {
            DisjointSetError::UnknownElement { element } => Self::UnknownDistrict {
                district: element,
                road: road.clone(),
            },
            DisjointSetError::DuplicateElement { element } => {
                Self::DuplicateDistrict { district: element }
            }
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
