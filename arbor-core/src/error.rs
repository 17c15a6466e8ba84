//! Error types for the Arbor core library.
//!
//! Defines the graph-construction error enum exposed by the public API, a
//! stable machine-readable code enum, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced while validating and constructing a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The same node name was declared more than once.
    #[error("node `{node}` is declared more than once")]
    DuplicateNode {
        /// The node name that appeared twice in the declaration list.
        node: Arc<str>,
    },
    /// An edge referenced a node that is not in the declared node list.
    #[error("edge ({from}, {to}) references undeclared node `{node}`")]
    UnknownEndpoint {
        /// The undeclared node name referenced by the edge.
        node: Arc<str>,
        /// The edge's `from` endpoint as declared.
        from: Arc<str>,
        /// The edge's `to` endpoint as declared.
        to: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The same node name was declared more than once.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE",
        /// An edge referenced a node that is not in the declared node list.
        UnknownEndpoint => UnknownEndpoint { .. } => "GRAPH_UNKNOWN_ENDPOINT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
