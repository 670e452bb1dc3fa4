//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod expand;
pub(crate) mod separators;

pub(crate) use convert::ConvertArgs;
pub(crate) use expand::ExpandArgs;
