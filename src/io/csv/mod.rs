//! CSV reading for registration records.

mod columns;
mod read;

pub(crate) use read::*;
