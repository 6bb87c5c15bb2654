//! Inspection format tests (tag, treeviz, json)

mod json;
mod tag;
mod treeviz;
