//! Integration suite: end-to-end edits over real script text, asserting
//! on the reprinted bytes and the updated configuration graph.

mod common;

mod add_dependency;
mod ordering;
mod use_https;
