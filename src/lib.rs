#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

pub mod data_structure;

pub use data_structure::tree::trie_map;
pub use data_structure::tree::trie_map::TrieMap;
