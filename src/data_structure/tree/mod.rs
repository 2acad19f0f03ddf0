//! ## 树
//! - TrieMap
pub mod trie_map;
