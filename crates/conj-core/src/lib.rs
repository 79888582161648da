pub mod conjugate;
pub mod dict;
pub mod document;
pub mod grammar;
pub mod settings;
pub mod template;
pub mod trie;
pub mod unicode;
pub mod variants;
