//! Natural Language Processing components
//!
//! This module provides sentence segmentation, tokenization and stopword
//! filtering.

pub mod sentence;
pub mod stopwords;
pub mod tokenizer;
