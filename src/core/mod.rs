pub mod categorizer;
pub mod classifier;
pub mod document_writer;
pub mod structure;
