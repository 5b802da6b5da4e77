pub mod document_analysis;
