pub mod u501_document_upload;
pub mod u502_batch_clustering;
pub mod u503_evaluation;
pub mod u504_download_results;
