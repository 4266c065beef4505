// Google Docs integration: share-link id extraction, plain-text export
// fetch, and the CV text parser.

pub mod doc_id;
pub mod fetcher;
pub mod handlers;
pub mod parser;
