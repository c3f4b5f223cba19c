/// JSON-LD adapter materializing SPDX 3 documents into the object graph
mod document_reader;

pub use document_reader::JsonLdDocumentReader;
