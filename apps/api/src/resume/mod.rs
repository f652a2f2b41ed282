// Resume intake: multipart upload, text extraction, listing.

pub mod handlers;
pub mod upload;
