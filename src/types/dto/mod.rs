// Request and response payloads exposed through the OpenAPI surface
pub mod common;
pub mod items;
