//! Postman document model
//!
//! Write-side types for the two files the generator produces: a Collection
//! v2.1.0 document and an Environment document.

mod collection;
mod environment;

pub use collection::{
    AuthType, COLLECTION_SCHEMA_V21, PostmanAuth, PostmanAuthParam, PostmanBody,
    PostmanCollection, PostmanEvent, PostmanHeader, PostmanInfo, PostmanItem, PostmanRequest,
    PostmanScript, PostmanUrl, ScriptListen,
};
pub use environment::{PostmanEnvVariable, PostmanEnvironment, VariableType};
