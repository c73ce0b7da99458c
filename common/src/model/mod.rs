pub mod attachment;
pub mod composer;
pub mod data_uri;
pub mod draft;
