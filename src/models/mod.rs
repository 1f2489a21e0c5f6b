mod client;
mod phone;

pub use client::{Client, ClientChanges, ClientFilter, ClientRecord};
pub use phone::parse_phones;
