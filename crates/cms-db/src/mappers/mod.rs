//! Model to entity mappers
//!
//! `From<Model> for Entity` converts database rows to domain objects. Rows
//! whose content can be out of the domain's range (e.g. an unknown day name)
//! map through `TryFrom` instead.

mod content;
mod pages;
mod user;
