//! Shared helpers

pub mod common;
pub mod id_gen;

pub use common::mask_string;
pub use id_gen::{generate_id, generate_uuid, IdGenerator, RandomIdGenerator, SequentialIdGenerator, UuidGenerator};
