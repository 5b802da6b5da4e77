//! Shared request/response contracts and client-side rules for the MedChat
//! web client.
//!
//! Everything in this crate is target independent so the rules can be unit
//! tested natively while the `frontend` crate drives them from wasm.

pub mod domain;
pub mod shared;
pub mod usecases;
