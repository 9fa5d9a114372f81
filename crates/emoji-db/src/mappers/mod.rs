//! Model → entity mappers
//!
//! Rows whose text columns can hold values the domain rejects (the user
//! role) convert with `TryFrom`; the rest use `From`.

mod activity;
mod emoji;
mod user;
