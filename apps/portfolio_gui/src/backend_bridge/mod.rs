//! Backend bridge: command queue consumer hosting the async relay call.

pub mod commands;
pub mod runtime;
