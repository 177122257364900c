//! Native half of the fuzzy host application's greeting call.
//!
//! This crate provides the `native-lib` library loaded by the
//! `ir.sinapp.fuzzy` host. It exposes functionality via JNI bindings for
//! integration with the JVM.

// Public modules (core logic)
pub mod greeting;
pub mod telemetry;

mod error;

// FFI module for JNI bindings
mod ffi;

pub use error::{FfiError, Result};
pub use ffi::{Java_ir_sinapp_fuzzy_MainActivity_stringFromJNI, JNI_OnLoad};
