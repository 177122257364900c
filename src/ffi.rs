//! FFI module containing all JNI bindings.
//!
//! This module serves as the boundary between Rust and the JVM. All exported
//! entry points and host types are confined here; the rest of the crate stays
//! host-independent.

use std::os::raw::c_void;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use jni::objects::{JObject, JString};
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};

use crate::error::{FfiError, Result};
use crate::greeting;
use crate::telemetry;

/// Library load hook.
///
/// The VM calls this once per `System.loadLibrary`. Logging is set up here so
/// boundary events are visible from the first call.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    telemetry::init();
    tracing::debug!("native-lib loaded");
    JNI_VERSION_1_6
}

/// Binding for `ir.sinapp.fuzzy.MainActivity.stringFromJNI`.
///
/// Constructs the greeting and hands ownership of the managed string to the
/// VM. On failure a `RuntimeException` is left pending and null is returned.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_ir_sinapp_fuzzy_MainActivity_stringFromJNI<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    // Panics must not unwind into the VM.
    let result = panic::catch_unwind(AssertUnwindSafe(|| new_host_string(&mut env)));

    match result {
        Ok(Ok(s)) => s.into_raw(),
        Ok(Err(err)) => {
            signal_failure(&mut env, &err);
            ptr::null_mut()
        }
        Err(_) => {
            signal_failure(
                &mut env,
                &FfiError::StringAlloc("panic in native call".into()),
            );
            ptr::null_mut()
        }
    }
}

/// Copies the greeting into a VM-owned string.
///
/// The VM registers the result with its own memory manager; the native side
/// must not retain or free the handle after returning it.
fn new_host_string<'local>(env: &mut JNIEnv<'local>) -> Result<JString<'local>> {
    let value = greeting::greeting();
    tracing::trace!(len = value.len(), "constructing host string");
    env.new_string(value).map_err(FfiError::from)
}

/// Reports a failed native call through the host's error convention.
fn signal_failure(env: &mut JNIEnv<'_>, err: &FfiError) {
    tracing::error!(error = %err, "native call failed");
    // An exception may already be pending (the usual cause of the failure);
    // raising a second one before it is handled is itself a JNI error.
    if let Ok(false) = env.exception_check() {
        let _ = env.throw_new("java/lang/RuntimeException", err.to_string());
    }
}
