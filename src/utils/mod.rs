pub(crate) mod hex;

#[cfg(target_os = "windows")]
pub(crate) mod ffialloc;
