//! Output backends for code generation.
//!
//! Each backend maps field shapes to its own tokens and renders the ordered
//! declarations. All backends implement the [`Backend`](crate::traits::Backend)
//! trait for uniform access via the registry.

// C
#[cfg(feature = "backend-c")]
pub mod c;

#[cfg(feature = "backend-c")]
pub use c::{C_BACKEND, CBackend};

// C++
#[cfg(feature = "backend-cpp")]
pub mod cpp;

#[cfg(feature = "backend-cpp")]
pub use cpp::{CPP_BACKEND, CppBackend};

// Java
#[cfg(feature = "backend-java")]
pub mod java;

#[cfg(feature = "backend-java")]
pub use java::{JAVA_BACKEND, JavaBackend};

// Go
#[cfg(feature = "backend-go")]
pub mod go;

#[cfg(feature = "backend-go")]
pub use go::{GO_BACKEND, GoBackend};

// Rust
#[cfg(feature = "backend-rust")]
pub mod rust;

#[cfg(feature = "backend-rust")]
pub use rust::{RUST_BACKEND, RustBackend};

// TypeScript
#[cfg(feature = "backend-typescript")]
pub mod typescript;

#[cfg(feature = "backend-typescript")]
pub use typescript::{TYPESCRIPT_BACKEND, TypeScriptBackend};

// JavaScript
#[cfg(feature = "backend-javascript")]
pub mod javascript;

#[cfg(feature = "backend-javascript")]
pub use javascript::{JAVASCRIPT_BACKEND, JavaScriptBackend};
