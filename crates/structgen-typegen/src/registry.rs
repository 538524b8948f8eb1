//! Registry for code generation backends.

use crate::traits::Backend;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Global registry of backends.
static BACKENDS: RwLock<Vec<&'static dyn Backend>> = RwLock::new(Vec::new());
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom backend.
///
/// Built-in backends are registered automatically on first use. A custom
/// backend registered under a built-in name is shadowed by the built-in.
pub fn register_backend(backend: &'static dyn Backend) {
    init_builtin();
    BACKENDS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(backend);
}

/// Initialize built-in backends (called automatically on first use).
fn init_builtin() {
    INITIALIZED.get_or_init(|| {
        let mut backends = BACKENDS.write().unwrap_or_else(PoisonError::into_inner);

        #[cfg(feature = "backend-c")]
        {
            backends.push(&crate::output::c::C_BACKEND);
        }

        #[cfg(feature = "backend-cpp")]
        {
            backends.push(&crate::output::cpp::CPP_BACKEND);
        }

        #[cfg(feature = "backend-java")]
        {
            backends.push(&crate::output::java::JAVA_BACKEND);
        }

        #[cfg(feature = "backend-go")]
        {
            backends.push(&crate::output::go::GO_BACKEND);
        }

        #[cfg(feature = "backend-rust")]
        {
            backends.push(&crate::output::rust::RUST_BACKEND);
        }

        #[cfg(feature = "backend-typescript")]
        {
            backends.push(&crate::output::typescript::TYPESCRIPT_BACKEND);
        }

        #[cfg(feature = "backend-javascript")]
        {
            backends.push(&crate::output::javascript::JAVASCRIPT_BACKEND);
        }
    });
}

/// Get a backend by name.
pub fn get_backend(name: &str) -> Option<&'static dyn Backend> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find(|b| b.name() == name)
        .copied()
}

/// Get all backends for a language.
pub fn backends_for_language(language: &str) -> Vec<&'static dyn Backend> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .filter(|b| b.language() == language)
        .copied()
        .collect()
}

/// Get the backend that writes files with the given extension.
pub fn backend_for_extension(extension: &str) -> Option<&'static dyn Backend> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find(|b| b.extension() == extension)
        .copied()
}

/// List all registered backends.
pub fn backends() -> Vec<&'static dyn Backend> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// List all registered backend names.
pub fn backend_names() -> Vec<&'static str> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .map(|b| b.name())
        .collect()
}
