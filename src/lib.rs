//! Workspace root package; exists only to carry the rusty-hook pre-commit configuration.
