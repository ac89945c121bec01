//! Password credential primitive behind the `hashpass` CLI. The library is
//! deliberately small and transparent: two stateless operations that wrap
//! Argon2id, so host applications can reuse them without the binary.

pub mod password;
