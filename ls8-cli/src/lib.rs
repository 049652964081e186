//! `.ls8` program loading, kept separate from the `ls8` core so the
//! fetch-decode-execute engine has no notion of files, paths, or text
//! parsing.

pub mod loader;
