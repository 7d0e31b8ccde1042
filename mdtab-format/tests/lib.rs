// This file is required to make `cargo test` discover tests in subdirectories.

#[cfg(test)]
mod common;

#[cfg(test)]
mod csv;

#[cfg(test)]
mod properties;

#[cfg(test)]
mod table;
