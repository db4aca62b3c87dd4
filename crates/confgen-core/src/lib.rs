//! Core library for the confgen file generator.
//!
//! Materializes concrete files from `.in` templates the same way autoconf
//! does, for builds that do not run the autoconf toolchain: every `@KEY@`
//! span in the template is replaced with the value of `KEY` from a
//! caller-supplied property table.
//!
//! The pieces compose linearly:
//! - [`properties::PropertyTable`] — immutable key/value lookup built once
//!   per invocation from `key=value` entries or a JSON file.
//! - [`renderer::render`] — single-pass scanner that substitutes `@KEY@`
//!   spans, or fails with a typed error on the first problem it hits.
//! - [`generate`] — reads `<dest>.in`, renders, and writes `<dest>`
//!   atomically so a failed render never leaves a partial file behind.
//!
//! This crate is driver-agnostic: file selection, batching policy, and
//! argument parsing live in the `confgen` CLI crate.

pub mod error;
pub mod generate;
pub mod properties;
pub mod renderer;
