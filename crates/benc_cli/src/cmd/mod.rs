/// Input validation command.
pub mod check;
/// Key path lookup command.
pub mod get;
/// Tree statistics command.
pub mod info;
/// JSON rendering of value trees.
pub mod json;
/// Indented tree printer.
pub mod print;
/// Tree dump command.
pub mod show;
/// Shared input loading and rendering helpers.
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;
