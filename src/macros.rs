//! Macros for code generation in response view types.
//!
//! This module provides macros to reduce boilerplate in view implementations,
//! particularly for the many accessors that read one string field by name.

/// Macro to generate string accessor methods for an [`Envelope`](crate::Envelope) type.
///
/// This macro is designed to be used inside impl blocks. Each entry
/// `method => "key"` generates a `#[must_use]` method returning the string
/// stored under `key`, or `None` when it is missing or not a string.
///
/// # Example
///
/// ```ignore
/// impl TitleResponse {
///     envelope_str_accessors! {
///         /// The medium (print, online, ...)
///         medium => "medium",
///     }
/// }
/// ```
#[macro_export]
macro_rules! envelope_str_accessors {
    ($($(#[$meta:meta])* $method:ident => $key:expr),* $(,)?) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $method(&self) -> Option<&str> {
                $crate::envelope::Envelope::field_str(self, $key)
            }
        )*
    };
}
