//! Naming convention utilities for generated files.
//!
//! | Input | Output |
//! |-------|--------|
//! | `User` | `user` |
//! | `UserProfile` | `user_profile` |
//! | `GitHub` | `git_hub` |
//! | `user profile` | `user_profile` |

use heck::ToSnakeCase;

/// Convert an entity name to the stem of its generated file.
///
/// # Examples
///
/// ```
/// use entgen_core::file_stem;
///
/// assert_eq!(file_stem("UserProfile"), "user_profile");
/// assert_eq!(file_stem("GitHub"), "git_hub");
/// ```
pub fn file_stem(entity_name: &str) -> String {
    entity_name.to_snake_case()
}
