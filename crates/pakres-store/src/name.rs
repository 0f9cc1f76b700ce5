//! Resource-name validation shared by every store variant.

use crate::error::{Error, Result};

/// Check that `resource` is a plain file name.
///
/// A resource name addresses exactly one item directly inside a package;
/// empty names, `.`/`..`, separators, and NUL bytes never resolve in any
/// store, so traversal out of a package is not expressible.
pub fn validate(resource: &str) -> Result<&str> {
    if resource.is_empty()
        || resource == "."
        || resource == ".."
        || resource.contains(['/', '\\', '\0'])
    {
        return Err(Error::InvalidName(resource.to_string()));
    }
    Ok(resource)
}
