//! The read API: raw bytes, decoded text, byte streams.

use std::io::Read;

use pakres_codec::{Encoding, ErrorPolicy, decode};
use pakres_store::ResourceStore;

use crate::error::Result;
use crate::package::{Package, PackageRef};
use crate::resolver::Resolver;

/// Decoding parameters for text reads. Defaults are utf-8 and strict.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextOptions {
    pub encoding: Encoding,
    pub errors: ErrorPolicy,
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn errors(mut self, errors: ErrorPolicy) -> Self {
        self.errors = errors;
        self
    }
}

impl Package {
    /// Complete raw byte sequence of one resource.
    pub fn read_binary(&self, resource: &str) -> Result<Vec<u8>> {
        self.store_result(self.store().read(resource))
    }

    /// Text of one resource, decoded as utf-8 with the strict policy.
    pub fn read_text(&self, resource: &str) -> Result<String> {
        self.read_text_with(resource, TextOptions::default())
    }

    /// Text of one resource under explicit decoding parameters.
    pub fn read_text_with(&self, resource: &str, options: TextOptions) -> Result<String> {
        let bytes = self.read_binary(resource)?;
        Ok(decode(&bytes, options.encoding, options.errors)?)
    }

    /// Byte stream over one resource.
    pub fn open_binary(&self, resource: &str) -> Result<Box<dyn Read + Send>> {
        self.store_result(self.store().open(resource))
    }

    /// Whether `resource` names a file in this package. Names that can
    /// never resolve (separators, `.`/`..`) are rejected, not absent.
    pub fn is_resource(&self, resource: &str) -> Result<bool> {
        self.store_result(pakres_store::name::validate(resource).map(|_| ()))?;
        Ok(self.store().exists(resource))
    }
}

impl Resolver {
    /// Complete raw byte sequence of one resource in `package`.
    pub fn read_binary<'a>(
        &self,
        package: impl Into<PackageRef<'a>>,
        resource: &str,
    ) -> Result<Vec<u8>> {
        self.with_package(package.into(), |pkg| pkg.read_binary(resource))
    }

    /// Text of one resource, decoded as utf-8 with the strict policy.
    pub fn read_text<'a>(
        &self,
        package: impl Into<PackageRef<'a>>,
        resource: &str,
    ) -> Result<String> {
        self.with_package(package.into(), |pkg| pkg.read_text(resource))
    }

    /// Text of one resource under explicit decoding parameters.
    pub fn read_text_with<'a>(
        &self,
        package: impl Into<PackageRef<'a>>,
        resource: &str,
        options: TextOptions,
    ) -> Result<String> {
        self.with_package(package.into(), |pkg| pkg.read_text_with(resource, options))
    }

    /// Byte stream over one resource.
    pub fn open_binary<'a>(
        &self,
        package: impl Into<PackageRef<'a>>,
        resource: &str,
    ) -> Result<Box<dyn Read + Send>> {
        self.with_package(package.into(), |pkg| pkg.open_binary(resource))
    }

    /// Whether `resource` names a file in `package`.
    pub fn is_resource<'a>(
        &self,
        package: impl Into<PackageRef<'a>>,
        resource: &str,
    ) -> Result<bool> {
        self.with_package(package.into(), |pkg| pkg.is_resource(resource))
    }
}
