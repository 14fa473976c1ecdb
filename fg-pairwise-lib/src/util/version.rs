pub mod built_info {
    use lazy_static::lazy_static;
    include!(concat!(env!("OUT_DIR"), "/built.rs"));

    /// Get a software version string including
    ///   - Cargo package version
    ///   - the build profile, when not a release build
    fn get_software_version() -> String {
        match PROFILE {
            "release" => PKG_VERSION.to_string(),
            profile => format!("{PKG_VERSION}-{profile}"),
        }
    }

    lazy_static! {
        /// Version of the software
        pub static ref VERSION: String = get_software_version();
    }
}

#[cfg(test)]
pub mod tests {
    use rstest::rstest;

    use super::built_info::{PKG_VERSION, VERSION};

    #[rstest]
    fn test_version_starts_with_package_version() {
        assert!(VERSION.starts_with(PKG_VERSION));
    }
}
