use coffer_config::{BuildConfig, ContentKey, Error, Product};
use pretty_assertions::assert_eq;

fn key(hex: &str) -> ContentKey {
    hex.parse().unwrap()
}

const BUILD_CONFIG: &str = "\
build-name = 30414patch2.0.0
build-playbuild-installer = ngdptool_casc2
build-product = Hero
build-uid = hero
root = 43a856a828702f20020abc0f7b0dbd34
install = 5a9b2f5e6bbe7692a55fb2c0b2b3bd35
download = 9a1d9e2b08e126fda9a08458b2691f2f
encoding = 867ba40b1bbed3b5a3c24e79e4a9e7b2 e2a3bb96408244386a7d27e6fa37ae53
encoding-size = 12025420 12031016
patch = 08cad297dd128b0373afdbceccc9e149
";

#[test]
fn parses_full_build_file() {
    let expected = BuildConfig {
        product: Some(Product::HeroesOfTheStorm),
        build_number: 30414,
        root: Some(key("43a856a828702f20020abc0f7b0dbd34")),
        patch: Some(key("08cad297dd128b0373afdbceccc9e149")),
        download: Some(key("9a1d9e2b08e126fda9a08458b2691f2f")),
        install: Some(key("5a9b2f5e6bbe7692a55fb2c0b2b3bd35")),
        encoding: (
            key("867ba40b1bbed3b5a3c24e79e4a9e7b2"),
            key("e2a3bb96408244386a7d27e6fa37ae53"),
        ),
    };

    assert_eq!(BuildConfig::parse(BUILD_CONFIG).unwrap(), expected);
}

#[test]
fn encoding_is_required() {
    let text = "\
build-product = Hero
root = 43a856a828702f20020abc0f7b0dbd34
";
    assert_eq!(
        BuildConfig::parse(text).unwrap_err(),
        Error::MissingField("encoding")
    );
}

#[test]
fn encoding_must_hold_exactly_two_keys() {
    let text = "encoding = 867ba40b1bbed3b5a3c24e79e4a9e7b2\n";
    assert_eq!(
        BuildConfig::parse(text).unwrap_err(),
        Error::WrongKeyCount {
            field: "encoding",
            expected: 2,
            actual: 1,
        }
    );

    let text = "encoding = aa bb cc\n";
    assert!(matches!(
        BuildConfig::parse(text),
        Err(Error::WrongKeyCount { actual: 3, .. })
    ));
}

#[test]
fn unknown_product_is_a_hard_failure() {
    let text = "\
build-product = Nova
encoding = 867ba40b1bbed3b5a3c24e79e4a9e7b2 e2a3bb96408244386a7d27e6fa37ae53
";
    assert_eq!(
        BuildConfig::parse(text).unwrap_err(),
        Error::UnknownProduct("Nova".to_string())
    );
}

#[test]
fn short_product_token_never_matches() {
    let text = "\
build-product = WoW
encoding = 867ba40b1bbed3b5a3c24e79e4a9e7b2 e2a3bb96408244386a7d27e6fa37ae53
";
    assert!(matches!(
        BuildConfig::parse(text),
        Err(Error::UnknownProduct(_))
    ));
}

#[test]
fn build_name_without_build_number_fails() {
    let text = "\
build-name = B29
encoding = 867ba40b1bbed3b5a3c24e79e4a9e7b2 e2a3bb96408244386a7d27e6fa37ae53
";
    assert_eq!(
        BuildConfig::parse(text).unwrap_err(),
        Error::NoBuildNumber("B29".to_string())
    );
}

#[test]
fn missing_optional_fields_leave_defaults() {
    let text = "encoding = 867ba40b1bbed3b5a3c24e79e4a9e7b2 e2a3bb96408244386a7d27e6fa37ae53\n";
    let config = BuildConfig::parse(text).unwrap();

    assert_eq!(config.product, None);
    assert_eq!(config.build_number, 0);
    assert_eq!(config.root, None);
    assert_eq!(config.patch, None);
    assert_eq!(config.download, None);
    assert_eq!(config.install, None);
}
