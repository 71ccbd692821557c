use std::error::Error as _;

use super::*;

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::InvalidPort("abc".into()).to_string(), "invalid PORT: \"abc\"");
    assert_eq!(ConfigError::InvalidHost("nope".into()).to_string(), "invalid HOST: \"nope\"");
}

#[test]
fn config_error_converts_transparently() {
    let err: ServerError = ConfigError::InvalidPort("99999".into()).into();
    assert!(matches!(err, ServerError::Config(ConfigError::InvalidPort(_))));
    assert_eq!(err.to_string(), "invalid PORT: \"99999\"");
}

#[test]
fn bind_error_includes_address() {
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    let err = ServerError::Bind { addr, source: std::io::Error::from(std::io::ErrorKind::AddrInUse) };
    assert!(err.to_string().starts_with("failed to bind 127.0.0.1:3000: "));
}

#[test]
fn leptos_error_keeps_source() {
    let err = ServerError::from(LeptosConfigError::ConfigNotFound);
    assert!(err.to_string().starts_with("leptos configuration: "));
    let source = err.source().expect("leptos error is the source");
    assert!(source.downcast_ref::<LeptosConfigError>().is_some());
}
