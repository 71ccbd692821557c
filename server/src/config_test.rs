use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("   ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_trimmed_number() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
    assert_eq!(parse_port(Some("-1")), Err(ConfigError::InvalidPort("-1".into())));
}

#[test]
fn parse_host_defaults_to_unspecified() {
    assert_eq!(parse_host(None), Ok(DEFAULT_HOST));
    assert_eq!(parse_host(Some("")), Ok(DEFAULT_HOST));
}

#[test]
fn parse_host_accepts_v4_and_v6() {
    assert_eq!(parse_host(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert_eq!(parse_host(Some("::1")), Ok("::1".parse().unwrap()));
}

#[test]
fn parse_host_rejects_hostnames() {
    assert_eq!(parse_host(Some("localhost")), Err(ConfigError::InvalidHost("localhost".into())));
}

#[test]
fn socket_addr_combines_host_and_port() {
    let cfg = ServerConfig { host: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 4000 };
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:4000");
}

#[test]
fn default_binds_all_interfaces_on_3000() {
    assert_eq!(ServerConfig::default().socket_addr().to_string(), "0.0.0.0:3000");
}

// All HOST/PORT mutations live in this one test to avoid races with parallel tests.
#[test]
fn from_env_reads_host_and_port() {
    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3100");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:3100");

    unsafe { std::env::set_var("PORT", "not-a-port") };
    assert_eq!(ServerConfig::from_env(), Err(ConfigError::InvalidPort("not-a-port".into())));

    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
    assert_eq!(ServerConfig::from_env(), Ok(ServerConfig::default()));
}
