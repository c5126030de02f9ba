// Project imports
use crate::cli::Cli;

pub const EXIT_USAGE: u8 = 1;

/// TTLs are positive whole seconds.
pub fn parse_ttl(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err("TTL must be greater than 0".to_string()),
        Ok(ttl) => Ok(ttl),
        Err(e) => Err(format!("'{}' is not a valid TTL: {}", value, e)),
    }
}

/// `--help` and `--version` are not failures; anything else is a usage error.
pub fn usage_exit_code(error: &clap::Error) -> u8 {
    if error.use_stderr() {
        EXIT_USAGE
    } else {
        0
    }
}

impl Cli {
    /// Registered domain without a trailing root dot.
    pub fn zone(&self) -> &str {
        self.domain.trim().trim_end_matches('.')
    }

    /// Fully qualified name of the managed record.
    pub fn hostname(&self) -> String {
        match self.subdomain.trim() {
            "" | "@" => self.zone().to_string(),
            subdomain => format!("{}.{}", subdomain.trim_end_matches('.'), self.zone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ProviderKind;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ddns-sync").chain(args.iter().copied()))
    }

    #[test]
    fn parses_positionals() {
        let cli = parse(&["tok", "example.com", "www", "300"]).unwrap();
        assert_eq!(cli.access_token, "tok");
        assert_eq!(cli.ttl, 300);
        assert_eq!(cli.provider, None);
        assert_eq!(cli.hostname(), "www.example.com");
    }

    #[test]
    fn apex_subdomains_map_to_the_domain() {
        let cli = parse(&["tok", "example.com", "@", "60"]).unwrap();
        assert_eq!(cli.hostname(), "example.com");

        let cli = parse(&["tok", "example.com.", "", "60"]).unwrap();
        assert_eq!(cli.hostname(), "example.com");
        assert_eq!(cli.zone(), "example.com");
    }

    #[test]
    fn provider_and_config_flags() {
        let cli = parse(&[
            "--provider",
            "legacy",
            "-c",
            "/etc/ddns-sync.toml",
            "tok",
            "example.com",
            "home",
            "120",
        ])
        .unwrap();
        assert_eq!(cli.provider, Some(ProviderKind::Legacy));
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("/etc/ddns-sync.toml"))
        );
    }

    #[test]
    fn wrong_argument_count_is_a_usage_error() {
        let err = parse(&["tok", "example.com", "www"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), EXIT_USAGE);

        let err = parse(&["tok", "example.com", "www", "300", "extra"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), EXIT_USAGE);
    }

    #[test]
    fn bad_ttl_is_a_usage_error() {
        for ttl in ["0", "-5", "soon"] {
            let err = parse(&["tok", "example.com", "www", ttl]).unwrap_err();
            assert_eq!(usage_exit_code(&err), EXIT_USAGE, "ttl {ttl}");
        }
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 0);
    }

    #[test]
    fn debug_output_hides_the_token() {
        let cli = parse(&["secret-token", "example.com", "www", "300"]).unwrap();
        assert!(!format!("{cli:?}").contains("secret-token"));
    }
}
