//! Runtime configuration for the `sieve` binary.
//!
//! Every option can come from the command line or the environment:
//!
//! | Flag | Env | Default |
//! |---|---|---|
//! | `--addr` | `SIEVE_ADDR` | `0.0.0.0:8000` |
//! | `--log`  | `SIEVE_LOG`  | `info` |

use std::net::SocketAddr;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "sieve", version, about = "Request-validation demo API")]
pub struct Config {
    /// Socket address to listen on.
    #[arg(long, env = "SIEVE_ADDR", default_value = "0.0.0.0:8000")]
    pub addr: SocketAddr,

    /// Log filter directive, e.g. `info` or `sieve=debug`.
    #[arg(long, env = "SIEVE_LOG", default_value = "info")]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let config = Config::try_parse_from(["sieve"]).unwrap();
        assert_eq!(config.log, "info");
        assert_eq!(config.addr.port(), 8000);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from(["sieve", "--addr", "127.0.0.1:9000", "--log", "debug"]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.log, "debug");
    }

    #[test]
    fn rejects_malformed_address() {
        assert!(Config::try_parse_from(["sieve", "--addr", "nowhere"]).is_err());
    }
}
