use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Conf {
    port: u16,
    host: String,
    pub log_format: String,
}

impl Conf {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn new(config_file: Option<String>, port: Option<u16>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("log_format", "full")?;

        // Priority order: defaults, then config file, then environment variables, then CLI
        if let Some(config_file) = config_file {
            builder = builder.add_source(File::with_name(config_file.as_str()));
        }

        let s = builder
            .add_source(Environment::with_prefix("extapimock"))
            .set_override_option("port", port.map(i64::from))?
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_apply_without_a_config_file() {
        let conf = Conf::new(None, None).unwrap();

        assert_eq!(conf.addr(), "127.0.0.1:3000");
        assert_eq!(conf.log_format, "full");
    }

    #[test]
    fn test_cli_port_overrides_the_default() {
        let conf = Conf::new(None, Some(4321)).unwrap();

        assert_eq!(conf.addr(), "127.0.0.1:4321");
    }
}
