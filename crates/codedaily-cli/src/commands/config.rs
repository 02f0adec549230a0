use clap::Subcommand;
use codedaily_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a single config value
    Get { key: String },
    /// Set a config value and persist it
    Set { key: String, value: String },
    /// Print the whole configuration as TOML
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let cfg = Config::load_or_default();
            match cfg.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = Config::load_or_default();
            cfg.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            let cfg = Config::load_or_default();
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
    }
    Ok(())
}
