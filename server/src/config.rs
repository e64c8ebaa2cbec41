use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "gym-server", about = "Gym API and host for the admin front end")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "GYM_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Directory holding gyms.json and persons.json.
    #[arg(long, env = "GYM_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory with the built client (index.html, pkg/, public/).
    #[arg(long, env = "GYM_CLIENT_DIR", default_value = "./client")]
    pub client_dir: PathBuf,
}
