use env_logger::Env;
use log::error;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if let Err(err) = emojitsu::run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}
