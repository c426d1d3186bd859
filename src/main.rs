use clap::Parser;
use gitea_migrate::{gitea_migrate_main, GiteaMigrateCli};
use std::process::exit;

#[tokio::main]
async fn main() {
    println!(concat!(
        env!("CARGO_PKG_NAME"),
        " ",
        env!("CARGO_PKG_VERSION")
    ));
    let _ = dotenv::dotenv();
    let args = GiteaMigrateCli::parse();
    let mut logger = env_logger::builder();
    logger
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .parse_default_env();
    if args.debug {
        // RUST_LOG must not hide the request dumps
        logger.filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Debug);
    }
    logger.init();
    match gitea_migrate_main(args).await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            log::error!("{e}");
            exit(1);
        }
    };
}
