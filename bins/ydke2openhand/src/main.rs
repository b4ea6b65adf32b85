#[macro_use]
extern crate log;
extern crate env_logger;
extern crate openhand;
extern crate serde_json;

use openhand::ydke;
use std::env;
use std::process;

fn main() {
    let _ = env_logger::try_init();
    let args: Vec<String> = env::args().collect();
    assert!(args.len() > 1, "Expected 1 argument, a ydke:// deck code URL");
    let url = &args[1];
    info!("Decoding deck code {}", url);
    match ydke::parse_url(url) {
        Ok(deck) => {
            info!(
                "Decoded {} main, {} extra, {} side ids",
                deck.main.len(),
                deck.extra.len(),
                deck.side.len()
            );
            let json = serde_json::to_string_pretty(&deck).expect("this can't fail");
            println!("{}", json);
        }
        Err(e) => {
            error!("Failed to decode deck code: {}", e);
            process::exit(1);
        }
    }
}
