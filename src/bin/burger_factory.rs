use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use colored::Colorize;
use creational_patterns::config::FactoryStyle;
use creational_patterns::factory::parse_extras;
use creational_patterns::Config;

fn prompt(question: &str) -> io::Result<String> {
    print!("{question} ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Usage: burger_factory [config.toml] [class|record]
    let args: Vec<String> = env::args().collect();
    let mut config = Config::load_or_default(args.get(1).map(Path::new))?;
    if let Some(style) = args.get(2) {
        config.factory.style = style.parse::<FactoryStyle>()?;
    }

    let adapter = config.logger()?;
    adapter
        .logger()
        .write_log(&format!("Using {} restaurants", config.factory.style));
    let dispatcher = config.factory.style.dispatcher();

    let kind = prompt(&format!(
        "What burger do you want? ({})",
        dispatcher.keys().join("/")
    ))?;

    let restaurant = match dispatcher.resolve(&kind) {
        Ok(restaurant) => restaurant,
        Err(err) => {
            println!("{}", err.to_string().red());
            return Ok(());
        }
    };

    let selected = prompt(&format!(
        "What toppings do you want to add?, we offer: {}",
        restaurant.available_extras().join(", ")
    ))?;

    restaurant.order_burger(&parse_extras(&selected), &adapter);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", format!("Error: {err}").red());
        process::exit(1);
    }
}
