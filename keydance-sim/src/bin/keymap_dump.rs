use clap::Parser;

use keydance_core::{default_keymap, Layer};
use keydance_sim::action_label;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the keydance layer tables", long_about = None)]
struct Args {
    /// Single layer to print (all layers when omitted)
    layer: Option<String>,
}

fn main() {
    let args = Args::parse();
    let selected: Option<Layer> = match args.layer.as_deref().map(str::parse) {
        Some(Ok(layer)) => Some(layer),
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        None => None,
    };

    let keymap = default_keymap();
    for layer in Layer::ALL {
        if selected.is_some_and(|want| want != layer) {
            continue;
        }
        println!("[{}]", layer.display_name());
        for row in &keymap[layer.index()] {
            let cells: Vec<String> = row.iter().map(action_label).collect();
            println!("  {}", cells.join(" | "));
        }
        println!();
    }
}
