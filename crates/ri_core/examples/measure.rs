//! Measure Providence to South Kingstown and print the result line.
//!
//! Run with: `cargo run -p ri_core --example measure`

use ri_core::geo::Location;
use ri_core::interaction::InteractionMachine;

fn main() {
    let providence = Location::new(41.8240, -71.4128);
    let south_kingstown = Location::new(41.3083, -71.4293);

    let mut machine: InteractionMachine<()> = InteractionMachine::default();
    machine.click(providence);
    machine.click(south_kingstown);

    match machine.selection().measurement() {
        Some(measurement) => {
            println!(
                "{:.2} miles from ({}, {}) to ({}, {})",
                measurement.miles,
                measurement.from.lat,
                measurement.from.lng,
                measurement.to.lat,
                measurement.to.lng
            );
            println!("{}", measurement.display_text());
        }
        None => println!("Selection incomplete"),
    }
}
