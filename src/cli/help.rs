//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::sighting::Species;

/// Print help message based on whether a config file exists yet.
pub fn print_smart_help(config_exists: bool) {
    if config_exists {
        print_configured_help();
    } else {
        print_first_time_help();
    }
}

/// Print setup guide for first-time users.
pub fn print_first_time_help() {
    println!("Welcome to fishfind! To get started:");
    println!();
    println!("1. Initialize configuration, then set your database and location:");
    println!("   fishfind config init");
    println!();
    println!("2. Create the sightings table:");
    println!("   fishfind db init");
    println!();
    println!("3. Place the exported classifier next to you as fishModel.onnx,");
    println!("   or set model.path in the config file.");
    println!();
    println!("4. Upload a photo from where you caught the fish:");
    println!("   fishfind upload catch.jpg --lat 41.0082 --lon 28.9784");
    println!();
    println!("5. Find where a species was seen:");
    println!("   fishfind find \"Sea Bass\" --mode nearest");
    println!();
    println!("Run 'fishfind -h' for all options.");
}

/// Print brief usage reminder for configured users.
pub fn print_configured_help() {
    println!("Usage: fishfind <COMMAND> [OPTIONS]");
    println!();
    println!("Example: fishfind find {} --mode latest", Species::Trout);
    println!();
    println!("Run 'fishfind -h' for all options or 'fishfind species' to list species.");
}
