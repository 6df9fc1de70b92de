// Module exports for CLI subcommands
//
// Each module handles one command; main.rs only parses arguments and
// dispatches here.

pub mod search;
