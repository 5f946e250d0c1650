use numprobe_lib::cli::{create_root_command, is_verbose, CommandRegistry};
use numprobe_lib::commands::{dispatch_command, register_commands, CommandContext};
use numprobe_lib::config::Settings;
use numprobe_lib::errors::{handle_command_error, handle_fatal, NumprobeError};

fn main() {
    // Step 1: Load settings (singleton, from env vars)
    let settings = Settings::get();

    // Step 2: Create CommandRegistry with root command and register commands
    let mut registry = CommandRegistry::new(create_root_command());
    if let Err(e) = register_commands(&mut registry) {
        handle_fatal(e);
    }

    // Step 3: Build and parse root command
    let mut root = registry.build_root();
    let matches = root.clone().get_matches();

    // Step 4: Initialize Logger now that --verbose is known
    let verbose = is_verbose(&matches);
    numprobe_lib::logger::set_verbose(verbose);
    numprobe_lib::logger::init(verbose, settings.log_filter.as_deref());

    if let Err(e) = settings.validate() {
        handle_command_error(&e);
        numprobe_lib::output::warning("Falling back to text output.");
    }

    let ctx = CommandContext::new(settings.output_format(matches.get_flag("json")));

    // Dispatch to subcommand handler
    match matches.subcommand() {
        Some((name, sub_matches)) => {
            tracing::debug!(command = name, "Executing command");
            if let Err(e) = dispatch_command(name, sub_matches, &ctx) {
                handle_command_error(&e);
                std::process::exit(1);
            }
        }
        None => {
            // No subcommand — print help
            if let Err(e) = root.print_help().map_err(NumprobeError::from) {
                handle_fatal(e);
            }
        }
    }
}
