use clap::Command;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::{self, Write};

/// Groups shown by `numprobe commands`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    Core,
    Lookup,
}

impl CommandCategory {
    /// Returns all category variants in display order.
    pub fn all() -> &'static [CommandCategory] {
        &[CommandCategory::Lookup, CommandCategory::Core]
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandCategory::Core => write!(f, "core"),
            CommandCategory::Lookup => write!(f, "lookup"),
        }
    }
}

/// Metadata for a registered command.
#[derive(Debug, Clone)]
pub struct CommandMeta {
    pub name: String,
    pub category: CommandCategory,
    pub description: String,
    pub aliases: Vec<String>,
    pub hidden: bool,
    pub command: Command,
}

pub struct CommandRegistry {
    commands: HashMap<String, CommandMeta>,
    root: Command,
}

impl CommandRegistry {
    /// Creates a new registry with the given root command.
    pub fn new(root: Command) -> Self {
        Self {
            commands: HashMap::new(),
            root,
        }
    }

    /// Registers a command. Returns an error if a command with the same name already exists.
    pub fn register(&mut self, meta: CommandMeta) -> crate::errors::Result<()> {
        if self.commands.contains_key(&meta.name) {
            return Err(crate::errors::NumprobeError::Command(format!(
                "duplicate command name: {}",
                meta.name
            )));
        }
        self.commands.insert(meta.name.clone(), meta);
        Ok(())
    }

    /// Returns all commands in the given category, sorted by name.
    pub fn get_by_category(&self, cat: CommandCategory) -> Vec<&CommandMeta> {
        let mut cmds: Vec<&CommandMeta> = self
            .commands
            .values()
            .filter(|m| m.category == cat)
            .collect();
        cmds.sort_by(|a, b| a.name.cmp(&b.name));
        cmds
    }

    /// Writes a human-readable listing of visible commands grouped by category.
    pub fn write_listing<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for cat in CommandCategory::all() {
            let cmds: Vec<_> = self
                .get_by_category(*cat)
                .into_iter()
                .filter(|m| !m.hidden)
                .collect();
            if cmds.is_empty() {
                continue;
            }
            writeln!(out, "\n{}:", cat)?;
            for cmd in cmds {
                let aliases = if cmd.aliases.is_empty() {
                    String::new()
                } else {
                    format!(" (aliases: {})", cmd.aliases.join(", "))
                };
                writeln!(out, "  {:<20} {}{}", cmd.name, cmd.description, aliases)?;
            }
        }
        Ok(())
    }

    /// Writes a JSON listing of visible commands grouped by category.
    pub fn write_listing_json<W: Write>(&self, out: &mut W) -> crate::errors::Result<()> {
        let mut output: BTreeMap<String, Vec<CommandJsonEntry>> = BTreeMap::new();
        for cat in CommandCategory::all() {
            let entries: Vec<CommandJsonEntry> = self
                .get_by_category(*cat)
                .into_iter()
                .filter(|m| !m.hidden)
                .map(|m| CommandJsonEntry {
                    name: m.name.clone(),
                    description: m.description.clone(),
                    aliases: m.aliases.clone(),
                })
                .collect();
            if !entries.is_empty() {
                output.insert(cat.to_string(), entries);
            }
        }
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        Ok(())
    }

    /// Consumes the registry and builds the final clap Command with all subcommands attached.
    pub fn build_root(self) -> Command {
        let mut names: Vec<_> = self.commands.keys().cloned().collect();
        names.sort();
        let mut commands = self.commands;
        let mut root = self.root;
        for name in names {
            if let Some(meta) = commands.remove(&name) {
                root = root.subcommand(meta.command);
            }
        }
        root
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns a sorted list of all registered command names.
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns true if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// JSON-serializable entry for command listing.
#[derive(Debug, Serialize)]
struct CommandJsonEntry {
    name: String,
    description: String,
    aliases: Vec<String>,
}

/// Builder for constructing `CommandMeta` instances from a clap `Command`.
///
/// Name, description, aliases and visibility are read off the command itself,
/// so the listing never disagrees with `--help`.
pub struct CommandBuilder {
    command: Command,
    category: Option<CommandCategory>,
}

impl CommandBuilder {
    pub fn from_clap(cmd: Command) -> Self {
        Self {
            command: cmd,
            category: None,
        }
    }

    /// Sets the command category.
    pub fn category(mut self, cat: CommandCategory) -> Self {
        self.category = Some(cat);
        self
    }

    /// Builds the `CommandMeta`. Defaults category to `Core` if not set.
    pub fn build(self) -> CommandMeta {
        let command = self.command;
        CommandMeta {
            name: command.get_name().to_string(),
            category: self.category.unwrap_or(CommandCategory::Core),
            description: command
                .get_about()
                .map(|s| s.to_string())
                .unwrap_or_default(),
            aliases: command.get_all_aliases().map(|a| a.to_string()).collect(),
            hidden: command.is_hide_set(),
            command,
        }
    }
}
