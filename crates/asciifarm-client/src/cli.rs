//! Command-line surface of the client

use asciifarm_core::loaders::BUILTIN_CHARMAPS;
use asciifarm_core::{ColourPreference, ResolveRequest, SocketKind};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const GAMEPLAY_HELP: &str = "\
Gameplay information:
    Walk around and explore the rooms.
    Kill the goblins and plant the seeds.";

fn characters_help() -> String {
    format!(
        "The JSON file with the character mappings for the graphics, or one of the \
         built-in names: {} [default: default]",
        BUILTIN_CHARMAPS.join(", ")
    )
}

/// The client to AsciiFarm. Run this to connect to the server.
#[derive(Parser, Debug)]
#[command(name = "asciifarm", version, about, after_help = GAMEPLAY_HELP)]
pub struct Cli {
    /// Your player name (must be unique!). Defaults to your username on inet
    /// sockets and to a tilde name (~username) on unix and abstract sockets.
    #[arg(short, long)]
    pub name: Option<String>,

    /// The address of the socket: a name for 'abstract', a filename for
    /// 'unix', 'host:port' for 'inet'. The default depends on the socket type.
    #[arg(short, long)]
    pub address: Option<String>,

    /// The socket type [default: abstract]
    #[arg(short, long, value_enum)]
    pub socket: Option<SocketArg>,

    /// The JSON file with the keybinding configuration [default: default]
    #[arg(short, long)]
    pub keybindings: Option<String>,

    #[arg(short = 'c', long, help = characters_help())]
    pub characters: Option<String>,

    /// All game messages will be written to this file
    #[arg(short = 'o', long)]
    pub logfile: Option<PathBuf>,

    /// Reset the style when it changes. Useful on some terminals
    #[arg(long)]
    pub reset_style: bool,

    /// Use the blink attribute to make backgrounds brighter, for terminals
    /// without bright backgrounds
    #[arg(long)]
    pub blink_bright_background: bool,

    /// Enable colours
    #[arg(short = 'l', long, visible_alias = "colors", conflicts_with = "nocolours")]
    pub colours: bool,

    /// Disable colours
    #[arg(short = 'b', long, visible_alias = "nocolors")]
    pub nocolours: bool,

    /// Settings file to use instead of ~/.config/asciifarm/client.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SocketArg {
    /// Abstract unix domain socket
    Abstract,
    /// Unix domain socket
    Unix,
    /// Inet (TCP) socket
    Inet,
}

impl From<SocketArg> for SocketKind {
    fn from(arg: SocketArg) -> Self {
        match arg {
            SocketArg::Abstract => SocketKind::Abstract,
            SocketArg::Unix => SocketKind::Unix,
            SocketArg::Inet => SocketKind::Inet,
        }
    }
}

impl Cli {
    /// Colour preference expressed by the colour flags.
    pub fn colour_preference(&self) -> ColourPreference {
        match (self.colours, self.nocolours) {
            (true, _) => ColourPreference::Enabled,
            (false, true) => ColourPreference::Disabled,
            (false, false) => ColourPreference::Unset,
        }
    }

    /// Overlay the flags that were given onto `request`.
    pub fn apply_to(&self, request: &mut ResolveRequest) {
        if let Some(socket) = self.socket {
            let kind = SocketKind::from(socket);
            // An address from a lower layer was written for that layer's kind.
            if kind != request.socket_kind && self.address.is_none() {
                request.address = None;
            }
            request.socket_kind = kind;
        }
        if let Some(address) = &self.address {
            request.address = Some(address.clone());
        }
        if let Some(name) = &self.name {
            request.name = Some(name.clone());
        }
        if let Some(keybindings) = &self.keybindings {
            request.keybindings = keybindings.clone();
        }
        if let Some(characters) = &self.characters {
            request.charmap = characters.clone();
        }
        if let Some(logfile) = &self.logfile {
            request.log_file = Some(logfile.clone());
        }
        match self.colour_preference() {
            ColourPreference::Unset => {}
            pref => request.colours = pref,
        }
        request.style.reset_style_on_change |= self.reset_style;
        request.style.blink_bright_background |= self.blink_bright_background;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("asciifarm").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_leave_request_untouched() {
        let mut request = ResolveRequest::default();
        parse(&[]).apply_to(&mut request);
        assert_eq!(request, ResolveRequest::default());
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&[
            "-n", "bob", "-a", "example.com:8080", "-s", "inet", "-k", "keys.json", "-c",
            "emoji", "-o", "game.log",
        ]);
        let mut request = ResolveRequest::default();
        cli.apply_to(&mut request);

        assert_eq!(request.name.as_deref(), Some("bob"));
        assert_eq!(request.address.as_deref(), Some("example.com:8080"));
        assert_eq!(request.socket_kind, SocketKind::Inet);
        assert_eq!(request.keybindings, "keys.json");
        assert_eq!(request.charmap, "emoji");
        assert_eq!(request.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_colour_flags() {
        assert_eq!(parse(&[]).colour_preference(), ColourPreference::Unset);
        assert_eq!(parse(&["-l"]).colour_preference(), ColourPreference::Enabled);
        assert_eq!(parse(&["--colors"]).colour_preference(), ColourPreference::Enabled);
        assert_eq!(parse(&["-b"]).colour_preference(), ColourPreference::Disabled);
        assert_eq!(
            parse(&["--nocolors"]).colour_preference(),
            ColourPreference::Disabled
        );
    }

    #[test]
    fn test_colour_flags_conflict() {
        let result = Cli::try_parse_from(["asciifarm", "--colours", "--nocolours"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_colour_flag_overrides_settings() {
        let mut request = ResolveRequest {
            colours: ColourPreference::Disabled,
            ..Default::default()
        };
        parse(&["--colours"]).apply_to(&mut request);
        assert_eq!(request.colours, ColourPreference::Enabled);
    }

    #[test]
    fn test_style_flags_combine_with_settings() {
        let mut request = ResolveRequest::default();
        request.style.reset_style_on_change = true;
        parse(&["--blink-bright-background"]).apply_to(&mut request);
        assert!(request.style.reset_style_on_change);
        assert!(request.style.blink_bright_background);
    }

    #[test]
    fn test_socket_switch_drops_address_for_other_kind() {
        let mut request = ResolveRequest {
            socket_kind: SocketKind::Inet,
            address: Some("farm.example.org:9021".to_string()),
            ..Default::default()
        };
        parse(&["-s", "unix"]).apply_to(&mut request);
        assert_eq!(request.socket_kind, SocketKind::Unix);
        assert!(request.address.is_none());
    }

    #[test]
    fn test_socket_switch_keeps_explicit_address() {
        let mut request = ResolveRequest {
            socket_kind: SocketKind::Inet,
            address: Some("farm.example.org:9021".to_string()),
            ..Default::default()
        };
        parse(&["-s", "unix", "-a", "/run/farm.socket"]).apply_to(&mut request);
        assert_eq!(request.address.as_deref(), Some("/run/farm.socket"));
    }

    #[test]
    fn test_same_socket_kind_keeps_lower_layer_address() {
        let mut request = ResolveRequest {
            socket_kind: SocketKind::Inet,
            address: Some("farm.example.org:9021".to_string()),
            ..Default::default()
        };
        parse(&["-s", "inet"]).apply_to(&mut request);
        assert_eq!(request.address.as_deref(), Some("farm.example.org:9021"));
    }

    #[test]
    fn test_characters_help_lists_every_builtin() {
        let help = characters_help();
        for name in BUILTIN_CHARMAPS {
            assert!(help.contains(name), "help lacks {name}");
        }
    }

    #[test]
    fn test_unknown_socket_kind_rejected() {
        let result = Cli::try_parse_from(["asciifarm", "--socket", "tcp"]);
        assert!(result.is_err());
    }
}
