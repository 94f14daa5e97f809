//! Plain-text report of a resolved configuration.

use asciifarm_core::ResolvedConfig;
use std::fmt::Write;

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

pub fn render(config: &ResolvedConfig) -> String {
    let mut out = String::new();
    let log_file = config
        .log_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());

    let rows = [
        ("name", config.name.clone()),
        ("socket", config.socket_kind.to_string()),
        ("address", config.address.to_string()),
        ("colours", on_off(config.colours).to_string()),
        ("reset style", on_off(config.style.reset_style_on_change).to_string()),
        (
            "blink bright background",
            on_off(config.style.blink_bright_background).to_string(),
        ),
        ("log file", log_file),
        ("charmap", format!("{} glyphs", config.charmap.mapping.len())),
        ("keybindings", format!("{} keys", config.keybindings.len())),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{label}: {value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciifarm_core::{Address, Charmap, Keybindings, SocketKind, StyleOptions};
    use std::path::PathBuf;

    #[test]
    fn test_render_lists_every_field() {
        let config = ResolvedConfig {
            name: "~alice".to_string(),
            socket_kind: SocketKind::Abstract,
            address: Address::Abstract(b"\0rustifarm".to_vec()),
            keybindings: Keybindings::default(),
            charmap: Charmap::default(),
            colours: false,
            log_file: Some(PathBuf::from("/tmp/game.log")),
            style: StyleOptions {
                reset_style_on_change: true,
                blink_bright_background: false,
            },
        };

        let text = render(&config);
        assert!(text.contains("name: ~alice\n"));
        assert!(text.contains("socket: abstract\n"));
        assert!(text.contains("address: @rustifarm\n"));
        assert!(text.contains("colours: off\n"));
        assert!(text.contains("reset style: on\n"));
        assert!(text.contains("blink bright background: off\n"));
        assert!(text.contains("log file: /tmp/game.log\n"));
        assert!(text.contains("charmap: 0 glyphs\n"));
        assert!(text.contains("keybindings: 0 keys\n"));
    }
}
