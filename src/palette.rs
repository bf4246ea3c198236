use console::{Color, Style};

use crate::config::Colors;

/// Styles for each prompt role, resolved once from configuration.
pub struct Palette {
    /// Accent for the `user@host` segment.
    pub host: Style,
    /// Working-directory segment.
    pub cwd: Style,
    /// Working directory when running as root; `None` means fall back to `cwd`.
    pub cwd_root: Option<Style>,
    /// Pipestatus segment; digits additionally get the bold variant.
    pub status: Style,
}

impl Palette {
    pub fn from_config(colors: &Colors) -> Self {
        Self {
            host: role_style("host", colors.host.as_deref(), Color::Cyan),
            cwd: role_style("cwd", colors.cwd.as_deref(), Color::Green),
            cwd_root: colors.cwd_root.as_deref().and_then(|name| {
                let style = parse_style(name);
                if style.is_none() {
                    log::debug!("unknown color {name:?} for role cwd_root, falling back to cwd");
                }
                style
            }),
            status: role_style("status", colors.status.as_deref(), Color::Red),
        }
    }

    /// Style for the working directory in the superuser branch.
    pub fn root_cwd(&self) -> &Style {
        self.cwd_root.as_ref().unwrap_or(&self.cwd)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&Colors::default())
    }
}

fn role_style(role: &str, name: Option<&str>, default: Color) -> Style {
    match name {
        Some(name) => parse_style(name).unwrap_or_else(|| {
            log::debug!("unknown color {name:?} for role {role}, using default");
            Style::new().fg(default)
        }),
        None => Style::new().fg(default),
    }
}

/// Parse a color name like `green` or `bright-blue` into a style.
fn parse_style(name: &str) -> Option<Style> {
    let (base, bright) = match name.strip_prefix("bright-") {
        Some(rest) => (rest, true),
        None => (name, false),
    };
    let color = match base {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        _ => return None,
    };
    let style = Style::new().fg(color);
    Some(if bright { style.bright() } else { style })
}
