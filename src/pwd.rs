use std::path::Path;

/// Prettify a working directory for display: contract the home directory to
/// `~`, then abbreviate every component except the last to `dir_length`
/// characters (a leading dot on hidden directories survives, so `.config`
/// becomes `.c`). `dir_length == 0` keeps components whole.
pub fn pretty_path(cwd: &Path, home: Option<&Path>, dir_length: usize) -> String {
    let display = match home {
        Some(home) if cwd == home => return "~".to_string(),
        Some(home) => match cwd.strip_prefix(home) {
            Ok(rest) => format!("~/{}", rest.display()),
            Err(_) => cwd.display().to_string(),
        },
        None => cwd.display().to_string(),
    };
    if dir_length == 0 {
        return display;
    }
    abbreviate(&display, dir_length)
}

fn abbreviate(path: &str, keep: usize) -> String {
    let parts: Vec<&str> = path.split('/').collect();
    let last = parts.len() - 1;
    let mut out = Vec::with_capacity(parts.len());
    for (i, part) in parts.iter().enumerate() {
        if i == last || part.is_empty() || *part == "~" {
            out.push((*part).to_string());
        } else if let Some(hidden) = part.strip_prefix('.') {
            out.push(format!(".{}", truncate(hidden, keep)));
        } else {
            out.push(truncate(part, keep).to_string());
        }
    }
    out.join("/")
}

fn truncate(part: &str, keep: usize) -> &str {
    match part.char_indices().nth(keep) {
        Some((idx, _)) => &part[..idx],
        None => part,
    }
}
