use console::Style;

use crate::context::PromptContext;
use crate::palette::Palette;

/// Render the prompt for the given shell state. Total: every input produces a
/// well-formed string, and identical inputs produce identical bytes.
pub fn render(ctx: &PromptContext, palette: &Palette) -> String {
    if ctx.superuser {
        render_superuser(ctx, palette)
    } else {
        render_normal(ctx, palette)
    }
}

/// Root keeps it short: `user@host cwd# `, with the root cwd color when one
/// is configured.
fn render_superuser(ctx: &PromptContext, palette: &Palette) -> String {
    format!(
        "{}@{} {}# ",
        ctx.user,
        ctx.host,
        palette.root_cwd().apply_to(&ctx.cwd)
    )
}

fn render_normal(ctx: &PromptContext, palette: &Palette) -> String {
    format!(
        "[{}] {} {}{} \n> ",
        ctx.clock.format("%H:%M:%S"),
        palette.host.apply_to(format!("{}@{}", ctx.user, ctx.host)),
        palette.cwd.apply_to(&ctx.cwd),
        pipestatus_segment(&ctx.pipestatus, &palette.status),
    )
}

/// Failures are advertised, success is not: an empty or all-zero pipeline
/// renders as nothing. Otherwise every code appears in stage order, joined
/// with `|` inside brackets, digits bold and punctuation plain.
pub fn pipestatus_segment(statuses: &[i32], style: &Style) -> String {
    if statuses.iter().all(|&code| code == 0) {
        return String::new();
    }
    let digits = style.clone().bold();
    let mut segment = style.apply_to("[").to_string();
    for (i, code) in statuses.iter().enumerate() {
        if i > 0 {
            segment.push_str(&style.apply_to("|").to_string());
        }
        segment.push_str(&digits.apply_to(code).to_string());
    }
    segment.push_str(&style.apply_to("]").to_string());
    segment
}
