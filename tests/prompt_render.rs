use chrono::NaiveTime;
use promptr::config::Colors;
use promptr::context::PromptContext;
use promptr::palette::Palette;
use promptr::prompt;

fn context(superuser: bool, pipestatus: Vec<i32>) -> PromptContext {
    PromptContext {
        user: "nora".to_string(),
        host: "baltic".to_string(),
        cwd: "~/w/promptr".to_string(),
        superuser,
        pipestatus,
        clock: NaiveTime::from_hms_opt(23, 59, 7).unwrap(),
    }
}

fn plain_palette() -> Palette {
    console::set_colors_enabled(false);
    Palette::default()
}

#[test]
fn test_normal_prompt_layout() {
    let out = prompt::render(&context(false, vec![0, 141, 0]), &plain_palette());
    assert_eq!(out, "[23:59:07] nora@baltic ~/w/promptr[0|141|0] \n> ");
}

#[test]
fn test_normal_prompt_without_failures() {
    for statuses in [Vec::new(), vec![0], vec![0, 0]] {
        let out = prompt::render(&context(false, statuses), &plain_palette());
        assert_eq!(out, "[23:59:07] nora@baltic ~/w/promptr \n> ");
    }
}

#[test]
fn test_superuser_prompt_layout() {
    let out = prompt::render(&context(true, vec![1]), &plain_palette());
    assert!(out.starts_with("nora@baltic "));
    assert!(out.ends_with("# "));
    // the superuser branch never shows clock or pipestatus
    assert!(!out.contains("23:59:07"));
    assert!(!out.contains('|'));
}

#[test]
fn test_unconfigured_root_color_matches_cwd_color() {
    let palette = Palette::from_config(&Colors::default());
    let root = palette
        .root_cwd()
        .clone()
        .force_styling(true)
        .apply_to("~")
        .to_string();
    // falls back to the cwd role's green, never an empty style
    assert!(root.contains("\u{1b}[32m"));
}

#[test]
fn test_identical_inputs_render_identical_bytes() {
    let palette = plain_palette();
    let ctx = context(false, vec![2, 0]);
    let first = prompt::render(&ctx, &palette);
    let second = prompt::render(&ctx, &palette);
    assert_eq!(first, second);
}
