pub fn init_script() -> &'static str {
    // Hook must run first in PROMPT_COMMAND so PIPESTATUS still holds the
    // user's pipeline, not a previous hook's.
    r#"__promptr_render() {
    PS1="$(promptr prompt --pipestatus "${PIPESTATUS[@]}")"
}
PROMPT_COMMAND="__promptr_render${PROMPT_COMMAND:+;$PROMPT_COMMAND}"
"#
}
