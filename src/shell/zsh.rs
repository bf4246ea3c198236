pub fn init_script() -> &'static str {
    r#"__promptr_render() {
    PROMPT="$(promptr prompt --pipestatus "${pipestatus[@]}")"
}
typeset -ag precmd_functions
if [[ -z "${precmd_functions[(r)__promptr_render]}" ]]; then
    precmd_functions+=(__promptr_render)
fi
"#
}
