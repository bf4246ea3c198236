pub fn init_script() -> &'static str {
    r#"function fish_prompt
    command promptr prompt --pipestatus $pipestatus
end
"#
}
