mod bash;
mod fish;
mod zsh;

use anyhow::{Result, bail};

pub fn get_init_script(shell: &str) -> Result<&'static str> {
    match shell {
        "fish" => Ok(fish::init_script()),
        "bash" => Ok(bash::init_script()),
        "zsh" => Ok(zsh::init_script()),
        _ => bail!("unsupported shell: {shell}"),
    }
}
