use crate::component::ImageShuffler;
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;

pub fn run_image_shuffler(term: &Term, config: &mut Config) -> Result<()> {
    let mut shuffler = ImageShuffler::new(config);

    if let Err(e) = shuffler.run() {
        eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
        pause(term)?;
    }

    Ok(())
}
