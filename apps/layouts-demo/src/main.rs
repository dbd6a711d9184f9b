mod screens;

use anyhow::{Context, Result};
use ravel_ui_layout::DEFAULT_ROW_COUNT;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let rows = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("ROWS must be a non-negative integer, got {arg:?}"))?,
        None => DEFAULT_ROW_COUNT,
    };

    screens::topic_chips(rows).context("laying out topic chips")?;
    screens::photographer_card().context("laying out photographer card")?;
    screens::body_content().context("laying out body content")?;
    screens::image_list(5).context("laying out image list")?;
    Ok(())
}
