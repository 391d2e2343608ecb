//! Helper tool to preview the derived harmony palettes for a seed color

#[cfg(feature = "tool-palette-gen")]
mod palette_gen;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "tool-palette-gen")]
    {
        palette_gen::run()?;
    }
    Ok(())
}
