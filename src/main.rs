fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    microstrip::app::run()
}
