fn main() -> anyhow::Result<()> {
    search_ui_builder::run()
}
