fn main() -> anyhow::Result<()> {
    tenpin::run()
}
