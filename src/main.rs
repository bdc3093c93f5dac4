fn main() -> anyhow::Result<()> {
    itemflow_lib::run()
}
