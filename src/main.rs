fn main() -> anyhow::Result<()> {
    air_mouse_bridge::run()
}
