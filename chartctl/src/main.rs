mod application;
mod presentation;

fn main() -> anyhow::Result<()> {
    application::run()
}
