//! `randomlock` binary entry point.

fn main() -> anyhow::Result<()> {
    randomlock::run()
}
