//! `rlk` - short alias for the `randomlock` binary.

fn main() -> anyhow::Result<()> {
    randomlock::run()
}
