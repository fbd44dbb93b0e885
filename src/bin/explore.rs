use std::io::Read;

use miette::*;

use grid_explorer::explore;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .into_diagnostic()
        .wrap_err("failed to read the board from stdin")?;
    let result = explore::process(&input)?;
    println!("{}", result);
    Ok(())
}
