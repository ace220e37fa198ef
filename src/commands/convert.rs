use anyhow::{Result, bail};
use tracing::info;

use crate::cli::ConvertArgs;
use crate::scaling::convert_unit;

pub fn run(args: ConvertArgs) -> Result<()> {
    if !args.amount.is_finite() {
        bail!("amount must be a finite number, got {}", args.amount);
    }

    let converted = convert_unit(args.amount, &args.from, &args.to, args.specific_gravity);

    info!(
        amount = args.amount,
        from = %args.from,
        to = %args.to,
        specific_gravity = args.specific_gravity.unwrap_or(1.0),
        converted,
        "unit conversion"
    );
    println!("{converted} {}", args.to);
    Ok(())
}
