//! Stage order listing

use anyhow::Result;
use look_ops::STAGE_ORDER;

pub fn run(verbose: u8) -> Result<()> {
    for (i, stage) in STAGE_ORDER.iter().enumerate() {
        if verbose > 0 {
            println!("{:>2}. {:<11} (identity {})", i + 1, stage.to_string(), stage.identity_value());
        } else {
            println!("{:>2}. {}", i + 1, stage);
        }
    }
    println!("    clamp to [0, 1]");
    Ok(())
}
